//! # survey-store
//!
//! The template store for the survey server.
//!
//! Holds the single survey document in memory, loads it from a JSON file at
//! startup, and rewrites the whole file after every mutation. Sections are
//! looked up by exact name (first match); questions by zero-based position.

pub mod error;
pub mod file;
mod lookup;
mod questions;
mod sections;
mod store;

pub use error::StoreError;
pub use store::TemplateStore;
