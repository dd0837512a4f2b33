//! Entity structs for the persisted survey template.
//!
//! The on-disk document is a single `Survey`. Field order in each struct
//! matches the order written to the template file.

mod question;
mod section;
mod survey;

pub use question::Question;
pub use section::Section;
pub use survey::Survey;
