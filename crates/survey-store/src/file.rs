//! Template file I/O.
//!
//! The whole document is read at startup and rewritten in full on every save.
//! Writes go straight to the target path (truncate + write), so a crash
//! mid-write can leave a partial file.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use survey_core::Survey;

use crate::error::StoreError;

const INDENT: &[u8] = b"    ";

/// Read and parse the template file.
///
/// # Errors
///
/// Returns `StoreError::Read` if the file is missing or unreadable and
/// `StoreError::Parse` if it is not a valid survey document.
pub fn read_template(path: &Path) -> Result<Survey, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a survey the way it is stored on disk (4-space indentation, no
/// trailing newline).
///
/// # Errors
///
/// Returns `StoreError::Serialize` if serialization fails.
pub fn render_template(survey: &Survey) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    survey
        .serialize(&mut serializer)
        .map_err(StoreError::Serialize)?;
    Ok(buf)
}

/// Overwrite the template file with the full document.
///
/// # Errors
///
/// Returns `StoreError::Serialize` or `StoreError::Write`.
pub fn write_template(path: &Path, survey: &Survey) -> Result<(), StoreError> {
    let bytes = render_template(survey)?;
    fs::write(path, bytes).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
