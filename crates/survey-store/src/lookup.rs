//! Linear-scan lookups over the section list.

use survey_core::Section;

use crate::error::StoreError;

/// Position of the first section named exactly `name` (case-sensitive).
pub(crate) fn section_position(sections: &[Section], name: &str) -> Result<usize, StoreError> {
    sections
        .iter()
        .position(|section| section.section == name)
        .ok_or(StoreError::SectionNotFound)
}

/// Validate a caller-supplied question index against a list length.
pub(crate) fn question_slot(len: usize, index: i64) -> Result<usize, StoreError> {
    usize::try_from(index)
        .ok()
        .filter(|&slot| slot < len)
        .ok_or(StoreError::QuestionOutOfRange)
}
