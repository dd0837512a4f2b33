//! Section operations: lookup by name, append, replace, delete.

use survey_core::Section;

use crate::error::StoreError;
use crate::lookup::section_position;
use crate::store::TemplateStore;

impl TemplateStore {
    /// Copy of the full section list, in document order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a writer panicked.
    pub fn sections(&self) -> Result<Vec<Section>, StoreError> {
        self.read(|doc| doc.survey.clone())
    }

    /// The first section named `name`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SectionNotFound` if no section matches.
    pub fn section(&self, name: &str) -> Result<Section, StoreError> {
        self.read(|doc| section_position(&doc.survey, name).map(|pos| doc.survey[pos].clone()))?
    }

    /// Append a section at the end. Duplicate names are allowed.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the rewrite fails.
    pub fn add_section(&self, section: Section) -> Result<(), StoreError> {
        self.mutate(|doc| {
            doc.survey.push(section);
            Ok(())
        })
    }

    /// Replace the first section named `name`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SectionNotFound` if no section matches, or a
    /// persistence error.
    pub fn update_section(&self, name: &str, section: Section) -> Result<(), StoreError> {
        self.mutate(|doc| {
            let pos = section_position(&doc.survey, name)?;
            doc.survey[pos] = section;
            Ok(())
        })
    }

    /// Remove every section named `name` and return how many were removed.
    ///
    /// Unlike the other keyed operations this is not first-match, and a
    /// name with no matches is not an error. The file is rewritten either way.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the rewrite fails.
    pub fn delete_section(&self, name: &str) -> Result<usize, StoreError> {
        self.mutate(|doc| {
            let before = doc.survey.len();
            doc.survey.retain(|section| section.section != name);
            Ok(before - doc.survey.len())
        })
    }
}
