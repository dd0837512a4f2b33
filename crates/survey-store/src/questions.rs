//! Question operations addressed by section name and zero-based index.
//!
//! The section is resolved before the index, so a missing section reports
//! `SectionNotFound` even when the index is also invalid.

use survey_core::Question;

use crate::error::StoreError;
use crate::lookup::{question_slot, section_position};
use crate::store::TemplateStore;

impl TemplateStore {
    /// The question at `index` in the first section named `name`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SectionNotFound` or `StoreError::QuestionOutOfRange`.
    pub fn question(&self, name: &str, index: i64) -> Result<Question, StoreError> {
        self.read(|doc| {
            let section = &doc.survey[section_position(&doc.survey, name)?];
            let slot = question_slot(section.questions.len(), index)?;
            Ok(section.questions[slot].clone())
        })?
    }

    /// Append a question and return its index.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SectionNotFound` or a persistence error.
    pub fn add_question(&self, name: &str, question: Question) -> Result<usize, StoreError> {
        self.mutate(|doc| {
            let pos = section_position(&doc.survey, name)?;
            let questions = &mut doc.survey[pos].questions;
            questions.push(question);
            Ok(questions.len() - 1)
        })
    }

    /// Replace the question at `index` in place.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SectionNotFound`, `StoreError::QuestionOutOfRange`,
    /// or a persistence error.
    pub fn update_question(
        &self,
        name: &str,
        index: i64,
        question: Question,
    ) -> Result<(), StoreError> {
        self.mutate(|doc| {
            let pos = section_position(&doc.survey, name)?;
            let questions = &mut doc.survey[pos].questions;
            let slot = question_slot(questions.len(), index)?;
            questions[slot] = question;
            Ok(())
        })
    }

    /// Remove the question at `index`, shifting later questions down by one.
    /// Returns the removed question.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SectionNotFound`, `StoreError::QuestionOutOfRange`,
    /// or a persistence error.
    pub fn delete_question(&self, name: &str, index: i64) -> Result<Question, StoreError> {
        self.mutate(|doc| {
            let pos = section_position(&doc.survey, name)?;
            let questions = &mut doc.survey[pos].questions;
            let slot = question_slot(questions.len(), index)?;
            Ok(questions.remove(slot))
        })
    }
}
