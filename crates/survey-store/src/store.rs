//! The template store: one shared survey document and its file mirror.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use survey_core::Survey;

use crate::error::StoreError;
use crate::file;

/// Owns the in-memory survey document and persists it to a JSON file.
///
/// Reads take a shared lock and copy out. Mutations go through [`Self::mutate`],
/// which holds the document write lock across the change and the file rewrite,
/// so concurrent writers never interleave their read-modify-write sections.
/// The file write itself is additionally serialized by `file_lock`.
///
/// There is no rollback: if the rewrite fails, the in-memory change stays and
/// the file keeps its previous content.
pub struct TemplateStore {
    path: PathBuf,
    document: RwLock<Survey>,
    file_lock: Mutex<()>,
}

impl TemplateStore {
    /// Load the template file into a new store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` or `StoreError::Parse`. There is no
    /// empty-template fallback.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let document = file::read_template(&path).inspect_err(|error| {
            tracing::error!(path = %path.display(), %error, "failed to load survey template");
        })?;
        tracing::info!(
            path = %path.display(),
            sections = document.survey.len(),
            "survey template loaded"
        );
        Ok(Self::new(path, document))
    }

    /// Wrap an already-parsed document. Nothing is written until the first
    /// mutation or [`Self::save`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, document: Survey) -> Self {
        Self {
            path: path.into(),
            document: RwLock::new(document),
            file_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Defensive copy of the whole document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a writer panicked.
    pub fn snapshot(&self) -> Result<Survey, StoreError> {
        self.read(Clone::clone)
    }

    /// Run `f` against a shared borrow of the document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` if a writer panicked, or whatever `f`
    /// returns.
    pub fn read<T>(&self, f: impl FnOnce(&Survey) -> T) -> Result<T, StoreError> {
        let document = self.document.read().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&document))
    }

    /// Mutate the document and persist it, all under the document write lock.
    ///
    /// `f` must only modify the document once it knows it will succeed: an
    /// `Err` from `f` skips the save and is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, `StoreError::Poisoned`, or a persistence
    /// error from the rewrite.
    pub fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Survey) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut document = self.document.write().map_err(|_| StoreError::Poisoned)?;
        let output = f(&mut document)?;
        self.persist(&document)?;
        Ok(output)
    }

    /// Rewrite the backing file from the current document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Poisoned` or a persistence error.
    pub fn save(&self) -> Result<(), StoreError> {
        let document = self.document.read().map_err(|_| StoreError::Poisoned)?;
        self.persist(&document)
    }

    fn persist(&self, document: &Survey) -> Result<(), StoreError> {
        let _guard = self.file_lock.lock().map_err(|_| StoreError::Poisoned)?;
        file::write_template(&self.path, document).inspect_err(|error| {
            tracing::error!(
                path = %self.path.display(),
                %error,
                "failed to save survey template"
            );
        })
    }
}
