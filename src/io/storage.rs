//! Named-resource storage
//!
//! Import, export and log all go through the [`Storage`] trait, so the
//! session logic can run against the real filesystem ([`FileStorage`]) or
//! against an in-memory map ([`MemoryStorage`]) in tests.
//!
//! Each call opens and releases its own file handle; nothing is kept open
//! between commands.

use crate::types::FlashcardError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Byte-level access to named resources
pub trait Storage {
    /// Read the whole content of `path`
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if `path` is not an existing regular file, or
    /// `IoError` if it exists but cannot be read.
    fn read(&self, path: &Path) -> Result<Vec<u8>, FlashcardError>;

    /// Replace the content of `path` with `contents`, creating it if needed
    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<(), FlashcardError>;
}

/// Storage backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl Storage for FileStorage {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FlashcardError> {
        if !path.is_file() {
            return Err(FlashcardError::file_not_found(&path.display().to_string()));
        }

        let contents = fs::read(path).map_err(|e| FlashcardError::IoError {
            message: format!("Failed to read '{}': {}", path.display(), e),
        })?;
        log::debug!("Read {} bytes from {}", contents.len(), path.display());
        Ok(contents)
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<(), FlashcardError> {
        fs::write(path, contents).map_err(|e| FlashcardError::IoError {
            message: format!("Failed to write '{}': {}", path.display(), e),
        })?;
        log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

/// In-memory storage
///
/// Clones share the same files, so a test can keep one handle while the
/// session owns another and inspect what was written afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Rc<RefCell<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a file in place, replacing any previous content
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    /// Content of a file as UTF-8 text, if it exists
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .borrow()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl Storage for MemoryStorage {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FlashcardError> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| FlashcardError::file_not_found(&path.display().to_string()))
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> Result<(), FlashcardError> {
        self.insert(path, contents);
        Ok(())
    }
}
