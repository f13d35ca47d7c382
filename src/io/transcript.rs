//! Session transcript
//!
//! Every line the session prints and every line the user types is appended
//! here in order. The `log` command saves it to a file.

use crate::io::storage::Storage;
use crate::types::FlashcardError;
use std::io::Write;
use std::path::Path;

/// Append-only record of console interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All recorded lines, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every line followed by `\n`
    pub fn write_to(&self, output: &mut dyn Write) -> Result<(), FlashcardError> {
        for line in &self.lines {
            writeln!(output, "{}", line)?;
        }
        output.flush()?;
        Ok(())
    }

    /// Save the transcript to `path`, overwriting it
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of lines saved
    /// * `Err(FlashcardError)` - If the storage write failed
    pub fn save(&self, storage: &mut dyn Storage, path: &Path) -> Result<usize, FlashcardError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        storage.write(path, &buffer)?;

        log::debug!("Saved {} transcript lines to {}", self.len(), path.display());
        Ok(self.len())
    }
}
