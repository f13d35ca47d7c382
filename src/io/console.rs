//! Line-oriented console
//!
//! The console is the single channel for user-facing text: everything printed
//! with [`Console::say`] and everything read with [`Console::read_line`] is
//! also appended to the session [`Transcript`].
//!
//! Input and output are trait objects so tests can drive a session from an
//! in-memory script and discard or capture the output.

use crate::io::transcript::Transcript;
use crate::types::FlashcardError;
use std::io::{self, BufRead, Write};

/// Prompt/answer channel that records a transcript
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    transcript: Transcript,
}

impl Console {
    /// Create a console over arbitrary input and output streams
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Console {
            input: Box::new(input),
            output: Box::new(output),
            transcript: Transcript::new(),
        }
    }

    /// Create a console over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }

    /// Print one line and record it
    pub fn say(&mut self, line: impl Into<String>) -> Result<(), FlashcardError> {
        let line = line.into();
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        self.transcript.push(line);
        Ok(())
    }

    /// Read one line of input and record it
    ///
    /// The trailing line terminator (`\n` or `\r\n`) is stripped; nothing
    /// else is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` at end of input, or `IoError` if reading failed.
    pub fn read_line(&mut self) -> Result<String, FlashcardError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FlashcardError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        self.transcript.push(line.clone());
        Ok(line)
    }

    /// Print a prompt and read the answer
    pub fn ask(&mut self, prompt: &str) -> Result<String, FlashcardError> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Everything printed or read so far
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
