//! Error types for the flashcards manager
//!
//! Every error here is shown to the user verbatim: the `Display` output of
//! each variant is the line printed to the console (and recorded in the
//! transcript) when a command fails.
//!
//! # Error Categories
//!
//! - **Store Errors**: duplicate term, duplicate definition, unknown term
//! - **File Errors**: file not found, I/O failures on export/log
//! - **Parse Errors**: malformed card lines, non-numeric round counts
//! - **Session Errors**: unknown command, empty deck, closed input

use thiserror::Error;

/// Main error type for the flashcards manager
///
/// All variants except [`FlashcardError::InputClosed`] are recoverable:
/// the session reports them and prompts for the next command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlashcardError {
    /// A card with this term is already in the store
    #[error("The card \"{term}\" already exists.")]
    DuplicateTerm {
        /// The rejected term
        term: String,
    },

    /// A card with this definition is already in the store
    #[error("The definition \"{definition}\" already exists.")]
    DuplicateDefinition {
        /// The rejected definition
        definition: String,
    },

    /// No card with this term exists
    #[error("Can't remove \"{term}\": there is no such card.")]
    NotFound {
        /// The term that was looked up
        term: String,
    },

    /// Import source does not exist or is not a regular file
    #[error("File not found.")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading or writing a file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed card line or numeric input
    ///
    /// During import this aborts the rest of the file.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The typed text is not one of the known commands
    #[error("Invalid command")]
    InvalidCommand {
        /// The text that was typed
        input: String,
    },

    /// A quiz was requested with no cards in the store
    #[error("There are no cards to ask about.")]
    EmptyDeck,

    /// The console input reached end of file
    ///
    /// This is the only fatal error: the session cannot prompt any further.
    #[error("Input stream closed")]
    InputClosed,
}

impl From<std::io::Error> for FlashcardError {
    fn from(error: std::io::Error) -> Self {
        FlashcardError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for FlashcardError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        FlashcardError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl FlashcardError {
    /// Create a DuplicateTerm error
    pub fn duplicate_term(term: &str) -> Self {
        FlashcardError::DuplicateTerm {
            term: term.to_string(),
        }
    }

    /// Create a DuplicateDefinition error
    pub fn duplicate_definition(definition: &str) -> Self {
        FlashcardError::DuplicateDefinition {
            definition: definition.to_string(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(term: &str) -> Self {
        FlashcardError::NotFound {
            term: term.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        FlashcardError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError with an optional line number
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        FlashcardError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(input: &str) -> Self {
        FlashcardError::InvalidCommand {
            input: input.to_string(),
        }
    }

    /// Whether the session can keep prompting after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FlashcardError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::duplicate_term(
        FlashcardError::DuplicateTerm { term: "fr".to_string() },
        "The card \"fr\" already exists."
    )]
    #[case::duplicate_definition(
        FlashcardError::DuplicateDefinition { definition: "French".to_string() },
        "The definition \"French\" already exists."
    )]
    #[case::not_found(
        FlashcardError::NotFound { term: "xx".to_string() },
        "Can't remove \"xx\": there is no such card."
    )]
    #[case::file_not_found(
        FlashcardError::FileNotFound { path: "cards.txt".to_string() },
        "File not found."
    )]
    #[case::io_error(
        FlashcardError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        FlashcardError::ParseError { line: Some(3), message: "expected 3 fields, found 2".to_string() },
        "Parse error at line 3: expected 3 fields, found 2"
    )]
    #[case::parse_error_without_line(
        FlashcardError::ParseError { line: None, message: "bad number".to_string() },
        "Parse error: bad number"
    )]
    #[case::invalid_command(
        FlashcardError::InvalidCommand { input: "quit".to_string() },
        "Invalid command"
    )]
    #[case::empty_deck(FlashcardError::EmptyDeck, "There are no cards to ask about.")]
    fn test_error_display(#[case] error: FlashcardError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::duplicate_term(
        FlashcardError::duplicate_term("fr"),
        FlashcardError::DuplicateTerm { term: "fr".to_string() }
    )]
    #[case::not_found(
        FlashcardError::not_found("fr"),
        FlashcardError::NotFound { term: "fr".to_string() }
    )]
    #[case::parse_error(
        FlashcardError::parse_error(Some(1), "oops"),
        FlashcardError::ParseError { line: Some(1), message: "oops".to_string() }
    )]
    fn test_helper_functions(#[case] result: FlashcardError, #[case] expected: FlashcardError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: FlashcardError = io_error.into();
        assert!(matches!(error, FlashcardError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_only_closed_input_is_fatal() {
        assert!(!FlashcardError::InputClosed.is_recoverable());
        assert!(FlashcardError::EmptyDeck.is_recoverable());
        assert!(FlashcardError::not_found("x").is_recoverable());
    }
}
