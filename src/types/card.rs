//! Card type for the flashcards manager
//!
//! A card pairs a term with its definition and counts how many times
//! the user got it wrong during quizzes.

/// A single flashcard
///
/// Cards are owned by a [`CardStore`](crate::core::CardStore), which keeps
/// terms and definitions unique across the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The prompt shown to the user
    pub term: String,

    /// The expected answer
    pub definition: String,

    /// Number of wrong answers given for this card
    ///
    /// Incremented by the quiz, reset to zero by `reset stats`, and
    /// persisted as the third field of the card file format.
    pub errors: u32,
}

impl Card {
    /// Create a card with no recorded errors
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_errors(term, definition, 0)
    }

    /// Create a card carrying an existing error count (used by import)
    pub fn with_errors(
        term: impl Into<String>,
        definition: impl Into<String>,
        errors: u32,
    ) -> Self {
        Card {
            term: term.into(),
            definition: definition.into(),
            errors,
        }
    }
}
