//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `card`: the flashcard itself
//! - `error`: error types for the flashcards manager

pub mod card;
pub mod error;

pub use card::Card;
pub use error::FlashcardError;
