//! Core logic module
//!
//! This module contains the components of a flashcard session:
//! - `card_store` - Ordered, uniqueness-enforcing card collection
//! - `command` - The closed set of interactive commands
//! - `quiz` - Random card sampling and answer grading
//! - `session` - The command loop that ties everything together

pub mod card_store;
pub mod command;
pub mod quiz;
pub mod session;

pub use card_store::CardStore;
pub use command::Command;
pub use quiz::{grade, parse_rounds, Quiz, QuizSummary, Verdict};
pub use session::Session;
