//! Flashcards Library
//! # Overview
//!
//! An interactive flashcard manager: it keeps an in-memory collection of
//! term/definition pairs and lets a user add, remove, quiz, import, export and
//! inspect error statistics from a line-oriented console.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Card, FlashcardError)
//! - [`cli`] - Launch option parsing
//! - [`core`] - Session logic:
//!   - [`core::card_store`] - Card collection with term/definition uniqueness
//!   - [`core::quiz`] - Quiz sampling and grading
//!   - [`core::session`] - Command loop and command handlers
//! - [`io`] - Card file format, storage backends, console and transcript
//!
//! # Commands
//!
//! - **add** / **remove**: Create or delete a card
//! - **import** / **export**: Load or save cards as `term:definition:errors` lines
//! - **ask**: Quiz on randomly drawn cards, counting wrong answers
//! - **hardest card** / **reset stats**: Inspect or clear error counts
//! - **log**: Save the session transcript
//! - **exit**: End the session (exporting first if launched with `-export`)

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{CardStore, Command, Session};
pub use io::{Console, FileStorage, MemoryStorage, Storage};
pub use types::{Card, FlashcardError};
