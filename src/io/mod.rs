//! I/O module
//!
//! Handles everything that crosses the process boundary.
//!
//! # Components
//!
//! - `card_format` - Card file format (import and export)
//! - `storage` - Named-resource storage (filesystem or in-memory)
//! - `console` - Prompt/answer channel over stdin/stdout
//! - `transcript` - Session transcript and saving it for `log`

pub mod card_format;
pub mod console;
pub mod storage;
pub mod transcript;

pub use card_format::{import_cards, write_cards, CardReader, CardRecord};
pub use console::Console;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use transcript::Transcript;
