//! Interactive commands
//!
//! The session only understands this closed set of commands. Parsing is an
//! exact, case-sensitive match on the whole input line.

use crate::types::FlashcardError;
use std::fmt;
use std::str::FromStr;

/// A command typed at the session prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create a new card
    Add,
    /// Delete a card by term
    Remove,
    /// Load cards from a file
    Import,
    /// Save cards to a file
    Export,
    /// Run a quiz
    Ask,
    /// End the session
    Exit,
    /// Save the transcript to a file
    Log,
    /// Show the cards with the most errors
    HardestCard,
    /// Zero every error counter
    ResetStats,
}

impl Command {
    /// Every command, in the order the prompt lists them
    pub const ALL: [Command; 9] = [
        Command::Add,
        Command::Remove,
        Command::Import,
        Command::Export,
        Command::Ask,
        Command::Exit,
        Command::Log,
        Command::HardestCard,
        Command::ResetStats,
    ];

    /// The text that selects this command
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Import => "import",
            Command::Export => "export",
            Command::Ask => "ask",
            Command::Exit => "exit",
            Command::Log => "log",
            Command::HardestCard => "hardest card",
            Command::ResetStats => "reset stats",
        }
    }

    /// The prompt printed before every command is read
    pub fn prompt() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(Command::as_str).collect();
        format!("Input the action ({}):", names.join(", "))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = FlashcardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == input)
            .ok_or_else(|| FlashcardError::invalid_command(input))
    }
}
