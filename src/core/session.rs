//! Interactive session
//!
//! The Session is the top-level controller. It owns the card store, the
//! console (and with it the transcript), the storage backend and the random
//! source, and runs the command loop:
//!
//! 1. Print the action prompt
//! 2. Read one line and parse it into a [`Command`]
//! 3. Dispatch to the matching handler
//! 4. Report any recoverable error and go back to 1
//!
//! The loop ends on `exit`, or when the console itself fails (for instance,
//! input reaching end of file).

use crate::core::card_store::CardStore;
use crate::core::command::Command;
use crate::core::quiz::{parse_rounds, Quiz};
use crate::io::card_format::{import_cards, write_cards};
use crate::io::console::Console;
use crate::io::storage::Storage;
use crate::io::transcript::Transcript;
use crate::types::{Card, FlashcardError};
use rand::Rng;
use std::path::{Path, PathBuf};

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Build the message shown by `hardest card`
pub fn hardest_message(cards: &[&Card]) -> String {
    let Some(first) = cards.first() else {
        return "There are no cards with errors.".to_string();
    };

    let errors = first.errors;
    let noun = if errors == 1 { "error" } else { "errors" };

    if cards.len() == 1 {
        format!(
            "The hardest card is \"{}\". You have {} {} answering it.",
            first.term, errors, noun
        )
    } else {
        let terms: Vec<String> = cards
            .iter()
            .map(|card| format!("\"{}\"", card.term))
            .collect();
        format!(
            "The hardest cards are {}. You have {} {} answering them.",
            terms.join(", "),
            errors,
            noun
        )
    }
}

/// Interactive flashcard session
pub struct Session<S: Storage, G: Rng> {
    store: CardStore,
    console: Console,
    storage: S,
    rng: G,
    export_on_exit: Option<PathBuf>,
}

impl<S: Storage, G: Rng> Session<S, G> {
    /// Create a session with an empty store
    pub fn new(console: Console, storage: S, rng: G) -> Self {
        Session {
            store: CardStore::new(),
            console,
            storage,
            rng,
            export_on_exit: None,
        }
    }

    /// Export to `path` without prompting when the session exits
    pub fn with_export_on_exit(mut self, path: Option<PathBuf>) -> Self {
        self.export_on_exit = path;
        self
    }

    /// The cards currently held by the session
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Everything printed or read so far
    pub fn transcript(&self) -> &Transcript {
        self.console.transcript()
    }

    /// Import `path` before the first prompt
    ///
    /// Failures are reported to the user like any other import failure.
    pub fn import_on_start(&mut self, path: &Path) -> Result<(), FlashcardError> {
        log::debug!("Importing {} at startup", path.display());
        let result = self.import_from(path);
        self.settle(result).map(|_| ())
    }

    /// Run the command loop until `exit`
    ///
    /// # Errors
    ///
    /// Only unrecoverable errors are returned: `InputClosed` when the console
    /// input ends, or an error writing to the console.
    pub fn run(&mut self) -> Result<(), FlashcardError> {
        loop {
            self.console.say("")?;
            let line = self.console.ask(&Command::prompt())?;

            let flow = match line.parse::<Command>() {
                Ok(command) => {
                    log::debug!("Dispatching command '{}'", command);
                    let result = self.execute(command);
                    self.settle(result)?
                }
                Err(e) => {
                    log::debug!("Unrecognised input {:?}", line);
                    self.report(&e)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Report a recoverable error and carry on, or propagate a fatal one
    fn settle(&mut self, result: Result<Flow, FlashcardError>) -> Result<Flow, FlashcardError> {
        match result {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn report(&mut self, error: &FlashcardError) -> Result<(), FlashcardError> {
        log::info!("Command failed: {:?}", error);
        self.console.say(error.to_string())
    }

    fn execute(&mut self, command: Command) -> Result<Flow, FlashcardError> {
        match command {
            Command::Add => self.add()?,
            Command::Remove => self.remove()?,
            Command::Import => self.import()?,
            Command::Export => self.export()?,
            Command::Ask => self.ask()?,
            Command::Log => self.log()?,
            Command::HardestCard => self.hardest_card()?,
            Command::ResetStats => self.reset_stats()?,
            Command::Exit => {
                self.exit()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<(), FlashcardError> {
        let term = self.console.ask("The card:")?;
        // Checked before asking for the definition so the user is not
        // prompted for an answer that would be thrown away.
        if self.store.contains_term(&term) {
            return Err(FlashcardError::duplicate_term(&term));
        }

        let definition = self.console.ask("The definition of the card:")?;
        self.store.add(&term, &definition)?;
        self.console.say(format!(
            "The pair (\"{}\":\"{}\") has been added.",
            term, definition
        ))
    }

    fn remove(&mut self) -> Result<(), FlashcardError> {
        let term = self.console.ask("Which card?")?;
        self.store.remove(&term)?;
        self.console.say("The card has been removed.")
    }

    fn import(&mut self) -> Result<(), FlashcardError> {
        let name = self.console.ask("File name:")?;
        self.import_from(Path::new(&name)).map(|_| ())
    }

    fn import_from(&mut self, path: &Path) -> Result<Flow, FlashcardError> {
        let contents = self.storage.read(path)?;
        let count = import_cards(&mut self.store, contents.as_slice())?;
        self.console
            .say(format!("{} cards have been loaded.", count))?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<(), FlashcardError> {
        let name = self.console.ask("File name:")?;
        self.export_to(Path::new(&name))
    }

    fn export_to(&mut self, path: &Path) -> Result<(), FlashcardError> {
        let mut buffer = Vec::new();
        let count = write_cards(self.store.iter(), &mut buffer)?;
        self.storage.write(path, &buffer)?;
        self.console
            .say(format!("{} cards have been saved.", count))
    }

    fn ask(&mut self) -> Result<(), FlashcardError> {
        let answer = self.console.ask("How many times to ask?")?;
        let rounds = parse_rounds(&answer)?;
        Quiz::new(&mut self.store, &mut self.rng).run(rounds, &mut self.console)?;
        Ok(())
    }

    fn log(&mut self) -> Result<(), FlashcardError> {
        let name = self.console.ask("File name:")?;
        self.console
            .transcript()
            .save(&mut self.storage, Path::new(&name))?;
        self.console.say("The log has been saved.")
    }

    fn hardest_card(&mut self) -> Result<(), FlashcardError> {
        let message = hardest_message(&self.store.hardest());
        self.console.say(message)
    }

    fn reset_stats(&mut self) -> Result<(), FlashcardError> {
        self.store.reset_all_errors();
        self.console.say("Card statistics have been reset.")
    }

    fn exit(&mut self) -> Result<(), FlashcardError> {
        self.console.say("Bye bye!")?;

        if let Some(path) = self.export_on_exit.clone() {
            log::debug!("Exporting to {} on exit", path.display());
            let result = self.export_to(&path).map(|_| Flow::Exit);
            self.settle(result)?;
        }
        Ok(())
    }
}
