//! Flashcards CLI
//!
//! Interactive flashcard manager working on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- -import capitals.txt
//! cargo run -- -import capitals.txt -export capitals.txt
//! cargo run -- --log-level debug
//! ```
//!
//! With `-import`, the file is loaded before the first prompt. With `-export`,
//! the cards are saved to that file when the session exits.
//!
//! # Exit Codes
//!
//! - 0: Session ended with `exit`
//! - 1: Console input closed or could not be read/written
//! - 2: Malformed launch options

use env_logger::Env;
use flashcards::cli;
use flashcards::core::Session;
use flashcards::io::{Console, FileStorage};
use std::process;

fn main() {
    let args = cli::parse_args();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .format_timestamp(None)
        .init();

    for (flag, value) in &args.ignored {
        log::warn!("Ignoring unrecognised option {} {:?}", flag, value);
    }

    let mut session = Session::new(Console::stdio(), FileStorage, rand::thread_rng())
        .with_export_on_exit(args.export);

    let result = match &args.import {
        Some(path) => session.import_on_start(path),
        None => Ok(()),
    }
    .and_then(|_| session.run());

    if let Err(e) = result {
        log::error!("Session ended abnormally: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
