// CLI module
// Launch option parsing

mod args;

pub use args::{normalize_args, LaunchArgs};

/// Parse the process's command-line arguments
///
/// Single-dash flags such as `-import cards.txt` are accepted alongside the
/// usual `--import cards.txt`. Unrecognised flag pairs are collected in
/// [`LaunchArgs::ignored`] rather than rejected. On a malformed known flag,
/// or on `--help`/`--version`, clap prints its message and exits the process.
pub fn parse_args() -> LaunchArgs {
    LaunchArgs::try_parse_raw(std::env::args()).unwrap_or_else(|e| e.exit())
}
