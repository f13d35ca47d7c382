use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Launch options recognised as flag/value pairs
const VALUE_FLAGS: [&str; 3] = ["import", "export", "log-level"];

/// Flags clap answers on its own
const INFO_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Interactive flashcard manager
#[derive(Parser, Debug)]
#[command(name = "flashcards", version)]
#[command(about = "Interactive flashcard manager", long_about = None)]
pub struct LaunchArgs {
    /// Card file to import before the first prompt
    #[arg(long = "import", value_name = "PATH")]
    pub import: Option<PathBuf>,

    /// Card file to export to, without prompting, on exit
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Diagnostic log level written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Diagnostic log level: off, error, warn, info, debug or trace"
    )]
    pub log_level: LevelFilter,

    /// Flag/value pairs that were given but are not recognised
    #[arg(skip)]
    pub ignored: Vec<(String, String)>,
}

/// Split raw arguments into what clap should parse and what is ignored
///
/// Arguments are read as flag/value pairs. Known flags are accepted with one
/// or two leading dashes (`-import cards.txt` or `--import cards.txt`) and
/// rewritten as `--flag=value`, so a value that starts with a dash is still
/// taken as the value. Any other pair is returned in the ignored list. The
/// first argument is the program name and passes through untouched.
pub fn normalize_args<I>(args: I) -> (Vec<String>, Vec<(String, String)>)
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<String> = args.next().into_iter().collect();
    let mut ignored = Vec::new();

    while let Some(arg) = args.next() {
        if INFO_FLAGS.contains(&arg.as_str()) {
            normalized.push(arg);
            continue;
        }

        let name = arg.trim_start_matches('-');
        if arg.starts_with('-') && VALUE_FLAGS.contains(&name) {
            match args.next() {
                Some(value) => normalized.push(format!("--{}={}", name, value)),
                // Left for clap to report as a missing value
                None => normalized.push(format!("--{}", name)),
            }
        } else {
            let value = args.next().unwrap_or_default();
            ignored.push((arg, value));
        }
    }

    (normalized, ignored)
}

impl LaunchArgs {
    /// Parse raw arguments, including single-dash flags
    ///
    /// # Errors
    ///
    /// Returns the clap error for a known flag with a missing or invalid value,
    /// or for `--help` / `--version`.
    pub fn try_parse_raw<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = String>,
    {
        let (normalized, ignored) = normalize_args(args);
        let mut parsed = LaunchArgs::try_parse_from(normalized)?;
        parsed.ignored = ignored;
        Ok(parsed)
    }
}
