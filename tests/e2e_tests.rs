//! End-to-end integration tests
//!
//! These tests drive complete sessions from scripted console input. Each
//! fixture directory under tests/fixtures/ contains:
//! 1. `input.txt` - the lines typed at the console
//! 2. `expected.txt` - the full transcript the session must produce
//! 3. optional card files, made available to the session's storage
//! 4. optional `<name>.expected.<ext>` files, compared against what the
//!    session wrote to `<name>.<ext>`
//!
//! Quizzes always draw the first card, so their transcripts are deterministic.

#[cfg(test)]
mod tests {
    use flashcards::core::Session;
    use flashcards::io::{Console, FileStorage, MemoryStorage};
    use rand::rngs::mock::StepRng;
    use rstest::rstest;
    use std::fs;
    use std::io::{self, Cursor};
    use std::path::Path;
    use tempfile::tempdir;

    /// Map `out.expected.txt` to `out.txt`
    fn written_name(expected_name: &str) -> Option<String> {
        expected_name
            .split_once(".expected.")
            .map(|(stem, ext)| format!("{}.{}", stem, ext))
    }

    /// Run a fixture session and compare its transcript and written files
    ///
    /// # Panics
    ///
    /// Panics if a fixture file cannot be read, the session fails, or any
    /// output differs from what the fixture expects.
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.txt", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        let script = fs::read_to_string(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", input_path, e));
        let expected_transcript = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", expected_path, e));

        // Every other fixture file is either a card file the session may
        // import or the expected content of a file the session writes.
        let storage = MemoryStorage::new();
        let mut expected_files = Vec::new();
        for entry in fs::read_dir(&fixture_dir).expect("Failed to list fixture directory") {
            let entry = entry.expect("Failed to read fixture entry");
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == "input.txt" || name == "expected.txt" {
                continue;
            }

            let content = fs::read_to_string(entry.path())
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e));
            match written_name(&name) {
                Some(written) => expected_files.push((written, content)),
                None => storage.insert(name, content),
            }
        }

        let console = Console::new(Cursor::new(script), io::sink());
        let mut session = Session::new(console, storage.clone(), StepRng::new(0, 0));
        session
            .run()
            .unwrap_or_else(|e| panic!("Session for {} failed: {}", fixture_name, e));

        let mut actual = Vec::new();
        session
            .transcript()
            .write_to(&mut actual)
            .expect("Failed to render transcript");
        let actual_transcript = String::from_utf8(actual).expect("Transcript is not UTF-8");

        assert_eq!(
            actual_transcript, expected_transcript,
            "\n\nTranscript mismatch for fixture: {}\n\nActual:\n{}\n\nExpected:\n{}\n",
            fixture_name, actual_transcript, expected_transcript
        );

        for (written, expected) in expected_files {
            assert_eq!(
                storage.contents(&written).as_deref(),
                Some(expected.as_str()),
                "File {} mismatch for fixture: {}",
                written,
                fixture_name
            );
        }
    }

    #[rstest]
    #[case("add_remove")]
    #[case("duplicates")]
    #[case("import_export")]
    #[case("quiz_flow")]
    #[case("hardest_ties")]
    #[case("malformed_import")]
    #[case("invalid_commands")]
    #[case("log_command")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_startup_import_and_export_on_exit_with_real_files() {
        let dir = tempdir().expect("Failed to create temp dir");
        let import_path = dir.path().join("deck.txt");
        let export_path = dir.path().join("saved.txt");
        fs::write(&import_path, "cat:feline:2\ndog:canine:0\n").expect("Failed to write deck");

        let script = "add\nowl\nstrigine\nexit\n".to_string();
        let console = Console::new(Cursor::new(script), io::sink());
        let mut session = Session::new(console, FileStorage, StepRng::new(0, 0))
            .with_export_on_exit(Some(export_path.clone()));

        session.import_on_start(&import_path).unwrap();
        session.run().unwrap();

        let saved = fs::read_to_string(&export_path).expect("Export file missing");
        assert_eq!(saved, "cat:feline:2\ndog:canine:0\nowl:strigine:0\n");

        let lines = session.transcript().lines();
        assert_eq!(lines.first().map(String::as_str), Some("2 cards have been loaded."));
        assert_eq!(lines.last().map(String::as_str), Some("3 cards have been saved."));
    }

    #[test]
    fn test_exported_file_imports_into_fresh_session() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("round_trip.txt");
        let path_str = path.to_string_lossy().into_owned();

        let first_script = format!(
            "add\nfr\nFrench\nadd\nde\nGerman\nask\n1\nGerman\nexport\n{}\nexit\n",
            path_str
        );
        let mut first = Session::new(
            Console::new(Cursor::new(first_script), io::sink()),
            FileStorage,
            StepRng::new(0, 0),
        );
        first.run().unwrap();

        let mut second = Session::new(
            Console::new(Cursor::new("exit\n".to_string()), io::sink()),
            FileStorage,
            StepRng::new(0, 0),
        );
        second.import_on_start(Path::new(&path)).unwrap();

        assert_eq!(second.store().cards(), first.store().cards());
        assert_eq!(second.store().find_by_term("fr").map(|c| c.errors), Some(1));
    }

    #[test]
    fn test_missing_startup_import_does_not_stop_session() {
        let dir = tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("nope.txt");

        let mut session = Session::new(
            Console::new(Cursor::new("exit\n".to_string()), io::sink()),
            FileStorage,
            StepRng::new(0, 0),
        );
        session.import_on_start(&missing).unwrap();
        session.run().unwrap();

        assert_eq!(session.transcript().lines()[0], "File not found.");
        assert_eq!(session.transcript().lines().last().map(String::as_str), Some("Bye bye!"));
    }
}
