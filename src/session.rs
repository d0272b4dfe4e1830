// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::BufRead;
use std::io::Write;

use crate::command::CommandResult;
use crate::command::Listing;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::model::Model;
use crate::parser::parse_line;
use crate::sample::sample_store;
use crate::storage::JsonStorage;
use crate::store::RecordStore;
use crate::types::index::Index;

/// A running flash book: the model, where it is saved, and the lines entered
/// so far.
pub struct Session {
    model: Model,
    storage: JsonStorage,
    inputs: Vec<String>,
    /// The store revision last written to disk.
    saved_revision: u64,
}

impl Session {
    pub fn new(store: RecordStore, storage: JsonStorage, history_limit: Option<usize>) -> Self {
        let saved_revision = store.revision();
        Self {
            model: Model::new(store, history_limit),
            storage,
            inputs: Vec::new(),
            saved_revision,
        }
    }

    /// Opens the data file, falling back to the sample flash book if it does
    /// not exist, and to an empty one if it cannot be read.
    pub fn open(mut storage: JsonStorage, history_limit: Option<usize>) -> Fallible<Self> {
        let store = match storage.load() {
            Ok(Some(store)) => store,
            Ok(None) => {
                log::info!(
                    "Data file {} not found. Starting with a sample flash book.",
                    storage.path().display()
                );
                sample_store()?
            }
            Err(e) => {
                log::warn!(
                    "Data file {} could not be loaded ({e}). Starting with an empty flash book.",
                    storage.path().display()
                );
                RecordStore::new()
            }
        };
        Ok(Self::new(store, storage, history_limit))
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Runs one line of input. The store is saved after every command that
    /// changed it. A failed save does not undo the command: the error is
    /// appended to its feedback, and the save is retried after the next one.
    pub fn execute_line(&mut self, line: &str) -> Fallible<CommandResult> {
        let result =
            parse_line(line).and_then(|command| command.execute(&mut self.model, &self.inputs));
        self.inputs.push(line.trim().to_string());
        let mut result = result?;
        if let Err(e) = self.save() {
            log::error!("{e}");
            result.feedback = format!("{}\n{e}", result.feedback);
        }
        Ok(result)
    }

    /// The displayed list, numbered from one. The selected flashcard is
    /// marked.
    pub fn displayed_list(&self) -> Vec<String> {
        let selected = self.model.selected();
        self.model
            .filtered()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let index = Index::from_zero_based(i);
                let marker = if selected == Some(record) { " (selected)" } else { "" };
                format!("{}. {record}{marker}", index.one_based())
            })
            .collect()
    }

    /// The subject book, numbered from one.
    pub fn subject_list(&self) -> Vec<String> {
        self.model
            .store()
            .subjects()
            .iter()
            .enumerate()
            .map(|(i, subject)| format!("{}. {subject}", i + 1))
            .collect()
    }

    fn save(&mut self) -> Fallible<()> {
        let store = self.model.store();
        if store.revision() == self.saved_revision {
            return Ok(());
        }
        self.storage
            .save(store)
            .map_err(|e| ErrorReport::new(&format!("Could not save data to file: {e}")))?;
        self.saved_revision = store.revision();
        Ok(())
    }
}

/// Feeds every line of `input` to the session, writing feedback to `output`.
/// Blank lines and lines starting with `#` are skipped. With `echo`, each line
/// is written back after the prompt, for transcripts of non-interactive runs.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    prompt: &str,
    echo: bool,
) -> Fallible<()> {
    if !echo {
        write!(output, "{prompt}")?;
        output.flush()?;
    }
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            if !echo {
                write!(output, "{prompt}")?;
                output.flush()?;
            }
            continue;
        }
        if echo {
            writeln!(output, "{prompt}{trimmed}")?;
        }
        match session.execute_line(trimmed) {
            Ok(result) => {
                writeln!(output, "{}", result.feedback)?;
                let entries = match result.listing {
                    Some(Listing::Flashcards) => session.displayed_list(),
                    Some(Listing::Subjects) => session.subject_list(),
                    None => Vec::new(),
                };
                for entry in entries {
                    writeln!(output, "{entry}")?;
                }
                if result.exit {
                    return Ok(());
                }
            }
            Err(e) => {
                writeln!(output, "{e}")?;
            }
        }
        if !echo {
            write!(output, "{prompt}")?;
            output.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;

    use super::*;
    use crate::helper::tmp_data_file;
    use crate::helper::typical_store;
    use crate::storage::StorageError;

    fn session_with_typical_store() -> Fallible<(tempfile::TempDir, Session)> {
        let (dir, path) = tmp_data_file()?;
        let mut storage = JsonStorage::new(path.clone());
        storage.save(&typical_store())?;
        let session = Session::open(JsonStorage::new(path), None)?;
        Ok((dir, session))
    }

    fn reload(session: &Session) -> Result<Option<RecordStore>, StorageError> {
        JsonStorage::new(session.storage.path().to_path_buf()).load()
    }

    #[test]
    fn test_missing_file_loads_sample() -> Fallible<()> {
        let (_dir, path) = tmp_data_file()?;
        let session = Session::open(JsonStorage::new(path.clone()), None)?;
        assert_eq!(session.model().store(), &sample_store()?);
        // Nothing is written until something changes.
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_invalid_file_loads_empty() -> Fallible<()> {
        let (_dir, path) = tmp_data_file()?;
        create_dir_all(path.parent().unwrap())?;
        write(&path, r#"{ "flashcards": [{ "name": "Alex Yeoh" }] }"#)?;
        let session = Session::open(JsonStorage::new(path), None)?;
        assert!(session.model().store().is_empty());
        Ok(())
    }

    #[test]
    fn test_mutation_is_saved() -> Fallible<()> {
        let (_dir, mut session) = session_with_typical_store()?;
        session.execute_line("delete 1")?;
        assert_eq!(reload(&session)?.as_ref(), Some(session.model().store()));
        assert_eq!(session.model().store().len(), 6);
        session.execute_line("undo")?;
        assert_eq!(reload(&session)?, Some(typical_store()));
        Ok(())
    }

    #[test]
    fn test_failed_save_keeps_the_change() -> Fallible<()> {
        let (_dir, path) = tmp_data_file()?;
        let data_dir = path.parent().unwrap().to_path_buf();
        // A regular file where the data directory should be.
        write(&data_dir, "")?;
        let mut session = Session::new(typical_store(), JsonStorage::new(path.clone()), None);

        let result = session.execute_line("delete 1")?;
        let lines: Vec<&str> = result.feedback.lines().collect();
        assert!(lines[0].starts_with("Deleted Flashcard: Alice Pauline"));
        assert!(lines[1].starts_with("Could not save data to file: "));
        assert_eq!(session.model().store().len(), 6);

        let result = session.execute_line("undo")?;
        assert!(result.feedback.starts_with("Undo success!\nCould not save data to file: "));
        assert_eq!(session.model().store(), &typical_store());

        // The next command saves once the path is usable again.
        std::fs::remove_file(&data_dir)?;
        session.execute_line("redo")?;
        let result = session.execute_line("list")?;
        assert_eq!(result.feedback, "Listed all flashcards");
        assert_eq!(reload(&session)?.as_ref(), Some(session.model().store()));
        assert_eq!(session.model().store().len(), 6);
        Ok(())
    }

    #[test]
    fn test_save_is_retried_by_read_only_commands() -> Fallible<()> {
        let (_dir, path) = tmp_data_file()?;
        let data_dir = path.parent().unwrap().to_path_buf();
        write(&data_dir, "")?;
        let mut session = Session::new(typical_store(), JsonStorage::new(path.clone()), None);
        let result = session.execute_line("clear")?;
        assert!(result.feedback.contains("Could not save data to file: "));
        std::fs::remove_file(&data_dir)?;
        let result = session.execute_line("list")?;
        assert_eq!(result.feedback, "Listed all flashcards");
        assert_eq!(reload(&session)?, Some(RecordStore::new()));
        Ok(())
    }

    #[test]
    fn test_errors_are_reported() -> Fallible<()> {
        let (_dir, mut session) = session_with_typical_store()?;
        let error = session.execute_line("delete 100").unwrap_err();
        assert_eq!(error.to_string(), "The flashcard index provided is invalid");
        let error = session.execute_line("frobnicate").unwrap_err();
        assert_eq!(error.to_string(), "Unknown command");
        Ok(())
    }

    #[test]
    fn test_inputs_are_recorded() -> Fallible<()> {
        let (_dir, mut session) = session_with_typical_store()?;
        session.execute_line("list")?;
        let _ = session.execute_line("bogus");
        let result = session.execute_line("history")?;
        assert_eq!(
            result.feedback,
            "Entered commands (from most recent to earliest):\nbogus\nlist"
        );
        Ok(())
    }

    #[test]
    fn test_run_lines() -> Fallible<()> {
        let (_dir, mut session) = session_with_typical_store()?;
        let script = "# a comment\n\nfind Meier\ndelete 1\nundo\nexit\nlist\n";
        let mut output: Vec<u8> = Vec::new();
        run_lines(&mut session, script.as_bytes(), &mut output, "> ", true)?;
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "> find Meier");
        assert_eq!(lines[1], "2 flashcards listed!");
        assert!(lines[2].starts_with("1. Benson Meier"));
        assert!(lines[3].starts_with("2. Daniel Meier"));
        assert_eq!(lines[4], "> delete 1");
        assert!(lines[5].starts_with("Deleted Flashcard: Benson Meier"));
        assert_eq!(lines[6], "> undo");
        assert_eq!(lines[7], "Undo success!");
        assert_eq!(lines[8], "> exit");
        // Nothing runs after exit.
        assert_eq!(lines.len(), 10);
        Ok(())
    }

    #[test]
    fn test_subjects_are_listed_and_saved() -> Fallible<()> {
        let (_dir, mut session) = session_with_typical_store()?;
        let script = "subject-add n/Mathematics p/91234567 e/math@example.com a/Block 12\nsubjects\n";
        let mut output: Vec<u8> = Vec::new();
        run_lines(&mut session, script.as_bytes(), &mut output, "> ", true)?;
        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].starts_with("New subject added: Mathematics Phone: 91234567"));
        assert_eq!(lines[3], "Listed all subjects");
        assert!(lines[4].starts_with("1. Mathematics Phone: 91234567"));
        assert_eq!(lines.len(), 5);
        let saved = reload(&session)?.unwrap();
        assert_eq!(saved.subjects().len(), 1);
        assert_eq!(saved.len(), 7);
        Ok(())
    }

    #[test]
    fn test_selection_is_marked() -> Fallible<()> {
        let (_dir, mut session) = session_with_typical_store()?;
        session.execute_line("select 2")?;
        let list = session.displayed_list();
        assert!(list[1].starts_with("2. Benson Meier"));
        assert!(list[1].ends_with(" (selected)"));
        assert!(!list[0].ends_with(" (selected)"));
        session.execute_line("delete 2")?;
        assert!(session.displayed_list()[0].ends_with(" (selected)"));
        Ok(())
    }
}
