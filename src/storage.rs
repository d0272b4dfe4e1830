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

use std::collections::BTreeSet;
use std::fs::create_dir_all;
use std::fs::read;
use std::fs::remove_file;
use std::fs::rename;
use std::fs::write;
use std::path::Path;
use std::path::PathBuf;

use blake3::Hash;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::store::RecordStore;
use crate::types::address::Address;
use crate::types::book_error::BookError;
use crate::types::deadline::Deadline;
use crate::types::email::Email;
use crate::types::level::Level;
use crate::types::name::Name;
use crate::types::phone::Phone;
use crate::types::record::Record;
use crate::types::subject::Subject;
use crate::types::tag::Tag;

const DUPLICATE_FLASHCARDS: &str = "Flashcards list contains duplicate flashcard(s).";
const DUPLICATE_SUBJECTS: &str = "Subjects list contains duplicate subject(s).";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed, but a flashcard in it is invalid.
    #[error("Illegal value in data file: {0}")]
    IllegalValue(String),
}

/// Reads and writes a flash book as a JSON file.
pub struct JsonStorage {
    path: PathBuf,
    /// Digest of the bytes last read from or written to the file.
    last_digest: Option<Hash>,
}

impl JsonStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            last_digest: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the store. Returns `None` if the file does not exist.
    pub fn load(&mut self) -> Result<Option<RecordStore>, StorageError> {
        if !self.path.exists() {
            log::debug!("Data file {} not found.", self.path.display());
            return Ok(None);
        }
        let bytes = read(&self.path)?;
        let book: JsonFlashBook = serde_json::from_slice(&bytes)?;
        let store = book.into_store()?;
        self.last_digest = Some(blake3::hash(&bytes));
        log::debug!(
            "Loaded {} flashcards from {}.",
            store.len(),
            self.path.display()
        );
        Ok(Some(store))
    }

    /// Writes the store to the file. Returns false, without touching the
    /// file, if the contents would be unchanged.
    pub fn save(&mut self, store: &RecordStore) -> Result<bool, StorageError> {
        let json = to_json(store)?;
        let digest = blake3::hash(json.as_bytes());
        if self.last_digest == Some(digest) && self.path.exists() {
            log::debug!("Data file is up to date.");
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent)?;
        }
        // Write to a sibling file and rename it into place, so the data file
        // is never left half-written.
        let tmp_path = self.path.with_extension("json.tmp");
        write(&tmp_path, json.as_bytes())?;
        if let Err(e) = rename(&tmp_path, &self.path) {
            let _ = remove_file(&tmp_path);
            return Err(e.into());
        }
        self.last_digest = Some(digest);
        log::debug!(
            "Saved {} flashcards to {}.",
            store.len(),
            self.path.display()
        );
        Ok(true)
    }
}

/// Serializes a store in the data file format.
pub fn to_json(store: &RecordStore) -> Result<String, StorageError> {
    let book = JsonFlashBook::from_store(store);
    Ok(serde_json::to_string_pretty(&book)?)
}

#[derive(Serialize, Deserialize)]
struct JsonFlashBook {
    #[serde(default)]
    flashcards: Vec<JsonFlashcard>,
    #[serde(default)]
    subjects: Vec<JsonSubject>,
}

#[derive(Serialize, Deserialize)]
struct JsonFlashcard {
    name: Option<String>,
    level: Option<String>,
    email: Option<String>,
    address: Option<String>,
    deadline: Option<String>,
    #[serde(default)]
    tagged: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct JsonSubject {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    deadline: Option<String>,
    #[serde(default)]
    tagged: Vec<String>,
}

impl JsonFlashBook {
    fn from_store(store: &RecordStore) -> Self {
        Self {
            flashcards: store.records().iter().map(JsonFlashcard::from_record).collect(),
            subjects: store.subjects().iter().map(JsonSubject::from_subject).collect(),
        }
    }

    fn into_store(self) -> Result<RecordStore, StorageError> {
        let records = self
            .flashcards
            .into_iter()
            .map(JsonFlashcard::into_record)
            .collect::<Result<Vec<Record>, StorageError>>()?;
        let mut store = RecordStore::from_records(records).map_err(|e| match e {
            BookError::Duplicate => StorageError::IllegalValue(DUPLICATE_FLASHCARDS.to_string()),
            other => StorageError::IllegalValue(other.to_string()),
        })?;
        for subject in self.subjects {
            store.add_subject(subject.into_subject()?).map_err(|e| match e {
                BookError::DuplicateSubject => {
                    StorageError::IllegalValue(DUPLICATE_SUBJECTS.to_string())
                }
                other => StorageError::IllegalValue(other.to_string()),
            })?;
        }
        Ok(store)
    }
}

impl JsonFlashcard {
    fn from_record(record: &Record) -> Self {
        Self {
            name: Some(record.name().to_string()),
            level: Some(record.level().to_string()),
            email: Some(record.email().to_string()),
            address: Some(record.address().to_string()),
            deadline: Some(record.deadline().as_str().to_string()),
            tagged: record.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    fn into_record(self) -> Result<Record, StorageError> {
        let tags: BTreeSet<Tag> = self
            .tagged
            .iter()
            .map(|tag| Tag::new(tag))
            .collect::<Result<_, BookError>>()
            .map_err(illegal)?;
        let require = |value: Option<String>, field: &str| required(value, "Flashcard", field);
        let name = Name::new(&require(self.name, "Name")?).map_err(illegal)?;
        let level = Level::new(&require(self.level, "Level")?).map_err(illegal)?;
        let email = Email::new(&require(self.email, "Email")?).map_err(illegal)?;
        let address = Address::new(&require(self.address, "Address")?).map_err(illegal)?;
        let deadline = Deadline::new(&require(self.deadline, "Deadline")?).map_err(illegal)?;
        Ok(Record::new(name, level, email, address, deadline, tags))
    }
}

impl JsonSubject {
    fn from_subject(subject: &Subject) -> Self {
        Self {
            name: Some(subject.name().to_string()),
            phone: Some(subject.phone().as_str().to_string()),
            email: Some(subject.email().to_string()),
            address: Some(subject.address().to_string()),
            deadline: Some(subject.deadline().as_str().to_string()),
            tagged: subject.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    fn into_subject(self) -> Result<Subject, StorageError> {
        let tags: BTreeSet<Tag> = self
            .tagged
            .iter()
            .map(|tag| Tag::new(tag))
            .collect::<Result<_, BookError>>()
            .map_err(illegal)?;
        let require = |value: Option<String>, field: &str| required(value, "Subject", field);
        let name = Name::new(&require(self.name, "Name")?).map_err(illegal)?;
        let phone = Phone::new(&require(self.phone, "Phone")?).map_err(illegal)?;
        let email = Email::new(&require(self.email, "Email")?).map_err(illegal)?;
        let address = Address::new(&require(self.address, "Address")?).map_err(illegal)?;
        let deadline = Deadline::new(&require(self.deadline, "Deadline")?).map_err(illegal)?;
        Ok(Subject::new(name, phone, email, address, deadline, tags))
    }
}

fn required(value: Option<String>, kind: &str, field: &str) -> Result<String, StorageError> {
    value.ok_or_else(|| StorageError::IllegalValue(format!("{kind}'s {field} field is missing!")))
}

fn illegal(e: BookError) -> StorageError {
    StorageError::IllegalValue(e.to_string())
}
