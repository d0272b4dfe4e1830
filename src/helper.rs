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

//! Fixtures shared by the unit tests.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;
use crate::store::RecordStore;
use crate::types::address::Address;
use crate::types::deadline::Deadline;
use crate::types::email::Email;
use crate::types::level::Level;
use crate::types::name::Name;
use crate::types::phone::Phone;
use crate::types::record::Record;
use crate::types::subject::Subject;
use crate::types::tag::Tag;

pub struct RecordBuilder {
    name: String,
    level: String,
    email: String,
    address: String,
    deadline: String,
    tags: Vec<String>,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: "1".to_string(),
            email: "alice@gmail.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            deadline: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            level: record.level().to_string(),
            email: record.email().to_string(),
            address: record.address().to_string(),
            deadline: record.deadline().as_str().to_string(),
            tags: record.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn deadline(mut self, deadline: &str) -> Self {
        self.deadline = deadline.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Record {
        let tags: BTreeSet<Tag> = self.tags.iter().map(|t| Tag::new(t).unwrap()).collect();
        Record::new(
            Name::new(&self.name).unwrap(),
            Level::new(&self.level).unwrap(),
            Email::new(&self.email).unwrap(),
            Address::new(&self.address).unwrap(),
            Deadline::new(&self.deadline).unwrap(),
            tags,
        )
    }
}

pub struct SubjectBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    deadline: String,
    tags: Vec<String>,
}

impl SubjectBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: "85355255".to_string(),
            email: "subject@example.com".to_string(),
            address: "Block 1, Main Building".to_string(),
            deadline: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name().to_string(),
            phone: subject.phone().to_string(),
            email: subject.email().to_string(),
            address: subject.address().to_string(),
            deadline: subject.deadline().as_str().to_string(),
            tags: subject.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Subject {
        let tags: BTreeSet<Tag> = self.tags.iter().map(|t| Tag::new(t).unwrap()).collect();
        Subject::new(
            Name::new(&self.name).unwrap(),
            Phone::new(&self.phone).unwrap(),
            Email::new(&self.email).unwrap(),
            Address::new(&self.address).unwrap(),
            Deadline::new(&self.deadline).unwrap(),
            tags,
        )
    }
}

pub fn alice() -> Record {
    RecordBuilder::new("Alice Pauline")
        .level("1")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .tags(&["friends"])
        .build()
}

pub fn benson() -> Record {
    RecordBuilder::new("Benson Meier")
        .level("2")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Record {
    RecordBuilder::new("Carl Kurz")
        .level("3")
        .email("heinz@example.com")
        .address("wall street")
        .build()
}

pub fn daniel() -> Record {
    RecordBuilder::new("Daniel Meier")
        .level("1")
        .email("cornelia@example.com")
        .address("10th street")
        .tags(&["friends"])
        .build()
}

pub fn elle() -> Record {
    RecordBuilder::new("Elle Meyer")
        .level("2")
        .email("werner@example.com")
        .address("michegan ave")
        .build()
}

pub fn fiona() -> Record {
    RecordBuilder::new("Fiona Kunz")
        .level("3")
        .email("lydia@example.com")
        .address("little tokyo")
        .build()
}

pub fn george() -> Record {
    RecordBuilder::new("George Best")
        .level("1")
        .email("anna@example.com")
        .address("4th street")
        .deadline("21 August 2022")
        .build()
}

/// Not part of the typical store.
pub fn bob() -> Record {
    RecordBuilder::new("Bob Choo")
        .level("2")
        .email("bob@example.com")
        .address("Block 123, Bobby Street 3")
        .tags(&["husband", "friends"])
        .build()
}

pub fn typical_records() -> Vec<Record> {
    vec![alice(), benson(), carl(), daniel(), elle(), fiona(), george()]
}

pub fn typical_store() -> RecordStore {
    let mut store = RecordStore::new();
    for record in typical_records() {
        store.add(record).unwrap();
    }
    store
}

pub fn math() -> Subject {
    SubjectBuilder::new("Mathematics")
        .phone("91234567")
        .email("math@example.com")
        .address("Block 12, Science Wing")
        .tags(&["math"])
        .build()
}

pub fn english() -> Subject {
    SubjectBuilder::new("English Language")
        .phone("98765432")
        .email("english@example.com")
        .address("Block 3, Arts Wing")
        .tags(&["english"])
        .build()
}

/// A scratch directory and the path of a data file inside it. The directory
/// is deleted when the `TempDir` is dropped.
pub fn tmp_data_file() -> Fallible<(TempDir, PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join("data").join("flashbook.json");
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_store() {
        assert_eq!(typical_store().len(), 7);
    }

    #[test]
    fn test_tmp_data_file() -> Fallible<()> {
        let (dir, path) = tmp_data_file()?;
        assert!(path.starts_with(dir.path()));
        assert!(!path.exists());
        Ok(())
    }
}
