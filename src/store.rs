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

use crate::types::book_error::BookError;
use crate::types::index::Index;
use crate::types::record::Record;
use crate::types::subject::Subject;

/// An ordered collection of flashcards, and the subject book kept beside
/// them. No two flashcards in the store are the same record (same name and
/// level), and no two subjects are the same subject.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    subjects: Vec<Subject>,
    /// Incremented on every successful mutation.
    revision: u64,
}

/// An immutable copy of a store's content. Only a store can take one, so a
/// snapshot never holds duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    records: Vec<Record>,
    subjects: Vec<Subject>,
}

impl Snapshot {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a list of records, rejecting duplicates.
    pub fn from_records(records: Vec<Record>) -> Result<Self, BookError> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True if the store holds the same record as `record`.
    pub fn contains(&self, record: &Record) -> bool {
        self.records.iter().any(|r| r.is_same_record(record))
    }

    pub fn add(&mut self, record: Record) -> Result<(), BookError> {
        if self.contains(&record) {
            return Err(BookError::Duplicate);
        }
        self.records.push(record);
        self.bump();
        Ok(())
    }

    /// Removes the first record equal to `record`.
    pub fn remove(&mut self, record: &Record) -> Result<(), BookError> {
        let position = self.position(record)?;
        self.records.remove(position);
        self.bump();
        Ok(())
    }

    /// Replaces `old` with `new` in place.
    pub fn replace(&mut self, old: &Record, new: Record) -> Result<(), BookError> {
        let position = self.position(old)?;
        let collides = self
            .records
            .iter()
            .enumerate()
            .any(|(i, r)| i != position && r.is_same_record(&new));
        if collides {
            return Err(BookError::Duplicate);
        }
        self.records[position] = new;
        self.bump();
        Ok(())
    }

    pub fn contains_subject(&self, subject: &Subject) -> bool {
        self.subjects.iter().any(|s| s.is_same_subject(subject))
    }

    pub fn add_subject(&mut self, subject: Subject) -> Result<(), BookError> {
        if self.contains_subject(&subject) {
            return Err(BookError::DuplicateSubject);
        }
        self.subjects.push(subject);
        self.bump();
        Ok(())
    }

    /// Removes the first subject equal to `subject`.
    pub fn remove_subject(&mut self, subject: &Subject) -> Result<(), BookError> {
        let position = self
            .subjects
            .iter()
            .position(|s| s == subject)
            .ok_or(BookError::SubjectNotFound)?;
        self.subjects.remove(position);
        self.bump();
        Ok(())
    }

    /// Removes every flashcard. The subject book is left alone.
    pub fn clear(&mut self) {
        self.records.clear();
        self.bump();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: self.records.clone(),
            subjects: self.subjects.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.records = snapshot.records().to_vec();
        self.subjects = snapshot.subjects().to_vec();
        self.bump();
    }

    /// A read-only view of the records matching `predicate`, in store order.
    pub fn filtered_view<P>(&self, predicate: P) -> FilteredView<'_, P>
    where
        P: Fn(&Record) -> bool,
    {
        FilteredView {
            records: &self.records,
            predicate,
        }
    }

    fn position(&self, record: &Record) -> Result<usize, BookError> {
        self.records
            .iter()
            .position(|r| r == record)
            .ok_or(BookError::NotFound)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

/// Two stores are equal when they hold equal records and subjects in the
/// same order. The revision is not compared.
impl PartialEq for RecordStore {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records && self.subjects == other.subjects
    }
}

impl Eq for RecordStore {}

/// A lazy filter over a store. Nothing is computed until it is iterated, and
/// it can be iterated any number of times.
pub struct FilteredView<'a, P> {
    records: &'a [Record],
    predicate: P,
}

impl<'a, P> FilteredView<'a, P>
where
    P: Fn(&Record) -> bool,
{
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().filter(|record| (self.predicate)(*record))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn get(&self, index: Index) -> Option<&'a Record> {
        self.iter().nth(index.zero_based())
    }
}
