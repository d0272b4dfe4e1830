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

use crate::history::History;
use crate::predicate::Predicate;
use crate::store::FilteredView;
use crate::store::RecordStore;
use crate::types::book_error::BookError;
use crate::types::index::Index;
use crate::types::record::Record;
use crate::types::subject::Subject;

/// The state commands act on: the store, its undo/redo history, the filter
/// on the displayed list, and the selected flashcard.
///
/// The selection is always a flashcard in the displayed list, or nothing.
pub struct Model {
    store: RecordStore,
    history: History,
    filter: Predicate,
    selected: Option<Record>,
}

impl Model {
    pub fn new(store: RecordStore, history_limit: Option<usize>) -> Self {
        let history = History::new(&store, history_limit);
        Self {
            store,
            history,
            filter: Predicate::All,
            selected: None,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn has_record(&self, record: &Record) -> bool {
        self.store.contains(record)
    }

    pub fn add_record(&mut self, record: Record) -> Result<(), BookError> {
        self.store.add(record)?;
        self.filter = Predicate::All;
        Ok(())
    }

    /// Deleting the selected flashcard moves the selection to the one before
    /// it in the displayed list, or clears it if there is none.
    pub fn delete_record(&mut self, record: &Record) -> Result<(), BookError> {
        let position = self.filtered().iter().position(|r| r == record);
        self.store.remove(record)?;
        if self.selected.as_ref() == Some(record) {
            self.selected = match position {
                Some(position) if position > 0 => self
                    .filtered()
                    .get(Index::from_zero_based(position - 1))
                    .cloned(),
                _ => None,
            };
        }
        Ok(())
    }

    /// Replacing the selected flashcard selects its replacement.
    pub fn set_record(&mut self, old: &Record, new: Record) -> Result<(), BookError> {
        self.store.replace(old, new.clone())?;
        if self.selected.as_ref() == Some(old) {
            self.selected = Some(new);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.selected = None;
    }

    pub fn add_subject(&mut self, subject: Subject) -> Result<(), BookError> {
        self.store.add_subject(subject)
    }

    /// The subject at `index` in the subject book.
    pub fn subject_at(&self, index: Index) -> Result<Subject, BookError> {
        self.store
            .subjects()
            .get(index.zero_based())
            .cloned()
            .ok_or(BookError::InvalidSubjectIndex)
    }

    pub fn delete_subject(&mut self, subject: &Subject) -> Result<(), BookError> {
        self.store.remove_subject(subject)
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    /// Selects the flashcard at `index` in the displayed list.
    pub fn select(&mut self, index: Index) -> Result<Record, BookError> {
        let record = self.record_at(index)?;
        self.selected = Some(record.clone());
        Ok(record)
    }

    pub fn filter(&self) -> &Predicate {
        &self.filter
    }

    /// A selection the new filter hides is cleared.
    pub fn update_filter(&mut self, filter: Predicate) {
        self.filter = filter;
        self.retain_selection();
    }

    /// The displayed list: the store seen through the current filter.
    pub fn filtered(&self) -> FilteredView<'_, impl Fn(&Record) -> bool + '_> {
        let filter = &self.filter;
        self.store.filtered_view(move |record: &Record| filter.test(record))
    }

    /// The record at `index` in the displayed list.
    pub fn record_at(&self, index: Index) -> Result<Record, BookError> {
        self.filtered()
            .get(index)
            .cloned()
            .ok_or(BookError::InvalidIndex)
    }

    /// Saves the store's current content to the undo history.
    pub fn commit(&mut self) -> bool {
        self.history.commit(&self.store)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> Result<(), BookError> {
        self.history.undo(&mut self.store)?;
        self.update_filter(Predicate::All);
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), BookError> {
        self.history.redo(&mut self.store)?;
        self.update_filter(Predicate::All);
        Ok(())
    }

    fn retain_selection(&mut self) {
        if let Some(selected) = &self.selected {
            if !self.filtered().iter().any(|r| r == selected) {
                self.selected = None;
            }
        }
    }
}
