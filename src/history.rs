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

use crate::store::RecordStore;
use crate::store::Snapshot;
use crate::types::book_error::BookError;

/// Undo/redo history over whole-store snapshots.
///
/// The log is seeded with the initial content of the store, and
/// `log[cursor]` always matches the store's current content. Entries before
/// the cursor can be undone to, entries after it can be redone to.
pub struct History {
    log: Vec<Snapshot>,
    cursor: usize,
    /// Maximum number of undoable steps. `None` is unbounded.
    limit: Option<usize>,
    /// The store revision that `log[cursor]` was taken at.
    synced_revision: u64,
}

impl History {
    pub fn new(store: &RecordStore, limit: Option<usize>) -> Self {
        Self {
            log: vec![store.snapshot()],
            cursor: 0,
            limit,
            synced_revision: store.revision(),
        }
    }

    /// True if the store changed since the last commit, undo or redo.
    pub fn is_dirty(&self, store: &RecordStore) -> bool {
        store.revision() != self.synced_revision
    }

    /// Records the store's current content as a new state, dropping the redo
    /// tail. Returns false, and records nothing, if the store has not changed.
    pub fn commit(&mut self, store: &RecordStore) -> bool {
        if !self.is_dirty(store) {
            log::debug!("Nothing to commit at revision {}.", store.revision());
            return false;
        }
        self.log.truncate(self.cursor + 1);
        self.log.push(store.snapshot());
        self.cursor += 1;
        self.synced_revision = store.revision();
        if let Some(limit) = self.limit {
            let excess = self.log.len().saturating_sub(limit + 1);
            if excess > 0 {
                self.log.drain(..excess);
                self.cursor -= excess;
                log::debug!("Evicted {excess} old state(s) from the history.");
            }
        }
        log::debug!(
            "Committed state {} of {} (revision {}).",
            self.cursor,
            self.log.len(),
            self.synced_revision
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.log.len()
    }

    pub fn undo(&mut self, store: &mut RecordStore) -> Result<(), BookError> {
        if !self.can_undo() {
            return Err(BookError::NoUndoableState);
        }
        self.cursor -= 1;
        self.checkout(store);
        log::debug!("Undo to state {} of {}.", self.cursor, self.log.len());
        Ok(())
    }

    pub fn redo(&mut self, store: &mut RecordStore) -> Result<(), BookError> {
        if !self.can_redo() {
            return Err(BookError::NoRedoableState);
        }
        self.cursor += 1;
        self.checkout(store);
        log::debug!("Redo to state {} of {}.", self.cursor, self.log.len());
        Ok(())
    }

    fn checkout(&mut self, store: &mut RecordStore) {
        store.restore(&self.log[self.cursor]);
        self.synced_revision = store.revision();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::RecordBuilder;
    use crate::helper::alice;
    use crate::helper::benson;
    use crate::helper::bob;
    use crate::helper::carl;
    use crate::helper::typical_store;

    #[test]
    fn test_undo_without_commits() {
        let mut store = typical_store();
        let mut history = History::new(&store, None);
        assert!(!history.can_undo());
        assert_eq!(history.undo(&mut store), Err(BookError::NoUndoableState));
        assert_eq!(store, typical_store());
    }

    #[test]
    fn test_redo_without_undo() {
        let mut store = typical_store();
        let mut history = History::new(&store, None);
        assert_eq!(history.redo(&mut store), Err(BookError::NoRedoableState));
    }

    #[test]
    fn test_undo_replace() -> Result<(), BookError> {
        let mut store = typical_store();
        let mut history = History::new(&store, None);
        let edited = RecordBuilder::from(&benson()).address("elsewhere").build();
        store.replace(&benson(), edited.clone())?;
        assert!(history.commit(&store));
        assert_eq!(store.records()[1], edited);
        history.undo(&mut store)?;
        assert_eq!(store.records()[1], benson());
        assert_eq!(store, typical_store());
        Ok(())
    }

    #[test]
    fn test_undo_redo_round_trip() -> Result<(), BookError> {
        let mut store = typical_store();
        let mut history = History::new(&store, None);
        store.remove(&alice())?;
        history.commit(&store);
        store.add(bob())?;
        history.commit(&store);
        let before = store.clone();
        history.undo(&mut store)?;
        assert_ne!(store, before);
        history.redo(&mut store)?;
        assert_eq!(store, before);
        // And the other way round.
        history.undo(&mut store)?;
        let middle = store.clone();
        history.redo(&mut store)?;
        history.undo(&mut store)?;
        assert_eq!(store, middle);
        Ok(())
    }

    #[test]
    fn test_commit_drops_redo_tail() -> Result<(), BookError> {
        let mut store = typical_store();
        let mut history = History::new(&store, None);
        store.remove(&alice())?;
        history.commit(&store);
        history.undo(&mut store)?;
        assert!(history.can_redo());
        store.remove(&carl())?;
        history.commit(&store);
        assert!(!history.can_redo());
        assert_eq!(history.redo(&mut store), Err(BookError::NoRedoableState));
        Ok(())
    }

    #[test]
    fn test_commit_without_change() -> Result<(), BookError> {
        let mut store = typical_store();
        let mut history = History::new(&store, None);
        assert!(!history.commit(&store));
        assert!(!history.can_undo());
        // A failed mutation leaves the store clean.
        assert!(store.add(alice()).is_err());
        assert!(!history.is_dirty(&store));
        assert!(!history.commit(&store));
        // Undo leaves the store clean too.
        store.remove(&alice())?;
        assert!(history.commit(&store));
        history.undo(&mut store)?;
        assert!(!history.is_dirty(&store));
        Ok(())
    }

    #[test]
    fn test_delete_all_then_undo_all() -> Result<(), BookError> {
        let mut store = typical_store();
        let initial = store.clone();
        let mut history = History::new(&store, None);
        let n = store.len();
        while let Some(first) = store.records().first().cloned() {
            store.remove(&first)?;
            history.commit(&store);
        }
        assert!(store.is_empty());
        for _ in 0..n {
            history.undo(&mut store)?;
        }
        assert_eq!(store, initial);
        assert_eq!(history.undo(&mut store), Err(BookError::NoUndoableState));
        Ok(())
    }

    #[test]
    fn test_limit_evicts_oldest() -> Result<(), BookError> {
        let mut store = typical_store();
        let mut history = History::new(&store, Some(2));
        store.remove(&alice())?;
        history.commit(&store);
        let after_first = store.clone();
        store.remove(&benson())?;
        history.commit(&store);
        store.remove(&carl())?;
        history.commit(&store);
        history.undo(&mut store)?;
        history.undo(&mut store)?;
        assert_eq!(store, after_first);
        assert_eq!(history.undo(&mut store), Err(BookError::NoUndoableState));
        history.redo(&mut store)?;
        history.redo(&mut store)?;
        assert_eq!(store.len(), 4);
        Ok(())
    }

    #[test]
    fn test_zero_limit() -> Result<(), BookError> {
        let mut store = typical_store();
        let mut history = History::new(&store, Some(0));
        store.remove(&alice())?;
        history.commit(&store);
        assert!(!history.can_undo());
        Ok(())
    }
}
