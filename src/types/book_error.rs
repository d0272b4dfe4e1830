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

use thiserror::Error;

/// Errors raised while validating, parsing, or executing a command. None of
/// these are fatal: the offending command is rejected and the session goes on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("{0}")]
    Validation(String),

    #[error("This flashcard already exists in the flash book.")]
    Duplicate,

    #[error("The flashcard could not be found.")]
    NotFound,

    #[error("The flashcard index provided is invalid")]
    InvalidIndex,

    #[error("This subject already exists in the subject book.")]
    DuplicateSubject,

    #[error("The subject could not be found.")]
    SubjectNotFound,

    #[error("The subject index provided is invalid")]
    InvalidSubjectIndex,

    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,

    #[error("No more commands to undo!")]
    NoUndoableState,

    #[error("No more commands to redo!")]
    NoRedoableState,

    #[error("Invalid command format! \n{0}")]
    InvalidFormat(&'static str),

    #[error("Unknown command")]
    UnknownCommand,
}
