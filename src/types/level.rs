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

use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::book_error::BookError;

pub const LEVEL_CONSTRAINTS: &str =
    "Difficulty should be either 1 (easy), 2 (medium) or 3 (difficult)!";

/// A flashcard's difficulty level: 1 (easy), 2 (medium) or 3 (difficult).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    pub fn new(level: &str) -> Result<Self, BookError> {
        let level = level.trim();
        if !Self::is_valid(level) {
            return Err(BookError::Validation(LEVEL_CONSTRAINTS.to_string()));
        }
        Ok(Self(level.as_bytes()[0] - b'0'))
    }

    pub fn is_valid(level: &str) -> bool {
        matches!(level, "1" | "2" | "3")
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> [Level; 3] {
        [Level(1), Level(2), Level(3)]
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
