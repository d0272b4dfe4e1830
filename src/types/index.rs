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

/// A position in the displayed list. Users count from one; the store counts
/// from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    /// Parses a strictly positive integer, as typed by a user. Only digits are
    /// accepted, so signs are rejected.
    pub fn parse(text: &str, usage: &'static str) -> Result<Self, BookError> {
        let text = text.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookError::InvalidFormat(usage));
        }
        text.parse::<usize>()
            .ok()
            .and_then(Self::from_one_based)
            .ok_or(BookError::InvalidFormat(usage))
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}
