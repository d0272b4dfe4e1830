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

use chrono::NaiveDate;

use crate::types::book_error::BookError;

pub const DEADLINE_CONSTRAINTS: &str =
    "Deadlines should be empty, or a date such as 21 August 2022 or 2022-08-21";

const DATE_FORMATS: [&str; 2] = ["%d %B %Y", "%Y-%m-%d"];

/// A flashcard's deadline. The empty deadline means there is none.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Deadline {
    value: String,
    date: Option<NaiveDate>,
}

impl Deadline {
    pub fn new(deadline: &str) -> Result<Self, BookError> {
        let value = deadline.trim();
        if value.is_empty() {
            return Ok(Self::none());
        }
        match parse_date(value) {
            Some(date) => Ok(Self {
                value: value.to_string(),
                date: Some(date),
            }),
            None => Err(BookError::Validation(DEADLINE_CONSTRAINTS.to_string())),
        }
    }

    pub fn none() -> Self {
        Self {
            value: String::new(),
            date: None,
        }
    }

    pub fn is_valid(deadline: &str) -> bool {
        let deadline = deadline.trim();
        deadline.is_empty() || parse_date(deadline).is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn is_set(&self) -> bool {
        self.date.is_some()
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

impl Display for Deadline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.value)
        }
    }
}
