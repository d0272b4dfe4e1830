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
use std::sync::LazyLock;

use regex::Regex;

use crate::types::book_error::BookError;

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").unwrap());

/// A flashcard's name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, BookError> {
        let name = name.trim();
        if !Self::is_valid(name) {
            return Err(BookError::Validation(NAME_CONSTRAINTS.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn is_valid(name: &str) -> bool {
        NAME_PATTERN.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(Name::is_valid("peter jack"));
        assert!(Name::is_valid("12345"));
        assert!(Name::is_valid("peter the 2nd"));
        assert!(Name::is_valid("Capital Tan"));
        assert!(Name::is_valid("David Roger Jackson Ray Jr 2nd"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" "));
        assert!(!Name::is_valid("^"));
        assert!(!Name::is_valid("peter*"));
        assert!(!Name::is_valid("José"));
        assert!(!Name::is_valid("李小龙"));
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = Name::new("  Alice Pauline ").unwrap();
        assert_eq!(name.as_str(), "Alice Pauline");
        assert_eq!(name.words().collect::<Vec<_>>(), vec!["Alice", "Pauline"]);
    }

    #[test]
    fn test_invalid_name_message() {
        assert_eq!(
            Name::new("").unwrap_err(),
            BookError::Validation(NAME_CONSTRAINTS.to_string())
        );
    }
}
