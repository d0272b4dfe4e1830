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

pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(address: &str) -> Result<Self, BookError> {
        let address = address.trim();
        if !Self::is_valid(address) {
            return Err(BookError::Validation(ADDRESS_CONSTRAINTS.to_string()));
        }
        Ok(Self(address.to_string()))
    }

    /// The first character must not be whitespace.
    pub fn is_valid(address: &str) -> bool {
        address.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validity() {
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid(" "));
        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(Address::is_valid("-"));
        assert!(Address::is_valid(
            "Leng Inc; 1234 Market St; San Francisco CA 2349879; USA"
        ));
    }
}
