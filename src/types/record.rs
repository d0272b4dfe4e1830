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

use std::collections::BTreeSet;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::address::Address;
use crate::types::deadline::Deadline;
use crate::types::email::Email;
use crate::types::level::Level;
use crate::types::name::Name;
use crate::types::tag::Tag;

/// A flashcard. Every field is validated on construction, so a `Record` is
/// never in an invalid state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    name: Name,
    level: Level,
    email: Email,
    address: Address,
    deadline: Deadline,
    tags: BTreeSet<Tag>,
}

impl Record {
    pub fn new(
        name: Name,
        level: Level,
        email: Email,
        address: Address,
        deadline: Deadline,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            level,
            email,
            address,
            deadline,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// The weak identity used for duplicate detection: same name and level.
    pub fn is_same_record(&self, other: &Record) -> bool {
        self.name == other.name && self.level == other.level
    }

    /// A copy of this record with the given deadline.
    pub fn with_deadline(&self, deadline: Deadline) -> Record {
        Record {
            deadline,
            ..self.clone()
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Level: {} Email: {} Address: {} Deadline: {} Tags: ",
            self.name, self.level, self.email, self.address, self.deadline
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::RecordBuilder;
    use crate::helper::alice;
    use crate::helper::bob;

    #[test]
    fn test_fields_round_trip() {
        let record = RecordBuilder::new("Alice Pauline")
            .level("2")
            .email("alice@example.com")
            .address("123, Jurong West Ave 6, #08-111")
            .deadline("21 August 2022")
            .tags(&["friends", "cs"])
            .build();
        assert_eq!(record.name().as_str(), "Alice Pauline");
        assert_eq!(record.level().value(), 2);
        assert_eq!(record.email().as_str(), "alice@example.com");
        assert_eq!(record.address().as_str(), "123, Jurong West Ave 6, #08-111");
        assert_eq!(record.deadline().as_str(), "21 August 2022");
        let tags: Vec<&str> = record.tags().iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, vec!["cs", "friends"]);
    }

    #[test]
    fn test_is_same_record() {
        let alice = alice();
        // Same object.
        assert!(alice.is_same_record(&alice));
        // Different name.
        assert!(!alice.is_same_record(&bob()));
        // Same name and level, everything else different.
        let edited = RecordBuilder::from(&alice)
            .email("other@example.com")
            .address("elsewhere")
            .tags(&["husband"])
            .build();
        assert!(alice.is_same_record(&edited));
        assert_ne!(alice, edited);
        // Same name, different level.
        let edited = RecordBuilder::from(&alice).level("3").build();
        assert!(!alice.is_same_record(&edited));
    }

    #[test]
    fn test_equality() {
        let alice = alice();
        assert_eq!(alice, RecordBuilder::from(&alice).build());
        assert_ne!(alice, RecordBuilder::from(&alice).deadline("2030-01-01").build());
        assert_ne!(alice, RecordBuilder::from(&alice).tags(&[]).build());
    }

    #[test]
    fn test_with_deadline() -> Result<(), crate::types::book_error::BookError> {
        let alice = alice();
        let updated = alice.with_deadline(Deadline::new("2030-01-01")?);
        assert!(alice.is_same_record(&updated));
        assert_eq!(updated.deadline().as_str(), "2030-01-01");
        assert_eq!(updated.email(), alice.email());
        Ok(())
    }

    #[test]
    fn test_display() {
        let record = RecordBuilder::new("Alex Yeoh")
            .level("1")
            .email("alexyeoh@example.com")
            .address("Blk 30")
            .tags(&["friends"])
            .build();
        assert_eq!(
            record.to_string(),
            "Alex Yeoh Level: 1 Email: alexyeoh@example.com Address: Blk 30 Deadline: none Tags: [friends]"
        );
    }
}
