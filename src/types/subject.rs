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
use crate::types::name::Name;
use crate::types::phone::Phone;
use crate::types::tag::Tag;

/// A subject in the subject book. Like a flashcard, but reached by phone
/// rather than graded by difficulty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    deadline: Deadline,
    tags: BTreeSet<Tag>,
}

impl Subject {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        deadline: Deadline,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            deadline,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
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

    /// Same name, and the same phone or email.
    pub fn is_same_subject(&self, other: &Subject) -> bool {
        self.name == other.name && (self.phone == other.phone || self.email == other.email)
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Deadline: {} Tags: ",
            self.name, self.phone, self.email, self.address, self.deadline
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
