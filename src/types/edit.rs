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

use crate::types::address::Address;
use crate::types::email::Email;
use crate::types::level::Level;
use crate::types::name::Name;
use crate::types::record::Record;
use crate::types::tag::Tag;

/// A partial update to a record. `None` leaves the field as it is.
///
/// There is no deadline field: deadlines are only changed by the `deadline`
/// command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordEdit {
    pub name: Option<Name>,
    pub level: Option<Level>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl RecordEdit {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.level.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `record`.
    pub fn apply(&self, record: &Record) -> Record {
        Record::new(
            self.name.clone().unwrap_or_else(|| record.name().clone()),
            self.level.unwrap_or(record.level()),
            self.email.clone().unwrap_or_else(|| record.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| record.address().clone()),
            record.deadline().clone(),
            self.tags.clone().unwrap_or_else(|| record.tags().clone()),
        )
    }
}
