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

use crate::store::RecordStore;
use crate::types::address::Address;
use crate::types::book_error::BookError;
use crate::types::deadline::Deadline;
use crate::types::email::Email;
use crate::types::level::Level;
use crate::types::name::Name;
use crate::types::record::Record;
use crate::types::tag::Tag;

/// The flash book a new user starts with.
pub fn sample_store() -> Result<RecordStore, BookError> {
    RecordStore::from_records(vec![
        flashcard(
            "Alex Yeoh",
            "1",
            "alexyeoh@example.com",
            "Blk 30 Geylang Street 29, #06-40",
            &["friends"],
        )?,
        flashcard(
            "Bernice Yu",
            "1",
            "berniceyu@example.com",
            "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
            &["colleagues", "friends"],
        )?,
        flashcard(
            "Charlotte Oliveiro",
            "2",
            "charlotte@example.com",
            "Blk 11 Ang Mo Kio Street 74, #11-04",
            &["neighbours"],
        )?,
        flashcard(
            "David Li",
            "2",
            "lidavid@example.com",
            "Blk 436 Serangoon Gardens Street 26, #16-43",
            &["family"],
        )?,
        flashcard(
            "Irfan Ibrahim",
            "3",
            "irfan@example.com",
            "Blk 47 Tampines Street 20, #17-35",
            &["classmates"],
        )?,
        flashcard(
            "Roy Balakrishnan",
            "3",
            "royb@example.com",
            "Blk 45 Aljunied Street 85, #11-31",
            &["colleagues"],
        )?,
    ])
}

fn flashcard(
    name: &str,
    level: &str,
    email: &str,
    address: &str,
    tags: &[&str],
) -> Result<Record, BookError> {
    let tags = tags
        .iter()
        .map(|tag| Tag::new(tag))
        .collect::<Result<BTreeSet<Tag>, BookError>>()?;
    Ok(Record::new(
        Name::new(name)?,
        Level::new(level)?,
        Email::new(email)?,
        Address::new(address)?,
        Deadline::none(),
        tags,
    ))
}
