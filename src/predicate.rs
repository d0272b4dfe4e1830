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

use crate::types::record::Record;

/// The filters the shell can put on the displayed list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Predicate {
    #[default]
    All,
    /// Any keyword equals a word of the name, ignoring case.
    NameKeywords(Vec<String>),
    /// Any keyword equals the level, ignoring case.
    LevelKeywords(Vec<String>),
    /// The record carries any of the tags.
    Tagged(Vec<String>),
}

impl Predicate {
    pub fn test(&self, record: &Record) -> bool {
        match self {
            Predicate::All => true,
            Predicate::NameKeywords(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(record.name().words(), keyword)),
            Predicate::LevelKeywords(keywords) => {
                let level = record.level().to_string();
                keywords
                    .iter()
                    .any(|keyword| contains_word_ignore_case([level.as_str()], keyword))
            }
            Predicate::Tagged(tags) => tags.iter().any(|tag| {
                record
                    .tags()
                    .iter()
                    .any(|t| t.as_str().eq_ignore_ascii_case(tag))
            }),
        }
    }
}

fn contains_word_ignore_case<'a>(words: impl IntoIterator<Item = &'a str>, keyword: &str) -> bool {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return false;
    }
    words
        .into_iter()
        .any(|word| word.to_lowercase() == keyword.to_lowercase())
}
