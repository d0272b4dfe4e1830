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
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::storage::JsonStorage;
use crate::store::RecordStore;
use crate::types::level::Level;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(data_file: &Path, format: StatsFormat) -> Fallible<()> {
    let mut storage = JsonStorage::new(data_file.to_path_buf());
    let Some(store) = storage.load()? else {
        return fail("data file does not exist.");
    };
    let stats = Stats::new(&store);
    match format {
        StatsFormat::Text => {
            println!("Flashcards: {}", stats.flashcard_count);
            let counts = [stats.easy_count, stats.medium_count, stats.difficult_count];
            for (level, count) in Level::all().into_iter().zip(counts) {
                println!("Level {}: {count}", level.value());
            }
            println!("Tagged: {}", stats.tagged_count);
            println!("With deadline: {}", stats.deadline_count);
            if let Some(date) = &stats.earliest_deadline {
                println!("Earliest deadline: {date}");
            }
            println!("Subjects: {}", stats.subject_count);
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    flashcard_count: usize,
    easy_count: usize,
    medium_count: usize,
    difficult_count: usize,
    tagged_count: usize,
    deadline_count: usize,
    earliest_deadline: Option<String>,
    subject_count: usize,
}

impl Stats {
    fn new(store: &RecordStore) -> Self {
        let [easy, medium, difficult] = Level::all();
        let count = |level: Level| store.filtered_view(|r| r.level() == level).len();
        Self {
            flashcard_count: store.len(),
            easy_count: count(easy),
            medium_count: count(medium),
            difficult_count: count(difficult),
            tagged_count: store.filtered_view(|r| !r.tags().is_empty()).len(),
            deadline_count: store.filtered_view(|r| r.deadline().is_set()).len(),
            earliest_deadline: store
                .records()
                .iter()
                .filter_map(|r| r.deadline().date())
                .min()
                .map(|date| date.format("%Y-%m-%d").to_string()),
            subject_count: store.subjects().len(),
        }
    }
}
