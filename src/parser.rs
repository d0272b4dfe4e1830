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

use crate::command::Command;
use crate::types::book_error::BookError;

/// A field prefix in command arguments, e.g. `n/` in `add n/Alice`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prefix {
    Name,
    Level,
    Phone,
    Email,
    Address,
    Deadline,
    Tag,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Level => "l/",
            Prefix::Phone => "p/",
            Prefix::Email => "e/",
            Prefix::Address => "a/",
            Prefix::Deadline => "d/",
            Prefix::Tag => "t/",
        }
    }
}

/// Command arguments split into a preamble (the text before the first
/// prefix) and the prefixed values, in the order they were given.
#[derive(Debug, PartialEq, Eq)]
pub struct Arguments {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl Arguments {
    /// Splits `args` on the given prefixes. A prefix only counts when it
    /// follows whitespace, so `a/` inside `n/Jan a/b` is found but the one in
    /// `n/Jana/b` is not.
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> Self {
        let args = format!(" {args}");
        let mut positions: Vec<(usize, Prefix)> = Vec::new();
        for prefix in prefixes {
            for (position, _) in args.match_indices(prefix.as_str()) {
                let preceded_by_space = args[..position]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace);
                if preceded_by_space {
                    positions.push((position, *prefix));
                }
            }
        }
        positions.sort_by_key(|(position, _)| *position);

        let preamble_end = positions.first().map_or(args.len(), |(p, _)| *p);
        let preamble = args[..preamble_end].trim().to_string();
        let mut values = Vec::with_capacity(positions.len());
        for (i, (position, prefix)) in positions.iter().enumerate() {
            let start = position + prefix.as_str().len();
            let end = positions.get(i + 1).map_or(args.len(), |(p, _)| *p);
            values.push((*prefix, args[start..end].trim().to_string()));
        }
        Self { preamble, values }
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// Every value given for `prefix`, in order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Parses one line of input into a command.
pub fn parse_line(line: &str) -> Result<Command, BookError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(BookError::InvalidFormat(crate::command::HELP_USAGE));
    }
    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (line, ""),
    };
    Command::from_parts(word, args)
}
