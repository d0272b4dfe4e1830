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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;

const DEFAULT_CONFIG_FILE: &str = "flashbook.toml";

/// Settings read from `flashbook.toml`. Every key is optional.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the flash book is stored.
    pub data_file: PathBuf,
    /// Maximum number of undoable commands. Unbounded when absent.
    pub history_limit: Option<usize>,
    /// The shell prompt.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data").join("flashbook.json"),
            history_limit: None,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration. An explicitly given file must exist; the
    /// default `flashbook.toml` is used only if present.
    pub fn load(path: Option<&Path>) -> Fallible<Self> {
        let path: PathBuf = match path {
            Some(path) => {
                if !path.exists() {
                    return fail(format!(
                        "configuration file {} does not exist.",
                        path.display()
                    ));
                }
                path.to_path_buf()
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    log::debug!("No configuration file, using defaults.");
                    return Ok(Self::default());
                }
                path
            }
        };
        log::debug!("Reading configuration from {}.", path.display());
        let content = read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        Ok(toml::from_str(content)?)
    }
}
