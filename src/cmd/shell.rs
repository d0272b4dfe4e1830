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

use std::fs::File;
use std::io::BufReader;
use std::io::stdin;
use std::io::stdout;
use std::path::Path;

use crate::config::Config;
use crate::error::Fallible;
use crate::error::fail;
use crate::session::Session;
use crate::session::run_lines;
use crate::storage::JsonStorage;

/// Runs an interactive session on the terminal.
pub fn start_shell(config: &Config) -> Fallible<()> {
    let mut session = open_session(config)?;
    println!(
        "{} flashcards loaded. Type `help` for the list of commands.",
        session.model().store().len()
    );
    let mut output = stdout();
    run_lines(&mut session, stdin().lock(), &mut output, &config.prompt, false)?;
    println!();
    Ok(())
}

/// Runs every command in a script file, echoing each one.
pub fn run_script(config: &Config, script: &Path) -> Fallible<()> {
    if !script.exists() {
        return fail("script does not exist.");
    }
    let mut session = open_session(config)?;
    let reader = BufReader::new(File::open(script)?);
    let mut output = stdout();
    run_lines(&mut session, reader, &mut output, &config.prompt, true)
}

fn open_session(config: &Config) -> Fallible<Session> {
    let storage = JsonStorage::new(config.data_file.clone());
    Session::open(storage, config.history_limit)
}
