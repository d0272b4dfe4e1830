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

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::cmd::check::check_data;
use crate::cmd::export::export_data;
use crate::cmd::shell::run_script;
use crate::cmd::shell::start_shell;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::config::Config;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file. Defaults to `flashbook.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to the data file. Overrides the configuration.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session. This is the default.
    Shell,
    /// Run the commands in a script file.
    Run {
        /// Path to the script.
        script: PathBuf,
    },
    /// Check that the data file is valid.
    Check,
    /// Print the flash book as JSON.
    Export,
    /// Print flash book statistics.
    Stats {
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let mut config: Config = Config::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    log::debug!("Using data file {}.", config.data_file.display());
    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => start_shell(&config),
        Command::Run { script } => run_script(&config, &script),
        Command::Check => check_data(&config.data_file),
        Command::Export => export_data(&config.data_file),
        Command::Stats { format } => print_stats(&config.data_file, format),
    }
}
