// Dweve binmat - Binary Matrix Distance Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: matrix commands (distances, validate, generate)
//! - [`utility`]: utility commands (completion)

mod core;
mod utility;

use crate::error::CliError;
use clap::{ArgAction, Parser, Subcommand};

pub use self::core::{CoreCommands, LimitArgs};
pub use self::utility::UtilityCommands;

/// binmat - distance to the nearest 1 in binary matrices
///
/// # Examples
///
/// ```bash
/// # Distances for every matrix in a file
/// binmat distances matrices.txt
///
/// # From stdin, as JSON, with limits
/// cat matrices.txt | binmat distances --format json --max-rows 1000
///
/// # Generate a benchmark input
/// binmat generate --count 10 --rows 1000 --columns 1000 --seed 42 > big.txt
/// ```
#[derive(Parser)]
#[command(name = "binmat")]
#[command(author, version, about = "binmat - distance to the nearest 1 in binary matrices", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (distances, validate, generate)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be read or is malformed, an argument
    /// is out of range, or writing the output fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
