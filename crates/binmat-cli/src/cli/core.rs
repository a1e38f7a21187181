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

//! Matrix commands: distances, validation and generation.

use crate::commands::{self, GenerateOptions, OutputFormat};
use crate::error::CliError;
use binmat_stream::ReaderLimits;
use clap::{Args, Subcommand};

/// Reader limits shared by every command that reads a stream.
///
/// Absent flags fall back to `BINMAT_MAX_COUNT`, `BINMAT_MAX_ROWS` and
/// `BINMAT_MAX_COLUMNS`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitArgs {
    /// Maximum number of matrices the input may declare
    #[arg(long, value_name = "N")]
    pub max_count: Option<usize>,

    /// Maximum rows per matrix
    #[arg(long, value_name = "N")]
    pub max_rows: Option<usize>,

    /// Maximum columns per matrix
    #[arg(long, value_name = "N")]
    pub max_columns: Option<usize>,
}

impl LimitArgs {
    /// Resolve flags and environment into reader limits.
    pub fn resolve(&self) -> ReaderLimits {
        commands::resolve_limits(self.max_count, self.max_rows, self.max_columns)
    }
}

/// Matrix commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Print the distance to the nearest 1 for every cell of every matrix
    ///
    /// Reads a matrix stream from FILE (or stdin) and prints one distance
    /// matrix per input matrix, in input order, as soon as it is read.
    Distances {
        /// Input file path (stdin when absent or "-")
        #[arg(value_name = "FILE")]
        file: Option<String>,

        #[command(flatten)]
        limits: LimitArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Compute distances in parallel after reading the whole stream
        #[arg(short, long)]
        parallel: bool,
    },

    /// Check that a matrix stream is well-formed
    ///
    /// Reads the whole stream and reports the number of matrices and their
    /// dimensions, or the first error.
    Validate {
        /// Input file path (stdin when absent or "-")
        #[arg(value_name = "FILE")]
        file: Option<String>,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Write a random well-formed matrix stream
    Generate {
        /// Number of matrices
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Rows per matrix
        #[arg(short, long)]
        rows: usize,

        /// Columns per matrix
        #[arg(short, long)]
        columns: usize,

        /// Probability that a cell is 1
        #[arg(short, long, default_value_t = 0.5)]
        density: f64,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl CoreCommands {
    /// Execute the matrix command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Distances {
                file,
                limits,
                format,
                parallel,
            } => commands::distances(file.as_deref(), limits.resolve(), format, parallel),
            CoreCommands::Validate { file, limits } => {
                commands::validate(file.as_deref(), limits.resolve())
            }
            CoreCommands::Generate {
                count,
                rows,
                columns,
                density,
                seed,
                output,
            } => {
                let options = GenerateOptions {
                    count,
                    rows,
                    columns,
                    density,
                    seed,
                };
                commands::generate(&options, output.as_deref())
            }
        }
    }
}
