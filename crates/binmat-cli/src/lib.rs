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

//! binmat CLI library.
//!
//! Command implementations behind the `binmat` binary. Each command reads a
//! matrix stream with [`binmat_stream`], runs [`binmat_core`] on it, and
//! writes results to stdout; diagnostics go to stderr.
//!
//! # Commands
//!
//! - **distances**: nearest-1 distance matrix for every input matrix
//! - **validate**: grammar and limit check with a per-matrix summary
//! - **generate**: random well-formed streams for testing and benchmarking
//! - **completion**: shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Limits
//!
//! `--max-count`, `--max-rows` and `--max-columns` bound what an input may
//! declare. When a flag is absent the `BINMAT_MAX_COUNT`, `BINMAT_MAX_ROWS`
//! and `BINMAT_MAX_COLUMNS` environment variables are used.
//!
//! # Examples
//!
//! ```no_run
//! use binmat_cli::commands::{distances, validate, OutputFormat};
//! use binmat_stream::ReaderLimits;
//!
//! # fn main() -> Result<(), binmat_cli::error::CliError> {
//! let limits = ReaderLimits::unlimited().with_max_rows(1000).with_max_columns(1000);
//! validate(Some("matrices.txt"), limits)?;
//! distances(Some("matrices.txt"), limits, OutputFormat::Json, true)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
