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

//! CLI command implementations

mod completion;
mod distances;
mod generate;
mod validate;

pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use distances::{distances, OutputFormat};
pub use generate::{generate, GenerateOptions};
pub use validate::validate;

use crate::error::CliError;
use binmat_stream::ReaderLimits;
use std::fs::File;
use std::io::{self, Read};
use tracing::warn;

/// Environment variable consulted when `--max-count` is absent.
pub const MAX_COUNT_ENV: &str = "BINMAT_MAX_COUNT";
/// Environment variable consulted when `--max-rows` is absent.
pub const MAX_ROWS_ENV: &str = "BINMAT_MAX_ROWS";
/// Environment variable consulted when `--max-columns` is absent.
pub const MAX_COLUMNS_ENV: &str = "BINMAT_MAX_COLUMNS";

/// Name used for the input in messages: the path, or `<stdin>`.
pub fn source_name(file: Option<&str>) -> &str {
    match file {
        None | Some("-") => "<stdin>",
        Some(path) => path,
    }
}

/// Open `file` for reading, or stdin when it is absent or `-`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be opened.
pub fn open_input(file: Option<&str>) -> Result<Box<dyn Read>, CliError> {
    match file {
        None | Some("-") => Ok(Box::new(io::stdin())),
        Some(path) => {
            let handle = File::open(path).map_err(|e| CliError::io_error(path, e))?;
            Ok(Box::new(handle))
        }
    }
}

/// Combine limit flags with their environment fallbacks.
///
/// A flag always wins. An environment value that does not parse as an
/// unsigned integer is ignored with a warning.
pub fn resolve_limits(
    max_count: Option<usize>,
    max_rows: Option<usize>,
    max_columns: Option<usize>,
) -> ReaderLimits {
    ReaderLimits {
        max_count: max_count.or_else(|| env_limit(MAX_COUNT_ENV)),
        max_rows: max_rows.or_else(|| env_limit(MAX_ROWS_ENV)),
        max_columns: max_columns.or_else(|| env_limit(MAX_COLUMNS_ENV)),
    }
}

fn env_limit(variable: &str) -> Option<usize> {
    let raw = std::env::var(variable).ok()?;
    parse_limit(variable, &raw)
}

fn parse_limit(variable: &str, raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(limit) => Some(limit),
        Err(_) => {
            warn!(variable, value = raw, "ignoring unparseable limit");
            None
        }
    }
}

/// Map a stdout write failure to a [`CliError`].
pub(crate) fn stdout_error(err: io::Error) -> CliError {
    CliError::io_error("<stdout>", err)
}
