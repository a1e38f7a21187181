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

//! Structured error types for the binmat CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error as
//! `Error: ...` on stderr and exits with a failure status.

use binmat_stream::{ReaderError, ReaderErrorCode, StreamError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for binmat CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use binmat_cli::error::CliError;
///
/// fn open(path: &str) -> Result<std::fs::File, CliError> {
///     std::fs::File::open(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file open, read, or write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path (or `<stdin>` / `<stdout>`) that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The input violated the matrix stream grammar or a configured limit.
    #[error("Invalid input in '{source_name}': {error}")]
    InvalidInput {
        /// Where the input came from
        source_name: String,
        /// The reader's diagnosis
        error: ReaderError,
    },

    /// The input ended before every declared matrix was read.
    ///
    /// Kept apart from [`CliError::InvalidInput`]: the data read so far was
    /// well-formed, the stream was cut short.
    #[error("Input '{source_name}' ended after {lines} lines, before all declared matrices were read")]
    InputClosed {
        /// Where the input came from
        source_name: String,
        /// Lines read before the end of input
        lines: usize,
    },

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// A command-line argument was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Completion was requested for an unknown shell.
    #[error("Unsupported shell: '{0}'. Supported shells: bash, zsh, fish, powershell, elvish")]
    UnsupportedShell(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Translate a stream failure on the named input.
    pub fn from_stream(source_name: &str, err: StreamError) -> Self {
        match err {
            StreamError::Io(e) => Self::io_error(source_name, e),
            StreamError::Reader(error) if error.code == ReaderErrorCode::InputClosed => {
                Self::InputClosed {
                    source_name: source_name.to_string(),
                    lines: error.line,
                }
            }
            StreamError::Reader(error) => Self::InvalidInput {
                source_name: source_name.to_string(),
                error,
            },
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The reader error code behind this error, if any.
    pub fn reader_code(&self) -> Option<ReaderErrorCode> {
        match self {
            Self::InvalidInput { error, .. } => Some(error.code),
            Self::InputClosed { .. } => Some(ReaderErrorCode::InputClosed),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_from_stream_grammar_error() {
        let reader_err = ReaderError::column_format_invalid("column 0 of row 0 should be 0 or 1", 3)
            .with_row(0)
            .with_column(0);
        let err = CliError::from_stream("input.txt", StreamError::Reader(reader_err));
        assert_eq!(err.reader_code(), Some(ReaderErrorCode::ColumnFormatInvalid));
        let msg = err.to_string();
        assert!(msg.contains("input.txt"));
        assert!(msg.contains("ColumnFormatInvalid at line 3"));
    }

    #[test]
    fn test_from_stream_input_closed_is_distinct() {
        let err = CliError::from_stream(
            "<stdin>",
            StreamError::Reader(ReaderError::input_closed(4)),
        );
        assert!(matches!(err, CliError::InputClosed { lines: 4, .. }));
        assert!(err.to_string().contains("ended after 4 lines"));
    }

    #[test]
    fn test_from_stream_io() {
        let io_err = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err = CliError::from_stream("<stdin>", StreamError::Io(io_err));
        assert!(matches!(err, CliError::Io { .. }));
        assert_eq!(err.reader_code(), None);
    }

    #[test]
    fn test_unsupported_shell() {
        let err = CliError::UnsupportedShell("tcsh".to_string());
        assert!(err.to_string().contains("tcsh"));
        assert!(err.to_string().contains("bash"));
    }

    #[test]
    fn test_clone() {
        let err = CliError::invalid_argument("density must be within [0, 1]");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
