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

//! Error types for the matrix reader.
//!
//! Every grammar violation is reported as a [`ReaderError`] carrying one code
//! from the closed [`ReaderErrorCode`] set, a human-readable message, and the
//! line that triggered it. Failures of the underlying byte source are kept
//! apart in [`StreamError`], which only the I/O-driven streams produce.
//!
//! # Examples
//!
//! ```rust
//! use binmat_stream::{MatrixReader, ReadOutcome, ReaderErrorCode, ReaderLimits};
//!
//! let mut reader = MatrixReader::new(ReaderLimits::unlimited());
//!
//! match reader.feed_line("-1") {
//!     ReadOutcome::Failed(err) => {
//!         assert_eq!(err.code, ReaderErrorCode::CountFormatInvalid);
//!         assert_eq!(err.line, 1);
//!         eprintln!("{}", err);
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// The closed set of reader failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderErrorCode {
    /// The count line is not a positive integer.
    CountFormatInvalid,
    /// The declared count is above the configured limit.
    CountExceedsLimit,
    /// The dimensions line is not two positive integers separated by one space.
    DimensionsFormatInvalid,
    /// A declared dimension is above the configured limit.
    DimensionsExceedLimit,
    /// A row line is shorter than the declared column count.
    RowFormatInvalid,
    /// A row character is not `0` or `1`.
    ColumnFormatInvalid,
    /// The input ended before the declared matrices were read.
    InputClosed,
}

impl ReaderErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ReaderErrorCode; 7] = [
        ReaderErrorCode::CountFormatInvalid,
        ReaderErrorCode::CountExceedsLimit,
        ReaderErrorCode::DimensionsFormatInvalid,
        ReaderErrorCode::DimensionsExceedLimit,
        ReaderErrorCode::RowFormatInvalid,
        ReaderErrorCode::ColumnFormatInvalid,
        ReaderErrorCode::InputClosed,
    ];

    /// Whether the code reports a configured limit rather than bad syntax.
    #[inline]
    pub fn is_limit(self) -> bool {
        matches!(self, Self::CountExceedsLimit | Self::DimensionsExceedLimit)
    }
}

impl fmt::Display for ReaderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountFormatInvalid => write!(f, "CountFormatInvalid"),
            Self::CountExceedsLimit => write!(f, "CountExceedsLimit"),
            Self::DimensionsFormatInvalid => write!(f, "DimensionsFormatInvalid"),
            Self::DimensionsExceedLimit => write!(f, "DimensionsExceedLimit"),
            Self::RowFormatInvalid => write!(f, "RowFormatInvalid"),
            Self::ColumnFormatInvalid => write!(f, "ColumnFormatInvalid"),
            Self::InputClosed => write!(f, "InputClosed"),
        }
    }
}

/// A terminal reader failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} at line {line}: {message}")]
pub struct ReaderError {
    /// What went wrong.
    pub code: ReaderErrorCode,
    /// Human-readable description.
    pub message: String,
    /// 1-based line that failed; for `InputClosed`, the number of lines read.
    pub line: usize,
    /// 0-based row within the current matrix, for row-level failures.
    pub row: Option<usize>,
    /// 0-based column within the row, for `ColumnFormatInvalid`.
    pub column: Option<usize>,
}

impl ReaderError {
    /// Create a new error.
    pub fn new(code: ReaderErrorCode, message: impl Into<String>, line: usize) -> Self {
        Self {
            code,
            message: message.into(),
            line,
            row: None,
            column: None,
        }
    }

    /// Add row information.
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Add column information.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    // Convenience constructors for each code
    pub fn count_format_invalid(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReaderErrorCode::CountFormatInvalid, message, line)
    }

    pub fn count_exceeds_limit(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReaderErrorCode::CountExceedsLimit, message, line)
    }

    pub fn dimensions_format_invalid(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReaderErrorCode::DimensionsFormatInvalid, message, line)
    }

    pub fn dimensions_exceed_limit(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReaderErrorCode::DimensionsExceedLimit, message, line)
    }

    pub fn row_format_invalid(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReaderErrorCode::RowFormatInvalid, message, line)
    }

    pub fn column_format_invalid(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReaderErrorCode::ColumnFormatInvalid, message, line)
    }

    /// The input ended after `lines` lines, before the grammar was satisfied.
    pub fn input_closed(lines: usize) -> Self {
        Self::new(ReaderErrorCode::InputClosed, "Input closed unexpectedly", lines)
    }
}

/// Result type for reader operations.
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors produced by the I/O-driven matrix streams.
#[derive(Error, Debug)]
pub enum StreamError {
    /// Reading from the line source failed (including invalid UTF-8).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The reader rejected the input.
    #[error(transparent)]
    Reader(#[from] ReaderError),
}

impl StreamError {
    /// The reader error code, if this is a grammar failure.
    #[inline]
    pub fn code(&self) -> Option<ReaderErrorCode> {
        match self {
            Self::Reader(err) => Some(err.code),
            Self::Io(_) => None,
        }
    }

    /// The failing line, if this is a grammar failure.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Reader(err) => Some(err.line),
            Self::Io(_) => None,
        }
    }
}

/// Result type for streaming operations.
pub type StreamResult<T> = Result<T, StreamError>;
