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

//! Incremental reader for binary matrix streams.
//!
//! Reads the line-oriented matrix format one line at a time, producing each
//! matrix as soon as its last row arrives:
//!
//! ```text
//! 2          <- number of matrices
//! 2 3        <- rows columns
//! 001        <- one line per row, each cell 0 or 1
//! 100
//!            <- separator between matrices
//! 1 1
//! 1
//! ```
//!
//! # Layers
//!
//! - [`MatrixReader`]: push-style state machine fed one line at a time. Knows
//!   nothing about I/O; reports a [`ReadOutcome`] per line.
//! - [`LineReader`]: splits a [`std::io::Read`] source into numbered lines.
//! - [`MatrixStream`]: iterator joining the two.
//! - `AsyncMatrixStream` (feature `async`): the same over tokio I/O.
//! - [`write_matrices`]: the inverse, producing stream text from grids.
//! - `write_random_stream` (feature `generate`): seeded random streams.
//!
//! # Quick Start
//!
//! ```rust
//! use binmat_core::distances;
//! use binmat_stream::{MatrixStream, ReaderLimits};
//! use std::io::Cursor;
//!
//! let input = "1\n3 4\n0001\n0011\n0110\n";
//! let limits = ReaderLimits::unlimited().with_max_rows(100).with_max_columns(100);
//!
//! for matrix in MatrixStream::with_limits(Cursor::new(input), limits) {
//!     let matrix = matrix.unwrap();
//!     assert_eq!(distances(&matrix).render(), "3 2 1 0\n2 1 0 0\n1 0 0 1");
//! }
//! ```
//!
//! # Errors
//!
//! Grammar violations carry a [`ReaderErrorCode`], the failing line and,
//! for row failures, the row and column within the current matrix. The first
//! error is terminal.

#![forbid(unsafe_code)]

mod error;
mod event;
mod limits;
mod parser;
mod reader;
mod stream;
mod writer;

#[cfg(feature = "generate")]
mod generate;

#[cfg(feature = "async")]
mod async_reader;
#[cfg(feature = "async")]
mod async_stream;

pub use error::{ReaderError, ReaderErrorCode, ReaderResult, StreamError, StreamResult};
pub use event::ReadOutcome;
pub use limits::ReaderLimits;
pub use parser::{read_all, MatrixReader, ReaderStageKind};
pub use reader::LineReader;
pub use stream::MatrixStream;
pub use writer::{to_stream_string, write_matrices, write_matrix};

#[cfg(feature = "generate")]
pub use generate::{random_grid, random_stream, write_random_stream};

#[cfg(feature = "async")]
pub use async_reader::AsyncLineReader;
#[cfg(feature = "async")]
pub use async_stream::AsyncMatrixStream;

/// Re-export core types for convenience.
pub use binmat_core::{Binary, Grid};
