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

//! Iterator over the matrices of a byte source.
//!
//! [`MatrixStream`] drives a [`MatrixReader`] from a [`LineReader`], yielding
//! each matrix as soon as its last row is read. The end of the source is
//! reported to the reader, so a truncated input ends the iteration with an
//! `InputClosed` error instead of silently stopping short.
//!
//! # Examples
//!
//! ```rust
//! use binmat_stream::MatrixStream;
//! use std::io::Cursor;
//!
//! let input = "2\n2 2\n10\n01\n\n1 3\n010\n";
//! let matrices: Vec<_> = MatrixStream::new(Cursor::new(input))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(matrices.len(), 2);
//! assert_eq!(matrices[1].render(), "0 1 0");
//! ```

use binmat_core::{Binary, Grid};
use std::io::Read;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::error::{StreamError, StreamResult};
use crate::event::ReadOutcome;
use crate::limits::ReaderLimits;
use crate::parser::MatrixReader;
use crate::reader::LineReader;

/// Streaming matrix iterator over any [`Read`] source.
///
/// Yields `Ok(grid)` per matrix, then `None`. The first error is yielded once
/// and ends the iteration.
pub struct MatrixStream<R: Read> {
    lines: LineReader<R>,
    reader: MatrixReader,
    exhausted: bool,
}

impl<R: Read> MatrixStream<R> {
    /// Stream matrices from `input` without limits.
    pub fn new(input: R) -> Self {
        Self::with_limits(input, ReaderLimits::unlimited())
    }

    /// Stream matrices from `input`, enforcing `limits`.
    pub fn with_limits(input: R, limits: ReaderLimits) -> Self {
        Self::from_lines(LineReader::new(input), limits)
    }

    /// Stream matrices from an existing line reader.
    pub fn from_lines(lines: LineReader<R>, limits: ReaderLimits) -> Self {
        Self {
            lines,
            reader: MatrixReader::new(limits),
            exhausted: false,
        }
    }

    /// The underlying reader, for inspecting progress.
    #[inline]
    pub fn reader(&self) -> &MatrixReader {
        &self.reader
    }

    /// Number of lines pulled from the source.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    /// Read up to the next completed matrix.
    ///
    /// Returns `Ok(None)` once every declared matrix has been yielded, and
    /// after any error. The grid is shared with [`MatrixReader::matrices`].
    pub fn next_matrix(&mut self) -> StreamResult<Option<Arc<Grid<Binary>>>> {
        if self.exhausted {
            return Ok(None);
        }

        loop {
            let outcome = match self.lines.next_line() {
                Ok(Some((_, line))) => self.reader.feed_line(&line),
                Ok(None) => self.reader.finish(),
                Err(e) => {
                    self.exhausted = true;
                    return Err(e);
                }
            };

            match outcome {
                ReadOutcome::Continue => continue,
                ReadOutcome::MatrixCompleted(grid) => return Ok(Some(grid)),
                ReadOutcome::Finished(mut matrices) => {
                    self.exhausted = true;
                    return Ok(matrices.pop());
                }
                ReadOutcome::Failed(err) => {
                    self.exhausted = true;
                    return Err(StreamError::Reader(err));
                }
                ReadOutcome::Closed => {
                    self.exhausted = true;
                    return Ok(None);
                }
            }
        }
    }
}

impl<R: Read> Iterator for MatrixStream<R> {
    type Item = StreamResult<Arc<Grid<Binary>>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_matrix() {
            Ok(Some(grid)) => Some(Ok(grid)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R: Read> FusedIterator for MatrixStream<R> {}
