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

//! Async matrix stream.
//!
//! Drives the same [`MatrixReader`] as [`MatrixStream`](crate::MatrixStream)
//! from a tokio [`AsyncRead`] source, yielding to the runtime while waiting
//! for lines.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! # async fn example<S>(socket: S) -> Result<(), Box<dyn std::error::Error>>
//! # where
//! #     S: tokio::io::AsyncRead + Unpin,
//! # {
//! use binmat_core::distances;
//! use binmat_stream::AsyncMatrixStream;
//!
//! let mut stream = AsyncMatrixStream::new(socket);
//!
//! while let Some(matrix) = stream.next_matrix().await? {
//!     println!("{}\n", distances(&matrix));
//! }
//! # Ok(())
//! # }
//! ```

use binmat_core::{Binary, Grid};
use std::sync::Arc;
use tokio::io::AsyncRead;

use crate::async_reader::AsyncLineReader;
use crate::error::{StreamError, StreamResult};
use crate::event::ReadOutcome;
use crate::limits::ReaderLimits;
use crate::parser::MatrixReader;

/// Async streaming matrix reader.
pub struct AsyncMatrixStream<R: AsyncRead + Unpin> {
    lines: AsyncLineReader<R>,
    reader: MatrixReader,
    exhausted: bool,
}

impl<R: AsyncRead + Unpin> AsyncMatrixStream<R> {
    /// Stream matrices from `input` without limits.
    pub fn new(input: R) -> Self {
        Self::with_limits(input, ReaderLimits::unlimited())
    }

    /// Stream matrices from `input`, enforcing `limits`.
    pub fn with_limits(input: R, limits: ReaderLimits) -> Self {
        Self {
            lines: AsyncLineReader::new(input),
            reader: MatrixReader::new(limits),
            exhausted: false,
        }
    }

    /// The underlying reader, for inspecting progress.
    #[inline]
    pub fn reader(&self) -> &MatrixReader {
        &self.reader
    }

    /// Read up to the next completed matrix.
    ///
    /// Returns `Ok(None)` once every declared matrix has been yielded, and
    /// after any error. The grid is shared with [`MatrixReader::matrices`].
    pub async fn next_matrix(&mut self) -> StreamResult<Option<Arc<Grid<Binary>>>> {
        if self.exhausted {
            return Ok(None);
        }

        loop {
            let outcome = match self.lines.next_line().await {
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
