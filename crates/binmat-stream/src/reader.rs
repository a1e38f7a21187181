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

//! Line source for the I/O-driven matrix streams.
//!
//! Splits a byte source into lines, stripping the `\n` or `\r\n` terminator
//! and numbering lines from 1. A final line without a terminator is still
//! delivered; the end of input produces no extra empty line.

use crate::error::{StreamError, StreamResult};
use std::io::{BufRead, BufReader, Read};

/// Buffered line reader with line number tracking.
///
/// # Examples
///
/// ```rust
/// use binmat_stream::LineReader;
/// use std::io::Cursor;
///
/// let mut lines = LineReader::new(Cursor::new("1\r\n2 2\n"));
///
/// assert_eq!(lines.next_line().unwrap(), Some((1, "1".to_string())));
/// assert_eq!(lines.next_line().unwrap(), Some((2, "2 2".to_string())));
/// assert_eq!(lines.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines delivered so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, or `None` at end of input.
    ///
    /// Invalid UTF-8 surfaces as [`StreamError::Io`] with
    /// [`std::io::ErrorKind::InvalidData`].
    pub fn next_line(&mut self) -> StreamResult<Option<(usize, String)>> {
        self.buffer.clear();

        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_number += 1;
                strip_line_ending(&mut self.buffer);
                Ok(Some((self.line_number, self.buffer.clone())))
            }
            Err(e) => Err(StreamError::Io(e)),
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = StreamResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Remove one trailing `\n` or `\r\n`.
pub(crate) fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
