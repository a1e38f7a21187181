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

//! Async line source, mirroring [`LineReader`](crate::LineReader) over tokio I/O.

use crate::error::{StreamError, StreamResult};
use crate::reader::strip_line_ending;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Buffered async line reader with line number tracking.
pub struct AsyncLineReader<R: AsyncRead + Unpin> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl<R: AsyncRead + Unpin> AsyncLineReader<R> {
    /// Create a new async line reader.
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
    pub async fn next_line(&mut self) -> StreamResult<Option<(usize, String)>> {
        self.buffer.clear();

        match self.reader.read_line(&mut self.buffer).await {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn test_read_lines() {
        let mut reader = AsyncLineReader::new(Cursor::new("1\r\n1 1\n0"));
        assert_eq!(reader.next_line().await.unwrap(), Some((1, "1".to_string())));
        assert_eq!(reader.next_line().await.unwrap(), Some((2, "1 1".to_string())));
        assert_eq!(reader.next_line().await.unwrap(), Some((3, "0".to_string())));
        assert_eq!(reader.next_line().await.unwrap(), None);
        assert_eq!(reader.line_number(), 3);
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let mut reader = AsyncLineReader::new(Cursor::new(vec![0xffu8, b'\n']));
        assert!(matches!(reader.next_line().await, Err(StreamError::Io(_))));
    }
}
