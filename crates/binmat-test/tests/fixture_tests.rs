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

//! Runs every canonical fixture against the engine and the reader.

use binmat_core::distances;
use binmat_stream::{read_all, MatrixStream, ReaderLimits};
use binmat_test::fixtures::{distance_cases, invalid_streams, valid_streams};
use binmat_test::oracle::brute_force_distances;
use std::io::Cursor;

#[test]
fn test_distance_fixtures() {
    for case in distance_cases() {
        assert_eq!(
            distances(&case.source).render(),
            case.expected,
            "fixture {}",
            case.name
        );
    }
}

#[test]
fn test_oracle_agrees_with_fixtures() {
    for case in distance_cases() {
        assert_eq!(
            brute_force_distances(&case.source).render(),
            case.expected,
            "fixture {}",
            case.name
        );
    }
}

#[test]
fn test_valid_streams_read_all() {
    for stream in valid_streams() {
        let matrices = read_all(stream.text, ReaderLimits::unlimited())
            .unwrap_or_else(|e| panic!("fixture {}: {}", stream.name, e));
        let renders: Vec<String> = matrices.iter().map(|m| m.render()).collect();
        assert_eq!(renders, stream.matrices, "fixture {}", stream.name);
    }
}

#[test]
fn test_valid_streams_streamed() {
    for stream in valid_streams() {
        let renders: Vec<String> = MatrixStream::new(Cursor::new(stream.text))
            .map(|m| m.unwrap_or_else(|e| panic!("fixture {}: {}", stream.name, e)).render())
            .collect();
        assert_eq!(renders, stream.matrices, "fixture {}", stream.name);
    }
}

#[test]
fn test_invalid_streams_read_all() {
    for stream in invalid_streams() {
        let err = read_all(stream.text, ReaderLimits::unlimited())
            .expect_err(stream.name);
        assert_eq!(err.code, stream.code, "fixture {}", stream.name);
        assert_eq!(err.line, stream.line, "fixture {}", stream.name);
    }
}

#[test]
fn test_invalid_streams_streamed() {
    for stream in invalid_streams() {
        let err = MatrixStream::new(Cursor::new(stream.text))
            .find_map(Result::err)
            .unwrap_or_else(|| panic!("fixture {} should fail", stream.name));
        assert_eq!(err.code(), Some(stream.code), "fixture {}", stream.name);
        assert_eq!(err.line(), Some(stream.line), "fixture {}", stream.name);
    }
}
