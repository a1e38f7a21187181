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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

const SAMPLE: &str = "1\n3 4\n0001\n0011\n0110\n";
const MULTI: &str = "2\n3 4\n0001\n1100\n1010\n\n2 2\n10\n01";

// Test helper to create a binmat command with a clean limit environment
fn binmat_cmd() -> Command {
    let mut cmd = Command::cargo_bin("binmat").expect("Failed to find binmat binary");
    cmd.env_remove("BINMAT_MAX_COUNT")
        .env_remove("BINMAT_MAX_ROWS")
        .env_remove("BINMAT_MAX_COLUMNS")
        .env_remove("RUST_LOG");
    cmd
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    binmat_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("distance to the nearest 1"))
        .stdout(predicate::str::contains("distances"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_output() {
    binmat_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("binmat"));
}

#[test]
fn test_no_subcommand_fails() {
    binmat_cmd().assert().failure();
}

// ===== Distances Command Tests =====

#[test]
fn test_distances_from_file() {
    let file = create_temp_file(SAMPLE);

    binmat_cmd()
        .arg("distances")
        .arg(file.path())
        .assert()
        .success()
        .stdout("3 2 1 0\n2 1 0 0\n1 0 0 1\n");
}

#[test]
fn test_distances_from_stdin() {
    binmat_cmd()
        .arg("distances")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("3 2 1 0\n2 1 0 0\n1 0 0 1\n");
}

#[test]
fn test_distances_dash_is_stdin() {
    binmat_cmd()
        .args(["distances", "-"])
        .write_stdin("1\n1 1\n1\n")
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_distances_multiple_matrices() {
    binmat_cmd()
        .arg("distances")
        .write_stdin(MULTI)
        .assert()
        .success()
        .stdout("1 1 1 0\n0 0 1 1\n0 1 0 1\n\n0 1\n1 0\n");
}

#[test]
fn test_distances_json() {
    binmat_cmd()
        .args(["distances", "--format", "json"])
        .write_stdin(MULTI)
        .assert()
        .success()
        .stdout("[[1,1,1,0],[0,0,1,1],[0,1,0,1]]\n[[0,1],[1,0]]\n");
}

#[test]
fn test_distances_parallel_matches_sequential() {
    let input = "3\n2 2\n10\n00\n\n1 3\n001\n\n3 1\n0\n0\n1\n";
    let expected = "0 1\n1 2\n\n2 1 0\n\n2\n1\n0\n";

    binmat_cmd()
        .arg("distances")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(expected);

    binmat_cmd()
        .args(["distances", "--parallel"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_distances_grammar_error() {
    binmat_cmd()
        .arg("distances")
        .write_stdin("1\n1 2\n95\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("ColumnFormatInvalid at line 3"));
}

#[test]
fn test_distances_keeps_partial_output() {
    binmat_cmd()
        .arg("distances")
        .write_stdin("2\n1 2\n01\n\n1 1\nx\n")
        .assert()
        .failure()
        .stdout("1 0\n")
        .stderr(predicate::str::contains("ColumnFormatInvalid"));
}

#[test]
fn test_distances_input_closed() {
    binmat_cmd()
        .arg("distances")
        .write_stdin("2\n1 1\n1\n")
        .assert()
        .failure()
        .stdout("0\n")
        .stderr(predicate::str::contains(
            "before all declared matrices were read",
        ));
}

#[test]
fn test_distances_missing_file() {
    binmat_cmd()
        .arg("distances")
        .arg("/nonexistent/binmat/input.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

// ===== Limit Tests =====

#[test]
fn test_count_limit_flag() {
    binmat_cmd()
        .args(["distances", "--max-count", "1000"])
        .write_stdin("1001\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CountExceedsLimit"));
}

#[test]
fn test_dimension_limit_flags() {
    binmat_cmd()
        .args(["distances", "--max-rows", "2", "--max-columns", "2"])
        .write_stdin("1\n2 3\n000\n001\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DimensionsExceedLimit"));
}

#[test]
fn test_limit_from_environment() {
    binmat_cmd()
        .arg("distances")
        .env("BINMAT_MAX_ROWS", "1")
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("DimensionsExceedLimit"));
}

#[test]
fn test_flag_overrides_environment() {
    binmat_cmd()
        .args(["distances", "--max-rows", "3"])
        .env("BINMAT_MAX_ROWS", "1")
        .write_stdin(SAMPLE)
        .assert()
        .success();
}

#[test]
fn test_unparseable_environment_limit_is_ignored() {
    binmat_cmd()
        .arg("distances")
        .env("BINMAT_MAX_ROWS", "lots")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("3 2 1 0\n2 1 0 0\n1 0 0 1\n")
        .stderr(predicate::str::contains("ignoring unparseable limit"));
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_stream() {
    let file = create_temp_file(MULTI);

    binmat_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Matrices: 2"))
        .stdout(predicate::str::contains("Matrix 1: 3x4"))
        .stdout(predicate::str::contains("Matrix 2: 2x2"));
}

#[test]
fn test_validate_invalid_stream() {
    binmat_cmd()
        .arg("validate")
        .write_stdin("-1\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains("CountFormatInvalid"));
}

// ===== Generate Command Tests =====

#[test]
fn test_generate_is_valid_input() {
    let output = binmat_cmd()
        .args(["generate", "-n", "3", "--rows", "5", "--columns", "7", "--seed", "42"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("3\n5 7\n"));

    binmat_cmd()
        .arg("validate")
        .write_stdin(text)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrices: 3"));
}

#[test]
fn test_generate_seed_is_reproducible() {
    let run = || {
        binmat_cmd()
            .args(["generate", "--rows", "4", "--columns", "4", "--seed", "7"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_generate_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.txt");

    binmat_cmd()
        .args(["generate", "--rows", "2", "--columns", "3", "--density", "1"])
        .arg("--output")
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2 3\n111\n111\n");
}

#[test]
fn test_generate_rejects_bad_density() {
    binmat_cmd()
        .args(["generate", "--rows", "2", "--columns", "2", "--density", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("density"));
}

#[test]
fn test_generate_rejects_zero_rows() {
    binmat_cmd()
        .args(["generate", "--rows", "0", "--columns", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

// ===== Logging Tests =====

#[test]
fn test_verbose_logs_to_stderr_only() {
    binmat_cmd()
        .args(["-vv", "distances"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("3 2 1 0\n2 1 0 0\n1 0 0 1\n")
        .stderr(predicate::str::contains("matrix completed"));
}
