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

//! Integration tests for shell completion generation

use assert_cmd::Command;
use predicates::prelude::*;

fn binmat_cmd() -> Command {
    Command::cargo_bin("binmat").expect("Failed to find binmat binary")
}

#[test]
fn test_completion_bash() {
    binmat_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_binmat()"))
        .stdout(predicate::str::contains("COMPREPLY"));
}

#[test]
fn test_completion_zsh() {
    binmat_cmd()
        .args(["completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef binmat"));
}

#[test]
fn test_completion_fish() {
    binmat_cmd()
        .args(["completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c binmat"));
}

#[test]
fn test_completion_lists_subcommands() {
    binmat_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distances"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_completion_install_instructions() {
    binmat_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binmat completion zsh"));
}

#[test]
fn test_completion_unsupported_shell() {
    binmat_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}
