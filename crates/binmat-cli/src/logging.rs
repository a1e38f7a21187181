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

//! Logging setup for the `binmat` binary.
//!
//! Logs go to stderr so stdout carries only results. `RUST_LOG` is honoured;
//! on top of it, the `binmat*` crates log at `warn` by default, `info` with
//! `-v` and `debug` with `-vv` or more.

use tracing_subscriber::EnvFilter;

/// The level applied to the `binmat*` targets for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the filter for a `-v` count.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match format!("binmat={}", level_for(verbosity)).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .try_init();
}
