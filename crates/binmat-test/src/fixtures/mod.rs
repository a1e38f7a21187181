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

//! Canonical fixtures.
//!
//! - [`distance_cases`]: source grids with their expected distance rendering.
//! - [`valid_streams`]: stream texts with the renderings they must produce.
//! - [`invalid_streams`]: stream texts with the error they must fail with.

mod distances;
mod streams;

pub use distances::{distance_cases, DistanceCase};
pub use streams::{invalid_streams, valid_streams, InvalidStream, ValidStream};
