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

//! The binary cell type.

use crate::error::GridError;
use std::fmt;

/// A cell value restricted to exactly 0 or 1.
///
/// Ordered so that `Zero < One`. Displays as its decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Binary {
    /// The value 0.
    #[default]
    Zero,
    /// The value 1.
    One,
}

impl Binary {
    /// Returns `true` for [`Binary::One`].
    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Binary::One)
    }

    /// Returns `true` for [`Binary::Zero`].
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Binary::Zero)
    }

    /// The numeric value, 0 or 1.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Binary::Zero => 0,
            Binary::One => 1,
        }
    }
}

impl From<bool> for Binary {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Binary::One
        } else {
            Binary::Zero
        }
    }
}

impl From<Binary> for u8 {
    #[inline]
    fn from(value: Binary) -> Self {
        value.as_u8()
    }
}

impl TryFrom<u8> for Binary {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Binary::Zero),
            1 => Ok(Binary::One),
            other => Err(GridError::invalid_binary(other)),
        }
    }
}

impl TryFrom<char> for Binary {
    type Error = GridError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Binary::Zero),
            '1' => Ok(Binary::One),
            other => Err(GridError::invalid_binary(other)),
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Binary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Binary {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Binary::try_from(value).map_err(serde::de::Error::custom)
    }
}
