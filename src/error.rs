// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use crate::msg::AreaId;

/// Errors raised by the message pipeline.
///
/// Both variants indicate a caller or data-integrity bug rather than a
/// transient condition; callers should surface them immediately. Anything
/// recoverable (absent areas, degenerate geometry, empty lists) is handled
/// permissively and never produces an error.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// The grouping depth must be at least one hierarchy level.
    InvalidDepth,
    /// Area ancestry exceeded the traversal cap, i.e. the parent links are
    /// cyclic or pathologically deep.
    MalformedHierarchy(AreaId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDepth => write!(f, "grouping depth must be at least 1"),
            Self::MalformedHierarchy(id) => {
                write!(f, "ancestry of area {id} is cyclic or too deep")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
