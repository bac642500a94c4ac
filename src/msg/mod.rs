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

//! Message Data.
//!
//! The in-memory model of maritime safety messages as delivered by a
//! provider: the area hierarchy messages are sorted by, the messages
//! themselves with their validity window and series identifier, and the
//! typed location geometries attached to them. Localized descriptions are
//! plain records; looking one up by language tag is the extent of the
//! localization this crate performs.

mod area;
mod location;
mod message;

pub use area::{Area, AreaDesc, AreaId, AreaTree, MAX_ANCESTRY};
pub use location::{Location, LocationKind};
pub use message::{Message, MessageDesc, NoticeType, SeriesIdType, SeriesIdentifier, Status};
