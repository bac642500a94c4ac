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

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use time::OffsetDateTime;

use super::{AreaId, Location};

/// Main type of a message series: navigational warning or notice to mariners.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SeriesIdType {
    Msi,
    Nm,
}

impl SeriesIdType {
    /// Key used to pick the map icon for features of this series.
    pub fn icon_key(&self) -> &'static str {
        match self {
            SeriesIdType::Msi => "msi",
            SeriesIdType::Nm => "nm",
        }
    }
}

impl Display for SeriesIdType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesIdType::Msi => write!(f, "MSI"),
            SeriesIdType::Nm => write!(f, "NM"),
        }
    }
}

/// Unique identifier of a message within its series.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeriesIdentifier {
    pub main_type: SeriesIdType,
    pub authority: String,
    pub number: Option<u32>,
    pub year: i32,
}

impl SeriesIdentifier {
    pub fn new(main_type: SeriesIdType, authority: &str, number: Option<u32>, year: i32) -> Self {
        Self {
            main_type,
            authority: authority.to_string(),
            number,
            year,
        }
    }

    /// Short textual form, e.g. `DK-184-14`.
    ///
    /// A series identifier without a number renders as `DK-?-14`.
    pub fn short_id(&self) -> String {
        match self.number {
            Some(number) => format!("{}-{:03}-{:02}", self.authority, number, self.year - 2000),
            None => format!("{}-?-{:02}", self.authority, self.year - 2000),
        }
    }

    /// Full textual form, e.g. `MSI-DK-184-14`.
    pub fn full_id(&self) -> String {
        format!("{}-{}", self.main_type, self.short_id())
    }
}

impl Display for SeriesIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_id())
    }
}

/// Notice type of a message.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoticeType {
    PermanentNotice,
    TemporaryNotice,
    PreliminaryNotice,
    MiscellaneousNotice,
    LocalWarning,
    CoastalWarning,
    SubareaWarning,
    NavareaWarning,
}

impl NoticeType {
    /// Marker appended to displayed ids of temporary and preliminary
    /// notices, e.g. `NM-DK-021-14(T)`.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            NoticeType::TemporaryNotice => Some("(T)"),
            NoticeType::PreliminaryNotice => Some("(P)"),
            _ => None,
        }
    }
}

/// Lifecycle status of a message.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Draft,
    Published,
    Expired,
    Cancelled,
}

/// Localized texts of a message, one record per language.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageDesc {
    pub lang: String,
    pub title: Option<String>,
    pub vicinity: Option<String>,
    pub time: Option<String>,
}

impl MessageDesc {
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            ..Self::default()
        }
    }
}

/// A maritime safety message.
///
/// Messages arrive from a provider in a significant order, sorted by area,
/// which the grouping and filter engines rely on. A message without an
/// `area` is a "general" notice that applies to no particular region; a
/// message without `locations` cannot be charted and lands in the general
/// bucket of a filter result.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    pub id: u32,
    pub series_identifier: SeriesIdentifier,
    pub notice_type: NoticeType,
    pub status: Status,
    pub area: Option<AreaId>,
    pub locations: Vec<Location>,
    pub valid_from: OffsetDateTime,
    pub valid_to: Option<OffsetDateTime>,
    pub descs: Vec<MessageDesc>,
}

impl Message {
    pub fn new(
        id: u32,
        series_identifier: SeriesIdentifier,
        notice_type: NoticeType,
        valid_from: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            series_identifier,
            notice_type,
            status: Status::Published,
            area: None,
            locations: Vec::new(),
            valid_from,
            valid_to: None,
            descs: Vec::new(),
        }
    }

    /// Returns the description record for the given language.
    pub fn desc(&self, lang: &str) -> Option<&MessageDesc> {
        self.descs.iter().find(|d| d.lang == lang)
    }

    /// Attaches a description, replacing any record of the same language.
    pub fn set_desc(&mut self, desc: MessageDesc) {
        self.descs.retain(|d| d.lang != desc.lang);
        self.descs.push(desc);
    }

    /// A general message has no location geometry to chart.
    pub fn is_general(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_and_full_id_forms() {
        let id = SeriesIdentifier::new(SeriesIdType::Msi, "DK", Some(184), 2014);
        assert_eq!(id.short_id(), "DK-184-14");
        assert_eq!(id.full_id(), "MSI-DK-184-14");
    }

    #[test]
    fn series_id_without_number() {
        let id = SeriesIdentifier::new(SeriesIdType::Nm, "DK", None, 2014);
        assert_eq!(id.short_id(), "DK-?-14");
        assert_eq!(id.full_id(), "NM-DK-?-14");
    }

    #[test]
    fn notice_type_suffix() {
        assert_eq!(NoticeType::TemporaryNotice.suffix(), Some("(T)"));
        assert_eq!(NoticeType::PreliminaryNotice.suffix(), Some("(P)"));
        assert_eq!(NoticeType::PermanentNotice.suffix(), None);
        assert_eq!(NoticeType::CoastalWarning.suffix(), None);
    }
}
