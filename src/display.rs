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

//! Label composition for message lists.
//!
//! Localization stays outside the core: every function here takes the
//! already-resolved localized pieces, an area-name lookup closure and an
//! optional [`MessageDesc`], and only composes them. The lookup is
//! typically backed by [`Area::desc`] for the UI language, but any source
//! will do.
//!
//! [`Area::desc`]: crate::msg::Area::desc

use crate::error::Result;
use crate::msg::{AreaId, AreaTree, Message, MessageDesc};

const AREA_DIVIDER: &str = " - ";

/// Composes the area lineage of an area, root-first.
///
/// Joins the names of the ancestor chain with `" - "` and appends the
/// `vicinity` qualifier, e.g. `Denmark - The Sound - N of Ven`. Areas the
/// lookup has no name for are skipped. When `below_heading` names the
/// current area heading, only the part of the chain strictly below it is
/// rendered; a list showing the heading as a section title repeats only
/// the remainder per message.
pub fn area_lineage<F>(
    tree: &AreaTree,
    area: Option<AreaId>,
    vicinity: Option<&str>,
    below_heading: Option<AreaId>,
    name: F,
) -> Result<String>
where
    F: Fn(AreaId) -> Option<String>,
{
    let chain = match area {
        Some(id) => tree.ancestor_chain(id)?,
        None => Vec::new(),
    };

    let start = below_heading
        .and_then(|heading| chain.iter().position(|&id| id == heading))
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut parts: Vec<String> = chain[start..].iter().filter_map(|&id| name(id)).collect();
    if let Some(vicinity) = vicinity.filter(|v| !v.is_empty()) {
        parts.push(vicinity.to_string());
    }

    Ok(parts.join(AREA_DIVIDER))
}

/// Composes the title line of a message: lineage, vicinity and title.
pub fn message_title_line<F>(
    tree: &AreaTree,
    msg: &Message,
    below_heading: Option<AreaId>,
    desc: Option<&MessageDesc>,
    name: F,
) -> Result<String>
where
    F: Fn(AreaId) -> Option<String>,
{
    let vicinity = desc.and_then(|d| d.vicinity.as_deref());
    let mut title = area_lineage(tree, msg.area, vicinity, below_heading, name)?;

    if let Some(msg_title) = desc.and_then(|d| d.title.as_deref()) {
        if !title.is_empty() {
            title.push_str(AREA_DIVIDER);
        }
        title.push_str(msg_title);
    }

    Ok(title)
}

/// Composes the displayed id of a message, e.g. `NM-DK-021-14(T).`
///
/// Only messages with a series number carry a displayed id.
pub fn message_display_id(msg: &Message) -> Option<String> {
    msg.series_identifier.number?;

    let mut id = msg.series_identifier.full_id();
    if let Some(suffix) = msg.notice_type.suffix() {
        id.push_str(suffix);
    }
    id.push('.');
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{Area, AreaDesc, NoticeType, SeriesIdType, SeriesIdentifier};
    use time::macros::datetime;

    fn tree() -> AreaTree {
        let mut denmark = Area::new(AreaId(1), None);
        denmark.set_desc(AreaDesc::new("en", "Denmark"));
        let mut sound = Area::new(AreaId(11), Some(AreaId(1)));
        sound.set_desc(AreaDesc::new("en", "The Sound"));

        let mut tree = AreaTree::new();
        tree.insert(denmark);
        tree.insert(sound);
        tree
    }

    fn name_in(tree: &AreaTree) -> impl Fn(AreaId) -> Option<String> + '_ {
        |id| tree.get(id)?.desc("en").map(|d| d.name.clone())
    }

    #[test]
    fn lineage_is_root_first_with_vicinity() {
        let tree = tree();
        let lineage = area_lineage(
            &tree,
            Some(AreaId(11)),
            Some("N of Ven"),
            None,
            name_in(&tree),
        )
        .unwrap();

        assert_eq!(lineage, "Denmark - The Sound - N of Ven");
    }

    #[test]
    fn lineage_below_heading_drops_the_heading_prefix() {
        let tree = tree();
        let lineage = area_lineage(
            &tree,
            Some(AreaId(11)),
            None,
            Some(AreaId(1)),
            name_in(&tree),
        )
        .unwrap();

        assert_eq!(lineage, "The Sound");
    }

    #[test]
    fn lineage_of_no_area_is_the_vicinity() {
        let tree = tree();
        let lineage = area_lineage(&tree, None, Some("Baltic"), None, name_in(&tree)).unwrap();
        assert_eq!(lineage, "Baltic");
    }

    #[test]
    fn unnamed_areas_are_skipped() {
        let mut tree = tree();
        tree.insert(Area::new(AreaId(111), Some(AreaId(11))));

        let lineage =
            area_lineage(&tree, Some(AreaId(111)), None, None, name_in(&tree)).unwrap();
        assert_eq!(lineage, "Denmark - The Sound");
    }

    #[test]
    fn title_line_appends_the_message_title() {
        let tree = tree();
        let series = SeriesIdentifier::new(SeriesIdType::Msi, "DK", Some(184), 2014);
        let mut msg = Message::new(
            1,
            series,
            NoticeType::CoastalWarning,
            datetime!(2014-07-01 12:00 UTC),
        );
        msg.area = Some(AreaId(11));
        let mut desc = MessageDesc::new("en");
        desc.title = Some("Drifting buoy".to_string());
        desc.vicinity = Some("N of Ven".to_string());
        msg.set_desc(desc);

        let line = message_title_line(
            &tree,
            &msg,
            None,
            msg.desc("en"),
            name_in(&tree),
        )
        .unwrap();

        assert_eq!(line, "Denmark - The Sound - N of Ven - Drifting buoy");
    }

    #[test]
    fn display_id_marks_temporary_notices() {
        let series = SeriesIdentifier::new(SeriesIdType::Nm, "DK", Some(21), 2014);
        let msg = Message::new(
            1,
            series,
            NoticeType::TemporaryNotice,
            datetime!(2014-07-01 12:00 UTC),
        );
        assert_eq!(message_display_id(&msg).as_deref(), Some("NM-DK-021-14(T)."));

        let unnumbered = Message::new(
            2,
            SeriesIdentifier::new(SeriesIdType::Nm, "DK", None, 2014),
            NoticeType::PermanentNotice,
            datetime!(2014-07-01 12:00 UTC),
        );
        assert_eq!(message_display_id(&unnumbered), None);
    }
}
