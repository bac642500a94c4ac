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

//! Area-heading grouping.
//!
//! An area-sorted message list is rendered with a section heading wherever
//! the area changes at a chosen depth of the hierarchy, not on every
//! message. [`group_by_area`] computes those section breaks as a sparse
//! stamp per run of messages sharing the same truncated ancestor.

use log::debug;

use crate::error::{Error, Result};
use crate::msg::{AreaId, AreaTree, Message};

/// Result of a grouping pass over a message list.
///
/// Stamps are sparse: only the first message of each maximal run of equal
/// truncated-depth ancestors carries one; the messages that follow belong
/// to the most recently stamped heading. [`heading_of`](Self::heading_of)
/// derives that dense view when needed. A `Grouping` is a fresh value per
/// pass: nothing is written to the message list or the area tree, so
/// repeated passes can never leak stale heading state.
#[derive(Clone, PartialEq, Debug)]
pub struct Grouping {
    stamps: Vec<Option<AreaId>>,
    headings: Vec<AreaId>,
}

impl Grouping {
    /// Returns the heading stamped onto the message at `index`, if the
    /// message starts a new heading run.
    pub fn stamp(&self, index: usize) -> Option<AreaId> {
        self.stamps.get(index).copied().flatten()
    }

    /// Returns the heading the message at `index` belongs to: its own stamp
    /// or the most recent stamp before it in list order.
    pub fn heading_of(&self, index: usize) -> Option<AreaId> {
        self.stamps
            .get(..=index)?
            .iter()
            .rev()
            .find_map(|stamp| *stamp)
    }

    /// The heading areas in first-stamped order.
    pub fn headings(&self) -> &[AreaId] {
        &self.headings
    }

    /// Whether the area was chosen as a heading for at least one message.
    pub fn is_heading(&self, id: AreaId) -> bool {
        self.headings.contains(&id)
    }
}

/// Groups an ordered message list by area at the given hierarchy depth.
///
/// For each message with an area, the ancestor chain (root-first) is
/// truncated to `depth` levels (the node `depth` levels below the root, or
/// the leaf for shorter chains) and a heading is stamped whenever the
/// truncated ancestor differs from the previous one. List order is
/// significant: it determines the contiguous run boundaries. Messages
/// without an area neither start nor continue a run.
///
/// Fails with [`Error::InvalidDepth`] for a zero depth and propagates
/// [`Error::MalformedHierarchy`] from cyclic area data. The default depth
/// used by the message list view is 2, i.e. headings change with the top
/// two levels of the hierarchy.
pub fn group_by_area(messages: &[Message], tree: &AreaTree, depth: usize) -> Result<Grouping> {
    if depth == 0 {
        return Err(Error::InvalidDepth);
    }

    let mut stamps = vec![None; messages.len()];
    let mut headings = Vec::new();
    let mut last: Option<AreaId> = None;

    for (i, msg) in messages.iter().enumerate() {
        let Some(area) = msg.area else {
            continue;
        };

        let chain = tree.ancestor_chain(area)?;
        let Some(&selected) = chain.get(usize::min(chain.len().saturating_sub(1), depth - 1))
        else {
            // area unknown to the tree
            continue;
        };

        if last != Some(selected) {
            stamps[i] = Some(selected);
            if !headings.contains(&selected) {
                headings.push(selected);
            }
            last = Some(selected);
        }
    }

    debug!(
        "grouped {} message(s) under {} area heading(s) at depth {}",
        messages.len(),
        headings.len(),
        depth
    );

    Ok(Grouping { stamps, headings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{Area, Message, NoticeType, SeriesIdType, SeriesIdentifier};
    use time::macros::datetime;

    // Denmark (1) with subareas The Sound (11) and Kattegat (12); a second
    // root Greenland (2) with subarea Nuuk (21) below Kattegat's level.
    fn tree() -> AreaTree {
        let mut tree = AreaTree::new();
        tree.insert(Area::new(AreaId(1), None));
        tree.insert(Area::new(AreaId(11), Some(AreaId(1))));
        tree.insert(Area::new(AreaId(12), Some(AreaId(1))));
        tree.insert(Area::new(AreaId(2), None));
        tree.insert(Area::new(AreaId(21), Some(AreaId(2))));
        tree
    }

    fn message(id: u32, area: Option<AreaId>) -> Message {
        let series = SeriesIdentifier::new(SeriesIdType::Msi, "DK", Some(id), 2014);
        let mut msg = Message::new(
            id,
            series,
            NoticeType::CoastalWarning,
            datetime!(2014-07-01 12:00 UTC),
        );
        msg.area = area;
        msg
    }

    #[test]
    fn stamps_once_per_heading_run() {
        let messages = vec![
            message(1, Some(AreaId(11))),
            message(2, Some(AreaId(11))),
            message(3, Some(AreaId(12))),
            message(4, Some(AreaId(21))),
        ];

        let grouping = group_by_area(&messages, &tree(), 2).unwrap();

        assert_eq!(grouping.stamp(0), Some(AreaId(11)));
        assert_eq!(grouping.stamp(1), None);
        assert_eq!(grouping.stamp(2), Some(AreaId(12)));
        assert_eq!(grouping.stamp(3), Some(AreaId(21)));
        assert_eq!(grouping.headings(), &[AreaId(11), AreaId(12), AreaId(21)]);
    }

    #[test]
    fn depth_one_merges_subareas_under_their_root() {
        let messages = vec![
            message(1, Some(AreaId(11))),
            message(2, Some(AreaId(12))),
            message(3, Some(AreaId(21))),
        ];

        let grouping = group_by_area(&messages, &tree(), 1).unwrap();

        // both Danish subareas truncate to Denmark, so only the switch to
        // Greenland starts a new run
        assert_eq!(grouping.stamp(0), Some(AreaId(1)));
        assert_eq!(grouping.stamp(1), None);
        assert_eq!(grouping.stamp(2), Some(AreaId(2)));
        assert_eq!(grouping.headings(), &[AreaId(1), AreaId(2)]);
    }

    #[test]
    fn short_chains_select_the_leaf() {
        // a root-level message grouped at depth 2 uses the root itself
        let messages = vec![message(1, Some(AreaId(1)))];
        let grouping = group_by_area(&messages, &tree(), 2).unwrap();
        assert_eq!(grouping.stamp(0), Some(AreaId(1)));
    }

    #[test]
    fn general_messages_do_not_break_a_run() {
        let messages = vec![
            message(1, Some(AreaId(11))),
            message(2, None),
            message(3, Some(AreaId(11))),
        ];

        let grouping = group_by_area(&messages, &tree(), 2).unwrap();

        assert_eq!(grouping.stamp(0), Some(AreaId(11)));
        assert_eq!(grouping.stamp(1), None);
        // same heading as before the general message, so no new stamp
        assert_eq!(grouping.stamp(2), None);
        assert_eq!(grouping.heading_of(2), Some(AreaId(11)));
    }

    #[test]
    fn heading_of_follows_the_run() {
        let messages = vec![
            message(1, Some(AreaId(11))),
            message(2, Some(AreaId(11))),
            message(3, Some(AreaId(12))),
        ];

        let grouping = group_by_area(&messages, &tree(), 2).unwrap();

        assert_eq!(grouping.heading_of(0), Some(AreaId(11)));
        assert_eq!(grouping.heading_of(1), Some(AreaId(11)));
        assert_eq!(grouping.heading_of(2), Some(AreaId(12)));
    }

    #[test]
    fn regrouping_is_idempotent() {
        let messages = vec![
            message(1, Some(AreaId(11))),
            message(2, Some(AreaId(12))),
            message(3, None),
        ];
        let tree = tree();

        let first = group_by_area(&messages, &tree, 2).unwrap();
        let second = group_by_area(&messages, &tree, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let messages = vec![message(1, Some(AreaId(11)))];
        assert_eq!(
            group_by_area(&messages, &tree(), 0),
            Err(Error::InvalidDepth)
        );
    }

    #[test]
    fn unknown_area_is_skipped() {
        let messages = vec![message(1, Some(AreaId(99))), message(2, Some(AreaId(11)))];
        let grouping = group_by_area(&messages, &tree(), 2).unwrap();
        assert_eq!(grouping.stamp(0), None);
        assert_eq!(grouping.stamp(1), Some(AreaId(11)));
    }
}
