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

//! Message filtering by heading selection and validity.

use std::collections::{HashMap, HashSet};

use log::debug;
use time::OffsetDateTime;

use crate::grouping::Grouping;
use crate::msg::{AreaId, Message};

/// Per-heading selection flags, default selected.
///
/// Tracks the heading areas of a [`Grouping`] with a boolean each. An area
/// never entered into the selection counts as selected.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct HeadingSelection {
    selected: HashMap<AreaId, bool>,
}

impl HeadingSelection {
    /// Creates a selection covering all headings of a grouping, selected.
    pub fn from_grouping(grouping: &Grouping) -> Self {
        Self {
            selected: grouping.headings().iter().map(|&id| (id, true)).collect(),
        }
    }

    pub fn set(&mut self, id: AreaId, selected: bool) {
        self.selected.insert(id, selected);
    }

    pub fn is_selected(&self, id: AreaId) -> bool {
        self.selected.get(&id).copied().unwrap_or(true)
    }

    /// The headings a filter pass restricts to.
    ///
    /// An empty selected subset means no restriction: deselecting every
    /// heading shows everything rather than nothing.
    fn effective(&self) -> HashSet<AreaId> {
        let selected: HashSet<AreaId> = self
            .selected
            .iter()
            .filter(|(_, &on)| on)
            .map(|(&id, _)| id)
            .collect();

        if selected.is_empty() {
            self.selected.keys().copied().collect()
        } else {
            selected
        }
    }
}

/// The visible subset of a message list, as indices into the input slice.
///
/// `general` is the subset of `visible` without any location geometry,
/// notices that apply at large and cannot be charted. Both preserve list
/// order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterResult {
    pub visible: Vec<usize>,
    pub general: Vec<usize>,
}

/// Filter over a grouped message list.
///
/// Configured fluently and applied any number of times as the heading
/// selection or the validity toggle changes:
///
/// ```
/// # use msimap::filter::{HeadingSelection, MessageFilter};
/// # use msimap::grouping::Grouping;
/// # use msimap::msg::Message;
/// # fn refilter(messages: &[Message], grouping: &Grouping, selection: HeadingSelection) {
/// let result = MessageFilter::new(selection).active_only(true).apply(messages, grouping);
/// println!("{} of {} visible", result.visible.len(), messages.len());
/// # }
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MessageFilter {
    selection: HeadingSelection,
    active_only: bool,
    now: Option<OffsetDateTime>,
}

impl MessageFilter {
    pub fn new(selection: HeadingSelection) -> Self {
        Self {
            selection,
            active_only: false,
            now: None,
        }
    }

    /// Restricts to messages whose validity has started.
    ///
    /// Only the lower bound is checked: a message whose `valid_from` lies in
    /// the future is excluded, while one past its `valid_to` is not. This
    /// mirrors the observed filtering policy of the message list view.
    pub fn active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    /// Pins the instant `active_only` compares against; defaults to the
    /// moment [`apply`](Self::apply) is called.
    pub fn at(mut self, now: OffsetDateTime) -> Self {
        self.now = Some(now);
        self
    }

    /// Computes the visible subset of `messages`.
    ///
    /// The grouping must stem from the same message list: the current
    /// heading of each message is re-derived from the sparse stamps by
    /// carrying the most recently seen stamp forward in list order. A
    /// message is visible iff
    ///
    /// 1. it has no area at all (general notices ignore the heading
    ///    selection), or its current heading is effective, and
    /// 2. `active_only` is off or its validity has started.
    pub fn apply(&self, messages: &[Message], grouping: &Grouping) -> FilterResult {
        let now = self.now.unwrap_or_else(OffsetDateTime::now_utc);
        let effective = self.selection.effective();

        let mut result = FilterResult::default();
        let mut current: Option<AreaId> = None;

        for (i, msg) in messages.iter().enumerate() {
            if let Some(stamp) = grouping.stamp(i) {
                current = Some(stamp);
            }

            let by_area = match msg.area {
                None => true,
                Some(_) => current.is_some_and(|heading| effective.contains(&heading)),
            };
            let by_time = !self.active_only || msg.valid_from <= now;

            if by_area && by_time {
                result.visible.push(i);
                if msg.is_general() {
                    result.general.push(i);
                }
            }
        }

        debug!(
            "filter pass: {} of {} message(s) visible, {} general",
            result.visible.len(),
            messages.len(),
            result.general.len()
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_by_area;
    use crate::msg::{
        Area, AreaTree, Location, Message, NoticeType, SeriesIdType, SeriesIdentifier,
    };
    use geo::Point;
    use time::macros::datetime;

    fn tree() -> AreaTree {
        let mut tree = AreaTree::new();
        tree.insert(Area::new(AreaId(1), None));
        tree.insert(Area::new(AreaId(11), Some(AreaId(1))));
        tree.insert(Area::new(AreaId(12), Some(AreaId(1))));
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
        msg.locations = vec![Location::Point {
            points: vec![Point::new(11.0, 56.0)],
        }];
        msg
    }

    fn grouped(messages: &[Message]) -> Grouping {
        group_by_area(messages, &tree(), 2).unwrap()
    }

    #[test]
    fn deselected_heading_hides_its_run() {
        let messages = vec![
            message(1, Some(AreaId(11))),
            message(2, Some(AreaId(11))),
            message(3, Some(AreaId(12))),
        ];
        let grouping = grouped(&messages);

        let mut selection = HeadingSelection::from_grouping(&grouping);
        selection.set(AreaId(11), false);

        let result = MessageFilter::new(selection).apply(&messages, &grouping);
        assert_eq!(result.visible, vec![2]);
    }

    #[test]
    fn empty_selection_means_no_restriction() {
        let messages = vec![message(1, Some(AreaId(11))), message(2, Some(AreaId(12)))];
        let grouping = grouped(&messages);

        let mut selection = HeadingSelection::from_grouping(&grouping);
        selection.set(AreaId(11), false);
        selection.set(AreaId(12), false);

        let all = MessageFilter::new(HeadingSelection::from_grouping(&grouping))
            .apply(&messages, &grouping);
        let none_selected = MessageFilter::new(selection).apply(&messages, &grouping);

        assert_eq!(none_selected.visible, all.visible);
    }

    #[test]
    fn messages_without_area_are_always_visible() {
        let messages = vec![message(1, Some(AreaId(11))), message(2, None)];
        let grouping = grouped(&messages);

        let mut selection = HeadingSelection::from_grouping(&grouping);
        selection.set(AreaId(11), false);
        // deselecting the only heading falls back to "all effective", so
        // pin a second entry to keep the subset genuinely restrictive
        selection.set(AreaId(12), true);

        let result = MessageFilter::new(selection).apply(&messages, &grouping);
        assert_eq!(result.visible, vec![1]);
    }

    #[test]
    fn active_only_checks_the_lower_bound_only() {
        let mut started = message(1, Some(AreaId(11)));
        started.valid_from = datetime!(2014-07-01 00:00 UTC);
        started.valid_to = Some(datetime!(2014-07-02 00:00 UTC));

        let mut expired = message(2, Some(AreaId(11)));
        expired.valid_from = datetime!(2014-06-01 00:00 UTC);
        expired.valid_to = Some(datetime!(2014-06-02 00:00 UTC));

        let mut upcoming = message(3, Some(AreaId(11)));
        upcoming.valid_from = datetime!(2014-08-01 00:00 UTC);

        let messages = vec![started, expired, upcoming];
        let grouping = grouped(&messages);
        let selection = HeadingSelection::from_grouping(&grouping);

        let result = MessageFilter::new(selection)
            .active_only(true)
            .at(datetime!(2014-07-04 12:00 UTC))
            .apply(&messages, &grouping);

        // the expired message stays visible; only the upcoming one is out
        assert_eq!(result.visible, vec![0, 1]);
    }

    #[test]
    fn general_bucket_holds_visible_messages_without_locations() {
        let mut no_location = message(2, None);
        no_location.locations.clear();

        let messages = vec![message(1, Some(AreaId(11))), no_location];
        let grouping = grouped(&messages);
        let selection = HeadingSelection::from_grouping(&grouping);

        let result = MessageFilter::new(selection).apply(&messages, &grouping);
        assert_eq!(result.visible, vec![0, 1]);
        assert_eq!(result.general, vec![1]);
    }

    #[test]
    fn refiltering_is_stable() {
        let messages = vec![message(1, Some(AreaId(11))), message(2, Some(AreaId(12)))];
        let grouping = grouped(&messages);
        let filter = MessageFilter::new(HeadingSelection::from_grouping(&grouping))
            .at(datetime!(2014-07-04 12:00 UTC));

        let first = filter.apply(&messages, &grouping);
        let second = filter.apply(&messages, &grouping);
        assert_eq!(first, second);
    }
}
