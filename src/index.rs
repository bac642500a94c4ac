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

//! Spatial indexing for feature hit-testing.

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};

use crate::feature::PlanarFeature;

/// Spatial index over a feature list's bounding boxes using an R-tree.
///
/// Built once per feature list and queried on every hover or click: the
/// index returns candidate features by envelope, which is what a map UI
/// needs to decide what a planar cursor position touches. Entries carry
/// the feature's index into the originating list.
#[derive(Clone, Debug, Default)]
pub struct FeatureIndex {
    tree: RTree<GeomWithData<Rectangle<[f64; 2]>, usize>>,
}

impl FeatureIndex {
    /// Creates an index over the features' bounding boxes.
    ///
    /// Features without bounds (empty geometry) are not indexed.
    pub fn new(features: &[PlanarFeature]) -> Self {
        let entries = features
            .iter()
            .enumerate()
            .filter_map(|(i, feature)| {
                let rect = feature.geometry.bounding_rect()?;
                let envelope = Rectangle::from_corners(
                    [rect.min().x, rect.min().y],
                    [rect.max().x, rect.max().y],
                );
                Some(GeomWithData::new(envelope, i))
            })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Returns the indices of features whose bounding box contains the
    /// planar point, in feature-list order.
    pub fn at(&self, x: f64, y: f64) -> Vec<usize> {
        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .map(|entry| entry.data)
            .collect();
        hits.sort_unstable();
        hits
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
