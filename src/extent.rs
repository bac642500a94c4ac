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

//! Viewport extents for feature sets.

use geo::{Coord, Rect};

use crate::feature::PlanarFeature;

/// Below this span in both axes a bounding box counts as a point.
pub const DEGENERATE_SPAN: f64 = 100.0;

/// Span substituted for a degenerate box before padding, in projection
/// units.
pub const FALLBACK_SPAN: f64 = 30_000.0;

/// Fraction of each span added on every side of a layer extent.
const EXTENT_PADDING: f64 = 0.1;

/// Fixed padding per side when fitting a single near-point feature.
const FEATURE_PADDING: f64 = 20_000.0;

fn merge(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}

/// Computes the padded bounding box of a feature set, for fitting a
/// viewport to a map layer.
///
/// Returns `None` for an empty set; there is nothing to fit to. If both
/// spans of the raw bounds fall below [`DEGENERATE_SPAN`], the spans are
/// replaced by [`FALLBACK_SPAN`] so a lone point does not produce a
/// zero-area viewport; the box is then padded by 10% of each span on every
/// side.
pub fn compute_extent(features: &[PlanarFeature]) -> Option<Rect<f64>> {
    let mut bounds: Option<Rect<f64>> = None;
    for feature in features {
        if let Some(rect) = feature.geometry.bounding_rect() {
            bounds = Some(match bounds {
                None => rect,
                Some(acc) => merge(acc, rect),
            });
        }
    }
    let bounds = bounds?;

    let mut delta_v = bounds.height();
    let mut delta_h = bounds.width();
    if delta_h < DEGENERATE_SPAN && delta_v < DEGENERATE_SPAN {
        delta_h = FALLBACK_SPAN;
        delta_v = FALLBACK_SPAN;
    }

    Some(Rect::new(
        Coord {
            x: bounds.min().x - delta_h * EXTENT_PADDING,
            y: bounds.min().y - delta_v * EXTENT_PADDING,
        },
        Coord {
            x: bounds.max().x + delta_h * EXTENT_PADDING,
            y: bounds.max().y + delta_v * EXTENT_PADDING,
        },
    ))
}

/// Computes the extent of a single feature, for zooming to one geometry.
///
/// A feature that is a point (or close to it) gets a fixed
/// [`FEATURE_PADDING`] per side instead of its raw, unusably small bounds.
pub fn feature_extent(feature: &PlanarFeature) -> Option<Rect<f64>> {
    let bounds = feature.geometry.bounding_rect()?;

    if bounds.width() < DEGENERATE_SPAN && bounds.height() < DEGENERATE_SPAN {
        Some(Rect::new(
            Coord {
                x: bounds.min().x - FEATURE_PADDING,
                y: bounds.min().y - FEATURE_PADDING,
            },
            Coord {
                x: bounds.max().x + FEATURE_PADDING,
                y: bounds.max().y + FEATURE_PADDING,
            },
        ))
    } else {
        Some(bounds)
    }
}
