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

use geo::Point;

/// Geometry kind of a [`Location`], attached to map features for styling.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LocationKind {
    Point,
    Polyline,
    Polygon,
    Circle,
}

impl Display for LocationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationKind::Point => write!(f, "POINT"),
            LocationKind::Polyline => write!(f, "POLYLINE"),
            LocationKind::Polygon => write!(f, "POLYGON"),
            LocationKind::Circle => write!(f, "CIRCLE"),
        }
    }
}

/// A message location geometry in geographic WGS84 coordinates.
///
/// Points are `geo::Point<f64>` with longitude as `x` and latitude as `y`.
/// The variants mirror the shapes providers deliver: independent points, an
/// open track, a closed region, or a circular zone given by center and
/// radius in nautical miles. A polygon ring is implicitly closed; the
/// first point is not repeated.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Location {
    /// One or more independent points.
    Point { points: Vec<Point<f64>> },
    /// An ordered open path of at least two points.
    Polyline { points: Vec<Point<f64>> },
    /// A closed ring of at least three points.
    Polygon { points: Vec<Point<f64>> },
    /// A circular zone around a center.
    Circle { center: Point<f64>, radius_nm: f64 },
}

impl Location {
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Point { .. } => LocationKind::Point,
            Location::Polyline { .. } => LocationKind::Polyline,
            Location::Polygon { .. } => LocationKind::Polygon,
            Location::Circle { .. } => LocationKind::Circle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let loc = Location::Circle {
            center: Point::new(11.0, 56.0),
            radius_nm: 5.0,
        };
        assert_eq!(loc.kind(), LocationKind::Circle);
        assert_eq!(loc.kind().to_string(), "CIRCLE");
    }
}
