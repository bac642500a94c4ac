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

//! Planar map features built from message locations.

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{BoundingRect, Coord, LineString, Point, Polygon, Rect};

use crate::geom::{great_circle_ring, mercator};
use crate::msg::{Location, LocationKind, Message};

/// Vertex count of the ring approximating a circular zone.
const CIRCLE_VERTICES: usize = 40;

/// Geometry of a map feature in the target projection.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlanarGeometry {
    Point(Point<f64>),
    Line(LineString<f64>),
    Ring(Polygon<f64>),
}

impl PlanarGeometry {
    /// Raw bounds of the geometry in projection units.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            PlanarGeometry::Point(point) => Some(point.bounding_rect()),
            PlanarGeometry::Line(line) => line.bounding_rect(),
            PlanarGeometry::Ring(ring) => ring.bounding_rect(),
        }
    }
}

/// Attributes attached to every feature built from one location.
///
/// `loc_kind` is stamped by the builder; the rest is caller-supplied
/// context for styling and hit-testing. Setting `show_vertices` emits an
/// extra point feature per vertex of a path or ring, for vertex-handle
/// rendering.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureAttributes {
    pub message_id: Option<u32>,
    pub icon: Option<String>,
    pub loc_kind: Option<LocationKind>,
    pub show_vertices: bool,
}

/// A planar map feature: projected geometry plus attributes.
///
/// Features have no identity beyond their position in the output list.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanarFeature {
    pub geometry: PlanarGeometry,
    pub attributes: FeatureAttributes,
}

fn planar_line(points: &[Point<f64>]) -> LineString<f64> {
    LineString::from(
        points
            .iter()
            .map(|&p| Coord::from(mercator::project_point(p)))
            .collect::<Vec<_>>(),
    )
}

/// Builds the map features of one location into an accumulator.
///
/// Callers collect one combined feature list per message and concatenate
/// across messages. Point locations yield one feature per coordinate; a
/// polyline yields one open path; a polygon one closed ring (closure
/// implicit); a circle one closed ring of [`great_circle_ring`] vertices.
/// Degenerate geometry with too few points for its shape is skipped
/// without error.
pub fn build_features(
    location: &Location,
    attributes: &FeatureAttributes,
    features: &mut Vec<PlanarFeature>,
) {
    let mut attributes = attributes.clone();
    attributes.loc_kind = Some(location.kind());

    match location {
        Location::Point { points } => {
            for &point in points {
                features.push(PlanarFeature {
                    geometry: PlanarGeometry::Point(mercator::project_point(point)),
                    attributes: attributes.clone(),
                });
            }
        }

        Location::Polyline { points } => {
            if points.len() < 2 {
                trace!("skipping polyline with {} point(s)", points.len());
                return;
            }
            features.push(PlanarFeature {
                geometry: PlanarGeometry::Line(planar_line(points)),
                attributes: attributes.clone(),
            });
            push_vertices(points, &attributes, features);
        }

        Location::Polygon { points } => {
            if points.len() < 3 {
                trace!("skipping polygon with {} point(s)", points.len());
                return;
            }
            features.push(PlanarFeature {
                geometry: PlanarGeometry::Ring(Polygon::new(planar_line(points), vec![])),
                attributes: attributes.clone(),
            });
            push_vertices(points, &attributes, features);
        }

        Location::Circle { center, radius_nm } => {
            let ring = great_circle_ring(center.x(), center.y(), *radius_nm, CIRCLE_VERTICES);
            features.push(PlanarFeature {
                geometry: PlanarGeometry::Ring(Polygon::new(planar_line(&ring), vec![])),
                attributes,
            });
        }
    }
}

/// Emits a point feature per vertex when the attributes ask for handles.
fn push_vertices(
    points: &[Point<f64>],
    attributes: &FeatureAttributes,
    features: &mut Vec<PlanarFeature>,
) {
    if !attributes.show_vertices {
        return;
    }
    for &point in points {
        features.push(PlanarFeature {
            geometry: PlanarGeometry::Point(mercator::project_point(point)),
            attributes: attributes.clone(),
        });
    }
}

/// Builds the combined feature list of a message sequence.
///
/// Each message contributes the features of all its locations, attributed
/// with the message id and an icon key derived from the series main type.
/// This is the list a map layer renders for the currently visible messages.
pub fn features_for_messages<'a>(
    messages: impl IntoIterator<Item = &'a Message>,
) -> Vec<PlanarFeature> {
    let mut features = Vec::new();

    for msg in messages {
        let attributes = FeatureAttributes {
            message_id: Some(msg.id),
            icon: Some(msg.series_identifier.main_type.icon_key().to_string()),
            loc_kind: None,
            show_vertices: false,
        };
        for location in &msg.locations {
            build_features(location, &attributes, &mut features);
        }
    }

    features
}
