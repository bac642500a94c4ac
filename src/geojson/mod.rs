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

//! GeoJSON export of message locations.
//!
//! Exports geographic WGS84 geometry, not the projected map features, so
//! the output interoperates with standard GeoJSON tooling. Circular zones
//! are expanded to their great-circle ring.

use geo::{BoundingRect, Coord, LineString, Point, Rect};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::geom::great_circle_ring;
use crate::msg::{Location, Message};

/// Vertex count used when expanding circles, matching the map features.
const CIRCLE_VERTICES: usize = 40;

fn position(point: &Point<f64>) -> Vec<f64> {
    vec![point.x(), point.y()]
}

fn closed_ring(points: &[Point<f64>]) -> Vec<Vec<f64>> {
    let mut ring: Vec<Vec<f64>> = points.iter().map(position).collect();
    if let Some(first) = ring.first().cloned() {
        ring.push(first);
    }
    ring
}

fn rect_to_bbox(rect: Rect<f64>) -> geojson::Bbox {
    vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

fn bounds(points: &[Point<f64>]) -> Option<Rect<f64>> {
    let line = LineString::from(
        points
            .iter()
            .map(|&p| Coord::from(p))
            .collect::<Vec<_>>(),
    );
    line.bounding_rect()
}

/// Returns the GeoJSON geometry of a location, or `None` for degenerate
/// contents, the same shapes the feature builder would skip.
pub fn location_geometry(location: &Location) -> Option<Geometry> {
    let value = match location {
        Location::Point { points } => match points.as_slice() {
            [] => return None,
            [point] => Value::Point(position(point)),
            points => Value::MultiPoint(points.iter().map(position).collect()),
        },
        Location::Polyline { points } => {
            if points.len() < 2 {
                return None;
            }
            Value::LineString(points.iter().map(position).collect())
        }
        Location::Polygon { points } => {
            if points.len() < 3 {
                return None;
            }
            Value::Polygon(vec![closed_ring(points)])
        }
        Location::Circle { center, radius_nm } => {
            let ring = great_circle_ring(center.x(), center.y(), *radius_nm, CIRCLE_VERTICES);
            Value::Polygon(vec![closed_ring(&ring)])
        }
    };

    Some(Geometry::new(value))
}

fn location_bbox(location: &Location) -> Option<geojson::Bbox> {
    let rect = match location {
        Location::Point { points }
        | Location::Polyline { points }
        | Location::Polygon { points } => bounds(points)?,
        Location::Circle { center, radius_nm } => {
            let ring = great_circle_ring(center.x(), center.y(), *radius_nm, CIRCLE_VERTICES);
            bounds(&ring)?
        }
    };
    Some(rect_to_bbox(rect))
}

/// Returns a feature collection with one feature per charted location of
/// the given messages.
///
/// Each feature carries the message id and full series identifier as
/// properties, so consumers can join the geometry back to the message
/// list. General messages contribute nothing.
pub fn messages_to_geojson<'a>(
    messages: impl IntoIterator<Item = &'a Message>,
) -> FeatureCollection {
    let mut features = Vec::new();

    for msg in messages {
        for location in &msg.locations {
            let Some(geometry) = location_geometry(location) else {
                continue;
            };

            let mut properties = JsonObject::new();
            properties.insert("id".to_string(), JsonValue::from(msg.id));
            properties.insert(
                "seriesIdentifier".to_string(),
                JsonValue::from(msg.series_identifier.full_id()),
            );

            features.push(Feature {
                bbox: location_bbox(location),
                geometry: Some(geometry),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
