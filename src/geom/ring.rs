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

use std::f64::consts::TAU;

use geo::Point;

/// Earth mean radius in kilometers.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6_371.008_771_4;

pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Approximates a geodesic circle as a closed polygon of geographic points.
///
/// Walks the great-circle destination formula once per vertex: for bearing
/// `β = 2π·i/n` and angular distance `d` the destination is
///
/// ```text
/// lat2 = asin(sin lat1 · cos d + cos lat1 · sin d · cos β)
/// lon2 = lon1 + atan2(sin β · sin d · cos lat1, cos d − sin lat1 · sin lat2)
/// ```
///
/// Returns exactly `vertices` points in degrees, ring closure implicit.
/// The vertex count trades quality for output size; the feature builder
/// uses 40.
pub fn great_circle_ring(lon: f64, lat: f64, radius_nm: f64, vertices: usize) -> Vec<Point<f64>> {
    let lat1 = lat.to_radians();
    let lon1 = lon.to_radians();
    // angular distance of the radius on the mean-radius sphere
    let d = radius_nm * KM_PER_NAUTICAL_MILE / EARTH_MEAN_RADIUS_KM;

    let mut points = Vec::with_capacity(vertices);
    for i in 0..vertices {
        let bearing = TAU * i as f64 / vertices as f64;
        let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat2.sin());
        points.push(Point::new(lon2.to_degrees(), lat2.to_degrees()));
    }
    points
}
