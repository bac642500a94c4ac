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

//! Spherical pseudo-Mercator projection (EPSG:3857).
//!
//! The fixed target projection of all map features. Only the forward
//! transform is exposed; a viewport center in planar units is constructed
//! from degrees with the same transform.

use std::f64::consts::FRAC_PI_4;

use geo::{Coord, Point};

/// Equatorial radius of the projection sphere in meters.
pub const EQUATORIAL_RADIUS: f64 = 6_378_137.0;

/// Latitude bound of the square Mercator world.
///
/// Latitudes beyond this map to infinity; inputs are clamped to it.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Projects a geographic coordinate in degrees to planar meters.
///
/// Pure and deterministic; no provider data reaches this far with NaN
/// coordinates, and the latitude clamp keeps the output finite.
pub fn project(lon: f64, lat: f64) -> Coord<f64> {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    Coord {
        x: EQUATORIAL_RADIUS * lon.to_radians(),
        y: EQUATORIAL_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln(),
    }
}

/// Projects a geographic point (longitude as `x`, latitude as `y`).
pub fn project_point(point: Point<f64>) -> Point<f64> {
    project(point.x(), point.y()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Planar extent of the Mercator square, ± in both axes.
    const WORLD_EDGE: f64 = 20_037_508.342_789_244;

    #[test]
    fn origin_projects_to_origin() {
        let c = project(0.0, 0.0);
        assert_eq!(c.x, 0.0);
        assert!(c.y.abs() < 1e-9);
    }

    #[test]
    fn antimeridian_projects_to_world_edge() {
        let c = project(180.0, 0.0);
        assert!((c.x - WORLD_EDGE).abs() < 1e-6);
    }

    #[test]
    fn max_latitude_closes_the_square() {
        let c = project(0.0, MAX_LATITUDE);
        assert!((c.y - WORLD_EDGE).abs() < 1.0);
    }

    #[test]
    fn polar_input_is_clamped() {
        let c = project(0.0, 90.0);
        assert!(c.y.is_finite());
        assert!((c.y - project(0.0, MAX_LATITUDE).y).abs() < 1e-9);
    }

    #[test]
    fn projection_is_symmetric() {
        let north = project(11.0, 56.0);
        let south = project(-11.0, -56.0);
        assert!((north.x + south.x).abs() < 1e-9);
        assert!((north.y + south.y).abs() < 1e-9);
    }
}
