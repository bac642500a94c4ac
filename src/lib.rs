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

//! Maritime Safety Information display pipeline.
//!
//! This library turns a flat, area-sorted list of maritime safety messages
//! (notices to mariners) into everything a map-centric viewer needs:
//!
//! 1. [`grouping`] stamps section headings onto the message list at a chosen
//!    depth of the area hierarchy, and [`filter`] computes the visible subset
//!    from the heading selection and a time-validity toggle.
//! 2. [`feature`] projects message location geometries into spherical
//!    pseudo-Mercator map features (circles become great-circle rings) and
//!    [`extent`] computes a padded bounding box to fit a viewport to them.
//!
//! The library performs no I/O and no localization: message, area and
//! location data arrive already parsed, and display code supplies name
//! lookups as plain closures (see [`display`]).

pub mod display;
pub mod error;
pub mod extent;
pub mod feature;
pub mod filter;
pub mod geom;
pub mod grouping;
pub mod index;
pub mod msg;

#[cfg(feature = "geojson")]
#[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
pub mod geojson;

pub use error::{Error, Result};

pub mod prelude {
    //! Common imports for working with the message pipeline.
    pub use crate::error::{Error, Result};
    pub use crate::extent::{compute_extent, feature_extent};
    pub use crate::feature::{
        build_features, features_for_messages, FeatureAttributes, PlanarFeature, PlanarGeometry,
    };
    pub use crate::filter::{FilterResult, HeadingSelection, MessageFilter};
    pub use crate::geom::{great_circle_ring, mercator};
    pub use crate::grouping::{group_by_area, Grouping};
    pub use crate::index::FeatureIndex;
    pub use crate::msg::{
        Area, AreaDesc, AreaId, AreaTree, Location, LocationKind, Message, MessageDesc,
        NoticeType, SeriesIdType, SeriesIdentifier, Status,
    };
}
