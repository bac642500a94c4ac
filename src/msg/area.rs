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

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Cap on ancestor traversal depth.
///
/// Area trees come from provider data that may be malformed; walking more
/// than this many parent links is treated as a cycle.
pub const MAX_ANCESTRY: usize = 64;

/// Identifier of an [`Area`] node, unique within its tree.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AreaId(pub u32);

impl Display for AreaId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Localized name of an area, one record per language.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AreaDesc {
    pub lang: String,
    pub name: String,
}

impl AreaDesc {
    pub fn new(lang: &str, name: &str) -> Self {
        Self {
            lang: lang.to_string(),
            name: name.to_string(),
        }
    }
}

/// Node in the area hierarchy, e.g. `Denmark` or `The Sound`.
///
/// The tree owns its nodes; `parent` is a non-owning back-reference by id.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Area {
    pub id: AreaId,
    pub parent: Option<AreaId>,
    pub descs: Vec<AreaDesc>,
}

impl Area {
    pub fn new(id: AreaId, parent: Option<AreaId>) -> Self {
        Self {
            id,
            parent,
            descs: Vec::new(),
        }
    }

    /// Returns the description record for the given language.
    pub fn desc(&self, lang: &str) -> Option<&AreaDesc> {
        self.descs.iter().find(|d| d.lang == lang)
    }

    /// Attaches a description, replacing any record of the same language.
    pub fn set_desc(&mut self, desc: AreaDesc) {
        self.descs.retain(|d| d.lang != desc.lang);
        self.descs.push(desc);
    }
}

/// The area hierarchy of a provider.
///
/// A strict tree: every node has at most one parent, and the ancestor chain
/// of any node is finite. The tree is purely structural: grouping state
/// lives in [`Grouping`] results, never on the nodes, so a tree held by a
/// server can be shared across grouping passes.
///
/// [`Grouping`]: crate::grouping::Grouping
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AreaTree {
    nodes: HashMap<AreaId, Area>,
}

impl AreaTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an area, replacing any node with the same id.
    pub fn insert(&mut self, area: Area) {
        self.nodes.insert(area.id, area);
    }

    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        self.nodes.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the ancestor chain of an area, root-first and inclusive of
    /// the area itself.
    ///
    /// An id that is not in the tree yields an empty chain; a parent link
    /// pointing at a missing node ends the chain there. Traversal is capped
    /// at [`MAX_ANCESTRY`] links and fails with [`Error::MalformedHierarchy`]
    /// beyond that, so cyclic provider data cannot loop forever.
    pub fn ancestor_chain(&self, id: AreaId) -> Result<Vec<AreaId>> {
        let mut chain = Vec::new();
        let mut cursor = self.nodes.get(&id);

        while let Some(area) = cursor {
            if chain.len() >= MAX_ANCESTRY {
                return Err(Error::MalformedHierarchy(id));
            }
            chain.push(area.id);
            cursor = area.parent.and_then(|parent| self.nodes.get(&parent));
        }

        chain.reverse();
        Ok(chain)
    }
}
