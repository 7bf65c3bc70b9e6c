// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use indexmap::IndexMap;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use understory_drawing_geometry::Transform;

use crate::Revision;
use crate::revision::deserialize_revisions;

/// Project-level information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name of the project.
    #[serde(default)]
    pub name: String,
    /// Length unit used by the drawings, e.g. `"mm"`.
    #[serde(default)]
    pub unit: String,
}

/// One entry of the discipline catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineInfo {
    /// Discipline name.
    pub name: String,
}

/// An outline in some image's pixel space.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    /// Vertices as `[x, y]` pairs.
    #[serde(default)]
    pub vertices: Vec<Vec<f64>>,
    /// Placement of the outline relative to its base image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon_transform: Option<Transform>,
}

impl Polygon {
    /// Returns the vertices that have at least two coordinates, as points.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        vertex_points(&self.vertices)
    }
}

/// Where a space sits on the root drawing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacePosition {
    /// Outline vertices in the root image's pixel space.
    #[serde(default)]
    pub vertices: Vec<Vec<f64>>,
    /// Placement of the space image relative to the root image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_transform: Option<Transform>,
}

impl SpacePosition {
    /// Returns the vertices that have at least two coordinates, as points.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        vertex_points(&self.vertices)
    }
}

fn vertex_points(vertices: &[Vec<f64>]) -> Vec<Point> {
    vertices
        .iter()
        .filter_map(|v| match v.as_slice() {
            [x, y, ..] => Some(Point::new(*x, *y)),
            _ => None,
        })
        .collect()
}

/// A named sub-area of a discipline with its own revision history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Outline of the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
    /// Revisions, latest first.
    #[serde(default, deserialize_with = "deserialize_revisions")]
    pub revisions: Vec<Revision>,
}

/// One discipline's view of a space.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineData {
    /// Placement of the discipline image relative to the space image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_transform: Option<Transform>,
    /// Discipline-level image; absent means the image is inherited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Outline of the discipline's coverage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
    /// Named regions in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<IndexMap<String, Region>>,
    /// Discipline-level revisions, latest first.
    #[serde(default, deserialize_with = "deserialize_revisions")]
    pub revisions: Vec<Revision>,
}

impl DisciplineData {
    /// Returns the region named `name`, if this discipline has it.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.as_ref()?.get(name)
    }

    /// Returns the latest discipline-level revision.
    #[must_use]
    pub fn latest_revision(&self) -> Option<&Revision> {
        self.revisions.first()
    }
}

/// The root drawing or one of its spaces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Stable unique id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Image file name.
    pub image: String,
    /// Parent drawing id; `None` only for the root.
    #[serde(default)]
    pub parent: Option<String>,
    /// Placement on the root drawing.
    #[serde(default)]
    pub position: Option<SpacePosition>,
    /// Disciplines by name, in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disciplines: Option<IndexMap<String, DisciplineData>>,
}

impl Drawing {
    /// Returns `true` if this drawing has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the discipline named `name`, if present.
    #[must_use]
    pub fn discipline(&self, name: &str) -> Option<&DisciplineData> {
        self.disciplines.as_ref()?.get(name)
    }

    /// Returns the discipline names in document order.
    pub fn discipline_names(&self) -> impl Iterator<Item = &str> {
        self.disciplines
            .iter()
            .flat_map(|disciplines| disciplines.keys().map(String::as_str))
    }
}

/// The whole project description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Project information.
    #[serde(default)]
    pub project: Project,
    /// Discipline catalogue.
    #[serde(default)]
    pub disciplines: Vec<DisciplineInfo>,
    /// Drawings by id, in document order.
    pub drawings: IndexMap<String, Drawing>,
}

impl Metadata {
    /// Parses metadata from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or does not have the
    /// metadata shape. Malformed revision entries are not errors.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses metadata from JSON bytes.
    ///
    /// # Errors
    ///
    /// See [`Metadata::from_json_str`].
    pub fn from_json_slice(json: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(json)
    }

    /// Returns the root drawing: the first drawing without a parent.
    ///
    /// Well-formed metadata has exactly one; when there are several, the first
    /// in document order wins and a warning is logged.
    #[must_use]
    pub fn root(&self) -> Option<&Drawing> {
        let mut roots = self.drawings.values().filter(|d| d.is_root());
        let root = roots.next()?;
        let extra = roots.count();
        if extra > 0 {
            tracing::warn!(root = %root.id, extra, "metadata has more than one parentless drawing");
        }
        Some(root)
    }

    /// Returns the drawing with the given id.
    #[must_use]
    pub fn drawing(&self, id: &str) -> Option<&Drawing> {
        self.drawings.get(id)
    }

    /// Returns the children of `parent_id` sorted by id.
    #[must_use]
    pub fn children_of(&self, parent_id: &str) -> Vec<&Drawing> {
        let mut children: Vec<&Drawing> = self
            .drawings
            .values()
            .filter(|d| d.parent.as_deref() == Some(parent_id))
            .collect();
        children.sort_by(|a, b| a.id.cmp(&b.id));
        children
    }
}
