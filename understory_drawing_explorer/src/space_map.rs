// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_drawing_geometry::{ImageMetrics, ProjectedPolygon, project_polygon};
use understory_drawing_model::Drawing;

/// A space outlined on the rendered root image.
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceMarker<'a> {
    /// The space.
    pub space: &'a Drawing,
    /// Outline in rendered root-image coordinates.
    pub polygon: ProjectedPolygon,
    /// `true` for the effective space.
    pub active: bool,
}

impl SpaceMarker<'_> {
    /// Returns the outline as an SVG `points` attribute.
    #[must_use]
    pub fn svg_points(&self) -> String {
        self.polygon.svg_points()
    }
}

/// Builds markers for every space that has an outline of at least three
/// vertices.
///
/// `metrics` is the measurement of the root image; without one the outlines
/// cannot be placed and no markers are built.
#[must_use]
pub fn space_markers<'a>(
    spaces: &[&'a Drawing],
    active: Option<&str>,
    metrics: Option<&ImageMetrics>,
) -> Vec<SpaceMarker<'a>> {
    let Some(metrics) = metrics else {
        return Vec::new();
    };
    spaces
        .iter()
        .filter_map(|&space| {
            let position = space.position.as_ref()?;
            (position.vertices.len() > 2).then(|| SpaceMarker {
                space,
                polygon: project_polygon(&position.points(), metrics),
                active: active == Some(space.id.as_str()),
            })
        })
        .collect()
}
