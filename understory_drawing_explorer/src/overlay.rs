// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Serialize;
use understory_drawing_geometry::Transform;

use crate::{BlendMode, ExplorerConfig, ExplorerView, LayerStyle};

/// An image drawn on top of the base image.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayLayer {
    /// Display name: the discipline, or `"{discipline} Region {region}"` for
    /// the region layer.
    pub name: String,
    /// Discipline the image belongs to.
    pub discipline: String,
    /// Image file name.
    pub image: String,
    /// URL of the image file.
    pub image_url: String,
    /// Placement relative to the base image, if any.
    pub image_transform: Option<Transform>,
    /// Opacity in `0.0..=1.0`.
    pub opacity: f64,
    /// Blend mode.
    pub blend_mode: BlendMode,
}

impl OverlayLayer {
    fn new(
        name: String,
        discipline: &str,
        image: &str,
        image_transform: Option<&Transform>,
        style: LayerStyle,
        config: &ExplorerConfig,
    ) -> Self {
        Self {
            name,
            discipline: discipline.to_owned(),
            image: image.to_owned(),
            image_url: config.drawing_url(image),
            image_transform: image_transform.cloned(),
            opacity: style.opacity,
            blend_mode: style.blend_mode,
        }
    }

    /// Returns the layer's style.
    #[must_use]
    pub fn style(&self) -> LayerStyle {
        LayerStyle {
            opacity: self.opacity,
            blend_mode: self.blend_mode,
        }
    }
}

/// Builds one layer per effective overlay discipline, in overlay order.
///
/// Each layer shows the discipline's latest revision image, or the
/// discipline's own image when it has no revisions, and carries the matching
/// transform. Disciplines without an image, or whose image is the base image,
/// are skipped. With no base image there are no layers.
#[must_use]
pub fn compute_overlay_layers(view: &ExplorerView<'_>, config: &ExplorerConfig) -> Vec<OverlayLayer> {
    let (Some(space), Some(base_image)) = (view.space, view.base_image) else {
        return Vec::new();
    };
    view.overlays
        .iter()
        .filter_map(|&name| {
            let discipline = space.discipline(name)?;
            let latest = discipline.latest_revision();
            let image = latest
                .map(|r| r.image.as_str())
                .or(discipline.image.as_deref())
                .filter(|image| !image.is_empty());
            let Some(image) = image else {
                tracing::debug!(discipline = name, "overlay skipped: no image");
                return None;
            };
            if image == base_image {
                tracing::debug!(discipline = name, image, "overlay skipped: same as base image");
                return None;
            }
            let transform = latest
                .and_then(|r| r.image_transform.as_ref())
                .or(discipline.image_transform.as_ref());
            Some(OverlayLayer::new(
                name.to_owned(),
                name,
                image,
                transform,
                config.overlay_style,
                config,
            ))
        })
        .collect()
}

/// Builds the layer that shows the selected region's revision over the base
/// image.
///
/// Present only when a discipline and one of its regions are selected, the
/// effective revision has an image and a base image exists that is not that
/// same image. The revision's
/// transform is kept only if it is relative to the base image or to nothing
/// in particular.
#[must_use]
pub fn default_region_layer(view: &ExplorerView<'_>, config: &ExplorerConfig) -> Option<OverlayLayer> {
    let discipline_name = view.discipline_name?;
    let region_name = view.region_name?;
    view.discipline?.region(region_name)?;
    let revision = view.revision.filter(|r| !r.image.is_empty())?;
    let base_image = view.base_image?;
    if revision.image == base_image {
        tracing::debug!(
            discipline = discipline_name,
            region = region_name,
            image = base_image,
            "region layer skipped: same as base image"
        );
        return None;
    }

    let transform = revision
        .image_transform
        .as_ref()
        .filter(|t| t.is_relative_to(base_image));
    Some(OverlayLayer::new(
        format!("{discipline_name} Region {region_name}"),
        discipline_name,
        &revision.image,
        transform,
        config.region_style,
        config,
    ))
}
