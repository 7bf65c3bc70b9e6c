// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use kurbo::Size;
use serde::Serialize;
use understory_drawing_geometry::{ImageMetrics, OverlayPlacement, compute_overlay_placement};

use crate::OverlayLayer;

/// Measured sizes of the images currently on screen.
///
/// Hosts report a measurement whenever an image loads or its layout box
/// changes; the newest measurement of an image replaces the previous one.
/// Owners call [`OverlayCanvas::retain`] when images leave the screen.
/// Placements are recomputed from whatever is stored at the time they are
/// asked for, so the order in which measurements arrive does not matter.
#[derive(Clone, Debug, Default)]
pub struct OverlayCanvas {
    measured: HashMap<String, ImageMetrics>,
}

impl OverlayCanvas {
    /// Creates a canvas with no measurements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a measurement of `image`.
    ///
    /// Measurements with a natural size that is not positive and finite, such
    /// as those taken before the image has loaded, are ignored. Returns `true`
    /// if the stored metrics changed.
    pub fn observe(&mut self, image: &str, natural: Size, rendered: Size) -> bool {
        let Some(metrics) = ImageMetrics::new(natural, rendered) else {
            tracing::debug!(image, ?natural, ?rendered, "ignored unusable image measurement");
            return false;
        };
        if self.measured.get(image) == Some(&metrics) {
            return false;
        }
        self.measured.insert(image.to_owned(), metrics);
        true
    }

    /// Returns the latest measurement of `image`.
    #[must_use]
    pub fn metrics_for(&self, image: &str) -> Option<&ImageMetrics> {
        self.measured.get(image)
    }

    /// Keeps only the measurements of images for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.measured.retain(|image, _| keep(image));
    }

    /// Forgets every measurement.
    pub fn clear(&mut self) {
        self.measured.clear();
    }

    /// Places `layers` over `base_image`.
    ///
    /// Uses the measured metrics of `base_image` when there are any and the
    /// fixed legacy center and scale otherwise. Layers without a transform
    /// get no placement and are drawn untransformed.
    #[must_use]
    pub fn place(
        &self,
        base_image: &str,
        layers: impl IntoIterator<Item = OverlayLayer>,
    ) -> Vec<PlacedOverlay> {
        let metrics = self.metrics_for(base_image);
        if metrics.is_none() {
            tracing::debug!(base_image, "no measurement of base image, using legacy placement");
        }
        layers
            .into_iter()
            .map(|layer| {
                let placement = compute_overlay_placement(layer.image_transform.as_ref(), metrics);
                PlacedOverlay {
                    transform: placement.map(|p| p.to_css()),
                    placement,
                    layer,
                }
            })
            .collect()
    }
}

/// An overlay layer together with its screen-space placement.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedOverlay {
    /// The layer.
    #[serde(flatten)]
    pub layer: OverlayLayer,
    /// Placement about the layer's center, if the layer has a transform.
    #[serde(skip)]
    pub placement: Option<OverlayPlacement>,
    /// CSS form of [`PlacedOverlay::placement`].
    pub transform: Option<String>,
}
