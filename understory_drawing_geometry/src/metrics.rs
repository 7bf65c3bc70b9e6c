// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Natural and rendered size of a base image.
///
/// The natural size is the image's pixel size; the rendered size is what the
/// host laid it out at. Their ratio maps natural pixel coordinates into
/// rendered coordinates, independently per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageMetrics {
    natural: Size,
    rendered: Size,
}

impl ImageMetrics {
    /// Creates metrics from a measurement.
    ///
    /// Returns `None` if the natural size is not strictly positive and finite
    /// on both axes, or if the rendered size is negative or not finite. Hosts
    /// typically see a zero natural size while an image is still loading; such
    /// measurements carry no information and are rejected here.
    #[must_use]
    pub fn new(natural: Size, rendered: Size) -> Option<Self> {
        let natural_ok = natural.width.is_finite()
            && natural.height.is_finite()
            && natural.width > 0.0
            && natural.height > 0.0;
        let rendered_ok = rendered.width.is_finite()
            && rendered.height.is_finite()
            && rendered.width >= 0.0
            && rendered.height >= 0.0;
        (natural_ok && rendered_ok).then_some(Self { natural, rendered })
    }

    /// Returns the natural (pixel) size.
    #[must_use]
    pub fn natural(&self) -> Size {
        self.natural
    }

    /// Returns the rendered (on-screen) size.
    #[must_use]
    pub fn rendered(&self) -> Size {
        self.rendered
    }

    /// Returns the per-axis natural-to-rendered scale.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        Vec2::new(
            self.rendered.width / self.natural.width,
            self.rendered.height / self.natural.height,
        )
    }

    /// Returns the center of the image in natural pixel space.
    #[must_use]
    pub fn natural_center(&self) -> Point {
        Point::new(self.natural.width / 2.0, self.natural.height / 2.0)
    }

    /// Maps a point from natural pixel space into rendered space.
    #[must_use]
    pub fn to_rendered(&self, pt: Point) -> Point {
        let scale = self.scale();
        Point::new(pt.x * scale.x, pt.y * scale.y)
    }
}
