// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;

use kurbo::{Affine, Point, Vec2};

use crate::{ImageMetrics, Transform};

/// Scale used when no measured metrics are available.
pub const LEGACY_SCALE: f64 = 1.0 / 40.0;

/// Base-image center used when no measured metrics are available.
pub const LEGACY_CENTER: Point = Point::new(2481.0, 1754.0);

/// Screen-space placement of an overlay image on top of a rendered base image.
///
/// The placement is meant to be applied with the overlay's own center as the
/// transform origin: first translate by [`OverlayPlacement::offset`], then
/// scale, then rotate. Its [`Display`](fmt::Display) form is the equivalent
/// CSS transform, e.g. `translate(50px, 0px) scale(1) rotate(0rad)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayPlacement {
    /// Offset from the base image center, in rendered pixels.
    pub offset: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation: f64,
}

impl OverlayPlacement {
    /// Returns the placement as an affine map about `origin`.
    ///
    /// `origin` is the overlay's center in the coordinate space the overlay is
    /// drawn in. Scaling and rotation pivot around it, and the result is then
    /// shifted by the offset.
    #[must_use]
    pub fn to_affine(&self, origin: Point) -> Affine {
        let pivot = origin.to_vec2();
        Affine::translate(self.offset + pivot)
            * Affine::scale(self.scale)
            * Affine::rotate(self.rotation)
            * Affine::translate(-pivot)
    }

    /// Returns the CSS transform string for this placement.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OverlayPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("translate(")?;
        write_number(f, self.offset.x)?;
        f.write_str("px, ")?;
        write_number(f, self.offset.y)?;
        f.write_str("px) scale(")?;
        write_number(f, self.scale)?;
        f.write_str(") rotate(")?;
        write_number(f, self.rotation)?;
        f.write_str("rad)")
    }
}

/// Writes a number the way CSS authoring tools print it: no trailing `.0`,
/// no negative zero.
pub(crate) fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    let value = if value == 0.0 { 0.0 } else { value };
    write!(f, "{value}")
}

/// Computes the screen-space placement of an overlay.
///
/// With `metrics`, the anchor is measured from the base image's natural
/// center and scaled into rendered space per axis:
///
/// ```text
/// offset.x = (x - natural.width / 2) * rendered.width / natural.width
/// offset.y = (y - natural.height / 2) * rendered.height / natural.height
/// ```
///
/// Without `metrics`, [`LEGACY_CENTER`] and [`LEGACY_SCALE`] are used instead.
///
/// Returns `None` when `transform` is `None`; such overlays are not positioned
/// by this function and callers should draw them untransformed.
#[must_use]
pub fn compute_overlay_placement(
    transform: Option<&Transform>,
    metrics: Option<&ImageMetrics>,
) -> Option<OverlayPlacement> {
    let transform = transform?;
    let (center, scale) = match metrics {
        Some(metrics) => (metrics.natural_center(), metrics.scale()),
        None => (LEGACY_CENTER, Vec2::new(LEGACY_SCALE, LEGACY_SCALE)),
    };
    let offset = Vec2::new(
        (transform.x - center.x) * scale.x,
        (transform.y - center.y) * scale.y,
    );
    Some(OverlayPlacement {
        offset,
        scale: transform.scale,
        rotation: transform.rotation,
    })
}

/// Computes the CSS transform string for an overlay.
///
/// This is [`compute_overlay_placement`] rendered through
/// [`OverlayPlacement::to_css`].
#[must_use]
pub fn compute_overlay_transform(
    transform: Option<&Transform>,
    metrics: Option<&ImageMetrics>,
) -> Option<String> {
    compute_overlay_placement(transform, metrics).map(|placement| placement.to_css())
}
