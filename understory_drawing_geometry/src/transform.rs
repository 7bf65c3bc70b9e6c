// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Placement of one image's content relative to another image's pixel space.
///
/// `x` and `y` locate the anchor in the coordinate space of the image named by
/// [`Transform::relative_to`] (or, when absent, whatever base image the caller
/// places the overlay on). The anchor is interpreted relative to that image's
/// center when computing screen placement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Transform {
    /// Anchor X in base-image pixels.
    pub x: f64,
    /// Anchor Y in base-image pixels.
    pub y: f64,
    /// Uniform scale factor; `1.0` leaves the overlay at its natural size.
    #[cfg_attr(feature = "serde", serde(default = "unit_scale"))]
    pub scale: f64,
    /// Rotation in radians.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f64,
    /// File name of the image these coordinates are expressed against.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub relative_to: Option<String>,
}

#[cfg(feature = "serde")]
fn unit_scale() -> f64 {
    1.0
}

impl Transform {
    /// Creates a translation-only transform anchored at `(x, y)`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            scale: 1.0,
            rotation: 0.0,
            relative_to: None,
        }
    }

    /// Returns a copy with the given uniform scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Returns a copy with the given rotation in radians.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy that declares which image its coordinates refer to.
    #[must_use]
    pub fn with_relative_to(mut self, image: impl Into<String>) -> Self {
        self.relative_to = Some(image.into());
        self
    }

    /// Returns `true` if this transform may be applied on top of `base_image`.
    ///
    /// A transform without [`Transform::relative_to`] is compatible with any
    /// base image.
    #[must_use]
    pub fn is_relative_to(&self, base_image: &str) -> bool {
        self.relative_to
            .as_deref()
            .is_none_or(|image| image == base_image)
    }
}
