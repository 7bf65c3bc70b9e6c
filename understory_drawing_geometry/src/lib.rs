// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawing_geometry --heading-base-level=0

//! Understory Drawing Geometry: overlay placement for layered drawing viewers.
//!
//! Drawing metadata positions one image on top of another with a small
//! [`Transform`]: an anchor point `(x, y)` expressed in the **base image's own
//! pixel space**, a uniform `scale`, and a `rotation` in radians. A viewer
//! rarely shows the base image at its natural size, so the anchor must be
//! re-expressed in screen space every time the rendered size changes.
//!
//! This crate provides:
//! - [`ImageMetrics`]: the natural (pixel) and rendered (on-screen) size of a
//!   base image, as measured by the host after layout.
//! - [`compute_overlay_placement`] / [`compute_overlay_transform`]: turn a
//!   drawing-space [`Transform`] plus optional metrics into an
//!   [`OverlayPlacement`], which renders as a CSS-style transform string and
//!   converts to a [`kurbo::Affine`] about the overlay's own center.
//! - [`project_polygon`]: scale a polygon authored in natural pixel space into
//!   rendered space, for clickable space maps.
//!
//! It does **not** measure anything. Hosts observe the rendered size (a resize
//! observer, a layout pass, a window event) and call back into this crate;
//! every call is a pure recomputation, so the most recent observation wins.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_drawing_geometry::{ImageMetrics, Transform, compute_overlay_transform};
//!
//! // A 1000x1000 base image shown at 500x500.
//! let metrics = ImageMetrics::new(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0)).unwrap();
//!
//! // Anchor 100px right of the base image center.
//! let transform = Transform::new(600.0, 500.0);
//!
//! let css = compute_overlay_transform(Some(&transform), Some(&metrics));
//! assert_eq!(css.as_deref(), Some("translate(50px, 0px) scale(1) rotate(0rad)"));
//! ```
//!
//! ## Degraded mode
//!
//! When no metrics are available yet (the base image has not loaded, or the
//! host cannot measure layout) placement falls back to a fixed scale of
//! [`LEGACY_SCALE`] around [`LEGACY_CENTER`]. This keeps overlays roughly in
//! place instead of failing, but hosts should feed real metrics as soon as
//! they have them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod metrics;
mod placement;
mod polygon;
mod transform;

pub use metrics::ImageMetrics;
pub use placement::{
    LEGACY_CENTER, LEGACY_SCALE, OverlayPlacement, compute_overlay_placement,
    compute_overlay_transform,
};
pub use polygon::{ProjectedPolygon, project_polygon};
pub use transform::Transform;
