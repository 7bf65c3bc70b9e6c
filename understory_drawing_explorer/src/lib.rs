// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawing_explorer --heading-base-level=0

//! Understory Drawing Explorer: what a drill-down drawing viewer shows.
//!
//! Given the project [`Metadata`](understory_drawing_model::Metadata) and the
//! user's [`SelectionIntent`](understory_drawing_selection::SelectionIntent),
//! this crate derives everything a viewer needs to paint:
//!
//! - the **effective selection**: space, discipline, region, revision and
//!   overlays, each resolved against what the metadata actually has,
//! - the **base image**,
//! - the **overlay layers**, other disciplines' latest drawings laid
//!   semi-transparently over the base image,
//! - each layer's **placement**, recomputed from the measured size of the
//!   base image.
//!
//! ## Fallbacks
//!
//! Every level resolves the same way: the requested id or name if it is a
//! current candidate, else the first candidate, else nothing. A stale or
//! missing request is therefore never an error. The only failures are missing
//! metadata and metadata without a root drawing; see [`DeriveError`].
//!
//! The derivation functions in [`derive`] are pure and take borrowed inputs;
//! [`derive_view`] runs all of them at once. [`Explorer`] wraps them in a
//! session that also owns the load state and the image measurements.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_drawing_explorer::{Explorer, ExplorerConfig};
//! use understory_drawing_model::Metadata;
//! use understory_drawing_selection::SelectionEvent;
//!
//! let metadata = Metadata::from_json_str(r#"{
//!     "drawings": {
//!         "00": { "id": "00", "name": "Site", "image": "site.png", "parent": null },
//!         "01": { "id": "01", "name": "Lobby", "image": "lobby.png", "parent": "00",
//!                 "disciplines": {
//!                     "Structural": { "image": "lobby-str.png" },
//!                     "Mechanical": { "image": "lobby-mech.png",
//!                                     "imageTransform": { "x": 600, "y": 500, "scale": 1, "rotation": 0 } }
//!                 } }
//!     }
//! }"#).unwrap();
//!
//! let mut explorer = Explorer::with_metadata(ExplorerConfig::default(), metadata);
//! explorer.dispatch(SelectionEvent::overlay("Mechanical"));
//! explorer.observe_base_image(Size::new(1000.0, 1000.0), Size::new(500.0, 500.0));
//!
//! let view = explorer.view().unwrap();
//! assert_eq!(view.discipline_name, Some("Structural"));
//! assert_eq!(view.base_image, Some("lobby-str.png"));
//!
//! let placed = explorer.placed_overlays();
//! assert_eq!(placed[0].layer.image_url, "/timwork/data/drawings/lobby-mech.png");
//! assert_eq!(
//!     placed[0].transform.as_deref(),
//!     Some("translate(50px, 0px) scale(1) rotate(0rad)")
//! );
//! ```
//!
//! ## Features
//!
//! - `http`: load metadata from `http://` and `https://` locations with a
//!   blocking [`ureq`](https://docs.rs/ureq) request.

mod canvas;
mod config;
mod context;
pub mod derive;
mod error;
mod explorer;
mod load;
mod overlay;
mod space_map;
mod url;

pub use canvas::{OverlayCanvas, PlacedOverlay};
pub use config::{
    BlendMode, DEFAULT_DRAWING_BASE_PATH, DEFAULT_METADATA_PATH, ExplorerConfig, LayerStyle,
};
pub use context::{ContextSummary, filter_spaces};
pub use derive::{EffectiveSelection, ExplorerView, derive_effective_selection, derive_view};
pub use error::{DeriveError, LoadError};
pub use explorer::Explorer;
pub use load::{LoadState, MetadataSource, load_metadata};
pub use overlay::{OverlayLayer, compute_overlay_layers, default_region_layer};
pub use space_map::{SpaceMarker, space_markers};
pub use url::drawing_url;
