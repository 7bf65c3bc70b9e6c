// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawing_selection --heading-base-level=0

//! Understory Drawing Selection: user intent for a drill-down drawing explorer.
//!
//! A drawing explorer lets the user pick, in order, a **space**, a
//! **discipline**, a **region**, and a **revision**, and toggle other
//! disciplines on as **overlays**. This crate records what the user asked for
//! and nothing more: it never looks at the drawing metadata, so any recorded
//! id may be missing or stale. Higher layers resolve the intent against the
//! metadata and fall back to defaults where needed.
//!
//! The core types are:
//! - [`SelectionIntent`]: the recorded choices plus a revision counter.
//! - [`SelectionEvent`]: one user action.
//! - [`apply_selection_event`]: the pure reducer.
//! - [`OrderedToggleSet`]: the overlay set, which keeps insertion order.
//!
//! ## Cascading resets
//!
//! Each choice invalidates the choices below it:
//!
//! | Event | Sets | Clears |
//! |---|---|---|
//! | [`SelectionEvent::SpaceSelected`] | space | discipline, region, revision, overlays |
//! | [`SelectionEvent::DisciplineSelected`] | discipline | region, revision, overlays |
//! | [`SelectionEvent::RegionSelected`] | region | revision |
//! | [`SelectionEvent::RevisionSelected`] | revision | nothing |
//! | [`SelectionEvent::OverlayToggled`] | toggles one overlay | nothing |
//!
//! Without these resets a revision label chosen under one discipline could
//! silently match a same-named revision under another.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_drawing_selection::{SelectionEvent, SelectionIntent, apply_selection_event};
//!
//! let intent = SelectionIntent::new();
//! let intent = apply_selection_event(&intent, SelectionEvent::space("lobby"));
//! let intent = apply_selection_event(&intent, SelectionEvent::overlay("Mechanical"));
//! assert_eq!(intent.overlays().items(), ["Mechanical"]);
//!
//! // Picking a discipline drops overlays chosen under the previous one.
//! let intent = apply_selection_event(&intent, SelectionEvent::discipline("Structural"));
//! assert!(intent.overlays().is_empty());
//! assert_eq!(intent.space_id(), Some("lobby"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod intent;
mod toggle_set;

pub use intent::{SelectionEvent, SelectionIntent, apply_selection_event};
pub use toggle_set::OrderedToggleSet;
