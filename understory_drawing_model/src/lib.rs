// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawing_model --heading-base-level=0

//! Understory Drawing Model: the read-only metadata behind a layered drawing viewer.
//!
//! A project is described by a single JSON document. One root [`Drawing`]
//! (the site plan) has child drawings, the **spaces**. Each space carries a
//! map of [`DisciplineData`] by discipline name (structural, mechanical, ...).
//! A discipline owns its own [`Revision`] history and may be split into named
//! [`Region`]s, each with an independent revision history.
//!
//! The model is loaded once and never mutated. Everything a viewer shows is
//! derived from it by higher layers.
//!
//! ## Revisions
//!
//! Revision lists in hand-maintained metadata are inconsistent: sometimes an
//! array, sometimes an object keyed by version, sometimes with entries missing
//! fields. [`normalize_revisions`] accepts any JSON value and returns the valid
//! entries **latest first**; malformed entries are dropped silently. The
//! deserializers in this crate run it for every revision list, so a loaded
//! [`Metadata`] only ever contains canonical, sorted revision lists.
//!
//! ```rust
//! use serde_json::json;
//! use understory_drawing_model::normalize_revisions;
//!
//! let raw = json!({
//!     "A": { "version": "A", "image": "a.png", "date": "2024-01-10", "description": "initial" },
//!     "B": { "version": "B", "image": "b.png", "date": "2024-03-02", "description": "walls moved",
//!            "changes": ["moved wall W3"] },
//!     "broken": { "version": "C" }
//! });
//!
//! let revisions = normalize_revisions(&raw);
//! let versions: Vec<&str> = revisions.iter().map(|r| r.version.as_str()).collect();
//! assert_eq!(versions, ["B", "A"]);
//! assert!(revisions[1].changes.is_empty());
//! ```
//!
//! ## Loading
//!
//! ```rust
//! use understory_drawing_model::Metadata;
//!
//! let metadata = Metadata::from_json_str(r#"{
//!     "project": { "name": "Tower", "unit": "mm" },
//!     "disciplines": [{ "name": "Structural" }],
//!     "drawings": {
//!         "00": { "id": "00", "name": "Site", "image": "site.png", "parent": null, "position": null },
//!         "01": { "id": "01", "name": "Lobby", "image": "lobby.png", "parent": "00", "position": null }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(metadata.root().map(|d| d.id.as_str()), Some("00"));
//! ```

mod drawing;
mod revision;

pub use drawing::{
    DisciplineData, DisciplineInfo, Drawing, Metadata, Polygon, Project, Region, SpacePosition,
};
pub use revision::{Revision, normalize_revision_list, normalize_revisions, parse_revision_date};
pub use understory_drawing_geometry::Transform;
