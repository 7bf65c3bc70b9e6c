// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixture: a site with two levels.
//!
//! Level 1 (`"01"`) has five disciplines:
//! - Architectural: own image and two revisions.
//! - Structural: own image, regions `A` (two revisions) and `B` (none).
//! - Mechanical: no own image, one revision with a transform.
//! - Electrical: its latest revision reuses Architectural's latest image.
//! - Plumbing: nothing to show.
//!
//! Level 2 (`"02"`) has no disciplines and too few vertices to be outlined.

#![allow(dead_code, reason = "not every test file uses every helper")]

use understory_drawing_model::Metadata;

pub const PROJECT: &str = r#"{
    "project": { "name": "Harbor Tower", "unit": "mm" },
    "disciplines": [
        { "name": "Architectural" }, { "name": "Structural" }, { "name": "Mechanical" },
        { "name": "Electrical" }, { "name": "Plumbing" }
    ],
    "drawings": {
        "00": { "id": "00", "name": "Site", "image": "site.png", "parent": null, "position": null },
        "02": {
            "id": "02", "name": "Level 2", "image": "l2.png", "parent": "00",
            "position": { "vertices": [[0, 0], [10, 0]] }
        },
        "01": {
            "id": "01", "name": "Level 1", "image": "l1.png", "parent": "00",
            "position": { "vertices": [[100, 100], [300, 100], [300, 200], [100, 200]] },
            "disciplines": {
                "Architectural": {
                    "image": "l1-arch.png",
                    "revisions": [
                        { "version": "ARCH-A", "image": "l1-arch-a.png", "date": "2024-01-01",
                          "description": "Initial issue" },
                        { "version": "ARCH-B", "image": "l1-arch-b.png", "date": "2024-02-01",
                          "description": "Core walls moved", "changes": ["Moved core wall W3"] }
                    ]
                },
                "Structural": {
                    "image": "l1-str.png",
                    "regions": {
                        "A": {
                            "revisions": [
                                { "version": "STR-A0", "image": "l1-str-a0.png", "date": "2024-02-01",
                                  "description": "Region A first issue",
                                  "imageTransform": { "x": 10, "y": 20, "relativeTo": "other.png" } },
                                { "version": "STR-A1", "image": "l1-str-a1.png", "date": "2024-03-01",
                                  "description": "Region A slab openings",
                                  "imageTransform": { "x": 600, "y": 500, "scale": 0.5, "rotation": 0,
                                                      "relativeTo": "l1-str.png" } }
                            ]
                        },
                        "B": { "revisions": [] }
                    },
                    "revisions": [
                        { "version": "STR-1", "image": "l1-str-1.png", "date": "2024-01-05",
                          "description": "Whole floor" }
                    ]
                },
                "Mechanical": {
                    "revisions": [
                        { "version": "MEC-1", "image": "l1-mech.png", "date": "2024-02-10",
                          "description": "Ducts",
                          "imageTransform": { "x": 600, "y": 500, "scale": 1, "rotation": 0 } }
                    ]
                },
                "Electrical": {
                    "image": "l1-elec.png",
                    "revisions": [
                        { "version": "ELEC-1", "image": "l1-arch-b.png", "date": "2024-02-11",
                          "description": "Marked up on the architectural sheet" }
                    ]
                },
                "Plumbing": {}
            }
        }
    }
}"#;

pub fn metadata() -> Metadata {
    Metadata::from_json_str(PROJECT).unwrap()
}
