// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for loading metadata and normalizing revision collections.

use serde_json::{Value, json};
use understory_drawing_model::{
    Metadata, Revision, normalize_revision_list, normalize_revisions, parse_revision_date,
};

const PROJECT: &str = r#"{
    "project": { "name": "Harbor Tower", "unit": "mm" },
    "disciplines": [{ "name": "Architectural" }, { "name": "Structural" }],
    "drawings": {
        "00": {
            "id": "00", "name": "Site Plan", "image": "site.png",
            "parent": null, "position": null
        },
        "02": {
            "id": "02", "name": "Parking", "image": "parking.png", "parent": "00",
            "position": { "vertices": [[0, 0], [10, 0], [10], [10, 10]],
                          "imageTransform": { "x": 5, "y": 5, "scale": 1, "rotation": 0 } }
        },
        "01": {
            "id": "01", "name": "Lobby", "image": "lobby.png", "parent": "00",
            "position": null,
            "disciplines": {
                "Structural": {
                    "image": "lobby-str.png",
                    "revisions": {
                        "REV1": { "version": "REV1", "image": "str-1.png",
                                  "date": "2024-01-01", "description": "issue" },
                        "REV2": { "version": "REV2", "image": "str-2.png",
                                  "date": "2024-02-01", "description": "columns" }
                    }
                },
                "Architectural": {
                    "regions": {
                        "B": { "revisions": [] },
                        "A": { "revisions": [
                            { "version": "A1", "image": "a-1.png",
                              "date": "2024-03-01", "description": "east wing" }
                        ] }
                    },
                    "revisions": "not a list"
                }
            }
        }
    }
}"#;

fn versions(revisions: &[Revision]) -> Vec<&str> {
    revisions.iter().map(|r| r.version.as_str()).collect()
}

#[test]
fn loads_root_and_sorted_children() {
    let metadata = Metadata::from_json_str(PROJECT).unwrap();
    assert_eq!(metadata.project.name, "Harbor Tower");
    assert_eq!(metadata.disciplines.len(), 2);

    let root = metadata.root().unwrap();
    assert_eq!(root.id, "00");

    let children: Vec<&str> = metadata
        .children_of(&root.id)
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(children, ["01", "02"]);
}

#[test]
fn discipline_and_region_maps_keep_document_order() {
    let metadata = Metadata::from_json_str(PROJECT).unwrap();
    let lobby = metadata.drawing("01").unwrap();

    let names: Vec<&str> = lobby.discipline_names().collect();
    assert_eq!(names, ["Structural", "Architectural"]);

    let arch = lobby.discipline("Architectural").unwrap();
    let regions: Vec<&str> = arch
        .regions
        .as_ref()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(regions, ["B", "A"]);
    assert!(arch.revisions.is_empty());
    assert_eq!(versions(&arch.region("A").unwrap().revisions), ["A1"]);
}

#[test]
fn keyed_revisions_are_normalized_on_load() {
    let metadata = Metadata::from_json_str(PROJECT).unwrap();
    let structural = metadata
        .drawing("01")
        .and_then(|d| d.discipline("Structural"))
        .unwrap();
    assert_eq!(versions(&structural.revisions), ["REV2", "REV1"]);
    assert_eq!(structural.latest_revision().unwrap().image, "str-2.png");
}

#[test]
fn position_points_skip_short_vertices() {
    let metadata = Metadata::from_json_str(PROJECT).unwrap();
    let parking = metadata.drawing("02").unwrap();
    let points = parking.position.as_ref().unwrap().points();
    assert_eq!(points.len(), 3);
}

#[test]
fn non_object_metadata_is_an_error() {
    assert!(Metadata::from_json_str("[]").is_err());
    assert!(Metadata::from_json_str("null").is_err());
    assert!(Metadata::from_json_str("{ \"drawings\": ").is_err());
}

#[test]
fn normalization_is_idempotent() {
    let raw = json!([
        { "version": "A", "image": "a.png", "date": "2024-01-01", "description": "a" },
        { "version": "B", "image": "b.png", "date": "2024-06-01", "description": "b",
          "changes": ["x"], "imageTransform": { "x": 1, "y": 2, "scale": 0.5, "rotation": 0.1 } },
        { "version": "C", "image": "c.png", "date": "2024-01-01", "description": "c" }
    ]);
    let once = normalize_revisions(&raw);
    let again = normalize_revisions(&serde_json::to_value(&once).unwrap());
    assert_eq!(once, again);
    assert_eq!(normalize_revision_list(once.clone()), once);
}

#[test]
fn equal_dates_keep_input_order() {
    let raw: Value = json!([
        { "version": "first", "image": "1.png", "date": "2024-01-01", "description": "" },
        { "version": "newer", "image": "2.png", "date": "2024-05-01", "description": "" },
        { "version": "second", "image": "3.png", "date": "2024-01-01", "description": "" },
        { "version": "third", "image": "4.png", "date": "2024-01-01T00:00:00Z", "description": "" }
    ]);
    let normalized = normalize_revisions(&raw);
    assert_eq!(versions(&normalized), ["newer", "first", "second", "third"]);

    let dates: Vec<_> = normalized.iter().map(|r| parse_revision_date(&r.date)).collect();
    assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
}
