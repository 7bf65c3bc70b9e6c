// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for resolving a selection intent against metadata.

mod common;

use understory_drawing_explorer::{
    DeriveError, EffectiveSelection, derive_effective_selection, derive_view,
};
use understory_drawing_model::Metadata;
use understory_drawing_selection::{SelectionEvent, SelectionIntent};

fn intent(events: impl IntoIterator<Item = SelectionEvent>) -> SelectionIntent {
    let mut intent = SelectionIntent::new();
    for event in events {
        intent.apply(event);
    }
    intent
}

fn versions<'a>(view: &'a understory_drawing_explorer::ExplorerView<'a>) -> Vec<&'a str> {
    view.revision_candidates
        .iter()
        .map(|r| r.version.as_str())
        .collect()
}

#[test]
fn empty_intent_resolves_to_first_candidates() {
    let metadata = common::metadata();
    let view = derive_view(Some(&metadata), &SelectionIntent::new()).unwrap();

    assert_eq!(view.root.id, "00");
    let space_ids: Vec<&str> = view.spaces.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(space_ids, ["01", "02"]);
    assert_eq!(view.space.map(|s| s.id.as_str()), Some("01"));
    assert_eq!(
        view.discipline_names,
        ["Architectural", "Structural", "Mechanical", "Electrical", "Plumbing"]
    );
    assert_eq!(view.discipline_name, Some("Architectural"));
    assert!(view.region_names.is_empty());
    assert_eq!(view.region_name, None);
    assert_eq!(versions(&view), ["ARCH-B", "ARCH-A"]);
    assert_eq!(view.revision.map(|r| r.version.as_str()), Some("ARCH-B"));
    assert_eq!(view.latest_revision.map(|r| r.version.as_str()), Some("ARCH-B"));
    assert_eq!(view.base_image, Some("l1-arch-b.png"));
    assert_eq!(
        view.overlay_candidates,
        ["Structural", "Mechanical", "Electrical", "Plumbing"]
    );
    assert!(view.overlays.is_empty());
}

#[test]
fn stale_requests_fall_back_at_every_level() {
    let metadata = common::metadata();
    let stale = intent([
        SelectionEvent::space("99"),
        SelectionEvent::discipline("Landscape"),
        SelectionEvent::region("Z"),
        SelectionEvent::revision("REV-404"),
    ]);
    let selection = derive_effective_selection(Some(&metadata), &stale).unwrap();
    assert_eq!(
        selection,
        EffectiveSelection {
            space_id: Some("01".into()),
            discipline: Some("Architectural".into()),
            region: None,
            revision_version: Some("ARCH-B".into()),
            overlays: Vec::new(),
        }
    );
}

#[test]
fn a_space_is_always_chosen_when_spaces_exist() {
    let metadata = common::metadata();
    for requested in [None, Some("01"), Some("02"), Some("00"), Some("missing")] {
        let mut intent = SelectionIntent::new();
        if let Some(id) = requested {
            intent.apply(SelectionEvent::space(id));
        }
        let view = derive_view(Some(&metadata), &intent).unwrap();
        assert!(view.space.is_some(), "no space for request {requested:?}");
    }
}

#[test]
fn space_without_disciplines_shows_its_own_image() {
    let metadata = common::metadata();
    let view = derive_view(Some(&metadata), &intent([SelectionEvent::space("02")])).unwrap();
    assert_eq!(view.space.map(|s| s.name.as_str()), Some("Level 2"));
    assert!(view.discipline_names.is_empty());
    assert_eq!(view.discipline, None);
    assert!(view.revision_candidates.is_empty());
    assert_eq!(view.revision, None);
    assert_eq!(view.base_image, Some("l2.png"));
    assert!(view.overlay_candidates.is_empty());
}

#[test]
fn discipline_with_regions_and_image_keeps_its_own_image() {
    let metadata = common::metadata();
    for revision in ["STR-A0", "STR-A1"] {
        let intent = intent([
            SelectionEvent::discipline("Structural"),
            SelectionEvent::region("A"),
            SelectionEvent::revision(revision),
        ]);
        let view = derive_view(Some(&metadata), &intent).unwrap();
        assert_eq!(view.revision.map(|r| r.version.as_str()), Some(revision));
        assert_eq!(view.base_image, Some("l1-str.png"));
    }
}

#[test]
fn region_defaults_to_the_first_and_replaces_the_revision_pool() {
    let metadata = common::metadata();
    let view = derive_view(Some(&metadata), &intent([SelectionEvent::discipline("Structural")])).unwrap();
    assert_eq!(view.region_names, ["A", "B"]);
    assert_eq!(view.region_name, Some("A"));
    assert_eq!(versions(&view), ["STR-A1", "STR-A0"]);
}

#[test]
fn empty_region_pool_does_not_fall_back_to_discipline_revisions() {
    let metadata = common::metadata();
    let intent = intent([
        SelectionEvent::discipline("Structural"),
        SelectionEvent::region("B"),
    ]);
    let view = derive_view(Some(&metadata), &intent).unwrap();
    assert_eq!(view.region_name, Some("B"));
    assert!(view.revision_candidates.is_empty());
    assert_eq!(view.revision, None);
    assert_eq!(view.latest_revision, None);
    assert_eq!(view.base_image, Some("l1-str.png"));
}

#[test]
fn discipline_without_image_uses_revision_image() {
    let metadata = common::metadata();
    let view = derive_view(Some(&metadata), &intent([SelectionEvent::discipline("Mechanical")])).unwrap();
    assert_eq!(view.base_image, Some("l1-mech.png"));

    let view = derive_view(Some(&metadata), &intent([SelectionEvent::discipline("Plumbing")])).unwrap();
    assert_eq!(view.revision, None);
    assert_eq!(view.base_image, Some("l1.png"));
}

#[test]
fn overlays_keep_request_order_and_drop_non_candidates() {
    let metadata = common::metadata();
    let intent = intent([
        SelectionEvent::overlay("Mechanical"),
        SelectionEvent::overlay("Landscape"),
        SelectionEvent::overlay("Architectural"),
        SelectionEvent::overlay("Structural"),
    ]);
    let view = derive_view(Some(&metadata), &intent).unwrap();
    assert_eq!(view.discipline_name, Some("Architectural"));
    assert_eq!(view.overlays, ["Mechanical", "Structural"]);
    assert_eq!(view.selection().overlays, ["Mechanical", "Structural"]);
}

#[test]
fn missing_metadata_and_missing_root_are_errors() {
    assert_eq!(
        derive_view(None, &SelectionIntent::new()).unwrap_err(),
        DeriveError::NoMetadata
    );

    let orphans = Metadata::from_json_str(
        r#"{ "drawings": {
            "01": { "id": "01", "name": "Lobby", "image": "lobby.png", "parent": "00" }
        } }"#,
    )
    .unwrap();
    assert_eq!(
        derive_view(Some(&orphans), &SelectionIntent::new()).unwrap_err(),
        DeriveError::NoRootDrawing
    );
}

#[test]
fn root_without_spaces_has_no_space() {
    let metadata = Metadata::from_json_str(
        r#"{ "drawings": {
            "00": { "id": "00", "name": "Site", "image": "site.png", "parent": null }
        } }"#,
    )
    .unwrap();
    let view = derive_view(Some(&metadata), &SelectionIntent::new()).unwrap();
    assert!(view.spaces.is_empty());
    assert_eq!(view.space, None);
    assert_eq!(view.base_image, None);
    assert_eq!(view.selection(), EffectiveSelection::default());
}
