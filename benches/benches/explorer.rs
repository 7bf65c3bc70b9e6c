// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_drawing_explorer` derivation and the selection reducer.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use serde_json::{Map, Value, json};

use understory_drawing_explorer::{
    Explorer, ExplorerConfig, compute_overlay_layers, derive_view,
};
use understory_drawing_model::Metadata;
use understory_drawing_selection::{SelectionEvent, SelectionIntent, apply_selection_event};

const DISCIPLINES: [&str; 6] = [
    "Architectural",
    "Structural",
    "Mechanical",
    "Electrical",
    "Plumbing",
    "Fire",
];

fn revisions(prefix: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "version": format!("{prefix}-{i}"),
                    "image": format!("{prefix}-{i}.png"),
                    "date": format!("2024-{:02}-{:02}", 1 + i % 12, 1 + i % 28),
                    "description": "issue",
                    "imageTransform": { "x": 100 + i, "y": 200, "scale": 1, "rotation": 0 }
                })
            })
            .collect(),
    )
}

fn metadata(spaces: usize, revisions_per_discipline: usize) -> Metadata {
    let mut drawings = Map::new();
    drawings.insert(
        "root".into(),
        json!({ "id": "root", "name": "Site", "image": "site.png", "parent": null }),
    );
    for s in 0..spaces {
        let id = format!("{s:04}");
        let disciplines: Map<String, Value> = DISCIPLINES
            .iter()
            .map(|name| {
                let prefix = format!("{id}-{name}");
                (
                    (*name).to_owned(),
                    json!({
                        "image": format!("{prefix}.png"),
                        "revisions": revisions(&prefix, revisions_per_discipline)
                    }),
                )
            })
            .collect();
        drawings.insert(
            id.clone(),
            json!({
                "id": id, "name": format!("Level {s}"), "image": format!("{id}.png"),
                "parent": "root", "disciplines": disciplines
            }),
        );
    }
    serde_json::from_value(json!({ "drawings": drawings })).unwrap()
}

fn drilled_intent(space: usize) -> SelectionIntent {
    let mut intent = SelectionIntent::new();
    intent.apply(SelectionEvent::space(format!("{space:04}")));
    intent.apply(SelectionEvent::discipline("Structural"));
    intent.apply(SelectionEvent::revision("stale"));
    for name in DISCIPLINES {
        intent.apply(SelectionEvent::overlay(name));
    }
    intent
}

fn bench_derive_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("explorer/derive_view");

    for spaces in [16usize, 256, 2_048] {
        let metadata = metadata(spaces, 8);
        let intent = drilled_intent(spaces / 2);
        group.throughput(Throughput::Elements(spaces as u64));

        group.bench_with_input(BenchmarkId::new("derive_view", spaces), &spaces, |b, _| {
            b.iter(|| black_box(derive_view(Some(&metadata), &intent).unwrap().overlays.len()));
        });

        let config = ExplorerConfig::default();
        group.bench_with_input(BenchmarkId::new("overlay_layers", spaces), &spaces, |b, _| {
            b.iter(|| {
                let view = derive_view(Some(&metadata), &intent).unwrap();
                black_box(compute_overlay_layers(&view, &config))
            });
        });
    }

    group.finish();
}

fn bench_placed_overlays(c: &mut Criterion) {
    let mut explorer = Explorer::with_metadata(ExplorerConfig::default(), metadata(64, 8));
    for name in DISCIPLINES {
        explorer.dispatch(SelectionEvent::overlay(name));
    }
    explorer.observe_base_image(Size::new(4962.0, 3508.0), Size::new(1240.0, 877.0));

    c.bench_function("explorer/placed_overlays", |b| {
        b.iter(|| black_box(explorer.placed_overlays()));
    });
}

fn bench_reducer(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/reducer");

    let base = drilled_intent(0);
    group.bench_function("apply_selection_event/space", |b| {
        b.iter(|| black_box(apply_selection_event(&base, SelectionEvent::space("0001"))));
    });
    group.bench_function("apply_selection_event/overlay", |b| {
        b.iter(|| black_box(apply_selection_event(&base, SelectionEvent::overlay("Fire"))));
    });
    group.bench_function("apply/overlay_twice", |b| {
        let mut intent = base.clone();
        b.iter(|| {
            intent.apply(SelectionEvent::overlay("Mechanical"));
            intent.apply(SelectionEvent::overlay("Mechanical"));
            black_box(intent.revision())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_derive_view,
    bench_placed_overlays,
    bench_reducer
);
criterion_main!(benches);
