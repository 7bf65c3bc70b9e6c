// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for revision normalization in `understory_drawing_model`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Map, Value, json};

use understory_drawing_model::normalize_revisions;

fn entry(i: usize) -> Value {
    // Mix date formats and sprinkle in entries that must be dropped.
    let date = match i % 3 {
        0 => format!("2024-{:02}-{:02}", 1 + i % 12, 1 + i % 28),
        1 => format!("2023-{:02}-{:02}T08:30:00Z", 1 + i % 12, 1 + i % 28),
        _ => format!("2022-{:02}-{:02} 17:00:00", 1 + i % 12, 1 + i % 28),
    };
    if i % 17 == 0 {
        return json!({ "version": format!("R{i}") });
    }
    json!({
        "version": format!("R{i}"),
        "image": format!("r{i}.png"),
        "date": date,
        "description": "issue",
        "changes": ["moved wall", 3]
    })
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("revisions/normalize");

    for len in [8usize, 64, 512] {
        let list = Value::Array((0..len).map(entry).collect());
        let keyed = Value::Object(
            (0..len)
                .map(|i| (format!("R{i}"), entry(i)))
                .collect::<Map<String, Value>>(),
        );
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("array", len), &list, |b, raw| {
            b.iter(|| black_box(normalize_revisions(raw)));
        });
        group.bench_with_input(BenchmarkId::new("keyed", len), &keyed, |b, raw| {
            b.iter(|| black_box(normalize_revisions(raw)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
