//! Benchmarks for the worldmap pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use worldmap::parser::{compile_map, parse_map_source, LayerInput, MapInput, SourceFormat};
use worldmap::validation::NullReporter;
use worldmap::{Direction, WorldMap};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A square map with a ground layer, a sparse decoration layer and a hidden walls layer.
fn square_input(size: usize) -> MapInput {
    let ground: Vec<String> = (0..size).map(|_| "G".repeat(size)).collect();
    let decor: Vec<String> = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| if (x + y) % 7 == 0 { 'T' } else { '.' })
                .collect()
        })
        .collect();
    let blank: Vec<String> = (0..size).map(|_| ".".repeat(size)).collect();
    let walls: Vec<String> = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| if x == 0 || y == 0 { 'f' } else { '0' })
                .collect()
        })
        .collect();

    MapInput::new("bench", "Bench")
        .with_layer(LayerInput::new("base", &refs(&ground)))
        .with_layer(LayerInput::new(3, &refs(&decor)))
        .with_layer(
            LayerInput::new(9, &refs(&blank))
                .with_collision_edges(&refs(&walls))
                .with_visible(false),
        )
}

fn refs(rows: &[String]) -> Vec<&str> {
    rows.iter().map(String::as_str).collect()
}

// -- Compile benchmarks --

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    let pallet = load_fixture("pallet.map.yaml");
    group.bench_function("parse_yaml_fixture", |b| {
        b.iter(|| parse_map_source(black_box(&pallet), SourceFormat::Yaml).unwrap())
    });

    let pallet_input = parse_map_source(&pallet, SourceFormat::Yaml)
        .unwrap()
        .maps
        .remove(0);
    group.bench_function("compile_fixture", |b| {
        b.iter(|| compile_map(black_box(&pallet_input), &NullReporter).unwrap())
    });

    for size in [16, 64, 256] {
        let input = square_input(size);
        group.bench_function(format!("compile_{size}x{size}"), |b| {
            b.iter(|| compile_map(black_box(&input), &NullReporter).unwrap())
        });
    }

    group.finish();
}

// -- Query benchmarks --

fn sweep<F: Fn(&WorldMap, i32, i32) -> u32>(map: &WorldMap, f: F) -> u32 {
    let (w, h) = (map.width() as i32, map.height() as i32);
    let mut acc = 0;
    for y in 0..h {
        for x in 0..w {
            acc += f(map, x, y);
        }
    }
    acc
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let map = compile_map(&square_input(64), &NullReporter).unwrap();

    group.bench_function("tile_at_sweep_64", |b| {
        b.iter(|| sweep(black_box(&map), |m, x, y| m.tile_at(x, y).map_or(0, u32::from)))
    });

    group.bench_function("collision_mask_sweep_64", |b| {
        b.iter(|| sweep(black_box(&map), |m, x, y| u32::from(m.collision_edge_mask_at(x, y))))
    });

    group.bench_function("step_blocked_sweep_64", |b| {
        b.iter(|| {
            sweep(black_box(&map), |m, x, y| {
                u32::from(m.is_step_blocked(x, y, Direction::East))
            })
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compile, bench_queries);
criterion_main!(benches);
