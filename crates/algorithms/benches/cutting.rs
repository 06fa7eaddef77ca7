//! Benchmarks for layer cutting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo::{LineString, Polygon};
use vecpost_algorithms::vector::{exterior_boundaries, intercut, ExteriorBoundariesParams, IntercutParams};
use vecpost_core::{Feature, FeatureLayer, TileLayers};

fn cell(x: f64, y: f64, size: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![(x, y), (x + size, y), (x + size, y + size), (x, y + size), (x, y)]),
        vec![],
    )
}

/// A grid of `n`x`n` buildings under a coarser, offset grid of landuse
fn create_tile(n: usize) -> TileLayers {
    let mut buildings = FeatureLayer::new("buildings");
    for row in 0..n {
        for col in 0..n {
            buildings.push(Feature::new(cell(col as f64 * 10.0 + 1.0, row as f64 * 10.0 + 1.0, 8.0)));
        }
    }

    let kinds = ["residential", "commercial", "park", "industrial"];
    let mut landuse = FeatureLayer::new("landuse");
    let blocks = n.div_ceil(4);
    for row in 0..blocks {
        for col in 0..blocks {
            let kind = kinds[(row * 7 + col * 13) % kinds.len()];
            landuse.push(
                Feature::new(cell(col as f64 * 40.0 + 5.0, row as f64 * 40.0 + 5.0, 40.0)).with_property("kind", kind),
            );
        }
    }

    TileLayers::new(16, vec![buildings, landuse])
}

fn bench_intercut(c: &mut Criterion) {
    let mut group = c.benchmark_group("intercut");
    let params = IntercutParams {
        base_layer: "buildings".into(),
        cutting_layer: "landuse".into(),
        attribute: Some("kind".into()),
        target_attribute: Some("landuse_kind".into()),
        ..Default::default()
    };

    for size in [8, 16, 32].iter() {
        let tile = create_tile(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut layers = tile.clone();
                intercut(black_box(&mut layers), &params).unwrap();
                layers
            })
        });
    }

    group.finish();
}

fn bench_exterior_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("exterior_boundaries");
    let params = ExteriorBoundariesParams {
        base_layer: "landuse".into(),
        new_layer_name: Some("landuse_edges".into()),
        ..Default::default()
    };

    for size in [16, 32, 64].iter() {
        let tile = create_tile(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut layers = tile.clone();
                exterior_boundaries(black_box(&mut layers), &params);
                layers
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intercut, bench_exterior_boundaries);
criterion_main!(benches);
