use criterion::{black_box, criterion_group, BenchmarkId, Criterion, Throughput};
use mobius_core::{
    estimate,
    geometry::{Mesh, ParameterGrid, StripParams},
};

const RADIUS: f64 = 1.0;
const WIDTH: f64 = 0.5;
const RESOLUTIONS: [usize; 4] = [10, 100, 500, 1000];

fn mesh_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_generate");

    for n in RESOLUTIONS {
        let params = StripParams::new(RADIUS, WIDTH, n).unwrap();
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &params, |b, params| {
            b.iter(|| Mesh::generate(black_box(params)))
        });
    }

    group.finish();
}

fn surface_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_area");

    for n in RESOLUTIONS {
        let params = StripParams::new(RADIUS, WIDTH, n).unwrap();
        let grid = ParameterGrid::new(&params);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &grid, |b, grid| {
            b.iter(|| estimate::surface_area(black_box(grid), RADIUS))
        });
    }

    group.finish();
}

fn edge_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_length");

    for n in RESOLUTIONS {
        let params = StripParams::new(RADIUS, WIDTH, n).unwrap();
        group.throughput(Throughput::Elements(params.boundary_resolution() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &params, |b, params| {
            b.iter(|| estimate::edge_length(black_box(params)))
        });
    }

    group.finish();
}

criterion_group!(benches, mesh_generate, surface_area, edge_length);
