use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gridbox::geometry::{IndexPoint, Point};
use gridbox::mesh::RegularMesh;

fn bench_index_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("serial_index");

    for &n in &[16usize, 32, 64] {
        let mesh = RegularMesh::generate(
            IndexPoint::new([n, n, n]),
            Point::new([1.0, 1.0, 1.0]),
            Point::zero(),
        )
        .unwrap();
        let total = mesh.total_nodes();

        group.bench_with_input(BenchmarkId::new("decode_encode", n), &mesh, |b, mesh| {
            b.iter(|| {
                let mut acc = 0usize;
                for linear in (0..total).step_by(7) {
                    let idx = mesh.node_array_index(black_box(linear)).unwrap();
                    acc += mesh.node_serial_index(idx).unwrap();
                }
                acc
            })
        });

        let mut rng = SmallRng::seed_from_u64(42);
        let queries: Vec<Point<3>> = (0..1024)
            .map(|_| Point::from_fn(|_| rng.r#gen::<f64>() * (n - 1) as f64))
            .collect();
        group.bench_with_input(BenchmarkId::new("nearest_node", n), &mesh, |b, mesh| {
            b.iter(|| {
                let mut acc = 0usize;
                for q in &queries {
                    acc += mesh.nearest_node(black_box(*q)).unwrap();
                }
                acc
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_index_roundtrip);
criterion_main!(benches);
