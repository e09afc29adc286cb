use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slide_collision::{
    math::vec2::Vec2,
    shapes::{AgentShape, LineSegment, Polygon},
    world::{slide_move, PolygonWorld, SegmentWorld},
    SlideConfig,
};

// --- Helper for building a ring of walls around the origin ---
fn ring_segments(count: usize, radius: f64) -> Vec<LineSegment> {
    let step = std::f64::consts::TAU / count as f64;
    (0..count)
        .map(|i| {
            let a = i as f64 * step;
            let b = a + step;
            LineSegment::new(
                Vec2::new(a.cos(), a.sin()) * radius,
                Vec2::new(b.cos(), b.sin()) * radius,
            )
        })
        .collect()
}

fn ring_polygon(count: usize, radius: f64) -> Polygon {
    let step = std::f64::consts::TAU / count as f64;
    let vertices = (0..count)
        .map(|i| {
            let a = i as f64 * step;
            Vec2::new(a.cos(), a.sin()) * radius
        })
        .collect();
    Polygon::new(vertices).expect("ring polygon has distinct vertices")
}

// --- Helper for running an agent in circles inside the ring ---
fn run_ticks<W>(world: &W, shape: AgentShape, config: &SlideConfig, ticks: usize)
where
    W: slide_collision::CollisionWorld,
{
    let mut pos = Vec2::ZERO;
    for i in 0..ticks {
        let angle = i as f64 * 0.05;
        let delta = Vec2::new(angle.cos(), angle.sin()) * 0.3;
        slide_move(&mut pos, shape, black_box(delta), world, config);
    }
}

// Slide-move against segment worlds of growing size
fn bench_segment_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_world");
    let config = SlideConfig::default();

    for count in [16, 128, 1024].iter() {
        let world = SegmentWorld::from_polygons([&ring_polygon(*count, 6.0)]);
        for shape in [AgentShape::Circle, AgentShape::Box] {
            let id = criterion::BenchmarkId::new(format!("{:?}", shape), count);
            group.bench_with_input(id, &world, |b, world| {
                b.iter(|| run_ticks(world, shape, &config, 100));
            });
        }
    }
    group.finish();
}

// Slide-move against polygon worlds of growing size
fn bench_polygon_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_world");
    let config = SlideConfig::default();

    for count in [16, 128, 1024].iter() {
        let world = PolygonWorld::new(vec![ring_polygon(*count, 6.0)]);
        for shape in [AgentShape::Circle, AgentShape::Box] {
            let id = criterion::BenchmarkId::new(format!("{:?}", shape), count);
            group.bench_with_input(id, &world, |b, world| {
                b.iter(|| run_ticks(world, shape, &config, 100));
            });
        }
    }
    group.finish();
}

// Raycast fan from the centre of the ring
fn bench_raycast(c: &mut Criterion) {
    let mut group = c.benchmark_group("raycast");

    for count in [16, 128, 1024].iter() {
        let segments = ring_segments(*count, 6.0);
        group.bench_with_input(criterion::BenchmarkId::from_parameter(count), &segments, |b, segments| {
            b.iter(|| {
                let mut nearest = 1.0f64;
                for i in 0..64 {
                    let angle = i as f64 * std::f64::consts::TAU / 64.0;
                    let to = Vec2::new(angle.cos(), angle.sin()) * 10.0;
                    nearest = nearest.min(slide_collision::raycast(Vec2::ZERO, black_box(to), segments));
                }
                nearest
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segment_world, bench_polygon_world, bench_raycast);
criterion_main!(benches);
