use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shadowcast_fov::{Direction, Matrix, Point, Settings, Shape};

struct Map {
    walls: Matrix<bool>,
    lit: Matrix<bool>,
}

impl Map {
    fn random(size: i32, density: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(17);
        let mut walls = Matrix::new(Point(size, size), false);
        for y in 0..size {
            for x in 0..size {
                walls.set(Point(x, y), rng.random_bool(density));
            }
        }
        Self { walls, lit: Matrix::new(Point(size, size), false) }
    }

    fn opaque(&self, p: Point) -> bool {
        self.walls.get(p)
    }

    fn apply(&mut self, p: Point, _: Point) {
        self.lit.set(p, true);
    }
}

type Opaque = fn(&Map, Point) -> bool;
type Apply = fn(&mut Map, Point, Point);

fn bench_fov(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut map = Map::random(201, 0.1);
    let source = Point(100, 100);
    map.walls.set(source, false);

    for shape in [Shape::Circle, Shape::Octagon] {
        let mut fov = Settings::new(Map::opaque as Opaque, Map::apply as Apply).shape(shape);
        for radius in [8, 32, 96] {
            c.bench_function(&format!("circle_{}_r{}", shape, radius), |b| {
                b.iter(|| {
                    map.lit.fill(false);
                    fov.circle(&mut map, black_box(source), black_box(radius));
                })
            });
        }
    }

    let mut fov = Settings::new(Map::opaque as Opaque, Map::apply as Apply);
    c.bench_function("beam_north_r32", |b| {
        b.iter(|| {
            map.lit.fill(false);
            fov.beam(&mut map, black_box(source), 32, Direction::North, 1.0);
        })
    });
    c.bench_function("beam2_r32", |b| {
        b.iter(|| {
            map.lit.fill(false);
            fov.beam2(&mut map, black_box(source), 32, 2.5, 1.0);
        })
    });
}

criterion_group!(benches, bench_fov);
criterion_main!(benches);
