use criterion::{black_box, criterion_group, criterion_main, Criterion};
use liftpath_logic::config::BuildingConfig;
use liftpath_logic::layout::build_floor;
use liftpath_logic::pathfinding::resolve_route;
use liftpath_logic::Building;

fn floor_generation(c: &mut Criterion) {
    let config = BuildingConfig::default();
    c.bench_function("build_floor", |b| {
        b.iter(|| build_floor(black_box(&config), black_box(7)));
    });
}

fn route_resolution(c: &mut Criterion) {
    let building = Building::default();
    building.warm();
    let floor = building.floor(1).expect("reference floor");
    let rooms = floor.list_rooms();

    c.bench_function("resolve_route_single", |b| {
        b.iter(|| resolve_route(floor, black_box("R101")));
    });
    c.bench_function("resolve_route_all_rooms", |b| {
        b.iter(|| {
            for room in &rooms {
                let _ = resolve_route(floor, black_box(room));
            }
        });
    });
}

criterion_group!(benches, floor_generation, route_resolution);
criterion_main!(benches);
