//! Integration tests against the reference building.
//!
//! Exercises: Building → Floor generation → room queries → route resolution
//!
//! All tests are pure logic — no server, no I/O.

use std::collections::HashSet;

use liftpath_logic::cell::Coord;
use liftpath_logic::{Building, Cell, RouteError};

// ── Helpers ────────────────────────────────────────────────────────────

const ELEVATORS: [Coord; 3] = [Coord::new(2, 6), Coord::new(6, 2), Coord::new(7, 6)];

fn is_edge(at: Coord) -> bool {
    at.row == 0 || at.col == 0 || at.row == 9 || at.col == 9
}

// ── Layout invariants ──────────────────────────────────────────────────

#[test]
fn every_floor_has_wall_ring_and_fixed_fixtures() {
    let building = Building::default();
    for index in building.list_floors() {
        let floor = building.floor(index).unwrap();
        for (at, cell) in floor.cells() {
            if is_edge(at) {
                assert_eq!(cell, Cell::Wall, "floor {} edge {}", index, at);
            }
            match cell {
                Cell::Elevator => assert!(ELEVATORS.contains(&at), "stray lift at {}", at),
                Cell::Service => assert_eq!(at, Coord::new(8, 2)),
                _ => {}
            }
        }
        assert_eq!(floor.elevators(), ELEVATORS.to_vec());
    }
}

#[test]
fn room_labels_unique_within_each_floor_and_across_building() {
    let building = Building::default();
    let mut global = HashSet::new();
    for index in building.list_floors() {
        let rooms = building.list_rooms(index).unwrap();
        let local: HashSet<_> = rooms.iter().cloned().collect();
        assert_eq!(local.len(), rooms.len(), "duplicate room on floor {}", index);
        for room in rooms {
            assert!(global.insert(room.clone()), "{} appears on two floors", room);
        }
    }
}

#[test]
fn rooms_follow_clockwise_numbering() {
    let building = Building::default();
    for index in building.list_floors() {
        let clockwise = building.floor(index).unwrap().rooms_clockwise();
        let numbers: Vec<u32> = clockwise
            .iter()
            .map(|label| label[label.len() - 2..].parse().unwrap())
            .collect();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(numbers.first(), Some(&1));
        assert_eq!(numbers.last(), Some(&27));
    }
}

// ── Reference scenarios ────────────────────────────────────────────────

#[test]
fn floor_one_scenario() {
    let building = Building::default();
    assert_eq!(building.list_floors(), (1..=11).collect::<Vec<u32>>());

    let rooms = building.list_rooms(1).unwrap();
    assert_eq!(rooms.len(), 26);
    assert!(rooms.iter().all(|r| r.starts_with("R1")));
    assert!(!rooms.contains(&"R121".to_string()), "service point replaces R121");

    let grid = building.floor(1).unwrap();
    assert!(grid.grid_rows().next().unwrap().iter().all(|&c| c == Cell::Wall));

    let route = building.resolve_path(1, "R101").unwrap();
    assert!(!route.path().is_empty());
    assert!(ELEVATORS.contains(&route.start().unwrap()));
    assert_eq!(route.destination(), building.find_cell(1, "R101").unwrap());
    assert_eq!(route.labels().len(), route.path().len());
    assert_eq!(route.labels().last().map(String::as_str), Some("R101"));
}

#[test]
fn nonexistent_room_is_invalid_destination() {
    let building = Building::default();
    assert_eq!(
        building.resolve_path(1, "R199"),
        Err(RouteError::InvalidDestination {
            floor: 1,
            label: "R199".into()
        })
    );
    // A real label from another floor is still invalid here.
    assert!(matches!(
        building.resolve_path(2, "R101"),
        Err(RouteError::InvalidDestination { .. })
    ));
}

#[test]
fn out_of_range_floor_is_invalid_floor() {
    let building = Building::default();
    assert_eq!(building.resolve_path(99, "R101"), Err(RouteError::InvalidFloor(99)));
    assert_eq!(building.resolve_path(0, "R101"), Err(RouteError::InvalidFloor(0)));
    assert_eq!(building.resolve_path(12, "R1201"), Err(RouteError::InvalidFloor(12)));
    assert!(building.list_rooms(0).is_err());
    assert!(building.floor(12).is_err());
}

// ── Route properties ───────────────────────────────────────────────────

#[test]
fn routes_are_deterministic_and_reads_do_not_disturb_them() {
    let building = Building::default();
    for index in building.list_floors() {
        for room in building.list_rooms(index).unwrap() {
            let first = building.resolve_path(index, &room);
            let _ = building.list_rooms(index).unwrap();
            let _ = building.floor(index).unwrap();
            let second = building.resolve_path(index, &room);
            assert_eq!(first, second, "floor {} room {}", index, room);
        }
    }
}

#[test]
fn route_cells_are_in_bounds_and_walkable() {
    let building = Building::default();
    let floor = building.floor(5).unwrap();
    for room in floor.list_rooms() {
        let Ok(route) = building.resolve_path(5, &room) else {
            continue;
        };
        let (goal, rest) = route.path().split_last().unwrap();
        assert!(floor.get(*goal).unwrap().is_room());
        for &at in rest {
            let cell = floor.get(at).expect("route cell out of bounds");
            assert!(cell.is_walkable(), "{} crosses {:?} at {}", room, cell, at);
        }
        for pair in route.path().windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }
}

#[test]
fn only_corner_rooms_are_unreachable() {
    let building = Building::default();
    let mut unreachable = Vec::new();
    for room in building.list_rooms(1).unwrap() {
        if let Err(RouteError::NoPathFound { label, .. }) = building.resolve_path(1, &room) {
            unreachable.push(label);
        }
    }
    unreachable.sort();
    assert_eq!(unreachable, vec!["R108", "R115"]);
}
