//! LiftPath Headless Validation Harness
//!
//! Generates every floor of a building and checks layout invariants, then
//! resolves a route to every room and a seeded batch of random queries.
//! Runs entirely in-process with no server and no networking.
//!
//! Usage:
//!   cargo run -p liftpath-simtest
//!   cargo run -p liftpath-simtest -- --verbose
//!   cargo run -p liftpath-simtest -- --config building.json --seed 7

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use liftpath_logic::cell::room_label;
use liftpath_logic::config::{load_config, validate_config, BuildingConfig};
use liftpath_logic::render::render_floor;
use liftpath_logic::{Building, Cell, Coord, RouteError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const RANDOM_QUERIES: usize = 500;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

/// Sweep every floor and room of a building without a server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Print every check and a sample floor plan
    #[arg(short, long)]
    verbose: bool,

    /// Seed for the random query sweep
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Path to a building configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let options = Options::parse();
    println!("=== LiftPath Validation Harness ===\n");

    let config = match &options.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        },
        None => BuildingConfig::default(),
    };

    let mut results = Vec::new();

    // 1. Configuration
    results.extend(validate_configuration(&config));

    let building = match Building::new(config) {
        Ok(building) => building,
        Err(err) => {
            eprintln!("Cannot build: {}", err);
            std::process::exit(1);
        }
    };
    building.warm();

    // 2. Layout invariants on every floor
    results.extend(validate_layout(&building));

    // 3. Route to every room
    results.extend(validate_routes(&building, options.verbose));

    // 4. Error taxonomy
    results.extend(validate_errors(&building));

    // 5. Seeded random queries
    results.extend(validate_random_queries(&building, options.seed));

    if options.verbose {
        print_sample_plan(&building);
    }

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || options.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Configuration ────────────────────────────────────────────────────

fn validate_configuration(config: &BuildingConfig) -> Vec<TestResult> {
    println!("--- Configuration ---");
    let errors = validate_config(config);
    vec![
        TestResult {
            name: "config_valid".into(),
            passed: errors.is_empty(),
            detail: if errors.is_empty() {
                format!(
                    "{} floors, {}x{}, {} lifts",
                    config.floors,
                    config.rows,
                    config.cols,
                    config.elevators.len()
                )
            } else {
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            },
        },
        TestResult {
            name: "config_has_elevators".into(),
            passed: !config.elevators.is_empty(),
            detail: format!("{} elevators configured", config.elevators.len()),
        },
    ]
}

// ── 2. Layout ───────────────────────────────────────────────────────────

fn validate_layout(building: &Building) -> Vec<TestResult> {
    println!("--- Layout ---");
    let mut results = Vec::new();
    let config = building.config();
    let (rows, cols) = (config.rows, config.cols);

    let mut bad_walls = Vec::new();
    let mut bad_fixtures = Vec::new();
    let mut duplicate_rooms = Vec::new();
    let mut out_of_order = Vec::new();

    for index in building.list_floors() {
        let Ok(floor) = building.floor(index) else {
            bad_walls.push(index);
            continue;
        };

        let walls_ok = floor.cells().all(|(at, cell)| {
            let edge = at.row == 0 || at.col == 0 || at.row + 1 == rows || at.col + 1 == cols;
            !edge || cell == Cell::Wall
        });
        if !walls_ok {
            bad_walls.push(index);
        }

        let lifts: HashSet<Coord> = floor.elevators().into_iter().collect();
        let services: HashSet<Coord> = floor
            .cells()
            .filter(|&(_, c)| c == Cell::Service)
            .map(|(at, _)| at)
            .collect();
        let want_lifts: HashSet<Coord> = config.elevators.iter().copied().collect();
        let want_services: HashSet<Coord> = config.service_points.iter().copied().collect();
        if lifts != want_lifts || services != want_services {
            bad_fixtures.push(index);
        }

        let rooms = floor.list_rooms();
        let unique: HashSet<&String> = rooms.iter().collect();
        if unique.len() != rooms.len() {
            duplicate_rooms.push(index);
        }

        let numbers: Vec<u32> = floor
            .rooms_clockwise()
            .iter()
            .filter_map(|label| label.get(label.len().saturating_sub(2)..))
            .filter_map(|digits| digits.parse().ok())
            .collect();
        if !numbers.windows(2).all(|w| w[0] < w[1]) {
            out_of_order.push(index);
        }
    }

    results.push(TestResult {
        name: "layout_outer_wall".into(),
        passed: bad_walls.is_empty(),
        detail: format!("floors with broken outer wall: {:?}", bad_walls),
    });
    results.push(TestResult {
        name: "layout_fixtures_exact".into(),
        passed: bad_fixtures.is_empty(),
        detail: format!("floors with misplaced fixtures: {:?}", bad_fixtures),
    });
    results.push(TestResult {
        name: "layout_rooms_unique".into(),
        passed: duplicate_rooms.is_empty(),
        detail: format!("floors with duplicate rooms: {:?}", duplicate_rooms),
    });
    results.push(TestResult {
        name: "layout_rooms_clockwise".into(),
        passed: out_of_order.is_empty(),
        detail: format!("floors numbered out of order: {:?}", out_of_order),
    });

    results
}

// ── 3. Routes ───────────────────────────────────────────────────────────

fn validate_routes(building: &Building, verbose: bool) -> Vec<TestResult> {
    println!("--- Routes ---");
    let mut results = Vec::new();

    let mut reachable = 0;
    let mut unreachable = Vec::new();
    let mut unexpected = Vec::new();
    let mut invalid_routes = Vec::new();
    let mut longest = 0;

    for index in building.list_floors() {
        let Ok(floor) = building.floor(index) else {
            continue;
        };
        for room in floor.list_rooms() {
            match building.resolve_path(index, &room) {
                Ok(route) => {
                    reachable += 1;
                    longest = longest.max(route.steps());
                    let contiguous = route.path().windows(2).all(|w| w[0].manhattan(w[1]) == 1);
                    let through_walkable = route.path()[..route.path().len().saturating_sub(1)]
                        .iter()
                        .all(|&at| floor.get(at).is_some_and(|c| c.is_walkable()));
                    let starts_at_lift = route
                        .start()
                        .is_some_and(|at| floor.get(at) == Some(Cell::Elevator));
                    let labels_parallel = route.labels().len() == route.path().len()
                        && route.labels().last() == Some(&room);
                    if !(contiguous && through_walkable && starts_at_lift && labels_parallel) {
                        invalid_routes.push(room.clone());
                    }
                }
                Err(RouteError::NoPathFound { .. }) => unreachable.push(room.clone()),
                Err(err) => unexpected.push(format!("{}: {}", room, err)),
            }
        }
    }

    results.push(TestResult {
        name: "routes_well_formed".into(),
        passed: invalid_routes.is_empty(),
        detail: format!(
            "{} routes, longest {} steps, malformed: {:?}",
            reachable, longest, invalid_routes
        ),
    });
    results.push(TestResult {
        name: "routes_listed_rooms_resolve".into(),
        passed: unexpected.is_empty(),
        detail: if unexpected.is_empty() {
            "every listed room is a valid destination".into()
        } else {
            unexpected.join("; ")
        },
    });
    results.push(TestResult {
        name: "routes_majority_reachable".into(),
        passed: reachable > unreachable.len(),
        detail: format!(
            "{} reachable, {} boxed in",
            reachable,
            unreachable.len()
        ),
    });

    if verbose && !unreachable.is_empty() {
        println!("  Unreachable rooms: {}", unreachable.join(", "));
    }

    results
}

// ── 4. Errors ───────────────────────────────────────────────────────────

fn validate_errors(building: &Building) -> Vec<TestResult> {
    println!("--- Error Taxonomy ---");
    let mut results = Vec::new();
    let top = building.config().floors;

    let below = building.resolve_path(0, &room_label(1, 1));
    let above = building.resolve_path(top + 1, &room_label(top + 1, 1));
    results.push(TestResult {
        name: "errors_floor_bounds".into(),
        passed: below == Err(RouteError::InvalidFloor(0))
            && above == Err(RouteError::InvalidFloor(top + 1)),
        detail: format!("floor 0 and {} rejected", top + 1),
    });

    let bogus = room_label(1, 99);
    let missing = building.resolve_path(1, &bogus);
    results.push(TestResult {
        name: "errors_unknown_room".into(),
        passed: matches!(missing, Err(RouteError::InvalidDestination { .. })),
        detail: format!("{} → {:?}", bogus, missing),
    });

    let foreign = building.resolve_path(1, &room_label(top, 1));
    results.push(TestResult {
        name: "errors_room_on_other_floor".into(),
        passed: top == 1 || matches!(foreign, Err(RouteError::InvalidDestination { .. })),
        detail: "room labels are scoped to their floor".into(),
    });

    results
}

// ── 5. Random queries ───────────────────────────────────────────────────

fn validate_random_queries(building: &Building, seed: u64) -> Vec<TestResult> {
    println!("--- Random Queries (seed {}) ---", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let floors = building.list_floors();

    let mut nondeterministic = 0;
    let mut too_short = 0;
    let mut outcomes = [0usize; 3];

    for _ in 0..RANDOM_QUERIES {
        let Some(&index) = floors.choose(&mut rng) else {
            break;
        };
        let rooms = building.list_rooms(index).unwrap_or_default();
        let label = if rng.gen_bool(0.8) {
            rooms
                .choose(&mut rng)
                .cloned()
                .unwrap_or_else(|| room_label(index, 1))
        } else {
            room_label(index, rng.gen_range(1..=99))
        };

        let first = building.resolve_path(index, &label);
        let second = building.resolve_path(index, &label);
        if first != second {
            nondeterministic += 1;
        }

        match first {
            Ok(route) => {
                outcomes[0] += 1;
                if let (Some(a), Some(b)) = (route.start(), route.destination()) {
                    if route.steps() < a.manhattan(b) {
                        too_short += 1;
                    }
                }
            }
            Err(RouteError::NoPathFound { .. }) => outcomes[1] += 1,
            Err(_) => outcomes[2] += 1,
        }
    }

    vec![
        TestResult {
            name: "random_deterministic".into(),
            passed: nondeterministic == 0,
            detail: format!(
                "{} queries: {} routed, {} no path, {} invalid",
                RANDOM_QUERIES, outcomes[0], outcomes[1], outcomes[2]
            ),
        },
        TestResult {
            name: "random_routes_respect_distance".into(),
            passed: too_short == 0,
            detail: format!("{} routes shorter than Manhattan distance", too_short),
        },
    ]
}

fn print_sample_plan(building: &Building) {
    let Ok(floor) = building.floor(1) else {
        return;
    };
    let rooms = floor.list_rooms();
    let Some(route) = rooms.iter().find_map(|r| building.resolve_path(1, r).ok()) else {
        println!("\n  Floor 1 has no reachable rooms");
        return;
    };
    let goal = route.labels().last().cloned().unwrap_or_default();
    println!("\n  Floor 1, route to {} ({} steps):", goal, route.steps());
    for line in render_floor(floor, Some(&route)).lines() {
        println!("    {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = Options::try_parse_from(["liftpath-simtest"]).unwrap();
        assert!(!options.verbose);
        assert_eq!(options.seed, 42);
        assert!(options.config.is_none());
    }

    #[test]
    fn test_options_values() {
        let options = Options::try_parse_from([
            "liftpath-simtest",
            "--verbose",
            "--seed",
            "7",
            "--config",
            "building.json",
        ])
        .unwrap();
        assert!(options.verbose);
        assert_eq!(options.seed, 7);
        assert_eq!(options.config, Some(PathBuf::from("building.json")));
    }

    #[test]
    fn test_bad_seed_is_rejected() {
        assert!(Options::try_parse_from(["liftpath-simtest", "--seed", "notanumber"]).is_err());
        assert!(Options::try_parse_from(["liftpath-simtest", "--seed"]).is_err());
    }

    #[test]
    fn test_reference_building_sweep_passes() {
        let building = Building::default();
        building.warm();
        let mut results = validate_configuration(building.config());
        results.extend(validate_layout(&building));
        results.extend(validate_routes(&building, false));
        results.extend(validate_errors(&building));
        results.extend(validate_random_queries(&building, 42));
        let failed: Vec<_> = results.iter().filter(|r| !r.passed).map(|r| &r.name).collect();
        assert!(failed.is_empty(), "failed checks: {:?}", failed);
    }
}
