//! Building configuration and validation.
//!
//! Every layout constant lives here rather than in the generator, so a
//! building can be loaded from a JSON file with [`load_config`]. The
//! reference building is the default:
//!
//! ```
//! use liftpath_logic::config::{validate_config, BuildingConfig};
//!
//! let config = BuildingConfig::default();
//! assert_eq!(config.floors, 11);
//! assert!(validate_config(&config).is_empty());
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::Coord;

/// Smallest grid with a non-empty interior inside the wall and room rings.
pub const MIN_GRID_SIDE: usize = 5;

/// Room numbers are two digits.
pub const MAX_ROOMS_PER_FLOOR: u32 = 99;

/// Layout constants for a building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingConfig {
    /// Number of floors, indexed 1..=floors.
    pub floors: u32,
    /// Grid rows per floor.
    pub rows: usize,
    /// Grid columns per floor.
    pub cols: usize,
    /// Room cap per floor; the second ring stops numbering once reached.
    pub rooms_per_floor: u32,
    /// Elevator cells, stamped after rooms and corridors.
    pub elevators: Vec<Coord>,
    /// Service cells (bathrooms), stamped last.
    pub service_points: Vec<Coord>,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors: 11,
            rows: 10,
            cols: 10,
            rooms_per_floor: 27,
            elevators: vec![Coord::new(2, 6), Coord::new(6, 2), Coord::new(7, 6)],
            service_points: vec![Coord::new(8, 2)],
        }
    }
}

impl BuildingConfig {
    /// Whether `floor` is a configured floor index.
    pub fn has_floor(&self, floor: u32) -> bool {
        (1..=self.floors).contains(&floor)
    }

    /// Number of cells on the second ring, i.e. the most rooms a floor can hold.
    pub fn ring_capacity(&self) -> usize {
        if self.rows < MIN_GRID_SIDE || self.cols < MIN_GRID_SIDE {
            return 0;
        }
        (self.cols - 2) + (self.rows - 3) + (self.cols - 3) + (self.rows - 4)
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("building must have at least one floor")]
    NoFloors,
    #[error("grid {rows}x{cols} is too small, need at least {min}x{min}", min = MIN_GRID_SIDE)]
    GridTooSmall { rows: usize, cols: usize },
    #[error("{0} rooms per floor exceeds the two-digit limit of {max}", max = MAX_ROOMS_PER_FLOOR)]
    TooManyRooms(u32),
    #[error("{kind} at {at} is outside the grid or on the outer wall")]
    FixtureOutOfBounds { kind: &'static str, at: Coord },
    #[error("more than one fixture placed at {0}")]
    DuplicateFixture(Coord),
}

/// Failure to turn a configuration file into a [`BuildingConfig`].
#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a building configuration from a JSON file. Missing fields take
/// their reference values; the result is not validated.
pub fn load_config(path: &Path) -> Result<BuildingConfig, LoadConfigError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| LoadConfigError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadConfigError::Parse {
        path: display,
        source,
    })
}

/// Validate a building configuration, returning all errors found.
pub fn validate_config(config: &BuildingConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if config.floors == 0 {
        errors.push(ConfigError::NoFloors);
    }
    if config.rows < MIN_GRID_SIDE || config.cols < MIN_GRID_SIDE {
        errors.push(ConfigError::GridTooSmall {
            rows: config.rows,
            cols: config.cols,
        });
    }
    if config.rooms_per_floor > MAX_ROOMS_PER_FLOOR {
        errors.push(ConfigError::TooManyRooms(config.rooms_per_floor));
    }

    let fixtures = config
        .elevators
        .iter()
        .map(|&at| ("elevator", at))
        .chain(config.service_points.iter().map(|&at| ("service point", at)));

    let mut seen = HashSet::new();
    for (kind, at) in fixtures {
        let inside = at.row >= 1
            && at.col >= 1
            && at.row + 1 < config.rows
            && at.col + 1 < config.cols;
        if !inside {
            errors.push(ConfigError::FixtureOutOfBounds { kind, at });
        }
        if !seen.insert(at) {
            errors.push(ConfigError::DuplicateFixture(at));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&BuildingConfig::default()).is_empty());
    }

    #[test]
    fn test_reference_ring_capacity() {
        // 8 top + 7 right + 7 bottom + 6 left
        assert_eq!(BuildingConfig::default().ring_capacity(), 28);
    }

    #[test]
    fn test_has_floor() {
        let config = BuildingConfig::default();
        assert!(!config.has_floor(0));
        assert!(config.has_floor(1));
        assert!(config.has_floor(11));
        assert!(!config.has_floor(12));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = BuildingConfig {
            floors: 0,
            rows: 4,
            cols: 10,
            rooms_per_floor: 120,
            elevators: vec![Coord::new(0, 3), Coord::new(2, 2)],
            service_points: vec![Coord::new(2, 2)],
        };
        let errors = validate_config(&config);
        assert!(errors.contains(&ConfigError::NoFloors));
        assert!(errors.contains(&ConfigError::GridTooSmall { rows: 4, cols: 10 }));
        assert!(errors.contains(&ConfigError::TooManyRooms(120)));
        assert!(errors.contains(&ConfigError::FixtureOutOfBounds {
            kind: "elevator",
            at: Coord::new(0, 3),
        }));
        assert!(errors.contains(&ConfigError::DuplicateFixture(Coord::new(2, 2))));
    }

    #[test]
    fn test_fixture_on_far_wall_rejected() {
        let config = BuildingConfig {
            elevators: vec![Coord::new(9, 4)],
            ..BuildingConfig::default()
        };
        assert_eq!(
            validate_config(&config),
            vec![ConfigError::FixtureOutOfBounds {
                kind: "elevator",
                at: Coord::new(9, 4),
            }]
        );
    }

    #[test]
    fn test_load_config_file() {
        let path = std::env::temp_dir().join(format!("liftpath-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"floors": 2, "elevators": [[3, 3]]}"#).unwrap();
        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.floors, 2);
        assert_eq!(config.elevators, vec![Coord::new(3, 3)]);
        assert_eq!(config.service_points, BuildingConfig::default().service_points);
    }

    #[test]
    fn test_load_config_errors() {
        let missing = std::env::temp_dir().join("liftpath-no-such-config.json");
        assert!(matches!(
            load_config(&missing),
            Err(LoadConfigError::Read { .. })
        ));

        let path = std::env::temp_dir().join(format!("liftpath-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{floors: 2").unwrap();
        let result = load_config(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(LoadConfigError::Parse { .. })));
    }

    #[test]
    fn test_json_round_trip_with_defaults() {
        let config: BuildingConfig = serde_json::from_str(r#"{"floors": 3}"#).unwrap();
        assert_eq!(config.floors, 3);
        assert_eq!(config.rows, 10);
        assert_eq!(config.elevators.len(), 3);

        let json = serde_json::to_string(&BuildingConfig::default()).unwrap();
        assert!(json.contains(r#""elevators":[[2,6],[6,2],[7,6]]"#));
    }
}
