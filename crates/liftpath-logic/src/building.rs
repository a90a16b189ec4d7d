//! The building: every floor behind read-only accessors.
//!
//! Floors are generated at most once each, either eagerly with
//! [`Building::warm`] or on first access. Generation is pure, so a floor
//! handed out once is identical to every later read and never mutated.

use std::sync::OnceLock;

use crate::cell::Coord;
use crate::config::{validate_config, BuildingConfig, ConfigError};
use crate::error::{Result, RouteError};
use crate::layout::{build_floor, Floor};
use crate::pathfinding::{resolve_route, Route};

/// All floors of one building configuration.
#[derive(Debug)]
pub struct Building {
    config: BuildingConfig,
    floors: Vec<OnceLock<Floor>>,
}

impl Building {
    /// Create a building, rejecting an invalid configuration with its first error.
    pub fn new(config: BuildingConfig) -> std::result::Result<Self, ConfigError> {
        if let Some(err) = validate_config(&config).into_iter().next() {
            return Err(err);
        }
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: BuildingConfig) -> Self {
        log::info!(
            "Building configured: {} floors, {}x{} grid, up to {} rooms per floor",
            config.floors,
            config.rows,
            config.cols,
            config.rooms_per_floor
        );
        let capacity = config.ring_capacity();
        if config.rooms_per_floor as usize > capacity {
            log::warn!(
                "Room cap {} exceeds ring capacity; only {} rooms per floor",
                config.rooms_per_floor,
                capacity
            );
        }
        let floors = (0..config.floors).map(|_| OnceLock::new()).collect();
        Self { config, floors }
    }

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    /// Generate every floor now instead of on first access.
    pub fn warm(&self) {
        for index in self.list_floors() {
            let _ = self.floor(index);
        }
        log::info!("Generated {} floors", self.floors.len());
    }

    /// Floor indices in ascending order.
    pub fn list_floors(&self) -> Vec<u32> {
        (1..=self.config.floors).collect()
    }

    /// The generated grid for floor `index`.
    pub fn floor(&self, index: u32) -> Result<&Floor> {
        let slot = self
            .config
            .has_floor(index)
            .then(|| self.floors.get(index as usize - 1))
            .flatten()
            .ok_or(RouteError::InvalidFloor(index))?;
        Ok(slot.get_or_init(|| build_floor(&self.config, index)))
    }

    /// Room labels on floor `index`, row-major.
    pub fn list_rooms(&self, index: u32) -> Result<Vec<String>> {
        Ok(self.floor(index)?.list_rooms())
    }

    /// Coordinate of the first cell labeled `label` on floor `index`.
    pub fn find_cell(&self, index: u32, label: &str) -> Result<Option<Coord>> {
        Ok(self.floor(index)?.find_cell(label))
    }

    /// Shortest route from the nearest elevator on floor `index` to `destination`.
    pub fn resolve_path(&self, index: u32, destination: &str) -> Result<Route> {
        resolve_route(self.floor(index)?, destination)
    }

    /// Number of floors generated so far.
    pub fn generated_floors(&self) -> usize {
        self.floors.iter().filter(|f| f.get().is_some()).count()
    }
}

impl Default for Building {
    /// The reference building: 11 floors of 10×10.
    fn default() -> Self {
        Self::from_valid(BuildingConfig::default())
    }
}
