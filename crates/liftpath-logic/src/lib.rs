//! Pure building layout and routing logic for LiftPath.
//!
//! This crate holds everything that is independent of transport: floor
//! generation, route search, and the text renderings of both. Functions take
//! plain data and return results, so the HTTP server, the headless harness,
//! and tests all call the same code.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`building`] | All floors of a building, generated at most once each |
//! | [`cell`] | Cell labels, coordinates, room label parsing/normalization |
//! | [`config`] | Building dimensions, room cap, fixture placement, validation |
//! | [`error`] | `InvalidFloor` / `InvalidDestination` / `NoPathFound` |
//! | [`layout`] | Deterministic floor generator and grid queries |
//! | [`pathfinding`] | Multi-elevator BFS and route labeling |
//! | [`render`] | ASCII floor plans with optional route overlay |

pub mod building;
pub mod cell;
pub mod config;
pub mod error;
pub mod layout;
pub mod pathfinding;
pub mod render;

pub use building::Building;
pub use cell::{Cell, Coord};
pub use config::BuildingConfig;
pub use error::RouteError;
pub use layout::Floor;
pub use pathfinding::Route;
