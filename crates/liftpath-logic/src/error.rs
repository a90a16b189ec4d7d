//! Client-facing failures of floor queries and route resolution.

use thiserror::Error;

/// Why a floor query or route request could not be answered.
///
/// All variants are client input errors. None are retried and none are
/// fatal; the transport decides how to surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Floor index outside `1..=floors`.
    #[error("Invalid floor")]
    InvalidFloor(u32),
    /// No cell on the floor carries the requested room label.
    #[error("Invalid destination room")]
    InvalidDestination { floor: u32, label: String },
    /// The room exists but no elevator on the floor can reach it.
    #[error("No path found from lifts")]
    NoPathFound { floor: u32, label: String },
}

pub type Result<T> = std::result::Result<T, RouteError>;
