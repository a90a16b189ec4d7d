//! Grid cells and coordinates.
//!
//! A `Cell` is one of a closed set of labels. It renders (and serializes) as
//! the same label strings the floor grid endpoint has always produced:
//!
//! | Cell | Label |
//! |------|-------|
//! | `Wall` | `X` |
//! | `Corridor` | `" "` |
//! | `Elevator` | `LIFT` |
//! | `Service` | `BATH` |
//! | `Room { floor, number }` | `R{floor}{number:02}` |

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

pub const WALL_LABEL: &str = "X";
pub const CORRIDOR_LABEL: &str = " ";
pub const ELEVATOR_LABEL: &str = "LIFT";
pub const SERVICE_LABEL: &str = "BATH";

/// A grid position. Serialized as a `[row, col]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate.
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single labeled grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Corridor,
    Elevator,
    Service,
    Room { floor: u32, number: u32 },
}

impl Cell {
    /// Cells a route may pass through. Rooms are only ever entered as the
    /// destination, which the search handles separately.
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Corridor | Cell::Elevator | Cell::Service)
    }

    pub fn is_room(self) -> bool {
        matches!(self, Cell::Room { .. })
    }

    /// Whether this cell's label text equals `label`, without allocating.
    pub fn matches_label(self, label: &str) -> bool {
        match self {
            Cell::Wall => label == WALL_LABEL,
            Cell::Corridor => label == CORRIDOR_LABEL,
            Cell::Elevator => label == ELEVATOR_LABEL,
            Cell::Service => label == SERVICE_LABEL,
            Cell::Room { floor, number } => parse_room_label(floor, label) == Some(number),
        }
    }

    /// Label used in rendered routes: bare corridor collapses to `corridor`,
    /// walls to `wall`, everything else keeps its own label.
    pub fn route_label(self) -> String {
        match self {
            Cell::Corridor => "corridor".to_string(),
            Cell::Wall => "wall".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Wall => f.write_str(WALL_LABEL),
            Cell::Corridor => f.write_str(CORRIDOR_LABEL),
            Cell::Elevator => f.write_str(ELEVATOR_LABEL),
            Cell::Service => f.write_str(SERVICE_LABEL),
            Cell::Room { floor, number } => write!(f, "R{}{:02}", floor, number),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Format the label of room `number` on `floor`.
pub fn room_label(floor: u32, number: u32) -> String {
    Cell::Room { floor, number }.to_string()
}

/// Parse `R{floor}{nn}` for a known floor, returning the room number.
fn parse_room_label(floor: u32, label: &str) -> Option<u32> {
    let rest = label.strip_prefix('R')?;
    let digits = rest.strip_prefix(floor.to_string().as_str())?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Normalize free-form room input typed by a user.
///
/// Trims and upper-cases. Input already starting with `R` is taken as a full
/// label. A bare number (`"5"`, `"05"`) expands to `R{floor}{nn}`. Anything
/// else yields `None`.
pub fn normalize_room_label(floor: u32, input: &str) -> Option<String> {
    let input = input.trim().to_uppercase();
    if input.is_empty() {
        return None;
    }
    if input.starts_with('R') {
        return Some(input);
    }
    let number: u32 = input.parse().ok()?;
    Some(room_label(floor, number))
}
