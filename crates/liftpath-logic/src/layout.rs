//! Deterministic floor layout generation.
//!
//! Every floor is built from the same recipe, parameterized only by its index
//! and the [`BuildingConfig`]:
//!
//! 1. Fill an R×C grid with corridor.
//! 2. Stamp the outer ring as wall.
//! 3. Number rooms clockwise along the second ring (top row left→right, right
//!    column top→bottom, bottom row right→left, left column bottom→top),
//!    stopping at the per-floor cap. Ring cells past the cap stay corridor.
//! 4. Re-stamp the interior (inside the second ring) as corridor.
//! 5. Stamp elevators, then service points, at their fixed coordinates.
//!
//! Fixtures are stamped last and win over anything beneath them, including
//! rooms on the second ring.

use serde::{Serialize, Serializer};

use crate::cell::{Cell, Coord};
use crate::config::BuildingConfig;

/// One generated floor: a row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    index: u32,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Floor {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `at`, or `None` outside the grid.
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.offset(at).map(|i| self.cells[i])
    }

    /// Iterate the grid row by row.
    pub fn grid_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Iterate every cell with its coordinate in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (self.coord(i), cell))
    }

    /// Room labels in grid-scan order (row-major).
    pub fn list_rooms(&self) -> Vec<String> {
        self.cells
            .iter()
            .filter(|c| c.is_room())
            .map(Cell::to_string)
            .collect()
    }

    /// Room labels in the clockwise order they were numbered.
    pub fn rooms_clockwise(&self) -> Vec<String> {
        second_ring(self.rows, self.cols)
            .into_iter()
            .filter_map(|at| self.get(at))
            .filter(|c| c.is_room())
            .map(|c| c.to_string())
            .collect()
    }

    /// First cell (row-major) whose label equals `label`.
    pub fn find_cell(&self, label: &str) -> Option<Coord> {
        self.cells
            .iter()
            .position(|c| c.matches_label(label))
            .map(|i| self.coord(i))
    }

    /// Every elevator cell, top-to-bottom then left-to-right.
    pub fn elevators(&self) -> Vec<Coord> {
        self.cells()
            .filter(|&(_, cell)| cell == Cell::Elevator)
            .map(|(at, _)| at)
            .collect()
    }

    /// In-bounds 4-neighbours of `at`, in the order down, up, right, left.
    pub fn neighbors(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        const STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        STEPS.into_iter().filter_map(move |(dr, dc)| {
            let row = at.row.checked_add_signed(dr)?;
            let col = at.col.checked_add_signed(dc)?;
            (row < self.rows && col < self.cols).then_some(Coord::new(row, col))
        })
    }

    pub(crate) fn offset(&self, at: Coord) -> Option<usize> {
        (at.row < self.rows && at.col < self.cols).then(|| at.row * self.cols + at.col)
    }

    pub(crate) fn coord(&self, offset: usize) -> Coord {
        Coord::new(offset / self.cols, offset % self.cols)
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    fn set(&mut self, at: Coord, cell: Cell) {
        match self.offset(at) {
            Some(i) => self.cells[i] = cell,
            None => log::warn!("Floor {}: {} is outside the grid, skipped", self.index, at),
        }
    }
}

/// Serializes as an array of rows of cell labels.
impl Serialize for Floor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.grid_rows())
    }
}

/// Second-ring cells in clockwise numbering order.
///
/// Each corner of the ring belongs to the segment that reaches it first, so
/// the right column starts one row down and the bottom row one column in.
pub fn second_ring(rows: usize, cols: usize) -> Vec<Coord> {
    if rows < 4 || cols < 4 {
        return Vec::new();
    }
    let top = (1..=cols - 2).map(|c| Coord::new(1, c));
    let right = (2..=rows - 2).map(|r| Coord::new(r, cols - 2));
    let bottom = (1..=cols - 3).rev().map(|c| Coord::new(rows - 2, c));
    let left = (2..=rows - 3).rev().map(|r| Coord::new(r, 1));
    top.chain(right).chain(bottom).chain(left).collect()
}

/// Build floor `index`. Pure: the same inputs always give the same grid.
pub fn build_floor(config: &BuildingConfig, index: u32) -> Floor {
    let (rows, cols) = (config.rows, config.cols);
    let mut floor = Floor {
        index,
        rows,
        cols,
        cells: vec![Cell::Corridor; rows * cols],
    };

    for r in 0..rows {
        floor.set(Coord::new(r, 0), Cell::Wall);
        floor.set(Coord::new(r, cols.saturating_sub(1)), Cell::Wall);
    }
    for c in 0..cols {
        floor.set(Coord::new(0, c), Cell::Wall);
        floor.set(Coord::new(rows.saturating_sub(1), c), Cell::Wall);
    }

    let ring = second_ring(rows, cols);
    let placed = ring.len().min(config.rooms_per_floor as usize);
    for (n, &at) in ring.iter().take(placed).enumerate() {
        let number = n as u32 + 1;
        floor.set(at, Cell::Room { floor: index, number });
    }

    for r in 2..rows.saturating_sub(2) {
        for c in 2..cols.saturating_sub(2) {
            floor.set(Coord::new(r, c), Cell::Corridor);
        }
    }

    for &at in &config.elevators {
        floor.set(at, Cell::Elevator);
    }
    for &at in &config.service_points {
        floor.set(at, Cell::Service);
    }

    log::debug!(
        "Generated floor {}: {}x{} grid, {} rooms numbered",
        index,
        rows,
        cols,
        placed
    );
    floor
}
