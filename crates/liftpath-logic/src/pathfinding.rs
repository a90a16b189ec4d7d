//! Lift-to-room routing over a floor grid.
//!
//! Each elevator on the floor is tried as a BFS source; the shortest route
//! wins and ties go to the elevator found first in row-major order. Rooms are
//! never passed through: the destination is the only room a route may enter.

use std::collections::VecDeque;

use serde::Serialize;

use crate::cell::Coord;
use crate::error::{Result, RouteError};
use crate::layout::Floor;

/// A resolved route: coordinates from an elevator to the destination, both
/// ends included, with a parallel label per step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    path: Vec<Coord>,
    labels: Vec<String>,
    steps: usize,
}

impl Route {
    fn render(floor: &Floor, path: Vec<Coord>) -> Self {
        let labels = path
            .iter()
            .map(|&at| floor.get(at).map(|c| c.route_label()).unwrap_or_default())
            .collect();
        let steps = path.len().saturating_sub(1);
        Self {
            path,
            labels,
            steps,
        }
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Moves taken, one fewer than the cells visited.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The elevator the route starts from.
    pub fn start(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    pub fn destination(&self) -> Option<Coord> {
        self.path.last().copied()
    }
}

/// Breadth-first search from `start` to `goal`.
///
/// A neighbour is entered if it is walkable or is the goal itself. Returns
/// `None` when the goal is unreachable from this start.
pub fn bfs(floor: &Floor, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    let start_idx = floor.offset(start)?;
    let goal_idx = floor.offset(goal)?;

    let mut visited = vec![false; floor.len()];
    let mut came_from: Vec<Option<usize>> = vec![None; floor.len()];
    let mut queue = VecDeque::new();
    visited[start_idx] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        let Some(current_idx) = floor.offset(current) else {
            continue;
        };
        for next in floor.neighbors(current) {
            let Some(next_idx) = floor.offset(next) else {
                continue;
            };
            if visited[next_idx] {
                continue;
            }
            let enterable = next == goal || floor.get(next).is_some_and(|c| c.is_walkable());
            if enterable {
                visited[next_idx] = true;
                came_from[next_idx] = Some(current_idx);
                queue.push_back(next);
            }
        }
    }

    if !visited[goal_idx] {
        return None;
    }

    let mut path = vec![goal];
    let mut node = goal_idx;
    while let Some(prev) = came_from[node] {
        path.push(floor.coord(prev));
        node = prev;
    }
    path.reverse();
    Some(path)
}

/// Resolve the shortest route on `floor` from any elevator to `destination`.
pub fn resolve_route(floor: &Floor, destination: &str) -> Result<Route> {
    let elevators = floor.elevators();

    let goal = floor
        .find_cell(destination)
        .ok_or_else(|| RouteError::InvalidDestination {
            floor: floor.index(),
            label: destination.to_string(),
        })?;

    let mut best: Option<Vec<Coord>> = None;
    for &lift in &elevators {
        if let Some(path) = bfs(floor, lift, goal) {
            if best.as_ref().map_or(true, |b| path.len() < b.len()) {
                best = Some(path);
            }
        }
    }

    let Some(path) = best else {
        log::debug!(
            "Floor {}: {} unreachable from {} elevators",
            floor.index(),
            destination,
            elevators.len()
        );
        return Err(RouteError::NoPathFound {
            floor: floor.index(),
            label: destination.to_string(),
        });
    };

    let route = Route::render(floor, path);
    log::debug!(
        "Floor {}: route to {} from elevator {:?}, {} steps",
        floor.index(),
        destination,
        route.start(),
        route.steps()
    );
    Ok(route)
}
