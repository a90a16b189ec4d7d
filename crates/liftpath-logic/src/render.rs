//! Plain-text floor plans.
//!
//! ```text
//! ##########
//! #DRRRRRRR#
//! #*****@.R#
//! ```
//!
//! `#` wall, `.` corridor, `E` elevator, `S` service, `R` room. With a route
//! overlaid: `@` start elevator, `*` route cell, `D` destination.

use crate::cell::Cell;
use crate::layout::Floor;
use crate::pathfinding::Route;

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Wall => '#',
        Cell::Corridor => '.',
        Cell::Elevator => 'E',
        Cell::Service => 'S',
        Cell::Room { .. } => 'R',
    }
}

/// Render `floor` one line per row, optionally with `route` drawn over it.
pub fn render_floor(floor: &Floor, route: Option<&Route>) -> String {
    let mut canvas: Vec<Vec<char>> = floor
        .grid_rows()
        .map(|row| row.iter().copied().map(glyph).collect())
        .collect();

    if let Some(route) = route {
        let path = route.path();
        for (i, at) in path.iter().enumerate() {
            let mark = if i == 0 {
                '@'
            } else if i + 1 == path.len() {
                'D'
            } else {
                '*'
            };
            if let Some(slot) = canvas.get_mut(at.row).and_then(|r| r.get_mut(at.col)) {
                *slot = mark;
            }
        }
    }

    let mut out = String::with_capacity(floor.rows() * (floor.cols() + 1));
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildingConfig;
    use crate::layout::build_floor;
    use crate::pathfinding::resolve_route;

    #[test]
    fn test_plain_plan() {
        let floor = build_floor(&BuildingConfig::default(), 1);
        let plan = render_floor(&floor, None);
        let lines: Vec<&str> = plan.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "##########");
        assert_eq!(lines[1], "#RRRRRRRR#");
        assert_eq!(lines[2], "#.....E.R#");
        assert_eq!(lines[8], "#RSRRRRRR#");
    }

    #[test]
    fn test_route_overlay() {
        let floor = build_floor(&BuildingConfig::default(), 1);
        let route = resolve_route(&floor, "R101").unwrap();
        let plan = render_floor(&floor, Some(&route));
        let lines: Vec<&str> = plan.lines().collect();
        assert_eq!(lines[1], "#DRRRRRRR#");
        assert_eq!(lines[2], "#*****@.R#");
    }
}
