//! Randomized Prim spanning-tree carving.

use rand::Rng;
use rand::RngExt;
use warren_core::{MazeGrid, Point};

#[inline]
fn index(grid: &MazeGrid, p: Point) -> usize {
    (p.y * grid.cols() + p.x) as usize
}

/// Carve a uniform spanning structure by growing from the start cell.
///
/// A frontier holds candidate edges from reached cells to unreached
/// neighbors. Each round removes a uniformly random candidate; if its far
/// endpoint is still unreached the edge is opened and the endpoint's own
/// candidates join the frontier. Every cell ends up connected to the start
/// by exactly one path.
pub(crate) fn carve(grid: &mut MazeGrid, rng: &mut impl Rng) {
    let mut reached = vec![false; grid.cell_count()];
    let mut frontier: Vec<(Point, Point)> = Vec::new();

    let start = grid.start();
    reached[index(grid, start)] = true;
    push_candidates(grid, start, &reached, &mut frontier);

    while !frontier.is_empty() {
        let pick = rng.random_range(0..frontier.len());
        let (from, to) = frontier.swap_remove(pick);
        if reached[index(grid, to)] {
            continue;
        }
        grid.open_edge(from, to);
        reached[index(grid, to)] = true;
        push_candidates(grid, to, &reached, &mut frontier);
    }
}

fn push_candidates(
    grid: &MazeGrid,
    from: Point,
    reached: &[bool],
    frontier: &mut Vec<(Point, Point)>,
) {
    for to in from.neighbors_4() {
        if grid.contains(to) && !reached[index(grid, to)] {
            frontier.push((from, to));
        }
    }
}
