//! Helpers shared by the generation tests.

use warren_core::{MazeGrid, Point};

/// Number of cells reachable from the start via open edges (flood fill).
pub(crate) fn reachable_count(grid: &MazeGrid) -> usize {
    let mut seen = vec![false; grid.cell_count()];
    let mut stack = vec![grid.start()];
    let mut buf: Vec<Point> = Vec::with_capacity(4);
    let mut count = 0;

    seen[0] = true;
    while let Some(p) = stack.pop() {
        count += 1;
        buf.clear();
        grid.neighbors(p, &mut buf);
        for &n in buf.iter() {
            let i = (n.y * grid.cols() + n.x) as usize;
            if !seen[i] {
                seen[i] = true;
                stack.push(n);
            }
        }
    }
    count
}
