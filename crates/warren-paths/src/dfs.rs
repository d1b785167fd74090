//! Depth-first search: LIFO frontier, connectivity only.

use warren_core::{MazeGrid, Point};

use crate::Solver;
use crate::solver::Outcome;

impl Solver {
    /// Unweighted depth-first search from start to goal.
    ///
    /// Same single-visit discipline as BFS but with a stack, so the search
    /// dives down one branch before backing out. Finds *a* route whenever
    /// one exists; makes no promise about its length or cost.
    pub(crate) fn dfs(
        &mut self,
        grid: &mut MazeGrid,
        observer: &mut impl FnMut(Point),
    ) -> Outcome {
        let goal = grid.goal();
        let mut stack: Vec<Point> = Vec::new();

        grid.mark_visited(grid.start());
        stack.push(grid.start());

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = 0;
        let mut found = false;

        while let Some(p) = stack.pop() {
            visited += 1;
            observer(p);
            if p == goal {
                found = true;
                break;
            }

            nbuf.clear();
            grid.neighbors(p, &mut nbuf);
            for &n in nbuf.iter() {
                if !grid.visited(n) {
                    grid.mark_visited(n);
                    grid.set_parent(n, p);
                    stack.push(n);
                }
            }
        }

        self.nbuf = nbuf;
        Outcome { found, visited }
    }
}
