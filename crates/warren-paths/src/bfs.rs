//! Breadth-first search: FIFO frontier, fewest steps.

use std::collections::VecDeque;

use warren_core::{MazeGrid, Point};

use crate::Solver;
use crate::solver::Outcome;

impl Solver {
    /// Unweighted breadth-first search from start to goal.
    ///
    /// Every open edge counts as one step; terrain cost plays no part in the
    /// search. Each cell is enqueued and marked visited exactly once, at
    /// first discovery, which is what makes the result shortest-in-steps.
    /// The loop ends as soon as the goal is dequeued.
    pub(crate) fn bfs(
        &mut self,
        grid: &mut MazeGrid,
        observer: &mut impl FnMut(Point),
    ) -> Outcome {
        let goal = grid.goal();
        let mut queue: VecDeque<Point> = VecDeque::new();

        grid.mark_visited(grid.start());
        queue.push_back(grid.start());

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = 0;
        let mut found = false;

        while let Some(p) = queue.pop_front() {
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
                    queue.push_back(n);
                }
            }
        }

        self.nbuf = nbuf;
        Outcome { found, visited }
    }
}
