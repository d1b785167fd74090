//! A*: Dijkstra guided by the Manhattan heuristic.

use std::collections::BinaryHeap;

use warren_core::{MazeGrid, Point, Terrain};

use crate::Solver;
use crate::distance::manhattan;
use crate::solver::{HeapEntry, Outcome, index};

impl Solver {
    /// Heuristic-guided shortest-path search from start to goal.
    ///
    /// Identical to [`dijkstra`](Self::dijkstra) except the frontier is
    /// ordered by `g + manhattan(cell, goal)`, with ties on the combined key
    /// preferring the entry closer to the goal. Stale-entry discard still
    /// compares accumulated cost against the best-known table, never the
    /// combined key.
    ///
    /// The heuristic counts one unit per remaining step, but zero-cost
    /// terrain permits cheaper steps, so it can overestimate; on grids with
    /// zero-cost interior cells the returned route may cost more than
    /// Dijkstra's.
    pub(crate) fn astar(
        &mut self,
        grid: &mut MazeGrid,
        observer: &mut impl FnMut(Point),
    ) -> Outcome {
        let goal = grid.goal();
        let start = grid.start();

        let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
        self.dist[index(grid, start)] = 0;
        let h0 = manhattan(start, goal);
        heap.push(HeapEntry {
            priority: h0,
            h: h0,
            g: 0,
            pos: start,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = 0;
        let mut found = false;

        while let Some(entry) = heap.pop() {
            if entry.g > self.dist[index(grid, entry.pos)] {
                continue;
            }

            grid.mark_visited(entry.pos);
            visited += 1;
            observer(entry.pos);
            if entry.pos == goal {
                found = true;
                break;
            }

            nbuf.clear();
            grid.neighbors(entry.pos, &mut nbuf);
            for &n in nbuf.iter() {
                let tentative = entry.g + grid.terrain(n).map_or(0, Terrain::cost);
                let ni = index(grid, n);
                if tentative < self.dist[ni] {
                    self.dist[ni] = tentative;
                    grid.set_parent(n, entry.pos);
                    let h = manhattan(n, goal);
                    heap.push(HeapEntry {
                        priority: tentative + h,
                        h,
                        g: tentative,
                        pos: n,
                    });
                }
            }
        }

        self.nbuf = nbuf;
        Outcome { found, visited }
    }
}
