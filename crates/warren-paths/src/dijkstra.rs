//! Dijkstra: priority frontier keyed by accumulated terrain cost.

use std::collections::BinaryHeap;

use warren_core::{MazeGrid, Point, Terrain};

use crate::Solver;
use crate::solver::{HeapEntry, Outcome, index};

impl Solver {
    /// Weighted shortest-path search from start to goal.
    ///
    /// The cost of crossing an edge is the terrain cost of the cell being
    /// entered. A cell may sit in the heap several times with different
    /// costs; entries worse than the best known cost for their cell are
    /// discarded when popped. Relaxation updates the best-known table, the
    /// back-pointer, and pushes a fresh entry only on strict improvement.
    pub(crate) fn dijkstra(
        &mut self,
        grid: &mut MazeGrid,
        observer: &mut impl FnMut(Point),
    ) -> Outcome {
        let goal = grid.goal();
        let start = grid.start();

        let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
        self.dist[index(grid, start)] = 0;
        heap.push(HeapEntry {
            priority: 0,
            h: 0,
            g: 0,
            pos: start,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = 0;
        let mut found = false;

        while let Some(entry) = heap.pop() {
            // Skip stale entries superseded by a cheaper relaxation.
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
                    heap.push(HeapEntry {
                        priority: tentative,
                        h: 0,
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
