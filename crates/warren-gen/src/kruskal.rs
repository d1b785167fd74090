//! Randomized Kruskal spanning-tree carving via disjoint-set union.

use rand::Rng;
use rand::seq::SliceRandom;
use warren_core::{MazeGrid, Point};

#[inline]
fn index(grid: &MazeGrid, p: Point) -> usize {
    (p.y * grid.cols() + p.x) as usize
}

/// Disjoint-set union with path compression; union attaches one root under
/// the other.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Merge the sets of `a` and `b`. Returns `false` if already merged.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Carve a uniform spanning structure by merging random components.
///
/// Every lattice edge is enumerated once (right and down neighbors only),
/// shuffled, and opened whenever its endpoints still belong to different
/// components. Edges inside a component are skipped, so no cycle is created
/// at this stage.
pub(crate) fn carve(grid: &mut MazeGrid, rng: &mut impl Rng) {
    let cols = grid.cols();
    let rows = grid.rows();

    let mut edges: Vec<(Point, Point)> =
        Vec::with_capacity((cols * (rows - 1) + rows * (cols - 1)) as usize);
    for y in 0..rows {
        for x in 0..cols {
            let p = Point::new(x, y);
            if x + 1 < cols {
                edges.push((p, Point::new(x + 1, y)));
            }
            if y + 1 < rows {
                edges.push((p, Point::new(x, y + 1)));
            }
        }
    }
    edges.shuffle(rng);

    let mut sets = DisjointSet::new(grid.cell_count());
    for (a, b) in edges {
        if sets.union(index(grid, a), index(grid, b)) {
            grid.open_edge(a, b);
        }
    }
}
