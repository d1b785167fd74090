//! The maze graph: a dense lattice of cells with open-edge masks.
//!
//! [`MazeGrid`] owns every [`Cell`]. Adjacency is stored as a 4-bit mask per
//! cell, one bit per [`Direction`], kept symmetric by construction: the only
//! mutation site is [`MazeGrid::open_edge`], which always sets both sides.
//! Search state (visited flag, parent back-pointer) lives in the cells too
//! and is reset in bulk by [`MazeGrid::reset_search_state`]; back-pointers
//! are coordinates into the same grid, never owning references.

use rand::Rng;
use rand::RngExt;

use crate::geom::{Direction, Point};
use crate::terrain::Terrain;

/// One lattice position: terrain, open edges, and per-solve scratch state.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub terrain: Terrain,
    /// Bitmask of open [`Direction`]s.
    edges: u8,
    visited: bool,
    parent: Option<Point>,
}

/// A `cols × rows` maze graph with a fixed start at (0, 0) and goal at
/// (cols − 1, rows − 1).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGrid {
    cols: i32,
    rows: i32,
    cells: Vec<Cell>,
}

impl MazeGrid {
    /// Allocate a grid of default (zero-cost) terrain with no open edges.
    ///
    /// Dimensions below 2×2 are a caller error; generation parameters are
    /// validated upstream before this runs.
    pub fn new(cols: i32, rows: i32) -> Self {
        debug_assert!(cols >= 2 && rows >= 2, "grid dimensions must be >= 2");
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); (cols * rows) as usize],
        }
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The designated start cell, always (0, 0).
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The designated goal cell, always (cols − 1, rows − 1).
    #[inline]
    pub fn goal(&self) -> Point {
        Point::new(self.cols - 1, self.rows - 1)
    }

    /// Whether `p` lies inside the lattice.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.cols && p.y >= 0 && p.y < self.rows
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.cols + p.x) as usize)
    }

    // -----------------------------------------------------------------------
    // Terrain
    // -----------------------------------------------------------------------

    /// Terrain at `p`, or `None` if out of bounds.
    pub fn terrain(&self, p: Point) -> Option<Terrain> {
        self.idx(p).map(|i| self.cells[i].terrain)
    }

    /// Set the terrain at `p`. Does nothing if out of bounds.
    pub fn set_terrain(&mut self, p: Point, terrain: Terrain) {
        if let Some(i) = self.idx(p) {
            self.cells[i].terrain = terrain;
        }
    }

    /// Randomly scatter obstacle terrain over the grid.
    ///
    /// Each cell independently becomes a random obstacle category with the
    /// given probability (clamped to [0, 1]) and `Terrace` otherwise. The
    /// start and goal cells are forced back to `Terrace` afterwards,
    /// overriding whatever the roll assigned them.
    pub fn assign_terrain(&mut self, probability: f64, rng: &mut impl Rng) {
        let probability = probability.clamp(0.0, 1.0);
        for cell in self.cells.iter_mut() {
            let r: f64 = rng.random();
            cell.terrain = if r < probability {
                Terrain::random_obstacle(rng)
            } else {
                Terrain::Terrace
            };
        }
        let start = self.start();
        let goal = self.goal();
        self.set_terrain(start, Terrain::Terrace);
        self.set_terrain(goal, Terrain::Terrace);
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// Open the edge between two orthogonally adjacent cells.
    ///
    /// Sets both half-edges, so adjacency stays symmetric. Returns `true` if
    /// the edge was newly opened, `false` if it already existed or the pair
    /// is not an in-bounds adjacent pair.
    pub fn open_edge(&mut self, a: Point, b: Point) -> bool {
        let Some(dir) = Direction::between(a, b) else {
            return false;
        };
        let (Some(ia), Some(ib)) = (self.idx(a), self.idx(b)) else {
            return false;
        };
        if self.cells[ia].edges & dir.bit() != 0 {
            return false;
        }
        self.cells[ia].edges |= dir.bit();
        self.cells[ib].edges |= dir.opposite().bit();
        true
    }

    /// Whether an open edge connects `a` and `b`.
    pub fn has_edge(&self, a: Point, b: Point) -> bool {
        match (Direction::between(a, b), self.idx(a), self.idx(b)) {
            (Some(dir), Some(ia), Some(_)) => self.cells[ia].edges & dir.bit() != 0,
            _ => false,
        }
    }

    /// Append the open neighbors of `p` into `buf` (up to 4).
    ///
    /// The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(i) = self.idx(p) else {
            return;
        };
        let edges = self.cells[i].edges;
        for dir in Direction::ALL {
            if edges & dir.bit() != 0 {
                buf.push(p + dir.delta());
            }
        }
    }

    /// Total number of open edges (each counted once).
    pub fn edge_count(&self) -> usize {
        let half_edges: u32 = self.cells.iter().map(|c| c.edges.count_ones()).sum();
        (half_edges / 2) as usize
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Clear the visited flag and parent back-pointer on every cell.
    pub fn reset_search_state(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
            cell.parent = None;
        }
    }

    /// Whether `p` has been visited in the current search pass.
    pub fn visited(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.cells[i].visited)
    }

    /// Mark `p` visited. Does nothing if out of bounds.
    pub fn mark_visited(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.cells[i].visited = true;
        }
    }

    /// The predecessor of `p` on the best path found so far, if any.
    ///
    /// Only meaningful during or after a search pass.
    pub fn parent(&self, p: Point) -> Option<Point> {
        self.idx(p).and_then(|i| self.cells[i].parent)
    }

    /// Record `prev` as the predecessor of `p`. Does nothing if out of bounds.
    pub fn set_parent(&mut self, p: Point, prev: Point) {
        if let Some(i) = self.idx(p) {
            self.cells[i].parent = Some(prev);
        }
    }
}
