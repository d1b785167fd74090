//! The common solve surface shared by all four strategies.

use std::time::{Duration, Instant};

use log::debug;
use warren_core::{MazeGrid, Point, Terrain};

/// Sentinel cost meaning "no path known". Larger than any achievable path
/// cost, so cost comparisons stay total-ordered.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Strategy / SolveResult
// ---------------------------------------------------------------------------

/// The four interchangeable search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Unweighted breadth-first search: fewest steps, terrain ignored.
    Bfs,
    /// Unweighted depth-first search: connectivity only, no optimality.
    Dfs,
    /// Weighted shortest path by accumulated terrain cost.
    Dijkstra,
    /// Dijkstra guided by the Manhattan heuristic.
    ///
    /// The heuristic counts steps, so it can overestimate across zero-cost
    /// terrain; on such grids the result may cost more than Dijkstra's.
    AStar,
}

impl Strategy {
    /// Every strategy, in display order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Dijkstra,
        Strategy::AStar,
    ];

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Dijkstra => "Dijkstra",
            Strategy::AStar => "A*",
        }
    }
}

/// Outcome of one solve pass.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Whether the goal was reached.
    pub found: bool,
    /// Cells from start to goal inclusive; empty when not found.
    pub path: Vec<Point>,
    /// Terrain cost of the path ([`UNREACHABLE`] when not found).
    pub total_cost: i32,
    /// How many cells the search visited (dequeued) before terminating.
    pub visited_count: usize,
    /// Wall-clock duration of the pass.
    pub elapsed: Duration,
}

// ---------------------------------------------------------------------------
// Internal search plumbing
// ---------------------------------------------------------------------------

/// What a strategy loop reports back to [`Solver::solve_observed`].
pub(crate) struct Outcome {
    pub(crate) found: bool,
    pub(crate) visited: usize,
}

/// Flat row-major index of an in-bounds point.
#[inline]
pub(crate) fn index(grid: &MazeGrid, p: Point) -> usize {
    (p.y * grid.cols() + p.x) as usize
}

/// Heap entry for the priority-ordered strategies, ordered by `priority`
/// with ties preferring the smaller heuristic estimate.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    /// Ordering key: accumulated cost, plus the heuristic for A*.
    pub(crate) priority: i32,
    /// Heuristic part of the key (0 for Dijkstra).
    pub(crate) h: i32,
    /// Accumulated cost from the start, used for stale-entry discard.
    pub(crate) g: i32,
    pub(crate) pos: Point,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first;
        // on equal priority the entry closer to the goal wins.
        other
            .priority
            .cmp(&self.priority)
            .then(other.h.cmp(&self.h))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Pathfinding engine over a [`MazeGrid`].
///
/// Owns the scratch buffers shared by the strategies (neighbor buffer, flat
/// best-cost table) so repeated solves reuse their allocations. One `Solver`
/// handles one solve at a time; callers wanting progressive output pass an
/// observer to [`solve_observed`](Self::solve_observed) or go through
/// [`solve_in_background`](crate::solve_in_background).
pub struct Solver {
    pub(crate) nbuf: Vec<Point>,
    pub(crate) dist: Vec<i32>,
}

impl Solver {
    /// Create a solver with empty scratch buffers.
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(4),
            dist: Vec::new(),
        }
    }

    /// Search for a route from the grid's start to its goal.
    ///
    /// The grid's search state is reset on entry, so stale visited flags or
    /// back-pointers from an earlier pass cannot leak in. An unreachable
    /// goal is a normal outcome: `found` is `false` and `total_cost` is
    /// [`UNREACHABLE`].
    pub fn solve(&mut self, grid: &mut MazeGrid, strategy: Strategy) -> SolveResult {
        self.solve_observed(grid, strategy, |_| {})
    }

    /// Like [`solve`](Self::solve), but also reports every visited cell to
    /// `observer`, in strict visitation order, one call per dequeue.
    pub fn solve_observed(
        &mut self,
        grid: &mut MazeGrid,
        strategy: Strategy,
        mut observer: impl FnMut(Point),
    ) -> SolveResult {
        let started = Instant::now();

        grid.reset_search_state();
        self.dist.clear();
        self.dist.resize(grid.cell_count(), UNREACHABLE);

        let outcome = match strategy {
            Strategy::Bfs => self.bfs(grid, &mut observer),
            Strategy::Dfs => self.dfs(grid, &mut observer),
            Strategy::Dijkstra => self.dijkstra(grid, &mut observer),
            Strategy::AStar => self.astar(grid, &mut observer),
        };

        let path = if outcome.found {
            backtrace(grid)
        } else {
            Vec::new()
        };
        let total_cost = if outcome.found {
            path_cost(grid, &path)
        } else {
            UNREACHABLE
        };

        let result = SolveResult {
            found: outcome.found,
            path,
            total_cost,
            visited_count: outcome.visited,
            elapsed: started.elapsed(),
        };
        debug!(
            "{} solve: found={} cost={} visited={} path_len={}",
            strategy.label(),
            result.found,
            result.total_cost,
            result.visited_count,
            result.path.len(),
        );
        result
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk back-pointers from the goal to the start and reverse.
fn backtrace(grid: &MazeGrid) -> Vec<Point> {
    let mut path = Vec::new();
    let mut cur = Some(grid.goal());
    while let Some(p) = cur {
        path.push(p);
        cur = grid.parent(p);
    }
    path.reverse();
    path
}

/// Terrain cost of a path: the sum over every entered cell (start excluded,
/// since cost is paid on entering a cell).
fn path_cost(grid: &MazeGrid, path: &[Point]) -> i32 {
    path.iter()
        .skip(1)
        .map(|&p| grid.terrain(p).map_or(0, Terrain::cost))
        .sum()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_round_trip() {
        for s in Strategy::ALL {
            let json = serde_json::to_string(&s).unwrap();
            let back: Strategy = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }

    #[test]
    fn solve_result_round_trip() {
        let result = SolveResult {
            found: true,
            path: vec![Point::ZERO, Point::new(1, 0)],
            total_cost: 3,
            visited_count: 2,
            elapsed: Duration::from_millis(5),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SolveResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
