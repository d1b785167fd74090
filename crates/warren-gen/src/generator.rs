//! The generation driver: terrain, carving, densification.

use log::debug;
use rand::Rng;
use rand::RngExt;
use warren_core::{Direction, MazeGrid, Point};

use crate::params::{Algorithm, GenParams, ParamsError};
use crate::{kruskal, prim};

/// Attempts per densification pick before the iteration is skipped.
const DENSIFY_ATTEMPTS: usize = 10;

/// Densification factor at wall density 0 (many extra loops).
const MAX_EXTRA_FACTOR: f64 = 0.4;

/// Maze generator driven by a caller-supplied random number source.
pub struct MazeGen<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using `rng` for every random decision.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Build one maze from `params`.
    ///
    /// Validation happens before anything is allocated; after it passes the
    /// generation itself cannot fail. The returned grid is connected from
    /// the start cell to every other cell, carries freshly assigned terrain
    /// with free start/goal cells, and has clean search state.
    pub fn generate(&mut self, params: &GenParams) -> Result<MazeGrid, ParamsError> {
        params.validate()?;

        let mut grid = MazeGrid::new(params.cols, params.rows);
        grid.assign_terrain(params.terrain_probability, &mut self.rng);

        match params.algorithm {
            Algorithm::Prim => prim::carve(&mut grid, &mut self.rng),
            Algorithm::Kruskal => kruskal::carve(&mut grid, &mut self.rng),
        }

        let extra = self.add_extra_paths(&mut grid, params.wall_density);
        grid.reset_search_state();

        debug!(
            "generated {}x{} maze via {}: {} edges ({} beyond the spanning tree)",
            params.cols,
            params.rows,
            params.algorithm.label(),
            grid.edge_count(),
            extra,
        );
        Ok(grid)
    }

    /// Punch extra loops into a freshly carved spanning tree.
    ///
    /// Runs `floor(cells · (1 − wall_density) · 0.4)` iterations. Each picks
    /// a uniformly random cell and tries up to [`DENSIFY_ATTEMPTS`] random
    /// directions, opening the first edge that is in bounds and not already
    /// open; an iteration that exhausts its attempts is skipped. Best effort
    /// only — the return value is how many edges actually opened.
    fn add_extra_paths(&mut self, grid: &mut MazeGrid, wall_density: f64) -> usize {
        let factor = (1.0 - wall_density) * MAX_EXTRA_FACTOR;
        if factor <= 0.0 {
            return 0;
        }
        let iterations = (grid.cell_count() as f64 * factor) as usize;
        let mut opened = 0;

        for _ in 0..iterations {
            let p = Point::new(
                self.rng.random_range(0..grid.cols()),
                self.rng.random_range(0..grid.rows()),
            );
            for _ in 0..DENSIFY_ATTEMPTS {
                let dir = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
                if grid.open_edge(p, p + dir.delta()) {
                    opened += 1;
                    break;
                }
            }
        }
        opened
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::reachable_count;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use warren_core::Terrain;

    fn gen_with_seed(seed: u64, params: &GenParams) -> MazeGrid {
        MazeGen::with_rng(StdRng::seed_from_u64(seed))
            .generate(params)
            .unwrap()
    }

    #[test]
    fn invalid_params_fail_before_generation() {
        let mut mazegen = MazeGen::with_rng(StdRng::seed_from_u64(0));
        let mut params = GenParams::default();
        params.rows = 1;
        assert!(mazegen.generate(&params).is_err());
        params = GenParams::default();
        params.wall_density = 1.5;
        assert!(matches!(
            mazegen.generate(&params),
            Err(ParamsError::UnitInterval { .. })
        ));
    }

    #[test]
    fn both_algorithms_yield_connected_grids() {
        for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
            for seed in [1, 2, 3] {
                let params = GenParams {
                    cols: 12,
                    rows: 9,
                    terrain_probability: 0.4,
                    wall_density: 0.5,
                    algorithm,
                };
                let grid = gen_with_seed(seed, &params);
                assert_eq!(
                    reachable_count(&grid),
                    grid.cell_count(),
                    "{} seed {seed} left cells unreachable",
                    algorithm.label(),
                );
            }
        }
    }

    #[test]
    fn full_wall_density_keeps_the_perfect_maze() {
        for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
            let params = GenParams {
                cols: 10,
                rows: 10,
                terrain_probability: 0.0,
                wall_density: 1.0,
                algorithm,
            };
            let grid = gen_with_seed(21, &params);
            assert_eq!(grid.edge_count(), grid.cell_count() - 1);
        }
    }

    #[test]
    fn zero_wall_density_adds_loops() {
        let params = GenParams {
            cols: 10,
            rows: 10,
            terrain_probability: 0.0,
            wall_density: 0.0,
            ..GenParams::default()
        };
        let grid = gen_with_seed(22, &params);
        assert!(grid.edge_count() > grid.cell_count() - 1);
        // Extra edges never disconnect anything.
        assert_eq!(reachable_count(&grid), grid.cell_count());
    }

    #[test]
    fn start_and_goal_stay_free_at_max_obstacle_probability() {
        let params = GenParams {
            terrain_probability: 1.0,
            ..GenParams::default()
        };
        let grid = gen_with_seed(23, &params);
        assert_eq!(grid.terrain(grid.start()), Some(Terrain::Terrace));
        assert_eq!(grid.terrain(grid.goal()), Some(Terrain::Terrace));
    }

    #[test]
    fn same_seed_reproduces_the_same_maze() {
        let params = GenParams {
            cols: 9,
            rows: 7,
            terrain_probability: 0.5,
            wall_density: 0.3,
            algorithm: Algorithm::Kruskal,
        };
        let a = gen_with_seed(99, &params);
        let b = gen_with_seed(99, &params);
        for y in 0..params.rows {
            for x in 0..params.cols {
                let p = Point::new(x, y);
                assert_eq!(a.terrain(p), b.terrain(p));
                assert_eq!(
                    a.has_edge(p, Point::new(x + 1, y)),
                    b.has_edge(p, Point::new(x + 1, y))
                );
                assert_eq!(
                    a.has_edge(p, Point::new(x, y + 1)),
                    b.has_edge(p, Point::new(x, y + 1))
                );
            }
        }
    }

    #[test]
    fn generated_grid_has_clean_search_state() {
        let grid = gen_with_seed(5, &GenParams::default());
        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                let p = Point::new(x, y);
                assert!(!grid.visited(p));
                assert_eq!(grid.parent(p), None);
            }
        }
    }
}
