//! Terminal front end for the warren maze toolkit.
//!
//! Generates one maze, solves it with the requested strategies on the
//! background worker, renders the maze as ASCII with the last route
//! overlaid, and prints a stats line per strategy.

use std::collections::HashSet;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use warren_core::{MazeGrid, Point};
use warren_gen::{Algorithm, GenParams, MazeGen};
use warren_paths::{SolveEvent, SolveResult, Strategy, solve_in_background};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AlgoArg {
    Prim,
    Kruskal,
}

impl From<AlgoArg> for Algorithm {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Prim => Algorithm::Prim,
            AlgoArg::Kruskal => Algorithm::Kruskal,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StrategyArg {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Bfs => vec![Strategy::Bfs],
            StrategyArg::Dfs => vec![Strategy::Dfs],
            StrategyArg::Dijkstra => vec![Strategy::Dijkstra],
            StrategyArg::Astar => vec![Strategy::AStar],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

/// Generate a weighted grid maze and race search strategies through it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 30)]
    cols: i32,

    #[arg(long, default_value_t = 20)]
    rows: i32,

    /// Per-cell chance of obstacle terrain, in [0, 1].
    #[arg(long, default_value_t = 0.3)]
    terrain_prob: f64,

    /// 1.0 = perfect maze, lower values open extra loops.
    #[arg(long, default_value_t = 1.0)]
    wall_density: f64,

    #[arg(long, value_enum, default_value = "prim")]
    algo: AlgoArg,

    #[arg(long, value_enum, default_value = "all")]
    strategy: StrategyArg,

    /// RNG seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let params = GenParams {
        cols: cli.cols,
        rows: cli.rows,
        terrain_probability: cli.terrain_prob,
        wall_density: cli.wall_density,
        algorithm: cli.algo.into(),
    };
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut grid = MazeGen::with_rng(StdRng::seed_from_u64(seed)).generate(&params)?;

    println!(
        "{}x{} maze, {} generation, seed {seed}",
        params.cols,
        params.rows,
        params.algorithm.label()
    );

    let mut last: Option<(Strategy, SolveResult)> = None;
    for strategy in cli.strategy.strategies() {
        let (rx, handle) = solve_in_background(grid, strategy);
        let mut result = None;
        for event in rx {
            if let SolveEvent::Done(r) = event {
                result = Some(r);
            }
        }
        grid = handle.join().map_err(|_| "solve worker panicked")?;
        let result = result.ok_or("solve worker ended without a result")?;

        println!(
            "{:<8} found={} path={:<4} visited={:<5} cost={:<6} time={:.3}ms",
            strategy.label(),
            result.found,
            result.path.len(),
            result.visited_count,
            if result.found {
                result.total_cost.to_string()
            } else {
                "-".to_string()
            },
            result.elapsed.as_secs_f64() * 1e3,
        );
        last = Some((strategy, result));
    }

    if let Some((strategy, result)) = last {
        println!();
        println!("{}", render(&grid, &result.path));
        if result.found {
            println!("route shown: {}", strategy.label());
        }
    }
    Ok(())
}

/// Render the maze as ASCII: walls from the edge masks, terrain runes,
/// `*` for the route, `S`/`G` markers.
fn render(grid: &MazeGrid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::new();

    for y in 0..grid.rows() {
        // Wall row above this cell row.
        for x in 0..grid.cols() {
            let p = Point::new(x, y);
            let open_up = grid.has_edge(p, Point::new(x, y - 1));
            out.push('+');
            out.push_str(if open_up { "   " } else { "---" });
        }
        out.push_str("+\n");

        // Cell row with vertical walls.
        for x in 0..grid.cols() {
            let p = Point::new(x, y);
            let open_left = grid.has_edge(p, Point::new(x - 1, y));
            out.push(if open_left { ' ' } else { '|' });
            let glyph = if p == grid.start() {
                'S'
            } else if p == grid.goal() {
                'G'
            } else if on_path.contains(&p) {
                '*'
            } else {
                grid.terrain(p).map_or(' ', |t| t.rune())
            };
            out.push(' ');
            out.push(glyph);
            out.push(' ');
        }
        out.push_str("|\n");
    }

    // Bottom border.
    for _ in 0..grid.cols() {
        out.push_str("+---");
    }
    out.push('+');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_draws_walls_and_markers() {
        let mut grid = MazeGrid::new(2, 2);
        grid.open_edge(Point::new(0, 0), Point::new(1, 0));
        grid.open_edge(Point::new(1, 0), Point::new(1, 1));

        let text = render(&grid, &[Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        // Top border is fully closed.
        assert_eq!(lines[0], "+---+---+");
        // Start marker, open edge between the top cells, route marker.
        assert_eq!(lines[1], "| S   * |");
        // Closed wall between the bottom cells, goal marker reached from above.
        assert_eq!(lines[2], "+---+   +");
        assert_eq!(lines[3], "| . | G |");
        assert_eq!(lines[4], "+---+---+");
    }
}
