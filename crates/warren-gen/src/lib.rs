//! **warren-gen** — Maze generation over [`warren_core::MazeGrid`].
//!
//! Two interchangeable carving algorithms produce a spanning tree over the
//! lattice, after which an optional densification pass opens extra edges to
//! create loops:
//!
//! - **Randomized Prim** ([`Algorithm::Prim`]): grow from the start cell via
//!   a random frontier of candidate edges.
//! - **Randomized Kruskal** ([`Algorithm::Kruskal`]): shuffle all lattice
//!   edges and merge components with a disjoint-set union.
//!
//! Both guarantee the finished grid is connected from start to every cell;
//! densification only ever adds edges.

mod generator;
mod kruskal;
mod params;
mod prim;
#[cfg(test)]
mod testutil;

pub use generator::MazeGen;
pub use params::{Algorithm, GenParams, ParamsError};
