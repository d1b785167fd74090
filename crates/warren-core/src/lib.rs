//! **warren-core** — Grid-maze graph model (core types).
//!
//! This crate provides the foundational types shared across the *warren*
//! workspace: geometry primitives, the terrain cost model, and the maze
//! graph itself — a lattice of cells whose adjacency is carved by the
//! generators in `warren-gen` and searched by the strategies in
//! `warren-paths`.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Direction, Point};
pub use grid::{Cell, MazeGrid};
pub use terrain::Terrain;
