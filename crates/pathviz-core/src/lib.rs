//! **pathviz-core**: the grid model behind the pathviz shortest-path
//! visualizer.
//!
//! This crate provides the data the search operates on: [`Pos`]
//! coordinates, [`Cell`]s tagged with a semantic [`Role`], and the square
//! [`Grid`] that owns them and derives 4-way adjacency.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Role};
pub use error::GridError;
pub use geom::Pos;
pub use grid::Grid;
