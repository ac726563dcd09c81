//! A* shortest-path search over pathviz grids.
//!
//! This crate animates a best-first search directly on a
//! [`pathviz_core::Grid`]:
//!
//! - **A\*** search with a pluggable admissible heuristic ([`Search::run`])
//! - **Path reconstruction** from the predecessor chain ([`reconstruct`])
//! - **BFS** unit-cost distance maps, used as a reference ([`bfs_distances`])
//! - An [`Editor`] holding the grid plus the designated start and end cells,
//!   which is what an interactive front end drives.
//!
//! The search reports progress through a plain callback that receives the
//! grid after every expansion, so a renderer can redraw mid-run. Runs are
//! single-threaded and synchronous; a [`Cancel`] token can stop one early.
//!
//! # Frontier order
//!
//! Candidates pop by ascending `f = g + h`, then ascending `g`, then push
//! order. Together with the fixed down/up/right/left neighbor order this
//! makes every run on the same grid produce the same path.

mod astar;
mod bfs;
mod cancel;
mod distance;
mod editor;
mod frontier;
mod reconstruct;

pub use astar::{Expansion, Outcome, Search, SearchStats};
pub use bfs::{UNREACHABLE, bfs_distances, reachable_count};
pub use cancel::Cancel;
pub use distance::{Heuristic, Manhattan, Zero, manhattan};
pub use editor::{Editor, Placed};
pub use frontier::{Frontier, FrontierEntry};
pub use reconstruct::{NO_PARENT, reconstruct};
