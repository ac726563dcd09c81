//! Terminal front end for the pathviz shortest-path visualizer.
//!
//! Renders an [`Editor`](pathviz_search::Editor)'s grid with crossterm,
//! turns mouse and key input into editor commands, and animates searches
//! frame by frame.

pub mod app;
pub mod config;
pub mod input;
pub mod render;

pub use app::{App, AppError, run};
pub use config::{Config, ConfigError};
pub use input::Command;
