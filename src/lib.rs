//! Memory "pairs" card game: board planning, the flip/match state machine, and
//! (behind the `gui` feature) a GTK frontend.

pub mod catalog;
pub mod config;
pub mod game;

#[cfg(feature = "gui")]
pub mod ui;

pub use crate::config::{ConfigError, GameConfig};
pub use crate::game::*;
