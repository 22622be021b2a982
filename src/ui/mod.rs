//! GTK4/libadwaita frontend.

pub mod app;
mod board;
mod clock;
mod dialogs;
mod hud;
mod state;
