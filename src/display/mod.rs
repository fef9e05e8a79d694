//! Terminal display module
//!
//! Renders the mood wall on the terminal with automatic TTY detection.

mod formatter;
mod surface;
mod terminal;

pub use surface::{TerminalSurface, WallView};
