//! Mood wall: a state file updater and a polling viewer.
//!
//! `update-mood` resolves a mood and its background image, then overwrites
//! the JSON state document. `mood-viewer` polls that document and renders it.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod image;
pub mod logging;
pub mod models;
pub mod slug;
pub mod state;
pub mod viewer;
