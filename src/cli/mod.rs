//! Command-line interface module
//!
//! - args: argument parsing for `update-mood` and mood resolution
//! - update: the state update flow behind `update-mood`
//! - viewer: the polling loop behind `mood-viewer`

pub mod args;
pub mod update;
pub mod viewer;
