//! Data models module
//!
//! Defines the persisted mood state and the image engine tag.

pub mod mood;

pub use mood::{default_caption, ImageEngine, MoodState};
