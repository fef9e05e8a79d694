//! Image acquisition module
//!
//! Resolves the background image for a mood through an ordered list of
//! strategies. The first strategy that produces an image wins; a strategy
//! that fails is logged and the next one is tried.

pub mod openai;
mod strategies;

pub use openai::OpenAiImageClient;
pub use strategies::{GeneratedImage, ManualImage, PlaceholderImage};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{MoodWallError, Result};
use crate::models::ImageEngine;

/// What the caller asked for
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub mood: String,
    /// Operator supplied image URL, wins over every other strategy
    pub image_url: Option<String>,
    /// Skip external generation
    pub force_fallback: bool,
    /// Time of the update, used to key generated files
    pub requested_at: DateTime<Utc>,
}

/// An image URL together with the engine that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub url: String,
    pub engine: ImageEngine,
}

/// One way of acquiring an image.
///
/// `Ok(None)` means the strategy does not apply to this request. An error is
/// an acquisition failure; the resolver moves on to the next strategy.
pub trait ImageStrategy {
    /// Human readable name used in log output
    fn name(&self) -> &'static str;

    fn resolve(&self, request: &ImageRequest) -> Result<Option<ResolvedImage>>;
}

/// Ordered chain of image strategies
pub struct ImageResolver {
    strategies: Vec<Box<dyn ImageStrategy>>,
}

impl ImageResolver {
    pub fn new(strategies: Vec<Box<dyn ImageStrategy>>) -> Self {
        Self { strategies }
    }

    /// Manual URL, then OpenAI generation, then the deterministic placeholder
    pub fn from_config(config: &Config, api_key: Option<String>) -> Self {
        let client = OpenAiImageClient::new(config.image.clone(), api_key);
        Self::new(vec![
            Box::new(ManualImage),
            Box::new(GeneratedImage::new(client, config)),
            Box::new(PlaceholderImage::from_settings(&config.placeholder)),
        ])
    }

    /// Chain without external generation
    pub fn placeholder_only(config: &Config) -> Self {
        Self::new(vec![
            Box::new(ManualImage),
            Box::new(PlaceholderImage::from_settings(&config.placeholder)),
        ])
    }

    pub fn resolve(&self, request: &ImageRequest) -> Result<ResolvedImage> {
        for (index, strategy) in self.strategies.iter().enumerate() {
            match strategy.resolve(request) {
                Ok(Some(image)) => {
                    debug!(strategy = strategy.name(), url = %image.url, "image resolved");
                    return Ok(image);
                }
                Ok(None) => {
                    debug!(strategy = strategy.name(), "strategy skipped");
                }
                Err(e) => match self.strategies.get(index + 1) {
                    Some(next) => warn!(
                        "[update-mood] {} failed, falling back to {}: {}",
                        strategy.name(),
                        next.name(),
                        e
                    ),
                    None => warn!("[update-mood] {} failed: {}", strategy.name(), e),
                },
            }
        }

        Err(MoodWallError::Generation(format!(
            "No image strategy produced an image for '{}'",
            request.mood
        )))
    }
}

/// Prompt sent to the generation endpoint for a mood
pub fn build_prompt(mood: &str) -> String {
    [
        format!("Create an original digital artwork for this mood: \"{}\".", mood),
        "Style: cinematic, artistic, expressive, non-generic, emotionally coherent.".to_string(),
        "Composition: clean focal hierarchy suitable for fullscreen TV display.".to_string(),
        "Lighting: dramatic but soft, high depth, rich atmosphere.".to_string(),
        "Do not include text, logos, signatures, watermarks, or UI elements.".to_string(),
    ]
    .join(" ")
}
