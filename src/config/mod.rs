//! Configuration module
//!
//! Handles loading of the optional moodwall.toml configuration file and
//! layering of command-line/environment overrides on top of it.

mod types;

pub use types::{Config, ImageSettings, PlaceholderSettings, ViewerSettings};

use crate::error::{MoodWallError, Result};
use std::fs;
use std::path::Path;

/// Configuration file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "moodwall.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        MoodWallError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Without one, `moodwall.toml` in the working
/// directory is used if present, otherwise built-in defaults.
pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                load(fallback)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Image generation values supplied by flags or environment variables
#[derive(Debug, Clone, Default)]
pub struct ImageOverrides {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub size: Option<String>,
    pub quality: Option<String>,
}

impl Config {
    /// Apply non-empty overrides on top of the file/default image settings
    pub fn apply_image_overrides(&mut self, overrides: ImageOverrides) {
        let ImageOverrides {
            endpoint,
            model,
            size,
            quality,
        } = overrides;

        override_with(&mut self.image.endpoint, endpoint);
        override_with(&mut self.image.model, model);
        override_with(&mut self.image.size, size);
        override_with(&mut self.image.quality, quality);
    }
}

fn override_with(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        let value = value.trim();
        if !value.is_empty() {
            *target = value.to_string();
        }
    }
}
