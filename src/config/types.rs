use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Mood wall configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the JSON state document read by the viewer
    pub state_file: PathBuf,

    /// Directory where generated images are written
    pub generated_dir: PathBuf,

    /// Prefix used for generated image URLs, relative to the page serving the state file
    pub generated_url_prefix: String,

    /// Image generation settings
    pub image: ImageSettings,

    /// Deterministic placeholder image settings
    pub placeholder: PlaceholderSettings,

    /// Viewer settings
    pub viewer: ViewerSettings,
}

/// Settings for the external image generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Full URL of the generations endpoint
    pub endpoint: String,

    pub model: String,

    /// Image size as `WxH`
    pub size: String,

    pub quality: String,

    /// Requested output format, also used as the generated file extension
    pub output_format: String,
}

/// Settings for the placeholder image service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderSettings {
    pub base_url: String,
    pub width: u32,
    pub height: u32,
}

/// Settings for the polling viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// HTTP(S) URL or local path of the state document
    pub state_url: String,

    /// Seconds between polls
    pub refresh_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("docs/state.json"),
            generated_dir: PathBuf::from("docs/generated"),
            generated_url_prefix: "./generated".to_string(),
            image: ImageSettings::default(),
            placeholder: PlaceholderSettings::default(),
            viewer: ViewerSettings::default(),
        }
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/images/generations".to_string(),
            model: "gpt-image-1".to_string(),
            size: "1536x1024".to_string(),
            quality: "high".to_string(),
            output_format: "png".to_string(),
        }
    }
}

impl Default for PlaceholderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://picsum.photos".to_string(),
            width: 1920,
            height: 1080,
        }
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            state_url: "docs/state.json".to_string(),
            refresh_secs: 60,
        }
    }
}
