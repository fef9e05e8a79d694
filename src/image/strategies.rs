use std::fs;
use std::path::PathBuf;

use tracing::info;

use super::{build_prompt, ImageRequest, ImageStrategy, OpenAiImageClient, ResolvedImage};
use crate::config::{Config, PlaceholderSettings};
use crate::error::Result;
use crate::models::ImageEngine;
use crate::slug::slugify;

/// Uses the URL passed with `--image`/`--image-url`
pub struct ManualImage;

impl ImageStrategy for ManualImage {
    fn name(&self) -> &'static str {
        "Manual image"
    }

    fn resolve(&self, request: &ImageRequest) -> Result<Option<ResolvedImage>> {
        Ok(request
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| ResolvedImage {
                url: url.to_string(),
                engine: ImageEngine::Manual,
            }))
    }
}

/// Generates an image and stores it next to the state document
pub struct GeneratedImage {
    client: OpenAiImageClient,
    generated_dir: PathBuf,
    url_prefix: String,
    extension: String,
}

impl GeneratedImage {
    pub fn new(client: OpenAiImageClient, config: &Config) -> Self {
        Self {
            client,
            generated_dir: config.generated_dir.clone(),
            url_prefix: config.generated_url_prefix.clone(),
            extension: config.image.output_format.clone(),
        }
    }

    /// File name for a generated image: `<epoch millis>-<slug>.<ext>`
    fn file_name(&self, request: &ImageRequest) -> String {
        format!(
            "{}-{}.{}",
            request.requested_at.timestamp_millis(),
            slugify(&request.mood),
            self.extension
        )
    }
}

impl ImageStrategy for GeneratedImage {
    fn name(&self) -> &'static str {
        "OpenAI generation"
    }

    fn resolve(&self, request: &ImageRequest) -> Result<Option<ResolvedImage>> {
        if request.force_fallback {
            return Ok(None);
        }

        let bytes = self.client.generate(&build_prompt(&request.mood))?;

        fs::create_dir_all(&self.generated_dir)?;
        let file_name = self.file_name(request);
        let output_path = self.generated_dir.join(&file_name);
        fs::write(&output_path, bytes)?;

        info!(path = %output_path.display(), "generated image saved");

        Ok(Some(ResolvedImage {
            url: format!("{}/{}", self.url_prefix.trim_end_matches('/'), file_name),
            engine: ImageEngine::OpenAi,
        }))
    }
}

/// Deterministic placeholder keyed by the mood slug
pub struct PlaceholderImage {
    base_url: String,
    width: u32,
    height: u32,
}

impl PlaceholderImage {
    pub fn from_settings(settings: &PlaceholderSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            width: settings.width,
            height: settings.height,
        }
    }

    pub fn url_for(&self, mood: &str) -> String {
        format!(
            "{}/seed/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            slugify(mood),
            self.width,
            self.height
        )
    }
}

impl ImageStrategy for PlaceholderImage {
    fn name(&self) -> &'static str {
        "picsum"
    }

    fn resolve(&self, request: &ImageRequest) -> Result<Option<ResolvedImage>> {
        Ok(Some(ResolvedImage {
            url: self.url_for(&request.mood),
            engine: ImageEngine::FallbackPicsum,
        }))
    }
}
