//! Blocking client for the OpenAI images generation endpoint.
//!
//! Sends a single `POST` with a bearer credential and returns the raw image
//! bytes, either decoded from inline base64 or downloaded from the returned
//! URL.

use base64::Engine;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ImageSettings;
use crate::error::{MoodWallError, Result};

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    quality: &'a str,
    output_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedItem>,
}

#[derive(Debug, Deserialize)]
struct GeneratedItem {
    b64_json: Option<String>,
    url: Option<String>,
}

/// HTTP client for the images endpoint
pub struct OpenAiImageClient {
    client: Client,
    settings: ImageSettings,
    api_key: Option<String>,
}

impl OpenAiImageClient {
    pub fn new(settings: ImageSettings, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            settings,
            api_key,
        }
    }

    /// Generate an image for `prompt` and return its bytes
    pub fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(MoodWallError::MissingCredential(API_KEY_ENV))?;

        let body = GenerationRequest {
            model: &self.settings.model,
            prompt,
            size: &self.settings.size,
            quality: &self.settings.quality,
            output_format: &self.settings.output_format,
        };

        debug!(
            endpoint = %self.settings.endpoint,
            model = %self.settings.model,
            size = %self.settings.size,
            "requesting image generation"
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MoodWallError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerationResponse = response.json()?;
        let item = parsed.data.into_iter().next().ok_or_else(|| {
            MoodWallError::Generation("OpenAI returned no image data".to_string())
        })?;

        if let Some(encoded) = item.b64_json {
            let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
            return Ok(bytes);
        }

        if let Some(url) = item.url {
            return self.download(&url);
        }

        Err(MoodWallError::Generation(
            "OpenAI response did not include b64_json or url".to_string(),
        ))
    }

    fn download(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "downloading generated image");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(MoodWallError::Generation(format!(
                "Failed to download generated image URL: {}",
                status.as_u16()
            )));
        }

        Ok(response.bytes()?.to_vec())
    }
}
