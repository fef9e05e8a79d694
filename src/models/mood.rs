use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Which acquisition path produced the displayed image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageEngine {
    /// URL supplied by the operator
    #[serde(rename = "manual")]
    Manual,
    /// Image generated through the OpenAI images endpoint
    #[serde(rename = "openai")]
    OpenAi,
    /// Deterministic picsum placeholder keyed by the mood slug
    #[serde(rename = "fallback-picsum")]
    FallbackPicsum,
}

impl ImageEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageEngine::Manual => "manual",
            ImageEngine::OpenAi => "openai",
            ImageEngine::FallbackPicsum => "fallback-picsum",
        }
    }
}

impl fmt::Display for ImageEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current mood as persisted in the state document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodState {
    /// Free text label, never empty
    pub mood: String,
    pub caption: String,
    /// Background image, placed verbatim into the viewer background
    pub image_url: String,
    /// Set by the writer at save time, always written with milliseconds
    #[serde(serialize_with = "serialize_millis")]
    pub updated_at: DateTime<Utc>,
    /// Echo of the originating invocation
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_engine: Option<ImageEngine>,
}

impl MoodState {
    /// Build a state stamped at `now`, filling the caption and command defaults.
    pub fn new(
        mood: &str,
        caption: Option<&str>,
        command: Option<&str>,
        image_url: String,
        image_engine: ImageEngine,
        now: DateTime<Utc>,
    ) -> Self {
        let mood = mood.trim().to_string();
        let caption = caption
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_caption(&mood));
        let command = command
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Mood: {}", mood));

        Self {
            mood,
            caption,
            image_url,
            updated_at: now.trunc_subsecs(3),
            command,
            image_engine: Some(image_engine),
        }
    }
}

fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Caption used when the operator does not supply one
pub fn default_caption(mood: &str) -> String {
    format!("Mood set to “{}”.", mood)
}
