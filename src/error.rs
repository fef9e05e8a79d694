use thiserror::Error;

/// Mood wall error types
#[derive(Error, Debug)]
pub enum MoodWallError {
    #[error("No mood provided")]
    MissingMood,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State file error: {0}")]
    State(String),

    #[error("Image generation error: {0}")]
    Generation(String),

    #[error("{0} is not set")]
    MissingCredential(&'static str),

    #[error("OpenAI image generation failed: HTTP {status} {body}")]
    Api { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result type for mood wall operations
pub type Result<T> = std::result::Result<T, MoodWallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = MoodWallError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_missing_credential() {
        let err = MoodWallError::MissingCredential("OPENAI_API_KEY");
        assert_eq!(err.to_string(), "OPENAI_API_KEY is not set");
    }

    #[test]
    fn test_error_display_api() {
        let err = MoodWallError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "OpenAI image generation failed: HTTP 429 rate limited"
        );
    }

    #[test]
    fn test_error_display_generation() {
        let err = MoodWallError::Generation("OpenAI returned no image data".to_string());
        assert_eq!(
            err.to_string(),
            "Image generation error: OpenAI returned no image data"
        );
    }
}
