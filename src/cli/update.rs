use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, info};

use crate::cli::args::{MoodRequest, UpdateArgs};
use crate::config;
use crate::error::{MoodWallError, Result};
use crate::image::openai::API_KEY_ENV;
use crate::image::{ImageRequest, ImageResolver};
use crate::models::MoodState;
use crate::state;

/// Update the mood wall state from command-line arguments
pub fn run(args: UpdateArgs) -> Result<()> {
    // Resolve the mood before touching config, network or disk
    let request = args.mood_request().ok_or(MoodWallError::MissingMood)?;

    let mut config = config::resolve(args.config.as_deref())?;
    config.apply_image_overrides(args.image_overrides());
    if let Some(state_file) = args.state_file {
        config.state_file = state_file;
    }

    debug!(state_file = %config.state_file.display(), "configuration resolved");

    let resolver = ImageResolver::from_config(&config, std::env::var(API_KEY_ENV).ok());
    let state = update(&request, &resolver, &config.state_file, Utc::now())?;

    print!("{}", summary(&state));
    Ok(())
}

/// Resolve the image, assemble the new state and overwrite the state file.
///
/// The write is the last step, so any earlier failure leaves the previous
/// state file untouched.
pub fn update(
    request: &MoodRequest,
    resolver: &ImageResolver,
    state_file: &Path,
    now: DateTime<Utc>,
) -> Result<MoodState> {
    let image = resolver.resolve(&ImageRequest {
        mood: request.mood.clone(),
        image_url: request.image_url.clone(),
        force_fallback: request.force_fallback,
        requested_at: now,
    })?;

    let state = MoodState::new(
        &request.mood,
        request.caption.as_deref(),
        request.command.as_deref(),
        image.url,
        image.engine,
        now,
    );

    state::save(&state, state_file)?;
    info!(path = %state_file.display(), engine = %image.engine, "state written");

    Ok(state)
}

/// Human readable summary of a written state
pub fn summary(state: &MoodState) -> String {
    let engine = state
        .image_engine
        .map(|engine| engine.as_str())
        .unwrap_or("unknown");

    format!(
        "Mood updated successfully.\n\
         - Mood: {}\n\
         - Caption: {}\n\
         - Image: {}\n\
         - Engine: {}\n\
         - Updated: {}\n",
        state.mood,
        state.caption,
        state.image_url,
        engine,
        state
            .updated_at
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::ImageEngine;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn request(mood: &str) -> MoodRequest {
        MoodRequest {
            mood: mood.to_string(),
            caption: None,
            image_url: None,
            command: None,
            force_fallback: true,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 18, 45, 0).unwrap()
    }

    #[test]
    fn test_update_with_fallback() {
        let temp = TempDir::new().unwrap();
        let state_file = temp.path().join("docs/state.json");
        let resolver = ImageResolver::from_config(&Config::default(), Some("key".to_string()));

        let state = update(&request("Kootenays Winter"), &resolver, &state_file, now()).unwrap();

        assert_eq!(state.image_engine, Some(ImageEngine::FallbackPicsum));
        assert_eq!(
            state.image_url,
            "https://picsum.photos/seed/kootenays-winter/1920/1080"
        );
        assert_eq!(state.caption, "Mood set to “Kootenays Winter”.");
        assert_eq!(state.command, "Mood: Kootenays Winter");
        assert_eq!(state::load(&state_file).unwrap(), state);
    }

    #[test]
    fn test_fallback_url_independent_of_time() {
        let temp = TempDir::new().unwrap();
        let state_file = temp.path().join("state.json");
        let resolver = ImageResolver::placeholder_only(&Config::default());

        let first = update(&request("calm"), &resolver, &state_file, now()).unwrap();
        let second = update(&request("calm"), &resolver, &state_file, Utc::now()).unwrap();
        assert_eq!(first.image_url, second.image_url);
    }

    #[test]
    fn test_manual_image_wins() {
        let temp = TempDir::new().unwrap();
        let state_file = temp.path().join("state.json");
        let resolver = ImageResolver::from_config(&Config::default(), None);

        let mut req = request("calm");
        req.image_url = Some("http://x/img.png".to_string());

        for force_fallback in [true, false] {
            req.force_fallback = force_fallback;
            let state = update(&req, &resolver, &state_file, now()).unwrap();
            assert_eq!(state.image_engine, Some(ImageEngine::Manual));
            assert_eq!(state.image_url, "http://x/img.png");
        }
    }

    #[test]
    fn test_write_failure_is_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("docs");
        fs::write(&blocker, "not a directory").unwrap();
        let resolver = ImageResolver::placeholder_only(&Config::default());

        let result = update(&request("calm"), &resolver, &blocker.join("state.json"), now());
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_lines() {
        let state = MoodState::new(
            "calm",
            Some("Slow morning"),
            None,
            "http://x/img.png".to_string(),
            ImageEngine::Manual,
            now(),
        );

        assert_eq!(
            summary(&state),
            "Mood updated successfully.\n\
             - Mood: calm\n\
             - Caption: Slow morning\n\
             - Image: http://x/img.png\n\
             - Engine: manual\n\
             - Updated: 2024-03-09T18:45:00.000Z\n"
        );
    }

    #[test]
    fn test_written_timestamp_matches_summary() {
        let temp = TempDir::new().unwrap();
        let state_file = temp.path().join("state.json");
        let resolver = ImageResolver::placeholder_only(&Config::default());

        let state = update(&request("calm"), &resolver, &state_file, now()).unwrap();

        let written = fs::read_to_string(&state_file).unwrap();
        assert!(written.contains("  \"updatedAt\": \"2024-03-09T18:45:00.000Z\",\n"));
        assert!(summary(&state).contains("- Updated: 2024-03-09T18:45:00.000Z\n"));
    }
}
