//! State persistence module
//!
//! Reads and writes the single JSON document holding the current mood.
//! Each save replaces the document wholesale: no merge, no history.

use std::fs;
use std::path::Path;

use crate::error::{MoodWallError, Result};
use crate::models::MoodState;

/// Serialize a state the way it is stored on disk: 2-space indent, trailing newline
pub fn to_document(state: &MoodState) -> Result<String> {
    let mut document = serde_json::to_string_pretty(state)?;
    document.push('\n');
    Ok(document)
}

/// Load the state document
pub fn load(path: &Path) -> Result<MoodState> {
    let content = fs::read_to_string(path).map_err(|e| {
        MoodWallError::State(format!("Cannot read state from '{}': {}", path.display(), e))
    })?;

    let state: MoodState = serde_json::from_str(&content)?;
    Ok(state)
}

/// Overwrite the state document, creating its parent directory if needed
pub fn save(state: &MoodState, path: &Path) -> Result<()> {
    let document = to_document(state)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, document).map_err(|e| {
        MoodWallError::State(format!("Cannot write state to '{}': {}", path.display(), e))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageEngine;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample_state(mood: &str) -> MoodState {
        MoodState::new(
            mood,
            None,
            None,
            format!("https://picsum.photos/seed/{}/1920/1080", mood),
            ImageEngine::FallbackPicsum,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_document_format() {
        let document = to_document(&sample_state("calm")).unwrap();

        assert!(document.starts_with("{\n  \"mood\": \"calm\",\n"));
        assert!(document.ends_with("}\n"));
        assert!(document.contains("  \"imageEngine\": \"fallback-picsum\"\n"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");

        let state = sample_state("calm");
        save(&state, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/docs/state.json");

        save(&sample_state("calm"), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");

        fs::write(&path, r#"{"mood":"old","legacy":"field","extra":[1,2,3]}"#).unwrap();
        save(&sample_state("new"), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("legacy"));
        assert_eq!(load(&path).unwrap().mood, "new");
    }

    #[test]
    fn test_load_missing_state() {
        let err = load(Path::new("/nonexistent/state.json")).unwrap_err();
        assert!(err.to_string().contains("Cannot read state from"));
    }
}
