use clap::Parser;
use std::path::PathBuf;

use crate::config::ImageOverrides;
use crate::slug::strip_mood_prefix;

/// Usage block printed when no mood can be determined
pub const USAGE: &str = r#"
Usage:
  update-mood "Mood: kootenays winter"
  update-mood --mood "kootenays winter" [--caption "..."] [--model gpt-image-1] [--size 1536x1024]
  update-mood --mood "..." --fallback   # skip OpenAI and use picsum
"#;

#[derive(Parser, Debug, Default)]
#[command(name = "update-mood", version)]
#[command(about = "Update the mood wall state file", long_about = None)]
pub struct UpdateArgs {
    /// Positional form, e.g. "Mood: kootenays winter"
    #[arg(value_name = "MOOD_TEXT")]
    pub words: Vec<String>,

    /// Mood label
    #[arg(long)]
    pub mood: Option<String>,

    /// Caption shown under the mood (defaults to a generated sentence)
    #[arg(long)]
    pub caption: Option<String>,

    /// Use this image URL instead of generating one
    #[arg(long = "image", visible_alias = "image-url", value_name = "URL")]
    pub image: Option<String>,

    /// Originating command, recorded in the state file
    #[arg(long)]
    pub command: Option<String>,

    /// Image generation model
    #[arg(long, env = "MOOD_IMAGE_MODEL")]
    pub model: Option<String>,

    /// Image size as WxH
    #[arg(long, env = "MOOD_IMAGE_SIZE", value_name = "WxH")]
    pub size: Option<String>,

    /// Image quality level
    #[arg(long, env = "MOOD_IMAGE_QUALITY")]
    pub quality: Option<String>,

    /// Image generation endpoint URL
    #[arg(long, env = "MOOD_IMAGE_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Skip image generation and use the deterministic placeholder
    #[arg(long)]
    pub fallback: bool,

    /// Path to config file (defaults to moodwall.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the state file location
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the mood was supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodInput {
    /// `update-mood "Mood: winter light"`; holds the full joined text
    Positional(String),
    /// `update-mood --mood "winter light" [--command ...]`
    Flags {
        mood: Option<String>,
        command: Option<String>,
    },
}

impl MoodInput {
    /// Classify the invocation.
    ///
    /// An explicit `--mood` always selects the flag form. Otherwise positional
    /// words carrying a `Mood:` prefix select the positional form.
    pub fn classify(words: &[String], mood: Option<&str>, command: Option<&str>) -> Self {
        let joined = words.join(" ").trim().to_string();

        if mood.is_none() && strip_mood_prefix(&joined).is_some() {
            return MoodInput::Positional(joined);
        }

        MoodInput::Flags {
            mood: mood.map(str::to_string),
            command: command.map(str::to_string),
        }
    }

    /// Resolve to `(mood, command)`; `None` when no non-empty mood is present
    pub fn resolve(&self) -> Option<(String, Option<String>)> {
        let (mood, command) = match self {
            MoodInput::Positional(text) => (
                strip_mood_prefix(text).map(str::to_string),
                Some(text.clone()),
            ),
            MoodInput::Flags { mood, command } => {
                let command = command
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string);
                let mood = mood
                    .as_deref()
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .or_else(|| {
                        command
                            .as_deref()
                            .and_then(strip_mood_prefix)
                            .map(str::to_string)
                    });
                (mood, command)
            }
        };

        mood.filter(|m| !m.is_empty()).map(|m| (m, command))
    }
}

/// A fully resolved update request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodRequest {
    pub mood: String,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub command: Option<String>,
    pub force_fallback: bool,
}

impl UpdateArgs {
    pub fn mood_input(&self) -> MoodInput {
        MoodInput::classify(&self.words, self.mood.as_deref(), self.command.as_deref())
    }

    /// Resolve the request, or `None` when no mood was given
    pub fn mood_request(&self) -> Option<MoodRequest> {
        let (mood, command) = self.mood_input().resolve()?;

        Some(MoodRequest {
            mood,
            caption: non_blank(self.caption.as_deref()),
            image_url: non_blank(self.image.as_deref()),
            command,
            force_fallback: self.fallback,
        })
    }

    pub fn image_overrides(&self) -> ImageOverrides {
        ImageOverrides {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            size: self.size.clone(),
            quality: self.quality.clone(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
