use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::config;
use crate::display::TerminalSurface;
use crate::error::Result;
use crate::viewer::fetch::fetcher_for;
use crate::viewer::{SystemClock, Viewer};

#[derive(Parser, Debug, Default)]
#[command(name = "mood-viewer", version)]
#[command(about = "Display the mood wall and keep it up to date", long_about = None)]
pub struct ViewerArgs {
    /// Path to config file (defaults to moodwall.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// HTTP(S) URL or local path of the state document
    #[arg(long)]
    pub state_url: Option<String>,

    /// Seconds between refreshes
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Stop after this many refreshes (at least 1)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub polls: Option<u64>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the polling viewer on the terminal
pub fn run(args: ViewerArgs) -> Result<()> {
    let config = config::resolve(args.config.as_deref())?;

    let mut settings = config.viewer;
    if let Some(state_url) = args.state_url {
        settings.state_url = state_url;
    }
    if let Some(interval) = args.interval {
        settings.refresh_secs = interval;
    }

    info!(
        state_url = %settings.state_url,
        refresh_secs = settings.refresh_secs,
        "starting mood viewer"
    );

    let fetcher = fetcher_for(&settings.state_url);
    let mut viewer = Viewer::new(&settings, fetcher, TerminalSurface::new(), SystemClock);
    viewer.run(args.polls);

    Ok(())
}
