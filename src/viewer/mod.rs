//! Mood viewer module
//!
//! Polls the state document on a fixed interval and renders it onto a
//! [`Surface`]. Fetching, rendering and time are injected so the loop can
//! run against test doubles. A failed refresh renders an error state and
//! never stops the loop.

pub mod fetch;

pub use fetch::{FileFetcher, HttpFetcher};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::ViewerSettings;

pub const UNTITLED_MOOD: &str = "Untitled mood";
pub const UNAVAILABLE_MOOD: &str = "Mood wall temporarily unavailable";
pub const NO_TIMESTAMP: &str = "No timestamp available";

/// en-US short form, e.g. `Mon, Jan 1, 12:00 AM`
const TIMESTAMP_FORMAT: &str = "%a, %b %-d, %-I:%M %p";

/// Failure of a single refresh
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw response from a state fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retrieves the state document
pub trait StateFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, ViewerError>;
}

impl<T: StateFetcher + ?Sized> StateFetcher for Box<T> {
    fn fetch(&self, url: &str) -> Result<FetchResponse, ViewerError> {
        (**self).fetch(url)
    }
}

/// Where the mood is displayed
pub trait Surface {
    fn set_mood(&mut self, text: &str);

    fn set_caption(&mut self, text: &str, visible: bool);

    fn set_timestamp(&mut self, text: &str);

    fn set_background(&mut self, image_url: &str);

    /// Called once after every refresh
    fn present(&mut self) {}
}

/// Source of time for cache busting, formatting and polling
pub trait Clock {
    /// Zone that timestamps are displayed in
    type Zone: TimeZone;

    fn now(&self) -> DateTime<Utc>;

    fn zone(&self) -> Self::Zone;

    fn sleep(&self, duration: Duration);
}

/// Wall clock in the machine's local time zone
pub struct SystemClock;

impl Clock for SystemClock {
    type Zone = Local;

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn zone(&self) -> Local {
        Local
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Polling viewer
pub struct Viewer<F, S, C> {
    fetcher: F,
    surface: S,
    clock: C,
    state_url: String,
    interval: Duration,
}

impl<F: StateFetcher, S: Surface, C: Clock> Viewer<F, S, C> {
    pub fn new(settings: &ViewerSettings, fetcher: F, surface: S, clock: C) -> Self {
        Self {
            fetcher,
            surface,
            clock,
            state_url: settings.state_url.clone(),
            interval: Duration::from_secs(settings.refresh_secs.max(1)),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Fetch and render once. Returns whether the state was applied.
    pub fn refresh(&mut self) -> bool {
        let applied = match self.load_state() {
            Ok(state) => {
                apply_state(&mut self.surface, &state, &self.clock.zone());
                true
            }
            Err(e) => {
                error!(url = %self.state_url, "failed to load state: {}", e);
                self.surface.set_mood(UNAVAILABLE_MOOD);
                self.surface.set_caption("", false);
                self.surface.set_timestamp(&format!("Error loading state ({})", e));
                false
            }
        };

        self.surface.present();
        applied
    }

    /// Refresh now and then once per interval.
    ///
    /// Runs forever when `max_polls` is `None`.
    pub fn run(&mut self, max_polls: Option<u64>) {
        if max_polls == Some(0) {
            return;
        }

        let mut polls = 0u64;
        loop {
            self.refresh();
            polls += 1;

            if max_polls.is_some_and(|max| polls >= max) {
                break;
            }
            self.clock.sleep(self.interval);
        }
    }

    fn load_state(&self) -> Result<Value, ViewerError> {
        let url = cache_busted(&self.state_url, self.clock.now().timestamp_millis());
        debug!(%url, "fetching state");

        let response = self.fetcher.fetch(&url)?;
        if !response.is_success() {
            return Err(ViewerError::Status(response.status));
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Append a `t=<millis>` query parameter
pub fn cache_busted(url: &str, millis: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, millis)
}

/// Render a state document with defaults for missing fields.
///
/// A missing image leaves the current background untouched.
pub fn apply_state<S: Surface + ?Sized, Tz: TimeZone>(surface: &mut S, state: &Value, zone: &Tz) {
    let mood = text_field(state, "mood").unwrap_or(UNTITLED_MOOD);
    let caption = text_field(state, "caption").unwrap_or("");
    let updated_at = text_field(state, "updatedAt").or_else(|| text_field(state, "timestamp"));

    surface.set_mood(mood);
    surface.set_caption(caption, !caption.is_empty());
    surface.set_timestamp(&format!("Updated {}", format_timestamp(updated_at, zone)));

    if let Some(image_url) = text_field(state, "imageUrl") {
        surface.set_background(image_url);
    }
}

fn text_field<'a>(state: &'a Value, key: &str) -> Option<&'a str> {
    state
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Format a state timestamp for display.
///
/// Each instant is shown with the offset `zone` has at that instant. Missing
/// input gives a placeholder and unparseable input is shown raw.
pub fn format_timestamp<Tz: TimeZone>(input: Option<&str>, zone: &Tz) -> String {
    let Some(raw) = input.filter(|raw| !raw.trim().is_empty()) else {
        return NO_TIMESTAMP.to_string();
    };

    match parse_timestamp(raw.trim(), zone) {
        Some(local) => local.format(TIMESTAMP_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Wall-clock time of `raw` in `zone`
fn parse_timestamp<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<NaiveDateTime> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(zone).naive_local());
    }

    // Date-times without an offset are local time. Skipped wall times do not exist.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return zone
                .from_local_datetime(&naive)
                .earliest()
                .map(|at| at.naive_local());
        }
    }

    // Bare dates are UTC midnight
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(zone).naive_local())
}
