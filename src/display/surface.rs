//! Terminal rendering of the mood wall

use std::io::Write;

use crate::display::formatter::print_markdown;
use crate::display::terminal::{clear_sequence, ColorEnv};
use crate::viewer::Surface;

/// What is currently on the wall
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallView {
    pub mood: String,
    pub caption: String,
    pub caption_visible: bool,
    pub timestamp: String,
    pub background: Option<String>,
}

impl WallView {
    /// Markdown for the current view
    pub fn to_markdown(&self) -> String {
        let mut output = format!("# {}\n\n", self.mood);

        if self.caption_visible {
            output.push_str(&self.caption);
            output.push_str("\n\n");
        }

        output.push_str(&format!("*{}*", self.timestamp));

        if let Some(background) = &self.background {
            output.push_str(&format!("\n\nBackground: `{}`", background));
        }

        output
    }
}

/// Redraws the wall on stdout after every refresh
#[derive(Debug, Default)]
pub struct TerminalSurface {
    view: WallView,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &WallView {
        &self.view
    }
}

impl Surface for TerminalSurface {
    fn set_mood(&mut self, text: &str) {
        self.view.mood = text.to_string();
    }

    fn set_caption(&mut self, text: &str, visible: bool) {
        self.view.caption = text.to_string();
        self.view.caption_visible = visible;
    }

    fn set_timestamp(&mut self, text: &str) {
        self.view.timestamp = text.to_string();
    }

    fn set_background(&mut self, image_url: &str) {
        self.view.background = Some(image_url.to_string());
    }

    fn present(&mut self) {
        print!("{}", clear_sequence(&ColorEnv::detect()));
        print_markdown(&self.view.to_markdown());
        let _ = std::io::stdout().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_with_caption_and_background() {
        let view = WallView {
            mood: "calm".to_string(),
            caption: "Slow morning".to_string(),
            caption_visible: true,
            timestamp: "Updated Mon, Jan 1, 12:00 AM".to_string(),
            background: Some("http://x/img.png".to_string()),
        };

        assert_eq!(
            view.to_markdown(),
            "# calm\n\nSlow morning\n\n*Updated Mon, Jan 1, 12:00 AM*\n\nBackground: `http://x/img.png`"
        );
    }

    #[test]
    fn test_markdown_hides_caption() {
        let view = WallView {
            mood: "calm".to_string(),
            caption: "stale".to_string(),
            caption_visible: false,
            timestamp: "Updated Mon, Jan 1, 12:00 AM".to_string(),
            background: None,
        };

        let markdown = view.to_markdown();
        assert!(!markdown.contains("stale"));
        assert!(!markdown.contains("Background"));
    }

    #[test]
    fn test_surface_keeps_background_until_replaced() {
        let mut surface = TerminalSurface::new();
        surface.set_background("http://x/one.png");
        surface.set_mood("stormy");

        assert_eq!(surface.view().background.as_deref(), Some("http://x/one.png"));
        assert_eq!(surface.view().mood, "stormy");
    }
}
