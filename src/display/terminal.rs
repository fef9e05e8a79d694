//! TTY detection and color support logic

use std::io::IsTerminal;

/// Clears the screen and homes the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Color-related environment, captured once so the decision is testable
#[derive(Debug, Clone, Default)]
pub struct ColorEnv {
    pub no_color: bool,
    pub clicolor_force: Option<String>,
    pub clicolor: Option<String>,
    pub is_tty: bool,
}

impl ColorEnv {
    pub fn detect() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            clicolor_force: std::env::var("CLICOLOR_FORCE").ok(),
            clicolor: std::env::var("CLICOLOR").ok(),
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Decide whether the wall is drawn with colors
    pub fn use_colors(&self) -> bool {
        // Priority order:
        // 1. NO_COLOR takes precedence (https://no-color.org/)
        if self.no_color {
            return false;
        }

        // 2. CLICOLOR_FORCE enables colors even when piped, unless it is "0"
        if self.clicolor_force.as_deref().is_some_and(|v| v != "0") {
            return true;
        }

        // 3. CLICOLOR=0 disables colors
        if self.clicolor.as_deref() == Some("0") {
            return false;
        }

        // 4. Otherwise color only a real terminal
        self.is_tty
    }
}

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    ColorEnv::detect().use_colors()
}

/// Escape sequence to redraw the wall in place, empty when not on a terminal
pub fn clear_sequence(env: &ColorEnv) -> &'static str {
    // Piped output is appended, never cleared
    if env.is_tty {
        CLEAR_SCREEN
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> ColorEnv {
        ColorEnv {
            is_tty: true,
            ..ColorEnv::default()
        }
    }

    #[test]
    fn test_tty_enables_colors() {
        assert!(tty().use_colors());
        assert!(!ColorEnv::default().use_colors());
    }

    #[test]
    fn test_no_color_overrides_force() {
        let env = ColorEnv {
            no_color: true,
            clicolor_force: Some("1".to_string()),
            ..tty()
        };
        assert!(!env.use_colors());
    }

    #[test]
    fn test_clicolor_force_enables_when_piped() {
        let env = ColorEnv {
            clicolor_force: Some("1".to_string()),
            ..ColorEnv::default()
        };
        assert!(env.use_colors());

        let env = ColorEnv {
            clicolor_force: Some("0".to_string()),
            ..ColorEnv::default()
        };
        assert!(!env.use_colors());
    }

    #[test]
    fn test_clicolor_zero_disables() {
        let env = ColorEnv {
            clicolor: Some("0".to_string()),
            ..tty()
        };
        assert!(!env.use_colors());
    }

    #[test]
    fn test_clear_only_on_tty() {
        assert_eq!(clear_sequence(&tty()), CLEAR_SCREEN);
        assert_eq!(clear_sequence(&ColorEnv::default()), "");
    }
}
