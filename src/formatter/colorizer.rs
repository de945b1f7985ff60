//! Color output support for terminal formatting
//!
//! This module provides colorization for terminal output:
//! - Re-rendering source lines with theme colors per token
//! - Message helpers (error, warning, info) for the host binary
//! - Support for enabling/disabling colors dynamically

use nu_ansi_term::{Color, Style};

use crate::theme::Theme;
use crate::tokenizer::Token;

/// Color scheme for output highlighting
#[derive(Debug, Clone)]
pub struct Colorizer {
    /// Enable colors
    enabled: bool,

    /// Colors per token class
    theme: Theme,
}

impl Colorizer {
    /// Create a new colorizer with the default theme
    ///
    /// # Arguments
    /// * `enabled` - Enable color output
    pub fn new(enabled: bool) -> Self {
        Self::with_theme(enabled, Theme::default())
    }

    /// Create a new colorizer with a specific theme
    pub fn with_theme(enabled: bool, theme: Theme) -> Self {
        Self { enabled, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Render a source line with each token painted in its theme color
    ///
    /// # Arguments
    /// * `line` - The line the tokens were produced from
    /// * `tokens` - Tokens partitioning `line`
    ///
    /// # Returns
    /// * `String` - The line with ANSI escapes, or unchanged when disabled
    pub fn paint_line(&self, line: &str, tokens: &[Token]) -> String {
        if !self.enabled {
            return line.to_string();
        }

        tokens
            .iter()
            .map(|token| {
                self.theme
                    .style_for(token.class)
                    .paint(token.text(line))
                    .to_string()
            })
            .collect()
    }

    /// Colorize text as error (red)
    pub fn error(&self, text: &str) -> String {
        self.paint(Color::Red.normal(), &format!("Error: {text}"))
    }

    /// Colorize text as warning (yellow)
    pub fn warning(&self, text: &str) -> String {
        self.paint(Color::Yellow.normal(), text)
    }

    /// Colorize text as info (blue)
    pub fn info(&self, text: &str) -> String {
        self.paint(Color::Blue.normal(), text)
    }

    /// Dim secondary text such as ranges and documentation
    pub fn dim(&self, text: &str) -> String {
        self.paint(Style::new().dimmed(), text)
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Enable or disable colors
    ///
    /// # Arguments
    /// * `enabled` - Whether to enable colors
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{LexicalState, tokenize};

    #[test]
    fn test_colorizer_no_colors() {
        let colorizer = Colorizer::new(false);
        let result = colorizer.error("test error");
        assert_eq!(result, "Error: test error");
        assert!(!result.contains('\x1b'));

        let (tokens, _) = tokenize("int x;", LexicalState::Root);
        assert_eq!(colorizer.paint_line("int x;", &tokens), "int x;");
    }

    #[test]
    fn test_paint_line_uses_theme_colors() {
        let colorizer = Colorizer::new(true);
        let (tokens, _) = tokenize("float4 c;", LexicalState::Root);
        let painted = colorizer.paint_line("float4 c;", &tokens);

        // 4EC9B0 = (78, 201, 176)
        assert!(painted.contains("\x1b[38;2;78;201;176mfloat4"));
        assert!(painted.contains("c"));
        assert!(painted.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_colorizer_with_colors() {
        let mut colorizer = Colorizer::new(true);
        assert!(colorizer.info("test").contains('\x1b'));
        colorizer.set_enabled(false);
        assert_eq!(colorizer.warning("test"), "test");
    }
}
