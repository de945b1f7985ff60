//! Color theme for token classes
//!
//! A theme is passive data: a map from token scopes to RGB colors. Lookup
//! walks the dotted scope from most to least specific
//! (`string.escape.invalid` → `string.escape` → `string`) and ends at the
//! theme's default foreground.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use nu_ansi_term::{Color, Style};
use serde::{Deserialize, Serialize};

use crate::config::ThemeConfig;
use crate::error::{ConfigError, Result};
use crate::tokenizer::TokenClass;

/// Name of the built-in dark theme
pub const DEFAULT_THEME_NAME: &str = "enhanced-dark-hlsl";

/// 24-bit color, written as six hex digits (`569CD6` or `#569CD6`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse six hex digits with an optional leading `#`
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Rgb::parse_hex(s).ok_or_else(|| format!("'{s}' is not a 6-digit hex color"))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

/// Scope-to-color table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub foreground: Rgb,
    pub background: Rgb,
    pub rules: BTreeMap<String, Rgb>,
}

const ENHANCED_DARK_RULES: &[(&str, &str)] = &[
    ("comment", "6A9955"),
    ("keyword", "569CD6"),
    ("keyword.preprocessor", "C586C0"),
    ("string", "CE9178"),
    ("string.escape", "D7BA7D"),
    ("string.invalid", "CE9178"),
    ("number", "B5CEA8"),
    ("operator", "D4D4D4"),
    ("delimiter", "D4D4D4"),
    ("constant", "4FC1FF"),
    ("type", "4EC9B0"),
    ("type.struct", "A9B7C6"),
    ("type.custom", "A9B7C6"),
    ("semantic", "FF9500"),
    ("function.builtin", "DCDCAA"),
    ("function", "DCDCAA"),
    ("identifier", "9CDCFE"),
];

impl Theme {
    /// The built-in `enhanced-dark-hlsl` theme
    pub fn enhanced_dark() -> Self {
        let rules = ENHANCED_DARK_RULES
            .iter()
            .filter_map(|(scope, hex)| Some(((*scope).to_string(), Rgb::parse_hex(hex)?)))
            .collect();

        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            foreground: Rgb(0xD4, 0xD4, 0xD4),
            background: Rgb(0x1E, 0x1E, 0x1E),
            rules,
        }
    }

    /// Build the effective theme from configuration
    ///
    /// Configured rules override (or extend) the built-in ones.
    ///
    /// # Arguments
    /// * `config` - The `[theme]` table
    ///
    /// # Returns
    /// * `Result<Theme>` - Theme, or an error naming the first bad color
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        let mut theme = Self::enhanced_dark();
        theme.name = config.name.clone();

        for (scope, hex) in &config.rules {
            let color = Rgb::parse_hex(hex).ok_or_else(|| ConfigError::InvalidValue {
                field: format!("theme.rules.{scope}"),
                value: hex.clone(),
            })?;
            theme.set(scope, color);
        }

        Ok(theme)
    }

    pub fn set(&mut self, scope: &str, color: Rgb) {
        self.rules.insert(scope.to_ascii_lowercase(), color);
    }

    /// Color for a dotted scope, falling back to parent scopes
    pub fn color_for_scope(&self, scope: &str) -> Rgb {
        let mut scope = scope;
        loop {
            if let Some(color) = self.rules.get(scope) {
                return *color;
            }
            match scope.rfind('.') {
                Some(dot) => scope = &scope[..dot],
                None => return self.foreground,
            }
        }
    }

    pub fn color_for(&self, class: TokenClass) -> Rgb {
        self.color_for_scope(class.scope())
    }

    /// Terminal style for a token class
    pub fn style_for(&self, class: TokenClass) -> Style {
        let style = Style::new().fg(self.color_for(class).to_color());
        match class {
            TokenClass::Comment => style.italic(),
            TokenClass::StringInvalid | TokenClass::StringEscapeInvalid => style.underline(),
            _ => style,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::enhanced_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("569CD6"), Some(Rgb(0x56, 0x9C, 0xD6)));
        assert_eq!(Rgb::parse_hex("#ff9500"), Some(Rgb(0xFF, 0x95, 0x00)));
        assert_eq!(Rgb::parse_hex("FFF"), None);
        assert_eq!(Rgb::parse_hex("GG0000"), None);
        assert_eq!(Rgb(1, 2, 255).to_hex(), "0102FF");
    }

    #[test]
    fn test_builtin_colors() {
        let theme = Theme::default();
        assert_eq!(theme.color_for(TokenClass::Keyword).to_hex(), "569CD6");
        assert_eq!(theme.color_for(TokenClass::Semantic).to_hex(), "FF9500");
        assert_eq!(theme.color_for(TokenClass::TypeStruct).to_hex(), "A9B7C6");
        assert_eq!(theme.color_for(TokenClass::FunctionBuiltin).to_hex(), "DCDCAA");
    }

    #[test]
    fn test_scope_fallback() {
        let theme = Theme::default();
        // string.escape.invalid has no rule of its own
        assert_eq!(
            theme.color_for(TokenClass::StringEscapeInvalid),
            theme.color_for(TokenClass::StringEscape)
        );
        // neither bracket nor white has a rule
        assert_eq!(theme.color_for(TokenClass::Bracket), theme.foreground);
        assert_eq!(theme.color_for(TokenClass::Whitespace), theme.foreground);
        assert_eq!(theme.color_for_scope("keyword.control.flow").to_hex(), "569CD6");
    }

    #[test]
    fn test_from_config_overrides() {
        let mut config = ThemeConfig::default();
        config.rules.insert("Type.Custom".to_string(), "#112233".to_string());

        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.color_for(TokenClass::TypeCustom), Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.color_for(TokenClass::TypeStruct).to_hex(), "A9B7C6");
    }

    #[test]
    fn test_from_config_rejects_bad_color() {
        let mut config = ThemeConfig::default();
        config.rules.insert("keyword".to_string(), "blue".to_string());
        assert!(Theme::from_config(&config).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let theme = Theme::default();
        let text = toml::to_string(&theme).unwrap();
        assert!(text.contains("keyword.preprocessor"));
        assert!(text.contains("\"C586C0\""));
        let back: Theme = toml::from_str(&text).unwrap();
        assert_eq!(back, theme);
    }

    #[test]
    fn test_comment_style_is_italic() {
        let style = Theme::default().style_for(TokenClass::Comment);
        assert!(style.is_italic);
        assert_eq!(style.foreground, Some(Color::Rgb(0x6A, 0x99, 0x55)));
    }
}
