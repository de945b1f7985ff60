use std::sync::{Arc, RwLock};

use crate::config::{DisplayConfig, OutputFormat};
use crate::tokenizer::LexicalState;

/// State shared between the REPL loop and the editor callbacks.
///
/// The highlighter and validator run inside reedline, so the lexical state a
/// submission starts in is kept behind a lock both sides can read.
#[derive(Debug, Clone)]
pub struct SharedState {
    /// State the next submission starts in
    start_state: Arc<RwLock<LexicalState>>,

    /// Output format for echoed token listings
    output_format: Arc<RwLock<OutputFormat>>,

    /// Color output setting
    color_enabled: Arc<RwLock<bool>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::with_config(&DisplayConfig::default())
    }

    /// Create a new shared state with display configuration.
    ///
    /// * `display_config` - Display configuration settings
    pub fn with_config(display_config: &DisplayConfig) -> Self {
        Self {
            start_state: Arc::new(RwLock::new(LexicalState::Root)),
            output_format: Arc::new(RwLock::new(display_config.format)),
            color_enabled: Arc::new(RwLock::new(display_config.color_output)),
        }
    }

    pub fn start_state(&self) -> LexicalState {
        *self
            .start_state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_start_state(&self, state: LexicalState) {
        *self
            .start_state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = state;
    }

    pub fn get_format(&self) -> OutputFormat {
        *self
            .output_format
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_format(&self, format: OutputFormat) {
        *self
            .output_format
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = format;
    }

    pub fn get_color_enabled(&self) -> bool {
        *self
            .color_enabled
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_color_enabled(&self, enabled: bool) {
        *self
            .color_enabled
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = enabled;
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let state = SharedState::new();
        let other = state.clone();

        other.set_start_state(LexicalState::Comment);
        other.set_format(OutputFormat::Json);
        other.set_color_enabled(false);

        assert_eq!(state.start_state(), LexicalState::Comment);
        assert_eq!(state.get_format(), OutputFormat::Json);
        assert!(!state.get_color_enabled());
    }

    #[test]
    fn test_with_config() {
        let display = DisplayConfig {
            format: OutputFormat::Table,
            color_output: false,
            ..DisplayConfig::default()
        };
        let state = SharedState::with_config(&display);
        assert_eq!(state.start_state(), LexicalState::Root);
        assert_eq!(state.get_format(), OutputFormat::Table);
        assert!(!state.get_color_enabled());
    }
}
