//! Syntax highlighter for the REPL buffer
//!
//! The buffer may span several lines; the lexical state is threaded from line
//! to line so an open block comment or string keeps its color. Line
//! terminators are reproduced exactly so cursor positions stay aligned.

use std::sync::Arc;

use nu_ansi_term::Style;
use reedline::{Highlighter, StyledText};

use super::SharedState;
use crate::language::LanguageSupport;
use crate::theme::Theme;
use crate::tokenizer::LexicalState;

/// Highlighter backed by a registered language and a theme
pub struct SyntaxHighlighter {
    language: Arc<dyn LanguageSupport>,
    theme: Theme,
    enabled: bool,
    shared_state: Option<SharedState>,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter
    ///
    /// # Arguments
    /// * `language` - Language used to tokenize the buffer
    /// * `theme` - Colors per token class
    /// * `enabled` - When false the buffer is shown unstyled
    pub fn new(language: Arc<dyn LanguageSupport>, theme: Theme, enabled: bool) -> Self {
        Self {
            language,
            theme,
            enabled,
            shared_state: None,
        }
    }

    /// Start highlighting from the REPL's carried lexical state
    pub fn with_shared_state(mut self, shared_state: SharedState) -> Self {
        self.shared_state = Some(shared_state);
        self
    }

    /// Style the buffer starting from a given lexical state
    pub fn highlight_from(&self, buffer: &str, start: LexicalState) -> StyledText {
        let mut styled = StyledText::new();
        let mut state = start;

        for (index, segment) in buffer.split('\n').enumerate() {
            if index > 0 {
                styled.push((Style::default(), "\n".to_string()));
            }

            let (line, carriage_return) = match segment.strip_suffix('\r') {
                Some(line) => (line, true),
                None => (segment, false),
            };

            let (tokens, end_state) = self.language.tokenize_line(line, state);
            for token in &tokens {
                styled.push((self.theme.style_for(token.class), token.text(line).to_string()));
            }
            state = end_state;

            if carriage_return {
                styled.push((Style::default(), "\r".to_string()));
            }
        }

        styled
    }
}

impl Highlighter for SyntaxHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        if !self.enabled {
            let mut styled = StyledText::new();
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let start = self
            .shared_state
            .as_ref()
            .map_or(LexicalState::Root, SharedState::start_state);
        self.highlight_from(line, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::HlslLanguage;
    use nu_ansi_term::Color;

    fn highlighter(enabled: bool) -> SyntaxHighlighter {
        SyntaxHighlighter::new(Arc::new(HlslLanguage::new()), Theme::default(), enabled)
    }

    fn text_of(styled: &StyledText) -> String {
        styled.buffer.iter().map(|(_, text)| text.as_str()).collect()
    }

    #[test]
    fn test_buffer_reproduced_exactly() {
        let buffer = "struct v2f {\r\n\tfloat4 pos : SV_Position; /* open\n still */ }";
        let styled = highlighter(true).highlight(buffer, 0);
        assert_eq!(text_of(&styled), buffer);
    }

    #[test]
    fn test_keyword_colored_from_theme() {
        let styled = highlighter(true).highlight("return x;", 0);
        let (style, text) = &styled.buffer[0];
        assert_eq!(text, "return");
        assert_eq!(style.foreground, Some(Color::Rgb(0x56, 0x9C, 0xD6)));
    }

    #[test]
    fn test_state_threads_across_lines() {
        let styled = highlighter(true).highlight("/* a\nint b */", 0);
        let comment = Theme::default().style_for(crate::tokenizer::TokenClass::Comment);
        let second_line = styled
            .buffer
            .iter()
            .skip_while(|(_, text)| text != "\n")
            .nth(1);
        assert_eq!(second_line.map(|(style, _)| *style), Some(comment));
    }

    #[test]
    fn test_disabled_is_plain() {
        let styled = highlighter(false).highlight("int x;", 0);
        assert_eq!(styled.buffer.len(), 1);
        assert_eq!(styled.buffer[0].0, Style::default());
    }

    #[test]
    fn test_shared_start_state() {
        let shared = SharedState::new();
        let highlighter = highlighter(true).with_shared_state(shared.clone());
        shared.set_start_state(LexicalState::Comment);
        let styled = highlighter.highlight("still */ int", 0);
        let comment = Theme::default().style_for(crate::tokenizer::TokenClass::Comment);
        assert_eq!(styled.buffer[0], (comment, "still */".to_string()));
    }

    #[test]
    fn test_highlight_from_string_state() {
        let styled = highlighter(true).highlight_from("tail\" x", LexicalState::String);
        assert_eq!(styled.buffer[0].1, "tail\"");
    }
}
