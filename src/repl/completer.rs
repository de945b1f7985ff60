//! Completer for reedline - provides completion suggestions
//!
//! The language returns its whole candidate list; this host narrows it to the
//! word before the cursor and ranks what is left.

use std::sync::Arc;

use reedline::{Completer, Span, Suggestion};

use crate::completion::{Cursor, filter_by_prefix};
use crate::language::LanguageSupport;

/// HLSL completer for reedline
pub struct HlslCompleter {
    language: Arc<dyn LanguageSupport>,
}

impl HlslCompleter {
    /// Create a new completer
    ///
    /// # Arguments
    /// * `language` - Language supplying candidates
    pub fn new(language: Arc<dyn LanguageSupport>) -> Self {
        Self { language }
    }
}

/// Byte offset where the identifier ending at `pos` starts
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
        .last()
        .map_or(pos, |(i, _)| i)
}

/// Line and column (in bytes) of `pos` within a multi-line buffer
fn cursor_at(line: &str, pos: usize) -> Cursor {
    let before = &line[..pos];
    let row = before.matches('\n').count();
    let column = before.rfind('\n').map_or(pos, |nl| pos - nl - 1);
    Cursor::new(row, column)
}

impl Completer for HlslCompleter {
    /// Complete the word before the cursor
    ///
    /// # Arguments
    /// * `line` - The input buffer
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - List of completion suggestions
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let pos = pos.min(line.len());
        if !line.is_char_boundary(pos) {
            return Vec::new();
        }

        let start = word_start(line, pos);
        let prefix = &line[start..pos];

        let mut candidates =
            filter_by_prefix(self.language.complete(prefix, cursor_at(line, pos)), prefix);

        // Nothing to insert for a word that is already complete
        if !prefix.is_empty() {
            candidates.retain(|candidate| candidate.insert_text != prefix);
        }

        candidates
            .into_iter()
            .map(|candidate| Suggestion {
                value: candidate.plain_insert_text(),
                description: Some(
                    candidate
                        .documentation
                        .clone()
                        .unwrap_or_else(|| candidate.category.to_string()),
                ),
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: false,
                match_indices: None,
            })
            .collect()
    }
}
