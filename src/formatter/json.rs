//! JSON formatting for tokens and completion candidates
//!
//! Output is built from small serializable views so the JSON shape stays
//! stable and independent of the engine's internal types:
//!
//! ```json
//! [{ "line": 1, "end_state": "root",
//!    "tokens": [{ "start": 0, "end": 6, "class": "keyword", "text": "struct" }] }]
//! ```

use colored_json::prelude::*;
use serde::Serialize;

use crate::completion::CompletionCandidate;
use crate::error::Result;
use crate::tokenizer::{LexicalState, TokenClass, TokenLine};

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Enable colored output
    use_colors: bool,
}

#[derive(Serialize)]
struct TokenView<'a> {
    start: usize,
    end: usize,
    class: TokenClass,
    text: &'a str,
}

#[derive(Serialize)]
struct LineView<'a> {
    line: usize,
    end_state: LexicalState,
    tokens: Vec<TokenView<'a>>,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Enable pretty printing
    /// * `use_colors` - Enable colored output
    pub fn new(pretty: bool, use_colors: bool) -> Self {
        Self { pretty, use_colors }
    }

    /// Format tokenized lines as a JSON array
    ///
    /// # Arguments
    /// * `source` - Source lines, parallel to `lines`
    /// * `lines` - Tokenization result per line
    ///
    /// # Returns
    /// * `Result<String>` - JSON string or error
    pub fn format_lines(&self, source: &[&str], lines: &[TokenLine]) -> Result<String> {
        let views: Vec<LineView<'_>> = source
            .iter()
            .zip(lines)
            .enumerate()
            .map(|(index, (text, line))| LineView {
                line: index + 1,
                end_state: line.end_state,
                tokens: line
                    .tokens
                    .iter()
                    .map(|token| TokenView {
                        start: token.range.start,
                        end: token.range.end,
                        class: token.class,
                        text: token.text(text),
                    })
                    .collect(),
            })
            .collect();

        self.format_value(&views)
    }

    /// Format completion candidates as a JSON array
    pub fn format_candidates(&self, candidates: &[CompletionCandidate]) -> Result<String> {
        self.format_value(candidates)
    }

    /// Format any serializable value
    pub fn format_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json_str = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        // Compact JSON stays uncolored for piping
        if self.use_colors && self.pretty {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::{Cursor, complete};
    use crate::tokenizer::{split_lines, tokenize_document};

    #[test]
    fn test_format_lines() {
        let text = "struct v2f {\n/* open";
        let lines = tokenize_document(text);
        let output = JsonFormatter::new(false, false)
            .format_lines(&split_lines(text), &lines)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["line"], 1);
        assert_eq!(value[0]["end_state"], "root");
        assert_eq!(value[0]["tokens"][0]["class"], "keyword");
        assert_eq!(value[0]["tokens"][2]["class"], "type.struct");
        assert_eq!(value[0]["tokens"][2]["text"], "v2f");
        assert_eq!(value[1]["end_state"], "comment");
    }

    #[test]
    fn test_whitespace_scope_name() {
        let lines = tokenize_document(" ");
        let output = JsonFormatter::new(false, false)
            .format_lines(&[" "], &lines)
            .unwrap();
        assert!(output.contains("\"class\":\"white\""));
    }

    #[test]
    fn test_format_candidates() {
        let candidates = complete("", Cursor::default());
        let output = JsonFormatter::new(true, false)
            .format_candidates(&candidates)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), candidates.len());
        assert_eq!(array[0]["category"], "keyword");
        assert!(array[0].get("documentation").is_none());
    }
}
