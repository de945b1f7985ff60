//! Output formatting and colorization for hlsl-syntax
//!
//! This module renders tokenization and completion results for the terminal:
//! - ANSI re-rendering of source with theme colors
//! - Plain text listing, one token per line
//! - JSON (compact or pretty, optionally colored)
//! - Tables via `tabled`

pub mod colorizer;
pub mod json;
pub mod table;

pub use colorizer::Colorizer;
pub use json::JsonFormatter;
pub use table::{TableFormatter, TableStyle};

use crate::completion::CompletionCandidate;
use crate::config::{DisplayConfig, OutputFormat};
use crate::error::Result;
use crate::theme::Theme;
use crate::tokenizer::{self, TokenLine};

/// Main formatter for tokenization and completion output
pub struct Formatter {
    /// Output format type
    format_type: OutputFormat,

    /// Colorizer for output highlighting
    colorizer: Colorizer,

    /// Enable colored output
    use_colors: bool,
}

impl Formatter {
    /// Create a new formatter
    ///
    /// # Arguments
    /// * `format_type` - Output format type
    /// * `use_colors` - Enable colored output
    /// * `theme` - Colors for token classes
    pub fn new(format_type: OutputFormat, use_colors: bool, theme: Theme) -> Self {
        Self {
            format_type,
            colorizer: Colorizer::with_theme(use_colors, theme),
            use_colors,
        }
    }

    /// Create a formatter from display configuration
    pub fn from_config(config: &DisplayConfig, theme: Theme) -> Self {
        Self::new(config.format, config.color_output, theme)
    }

    pub fn format_type(&self) -> OutputFormat {
        self.format_type
    }

    pub fn colorizer(&self) -> &Colorizer {
        &self.colorizer
    }

    /// Format a tokenized buffer according to the configured format
    ///
    /// # Arguments
    /// * `text` - The buffer that was tokenized
    /// * `lines` - One result per line of `text`
    ///
    /// # Returns
    /// * `Result<String>` - Formatted output or error
    pub fn format_document(&self, text: &str, lines: &[TokenLine]) -> Result<String> {
        let source = tokenizer::split_lines(text);

        match self.format_type {
            OutputFormat::Ansi => Ok(self.format_ansi(&source, lines)),
            OutputFormat::Text => Ok(self.format_text(&source, lines)),
            OutputFormat::Json => {
                JsonFormatter::new(true, self.use_colors).format_lines(&source, lines)
            }
            OutputFormat::Table => {
                Ok(TableFormatter::with_colors(self.use_colors).format_lines(&source, lines))
            }
        }
    }

    /// Format completion candidates
    ///
    /// ANSI and text formats share the plain listing.
    pub fn format_candidates(&self, candidates: &[CompletionCandidate]) -> Result<String> {
        match self.format_type {
            OutputFormat::Ansi | OutputFormat::Text => Ok(self.format_candidate_list(candidates)),
            OutputFormat::Json => {
                JsonFormatter::new(true, self.use_colors).format_candidates(candidates)
            }
            OutputFormat::Table => {
                Ok(TableFormatter::with_colors(self.use_colors).format_candidates(candidates))
            }
        }
    }

    /// Source lines painted with theme colors
    fn format_ansi(&self, source: &[&str], lines: &[TokenLine]) -> String {
        source
            .iter()
            .zip(lines)
            .map(|(text, line)| self.colorizer.paint_line(text, &line.tokens))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One token per line: `line:start..end  class  "text"`
    fn format_text(&self, source: &[&str], lines: &[TokenLine]) -> String {
        let mut out = Vec::new();

        for (index, (text, line)) in source.iter().zip(lines).enumerate() {
            for token in &line.tokens {
                let position = format!("{}:{}..{}", index + 1, token.range.start, token.range.end);
                out.push(format!(
                    "{:<12} {:<22} {:?}",
                    position,
                    token.class.scope(),
                    token.text(text)
                ));
            }
            if line.end_state != tokenizer::LexicalState::Root {
                out.push(self.colorizer.dim(&format!("{:<12} -> {}", "", line.end_state)));
            }
        }

        out.join("\n")
    }

    fn format_candidate_list(&self, candidates: &[CompletionCandidate]) -> String {
        candidates
            .iter()
            .map(|candidate| {
                let label = format!("{:<24} {:<9}", candidate.label, candidate.category);
                match &candidate.documentation {
                    Some(doc) => format!("{label} {}", self.colorizer.dim(doc)),
                    None => label.trim_end().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default(), Theme::default())
    }
}
