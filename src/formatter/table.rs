//! Table formatting for tokens and candidates using tabled
//!
//! One row per token (line, byte range, class, text) or per candidate
//! (label, category, insert text). Control characters in cell text are
//! escaped so tabs and newlines cannot break the layout.

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Color, Modify, Style, object::Columns, object::Rows, width::Width},
};

use crate::completion::CompletionCandidate;
use crate::tokenizer::TokenLine;

/// Maximum width for a single column (characters)
const DEFAULT_MAX_COLUMN_WIDTH: usize = 40;

/// Table formatter
pub struct TableFormatter {
    /// Maximum column width
    max_column_width: usize,

    /// Table style
    style: TableStyle,

    /// Enable colored output
    use_colors: bool,
}

/// Available table styles
#[derive(Debug, Clone, Copy)]
pub enum TableStyle {
    /// Modern style with box-drawing characters
    Modern,
    /// ASCII style with basic characters
    Ascii,
    /// Markdown style
    Markdown,
}

impl TableFormatter {
    /// Create a new table formatter with default settings
    pub fn new() -> Self {
        Self {
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            style: TableStyle::Modern,
            use_colors: false,
        }
    }

    /// Create a new table formatter with color support
    ///
    /// # Arguments
    /// * `use_colors` - Enable colored header
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Set the table style
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Set maximum column width
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width;
        self
    }

    /// Format tokenized lines as a table
    ///
    /// # Arguments
    /// * `source` - Source lines, parallel to `lines`
    /// * `lines` - Tokenization result per line
    ///
    /// # Returns
    /// * `String` - Rendered table
    pub fn format_lines(&self, source: &[&str], lines: &[TokenLine]) -> String {
        let rows: Vec<Vec<String>> = source
            .iter()
            .zip(lines)
            .enumerate()
            .flat_map(|(index, (text, line))| {
                line.tokens.iter().map(move |token| {
                    vec![
                        (index + 1).to_string(),
                        format!("{}..{}", token.range.start, token.range.end),
                        token.class.to_string(),
                        escape_cell(token.text(text)),
                    ]
                })
            })
            .collect();

        if rows.is_empty() {
            return "(no tokens)".to_string();
        }

        self.build(&["line", "range", "class", "text"], rows)
    }

    /// Format completion candidates as a table
    pub fn format_candidates(&self, candidates: &[CompletionCandidate]) -> String {
        if candidates.is_empty() {
            return "(no candidates)".to_string();
        }

        let rows = candidates
            .iter()
            .map(|candidate| {
                vec![
                    candidate.label.clone(),
                    candidate.category.to_string(),
                    escape_cell(&candidate.insert_text),
                ]
            })
            .collect();

        self.build(&["label", "category", "insert text"], rows)
    }

    fn build(&self, header: &[&str], rows: Vec<Vec<String>>) -> String {
        let mut builder = Builder::default();
        builder.push_record(header.iter().map(|name| name.to_string()));
        for row in rows {
            builder.push_record(row);
        }

        let mut table = builder.build();
        self.apply_style(&mut table);

        for i in 0..header.len() {
            table.with(Modify::new(Columns::new(i..=i)).with(Width::wrap(self.max_column_width)));
        }

        table.with(Modify::new(Rows::first()).with(Alignment::center()));

        if self.use_colors {
            table.modify(Rows::first(), Color::FG_CYAN | Color::BOLD);
        }

        table.to_string()
    }

    /// Apply table style
    fn apply_style(&self, table: &mut Table) {
        match self.style {
            TableStyle::Modern => table.with(Style::modern()),
            TableStyle::Ascii => table.with(Style::ascii()),
            TableStyle::Markdown => table.with(Style::markdown()),
        };
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Make whitespace control characters visible
fn escape_cell(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
