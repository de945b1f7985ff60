//! Completion system for HLSL
//!
//! Completion here is context-free: whatever word sits under the cursor, the
//! engine offers the same static universe of candidates. Narrowing by prefix
//! is left to the host (the REPL completer ranks with the shared
//! [`filter_by_prefix`] helper).
//!
//! # Architecture
//!
//! - **Provider**: Supplies the candidates of each category
//! - **Engine**: Concatenates the categories in a fixed order
//!
//! # Examples
//!
//! ```
//! use hlsl_syntax::completion::{CandidateCategory, Cursor, complete};
//!
//! let candidates = complete("le", Cursor::default());
//! let lerp = candidates.iter().find(|c| c.label == "lerp").unwrap();
//! assert_eq!(lerp.category, CandidateCategory::Function);
//! assert_eq!(lerp.insert_text, "lerp(${1:a}, ${2:b}, ${3:t})$0");
//! ```

mod engine;
mod provider;

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

pub use engine::CompletionEngine;
pub use provider::{CandidateProvider, FunctionSignature, HlslCandidateProvider};

/// Grouping of a completion candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateCategory {
    Keyword,
    Type,
    Function,
    Semantic,
    Snippet,
}

impl CandidateCategory {
    /// Categories in the order the engine emits them
    pub const ORDER: [CandidateCategory; 5] = [
        CandidateCategory::Keyword,
        CandidateCategory::Type,
        CandidateCategory::Function,
        CandidateCategory::Semantic,
        CandidateCategory::Snippet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CandidateCategory::Keyword => "keyword",
            CandidateCategory::Type => "type",
            CandidateCategory::Function => "function",
            CandidateCategory::Semantic => "semantic",
            CandidateCategory::Snippet => "snippet",
        }
    }
}

impl fmt::Display for CandidateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single completion suggestion
///
/// `insert_text` uses `${n:name}` placeholders and a final `$0` cursor marker
/// for functions and snippets; other categories insert their label verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionCandidate {
    pub label: String,
    pub category: CandidateCategory,
    pub insert_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl CompletionCandidate {
    /// Candidate that inserts its own label
    pub fn plain(category: CandidateCategory, label: &str, documentation: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            category,
            insert_text: label.to_string(),
            documentation: documentation.map(str::to_string),
        }
    }

    /// Whether `insert_text` must be expanded as a snippet by the host
    pub fn is_snippet(&self) -> bool {
        matches!(
            self.category,
            CandidateCategory::Function | CandidateCategory::Snippet
        )
    }

    /// Number of distinct numbered placeholders, not counting `$0`
    pub fn placeholder_count(&self) -> usize {
        let mut seen = BTreeSet::new();
        let mut rest = self.insert_text.as_str();

        while let Some(at) = rest.find('$') {
            rest = &rest[at + 1..];
            let body = rest.strip_prefix('{').unwrap_or(rest);
            let digits = body.bytes().take_while(u8::is_ascii_digit).count();
            if let Some(number) = body[..digits].parse::<u32>().ok().filter(|&n| n > 0) {
                seen.insert(number);
            }
        }

        seen.len()
    }

    /// Insert text with placeholders replaced by their default names
    ///
    /// Hosts without snippet support can insert this instead.
    pub fn plain_insert_text(&self) -> String {
        let mut out = String::with_capacity(self.insert_text.len());
        let mut rest = self.insert_text.as_str();

        while let Some(at) = rest.find('$') {
            out.push_str(&rest[..at]);
            rest = &rest[at + 1..];

            if let Some(body) = rest.strip_prefix('{') {
                match body.find('}') {
                    Some(end) => {
                        let inner = &body[..end];
                        out.push_str(inner.split_once(':').map_or("", |(_, name)| name));
                        rest = &body[end + 1..];
                    }
                    None => {
                        out.push('$');
                    }
                }
            } else {
                let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                if digits == 0 {
                    out.push('$');
                }
                rest = &rest[digits..];
            }
        }

        out.push_str(rest);
        out
    }
}

/// Position of the cursor in the host's buffer
///
/// Accepted for interface compatibility; completion does not depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Produce all candidates with the built-in provider
///
/// # Arguments
/// * `partial_word` - Word being typed (ignored; the result is context-free)
/// * `cursor` - Cursor position (ignored)
///
/// # Returns
/// * `Vec<CompletionCandidate>` - Keyword, Type, Function, Semantic and Snippet candidates, in that order
pub fn complete(partial_word: &str, cursor: Cursor) -> Vec<CompletionCandidate> {
    CompletionEngine::default().complete(partial_word, cursor)
}

/// Filter candidates by label prefix and rank them
///
/// Exact matches come first, then shorter labels, then labels in
/// alphabetical order. The sort is stable, so candidates that tie keep the
/// engine's category order.
pub fn filter_by_prefix(candidates: Vec<CompletionCandidate>, prefix: &str) -> Vec<CompletionCandidate> {
    let mut filtered: Vec<CompletionCandidate> = if prefix.is_empty() {
        candidates
    } else {
        candidates
            .into_iter()
            .filter(|candidate| candidate.label.starts_with(prefix))
            .collect()
    };

    filtered.sort_by(|a, b| {
        if !prefix.is_empty() {
            let a_exact = a.label == prefix;
            let b_exact = b.label == prefix;
            if a_exact != b_exact {
                return b_exact.cmp(&a_exact);
            }
        }

        a.label
            .len()
            .cmp(&b.label.len())
            .then_with(|| a.label.cmp(&b.label))
    });

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(label: &str) -> CompletionCandidate {
        CompletionCandidate::plain(CandidateCategory::Keyword, label, None)
    }

    fn labels(candidates: &[CompletionCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_placeholder_count() {
        let mut lerp = candidate("lerp");
        lerp.insert_text = "lerp(${1:a}, ${2:b}, ${3:t})$0".to_string();
        assert_eq!(lerp.placeholder_count(), 3);

        let mut repeated = candidate("x");
        repeated.insert_text = "${1:a} + ${1:a} $2$0".to_string();
        assert_eq!(repeated.placeholder_count(), 2);

        assert_eq!(candidate("return").placeholder_count(), 0);
    }

    #[test]
    fn test_plain_insert_text() {
        let mut lerp = candidate("lerp");
        lerp.insert_text = "lerp(${1:a}, ${2:b}, ${3:t})$0".to_string();
        assert_eq!(lerp.plain_insert_text(), "lerp(a, b, t)");

        let mut price = candidate("x");
        price.insert_text = "cost $ 5".to_string();
        assert_eq!(price.plain_insert_text(), "cost $ 5");
    }

    #[test]
    fn test_is_snippet_by_category() {
        assert!(!candidate("if").is_snippet());
        let function = CompletionCandidate {
            category: CandidateCategory::Function,
            ..candidate("dot")
        };
        assert!(function.is_snippet());
    }

    #[test]
    fn test_filter_matching_prefix() {
        let items = vec![candidate("alpha"), candidate("beta"), candidate("gamma")];
        let filtered = filter_by_prefix(items, "a");
        assert_eq!(labels(&filtered), vec!["alpha"]);
    }

    #[test]
    fn test_filter_empty_prefix_keeps_all() {
        let items = vec![candidate("users"), candidate("tasks"), candidate("notes")];
        let filtered = filter_by_prefix(items, "");
        assert_eq!(labels(&filtered), vec!["notes", "tasks", "users"]);
    }

    #[test]
    fn test_exact_then_shorter_then_alphabetical() {
        let items = vec![
            candidate("float4x4"),
            candidate("float2"),
            candidate("floor"),
            candidate("float"),
            candidate("float4"),
        ];
        let filtered = filter_by_prefix(items, "float");
        assert_eq!(
            labels(&filtered),
            vec!["float", "float2", "float4", "float4x4"]
        );
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&CandidateCategory::Semantic).unwrap();
        assert_eq!(json, "\"semantic\"");
    }
}
