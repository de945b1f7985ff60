//! HLSL Syntax Engine Library
//!
//! This library provides editor-facing language support for HLSL shader
//! source: a line tokenizer that carries lexical state between lines, a
//! context-free completion provider, and a color theme keyed by token scope.
//! Editor hosts bind it through [`language::LanguageRegistry`].
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Completion candidates, snippets and prefix ranking
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `formatter`: Output formatting and display
//! - `language`: Language registration by id and file extension
//! - `repl`: Interactive scratchpad with live highlighting
//! - `symbols`: HLSL vocabularies (keywords, types, semantics, ...)
//! - `theme`: Scope to color mapping
//! - `tokenizer`: State-machine line tokenizer
//!
//! # Example
//!
//! ```
//! use hlsl_syntax::language::{HlslLanguage, LanguageRegistry};
//! use hlsl_syntax::tokenizer::LexicalState;
//!
//! let registry = LanguageRegistry::with_hlsl(HlslLanguage::new());
//! let hlsl = registry.for_extension("hlsl").unwrap();
//!
//! let (tokens, state) = hlsl.tokenize_line("float4 c; /* open", LexicalState::Root);
//! assert!(!tokens.is_empty());
//! assert_eq!(state, LexicalState::Comment);
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod formatter;
pub mod language;
pub mod repl;
pub mod symbols;
pub mod theme;
pub mod tokenizer;

// Re-export commonly used types
pub use completion::{CandidateCategory, CompletionCandidate, CompletionEngine, Cursor};
pub use config::Config;
pub use error::{HlslError, Result};
pub use formatter::Formatter;
pub use language::{HlslLanguage, LanguageRegistry, LanguageSupport};
pub use repl::ReplEngine;
pub use theme::Theme;
pub use tokenizer::{LexicalState, Token, TokenClass, TokenLine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
