//! Validator for reedline - validates buffer completeness
//!
//! A buffer is incomplete while it ends inside a block comment or a string
//! literal continued with a trailing backslash; Enter then inserts a newline
//! instead of submitting.

use std::sync::Arc;

use reedline::{ValidationResult, Validator};

use super::SharedState;
use crate::language::LanguageSupport;
use crate::tokenizer::LexicalState;

/// Lexical-state based validator
pub struct HlslValidator {
    language: Arc<dyn LanguageSupport>,
    shared_state: Option<SharedState>,
}

impl HlslValidator {
    /// Create a new validator
    pub fn new(language: Arc<dyn LanguageSupport>) -> Self {
        Self {
            language,
            shared_state: None,
        }
    }

    /// Start validation from the REPL's carried lexical state
    pub fn with_shared_state(mut self, shared_state: SharedState) -> Self {
        self.shared_state = Some(shared_state);
        self
    }

    /// State the buffer ends in
    pub fn end_state(&self, buffer: &str) -> LexicalState {
        let start = self
            .shared_state
            .as_ref()
            .map_or(LexicalState::Root, SharedState::start_state);

        self.language
            .tokenize_document_from(buffer, start)
            .last()
            .map_or(start, |line| line.end_state)
    }
}

impl Validator for HlslValidator {
    /// Validate input for completeness
    ///
    /// # Arguments
    /// * `line` - The buffer to validate
    ///
    /// # Returns
    /// * `ValidationResult` - Incomplete while a comment or string is still open
    fn validate(&self, line: &str) -> ValidationResult {
        // Blank buffers and dot commands always submit
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('.') {
            return ValidationResult::Complete;
        }

        match self.end_state(line) {
            LexicalState::Comment | LexicalState::String => ValidationResult::Incomplete,
            LexicalState::Root | LexicalState::StructName => ValidationResult::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::HlslLanguage;

    fn validator() -> HlslValidator {
        HlslValidator::new(Arc::new(HlslLanguage::new()))
    }

    fn is_complete(input: &str) -> bool {
        matches!(validator().validate(input), ValidationResult::Complete)
    }

    #[test]
    fn test_empty_input() {
        assert!(is_complete(""));
        assert!(is_complete("   "));
    }

    #[test]
    fn test_simple_statement() {
        assert!(is_complete("float4 c = tex2D(_MainTex, i.uv);"));
        assert!(is_complete("struct"));
    }

    #[test]
    fn test_open_block_comment() {
        assert!(!is_complete("/* begin"));
        assert!(!is_complete("int x; /* a\nb"));
        assert!(is_complete("/* a\nb */"));
    }

    #[test]
    fn test_string_continuation() {
        assert!(!is_complete("\"line \\"));
        assert!(is_complete("\"line \\\nend\""));
        // An unterminated string without continuation stays on its line.
        assert!(is_complete("x = \"abc"));
    }

    #[test]
    fn test_shared_start_state() {
        let shared = SharedState::new();
        let validator = validator().with_shared_state(shared.clone());
        shared.set_start_state(LexicalState::Comment);
        assert!(matches!(validator.validate("still open"), ValidationResult::Incomplete));
        assert!(matches!(validator.validate("done */"), ValidationResult::Complete));
        assert!(matches!(validator.validate(".reset"), ValidationResult::Complete));
    }

    #[test]
    fn test_trailing_newline_keeps_state() {
        assert_eq!(validator().end_state("/* a\n"), LexicalState::Comment);
    }
}
