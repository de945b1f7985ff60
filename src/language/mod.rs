//! Language registration
//!
//! A host binds a language by id and file extension, then asks the bound
//! implementation for line tokens and completion candidates. `HlslLanguage`
//! is the only implementation shipped; the registry is open to others.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::completion::{CompletionCandidate, CompletionEngine, Cursor};
use crate::symbols::SymbolTable;
use crate::tokenizer::{self, LexicalState, Token, TokenLine};

/// Language id under which HLSL registers
pub const HLSL_LANGUAGE_ID: &str = "hlsl";

/// File extensions (without dots) handled by HLSL
pub const HLSL_EXTENSIONS: &[&str] = &["hlsl", "hlsli", "fx", "fxh", "cginc", "compute", "shader"];

/// Capabilities a host can bind for one language
pub trait LanguageSupport: Send + Sync {
    /// Stable language id (e.g. "hlsl")
    fn id(&self) -> &str;

    /// File extensions this language handles (without dots)
    fn extensions(&self) -> &[&'static str];

    /// Tokenize a single line. Returns `(tokens, state_after)`.
    fn tokenize_line(&self, line: &str, state: LexicalState) -> (Vec<Token>, LexicalState);

    /// Completion candidates for the word under the cursor
    fn complete(&self, partial_word: &str, cursor: Cursor) -> Vec<CompletionCandidate>;

    /// Tokenize a full buffer from the root state
    fn tokenize_document(&self, text: &str) -> Vec<TokenLine> {
        self.tokenize_document_from(text, LexicalState::Root)
    }

    /// Tokenize a full buffer line by line, threading the state from `start`
    fn tokenize_document_from(&self, text: &str, start: LexicalState) -> Vec<TokenLine> {
        let mut state = start;
        tokenizer::split_lines(text)
            .into_iter()
            .map(|line| {
                let (tokens, end_state) = self.tokenize_line(line, state);
                state = end_state;
                TokenLine { tokens, end_state }
            })
            .collect()
    }
}

/// HLSL bound to a symbol table
#[derive(Clone)]
pub struct HlslLanguage {
    symbols: Arc<SymbolTable>,
    completion: CompletionEngine,
}

impl HlslLanguage {
    /// HLSL with the built-in symbol table
    pub fn new() -> Self {
        Self::with_symbols(Arc::new(SymbolTable::default()))
    }

    /// HLSL with a derived symbol table (e.g. extra custom types)
    pub fn with_symbols(symbols: Arc<SymbolTable>) -> Self {
        Self {
            symbols,
            completion: CompletionEngine::default(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

impl Default for HlslLanguage {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSupport for HlslLanguage {
    fn id(&self) -> &str {
        HLSL_LANGUAGE_ID
    }

    fn extensions(&self) -> &[&'static str] {
        HLSL_EXTENSIONS
    }

    fn tokenize_line(&self, line: &str, state: LexicalState) -> (Vec<Token>, LexicalState) {
        tokenizer::tokenize_with(&self.symbols, line, state)
    }

    fn complete(&self, partial_word: &str, cursor: Cursor) -> Vec<CompletionCandidate> {
        self.completion.complete(partial_word, cursor)
    }

    fn tokenize_document_from(&self, text: &str, start: LexicalState) -> Vec<TokenLine> {
        tokenizer::tokenize_document_with(&self.symbols, text, start)
    }
}

/// Languages installed by id and file extension
///
/// Lookups are case-insensitive; extensions may be given with or without a
/// leading dot. Later registrations override earlier ones.
#[derive(Default, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Arc<dyn LanguageSupport>>,
    by_extension: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with HLSL already installed
    pub fn with_hlsl(language: HlslLanguage) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(language));
        registry
    }

    /// Install a language under its id and extensions
    pub fn register(&mut self, language: Arc<dyn LanguageSupport>) {
        let index = self.languages.len();
        self.by_id.insert(language.id().to_ascii_lowercase(), index);
        for ext in language.extensions() {
            let key = normalize_extension(ext);
            if !key.is_empty() {
                self.by_extension.insert(key, index);
            }
        }

        debug!(
            "Registered language '{}' for extensions {:?}",
            language.id(),
            language.extensions()
        );
        self.languages.push(language);
    }

    /// Look up a language by id
    pub fn by_id(&self, id: &str) -> Option<Arc<dyn LanguageSupport>> {
        let index = self.by_id.get(&id.to_ascii_lowercase())?;
        self.languages.get(*index).cloned()
    }

    /// Look up a language by file extension
    pub fn for_extension(&self, ext: &str) -> Option<Arc<dyn LanguageSupport>> {
        let index = self.by_extension.get(&normalize_extension(ext))?;
        self.languages.get(*index).cloned()
    }

    /// Look up a language from a file path's extension
    pub fn for_path(&self, path: &std::path::Path) -> Option<Arc<dyn LanguageSupport>> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.for_extension(ext))
    }

    /// Ids of the registered languages, in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.languages.iter().map(|language| language.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::TokenClass;
    use std::path::Path;

    #[test]
    fn test_lookup_by_id_and_extension() {
        let registry = LanguageRegistry::with_hlsl(HlslLanguage::new());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.by_id("HLSL").map(|l| l.id().to_string()), Some("hlsl".to_string()));
        assert!(registry.for_extension(".CGINC").is_some());
        assert!(registry.for_extension("shader").is_some());
        assert!(registry.for_extension("glsl").is_none());
        assert!(registry.for_path(Path::new("shaders/Lit.hlsl")).is_some());
        assert!(registry.for_path(Path::new("README")).is_none());
    }

    #[test]
    fn test_bound_language_uses_its_symbols() {
        let symbols = Arc::new(SymbolTable::with_custom_types(["Surface"]));
        let registry = LanguageRegistry::with_hlsl(HlslLanguage::with_symbols(symbols));
        let language = registry.by_id("hlsl").unwrap();

        let (tokens, state) = language.tokenize_line("Surface s;", LexicalState::Root);
        assert_eq!(tokens[0].class, TokenClass::TypeCustom);
        assert_eq!(state, LexicalState::Root);
    }

    #[test]
    fn test_document_and_completion_through_trait() {
        let language = HlslLanguage::new();
        let lines = language.tokenize_document("/* a\nb */ int x;");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].end_state, LexicalState::Comment);
        assert_eq!(lines[1].tokens[0].class, TokenClass::Comment);

        let candidates = language.complete("sa", Cursor::default());
        assert!(candidates.iter().any(|c| c.label == "saturate"));
    }

    #[test]
    fn test_later_registration_overrides() {
        let mut registry = LanguageRegistry::new();
        registry.register(Arc::new(HlslLanguage::new()));
        let custom = HlslLanguage::with_symbols(Arc::new(SymbolTable::with_custom_types(["Late"])));
        registry.register(Arc::new(custom));

        let language = registry.for_extension("hlsl").unwrap();
        let (tokens, _) = language.tokenize_line("Late", LexicalState::Root);
        assert_eq!(tokens[0].class, TokenClass::TypeCustom);
        assert_eq!(registry.ids(), vec!["hlsl", "hlsl"]);
    }
}
