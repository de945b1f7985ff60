//! Completion engine - assembles candidates from a provider

use std::sync::Arc;

use super::provider::{CandidateProvider, HlslCandidateProvider};
use super::{CompletionCandidate, Cursor};

/// Main completion engine
#[derive(Clone)]
pub struct CompletionEngine {
    /// Candidate provider for fetching suggestions
    provider: Arc<dyn CandidateProvider>,
}

impl CompletionEngine {
    /// Create a new completion engine
    ///
    /// # Arguments
    /// * `provider` - Candidate provider for fetching suggestions
    pub fn new(provider: Arc<dyn CandidateProvider>) -> Self {
        Self { provider }
    }

    /// Produce the candidate list
    ///
    /// The word and cursor do not influence the result; every call returns
    /// the same candidates in category order.
    ///
    /// # Arguments
    /// * `_partial_word` - Word being typed
    /// * `_cursor` - Cursor position in the host buffer
    ///
    /// # Returns
    /// * `Vec<CompletionCandidate>` - Fresh candidates owned by the caller
    pub fn complete(&self, _partial_word: &str, _cursor: Cursor) -> Vec<CompletionCandidate> {
        let mut candidates = self.provider.keywords();
        candidates.extend(self.provider.types());
        candidates.extend(self.provider.functions());
        candidates.extend(self.provider.semantics());
        candidates.extend(self.provider.snippets());
        candidates
    }
}

impl Default for CompletionEngine {
    fn default() -> Self {
        Self::new(Arc::new(HlslCandidateProvider::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CandidateCategory;

    #[test]
    fn test_categories_in_fixed_order() {
        let candidates = CompletionEngine::default().complete("", Cursor::default());

        let mut order: Vec<CandidateCategory> = candidates.iter().map(|c| c.category).collect();
        order.dedup();
        assert_eq!(order, CandidateCategory::ORDER.to_vec());
    }

    #[test]
    fn test_result_is_context_free() {
        let engine = CompletionEngine::default();
        let empty = engine.complete("", Cursor::default());
        assert_eq!(empty, engine.complete("lerp", Cursor::new(12, 4)));
        assert_eq!(empty, engine.complete("zzz", Cursor::new(0, 100)));
    }

    #[test]
    fn test_contains_expected_candidates() {
        let candidates = CompletionEngine::default().complete("", Cursor::default());
        let find = |label: &str, category| {
            candidates
                .iter()
                .find(|c| c.label == label && c.category == category)
        };

        assert_eq!(find("return", CandidateCategory::Keyword).map(|c| c.insert_text.as_str()), Some("return"));
        assert!(find("float4x4", CandidateCategory::Type).is_some());
        assert!(find("SV_Target", CandidateCategory::Semantic).is_some());

        let lerp = find("lerp", CandidateCategory::Function).unwrap();
        assert_eq!(lerp.placeholder_count(), 3);
        assert!(lerp.is_snippet());

        // `struct` is offered both as a keyword and as a snippet.
        assert!(find("struct", CandidateCategory::Keyword).is_some());
        assert!(find("struct", CandidateCategory::Snippet).is_some());
    }

    struct EmptyProvider;

    impl CandidateProvider for EmptyProvider {
        fn keywords(&self) -> Vec<CompletionCandidate> {
            Vec::new()
        }
        fn types(&self) -> Vec<CompletionCandidate> {
            Vec::new()
        }
        fn functions(&self) -> Vec<CompletionCandidate> {
            Vec::new()
        }
        fn semantics(&self) -> Vec<CompletionCandidate> {
            Vec::new()
        }
        fn snippets(&self) -> Vec<CompletionCandidate> {
            vec![CompletionCandidate::plain(
                CandidateCategory::Snippet,
                "only",
                None,
            )]
        }
    }

    #[test]
    fn test_custom_provider() {
        let engine = CompletionEngine::new(Arc::new(EmptyProvider));
        let candidates = engine.complete("", Cursor::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].label, "only");
    }
}
