//! Custom prompt implementation for the HLSL scratchpad

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

use crate::tokenizer::LexicalState;

/// Prompt showing the language and any carried lexical state
pub struct HlslPrompt {
    /// Language id shown before the `>`
    language: String,
    /// State the next submission starts in
    state: LexicalState,
}

impl HlslPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `language` - Language id (e.g. "hlsl")
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            state: LexicalState::Root,
        }
    }

    pub fn set_state(&mut self, state: LexicalState) {
        self.state = state;
    }
}

impl Prompt for HlslPrompt {
    /// Render the left prompt, e.g. `hlsl> ` or `hlsl[comment]> `
    fn render_prompt_left(&self) -> Cow<'_, str> {
        match self.state {
            LexicalState::Root => format!("{}> ", self.language).into(),
            state => format!("{}[{}]> ", self.language, state).into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prompt() {
        let prompt = HlslPrompt::new("hlsl");
        assert_eq!(prompt.render_prompt_left(), "hlsl> ");
    }

    #[test]
    fn test_carried_state_prompt() {
        let mut prompt = HlslPrompt::new("hlsl");
        prompt.set_state(LexicalState::Comment);
        assert_eq!(prompt.render_prompt_left(), "hlsl[comment]> ");
        prompt.set_state(LexicalState::Root);
        assert_eq!(prompt.render_prompt_left(), "hlsl> ");
    }

    #[test]
    fn test_indicators() {
        let prompt = HlslPrompt::new("hlsl");
        assert_eq!(prompt.render_prompt_right(), "");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), "");
        assert_eq!(prompt.render_prompt_multiline_indicator(), "... ");
    }
}
