//! Interactive scratchpad for HLSL
//!
//! This module provides the REPL built on reedline:
//! - Live syntax highlighting through the tokenizer and theme
//! - Tab completion from the completion engine
//! - Multi-line entry while a block comment or string is open
//! - Persistent history
//! - Each submitted buffer echoed as a token listing

pub mod completer;
pub mod engine;
pub mod highlighter;
pub mod prompt;
pub mod shared_state;
pub mod validator;

pub use completer::HlslCompleter;
pub use engine::{ReplEngine, ReplSession};
pub use highlighter::SyntaxHighlighter;
pub use prompt::HlslPrompt;
pub use shared_state::SharedState;
pub use validator::HlslValidator;
