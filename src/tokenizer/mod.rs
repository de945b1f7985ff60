//! Line tokenizer for HLSL
//!
//! The tokenizer turns one line of source into classified spans and reports the
//! lexical state the next line must start in. It is a pure function of the
//! line and the starting state: nothing else is carried between calls.
//!
//! # Design Principles
//!
//! - **Never fail** - malformed input degrades into `*Invalid` classes or the
//!   default `Identifier` class
//! - **Always progress** - every rule application consumes input or leaves a
//!   transient state; the root table ends in a single-character catch-all
//! - **Exact partition** - emitted spans cover the line with no gaps or overlaps
//!
//! # Example
//!
//! ```
//! use hlsl_syntax::tokenizer::{LexicalState, TokenClass, tokenize};
//!
//! let (tokens, state) = tokenize("struct v2f {", LexicalState::Root);
//! assert_eq!(tokens[0].class, TokenClass::Keyword);
//! assert_eq!(tokens[2].class, TokenClass::TypeStruct);
//! assert_eq!(state, LexicalState::Root);
//! ```

mod rules;
mod scanner;


use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::symbols::SymbolTable;
use scanner::Scanner;

/// Classification assigned to a span of source text
///
/// Each class has a lowercase dotted scope (`string.escape.invalid`) used as
/// the theme key and in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenClass {
    #[serde(rename = "white")]
    Whitespace,
    #[serde(rename = "comment")]
    Comment,
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "keyword.preprocessor")]
    KeywordPreprocessor,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string.escape")]
    StringEscape,
    #[serde(rename = "string.escape.invalid")]
    StringEscapeInvalid,
    #[serde(rename = "string.invalid")]
    StringInvalid,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "operator")]
    Operator,
    #[serde(rename = "delimiter")]
    Delimiter,
    #[serde(rename = "bracket")]
    Bracket,
    #[serde(rename = "constant")]
    Constant,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "type.struct")]
    TypeStruct,
    #[serde(rename = "type.custom")]
    TypeCustom,
    #[serde(rename = "semantic")]
    Semantic,
    #[serde(rename = "function.builtin")]
    FunctionBuiltin,
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "identifier")]
    Identifier,
}

impl TokenClass {
    /// Every class, in declaration order
    pub const ALL: [TokenClass; 20] = [
        TokenClass::Whitespace,
        TokenClass::Comment,
        TokenClass::Keyword,
        TokenClass::KeywordPreprocessor,
        TokenClass::String,
        TokenClass::StringEscape,
        TokenClass::StringEscapeInvalid,
        TokenClass::StringInvalid,
        TokenClass::Number,
        TokenClass::Operator,
        TokenClass::Delimiter,
        TokenClass::Bracket,
        TokenClass::Constant,
        TokenClass::Type,
        TokenClass::TypeStruct,
        TokenClass::TypeCustom,
        TokenClass::Semantic,
        TokenClass::FunctionBuiltin,
        TokenClass::Function,
        TokenClass::Identifier,
    ];

    /// Theme scope of this class
    pub fn scope(self) -> &'static str {
        match self {
            TokenClass::Whitespace => "white",
            TokenClass::Comment => "comment",
            TokenClass::Keyword => "keyword",
            TokenClass::KeywordPreprocessor => "keyword.preprocessor",
            TokenClass::String => "string",
            TokenClass::StringEscape => "string.escape",
            TokenClass::StringEscapeInvalid => "string.escape.invalid",
            TokenClass::StringInvalid => "string.invalid",
            TokenClass::Number => "number",
            TokenClass::Operator => "operator",
            TokenClass::Delimiter => "delimiter",
            TokenClass::Bracket => "bracket",
            TokenClass::Constant => "constant",
            TokenClass::Type => "type",
            TokenClass::TypeStruct => "type.struct",
            TokenClass::TypeCustom => "type.custom",
            TokenClass::Semantic => "semantic",
            TokenClass::FunctionBuiltin => "function.builtin",
            TokenClass::Function => "function",
            TokenClass::Identifier => "identifier",
        }
    }

    /// Whether this class marks malformed input
    pub fn is_invalid(self) -> bool {
        matches!(
            self,
            TokenClass::StringInvalid | TokenClass::StringEscapeInvalid
        )
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scope())
    }
}

impl FromStr for TokenClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scope = s.trim().to_ascii_lowercase();
        if scope == "whitespace" {
            return Ok(TokenClass::Whitespace);
        }
        TokenClass::ALL
            .into_iter()
            .find(|class| class.scope() == scope)
            .ok_or_else(|| format!("unknown token class '{s}'"))
    }
}

/// Lexical state carried from one line to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalState {
    /// Normal code
    #[default]
    Root,
    /// Inside a `/* ... */` block comment
    Comment,
    /// Inside a double-quoted string literal
    String,
    /// Right after `struct`, waiting for the type name
    StructName,
}

impl LexicalState {
    pub fn as_str(self) -> &'static str {
        match self {
            LexicalState::Root => "root",
            LexicalState::Comment => "comment",
            LexicalState::String => "string",
            LexicalState::StructName => "struct_name",
        }
    }
}

impl fmt::Display for LexicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LexicalState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "root" => Ok(LexicalState::Root),
            "comment" => Ok(LexicalState::Comment),
            "string" => Ok(LexicalState::String),
            "struct_name" | "struct-name" => Ok(LexicalState::StructName),
            other => Err(format!(
                "unknown lexical state '{other}' (expected root, comment, string or struct_name)"
            )),
        }
    }
}

/// Classified span of a line
///
/// `range` holds byte offsets into the tokenized line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub range: Range<usize>,
    pub class: TokenClass,
}

impl Token {
    /// Create a new token
    pub fn new(class: TokenClass, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "token range must be ordered");
        Self { range, class }
    }

    /// Extract the token's text from the line it was produced from
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range.clone()]
    }

    /// Token length in bytes
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    /// Whether the token covers no text
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Tokenization result of one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenLine {
    pub tokens: Vec<Token>,
    pub end_state: LexicalState,
}

/// Collects tokens, merging neighbours of the same class
///
/// Brackets are never merged so that each one stays addressable by the host.
#[derive(Default)]
struct TokenSink {
    tokens: Vec<Token>,
}

impl TokenSink {
    fn push(&mut self, class: TokenClass, range: Range<usize>) {
        if let Some(last) = self.tokens.last_mut() {
            if last.class == class && class != TokenClass::Bracket && last.range.end == range.start
            {
                last.range.end = range.end;
                return;
            }
        }
        self.tokens.push(Token::new(class, range));
    }

    fn finish(self) -> Vec<Token> {
        self.tokens
    }
}

/// Tokenize one line with the built-in symbol table
///
/// # Arguments
/// * `line` - Source line without its line terminator
/// * `start` - State the previous line ended in (`Root` for the first line)
///
/// # Returns
/// * `(Vec<Token>, LexicalState)` - Tokens partitioning `line` and the end state
pub fn tokenize(line: &str, start: LexicalState) -> (Vec<Token>, LexicalState) {
    tokenize_with(SymbolTable::global(), line, start)
}

/// Tokenize one line against a specific symbol table
pub fn tokenize_with(
    symbols: &SymbolTable,
    line: &str,
    start: LexicalState,
) -> (Vec<Token>, LexicalState) {
    let mut scanner = Scanner::new(line);
    let mut state = start;
    let mut sink = TokenSink::default();

    while !scanner.is_at_end() {
        let matched = rules::scan(state, &scanner, symbols);

        if matched.len > 0 {
            let start = scanner.pos();
            if let Some(class) = matched.class {
                sink.push(class, start..start + matched.len);
            }
            scanner.advance(matched.len);
        } else {
            debug_assert!(
                matched.next.is_some_and(|next| next != state),
                "empty match must change state"
            );
        }

        if let Some(next) = matched.next {
            state = next;
        }
    }

    // A struct name never spans lines.
    if state == LexicalState::StructName {
        state = LexicalState::Root;
    }

    (sink.finish(), state)
}

/// Split text into lines on LF, CRLF or bare CR
///
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Tokenize a whole buffer, threading the lexical state from line to line
///
/// Token ranges stay relative to their own line.
pub fn tokenize_document(text: &str) -> Vec<TokenLine> {
    tokenize_document_with(SymbolTable::global(), text, LexicalState::Root)
}

/// Tokenize a whole buffer against a symbol table from a given start state
pub fn tokenize_document_with(
    symbols: &SymbolTable,
    text: &str,
    start: LexicalState,
) -> Vec<TokenLine> {
    let mut state = start;
    let lines: Vec<TokenLine> = split_lines(text)
        .into_iter()
        .map(|line| {
            let (tokens, end_state) = tokenize_with(symbols, line, state);
            debug_assert!(covers_exactly(line, &tokens));
            state = end_state;
            TokenLine { tokens, end_state }
        })
        .collect();

    tracing::trace!(lines = lines.len(), end_state = %state, "tokenized document");
    lines
}

/// Check that tokens partition `line` with no gaps or overlaps
pub fn covers_exactly(line: &str, tokens: &[Token]) -> bool {
    let mut expected = 0;
    for token in tokens {
        if token.range.start != expected || token.is_empty() {
            return false;
        }
        expected = token.range.end;
    }
    expected == line.len()
}
