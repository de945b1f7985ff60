//! Ordered rule tables, one per lexical state
//!
//! Each table is tried top to bottom and the first rule that recognizes input
//! at the current position wins; the order encodes precedence. A rule only
//! looks at the scanner and the symbol table and reports what it matched.

use super::LexicalState;
use super::TokenClass;
use super::scanner::{Scanner, ident_len, run_len, whitespace_len};
use crate::symbols::hlsl::{BLOCK_DELIMITERS, OPERATORS, PREPROCESSOR_DIRECTIVES};
use crate::symbols::{SymbolSet, SymbolTable};

/// Result of a successful rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Match {
    /// Bytes consumed; 0 only for pure state transitions
    pub len: usize,
    /// Class of the consumed span, `None` for transitions
    pub class: Option<TokenClass>,
    /// State to continue in, `None` to stay
    pub next: Option<LexicalState>,
}

impl Match {
    fn token(len: usize, class: TokenClass) -> Self {
        Self {
            len,
            class: Some(class),
            next: None,
        }
    }

    fn enter(len: usize, class: TokenClass, next: LexicalState) -> Self {
        Self {
            len,
            class: Some(class),
            next: Some(next),
        }
    }

    fn pop() -> Self {
        Self {
            len: 0,
            class: None,
            next: Some(LexicalState::Root),
        }
    }
}

type Recognizer = fn(&Scanner<'_>, &SymbolTable) -> Option<Match>;

/// A recognizer paired with a name for diagnostics
pub(super) struct Rule {
    pub name: &'static str,
    pub recognize: Recognizer,
}

const fn rule(name: &'static str, recognize: Recognizer) -> Rule {
    Rule { name, recognize }
}

/// Identifier classification priority; first containing set wins
pub(super) const IDENTIFIER_PRIORITY: [(SymbolSet, TokenClass); 6] = [
    (SymbolSet::Keywords, TokenClass::Keyword),
    (SymbolSet::Types, TokenClass::Type),
    (SymbolSet::Semantics, TokenClass::Semantic),
    (SymbolSet::Constants, TokenClass::Constant),
    (SymbolSet::BuiltinFunctions, TokenClass::FunctionBuiltin),
    (SymbolSet::CustomTypes, TokenClass::TypeCustom),
];

/// Classification of a name in call position
pub(super) const CALL_PRIORITY: [(SymbolSet, TokenClass); 2] = [
    (SymbolSet::Keywords, TokenClass::Keyword),
    (SymbolSet::BuiltinFunctions, TokenClass::FunctionBuiltin),
];

/// Look `name` up along a priority chain
pub(super) fn classify(
    symbols: &SymbolTable,
    chain: &[(SymbolSet, TokenClass)],
    name: &str,
    fallback: TokenClass,
) -> TokenClass {
    chain
        .iter()
        .find(|(set, _)| symbols.contains(*set, name))
        .map_or(fallback, |&(_, class)| class)
}

pub(super) const ROOT_RULES: &[Rule] = &[
    rule("whitespace", whitespace),
    rule("line-comment", line_comment),
    rule("block-comment-open", block_comment_open),
    rule("preprocessor-directive", preprocessor_directive),
    rule("block-delimiter", block_delimiter),
    rule("struct-keyword", struct_keyword),
    rule("custom-type-parameter", custom_type_parameter),
    rule("custom-type-return", custom_type_return),
    rule("call", call),
    rule("identifier", identifier),
    rule("hex-number", hex_number),
    rule("float-number", float_number),
    rule("integer-number", integer_number),
    rule("unterminated-string", unterminated_string),
    rule("string-open", string_open),
    rule("operator-run", operator_run),
    rule("bracket", bracket),
    rule("delimiter", delimiter),
    rule("fallback", fallback),
];

pub(super) const STRUCT_NAME_RULES: &[Rule] = &[
    rule("whitespace", whitespace),
    rule("struct-name", struct_name),
    rule("pop", pop),
];

pub(super) const COMMENT_RULES: &[Rule] = &[
    rule("comment-text", comment_text),
    rule("comment-close", comment_close),
    rule("comment-char", comment_char),
];

pub(super) const STRING_RULES: &[Rule] = &[
    rule("string-text", string_text),
    rule("escape", escape),
    rule("invalid-escape", invalid_escape),
    rule("string-close", string_close),
];

/// Run the table for `state` at the scanner's position
pub(super) fn scan(state: LexicalState, scanner: &Scanner<'_>, symbols: &SymbolTable) -> Match {
    let table = match state {
        LexicalState::Root => ROOT_RULES,
        LexicalState::Comment => COMMENT_RULES,
        LexicalState::String => STRING_RULES,
        LexicalState::StructName => STRUCT_NAME_RULES,
    };

    table
        .iter()
        .find_map(|rule| (rule.recognize)(scanner, symbols))
        .unwrap_or_else(|| Match::token(scanner.char_len(), TokenClass::Identifier))
}

fn non_empty(len: usize) -> Option<usize> {
    (len > 0).then_some(len)
}

// ---------------------------------------------------------------------------
// root
// ---------------------------------------------------------------------------

fn whitespace(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let len = run_len(scanner.rest(), |b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    non_empty(len).map(|len| Match::token(len, TokenClass::Whitespace))
}

fn line_comment(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    rest.starts_with("//")
        .then(|| Match::token(rest.len(), TokenClass::Comment))
}

fn block_comment_open(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    scanner
        .rest()
        .starts_with("/*")
        .then(|| Match::enter(2, TokenClass::Comment, LexicalState::Comment))
}

fn preprocessor_directive(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    if !rest.starts_with('#') || !scanner.at_line_start() {
        return None;
    }

    let word_start = 1 + whitespace_len(&rest[1..]);
    let word_len = ident_len(&rest[word_start..]);
    let word = &rest[word_start..word_start + word_len];

    PREPROCESSOR_DIRECTIVES
        .contains(&word)
        .then(|| Match::token(word_start + word_len, TokenClass::KeywordPreprocessor))
}

fn block_delimiter(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    if !scanner.at_word_boundary() {
        return None;
    }
    let rest = scanner.rest();
    let len = ident_len(rest);
    BLOCK_DELIMITERS
        .contains(&&rest[..len])
        .then(|| Match::token(len, TokenClass::KeywordPreprocessor))
}

fn struct_keyword(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    if !scanner.at_word_boundary() {
        return None;
    }
    let rest = scanner.rest();
    (&rest[..ident_len(rest)] == "struct")
        .then(|| Match::enter(6, TokenClass::Keyword, LexicalState::StructName))
}

/// `Type name` shape: returns the type length and the byte that follows `name`
///
/// The type must start with an uppercase letter and the name with a lowercase
/// letter or underscore; at least one whitespace character separates them.
fn positional_type(scanner: &Scanner<'_>) -> Option<(usize, u8)> {
    let rest = scanner.rest();
    if !scanner.at_word_boundary() || !rest.as_bytes().first()?.is_ascii_uppercase() {
        return None;
    }

    let type_len = ident_len(rest);
    let gap = whitespace_len(&rest[type_len..]);
    if gap == 0 {
        return None;
    }

    let name_start = type_len + gap;
    let name_first = *rest.as_bytes().get(name_start)?;
    if !(name_first.is_ascii_lowercase() || name_first == b'_') {
        return None;
    }

    let name_end = name_start + ident_len(&rest[name_start..]);
    let after = name_end + whitespace_len(&rest[name_end..]);
    rest.as_bytes().get(after).map(|&b| (type_len, b))
}

fn custom_type_parameter(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    match positional_type(scanner)? {
        (len, b',' | b')') => Some(Match::token(len, TokenClass::TypeCustom)),
        _ => None,
    }
}

fn custom_type_return(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    match positional_type(scanner)? {
        (len, b'(') => Some(Match::token(len, TokenClass::TypeCustom)),
        _ => None,
    }
}

fn call(scanner: &Scanner<'_>, symbols: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    let len = non_empty(ident_len(rest))?;
    let paren = len + whitespace_len(&rest[len..]);
    if rest.as_bytes().get(paren) != Some(&b'(') {
        return None;
    }

    let class = classify(symbols, &CALL_PRIORITY, &rest[..len], TokenClass::Function);
    Some(Match::token(len, class))
}

fn identifier(scanner: &Scanner<'_>, symbols: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    let len = non_empty(ident_len(rest))?;
    let class = classify(
        symbols,
        &IDENTIFIER_PRIORITY,
        &rest[..len],
        TokenClass::Identifier,
    );
    Some(Match::token(len, class))
}

fn is_integer_suffix(b: u8) -> bool {
    matches!(b, b'u' | b'U' | b'l' | b'L')
}

fn hex_number(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    if !(rest.starts_with("0x") || rest.starts_with("0X")) {
        return None;
    }
    let digits = non_empty(run_len(&rest[2..], |b| b.is_ascii_hexdigit()))?;
    let suffix = run_len(&rest[2 + digits..], is_integer_suffix);
    Some(Match::token(2 + digits + suffix, TokenClass::Number))
}

fn float_number(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    let bytes = rest.as_bytes();

    let whole = non_empty(run_len(rest, |b| b.is_ascii_digit()))?;
    if bytes.get(whole) != Some(&b'.') {
        return None;
    }
    let fraction = non_empty(run_len(&rest[whole + 1..], |b| b.is_ascii_digit()))?;
    let mut len = whole + 1 + fraction;

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(len + 1), Some(b'+' | b'-')));
        let exponent = run_len(&rest[len + 1 + sign..], |b| b.is_ascii_digit());
        if exponent > 0 {
            len += 1 + sign + exponent;
        }
    }

    if matches!(
        bytes.get(len),
        Some(b'f' | b'F' | b'h' | b'H' | b'l' | b'L')
    ) {
        len += 1;
    }

    Some(Match::token(len, TokenClass::Number))
}

fn integer_number(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    let digits = non_empty(run_len(rest, |b| b.is_ascii_digit()))?;
    let suffix = run_len(&rest[digits..], is_integer_suffix);
    Some(Match::token(digits + suffix, TokenClass::Number))
}

/// A quote whose literal does not close on this line
fn unterminated_string(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }

    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return None,
            // A trailing backslash escapes nothing; leave it to the string state.
            b'\\' if i + 1 == bytes.len() => return None,
            b'\\' => i += 2,
            _ => i += 1,
        }
    }

    Some(Match::token(rest.len(), TokenClass::StringInvalid))
}

fn string_open(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    scanner
        .rest()
        .starts_with('"')
        .then(|| Match::enter(1, TokenClass::String, LexicalState::String))
}

fn is_symbol(b: u8) -> bool {
    matches!(
        b,
        b'=' | b'>'
            | b'<'
            | b'!'
            | b'~'
            | b'?'
            | b':'
            | b'&'
            | b'|'
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'^'
            | b'%'
    )
}

fn operator_run(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    let len = non_empty(run_len(rest, is_symbol))?;
    let class = if OPERATORS.contains(&&rest[..len]) {
        TokenClass::Operator
    } else {
        TokenClass::Delimiter
    };
    Some(Match::token(len, class))
}

fn bracket(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    match scanner.rest().as_bytes().first()? {
        b'{' | b'}' | b'(' | b')' | b'[' | b']' => Some(Match::token(1, TokenClass::Bracket)),
        _ => None,
    }
}

fn delimiter(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    match scanner.rest().as_bytes().first()? {
        b';' | b',' | b'.' => Some(Match::token(1, TokenClass::Delimiter)),
        _ => None,
    }
}

fn fallback(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    non_empty(scanner.char_len()).map(|len| Match::token(len, TokenClass::Identifier))
}

// ---------------------------------------------------------------------------
// struct_name
// ---------------------------------------------------------------------------

fn pop(_: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    Some(Match::pop())
}

fn struct_name(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    non_empty(ident_len(scanner.rest()))
        .map(|len| Match::enter(len, TokenClass::TypeStruct, LexicalState::Root))
}

// ---------------------------------------------------------------------------
// comment
// ---------------------------------------------------------------------------

fn comment_text(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let len = run_len(scanner.rest(), |b| b != b'/' && b != b'*');
    non_empty(len).map(|len| Match::token(len, TokenClass::Comment))
}

fn comment_close(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    scanner
        .rest()
        .starts_with("*/")
        .then(|| Match::enter(2, TokenClass::Comment, LexicalState::Root))
}

fn comment_char(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    matches!(scanner.rest().as_bytes().first(), Some(b'/' | b'*'))
        .then(|| Match::token(1, TokenClass::Comment))
}

// ---------------------------------------------------------------------------
// string
// ---------------------------------------------------------------------------

fn string_text(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let len = run_len(scanner.rest(), |b| b != b'\\' && b != b'"');
    non_empty(len).map(|len| Match::token(len, TokenClass::String))
}

/// Length of a well-formed escape sequence at the start of `s`
pub(super) fn escape_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'\\') {
        return None;
    }

    let hex_digits = |max: usize| run_len(&s[2..], |b| b.is_ascii_hexdigit()).min(max);

    match bytes.get(1)? {
        b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'"' | b'\'' => Some(2),
        b'x' => non_empty(hex_digits(4)).map(|n| 2 + n),
        b'u' => (hex_digits(4) == 4).then_some(6),
        b'U' => (hex_digits(8) == 8).then_some(10),
        _ => None,
    }
}

fn escape(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    escape_len(scanner.rest()).map(|len| Match::token(len, TokenClass::StringEscape))
}

fn invalid_escape(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    let rest = scanner.rest();
    if !rest.starts_with('\\') {
        return None;
    }
    let escaped = rest[1..].chars().next().map_or(0, char::len_utf8);
    Some(Match::token(1 + escaped, TokenClass::StringEscapeInvalid))
}

fn string_close(scanner: &Scanner<'_>, _: &SymbolTable) -> Option<Match> {
    scanner
        .rest()
        .starts_with('"')
        .then(|| Match::enter(1, TokenClass::String, LexicalState::Root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_table_ends_in_catch_all() {
        let last = ROOT_RULES.last().map(|rule| rule.name);
        assert_eq!(last, Some("fallback"));
    }

    #[test]
    fn test_rule_names_unique_per_table() {
        for table in [ROOT_RULES, STRUCT_NAME_RULES, COMMENT_RULES, STRING_RULES] {
            let mut names: Vec<&str> = table.iter().map(|rule| rule.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn test_identifier_priority_chain() {
        let symbols = SymbolTable::global();
        let class = |name| classify(symbols, &IDENTIFIER_PRIORITY, name, TokenClass::Identifier);
        assert_eq!(class("while"), TokenClass::Keyword);
        assert_eq!(class("half3"), TokenClass::Type);
        assert_eq!(class("SV_Target"), TokenClass::Semantic);
        assert_eq!(class("false"), TokenClass::Constant);
        assert_eq!(class("saturate"), TokenClass::FunctionBuiltin);
        assert_eq!(class("appdata_full"), TokenClass::TypeCustom);
        assert_eq!(class("albedo"), TokenClass::Identifier);
    }

    #[test]
    fn test_priority_resolves_overlap() {
        let symbols = SymbolTable::with_custom_types(["sample"]);
        let class = classify(&symbols, &IDENTIFIER_PRIORITY, "sample", TokenClass::Identifier);
        assert_eq!(class, TokenClass::Keyword);
    }

    #[test]
    fn test_escape_len() {
        assert_eq!(escape_len(r"\n rest"), Some(2));
        assert_eq!(escape_len(r"\x41"), Some(4));
        assert_eq!(escape_len(r"\x12345"), Some(6));
        assert_eq!(escape_len(r"\u00e9"), Some(6));
        assert_eq!(escape_len(r"\u00"), None);
        assert_eq!(escape_len(r"\U0001F600"), Some(10));
        assert_eq!(escape_len(r"\q"), None);
        assert_eq!(escape_len(r"\"), None);
    }
}
