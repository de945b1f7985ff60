//! Read-only cursor over a single line
//!
//! Positions are byte offsets. Every length reported by the helpers ends on a
//! UTF-8 character boundary, so the resulting ranges always slice the line.

/// Cursor over the line being tokenized
pub(super) struct Scanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(super) fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    pub(super) fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.line.len());
    }

    /// Unconsumed remainder of the line
    pub(super) fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Whether only whitespace precedes the current position
    pub(super) fn at_line_start(&self) -> bool {
        self.line[..self.pos].chars().all(char::is_whitespace)
    }

    /// Whether the character before the current position is not part of a word
    pub(super) fn at_word_boundary(&self) -> bool {
        self.line[..self.pos]
            .bytes()
            .next_back()
            .is_none_or(|b| !is_ident_continue(b))
    }

    /// Length in bytes of the first character of the remainder
    pub(super) fn char_len(&self) -> usize {
        self.rest().chars().next().map_or(0, char::len_utf8)
    }
}

pub(super) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

pub(super) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Length of the identifier at the start of `s`, 0 if none
pub(super) fn ident_len(s: &str) -> usize {
    match s.as_bytes().first() {
        Some(&b) if is_ident_start(b) => run_len(s, is_ident_continue),
        _ => 0,
    }
}

/// Length of the leading run of bytes matching `pred`
///
/// `pred` must only accept ASCII bytes.
pub(super) fn run_len(s: &str, pred: impl Fn(u8) -> bool) -> usize {
    s.bytes().take_while(|&b| pred(b)).count()
}

/// Length of the leading run of (Unicode) whitespace
pub(super) fn whitespace_len(s: &str) -> usize {
    s.chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_len() {
        assert_eq!(ident_len("float4 x"), 6);
        assert_eq!(ident_len("_tmp1+"), 5);
        assert_eq!(ident_len("1abc"), 0);
        assert_eq!(ident_len(""), 0);
    }

    #[test]
    fn test_word_boundary() {
        let mut scanner = Scanner::new("2Foo bar");
        assert!(scanner.at_word_boundary());
        scanner.advance(1);
        assert!(!scanner.at_word_boundary());
        scanner.advance(4);
        assert!(scanner.at_word_boundary());
    }

    #[test]
    fn test_line_start_and_char_len() {
        let mut scanner = Scanner::new("  #é");
        scanner.advance(2);
        assert!(scanner.at_line_start());
        scanner.advance(1);
        assert!(!scanner.at_line_start());
        assert_eq!(scanner.char_len(), 2);
    }

    #[test]
    fn test_whitespace_len() {
        assert_eq!(whitespace_len(" \t x"), 3);
        assert_eq!(whitespace_len("x"), 0);
    }
}
