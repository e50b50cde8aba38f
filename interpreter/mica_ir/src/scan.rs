//! Whitespace-delimited token scanner.
//!
//! Program text is a flat token stream: mnemonics and operands separated
//! by runs of blank characters, with no significance attached to line
//! breaks. The scanner advances a byte position through the source,
//! skipping whitespace with a scalar loop and finding token ends with
//! `memchr` over the delimiter bytes.

use memchr::{memchr2, memchr3};

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when we need to search
/// for more delimiter bytes than `memchr3` supports (which handles at
/// most 3 needles).
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Token delimiters: the ASCII whitespace set.
#[inline]
const fn is_delimiter(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

/// Cursor over program text yielding whitespace-delimited tokens.
///
/// Tokens borrow from the source; the scanner never allocates.
#[derive(Debug)]
pub struct Scanner<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `src`.
    #[inline]
    pub const fn new(src: &'src str) -> Self {
        Scanner { src, pos: 0 }
    }

    /// Byte position of the scanner in the source.
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Advance past leading whitespace.
    fn skip_whitespace(&mut self) {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() && is_delimiter(bytes[self.pos]) {
            self.pos += 1;
        }
    }

    /// The next token, or `None` once the source is exhausted.
    ///
    /// A token is a maximal run of non-whitespace bytes. All delimiters
    /// are ASCII, so slicing at them always lands on a char boundary.
    pub fn next_token(&mut self) -> Option<&'src str> {
        self.skip_whitespace();
        if self.pos >= self.src.len() {
            return None;
        }
        let rest = &self.src.as_bytes()[self.pos..];
        // ASCII whitespace is five bytes; memchr3 caps at three needles,
        // so split the search and take the earliest hit.
        let end = earliest_of(
            memchr3(b' ', b'\t', b'\n', rest),
            memchr2(b'\r', b'\x0C', rest),
        )
        .unwrap_or(rest.len());
        let token = &self.src[self.pos..self.pos + end];
        self.pos += end;
        Some(token)
    }
}
