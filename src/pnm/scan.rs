//! Byte cursor for the whitespace/comment-delimited parts of a NetPBM file.

const SPACE: u8 = b' ';
const TAB: u8 = b'\t';
const CR: u8 = b'\r';
const LF: u8 = b'\n';
const HASH: u8 = b'#';

/// Space, tab, CR and LF separate NetPBM tokens.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, SPACE | TAB | CR | LF)
}

/// Parse a base-10 unsigned token. Signs, empty tokens and overflow yield `None`.
pub(crate) fn parse_uint(token: &[u8]) -> Option<u32> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

/// Cursor over an immutable byte slice.
#[derive(Clone, Debug)]
pub(crate) struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes from the cursor to the end of the buffer.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Skip whitespace runs and `#` comments. A comment runs up to the next
    /// CR or LF, or the end of the buffer.
    pub fn skip_whitespace_and_comments(&mut self) {
        while let Some(&byte) = self.data.get(self.pos) {
            if is_whitespace(byte) {
                self.pos += 1;
            } else if byte == HASH {
                while let Some(&c) = self.data.get(self.pos) {
                    if c == CR || c == LF {
                        break;
                    }
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    /// Next run of non-whitespace, non-`#` bytes. Empty at end of buffer.
    pub fn next_token(&mut self) -> &'a [u8] {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while let Some(&byte) = self.data.get(self.pos) {
            if is_whitespace(byte) || byte == HASH {
                break;
            }
            self.pos += 1;
        }
        &self.data[start..self.pos]
    }

    /// Consume a single whitespace byte if one is under the cursor.
    ///
    /// Binary payloads start right after the one separator that follows the
    /// last header token, so nothing more may be skipped.
    pub fn skip_one_whitespace(&mut self) {
        if self.data.get(self.pos).copied().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_set() {
        for b in [b' ', b'\t', b'\r', b'\n'] {
            assert!(is_whitespace(b));
        }
        assert!(!is_whitespace(b'#'));
        assert!(!is_whitespace(0x0b));
        assert!(!is_whitespace(b'0'));
    }

    #[test]
    fn tokens_split_on_whitespace_and_comments() {
        let mut s = Scanner::new(b"  P3\t# note\r\n12#x\n 7");
        assert_eq!(s.next_token(), b"P3");
        assert_eq!(s.next_token(), b"12");
        assert_eq!(s.next_token(), b"7");
        assert_eq!(s.next_token(), b"");
        assert!(s.remaining().is_empty());
    }

    #[test]
    fn comment_at_end_of_buffer() {
        let mut s = Scanner::new(b"5 # trailing, no newline");
        assert_eq!(s.next_token(), b"5");
        assert_eq!(s.next_token(), b"");
        assert!(s.remaining().is_empty());
    }

    #[test]
    fn comment_stops_at_cr() {
        let mut s = Scanner::new(b"#a\rb");
        assert_eq!(s.next_token(), b"b");
    }

    #[test]
    fn cursor_sits_just_past_token() {
        let mut s = Scanner::new(b"255\n\x0a\x20");
        assert_eq!(s.next_token(), b"255");
        assert_eq!(s.position(), 3);
        s.skip_one_whitespace();
        assert_eq!(s.remaining(), b"\x0a\x20");
    }

    #[test]
    fn uint_parsing() {
        assert_eq!(parse_uint(b"0"), Some(0));
        assert_eq!(parse_uint(b"0042"), Some(42));
        assert_eq!(parse_uint(b"4294967295"), Some(u32::MAX));
        assert_eq!(parse_uint(b"4294967296"), None);
        assert_eq!(parse_uint(b""), None);
        assert_eq!(parse_uint(b"-1"), None);
        assert_eq!(parse_uint(b"+1"), None);
        assert_eq!(parse_uint(b"1x"), None);
    }
}
