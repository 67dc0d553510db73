use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::grammar::char::is_char;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// Characters matched before a mismatch stay consumed; wrap the parser in
/// [`attempt`](crate::attempt::attempt) for all-or-nothing matching.
pub struct IsString {
    expected: Cow<'static, str>,
}

impl IsString {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Parser for IsString {
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let mut matched = String::with_capacity(self.expected.len());
        for expected_char in self.expected.chars() {
            matched.push(is_char(expected_char).parse(cursor)?);
        }
        Ok(matched)
    }
}

/// Convenience function to create an IsString parser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsString {
    IsString::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Source;

    #[test]
    fn test_exact_match() {
        let source = Source::new("ab");
        let mut cursor = source.cursor();

        assert_eq!(is_string("ab").parse(&mut cursor).unwrap(), "ab");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_match_with_remaining() {
        let source = Source::new("abrest");
        let mut cursor = source.cursor();

        assert_eq!(is_string("ab").parse(&mut cursor).unwrap(), "ab");
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.peek().unwrap(), 'r');
    }

    #[test]
    fn test_mismatch_first_char() {
        let source = Source::new("world");
        let mut cursor = source.cursor();

        let err = is_string("hello").parse(&mut cursor).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[line 1, position 1] 'h' is expected, but given: 'w'"
        );
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_mismatch_middle_char_keeps_progress() {
        let source = Source::new("help");
        let mut cursor = source.cursor();

        let err = is_string("hello").parse(&mut cursor).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[line 1, position 4] 'l' is expected, but given: 'p'"
        );
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_insufficient_input() {
        let source = Source::new("hel");
        let mut cursor = source.cursor();

        let err = is_string("hello").parse(&mut cursor).unwrap_err();
        assert_eq!(err.to_string(), "[line 1, position 4] 'l' is expected, but given");
    }

    #[test]
    fn test_empty_string() {
        let source = Source::new("hello");
        let mut cursor = source.cursor();

        assert_eq!(is_string("").parse(&mut cursor).unwrap(), "");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_unicode_string() {
        let source = Source::new("こんにちは世界");
        let mut cursor = source.cursor();

        assert_eq!(is_string("こんにちは").parse(&mut cursor).unwrap(), "こんにちは");
        assert_eq!(cursor.peek().unwrap(), '世');
        assert_eq!(cursor.column(), 6);
    }

    #[test]
    fn test_owned_expected() {
        let keyword = String::from("let");
        let source = Source::new("let x");
        let mut cursor = source.cursor();

        assert_eq!(is_string(keyword).parse(&mut cursor).unwrap(), "let");
    }
}
