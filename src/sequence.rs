use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;
use std::borrow::Cow;

/// Parser output that can be appended to the text built by a sequence
pub trait Fragment {
    fn append_to(self, out: &mut String);
}

impl Fragment for char {
    fn append_to(self, out: &mut String) {
        out.push(self);
    }
}

impl Fragment for String {
    fn append_to(self, out: &mut String) {
        out.push_str(&self);
    }
}

impl Fragment for Cow<'static, str> {
    fn append_to(self, out: &mut String) {
        out.push_str(&self);
    }
}

impl Fragment for () {
    fn append_to(self, _out: &mut String) {}
}

impl<T: Fragment> Fragment for Vec<T> {
    fn append_to(self, out: &mut String) {
        for item in self {
            item.append_to(out);
        }
    }
}

impl<T: Fragment> Fragment for Option<T> {
    fn append_to(self, out: &mut String) {
        if let Some(item) = self {
            item.append_to(out);
        }
    }
}

/// A group of parsers that can be run one after another
///
/// Implemented for tuples of up to eight parsers and for `Vec`s of a single
/// parser type.
pub trait Parsers {
    fn parse_into(&self, cursor: &mut Cursor<'_>, out: &mut String) -> Result<(), ParseError>;
}

macro_rules! impl_parsers_for_tuple {
    ($($parser:ident $index:tt),+) => {
        impl<$($parser),+> Parsers for ($($parser,)+)
        where
            $($parser: Parser, $parser::Output: Fragment,)+
        {
            fn parse_into(
                &self,
                cursor: &mut Cursor<'_>,
                out: &mut String,
            ) -> Result<(), ParseError> {
                $(self.$index.parse(cursor)?.append_to(out);)+
                Ok(())
            }
        }
    };
}

impl_parsers_for_tuple!(P0 0);
impl_parsers_for_tuple!(P0 0, P1 1);
impl_parsers_for_tuple!(P0 0, P1 1, P2 2);
impl_parsers_for_tuple!(P0 0, P1 1, P2 2, P3 3);
impl_parsers_for_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_parsers_for_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
impl_parsers_for_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
impl_parsers_for_tuple!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);

impl<P> Parsers for Vec<P>
where
    P: Parser,
    P::Output: Fragment,
{
    fn parse_into(&self, cursor: &mut Cursor<'_>, out: &mut String) -> Result<(), ParseError> {
        for parser in self {
            parser.parse(cursor)?.append_to(out);
        }
        Ok(())
    }
}

/// Parser combinator that runs parsers in order and joins their output into
/// one string
///
/// The first failure ends the sequence and is returned unchanged. Nothing is
/// rolled back: the cursor stays where the failing parser left it, so a
/// sequence that got partway counts as having consumed input.
pub struct Sequence<T> {
    parsers: T,
}

impl<T> Sequence<T> {
    pub fn new(parsers: T) -> Self {
        Sequence { parsers }
    }
}

impl<T> Parser for Sequence<T>
where
    T: Parsers,
{
    type Output = String;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let mut out = String::new();
        self.parsers.parse_into(cursor, &mut out)?;
        Ok(out)
    }
}

/// Convenience function to create a Sequence parser
///
/// ```
/// use charcomb::grammar::{digit, letter};
/// use charcomb::{run, sequence};
///
/// let parser = sequence((letter(), digit(), digit()));
/// assert_eq!(run(&parser, "a23").unwrap(), "a23");
/// assert_eq!(
///     run(&parser, "abcd").unwrap_err().to_string(),
///     "[line 1, position 2] Not digit: 'b'"
/// );
/// ```
pub fn sequence<T>(parsers: T) -> Sequence<T>
where
    T: Parsers,
{
    Sequence::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Source;
    use crate::grammar::{digit, is_char, letter};
    use crate::many::many;

    #[test]
    fn test_sequence_joins_output() {
        let source = Source::new("a2345");
        let mut cursor = source.cursor();
        let parser = sequence((letter(), digit(), digit()));

        assert_eq!(parser.parse(&mut cursor).unwrap(), "a23");
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_sequence_first_fails() {
        let source = Source::new("123");
        let mut cursor = source.cursor();
        let parser = sequence((letter(), digit(), digit()));

        let err = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(err.to_string(), "[line 1, position 1] Not letter: '1'");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_sequence_leaves_cursor_at_failure() {
        let source = Source::new("abcd");
        let mut cursor = source.cursor();
        let parser = sequence((letter(), digit(), digit()));

        assert!(parser.parse(&mut cursor).is_err());
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_sequence_with_repetition() {
        let source = Source::new("x123y");
        let mut cursor = source.cursor();
        let parser = sequence((is_char('x'), many(digit()), is_char('y')));

        assert_eq!(parser.parse(&mut cursor).unwrap(), "x123y");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_sequence_of_vec() {
        let source = Source::new("abc");
        let mut cursor = source.cursor();
        let parser = sequence(vec![is_char('a'), is_char('b')]);

        assert_eq!(parser.parse(&mut cursor).unwrap(), "ab");
        assert_eq!(cursor.peek().unwrap(), 'c');
    }

    #[test]
    fn test_sequence_single_parser() {
        let source = Source::new("7");
        let mut cursor = source.cursor();

        assert_eq!(sequence((digit(),)).parse(&mut cursor).unwrap(), "7");
    }
}
