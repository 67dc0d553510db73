use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;

/// Parser combinator that tries the first parser, and if it fails without
/// consuming anything, tries the second parser
///
/// Once the first parser has moved the cursor before failing, that branch is
/// considered chosen: its error is returned and the second parser is never
/// run. Wrap the first parser in [`attempt`](crate::attempt::attempt) to get
/// full backtracking instead.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let start = cursor.snapshot();
        match self.parser1.parse(cursor) {
            Ok(value) => Ok(value),
            Err(_) if cursor.same_position(&start) => {
                log::trace!("or: first branch failed at offset {}, trying second", start.offset());
                self.parser2.parse(cursor)
            }
            Err(err) => {
                log::trace!(
                    "or: first branch consumed {}..{} before failing, committed",
                    start.offset(),
                    cursor.offset()
                );
                Err(err)
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Source;
    use crate::fail::fail;
    use crate::grammar::{is_char, is_string};

    #[test]
    fn test_or_first_succeeds() {
        let source = Source::new("abc");
        let mut cursor = source.cursor();
        let parser = or(is_char('a'), is_char('b'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), 'a');
        assert_eq!(cursor.peek().unwrap(), 'b');
    }

    #[test]
    fn test_or_second_succeeds() {
        let source = Source::new("bcd");
        let mut cursor = source.cursor();
        let parser = or(is_char('a'), is_char('b'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), 'b');
        assert_eq!(cursor.peek().unwrap(), 'c');
    }

    #[test]
    fn test_or_both_fail_reports_second() {
        let source = Source::new("xyz");
        let mut cursor = source.cursor();
        let parser = or(is_char('a'), is_char('b'));

        let err = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[line 1, position 1] 'b' is expected, but given: 'x'"
        );
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_or_commits_after_progress() {
        let source = Source::new("ac");
        let mut cursor = source.cursor();
        let parser = or(is_string("ab"), is_string("ac"));

        let err = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[line 1, position 2] 'b' is expected, but given: 'c'"
        );
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_or_committed_branch_never_runs_second() {
        let source = Source::new("ax");
        let mut cursor = source.cursor();
        let parser = is_string("ab").or(|cursor: &mut Cursor<'_>| -> Result<String, ParseError> {
            panic!("second branch ran at offset {}", cursor.offset())
        });

        assert!(parser.parse(&mut cursor).is_err());
    }

    #[test]
    fn test_or_method_chain() {
        let source = Source::new("c");
        let mut cursor = source.cursor();
        let parser = is_char('a').or(is_char('b')).or(is_char('c'));

        assert_eq!(parser.parse(&mut cursor).unwrap(), 'c');
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_or_with_forced_failure() {
        let source = Source::new("z");
        let mut cursor = source.cursor();
        let parser = is_char('a').or(fail("letter a or nothing"));

        let err = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(err.to_string(), "[line 1, position 1] letter a or nothing: 'z'");
    }
}
