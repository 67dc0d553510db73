use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Chaining `.and()` nests tuples, `(((a, b), c), d)`. Use
/// [`sequence`](crate::sequence::sequence) when the parts are text that
/// should simply be joined.
///
/// Example:
/// ```
/// use charcomb::and::AndExt;
/// use charcomb::grammar::{is_char, number};
/// use charcomb::run;
///
/// let ((major, _), minor) = run(&number().and(is_char('.')).and(number()), "3.14").unwrap();
/// assert_eq!((major, minor), (3, 14));
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let result1 = self.parser1.parse(cursor)?;
        let result2 = self.parser2.parse(cursor)?;
        Ok((result1, result2))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
