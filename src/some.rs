use super::cursor::Cursor;
use super::many::repeat_into;
use super::parser::Parser;
use crate::error::ParseError;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first occurrence must succeed; its failure is returned as is, with
/// the cursor wherever that failure left it.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<P> Parser for Some<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let first = self.parser.parse(cursor)?;
        let mut results = vec![first];
        repeat_into(&self.parser, cursor, &mut results)?;
        Ok(results)
    }
}

/// Convenience function to create a Some parser
pub fn some<P>(parser: P) -> Some<P>
where
    P: Parser,
{
    Some::new(parser)
}

/// Alias of [`some`] under its conventional combinator name
pub fn many1<P>(parser: P) -> Some<P>
where
    P: Parser,
{
    Some::new(parser)
}
