use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// The failure that ends the repetition is swallowed, and the cursor is put
/// back to just after the last successful match even if the failing attempt
/// had consumed some input.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let mut results = Vec::new();
        repeat_into(&self.parser, cursor, &mut results)?;
        Ok(results)
    }
}

/// Apply `parser` until it fails, pushing every result
///
/// A success that consumes nothing also ends the loop, since repeating it
/// could never make progress.
pub(crate) fn repeat_into<P: Parser>(
    parser: &P,
    cursor: &mut Cursor<'_>,
    results: &mut Vec<P::Output>,
) -> Result<(), ParseError> {
    loop {
        let before = cursor.snapshot();
        match parser.parse(cursor) {
            Ok(value) => {
                results.push(value);
                if cursor.same_position(&before) {
                    log::warn!(
                        "many: parser matched without consuming at offset {}, stopping",
                        before.offset()
                    );
                    return Ok(());
                }
            }
            Err(err) => {
                log::trace!("many: stopped after {} matches: {}", results.len(), err);
                if !cursor.same_position(&before) {
                    cursor.restore(before)?;
                }
                return Ok(());
            }
        }
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}
