use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;

/// Parser combinator that rolls the cursor back to where it started whenever
/// the wrapped parser fails
///
/// The wrapped parser's error is returned unchanged. Inside an
/// [`or`](crate::or::or) this turns a partially matching alternative back
/// into one that "consumed nothing", so the next alternative is tried.
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<P> Parser for Attempt<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let start = cursor.snapshot();
        match self.parser.parse(cursor) {
            Ok(value) => Ok(value),
            Err(err) => {
                if !cursor.same_position(&start) {
                    log::trace!(
                        "attempt: rewinding from offset {} to {}",
                        cursor.offset(),
                        start.offset()
                    );
                    cursor.restore(start)?;
                }
                Err(err)
            }
        }
    }
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt: Parser + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

impl<P> AttemptExt for P where P: Parser {}

/// Convenience function to create an Attempt parser
pub fn attempt<P>(parser: P) -> Attempt<P>
where
    P: Parser,
{
    Attempt::new(parser)
}
