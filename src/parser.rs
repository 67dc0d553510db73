use crate::cursor::{Cursor, Source};
use crate::eof::eof;
use crate::error::ParseError;

/// Core parser trait for parser combinators
///
/// A parser reads from a shared, mutable cursor. On success the cursor is
/// left just after whatever was consumed. On failure the cursor is left
/// wherever the failing parser stopped: nothing rolls it back unless the
/// parser is wrapped in [`attempt`](crate::attempt::attempt). `or` relies on
/// this to tell an alternative that failed outright from one that made
/// progress before failing.
pub trait Parser {
    type Output;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError>;
}

/// Plain functions and closures over a cursor are parsers too, which is the
/// easiest way to write recursive grammar rules
impl<F, O> Parser for F
where
    F: Fn(&mut Cursor<'_>) -> Result<O, ParseError>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        self(cursor)
    }
}

/// Run `parser` over `text` from the start, ignoring any unconsumed input
pub fn run<P: Parser>(parser: &P, text: &str) -> Result<P::Output, ParseError> {
    let source = Source::new(text);
    let mut cursor = source.cursor();
    parser.parse(&mut cursor)
}

/// Run `parser` over `text` and require that it consumes all of it
pub fn run_complete<P: Parser>(parser: &P, text: &str) -> Result<P::Output, ParseError> {
    let source = Source::new(text);
    let mut cursor = source.cursor();
    let value = parser.parse(&mut cursor)?;
    eof().parse(&mut cursor)?;
    Ok(value)
}
