use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}
