use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;
use std::borrow::Cow;

/// Parser that consumes one character when it matches a predicate
///
/// This is the only parser that moves the cursor forward on success; every
/// other parser is a composition of parsers like this one.
pub struct Satisfy<F> {
    predicate: F,
    expected: Cow<'static, str>,
}

impl<F> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            expected: "Not satisfy".into(),
        }
    }

    /// Replace the default "Not satisfy" message reported on a mismatch
    pub fn expecting(mut self, expected: impl Into<Cow<'static, str>>) -> Self {
        self.expected = expected.into();
        self
    }
}

impl<F> Parser for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let ch = cursor.peek()?;
        if !(self.predicate)(ch) {
            return Err(ParseError::PredicateMismatch {
                expected: self.expected.clone(),
                location: cursor.location(),
            });
        }
        cursor.advance()
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that consumes any single character
pub fn any_char() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|_| true)
}
