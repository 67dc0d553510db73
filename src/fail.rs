use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with the given message, consuming nothing
///
/// Typically placed last in a chain of `or` alternatives to replace a generic
/// mismatch with a diagnostic that names what the grammar wanted.
pub struct Fail<O> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> O>,
}

impl<O> Fail<O> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<O> Parser for Fail<O> {
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        Err(ParseError::Forced {
            message: self.message.clone(),
            location: cursor.location(),
        })
    }
}

/// Convenience function to create a Fail parser
pub fn fail<O>(message: impl Into<Cow<'static, str>>) -> Fail<O> {
    Fail::new(message)
}
