use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;
use std::fmt;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, T, U> Parser for Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Parser combinator that converts the output of a parser with a function
/// that may reject it
///
/// A rejection becomes a forced failure located where the inner parser
/// started, carrying the rejection's message.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<P, F, T, U, E> Parser for TryMap<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> Result<U, E>,
    E: fmt::Display,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        let location = cursor.location();
        let value = self.parser.parse(cursor)?;
        (self.mapper)(value).map_err(|err| ParseError::Forced {
            message: err.to_string().into(),
            location,
        })
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() and .try_map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: fmt::Display,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
