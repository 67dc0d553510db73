use crate::error::{Location, ParseError};

/// Owned source text, materialized as characters so that every position is a
/// character index rather than a byte offset
#[derive(Debug, Clone)]
pub struct Source {
    chars: Vec<char>,
}

impl Source {
    pub fn new(text: &str) -> Self {
        Source {
            chars: text.chars().collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// A fresh cursor at the start of this source
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.chars)
    }
}

/// Read position over an immutable character sequence
///
/// The cursor is mutated in place as parsers consume input. Line and column
/// are tracked alongside the offset so that any failure can be located
/// without rescanning the source.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'code> {
    data: &'code [char],
    offset: usize,
    line: usize,
    column: usize,
}

/// Captured cursor position, used to roll a cursor back
///
/// Holds a reference to the source it was taken from so that a restore can
/// reject snapshots of unrelated text.
#[derive(Debug, Clone, Copy)]
pub struct CursorState<'code> {
    data: &'code [char],
    offset: usize,
    line: usize,
    column: usize,
}

impl<'code> CursorState<'code> {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl<'code> Cursor<'code> {
    pub fn new(data: &'code [char]) -> Self {
        Cursor {
            data,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor, without consuming it
    pub fn peek(&self) -> Result<char, ParseError> {
        self.current().ok_or_else(|| ParseError::EndOfInput {
            location: self.location(),
        })
    }

    /// Like `peek`, but `None` at end of input instead of an error
    pub fn current(&self) -> Option<char> {
        self.data.get(self.offset).copied()
    }

    /// Consume the character under the cursor and return it
    ///
    /// Fails with `EndOfInput` when there is nothing left to consume.
    pub fn advance(&mut self) -> Result<char, ParseError> {
        let ch = self.peek()?;
        self.step(ch);
        Ok(ch)
    }

    /// Consume characters while `pred` holds, returning how many were consumed
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.offset;
        while let Some(ch) = self.current().filter(|&c| pred(c)) {
            self.step(ch);
        }
        self.offset - start
    }

    fn step(&mut self, ch: char) {
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    pub fn snapshot(&self) -> CursorState<'code> {
        CursorState {
            data: self.data,
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Roll back to a previously captured state of the same source
    pub fn restore(&mut self, state: CursorState<'code>) -> Result<(), ParseError> {
        if !std::ptr::eq(self.data, state.data) {
            return Err(ParseError::RevertMismatch {
                location: self.location(),
            });
        }
        self.offset = state.offset;
        self.line = state.line;
        self.column = state.column;
        Ok(())
    }

    /// True when the cursor sits exactly where `state` was captured
    pub fn same_position(&self, state: &CursorState<'code>) -> bool {
        std::ptr::eq(self.data, state.data) && self.offset == state.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn location(&self) -> Location {
        Location::new(self.offset, self.line, self.column, self.current())
    }

    /// Characters not yet consumed
    pub fn remaining(&self) -> &'code [char] {
        &self.data[self.offset.min(self.data.len())..]
    }
}

impl<'code> PartialEq for Cursor<'code> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data, other.data) && self.offset == other.offset
    }
}

impl<'code> Eq for Cursor<'code> {}
