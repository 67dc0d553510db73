//! Recursive-descent arithmetic evaluator
//!
//! A hand-written client of [`Cursor`]: it dispatches on the character under
//! the cursor instead of composing combinators, and computes while it parses.
//!
//! ```text
//! expr   = term, { ("+" | "-"), term }
//! term   = factor, { "*", factor | "/", factor, { "*", factor } }
//! factor = "(", expr, ")" | ("+" | "-"), factor | number
//! ```
//!
//! The divisor of `/` extends over the multiplications that follow it, so
//! `2/3*(4-4)` divides by zero rather than evaluating to zero.

use crate::cursor::{Cursor, Source};
use crate::error::{Location, ParseError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error("{location} Division by zero")]
    DivisionByZero { location: Location },

    #[error("{location} ')' is expected, but given{}", .location.found_suffix())]
    UnclosedParen { location: Location },

    #[error("{location} Unexpected trailing input{}", .location.found_suffix())]
    TrailingInput { location: Location },

    #[error("{location} Expression nested too deeply{}", .location.found_suffix())]
    NestingTooDeep { location: Location },
}

impl EvalError {
    pub fn location(&self) -> Location {
        match self {
            EvalError::Syntax(err) => err.location(),
            EvalError::DivisionByZero { location }
            | EvalError::UnclosedParen { location }
            | EvalError::TrailingInput { location }
            | EvalError::NestingTooDeep { location } => *location,
        }
    }

    /// The diagnostic line followed by a source excerpt around the failure
    pub fn render(&self, text: &str) -> String {
        self.location().render(&self.to_string(), text)
    }
}

/// Evaluate a complete arithmetic expression
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let source = Source::new(expression);
    let mut evaluator = Evaluator::new(source.cursor());
    let value = evaluator.expression()?;
    evaluator.finish()?;
    log::debug!("evaluated {:?} = {}", expression, value);
    Ok(value)
}

/// Deepest nesting of parentheses and unary signs accepted by [`evaluate`]
pub const MAX_DEPTH: usize = 256;

/// Evaluator state: the cursor it reads from and the current factor nesting
pub struct Evaluator<'code> {
    cursor: Cursor<'code>,
    depth: usize,
}

impl<'code> Evaluator<'code> {
    pub fn new(cursor: Cursor<'code>) -> Self {
        Evaluator { cursor, depth: 0 }
    }

    pub fn cursor(&self) -> &Cursor<'code> {
        &self.cursor
    }

    /// Require that nothing but whitespace remains
    pub fn finish(&mut self) -> Result<(), EvalError> {
        self.skip_spaces();
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(EvalError::TrailingInput {
                location: self.cursor.location(),
            })
        }
    }

    pub fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            self.skip_spaces();
            match self.cursor.current() {
                Some('+') => {
                    self.cursor.advance()?;
                    value += self.term()?;
                }
                Some('-') => {
                    self.cursor.advance()?;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        loop {
            self.skip_spaces();
            match self.cursor.current() {
                Some('*') => {
                    self.cursor.advance()?;
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.cursor.advance()?;
                    self.skip_spaces();
                    let location = self.cursor.location();
                    let divisor = self.divisor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero { location });
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn divisor(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        loop {
            self.skip_spaces();
            if self.cursor.current() != Some('*') {
                return Ok(value);
            }
            self.cursor.advance()?;
            value *= self.factor()?;
        }
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        self.skip_spaces();
        match self.cursor.current() {
            Some(c @ ('(' | '+' | '-')) => {
                if self.depth == MAX_DEPTH {
                    return Err(EvalError::NestingTooDeep {
                        location: self.cursor.location(),
                    });
                }
                self.cursor.advance()?;
                self.depth += 1;
                let value = self.nested(c);
                self.depth -= 1;
                value
            }
            _ => self.number(),
        }
    }

    /// The rest of a factor opened by `(` or a unary sign
    fn nested(&mut self, opener: char) -> Result<f64, EvalError> {
        match opener {
            '(' => {
                let value = self.expression()?;
                self.skip_spaces();
                if self.cursor.current() != Some(')') {
                    return Err(EvalError::UnclosedParen {
                        location: self.cursor.location(),
                    });
                }
                self.cursor.advance()?;
                Ok(value)
            }
            '-' => Ok(-self.factor()?),
            _ => self.factor(),
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let first = self.cursor.peek()?;
        if !first.is_ascii_digit() {
            return Err(ParseError::PredicateMismatch {
                expected: "Not digit".into(),
                location: self.cursor.location(),
            }
            .into());
        }

        let mut value = 0.0;
        while let Some(d) = self.cursor.current().and_then(|c| c.to_digit(10)) {
            self.cursor.advance()?;
            value = value * 10.0 + f64::from(d);
        }
        Ok(value)
    }

    fn skip_spaces(&mut self) {
        self.cursor.skip_while(char::is_whitespace);
    }
}
