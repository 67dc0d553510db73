use super::cursor::Cursor;
use super::parser::Parser;
use crate::error::ParseError;

/// Parser that succeeds, consuming nothing, only when no input remains
pub struct Eof;

impl Parser for Eof {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, ParseError> {
        if cursor.is_at_end() {
            Ok(())
        } else {
            Err(ParseError::Forced {
                message: "End of input is expected, but given".into(),
                location: cursor.location(),
            })
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}
