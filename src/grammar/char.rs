use crate::fail::fail;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::satisfy::satisfy;

/// Parser that matches one specific character
///
/// On a mismatch the error names the character that was wanted, e.g.
/// `[line 1, position 1] 'a' is expected, but given: 'b'`.
pub fn is_char(expected: char) -> impl Parser<Output = char> {
    satisfy(move |c| c == expected).or(fail(format!("'{}' is expected, but given", expected)))
}
