use std::borrow::Cow;
use std::fmt;

/// Where in the source a failure was raised, captured when the error is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Character index into the source (0-based)
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column within the line (1-based)
    pub column: usize,
    /// The character under the cursor, `None` at end of input
    pub found: Option<char>,
}

impl Location {
    pub fn new(offset: usize, line: usize, column: usize, found: Option<char>) -> Self {
        Location {
            offset,
            line,
            column,
            found,
        }
    }

    /// Suffix naming the offending character, empty at end of input
    pub fn found_suffix(&self) -> FoundSuffix {
        FoundSuffix(self.found)
    }

    /// Render up to two lines of context either side of this location,
    /// with a pointer under the offending column
    pub fn context_lines(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let first = self.line.saturating_sub(2).max(1);
        let last = self.line + 2;

        for (index, content) in text.split('\n').enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }
            let prefix = if number == self.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == self.line {
                let pointer_offset = prefix.len() + self.column.saturating_sub(1);
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        // Location past the last line still gets a pointer
        if lines.is_empty() {
            lines.push(format!("  > {} | ", self.line));
            lines.push(format!("{}^--- here", " ".repeat(8)));
        }

        lines
    }

    /// `head`, a blank line, then the context excerpt for this location
    pub fn render(&self, head: &str, text: &str) -> String {
        let mut out = String::from(head);
        out.push('\n');
        for line in self.context_lines(text) {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}, position {}]", self.line, self.column)
    }
}

/// Formats as `: 'c'`, or nothing when there is no offending character
#[derive(Debug, Clone, Copy)]
pub struct FoundSuffix(Option<char>);

impl fmt::Display for FoundSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ch) => write!(f, ": '{}'", ch),
            None => Ok(()),
        }
    }
}

/// Failure raised by the cursor or by any combinator
///
/// The `Display` output is the diagnostic contract shared by every parser:
/// `[line L, position C] <message>: '<offending character>'`, with the
/// character suffix omitted at end of input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// `peek` or `advance` was attempted past the last character
    #[error("{location} Unexpected end of input")]
    EndOfInput { location: Location },

    /// A predicate rejected the character under the cursor
    #[error("{location} {expected}{}", .location.found_suffix())]
    PredicateMismatch {
        expected: Cow<'static, str>,
        location: Location,
    },

    /// An explicit failure raised by a grammar
    #[error("{location} {message}{}", .location.found_suffix())]
    Forced {
        message: Cow<'static, str>,
        location: Location,
    },

    /// A cursor was restored from a snapshot of a different source
    #[error("{location} Cannot restore cursor from a snapshot of another source")]
    RevertMismatch { location: Location },
}

impl ParseError {
    pub fn location(&self) -> Location {
        match self {
            ParseError::EndOfInput { location }
            | ParseError::PredicateMismatch { location, .. }
            | ParseError::Forced { location, .. }
            | ParseError::RevertMismatch { location } => *location,
        }
    }

    /// The message without the position prefix or character suffix
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            ParseError::EndOfInput { .. } => "Unexpected end of input".into(),
            ParseError::PredicateMismatch { expected, .. } => Cow::Borrowed(expected.as_ref()),
            ParseError::Forced { message, .. } => Cow::Borrowed(message.as_ref()),
            ParseError::RevertMismatch { .. } => {
                "Cannot restore cursor from a snapshot of another source".into()
            }
        }
    }

    /// The diagnostic line followed by a source excerpt around the failure
    pub fn render(&self, text: &str) -> String {
        self.location().render(&self.to_string(), text)
    }
}
