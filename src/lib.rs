//! # charcomb - Character Parser Combinators
//!
//! A small parsing engine: a cursor over an in-memory string plus combinators
//! that build parsers out of smaller parsers.
//!
//! - **Committed choice**: `or` only falls through to its second branch when
//!   the first failed without consuming anything
//! - **Explicit backtracking**: `attempt` rewinds the cursor on failure
//! - **Located errors**: every failure carries line, column and the offending
//!   character, formatted as `[line L, position C] message: 'c'`
//! - **Zero panics**: all parsing errors are handled through `Result` types
//!
//! ```
//! use charcomb::grammar::is_string;
//! use charcomb::{attempt, or, run};
//!
//! let committed = or(is_string("ab"), is_string("ac"));
//! assert!(run(&committed, "ac").is_err());
//!
//! let backtracking = or(attempt(is_string("ab")), is_string("ac"));
//! assert_eq!(run(&backtracking, "ac").unwrap(), "ac");
//! ```

pub mod and;
pub mod arith;
pub mod attempt;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod fail;
pub mod grammar;
pub mod lazy;
pub mod many;
pub mod map;
pub mod or;
pub mod parser;
pub mod satisfy;
pub mod sequence;
pub mod some;

pub use and::{AndExt, and};
pub use attempt::{AttemptExt, attempt};
pub use cursor::{Cursor, CursorState, Source};
pub use eof::eof;
pub use error::{Location, ParseError};
pub use fail::fail;
pub use lazy::lazy;
pub use many::many;
pub use map::{MapExt, map};
pub use or::{OrExt, or};
pub use parser::{Parser, run, run_complete};
pub use satisfy::{any_char, satisfy};
pub use sequence::sequence;
pub use some::{many1, some};
