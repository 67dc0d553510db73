//! Character-level grammar building blocks made purely from the core
//! combinators: single characters, literal strings, character classes and
//! decimal numbers.

pub mod char;
pub mod class;
pub mod number;
pub mod string;

pub use char::is_char;
pub use class::{alphanumeric, ascii_alphabetic, digit, letter, space, spaces};
pub use number::number;
pub use string::is_string;
