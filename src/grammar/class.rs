use crate::many::many;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::satisfy::{Satisfy, satisfy};

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|c: char| c.is_ascii_digit()).expecting("Not digit")
}

/// Parser that matches a single Unicode letter
pub fn letter() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(char::is_alphabetic).expecting("Not letter")
}

/// Parser that matches a single ASCII letter (a-z, A-Z)
pub fn ascii_alphabetic() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(|c: char| c.is_ascii_alphabetic()).expecting("Not alphabetic")
}

/// Parser that matches a single Unicode letter or digit
pub fn alphanumeric() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(char::is_alphanumeric).expecting("Not alphanumeric")
}

/// Parser that matches a single whitespace character
pub fn space() -> Satisfy<impl Fn(char) -> bool> {
    satisfy(char::is_whitespace).expecting("Not space")
}

/// Parser that skips any amount of whitespace, including none
pub fn spaces() -> impl Parser<Output = ()> {
    many(space()).map(|_| ())
}
