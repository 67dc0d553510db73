use crate::grammar::class::digit;
use crate::map::MapExt;
use crate::parser::Parser;
use crate::some::some;

/// Parser that matches one or more ASCII digits and returns them as a u64
pub fn number() -> impl Parser<Output = u64> {
    some(digit()).try_map(|digits| {
        digits
            .into_iter()
            .collect::<String>()
            .parse::<u64>()
            .map_err(|_| "number out of range")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Source;
    use crate::error::ParseError;

    #[test]
    fn test_number_single_digit() {
        let source = Source::new("5abc");
        let mut cursor = source.cursor();

        assert_eq!(number().parse(&mut cursor).unwrap(), 5);
        assert_eq!(cursor.peek().unwrap(), 'a');
    }

    #[test]
    fn test_number_stops_at_non_digit() {
        let source = Source::new("123abc");
        let mut cursor = source.cursor();

        assert_eq!(number().parse(&mut cursor).unwrap(), 123);
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_number_leading_zeros() {
        let source = Source::new("007");
        let mut cursor = source.cursor();

        assert_eq!(number().parse(&mut cursor).unwrap(), 7);
    }

    #[test]
    fn test_number_requires_a_digit() {
        let source = Source::new("abc");
        let mut cursor = source.cursor();

        let err = number().parse(&mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::PredicateMismatch { .. }));
        assert_eq!(err.to_string(), "[line 1, position 1] Not digit: 'a'");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_number_max() {
        let source = Source::new("18446744073709551615");
        let mut cursor = source.cursor();

        assert_eq!(number().parse(&mut cursor).unwrap(), u64::MAX);
    }

    #[test]
    fn test_number_overflow() {
        let source = Source::new("18446744073709551616");
        let mut cursor = source.cursor();

        let err = number().parse(&mut cursor).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[line 1, position 1] number out of range: '1'"
        );
    }
}
