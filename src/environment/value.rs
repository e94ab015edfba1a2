//! Parsing of raw store entries into typed values.

/// A type that can be read out of a single environment entry.
///
/// `parse` sees the raw entry verbatim and returns `None` when it is not a
/// well-formed value of `Self`. Only whole-string parses are accepted.
pub trait FromEnv: Sized {
    fn parse(raw: &str) -> Option<Self>;
}

impl FromEnv for String {
    fn parse(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromEnv for bool {
    /// Only the exact literals `true` and `false`.
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl FromEnv for i64 {
    /// Base-10, optional sign, no surrounding whitespace, no trailing bytes.
    fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_is_verbatim() {
        assert_eq!(String::parse("  padded  ").as_deref(), Some("  padded  "));
        assert_eq!(String::parse("").as_deref(), Some(""));
    }

    #[test]
    fn bool_accepts_only_lowercase_literals() {
        assert_eq!(bool::parse("true"), Some(true));
        assert_eq!(bool::parse("false"), Some(false));
        for raw in ["TRUE", "True", "1", "0", "yes", "", " true"] {
            assert_eq!(bool::parse(raw), None, "expected '{raw}' to be rejected");
        }
    }

    #[test]
    fn integer_accepts_whole_numbers() {
        assert_eq!(i64::parse("42"), Some(42));
        assert_eq!(i64::parse("-7"), Some(-7));
        assert_eq!(i64::parse("+5"), Some(5));
        assert_eq!(i64::parse("0"), Some(0));
    }

    #[test]
    fn integer_rejects_partial_and_fractional() {
        for raw in ["12abc", "3.14", "abc", "", " 42", "42 ", "1e3", "99999999999999999999"] {
            assert_eq!(i64::parse(raw), None, "expected '{raw}' to be rejected");
        }
    }
}
