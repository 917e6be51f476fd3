//! The engine's compound duration grammar.
//!
//! A duration is up to seven optional `<n><unit>` components in strictly
//! descending unit order (`y`, `w`, `d`, `h`, `m`, `s`, `ms`), each unit at
//! most once. The empty string matches.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

/// The grammar, as reported in error messages.
pub const DURATION_PATTERN: &str =
    r"^(([0-9]+)y)?(([0-9]+)w)?(([0-9]+)d)?(([0-9]+)h)?(([0-9]+)m)?(([0-9]+)s)?(([0-9]+)ms)?$";

static DURATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DURATION_PATTERN).unwrap_or_else(|_| unreachable!()));

/// Milliseconds per unit, paired with the capture group holding its count.
const UNITS: [(usize, u64); 7] = [
    (2, 365 * 24 * 60 * 60 * 1000),
    (4, 7 * 24 * 60 * 60 * 1000),
    (6, 24 * 60 * 60 * 1000),
    (8, 60 * 60 * 1000),
    (10, 60 * 1000),
    (12, 1000),
    (14, 1),
];

/// Returns true if `input` matches the duration grammar.
///
/// # Example
///
/// ```
/// use alertcfg_validation::is_valid_duration;
///
/// assert!(is_valid_duration("1h30m"));
/// assert!(!is_valid_duration("30x"));
/// ```
#[must_use]
pub fn is_valid_duration(input: &str) -> bool {
    DURATION_REGEX.is_match(input)
}

/// Parses a duration string.
///
/// Returns `None` if the string does not match the grammar or overflows.
/// A year is 365 days and a week is 7 days.
#[must_use]
pub fn parse_duration(input: &str) -> Option<Duration> {
    let captures = DURATION_REGEX.captures(input)?;
    let mut millis: u64 = 0;
    for (group, unit) in UNITS {
        if let Some(count) = captures.get(group) {
            let count: u64 = count.as_str().parse().ok()?;
            millis = millis.checked_add(count.checked_mul(unit)?)?;
        }
    }
    Some(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1h30m" ; "hours and minutes")]
    #[test_case("5m" ; "minutes")]
    #[test_case("" ; "empty")]
    #[test_case("1w2d3h4m5s6ms" ; "every unit but years")]
    #[test_case("1y" ; "years")]
    #[test_case("250ms" ; "milliseconds")]
    #[test_case("0s" ; "zero")]
    fn accepts(input: &str) {
        assert!(is_valid_duration(input));
    }

    #[test_case("30x" ; "unknown unit")]
    #[test_case("1h1h" ; "repeated unit")]
    #[test_case("-5m" ; "negative")]
    #[test_case("5m1h" ; "ascending order")]
    #[test_case("1.5h" ; "fraction")]
    #[test_case("5" ; "missing unit")]
    #[test_case(" 5m" ; "leading space")]
    fn rejects(input: &str) {
        assert!(!is_valid_duration(input));
    }

    #[test]
    fn parses_compound() {
        assert_eq!(parse_duration("1h30m"), Some(Duration::from_secs(90 * 60)));
        assert_eq!(
            parse_duration("1w2d"),
            Some(Duration::from_secs(9 * 24 * 60 * 60))
        );
        assert_eq!(parse_duration("1s500ms"), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn parses_empty_as_zero() {
        assert_eq!(parse_duration(""), Some(Duration::ZERO));
    }

    #[test]
    fn minutes_and_milliseconds_disambiguate() {
        assert_eq!(parse_duration("5ms"), Some(Duration::from_millis(5)));
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(parse_duration("99999999999999999999y"), None);
        assert_eq!(parse_duration("999999999999y"), None);
    }

    #[test]
    fn invalid_input_does_not_parse() {
        assert_eq!(parse_duration("1h1h"), None);
    }
}
