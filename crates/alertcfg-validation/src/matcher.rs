//! Label matcher expressions: `label op value`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MatcherError;

static MATCHER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*("(?:[^"\\]|\\.)*"|[a-zA-Z_:][a-zA-Z0-9_:]*)\s*(=~|=|!=|!~)\s*((?s).*?)\s*$"#,
    )
    .unwrap_or_else(|_| unreachable!())
});

static BARE_LABEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_:][a-zA-Z0-9_:]*$").unwrap_or_else(|_| unreachable!()));

static LABEL_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap_or_else(|_| unreachable!()));

/// How a matcher compares a label value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOp {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `=~`
    Regex,
    /// `!~`
    NotRegex,
}

impl MatchOp {
    /// Returns the operator as it is written.
    #[must_use]
    pub const fn as_symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Regex => "=~",
            Self::NotRegex => "!~",
        }
    }

    /// Returns true for the regex operators.
    #[must_use]
    pub const fn is_regex(&self) -> bool {
        matches!(self, Self::Regex | Self::NotRegex)
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Equal),
            "!=" => Some(Self::NotEqual),
            "=~" => Some(Self::Regex),
            "!~" => Some(Self::NotRegex),
            _ => None,
        }
    }
}

impl fmt::Display for MatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_symbol())
    }
}

/// A parsed matcher expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    /// Label name.
    pub name: String,
    /// Comparison operator.
    pub op: MatchOp,
    /// Unescaped value or pattern.
    pub value: String,
}

impl Matcher {
    /// Parses a matcher expression such as `severity=~"critical|page"`.
    ///
    /// The label and the value may each be bare or double-quoted; inside
    /// quotes `\"`, `\\` and `\n` are unescaped. Regex operators require the value to compile as an
    /// anchored regular expression.
    pub fn parse(input: &str) -> Result<Self, MatcherError> {
        if input.trim().is_empty() {
            return Err(MatcherError::Empty);
        }
        let captures = MATCHER_REGEX
            .captures(input)
            .ok_or_else(|| MatcherError::BadFormat {
                input: input.to_string(),
            })?;

        let name = unescape_value(&captures[1])?;
        if name.is_empty() {
            return Err(MatcherError::BadFormat {
                input: input.to_string(),
            });
        }
        let op = MatchOp::from_symbol(&captures[2]).ok_or_else(|| MatcherError::BadFormat {
            input: input.to_string(),
        })?;
        let value = unescape_value(&captures[3])?;

        if op.is_regex() {
            compile_anchored(&value)?;
        }
        Ok(Self { name, op, value })
    }
}

impl FromStr for Matcher {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if BARE_LABEL_REGEX.is_match(&self.name) {
            f.write_str(&self.name)?;
        } else {
            write!(f, "\"{}\"", escape_value(&self.name))?;
        }
        write!(f, "{}\"{}\"", self.op, escape_value(&self.value))
    }
}

/// Returns true if `name` is a valid label name.
#[must_use]
pub fn is_valid_label_name(name: &str) -> bool {
    LABEL_NAME_REGEX.is_match(name)
}

/// Checks that `pattern` compiles as an anchored regular expression.
pub fn compile_anchored(pattern: &str) -> Result<Regex, MatcherError> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|err| MatcherError::InvalidRegex {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn unescape_value(raw: &str) -> Result<String, MatcherError> {
    let unescaped_quote = || MatcherError::UnescapedQuote {
        value: raw.to_string(),
    };

    let (body, mut expect_trailing_quote) = match raw.strip_prefix('"') {
        Some(rest) => (rest, true),
        None => (raw, false),
    };

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => value.push('\n'),
                Some(escaped @ ('"' | '\\')) => value.push(escaped),
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => value.push('\\'),
            },
            '"' => {
                if !expect_trailing_quote || chars.peek().is_some() {
                    return Err(unescaped_quote());
                }
                expect_trailing_quote = false;
            }
            other => value.push(other),
        }
    }

    if expect_trailing_quote {
        return Err(unescaped_quote());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("severity=critical", "severity", MatchOp::Equal, "critical" ; "bare equal")]
    #[test_case("env != \"prod\"", "env", MatchOp::NotEqual, "prod" ; "quoted not equal")]
    #[test_case("job=~\"api|web\"", "job", MatchOp::Regex, "api|web" ; "regex")]
    #[test_case("job!~db.*", "job", MatchOp::NotRegex, "db.*" ; "negative regex")]
    #[test_case("team=", "team", MatchOp::Equal, "" ; "empty value")]
    #[test_case("msg=\"say \\\"hi\\\"\"", "msg", MatchOp::Equal, "say \"hi\"" ; "escaped quotes")]
    #[test_case("  a:b = c  ", "a:b", MatchOp::Equal, "c" ; "colon and padding")]
    #[test_case("\"service name\"=api", "service name", MatchOp::Equal, "api" ; "quoted label")]
    #[test_case("\"a=b\"!~\"x\"", "a=b", MatchOp::NotRegex, "x" ; "quoted label with operator")]
    fn parses(input: &str, name: &str, op: MatchOp, value: &str) {
        let matcher = Matcher::parse(input).unwrap();
        assert_eq!(matcher.name, name);
        assert_eq!(matcher.op, op);
        assert_eq!(matcher.value, value);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Matcher::parse("   "), Err(MatcherError::Empty));
    }

    #[test_case("severity" ; "no operator")]
    #[test_case("1abc=x" ; "label starts with digit")]
    #[test_case("foo-bar=x" ; "dash in label")]
    #[test_case("=x" ; "missing label")]
    #[test_case("\"\"=x" ; "empty quoted label")]
    fn rejects_bad_format(input: &str) {
        assert!(matches!(
            Matcher::parse(input),
            Err(MatcherError::BadFormat { .. })
        ));
    }

    #[test_case("a=\"unterminated" ; "missing trailing quote")]
    #[test_case("a=mid\"quote" ; "stray quote")]
    #[test_case("a=\"x\"y\"" ; "quote before end")]
    fn rejects_unescaped_quotes(input: &str) {
        assert!(matches!(
            Matcher::parse(input),
            Err(MatcherError::UnescapedQuote { .. })
        ));
    }

    #[test]
    fn rejects_invalid_regex() {
        let err = Matcher::parse("job=~\"(unclosed\"").unwrap_err();
        assert!(matches!(err, MatcherError::InvalidRegex { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn equality_values_are_not_compiled() {
        assert!(Matcher::parse("job=\"(unclosed\"").is_ok());
    }

    #[test]
    fn display_quotes_value() {
        let matcher = Matcher::parse("env=prod").unwrap();
        assert_eq!(matcher.to_string(), "env=\"prod\"");
    }

    #[test_case("say \"hi\"" ; "quotes")]
    #[test_case("C:\\temp" ; "backslash")]
    #[test_case("line one\nline two" ; "newline")]
    #[test_case("caf\u{e9} \u{1f525}" ; "non ascii")]
    fn display_reparses(value: &str) {
        let matcher = Matcher {
            name: "service name".to_string(),
            op: MatchOp::Equal,
            value: value.to_string(),
        };
        let rendered = matcher.to_string();
        assert!(!rendered.contains("\\u{"));
        assert_eq!(Matcher::parse(&rendered).unwrap(), matcher);
    }

    #[test]
    fn display_escapes_like_the_parser() {
        let matcher = Matcher::parse(r#"msg="a\"b\\c\nd""#).unwrap();
        assert_eq!(matcher.value, "a\"b\\c\nd");
        assert_eq!(matcher.to_string(), r#"msg="a\"b\\c\nd""#);
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let matcher: Matcher = "a!=b".parse().unwrap();
        assert_eq!(matcher.op, MatchOp::NotEqual);
    }

    #[test]
    fn label_names() {
        assert!(is_valid_label_name("alertname"));
        assert!(is_valid_label_name("_private"));
        assert!(!is_valid_label_name("9lives"));
        assert!(!is_valid_label_name("a:b"));
        assert!(!is_valid_label_name(""));
    }
}
