//! Validation error types with enough context to act on.
//!
//! Errors nest: a [`ValidationError`] names the failing entity and wraps a
//! cause specific to that entity class. Route errors carry the child index
//! at every level, so a failure deep in the tree prints as
//! `route[1]: route[0]: receiver "x" not found`.

use std::fmt;

use thiserror::Error;

use crate::duration::DURATION_PATTERN;
use crate::integrations::IntegrationKind;

/// The class of entity a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The `global` section.
    Global,
    /// A receiver or one of its notifiers.
    Receiver,
    /// A named time interval.
    TimeInterval,
    /// A node of the routing tree.
    Route,
    /// An inhibition rule.
    InhibitRule,
}

impl EntityKind {
    /// Returns the entity class as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Receiver => "receiver",
            Self::TimeInterval => "time_interval",
            Self::Route => "route",
            Self::InhibitRule => "inhibit_rule",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The first violation found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The global section is invalid.
    #[error("invalid global config: {source}")]
    Global {
        /// The underlying cause.
        source: IntegrationError,
    },

    /// Two receivers share a name.
    #[error("{name:?} receiver is not unique")]
    DuplicateReceiver {
        /// The repeated name.
        name: String,
    },

    /// A receiver has no name.
    #[error("receiver[{index}] has no name")]
    UnnamedReceiver {
        /// Position of the receiver.
        index: usize,
    },

    /// One notifier of a receiver is invalid.
    #[error("failed to validate '{kind}[{index}]' - receiver {receiver}: {source}")]
    Receiver {
        /// Name of the receiver.
        receiver: String,
        /// Integration kind of the failing notifier.
        kind: IntegrationKind,
        /// Position of the notifier within its kind.
        index: usize,
        /// The underlying cause.
        source: IntegrationError,
    },

    /// A time interval is structurally invalid.
    #[error("time interval[{index}] is invalid: {source}")]
    TimeInterval {
        /// Position across `mute_time_intervals` then `time_intervals`.
        index: usize,
        /// The underlying cause.
        source: TimeIntervalError,
    },

    /// The document has no routing tree.
    #[error("no root route defined")]
    MissingRoute,

    /// A node of the routing tree is invalid.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// An inhibition rule is invalid.
    #[error("inhibit_rules[{index}]: {source}")]
    InhibitRule {
        /// Position of the rule.
        index: usize,
        /// The underlying cause.
        source: InhibitRuleError,
    },
}

impl ValidationError {
    /// Returns the class of entity that failed.
    #[must_use]
    pub fn entity(&self) -> EntityKind {
        match self {
            Self::Global { .. } => EntityKind::Global,
            Self::DuplicateReceiver { .. }
            | Self::UnnamedReceiver { .. }
            | Self::Receiver { .. } => EntityKind::Receiver,
            Self::TimeInterval { .. } => EntityKind::TimeInterval,
            Self::MissingRoute | Self::Route(_) => EntityKind::Route,
            Self::InhibitRule { .. } => EntityKind::InhibitRule,
        }
    }

    /// Returns the child indices leading from the root to the failing route,
    /// or `None` if the failure is not in the routing tree.
    #[must_use]
    pub fn route_path(&self) -> Option<Vec<usize>> {
        match self {
            Self::Route(err) => Some(err.path()),
            Self::MissingRoute => Some(Vec::new()),
            _ => None,
        }
    }
}

/// Why a single notifier (or the global section) is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationError {
    /// A mandatory field is empty.
    #[error("mandatory field '{field}' is empty")]
    MissingField {
        /// The empty field.
        field: &'static str,
    },

    /// None of a set of alternative fields is set.
    #[error("one of {} is required", quote_list(.fields))]
    OneOfRequired {
        /// The alternatives.
        fields: &'static [&'static str],
    },

    /// More than one of a set of alternative fields is set.
    #[error("at most one of {} must be configured", quote_list(.fields))]
    MutuallyExclusive {
        /// The conflicting fields.
        fields: &'static [&'static str],
    },

    /// Not exactly one of a set of alternative fields is set.
    #[error("exactly one of {} must be configured", quote_list(.fields))]
    ExactlyOneOf {
        /// The alternatives.
        fields: &'static [&'static str],
    },

    /// Two fields must be set together.
    #[error("'{first}' and '{second}' must be configured together")]
    RequiredTogether {
        /// The first field.
        first: &'static str,
        /// The second field.
        second: &'static str,
    },

    /// A URL field is malformed.
    #[error("invalid '{field}': {reason}")]
    InvalidUrl {
        /// The offending field.
        field: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A `host:port` field is malformed.
    #[error("invalid '{field}' {value}: {reason}")]
    InvalidHostPort {
        /// The offending field.
        field: &'static str,
        /// The offending value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A duration field does not match the duration grammar.
    #[error("'{field}' {value} does not match required regex: {}", DURATION_PATTERN)]
    InvalidDuration {
        /// The offending field.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// Two header names differ only by case.
    #[error("duplicate header {name:?}")]
    DuplicateHeader {
        /// The normalized header name.
        name: String,
    },

    /// A custom field uses a key the engine reserves.
    #[error("usage of reserved word {key:?} is not allowed in custom fields")]
    ReservedField {
        /// The reserved key.
        key: String,
    },

    /// A value is outside the accepted set.
    #[error("invalid '{field}' {value:?}: {reason}")]
    InvalidValue {
        /// The offending field.
        field: String,
        /// The offending value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A nested record (responder, action, field, ...) is invalid.
    #[error("{item}: {source}")]
    Item {
        /// Path of the nested record, e.g. `responders[1]`.
        item: String,
        /// The underlying cause.
        source: Box<IntegrationError>,
    },

    /// The HTTP client settings are invalid.
    #[error("invalid 'http_config': {0}")]
    Http(#[from] HttpConfigError),

    /// TLS settings outside an HTTP client are invalid.
    #[error("invalid '{field}': {source}")]
    Tls {
        /// The offending field.
        field: &'static str,
        /// The underlying cause.
        source: HttpConfigError,
    },
}

impl IntegrationError {
    /// Wraps this error with the path of the nested record it came from.
    #[must_use]
    pub fn within(self, item: impl Into<String>) -> Self {
        Self::Item {
            item: item.into(),
            source: Box::new(self),
        }
    }
}

/// Why a set of HTTP client settings is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpConfigError {
    /// More than one authentication mechanism is configured.
    #[error("at most one of basic_auth, oauth2, bearer_token & bearer_token_file, authorization must be configured")]
    ConflictingAuth,

    /// A literal value and a file are both configured for one credential.
    #[error("at most one of {section}.{first} & {section}.{second} must be configured")]
    ConflictingSources {
        /// The enclosing section.
        section: &'static str,
        /// The literal field.
        first: &'static str,
        /// The file field.
        second: &'static str,
    },

    /// The `authorization` section was used for basic auth.
    #[error("authorization type cannot be set to \"basic\", use \"basic_auth\" instead")]
    BasicAuthorizationType,

    /// A TLS version is not recognised.
    #[error("unknown TLS version {value:?} for '{field}'")]
    InvalidTlsVersion {
        /// `min_version` or `max_version`.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// The TLS minimum is above the maximum.
    #[error("tls min_version {min} is greater than max_version {max}")]
    TlsVersionOrder {
        /// The configured minimum.
        min: String,
        /// The configured maximum.
        max: String,
    },

    /// Only one of client certificate and key is configured.
    #[error("exactly one of cert_file and key_file configured, both are required")]
    UnpairedClientCertificate,

    /// A URL field is malformed.
    #[error("invalid {field}: {reason}")]
    InvalidUrl {
        /// The offending field.
        field: &'static str,
        /// Why the URL was rejected.
        reason: String,
    },

    /// `proxy_from_environment` is combined with explicit proxy settings.
    #[error("if proxy_from_environment is configured, proxy_url and no_proxy must not be configured")]
    ProxyFromEnvironmentConflict,

    /// `no_proxy` is set without a proxy.
    #[error("if no_proxy is configured, proxy_url must also be configured")]
    NoProxyWithoutProxyUrl,

    /// CONNECT headers are set without a proxy.
    #[error("if proxy_connect_header is configured, proxy_url or proxy_from_environment must also be configured")]
    ConnectHeaderWithoutProxy,
}

/// Why a time interval is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeIntervalError {
    /// The interval has no name.
    #[error("time interval must have a name")]
    MissingName,

    /// Another interval already uses this name.
    #[error("time interval {name:?} is not unique")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A range inside one period is malformed.
    #[error("time_intervals[{period}]: invalid {field} {value:?}: {reason}")]
    InvalidRange {
        /// Position of the period.
        period: usize,
        /// `times`, `weekdays`, `days_of_month`, `months` or `years`.
        field: &'static str,
        /// The offending literal.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Why a route node is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The root route has no receiver.
    #[error("root route must define a receiver")]
    MissingRootReceiver,

    /// The named receiver does not exist.
    #[error("receiver {receiver:?} not found")]
    ReceiverNotFound {
        /// The unknown receiver.
        receiver: String,
    },

    /// A group-by key appears twice.
    #[error("duplicate values not permitted in route 'group_by': {group_by:?}")]
    DuplicateGroupBy {
        /// The full group-by list.
        group_by: Vec<String>,
    },

    /// The wildcard group-by key is combined with other keys.
    #[error("'...' must be a sole value in route 'group_by': {group_by:?}")]
    GroupByAllNotSole {
        /// The full group-by list.
        group_by: Vec<String>,
    },

    /// A mute time interval does not exist.
    #[error("mute time interval {name:?} not found")]
    MuteTimeIntervalNotFound {
        /// The unknown interval.
        name: String,
    },

    /// An active time interval does not exist.
    #[error("active time interval {name:?} not found")]
    ActiveTimeIntervalNotFound {
        /// The unknown interval.
        name: String,
    },

    /// A timer does not match the duration grammar.
    #[error("{field} {value} does not match required regex: {}", DURATION_PATTERN)]
    InvalidDuration {
        /// `group_wait`, `group_interval` or `repeat_interval`.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// A timer is zero where a positive duration is required.
    #[error("{field} {value:?} must be a positive duration")]
    NonPositiveDuration {
        /// `group_wait`, `group_interval` or `repeat_interval`.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// A matcher expression does not parse.
    #[error("matcher[{index}]: {source}")]
    InvalidMatcher {
        /// Position of the matcher.
        index: usize,
        /// The parse failure.
        source: MatcherError,
    },

    /// A deprecated `match` / `match_re` entry is invalid.
    #[error("{field}[{label:?}]: {source}")]
    InvalidLegacyMatcher {
        /// `match` or `match_re`.
        field: &'static str,
        /// The label the entry applies to.
        label: String,
        /// The parse failure.
        source: MatcherError,
    },

    /// The tree is deeper than the configured limit.
    #[error("route tree exceeds the maximum depth of {max}")]
    TooDeep {
        /// The configured limit.
        max: usize,
    },

    /// A child route is invalid.
    #[error("route[{index}]: {source}")]
    Child {
        /// Position of the child.
        index: usize,
        /// The child's failure.
        source: Box<RouteError>,
    },
}

impl RouteError {
    /// Wraps this error as the failure of child `index`.
    #[must_use]
    pub fn in_child(self, index: usize) -> Self {
        Self::Child {
            index,
            source: Box::new(self),
        }
    }

    /// Returns the child indices leading to the failing node.
    #[must_use]
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self;
        while let Self::Child { index, source } = current {
            path.push(*index);
            current = source;
        }
        path
    }

    /// Returns the innermost error, without the path wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Child { source, .. } = current {
            current = source;
        }
        current
    }
}

/// Why an inhibition rule is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InhibitRuleError {
    /// A matcher expression does not parse.
    #[error("{field}[{index}]: {source}")]
    InvalidMatcher {
        /// `source_matchers` or `target_matchers`.
        field: &'static str,
        /// Position of the matcher.
        index: usize,
        /// The parse failure.
        source: MatcherError,
    },

    /// A deprecated map entry is invalid.
    #[error("{field}[{label:?}]: {source}")]
    InvalidLegacyMatcher {
        /// One of the `*_match` / `*_match_re` fields.
        field: &'static str,
        /// The label the entry applies to.
        label: String,
        /// The parse failure.
        source: MatcherError,
    },

    /// An `equal` entry is not a label name.
    #[error("equal: invalid label name {name:?}")]
    InvalidEqualLabel {
        /// The offending entry.
        name: String,
    },
}

/// Why a matcher expression does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    /// The expression is empty.
    #[error("empty matcher")]
    Empty,

    /// The expression is not `label op value`.
    #[error("bad matcher format: {input}")]
    BadFormat {
        /// The offending expression.
        input: String,
    },

    /// The label name is not a valid label.
    #[error("invalid label name {name:?}")]
    InvalidLabelName {
        /// The offending name.
        name: String,
    },

    /// The value has a stray or missing double quote.
    #[error("matcher value contains unescaped double quote: {value}")]
    UnescapedQuote {
        /// The raw value.
        value: String,
    },

    /// A regex operator's value does not compile.
    #[error("invalid regular expression {pattern:?}: {reason}")]
    InvalidRegex {
        /// The offending pattern.
        pattern: String,
        /// The compiler's message.
        reason: String,
    },
}

fn quote_list(fields: &[&str]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{f}'")).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

/// Result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
