//! Leaf checks shared by every integration: URLs, `host:port` pairs,
//! durations and field combinations.

use url::Url;

use crate::duration::is_valid_duration;
use crate::error::IntegrationError;

/// Parses `input` as an absolute `http` or `https` URL with a host.
pub fn validate_url(input: &str) -> Result<Url, String> {
    let url = Url::parse(input).map_err(|err| err.to_string())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("unsupported scheme {:?} for URL", url.scheme()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("host is missing in URL".to_string());
    }
    Ok(url)
}

/// Splits `host:port` or `[host]:port`.
pub fn split_host_port(input: &str) -> Result<(&str, &str), String> {
    if let Some(rest) = input.strip_prefix('[') {
        let (host, after) = rest
            .split_once(']')
            .ok_or_else(|| "missing ']' in address".to_string())?;
        let port = after
            .strip_prefix(':')
            .ok_or_else(|| "missing port in address".to_string())?;
        return Ok((host, port));
    }
    let (host, port) = input
        .rsplit_once(':')
        .ok_or_else(|| "missing port in address".to_string())?;
    if host.contains(':') {
        return Err("too many colons in address".to_string());
    }
    if host.contains('[') || host.contains(']') || port.contains('[') || port.contains(']') {
        return Err("unexpected bracket in address".to_string());
    }
    Ok((host, port))
}

/// Validates an optional URL field; empty means unset.
pub(crate) fn check_url(field: &str, value: &str) -> Result<(), IntegrationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_url(value)
        .map(|_| ())
        .map_err(|reason| IntegrationError::InvalidUrl {
            field: field.to_string(),
            reason,
        })
}

/// Validates an optional `host:port` field; empty means unset.
pub(crate) fn check_host_port(field: &'static str, value: &str) -> Result<(), IntegrationError> {
    if value.is_empty() {
        return Ok(());
    }
    split_host_port(value)
        .map(|_| ())
        .map_err(|reason| IntegrationError::InvalidHostPort {
            field,
            value: value.to_string(),
            reason,
        })
}

/// Validates an optional duration field; empty means unset.
pub(crate) fn check_duration(field: &'static str, value: &str) -> Result<(), IntegrationError> {
    if value.is_empty() || is_valid_duration(value) {
        return Ok(());
    }
    Err(IntegrationError::InvalidDuration {
        field,
        value: value.to_string(),
    })
}

/// Requires at least one of the flagged fields.
pub(crate) fn require_one_of(
    fields: &'static [&'static str],
    set: &[bool],
) -> Result<(), IntegrationError> {
    if set.iter().any(|s| *s) {
        Ok(())
    } else {
        Err(IntegrationError::OneOfRequired { fields })
    }
}

/// Rejects more than one of the flagged fields.
pub(crate) fn at_most_one_of(
    fields: &'static [&'static str],
    set: &[bool],
) -> Result<(), IntegrationError> {
    if set.iter().filter(|s| **s).count() > 1 {
        Err(IntegrationError::MutuallyExclusive { fields })
    } else {
        Ok(())
    }
}

/// Requires exactly one of the flagged fields.
pub(crate) fn exactly_one_of(
    fields: &'static [&'static str],
    set: &[bool],
) -> Result<(), IntegrationError> {
    if set.iter().filter(|s| **s).count() == 1 {
        Ok(())
    } else {
        Err(IntegrationError::ExactlyOneOf { fields })
    }
}

/// Requires a non-empty value.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), IntegrationError> {
    if value.trim().is_empty() {
        Err(IntegrationError::MissingField { field })
    } else {
        Ok(())
    }
}
