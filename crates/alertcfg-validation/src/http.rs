//! HTTP client settings checks.
//!
//! Every integration that makes outbound calls delegates here once its own
//! rules pass. The rules mirror what the engine's HTTP client loader rejects.

use alertcfg_model::{HttpClientConfig, OAuth2, ProxyConfig, TlsConfig};

use crate::checks::validate_url;
use crate::error::HttpConfigError;

/// Recognised TLS versions, lowest first.
const TLS_VERSIONS: [&str; 4] = ["TLS10", "TLS11", "TLS12", "TLS13"];

/// Validates a set of HTTP client settings.
pub fn validate_http_config(config: &HttpClientConfig) -> Result<(), HttpConfigError> {
    let bearer = !config.bearer_token.is_empty() || !config.bearer_token_file.is_empty();
    let mechanisms = [
        config.basic_auth.is_some(),
        config.authorization.is_some(),
        config.oauth2.is_some(),
        bearer,
    ];
    if mechanisms.iter().filter(|set| **set).count() > 1 {
        return Err(HttpConfigError::ConflictingAuth);
    }

    exclusive(
        "http_config",
        ("bearer_token", !config.bearer_token.is_empty()),
        ("bearer_token_file", !config.bearer_token_file.is_empty()),
    )?;

    if let Some(basic) = &config.basic_auth {
        exclusive(
            "basic_auth",
            ("password", !basic.password.is_empty()),
            ("password_file", !basic.password_file.is_empty()),
        )?;
    }

    if let Some(auth) = &config.authorization {
        if auth.kind.eq_ignore_ascii_case("basic") {
            return Err(HttpConfigError::BasicAuthorizationType);
        }
        exclusive(
            "authorization",
            ("credentials", !auth.credentials.is_empty()),
            ("credentials_file", !auth.credentials_file.is_empty()),
        )?;
    }

    if let Some(oauth2) = &config.oauth2 {
        validate_oauth2(oauth2)?;
    }

    if let Some(tls) = &config.tls_config {
        validate_tls_config(tls)?;
    }

    validate_proxy(&config.proxy)
}

/// Validates TLS parameters.
pub fn validate_tls_config(tls: &TlsConfig) -> Result<(), HttpConfigError> {
    if tls.cert_file.is_empty() != tls.key_file.is_empty() {
        return Err(HttpConfigError::UnpairedClientCertificate);
    }

    let min = tls_version("min_version", &tls.min_version)?;
    let max = tls_version("max_version", &tls.max_version)?;
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(HttpConfigError::TlsVersionOrder {
                min: tls.min_version.clone(),
                max: tls.max_version.clone(),
            });
        }
    }
    Ok(())
}

fn validate_oauth2(oauth2: &OAuth2) -> Result<(), HttpConfigError> {
    exclusive(
        "oauth2",
        ("client_secret", !oauth2.client_secret.is_empty()),
        ("client_secret_file", !oauth2.client_secret_file.is_empty()),
    )?;
    validate_url(&oauth2.token_url).map_err(|reason| HttpConfigError::InvalidUrl {
        field: "oauth2.token_url",
        reason,
    })?;
    if let Some(tls) = &oauth2.tls_config {
        validate_tls_config(tls)?;
    }
    validate_proxy(&oauth2.proxy)
}

fn validate_proxy(proxy: &ProxyConfig) -> Result<(), HttpConfigError> {
    if !proxy.proxy_url.is_empty() {
        validate_url(&proxy.proxy_url).map_err(|reason| HttpConfigError::InvalidUrl {
            field: "proxy_url",
            reason,
        })?;
    }
    if proxy.proxy_from_environment && (!proxy.proxy_url.is_empty() || !proxy.no_proxy.is_empty())
    {
        return Err(HttpConfigError::ProxyFromEnvironmentConflict);
    }
    if !proxy.no_proxy.is_empty() && proxy.proxy_url.is_empty() {
        return Err(HttpConfigError::NoProxyWithoutProxyUrl);
    }
    if !proxy.proxy_connect_header.is_empty()
        && proxy.proxy_url.is_empty()
        && !proxy.proxy_from_environment
    {
        return Err(HttpConfigError::ConnectHeaderWithoutProxy);
    }
    Ok(())
}

fn tls_version(field: &'static str, value: &str) -> Result<Option<usize>, HttpConfigError> {
    if value.is_empty() {
        return Ok(None);
    }
    TLS_VERSIONS
        .iter()
        .position(|v| *v == value)
        .map(Some)
        .ok_or_else(|| HttpConfigError::InvalidTlsVersion {
            field,
            value: value.to_string(),
        })
}

fn exclusive(
    section: &'static str,
    (first, first_set): (&'static str, bool),
    (second, second_set): (&'static str, bool),
) -> Result<(), HttpConfigError> {
    if first_set && second_set {
        Err(HttpConfigError::ConflictingSources {
            section,
            first,
            second,
        })
    } else {
        Ok(())
    }
}
