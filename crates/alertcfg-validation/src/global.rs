//! Checks for the `global` section.

use alertcfg_model::GlobalConfig;

use crate::checks::{at_most_one_of, check_duration, check_host_port, check_url};
use crate::error::IntegrationError;
use crate::http::{validate_http_config, validate_tls_config};

/// Validates the default endpoints, SMTP settings and shared HTTP client.
pub fn validate_global(global: &GlobalConfig) -> Result<(), IntegrationError> {
    if let Some(timeout) = &global.resolve_timeout {
        check_duration("resolve_timeout", timeout)?;
    }

    for (field, url) in global.api_urls() {
        check_url(field, url)?;
    }

    check_host_port("smtp_smarthost", &global.smtp_smarthost)?;
    if let Some(tls) = &global.smtp_tls_config {
        validate_tls_config(tls).map_err(|source| IntegrationError::Tls {
            field: "smtp_tls_config",
            source,
        })?;
    }

    at_most_one_of(
        &["smtp_auth_password", "smtp_auth_password_file"],
        &[
            !global.smtp_auth_password.is_empty(),
            !global.smtp_auth_password_file.is_empty(),
        ],
    )?;
    at_most_one_of(
        &["slack_api_url", "slack_api_url_file"],
        &[
            global.slack_api_url.as_ref().is_some_and(|url| !url.is_empty()),
            !global.slack_api_url_file.is_empty(),
        ],
    )?;
    at_most_one_of(
        &["opsgenie_api_key", "opsgenie_api_key_file"],
        &[
            !global.opsgenie_api_key.is_empty(),
            !global.opsgenie_api_key_file.is_empty(),
        ],
    )?;
    at_most_one_of(
        &["victorops_api_key", "victorops_api_key_file"],
        &[
            !global.victorops_api_key.is_empty(),
            !global.victorops_api_key_file.is_empty(),
        ],
    )?;

    if let Some(http) = &global.http_config {
        validate_http_config(http)?;
    }
    Ok(())
}
