//! Global defaults inherited by every receiver.

use serde::{Deserialize, Serialize};

use crate::http::{HttpClientConfig, TlsConfig};
use crate::secret::Secret;

/// The `global` section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Time after which an alert is declared resolved if it has not been
    /// updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_timeout: Option<String>,
    /// Default HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,

    /// Default sender address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub smtp_from: String,
    /// Hostname sent in the SMTP `HELO`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub smtp_hello: String,
    /// Default SMTP relay as `host:port`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub smtp_smarthost: String,
    /// SMTP user name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub smtp_auth_username: String,
    /// SMTP password.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub smtp_auth_password: Secret,
    /// File holding the SMTP password.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub smtp_auth_password_file: String,
    /// SMTP CRAM-MD5 secret.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub smtp_auth_secret: Secret,
    /// SMTP PLAIN identity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub smtp_auth_identity: String,
    /// Require STARTTLS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_require_tls: Option<bool>,
    /// SMTP TLS parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smtp_tls_config: Option<TlsConfig>,

    /// Default Slack webhook URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_api_url: Option<Secret>,
    /// File holding the Slack webhook URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub slack_api_url_file: String,
    /// Default PagerDuty events endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagerduty_url: Option<String>,
    /// Default HipChat endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hipchat_api_url: Option<String>,
    /// HipChat token.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub hipchat_auth_token: Secret,
    /// Default OpsGenie endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opsgenie_api_url: Option<String>,
    /// OpsGenie API key.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub opsgenie_api_key: Secret,
    /// File holding the OpsGenie API key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub opsgenie_api_key_file: String,
    /// Default WeChat endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat_api_url: Option<String>,
    /// WeChat API secret.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub wechat_api_secret: Secret,
    /// WeChat corporation id.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub wechat_api_corp_id: String,
    /// Default VictorOps endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub victorops_api_url: Option<String>,
    /// VictorOps API key.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub victorops_api_key: Secret,
    /// File holding the VictorOps API key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub victorops_api_key_file: String,
    /// Default Telegram endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_api_url: Option<String>,
    /// Default Webex endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webex_api_url: Option<String>,
    /// Default Jira endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira_api_url: Option<String>,
    /// Default Rocket.Chat endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rocketchat_api_url: Option<String>,
    /// Rocket.Chat token.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub rocketchat_token: Secret,
    /// Rocket.Chat token id.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub rocketchat_token_id: Secret,
}

impl GlobalConfig {
    /// Returns every default endpoint that is set, keyed by its field name.
    #[must_use]
    pub fn api_urls(&self) -> Vec<(&'static str, &str)> {
        [
            ("slack_api_url", self.slack_api_url.as_ref().map(Secret::expose)),
            ("pagerduty_url", self.pagerduty_url.as_deref()),
            ("hipchat_api_url", self.hipchat_api_url.as_deref()),
            ("opsgenie_api_url", self.opsgenie_api_url.as_deref()),
            ("wechat_api_url", self.wechat_api_url.as_deref()),
            ("victorops_api_url", self.victorops_api_url.as_deref()),
            ("telegram_api_url", self.telegram_api_url.as_deref()),
            ("webex_api_url", self.webex_api_url.as_deref()),
            ("jira_api_url", self.jira_api_url.as_deref()),
            ("rocketchat_api_url", self.rocketchat_api_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, url)| url.filter(|u| !u.is_empty()).map(|u| (key, u)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_global_serializes_to_empty_map() {
        let yaml = serde_yaml::to_string(&GlobalConfig::default()).unwrap();
        assert_eq!(yaml.trim(), "{}");
    }

    #[test]
    fn api_urls_lists_only_set_endpoints() {
        let global = GlobalConfig {
            pagerduty_url: Some("https://events.pagerduty.com/v2/enqueue".to_string()),
            jira_api_url: Some(String::new()),
            ..GlobalConfig::default()
        };
        let urls = global.api_urls();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].0, "pagerduty_url");
    }

    #[test]
    fn smtp_password_is_transparent() {
        let global = GlobalConfig {
            smtp_auth_password: Secret::new("mail-pass"),
            ..GlobalConfig::default()
        };
        let yaml = serde_yaml::to_string(&global).unwrap();
        assert!(yaml.contains("smtp_auth_password: mail-pass"));
    }
}
