//! Outbound HTTP client settings shared by every integration that makes
//! network calls, and by the global section.
//!
//! Authentication, TLS and proxy settings are each optional and compose
//! independently. Proxy fields are inlined into the enclosing object, as the
//! engine expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::is_false;
use crate::secret::Secret;

/// HTTP client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Generic `Authorization` header settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Authorization>,
    /// HTTP basic authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_auth: Option<BasicAuth>,
    /// OAuth2 client-credentials flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth2: Option<OAuth2>,
    /// Literal bearer token.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub bearer_token: Secret,
    /// File holding the bearer token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bearer_token_file: String,
    /// TLS parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
    /// Whether redirects are followed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
    /// Whether HTTP/2 is negotiated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http2: Option<bool>,
    /// Proxy settings, inlined.
    #[serde(flatten)]
    pub proxy: ProxyConfig,
}

impl HttpClientConfig {
    /// Returns true if any authentication mechanism is configured.
    #[must_use]
    pub fn has_auth(&self) -> bool {
        self.authorization.is_some()
            || self.basic_auth.is_some()
            || self.oauth2.is_some()
            || !self.bearer_token.is_empty()
            || !self.bearer_token_file.is_empty()
    }
}

/// Proxy settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Explicit proxy URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy_url: String,
    /// Comma-separated hosts that bypass the proxy.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub no_proxy: String,
    /// Use `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    #[serde(skip_serializing_if = "is_false")]
    pub proxy_from_environment: bool,
    /// Headers sent with CONNECT requests to the proxy.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub proxy_connect_header: BTreeMap<String, Vec<Secret>>,
}

impl ProxyConfig {
    /// Returns true if nothing is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// TLS parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    /// CA certificate file.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ca_file: String,
    /// Client certificate file.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cert_file: String,
    /// Client key file.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key_file: String,
    /// SNI override.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub server_name: String,
    /// Disable certificate verification. Always emitted.
    pub insecure_skip_verify: bool,
    /// Lowest accepted version (`TLS10` .. `TLS13`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub min_version: String,
    /// Highest accepted version (`TLS10` .. `TLS13`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub max_version: String,
}

/// `Authorization` header settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Authorization {
    /// Scheme, `Bearer` when empty.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Literal credentials.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub credentials: Secret,
    /// File holding the credentials.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub credentials_file: String,
}

/// HTTP basic authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicAuth {
    /// User name. Always emitted.
    pub username: String,
    /// Literal password.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub password: Secret,
    /// File holding the password.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password_file: String,
}

/// OAuth2 client-credentials settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuth2 {
    /// Client identifier. Always emitted.
    pub client_id: String,
    /// Client secret. Always emitted.
    pub client_secret: Secret,
    /// File holding the client secret.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_secret_file: String,
    /// Requested scopes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
    /// Token endpoint. Always emitted.
    pub token_url: String,
    /// Extra parameters sent to the token endpoint.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub endpoint_params: BTreeMap<String, String>,
    /// Proxy used to reach the token endpoint, inlined.
    #[serde(flatten)]
    pub proxy: ProxyConfig,
    /// TLS used to reach the token endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
}
