//! Secret-transparent Alertmanager configuration model.
//!
//! `alertcfg-model` mirrors the Alertmanager configuration schema field for
//! field, so a document built here can be handed to the engine unmodified.
//! Unlike the engine's own types, secret-bearing fields serialize as literal
//! values unless a document is rendered under [`SecretPolicy::Redact`].
//!
//! The crate is a pure data holder: it performs no validation and no I/O.
//! Semantic checks live in `alertcfg-validation`.
//!
//! # Example
//!
//! ```rust
//! use alertcfg_model::{
//!     AlertmanagerConfig, PagerdutyConfig, Receiver, Route, Secret, SecretPolicy, render_yaml,
//! };
//!
//! let mut pager = Receiver::new("pager");
//! pager.pagerduty_configs.push(PagerdutyConfig {
//!     routing_key: Secret::new("abc123"),
//!     ..PagerdutyConfig::default()
//! });
//!
//! let config = AlertmanagerConfig {
//!     route: Some(Route::new("pager").group_by(["alertname"])),
//!     receivers: vec![pager],
//!     ..AlertmanagerConfig::default()
//! };
//!
//! // Generated documents keep the credentials...
//! assert!(config.to_yaml()?.contains("routing_key: abc123"));
//!
//! // ...review output does not.
//! let redacted = render_yaml(&config, SecretPolicy::Redact)?;
//! assert!(!redacted.contains("abc123"));
//! # Ok::<(), alertcfg_model::ModelError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod global;
pub mod http;
pub mod integrations;
pub mod receiver;
pub mod render;
pub mod route;
pub mod secret;
pub mod time_interval;

// Re-export main types at crate root
pub use config::AlertmanagerConfig;
pub use error::{ModelError, Result};
pub use global::GlobalConfig;
pub use http::{Authorization, BasicAuth, HttpClientConfig, OAuth2, ProxyConfig, TlsConfig};
pub use integrations::{
    DiscordConfig, EmailConfig, JiraConfig, MsTeamsConfig, MsTeamsV2Config, OpsgenieConfig,
    OpsgenieResponder, PagerdutyConfig, PagerdutyImage, PagerdutyLink, PushoverConfig,
    RocketChatAttachmentAction, RocketChatAttachmentField, RocketChatConfig, SigV4Config,
    SlackAction, SlackConfig, SlackConfirmationField, SlackField, SnsConfig, TelegramConfig,
    VictorOpsConfig, WebexConfig, WebhookConfig, WechatConfig,
};
pub use receiver::Receiver;
pub use render::{render_json, render_yaml};
pub use route::{GROUP_BY_ALL, InhibitRule, Route};
pub use secret::{REDACTED, Secret, SecretPolicy, current_policy};
pub use time_interval::{TimeInterval, TimePeriod, TimeRange};

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
