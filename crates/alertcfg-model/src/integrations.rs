//! Per-integration notifier settings.
//!
//! Each record mirrors one `*_configs` entry of a receiver. Credential
//! fields use [`Secret`] so they stay readable in generated documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::http::{HttpClientConfig, TlsConfig};
use crate::is_false;
use crate::secret::Secret;

/// Webhook notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// Endpoint receiving the payload.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub url: Secret,
    /// File holding the endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url_file: String,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// Maximum number of alerts per payload, 0 for all.
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub max_alerts: i32,
    /// Request timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

/// PagerDuty notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerdutyConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// Events API v1 integration key.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub service_key: Secret,
    /// File holding the service key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_key_file: String,
    /// Events API v2 integration key.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub routing_key: Secret,
    /// File holding the routing key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub routing_key_file: String,
    /// Events endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Client name shown in the incident.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client: String,
    /// Backlink to the sender.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_url: String,
    /// Incident description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Arbitrary key/value details.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
    /// Images attached to the incident.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<PagerdutyImage>,
    /// Links attached to the incident.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<PagerdutyLink>,
    /// Incident severity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub severity: String,
    /// Incident class.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class: String,
    /// Affected component.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub component: String,
    /// Logical grouping of components.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group: String,
    /// Affected system.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
}

/// A link attached to a PagerDuty incident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerdutyLink {
    /// Target.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
    /// Label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
}

/// An image attached to a PagerDuty incident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerdutyImage {
    /// Image source.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub src: String,
    /// Alternative text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alt: String,
    /// Link target.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub href: String,
}

/// OpsGenie notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsgenieConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// API key.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub api_key: Secret,
    /// File holding the API key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key_file: String,
    /// API endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// Alert text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Alert description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Backlink to the sender.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    /// Arbitrary key/value details.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, String>,
    /// Teams, users, schedules or escalations notified.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub responders: Vec<OpsgenieResponder>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tags: String,
    /// Additional note.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub note: String,
    /// Priority, `P1` to `P5`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub priority: String,
    /// Update existing alerts instead of recreating them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_alerts: Option<bool>,
    /// Affected entity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity: String,
    /// Comma-separated actions.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub actions: String,
}

/// A recipient of an OpsGenie alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsgenieResponder {
    /// Responder id.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Responder name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Responder user name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// `team`, `teams`, `user`, `escalation` or `schedule`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

/// WeChat notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WechatConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// API secret.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub api_secret: Secret,
    /// API endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// Corporation id.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub corp_id: String,
    /// Application id.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub agent_id: String,
    /// Recipient users.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_user: String,
    /// Recipient parties.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_party: String,
    /// Recipient tags.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to_tag: String,
    /// Message body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// `text` or `markdown`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_type: String,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
}

/// Slack notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// Incoming webhook URL.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub api_url: Secret,
    /// File holding the webhook URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url_file: String,
    /// Channel or user to post to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub channel: String,
    /// Sender name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Attachment colour.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    /// Attachment title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Link on the title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title_link: String,
    /// Text above the attachment.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pretext: String,
    /// Attachment body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Attachment fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SlackField>,
    /// Default `short` value for fields.
    #[serde(skip_serializing_if = "is_false")]
    pub short_fields: bool,
    /// Attachment footer.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub footer: String,
    /// Plain-text summary.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fallback: String,
    /// Callback id for interactive messages.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub callback_id: String,
    /// Emoji avatar.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_emoji: String,
    /// Image avatar.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
    /// Attachment image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    /// Attachment thumbnail.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumb_url: String,
    /// Link channel and user names.
    #[serde(skip_serializing_if = "is_false")]
    pub link_names: bool,
    /// Fields rendered as markdown.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
    /// Interactive buttons.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<SlackAction>,
}

/// A Slack attachment field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackField {
    /// Field title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Field value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Render side by side with other short fields.
    #[serde(skip_serializing_if = "is_false")]
    pub short: bool,
}

/// A Slack button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackAction {
    /// Action type, normally `button`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Button label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Link opened by the button.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// `default`, `primary` or `danger`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub style: String,
    /// Interactive action name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Interactive action value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Confirmation dialog.
    #[serde(rename = "confirm", skip_serializing_if = "Option::is_none")]
    pub confirm_field: Option<SlackConfirmationField>,
}

/// Confirmation dialog shown before a Slack action runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfirmationField {
    /// Dialog body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Dialog title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Confirm button label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ok_text: String,
    /// Dismiss button label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dismiss_text: String,
}

/// Email notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// Recipient address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub to: String,
    /// Sender address.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    /// Hostname sent in `HELO`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hello: String,
    /// SMTP relay as `host:port`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub smarthost: String,
    /// SMTP user name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_username: String,
    /// SMTP password.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub auth_password: Secret,
    /// File holding the SMTP password.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_password_file: String,
    /// CRAM-MD5 secret.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub auth_secret: Secret,
    /// PLAIN identity.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth_identity: String,
    /// Extra message headers.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// HTML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Require STARTTLS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_tls: Option<bool>,
    /// TLS parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_config: Option<TlsConfig>,
}

/// Pushover notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushoverConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// Recipient user key.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub user_key: Secret,
    /// File holding the user key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_key_file: String,
    /// Application token.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub token: Secret,
    /// File holding the application token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token_file: String,
    /// Notification title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Notification body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Supplementary URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Title of the supplementary URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url_title: String,
    /// Message lifetime.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ttl: String,
    /// Target device.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub device: String,
    /// Notification sound.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sound: String,
    /// Notification priority.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub priority: String,
    /// Retry period for emergency priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<String>,
    /// Expiry for emergency priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<String>,
    /// Body is HTML.
    #[serde(skip_serializing_if = "is_false")]
    pub html: bool,
}

/// Amazon SNS notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnsConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// SNS endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// AWS request signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigv4: Option<SigV4Config>,
    /// Topic to publish to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub topic_arn: String,
    /// Phone number for SMS delivery.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
    /// Mobile endpoint to publish to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_arn: String,
    /// Message subject.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Message body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Message attributes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

/// AWS Signature Version 4 settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigV4Config {
    /// AWS region.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    /// Access key id.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub access_key: String,
    /// Secret access key.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub secret_key: Secret,
    /// Named credentials profile.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile: String,
    /// Role to assume.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_arn: String,
}

/// Telegram notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// Bot API endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// Bot token.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub bot_token: Secret,
    /// File holding the bot token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bot_token_file: String,
    /// Chat to post to.
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub chat_id: i64,
    /// Forum topic to post to.
    #[serde(skip_serializing_if = "is_zero_i32")]
    pub message_thread_id: i32,
    /// Message body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Send silently.
    #[serde(skip_serializing_if = "is_false")]
    pub disable_notifications: bool,
    /// `Markdown`, `MarkdownV2` or `HTML`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parse_mode: String,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
}

/// Discord notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// Channel webhook URL.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub webhook_url: Secret,
    /// Embed title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Embed body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Plain message content.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Sender name override.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Sender avatar override.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar_url: String,
}

/// Cisco Webex notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebexConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// API endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// Message body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Room to post to. Always emitted.
    pub room_id: String,
}

/// VictorOps (Splunk On-Call) notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VictorOpsConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// API key.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub api_key: Secret,
    /// File holding the API key.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key_file: String,
    /// API endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// Routing key of the target team.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub routing_key: String,
    /// `CRITICAL`, `WARNING` or `INFO`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_type: String,
    /// Long-form message.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state_message: String,
    /// Summary of the alerted problem.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub entity_display_name: String,
    /// Monitoring tool the message comes from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub monitoring_tool: String,
    /// Extra fields added to the payload.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, String>,
}

/// Microsoft Teams notifier (connector webhooks).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsTeamsConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// Incoming webhook URL. Always emitted.
    pub webhook_url: Secret,
    /// Card title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Card summary.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Card body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
}

/// Microsoft Teams notifier (workflow webhooks).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsTeamsV2Config {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// Workflow webhook URL.
    #[serde(skip_serializing_if = "Secret::is_empty")]
    pub webhook_url: Secret,
    /// File holding the webhook URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webhook_url_file: String,
    /// Card title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Card body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
}

/// Jira notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraConfig {
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// REST API endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// Project key issues are created in.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project: String,
    /// Issue summary.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Issue description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Issue labels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Issue priority.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub priority: String,
    /// Issue type.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issue_type: String,
    /// Transition applied when an alert re-fires.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reopen_transition: String,
    /// Transition applied when an alert resolves.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resolve_transition: String,
    /// Resolution that prevents reopening.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub wont_fix_resolution: String,
    /// How long after resolution an issue may be reopened.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reopen_duration: String,
    /// Arbitrary issue fields.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Rocket.Chat notifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketChatConfig {
    /// Notify about resolved alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_resolved: Option<bool>,
    /// HTTP client settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_config: Option<HttpClientConfig>,
    /// API endpoint.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
    /// Personal access token id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<Secret>,
    /// Personal access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Secret>,
    /// Channel override, like `#other-channel` or `@username`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub channel: String,
    /// Attachment colour.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    /// Attachment title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Link on the title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title_link: String,
    /// Attachment body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Attachment fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<RocketChatAttachmentField>,
    /// Default `short` value for fields. Always emitted.
    pub short_fields: bool,
    /// Emoji avatar.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub emoji: String,
    /// Image avatar.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
    /// Attachment image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    /// Attachment thumbnail.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub thumb_url: String,
    /// Link channel and user names. Always emitted.
    pub link_names: bool,
    /// Attachment buttons.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RocketChatAttachmentAction>,
}

/// A Rocket.Chat attachment field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketChatAttachmentField {
    /// Render side by side. Always emitted, `null` when unset.
    pub short: Option<bool>,
    /// Field title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Field value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// A Rocket.Chat attachment button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketChatAttachmentAction {
    /// Action type.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Button label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Link opened by the button.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Button image.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    /// Open the link in a web view. Always emitted.
    pub is_webview: bool,
    /// Web view height, `full`, `tall` or `compact`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub webview_height_ratio: String,
    /// Message sent by the button.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub msg: String,
    /// Send the message in the chat window. Always emitted.
    pub msg_in_chat_window: bool,
    /// `sendMessage` or `respondWithMessage`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub msg_processing_type: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}
