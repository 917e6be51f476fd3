//! Per-integration rule table.
//!
//! Each notifier record implements [`Integration`]. A receiver is checked by
//! walking [`RULES`] in a fixed order, so the first failure reported for a
//! receiver with several broken notifiers is stable.

use std::collections::BTreeSet;
use std::fmt;

use tracing::trace;

use alertcfg_model::{
    DiscordConfig, EmailConfig, HttpClientConfig, JiraConfig, MsTeamsConfig, MsTeamsV2Config,
    OpsgenieConfig, OpsgenieResponder, PagerdutyConfig, PushoverConfig, Receiver,
    RocketChatConfig, SlackAction, SlackConfig, SlackField, SnsConfig, TelegramConfig,
    VictorOpsConfig, WebexConfig, WebhookConfig, WechatConfig,
};

use crate::checks::{
    at_most_one_of, check_duration, check_host_port, check_url, exactly_one_of, require,
    require_one_of,
};
use crate::error::{IntegrationError, ValidationError};
use crate::http::{validate_http_config, validate_tls_config};

/// Custom field keys the VictorOps notifier sets itself.
pub const VICTOROPS_RESERVED_FIELDS: [&str; 7] = [
    "routing_key",
    "message_type",
    "state_message",
    "entity_display_name",
    "monitoring_tool",
    "entity_id",
    "entity_state",
];

/// Responder types OpsGenie accepts.
const OPSGENIE_RESPONDER_TYPES: [&str; 5] = ["team", "teams", "user", "escalation", "schedule"];

/// A notifier kind, one per `*_configs` list of a receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationKind {
    /// `pagerduty_configs`
    Pagerduty,
    /// `opsgenie_configs`
    Opsgenie,
    /// `slack_configs`
    Slack,
    /// `webhook_configs`
    Webhook,
    /// `wechat_configs`
    Wechat,
    /// `email_configs`
    Email,
    /// `victorops_configs`
    VictorOps,
    /// `pushover_configs`
    Pushover,
    /// `sns_configs`
    Sns,
    /// `telegram_configs`
    Telegram,
    /// `webex_configs`
    Webex,
    /// `discord_configs`
    Discord,
    /// `msteams_configs`
    MsTeams,
    /// `msteamsv2_configs`
    MsTeamsV2,
    /// `jira_configs`
    Jira,
    /// `rocketchat_configs`
    RocketChat,
}

impl IntegrationKind {
    /// Returns the receiver key holding this kind's notifiers.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Pagerduty => "pagerduty_configs",
            Self::Opsgenie => "opsgenie_configs",
            Self::Slack => "slack_configs",
            Self::Webhook => "webhook_configs",
            Self::Wechat => "wechat_configs",
            Self::Email => "email_configs",
            Self::VictorOps => "victorops_configs",
            Self::Pushover => "pushover_configs",
            Self::Sns => "sns_configs",
            Self::Telegram => "telegram_configs",
            Self::Webex => "webex_configs",
            Self::Discord => "discord_configs",
            Self::MsTeams => "msteams_configs",
            Self::MsTeamsV2 => "msteamsv2_configs",
            Self::Jira => "jira_configs",
            Self::RocketChat => "rocketchat_configs",
        }
    }
}

impl fmt::Display for IntegrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A notifier record with kind-specific rules.
pub trait Integration {
    /// The kind this record belongs to.
    const KIND: IntegrationKind;

    /// Checks the rules specific to this kind.
    fn check(&self) -> Result<(), IntegrationError>;

    /// Returns the outbound HTTP settings, if any.
    fn http_config(&self) -> Option<&HttpClientConfig>;

    /// Checks the kind's rules, then its HTTP settings.
    fn validate(&self) -> Result<(), IntegrationError> {
        self.check()?;
        if let Some(http) = self.http_config() {
            validate_http_config(http)?;
        }
        Ok(())
    }
}

/// Checks every notifier of one kind, returning the failing index.
pub type ReceiverCheck = fn(&Receiver) -> Result<(), (usize, IntegrationError)>;

/// Integration kinds in the order receivers are checked.
pub const RULES: [(IntegrationKind, ReceiverCheck); 16] = [
    (IntegrationKind::Pagerduty, |r| check_all(&r.pagerduty_configs)),
    (IntegrationKind::Opsgenie, |r| check_all(&r.opsgenie_configs)),
    (IntegrationKind::Slack, |r| check_all(&r.slack_configs)),
    (IntegrationKind::Webhook, |r| check_all(&r.webhook_configs)),
    (IntegrationKind::Wechat, |r| check_all(&r.wechat_configs)),
    (IntegrationKind::Email, |r| check_all(&r.email_configs)),
    (IntegrationKind::VictorOps, |r| check_all(&r.victorops_configs)),
    (IntegrationKind::Pushover, |r| check_all(&r.pushover_configs)),
    (IntegrationKind::Sns, |r| check_all(&r.sns_configs)),
    (IntegrationKind::Telegram, |r| check_all(&r.telegram_configs)),
    (IntegrationKind::Webex, |r| check_all(&r.webex_configs)),
    (IntegrationKind::Discord, |r| check_all(&r.discord_configs)),
    (IntegrationKind::MsTeams, |r| check_all(&r.msteams_configs)),
    (IntegrationKind::MsTeamsV2, |r| check_all(&r.msteamsv2_configs)),
    (IntegrationKind::Jira, |r| check_all(&r.jira_configs)),
    (IntegrationKind::RocketChat, |r| check_all(&r.rocketchat_configs)),
];

fn check_all<T: Integration>(configs: &[T]) -> Result<(), (usize, IntegrationError)> {
    if !configs.is_empty() {
        trace!(kind = %T::KIND, count = configs.len(), "checking notifiers");
    }
    configs
        .iter()
        .enumerate()
        .try_for_each(|(index, config)| config.validate().map_err(|err| (index, err)))
}

/// Validates every notifier of a receiver, stopping at the first failure.
pub fn validate_receiver(receiver: &Receiver) -> Result<(), ValidationError> {
    for (kind, check) in RULES {
        check(receiver).map_err(|(index, source)| ValidationError::Receiver {
            receiver: receiver.name.clone(),
            kind,
            index,
            source,
        })?;
    }
    Ok(())
}

impl Integration for PagerdutyConfig {
    const KIND: IntegrationKind = IntegrationKind::Pagerduty;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("url", &self.url)?;
        require_one_of(
            &["routing_key", "service_key"],
            &[
                !self.routing_key.is_empty() || !self.routing_key_file.is_empty(),
                !self.service_key.is_empty() || !self.service_key_file.is_empty(),
            ],
        )?;
        for (i, link) in self.links.iter().enumerate() {
            check_url("href", &link.href).map_err(|err| err.within(format!("links[{i}]")))?;
        }
        Ok(())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for OpsgenieConfig {
    const KIND: IntegrationKind = IntegrationKind::Opsgenie;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("api_url", &self.api_url)?;
        at_most_one_of(
            &["api_key", "api_key_file"],
            &[!self.api_key.is_empty(), !self.api_key_file.is_empty()],
        )?;
        for (i, responder) in self.responders.iter().enumerate() {
            check_responder(responder).map_err(|err| err.within(format!("responders[{i}]")))?;
        }
        Ok(())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

fn check_responder(responder: &OpsgenieResponder) -> Result<(), IntegrationError> {
    require_one_of(
        &["id", "name", "username"],
        &[
            !responder.id.is_empty(),
            !responder.name.is_empty(),
            !responder.username.is_empty(),
        ],
    )?;
    // Templated types resolve at notification time.
    if responder.kind.contains("{{") {
        return Ok(());
    }
    let kind = responder.kind.to_ascii_lowercase();
    if OPSGENIE_RESPONDER_TYPES.contains(&kind.as_str()) {
        Ok(())
    } else {
        Err(IntegrationError::InvalidValue {
            field: "type".to_string(),
            value: responder.kind.clone(),
            reason: format!("must be one of {}", OPSGENIE_RESPONDER_TYPES.join(", ")),
        })
    }
}

impl Integration for SlackConfig {
    const KIND: IntegrationKind = IntegrationKind::Slack;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("api_url", self.api_url.expose())?;
        at_most_one_of(
            &["api_url", "api_url_file"],
            &[!self.api_url.is_empty(), !self.api_url_file.is_empty()],
        )?;
        for (i, action) in self.actions.iter().enumerate() {
            check_slack_action(action).map_err(|err| err.within(format!("actions[{i}]")))?;
        }
        for (i, field) in self.fields.iter().enumerate() {
            check_slack_field(field).map_err(|err| err.within(format!("fields[{i}]")))?;
        }
        Ok(())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

fn check_slack_action(action: &SlackAction) -> Result<(), IntegrationError> {
    require("type", &action.kind)?;
    require("text", &action.text)?;
    if !action.url.is_empty() || (!action.name.is_empty() && !action.value.is_empty()) {
        Ok(())
    } else {
        Err(IntegrationError::OneOfRequired {
            fields: &["url", "name and value"],
        })
    }
}

fn check_slack_field(field: &SlackField) -> Result<(), IntegrationError> {
    require("title", &field.title)?;
    require("value", &field.value)
}

impl Integration for WebhookConfig {
    const KIND: IntegrationKind = IntegrationKind::Webhook;

    fn check(&self) -> Result<(), IntegrationError> {
        exactly_one_of(
            &["url", "url_file"],
            &[!self.url.is_empty(), !self.url_file.is_empty()],
        )?;
        check_url("url", self.url.expose())?;
        if let Some(timeout) = &self.timeout {
            check_duration("timeout", timeout)?;
        }
        Ok(())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for WechatConfig {
    const KIND: IntegrationKind = IntegrationKind::Wechat;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("api_url", &self.api_url)
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for EmailConfig {
    const KIND: IntegrationKind = IntegrationKind::Email;

    fn check(&self) -> Result<(), IntegrationError> {
        require("to", &self.to)?;
        check_host_port("smarthost", &self.smarthost)?;

        let mut seen = BTreeSet::new();
        for name in self.headers.keys() {
            let normalized = name.to_lowercase();
            if !seen.insert(normalized.clone()) {
                return Err(IntegrationError::DuplicateHeader { name: normalized });
            }
        }

        at_most_one_of(
            &["auth_password", "auth_password_file"],
            &[
                !self.auth_password.is_empty(),
                !self.auth_password_file.is_empty(),
            ],
        )?;
        if let Some(tls) = &self.tls_config {
            validate_tls_config(tls).map_err(|source| IntegrationError::Tls {
                field: "tls_config",
                source,
            })?;
        }
        Ok(())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        None
    }
}

impl Integration for VictorOpsConfig {
    const KIND: IntegrationKind = IntegrationKind::VictorOps;

    fn check(&self) -> Result<(), IntegrationError> {
        if let Some(key) = self
            .custom_fields
            .keys()
            .find(|key| VICTOROPS_RESERVED_FIELDS.contains(&key.as_str()))
        {
            return Err(IntegrationError::ReservedField { key: key.clone() });
        }
        require("routing_key", &self.routing_key)?;
        check_url("api_url", &self.api_url)?;
        at_most_one_of(
            &["api_key", "api_key_file"],
            &[!self.api_key.is_empty(), !self.api_key_file.is_empty()],
        )
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for PushoverConfig {
    const KIND: IntegrationKind = IntegrationKind::Pushover;

    fn check(&self) -> Result<(), IntegrationError> {
        require_one_of(
            &["user_key", "user_key_file"],
            &[!self.user_key.is_empty(), !self.user_key_file.is_empty()],
        )?;
        require_one_of(
            &["token", "token_file"],
            &[!self.token.is_empty(), !self.token_file.is_empty()],
        )?;
        check_url("url", &self.url)?;
        if let Some(retry) = &self.retry {
            check_duration("retry", retry)?;
        }
        if let Some(expire) = &self.expire {
            check_duration("expire", expire)?;
        }
        check_duration("ttl", &self.ttl)
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for SnsConfig {
    const KIND: IntegrationKind = IntegrationKind::Sns;

    fn check(&self) -> Result<(), IntegrationError> {
        exactly_one_of(
            &["target_arn", "topic_arn", "phone_number"],
            &[
                !self.target_arn.is_empty(),
                !self.topic_arn.is_empty(),
                !self.phone_number.is_empty(),
            ],
        )?;
        check_url("api_url", &self.api_url)
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for TelegramConfig {
    const KIND: IntegrationKind = IntegrationKind::Telegram;

    fn check(&self) -> Result<(), IntegrationError> {
        require_one_of(
            &["bot_token", "bot_token_file"],
            &[!self.bot_token.is_empty(), !self.bot_token_file.is_empty()],
        )?;
        if self.chat_id == 0 {
            return Err(IntegrationError::MissingField { field: "chat_id" });
        }
        check_url("api_url", &self.api_url)
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for WebexConfig {
    const KIND: IntegrationKind = IntegrationKind::Webex;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("api_url", &self.api_url)?;
        require("room_id", &self.room_id)
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for DiscordConfig {
    const KIND: IntegrationKind = IntegrationKind::Discord;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("webhook_url", self.webhook_url.expose())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for MsTeamsConfig {
    const KIND: IntegrationKind = IntegrationKind::MsTeams;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("webhook_url", self.webhook_url.expose())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for MsTeamsV2Config {
    const KIND: IntegrationKind = IntegrationKind::MsTeamsV2;

    fn check(&self) -> Result<(), IntegrationError> {
        exactly_one_of(
            &["webhook_url", "webhook_url_file"],
            &[!self.webhook_url.is_empty(), !self.webhook_url_file.is_empty()],
        )?;
        check_url("webhook_url", self.webhook_url.expose())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for JiraConfig {
    const KIND: IntegrationKind = IntegrationKind::Jira;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("api_url", &self.api_url)?;
        require("project", &self.project)?;
        require("issue_type", &self.issue_type)?;
        check_duration("reopen_duration", &self.reopen_duration)
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}

impl Integration for RocketChatConfig {
    const KIND: IntegrationKind = IntegrationKind::RocketChat;

    fn check(&self) -> Result<(), IntegrationError> {
        check_url("api_url", &self.api_url)?;
        if self.token.is_some() != self.token_id.is_some() {
            return Err(IntegrationError::RequiredTogether {
                first: "token",
                second: "token_id",
            });
        }
        for (i, action) in self.actions.iter().enumerate() {
            check_url("url", &action.url).map_err(|err| err.within(format!("actions[{i}]")))?;
        }
        Ok(())
    }

    fn http_config(&self) -> Option<&HttpClientConfig> {
        self.http_config.as_ref()
    }
}
