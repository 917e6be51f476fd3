//! The top-level configuration document.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::global::GlobalConfig;
use crate::receiver::Receiver;
use crate::render::{self, SecretPolicy};
use crate::route::{InhibitRule, Route};
use crate::time_interval::TimeInterval;

/// A complete Alertmanager configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertmanagerConfig {
    /// Global defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<GlobalConfig>,
    /// Root of the routing tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
    /// Inhibition rules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inhibit_rules: Vec<InhibitRule>,
    /// Receivers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub receivers: Vec<Receiver>,
    /// Deprecated spelling of `time_intervals`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mute_time_intervals: Vec<TimeInterval>,
    /// Named time intervals.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub time_intervals: Vec<TimeInterval>,
    /// Notification template files. Always emitted.
    pub templates: Vec<String>,
}

impl AlertmanagerConfig {
    /// Parses a YAML document.
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parses a JSON document.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Renders the document as YAML with secrets in the clear.
    pub fn to_yaml(&self) -> Result<String> {
        render::render_yaml(self, SecretPolicy::Reveal)
    }

    /// Returns every named time interval, deprecated list first.
    pub fn all_time_intervals(&self) -> impl Iterator<Item = &TimeInterval> {
        self.mute_time_intervals.iter().chain(&self.time_intervals)
    }

    /// Looks up a receiver by name.
    #[must_use]
    pub fn receiver(&self, name: &str) -> Option<&Receiver> {
        self.receivers.iter().find(|r| r.name == name)
    }
}
