//! Validator settings.
//!
//! Every option is off by default except time interval uniqueness, so a
//! default [`ValidatorConfig`] accepts exactly what the engine accepts.

use serde::{Deserialize, Serialize};

/// Optional hardening applied on top of the engine's own rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Reject routing trees with more levels than this. The root is level 1.
    #[serde(default)]
    pub max_route_depth: Option<usize>,
    /// Reject route timers that are set but evaluate to zero.
    #[serde(default)]
    pub require_positive_durations: bool,
    /// Reject two time intervals sharing a name.
    #[serde(default = "default_check_time_interval_uniqueness")]
    pub check_time_interval_uniqueness: bool,
}

fn default_check_time_interval_uniqueness() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_route_depth: None,
            require_positive_durations: false,
            check_time_interval_uniqueness: default_check_time_interval_uniqueness(),
        }
    }
}

impl ValidatorConfig {
    /// Sets the maximum routing tree depth.
    #[must_use]
    pub fn with_max_route_depth(mut self, depth: usize) -> Self {
        self.max_route_depth = Some(depth);
        self
    }

    /// Requires route timers to be positive when set.
    #[must_use]
    pub fn with_positive_durations(mut self) -> Self {
        self.require_positive_durations = true;
        self
    }
}
