//! The routing tree and inhibition rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::is_false;

/// The group-by key meaning "group by every label".
pub const GROUP_BY_ALL: &str = "...";

/// A node in the routing tree.
///
/// A child without a receiver inherits its parent's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Receiver handling alerts matched by this node.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub receiver: String,
    /// Labels alerts are grouped by.
    #[serde(rename = "group_by", skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    /// Deprecated equality matchers.
    #[serde(rename = "match", skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,
    /// Deprecated regex matchers.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub match_re: BTreeMap<String, String>,
    /// Matcher expressions such as `severity=~"critical|page"`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matchers: Vec<String>,
    /// Keep evaluating siblings after a match.
    #[serde(rename = "continue", skip_serializing_if = "is_false")]
    pub continue_matching: bool,
    /// Child routes, in evaluation order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
    /// How long to buffer a new group before the first notification.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group_wait: String,
    /// How long to wait before notifying about new alerts in a group.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group_interval: String,
    /// How long to wait before re-sending a notification.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repeat_interval: String,
    /// Named time intervals during which the route is muted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mute_time_intervals: Vec<String>,
    /// Named time intervals outside which the route is muted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub active_time_intervals: Vec<String>,
}

impl Route {
    /// Creates a route targeting the given receiver.
    #[must_use]
    pub fn new(receiver: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            ..Self::default()
        }
    }

    /// Sets the group-by keys.
    #[must_use]
    pub fn group_by<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a matcher expression.
    #[must_use]
    pub fn matcher(mut self, expr: impl Into<String>) -> Self {
        self.matchers.push(expr.into());
        self
    }

    /// Appends a child route.
    #[must_use]
    pub fn child(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends a mute time interval reference.
    #[must_use]
    pub fn mute_during(mut self, interval: impl Into<String>) -> Self {
        self.mute_time_intervals.push(interval.into());
        self
    }

    /// Appends an active time interval reference.
    #[must_use]
    pub fn active_during(mut self, interval: impl Into<String>) -> Self {
        self.active_time_intervals.push(interval.into());
        self
    }

    /// Sets `group_wait`, `group_interval` and `repeat_interval`.
    #[must_use]
    pub fn timers(
        mut self,
        group_wait: impl Into<String>,
        group_interval: impl Into<String>,
        repeat_interval: impl Into<String>,
    ) -> Self {
        self.group_wait = group_wait.into();
        self.group_interval = group_interval.into();
        self.repeat_interval = repeat_interval.into();
        self
    }

    /// Sets the `continue` flag.
    #[must_use]
    pub fn continue_matching(mut self, value: bool) -> Self {
        self.continue_matching = value;
        self
    }

    /// Returns the depth of the subtree rooted here (a leaf has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.routes.iter().map(Route::depth).max().unwrap_or(0)
    }
}

/// Suppresses notifications for target alerts while a matching source alert
/// is firing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InhibitRule {
    /// Deprecated equality matchers on the muted alert.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub target_match: BTreeMap<String, String>,
    /// Deprecated regex matchers on the muted alert.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub target_match_re: BTreeMap<String, String>,
    /// Matcher expressions on the muted alert.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub target_matchers: Vec<String>,
    /// Deprecated equality matchers on the inhibiting alert.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub source_match: BTreeMap<String, String>,
    /// Deprecated regex matchers on the inhibiting alert.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub source_match_re: BTreeMap<String, String>,
    /// Matcher expressions on the inhibiting alert.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_matchers: Vec<String>,
    /// Labels that must be equal on source and target.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub equal: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyword_fields_use_engine_names() {
        let mut route = Route::new("default").continue_matching(true);
        route.match_labels.insert("team".to_string(), "db".to_string());
        let yaml = serde_yaml::to_string(&route).unwrap();
        assert_eq!(yaml, "receiver: default\nmatch:\n  team: db\ncontinue: true\n");
    }

    #[test]
    fn builder_assembles_tree() {
        let route = Route::new("default")
            .group_by(["alertname", "cluster"])
            .timers("30s", "5m", "4h")
            .child(Route::new("pager").matcher("severity=\"critical\""))
            .child(Route::default().mute_during("nights"));
        assert_eq!(route.routes.len(), 2);
        assert_eq!(route.group_by, vec!["alertname", "cluster"]);
        assert_eq!(route.routes[1].mute_time_intervals, vec!["nights"]);
        assert_eq!(route.depth(), 2);
    }

    #[test]
    fn depth_follows_deepest_branch() {
        let route = Route::new("a")
            .child(Route::default())
            .child(Route::default().child(Route::default().child(Route::default())));
        assert_eq!(route.depth(), 4);
    }

    #[test]
    fn nested_routes_deserialize() {
        let yaml = "receiver: default\nroutes:\n- receiver: ops\n  continue: true\n  routes:\n  - matchers: ['env=\"prod\"']\n";
        let route: Route = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(route.routes[0].receiver, "ops");
        assert!(route.routes[0].continue_matching);
        assert_eq!(route.routes[0].routes[0].matchers, vec!["env=\"prod\""]);
    }

    #[test]
    fn inhibit_rule_omits_empty_sections() {
        let rule = InhibitRule {
            source_matchers: vec!["severity=critical".to_string()],
            target_matchers: vec!["severity=warning".to_string()],
            equal: vec!["alertname".to_string()],
            ..InhibitRule::default()
        };
        let yaml = serde_yaml::to_string(&rule).unwrap();
        assert_eq!(
            yaml,
            "target_matchers:\n- severity=warning\nsource_matchers:\n- severity=critical\nequal:\n- alertname\n"
        );
    }
}
