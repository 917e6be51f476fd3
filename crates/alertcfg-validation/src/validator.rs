//! The validation pass.
//!
//! A pass builds the receiver and time interval name sets, then walks the
//! routing tree against them. It stops at the first violation. All working
//! state lives on the stack of the call, so one [`Validator`] may be shared
//! freely across threads.

use std::collections::BTreeSet;

use alertcfg_model::{AlertmanagerConfig, Receiver, Route, TimeInterval};
use tracing::{debug, info, warn};

use crate::config::ValidatorConfig;
use crate::error::{Result, TimeIntervalError, ValidationError};
use crate::global::validate_global;
use crate::inhibit::validate_inhibit_rule;
use crate::integrations::validate_receiver;
use crate::route::{RouteContext, validate_route};
use crate::time_interval::validate_time_interval;

/// Validates assembled configurations.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom settings.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the settings in use.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates a whole document.
    ///
    /// Checks run in order: global settings, receivers, time intervals,
    /// the routing tree, then inhibition rules.
    pub fn validate(&self, document: &AlertmanagerConfig) -> Result<()> {
        let result = self.run(document);
        match &result {
            Ok(()) => info!(
                receivers = document.receivers.len(),
                inhibit_rules = document.inhibit_rules.len(),
                "configuration accepted"
            ),
            Err(err) => warn!(entity = %err.entity(), error = %err, "configuration rejected"),
        }
        result
    }

    /// Validates receivers, time intervals and a root route without the rest
    /// of a document.
    pub fn validate_parts(
        &self,
        receivers: &[Receiver],
        time_intervals: &[TimeInterval],
        route: &Route,
    ) -> Result<()> {
        let receiver_names = self.receiver_names(receivers)?;
        let interval_names = self.time_interval_names(time_intervals.iter())?;
        self.check_route(route, &receiver_names, &interval_names)
    }

    fn run(&self, document: &AlertmanagerConfig) -> Result<()> {
        if let Some(global) = &document.global {
            validate_global(global).map_err(|source| ValidationError::Global { source })?;
        }

        let receiver_names = self.receiver_names(&document.receivers)?;
        let interval_names = self.time_interval_names(document.all_time_intervals())?;

        let route = document.route.as_ref().ok_or(ValidationError::MissingRoute)?;
        self.check_route(route, &receiver_names, &interval_names)?;

        for (index, rule) in document.inhibit_rules.iter().enumerate() {
            validate_inhibit_rule(rule)
                .map_err(|source| ValidationError::InhibitRule { index, source })?;
        }
        Ok(())
    }

    fn receiver_names<'a>(&self, receivers: &'a [Receiver]) -> Result<BTreeSet<&'a str>> {
        let mut names = BTreeSet::new();
        for (index, receiver) in receivers.iter().enumerate() {
            if receiver.name.is_empty() {
                return Err(ValidationError::UnnamedReceiver { index });
            }
            if !names.insert(receiver.name.as_str()) {
                return Err(ValidationError::DuplicateReceiver {
                    name: receiver.name.clone(),
                });
            }
            validate_receiver(receiver)?;
            debug!(
                receiver = %receiver.name,
                integrations = receiver.integration_count(),
                "receiver validated"
            );
        }
        Ok(names)
    }

    fn time_interval_names<'a>(
        &self,
        intervals: impl Iterator<Item = &'a TimeInterval>,
    ) -> Result<BTreeSet<&'a str>> {
        let mut names = BTreeSet::new();
        for (index, interval) in intervals.enumerate() {
            validate_time_interval(interval)
                .map_err(|source| ValidationError::TimeInterval { index, source })?;
            if !names.insert(interval.name.as_str()) && self.config.check_time_interval_uniqueness {
                return Err(ValidationError::TimeInterval {
                    index,
                    source: TimeIntervalError::DuplicateName {
                        name: interval.name.clone(),
                    },
                });
            }
            debug!(time_interval = %interval.name, index, "time interval registered");
        }
        Ok(names)
    }

    fn check_route(
        &self,
        route: &Route,
        receivers: &BTreeSet<&str>,
        time_intervals: &BTreeSet<&str>,
    ) -> Result<()> {
        let ctx = RouteContext {
            receivers,
            time_intervals,
            config: &self.config,
        };
        validate_route(route, ctx, true)?;
        debug!(depth = route.depth(), "routing tree validated");
        Ok(())
    }
}

/// Validates a document with the default settings.
///
/// # Example
///
/// ```
/// use alertcfg_model::{AlertmanagerConfig, Receiver, Route};
/// use alertcfg_validation::validate_config;
///
/// let config = AlertmanagerConfig {
///     route: Some(Route::new("default").group_by(["alertname"])),
///     receivers: vec![Receiver::new("default")],
///     ..AlertmanagerConfig::default()
/// };
/// assert!(validate_config(&config).is_ok());
///
/// let broken = AlertmanagerConfig {
///     route: Some(Route::new("missing")),
///     ..config
/// };
/// assert_eq!(
///     validate_config(&broken).unwrap_err().to_string(),
///     "receiver \"missing\" not found"
/// );
/// ```
pub fn validate_config(document: &AlertmanagerConfig) -> Result<()> {
    Validator::new().validate(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EntityKind, IntegrationError, RouteError};
    use crate::integrations::IntegrationKind;
    use alertcfg_model::{
        GlobalConfig, InhibitRule, PagerdutyConfig, Secret, TimePeriod, TimeRange,
    };
    use pretty_assertions::assert_eq;

    fn document() -> AlertmanagerConfig {
        let mut pager = Receiver::new("pager");
        pager.pagerduty_configs.push(PagerdutyConfig {
            routing_key: Secret::new("key"),
            ..PagerdutyConfig::default()
        });
        AlertmanagerConfig {
            route: Some(
                Route::new("default")
                    .group_by(["alertname", "cluster"])
                    .timers("30s", "5m", "4h")
                    .child(
                        Route::new("pager")
                            .matcher("severity=critical")
                            .mute_during("weekends"),
                    ),
            ),
            receivers: vec![Receiver::new("default"), pager],
            time_intervals: vec![TimeInterval::new(
                "weekends",
                vec![TimePeriod {
                    weekdays: vec!["saturday".to_string(), "sunday".to_string()],
                    ..TimePeriod::default()
                }],
            )],
            ..AlertmanagerConfig::default()
        }
    }

    #[test]
    fn accepts_valid_document() {
        assert_eq!(validate_config(&document()), Ok(()));
    }

    #[test]
    fn rejects_duplicate_receiver() {
        let mut doc = document();
        doc.receivers.push(Receiver::new("pager"));
        let err = validate_config(&doc).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateReceiver {
                name: "pager".to_string()
            }
        );
        assert_eq!(err.entity(), EntityKind::Receiver);
    }

    #[test]
    fn rejects_unnamed_receiver() {
        let mut doc = document();
        doc.receivers.push(Receiver::default());
        assert_eq!(
            validate_config(&doc),
            Err(ValidationError::UnnamedReceiver { index: 2 })
        );
    }

    #[test]
    fn rejects_invalid_notifier() {
        let mut doc = document();
        doc.receivers[1].pagerduty_configs[0].routing_key = Secret::default();
        let err = validate_config(&doc).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Receiver {
                ref receiver,
                kind: IntegrationKind::Pagerduty,
                index: 0,
                source: IntegrationError::OneOfRequired { .. },
            } if receiver == "pager"
        ));
    }

    #[test]
    fn rejects_missing_route() {
        let mut doc = document();
        doc.route = None;
        let err = validate_config(&doc).unwrap_err();
        assert_eq!(err, ValidationError::MissingRoute);
        assert_eq!(err.route_path(), Some(vec![]));
    }

    #[test]
    fn route_failure_keeps_path() {
        let mut doc = document();
        if let Some(route) = doc.route.as_mut() {
            route.routes[0].receiver = "x".to_string();
        }
        let err = validate_config(&doc).unwrap_err();
        assert_eq!(err.to_string(), "route[0]: receiver \"x\" not found");
        assert_eq!(err.route_path(), Some(vec![0]));
    }

    #[test]
    fn mute_and_active_intervals_share_names() {
        let mut doc = document();
        doc.mute_time_intervals
            .push(TimeInterval::new("maintenance", vec![]));
        if let Some(route) = doc.route.as_mut() {
            route.routes[0].active_time_intervals.push("maintenance".to_string());
        }
        assert_eq!(validate_config(&doc), Ok(()));
    }

    #[test]
    fn duplicate_interval_names() {
        let mut doc = document();
        doc.mute_time_intervals
            .push(TimeInterval::new("weekends", vec![]));
        let err = validate_config(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "time interval[1] is invalid: time interval \"weekends\" is not unique"
        );

        let lenient = Validator::with_config(ValidatorConfig {
            check_time_interval_uniqueness: false,
            ..ValidatorConfig::default()
        });
        assert_eq!(lenient.validate(&doc), Ok(()));
    }

    #[test]
    fn invalid_interval_reports_index() {
        let mut doc = document();
        doc.time_intervals.push(TimeInterval::new(
            "nights",
            vec![TimePeriod {
                times: vec![TimeRange::new("22:00", "06:00")],
                ..TimePeriod::default()
            }],
        ));
        let err = validate_config(&doc).unwrap_err();
        assert!(matches!(err, ValidationError::TimeInterval { index: 1, .. }));
        assert_eq!(err.entity(), EntityKind::TimeInterval);
    }

    #[test]
    fn global_checked_first() {
        let mut doc = document();
        doc.receivers.push(Receiver::new("pager"));
        doc.global = Some(GlobalConfig {
            pagerduty_url: Some("events.pagerduty.com".to_string()),
            ..GlobalConfig::default()
        });
        let err = validate_config(&doc).unwrap_err();
        assert_eq!(err.entity(), EntityKind::Global);
    }

    #[test]
    fn inhibit_rules_checked_last() {
        let mut doc = document();
        doc.inhibit_rules.push(InhibitRule {
            source_matchers: vec!["severity=critical".to_string()],
            target_matchers: vec!["=warning".to_string()],
            ..InhibitRule::default()
        });
        let err = validate_config(&doc).unwrap_err();
        assert!(err.to_string().starts_with("inhibit_rules[0]: target_matchers[0]"));
        assert_eq!(err.entity(), EntityKind::InhibitRule);
    }

    #[test]
    fn validate_parts_without_document() {
        let receivers = vec![Receiver::new("default")];
        let validator = Validator::new();
        assert_eq!(
            validator.validate_parts(&receivers, &[], &Route::new("default")),
            Ok(())
        );
        assert_eq!(
            validator.validate_parts(&receivers, &[], &Route::default()),
            Err(ValidationError::Route(RouteError::MissingRootReceiver))
        );
    }

    #[test]
    fn depth_limit_applies() {
        let validator = Validator::with_config(ValidatorConfig::default().with_max_route_depth(1));
        let err = validator.validate(&document()).unwrap_err();
        assert_eq!(err.route_path(), Some(vec![0]));
    }
}
