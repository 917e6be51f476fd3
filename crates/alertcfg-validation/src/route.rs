//! Recursive routing-tree validation.
//!
//! The walk is a pure function of the node, the lookup sets built from the
//! rest of the document, and whether the node is the root. A failing child
//! is wrapped with its index so errors print their path from the root.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use alertcfg_model::{GROUP_BY_ALL, Route};
use tracing::trace;

use crate::config::ValidatorConfig;
use crate::duration::{is_valid_duration, parse_duration};
use crate::error::{MatcherError, RouteError};
use crate::matcher::{Matcher, compile_anchored, is_valid_label_name};

/// Names a route may refer to.
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    /// Known receiver names.
    pub receivers: &'a BTreeSet<&'a str>,
    /// Known time interval names, mute and active alike.
    pub time_intervals: &'a BTreeSet<&'a str>,
    /// Optional hardening.
    pub config: &'a ValidatorConfig,
}

/// Validates `route` and all of its descendants.
pub fn validate_route(
    route: &Route,
    ctx: RouteContext<'_>,
    is_root: bool,
) -> Result<(), RouteError> {
    validate_node(route, ctx, is_root, 1)
}

fn validate_node(
    route: &Route,
    ctx: RouteContext<'_>,
    is_root: bool,
    depth: usize,
) -> Result<(), RouteError> {
    trace!(depth, receiver = %route.receiver, children = route.routes.len(), "validating route");

    if let Some(max) = ctx.config.max_route_depth {
        if depth > max {
            return Err(RouteError::TooDeep { max });
        }
    }

    if route.receiver.is_empty() {
        if is_root {
            return Err(RouteError::MissingRootReceiver);
        }
    } else if !ctx.receivers.contains(route.receiver.as_str()) {
        return Err(RouteError::ReceiverNotFound {
            receiver: route.receiver.clone(),
        });
    }

    check_group_by(&route.group_by)?;

    if let Some(name) = missing(&route.mute_time_intervals, ctx.time_intervals) {
        return Err(RouteError::MuteTimeIntervalNotFound { name });
    }
    if let Some(name) = missing(&route.active_time_intervals, ctx.time_intervals) {
        return Err(RouteError::ActiveTimeIntervalNotFound { name });
    }

    for (field, value) in [
        ("group_interval", &route.group_interval),
        ("group_wait", &route.group_wait),
        ("repeat_interval", &route.repeat_interval),
    ] {
        check_timer(field, value, ctx.config.require_positive_durations)?;
    }

    for (index, expr) in route.matchers.iter().enumerate() {
        Matcher::parse(expr).map_err(|source| RouteError::InvalidMatcher { index, source })?;
    }
    check_legacy("match", &route.match_labels, false)?;
    check_legacy("match_re", &route.match_re, true)?;

    for (index, child) in route.routes.iter().enumerate() {
        validate_node(child, ctx, false, depth + 1).map_err(|err| err.in_child(index))?;
    }
    Ok(())
}

fn check_group_by(group_by: &[String]) -> Result<(), RouteError> {
    let mut seen = BTreeSet::new();
    for key in group_by {
        if !seen.insert(key.as_str()) {
            return Err(RouteError::DuplicateGroupBy {
                group_by: group_by.to_vec(),
            });
        }
    }
    if seen.contains(GROUP_BY_ALL) && group_by.len() > 1 {
        return Err(RouteError::GroupByAllNotSole {
            group_by: group_by.to_vec(),
        });
    }
    Ok(())
}

fn missing(names: &[String], known: &BTreeSet<&str>) -> Option<String> {
    names
        .iter()
        .find(|name| !known.contains(name.as_str()))
        .cloned()
}

fn check_timer(field: &'static str, value: &str, require_positive: bool) -> Result<(), RouteError> {
    if value.is_empty() {
        return Ok(());
    }
    if !is_valid_duration(value) {
        return Err(RouteError::InvalidDuration {
            field,
            value: value.to_string(),
        });
    }
    if require_positive && parse_duration(value) == Some(Duration::ZERO) {
        return Err(RouteError::NonPositiveDuration {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_legacy(
    field: &'static str,
    entries: &BTreeMap<String, String>,
    is_regex: bool,
) -> Result<(), RouteError> {
    for (label, value) in entries {
        let invalid = |source| RouteError::InvalidLegacyMatcher {
            field,
            label: label.clone(),
            source,
        };
        if !is_valid_label_name(label) {
            return Err(invalid(MatcherError::InvalidLabelName {
                name: label.clone(),
            }));
        }
        if is_regex {
            compile_anchored(value).map_err(invalid)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    struct Fixture {
        receivers: BTreeSet<&'static str>,
        intervals: BTreeSet<&'static str>,
        config: ValidatorConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                receivers: ["default", "pager"].into_iter().collect(),
                intervals: ["weekends"].into_iter().collect(),
                config: ValidatorConfig::default(),
            }
        }

        fn ctx(&self) -> RouteContext<'_> {
            RouteContext {
                receivers: &self.receivers,
                time_intervals: &self.intervals,
                config: &self.config,
            }
        }

        fn check(&self, route: &Route) -> Result<(), RouteError> {
            validate_route(route, self.ctx(), true)
        }
    }

    #[test]
    fn root_requires_receiver() {
        let fixture = Fixture::new();
        assert_eq!(
            fixture.check(&Route::default()),
            Err(RouteError::MissingRootReceiver)
        );
    }

    #[test]
    fn child_inherits_receiver() {
        let fixture = Fixture::new();
        let route = Route::new("default").child(Route::default().matcher("team=db"));
        assert_eq!(fixture.check(&route), Ok(()));
    }

    #[test]
    fn unknown_receiver_is_named() {
        let fixture = Fixture::new();
        let err = fixture.check(&Route::new("nobody")).unwrap_err();
        assert_eq!(err.to_string(), "receiver \"nobody\" not found");
    }

    #[test_case(&["a", "b"], true ; "distinct")]
    #[test_case(&["a", "a"], false ; "duplicate")]
    #[test_case(&["...", "a"], false ; "wildcard with others")]
    #[test_case(&["..."], true ; "wildcard alone")]
    #[test_case(&["...", "..."], false ; "wildcard twice")]
    fn group_by(keys: &[&str], ok: bool) {
        let fixture = Fixture::new();
        let route = Route::new("default").group_by(keys.iter().copied());
        assert_eq!(fixture.check(&route).is_ok(), ok);
    }

    #[test]
    fn duplicate_group_by_names_full_list() {
        let err = check_group_by(&["a".to_string(), "a".to_string()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate values not permitted in route 'group_by': [\"a\", \"a\"]"
        );
    }

    #[test]
    fn time_interval_references() {
        let mut fixture = Fixture::new();
        let route = Route::new("default").mute_during("holidays");
        assert_eq!(
            fixture.check(&route),
            Err(RouteError::MuteTimeIntervalNotFound {
                name: "holidays".to_string()
            })
        );
        fixture.intervals.insert("holidays");
        assert_eq!(fixture.check(&route), Ok(()));

        let route = Route::new("default").active_during("nights");
        assert_eq!(
            fixture.check(&route),
            Err(RouteError::ActiveTimeIntervalNotFound {
                name: "nights".to_string()
            })
        );
    }

    #[test]
    fn timers_follow_duration_grammar() {
        let fixture = Fixture::new();
        let ok = Route::new("default").timers("30s", "5m", "4h");
        assert_eq!(fixture.check(&ok), Ok(()));

        let bad = Route::new("default").timers("30s", "5x", "4h");
        assert!(matches!(
            fixture.check(&bad),
            Err(RouteError::InvalidDuration {
                field: "group_interval",
                ..
            })
        ));
    }

    #[test]
    fn zero_timers_rejected_when_positive_required() {
        let mut fixture = Fixture::new();
        let route = Route::new("default").timers("0s", "", "");
        assert_eq!(fixture.check(&route), Ok(()));

        fixture.config.require_positive_durations = true;
        assert!(matches!(
            fixture.check(&route),
            Err(RouteError::NonPositiveDuration {
                field: "group_wait",
                ..
            })
        ));
    }

    #[test]
    fn matcher_errors_carry_index() {
        let fixture = Fixture::new();
        let route = Route::new("default")
            .matcher("severity=critical")
            .matcher("not a matcher");
        assert!(matches!(
            fixture.check(&route),
            Err(RouteError::InvalidMatcher { index: 1, .. })
        ));
    }

    #[test]
    fn legacy_match_entries() {
        let fixture = Fixture::new();
        let mut route = Route::new("default");
        route.match_re.insert("service".to_string(), "api|web".to_string());
        assert_eq!(fixture.check(&route), Ok(()));

        route.match_re.insert("job".to_string(), "(".to_string());
        assert!(matches!(
            fixture.check(&route),
            Err(RouteError::InvalidLegacyMatcher { field: "match_re", .. })
        ));

        let mut route = Route::new("default");
        route.match_labels.insert("bad-label".to_string(), "x".to_string());
        assert!(matches!(
            fixture.check(&route),
            Err(RouteError::InvalidLegacyMatcher { field: "match", .. })
        ));
    }

    #[test]
    fn nested_failure_reports_path() {
        let fixture = Fixture::new();
        let route = Route::new("default")
            .child(Route::new("pager"))
            .child(Route::new("pager").child(Route::new("x")));
        let err = fixture.check(&route).unwrap_err();
        assert_eq!(err.to_string(), "route[1]: route[0]: receiver \"x\" not found");
        assert_eq!(err.path(), vec![1, 0]);
    }

    #[test]
    fn depth_cap() {
        let mut fixture = Fixture::new();
        let route = Route::new("default").child(Route::default().child(Route::default()));
        assert_eq!(fixture.check(&route), Ok(()));

        fixture.config.max_route_depth = Some(2);
        let err = fixture.check(&route).unwrap_err();
        assert_eq!(err.path(), vec![0, 0]);
        assert_eq!(err.root_cause(), &RouteError::TooDeep { max: 2 });
    }
}
