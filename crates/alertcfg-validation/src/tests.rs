//! Property-based tests across the validation pass.

use std::time::Duration;

use crate::{
    RouteError, ValidationError, Validator, is_valid_duration, parse_duration, validate_config,
    validate_receiver,
};
use alertcfg_model::{
    AlertmanagerConfig, GROUP_BY_ALL, PagerdutyConfig, Receiver, Route, Secret, TimeInterval,
};
use proptest::prelude::*;

const UNITS: [(&str, u64); 7] = [
    ("y", 365 * 24 * 60 * 60 * 1000),
    ("w", 7 * 24 * 60 * 60 * 1000),
    ("d", 24 * 60 * 60 * 1000),
    ("h", 60 * 60 * 1000),
    ("m", 60 * 1000),
    ("s", 1000),
    ("ms", 1),
];

fn document(receivers: &[&str], route: Route) -> AlertmanagerConfig {
    AlertmanagerConfig {
        route: Some(route),
        receivers: receivers.iter().map(|name| Receiver::new(*name)).collect(),
        ..AlertmanagerConfig::default()
    }
}

// =============================================================================
// Property-based tests with proptest
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // -------------------------------------------------------------------------
    // Duration grammar
    // -------------------------------------------------------------------------

    #[test]
    fn prop_ordered_units_parse(counts in prop::array::uniform7(prop::option::of(0u64..10_000))) {
        let mut input = String::new();
        let mut millis = 0u64;
        for ((unit, scale), count) in UNITS.iter().zip(counts) {
            if let Some(count) = count {
                input.push_str(&format!("{count}{unit}"));
                millis += count * scale;
            }
        }
        prop_assert!(is_valid_duration(&input));
        prop_assert_eq!(parse_duration(&input), Some(Duration::from_millis(millis)));
    }

    #[test]
    fn prop_repeated_unit_rejected(a in 1u64..1000, b in 1u64..1000, unit in 0usize..7) {
        let (unit, _) = UNITS[unit];
        let input = format!("{a}{unit}{b}{unit}");
        prop_assert!(!is_valid_duration(&input));
    }

    #[test]
    fn prop_negative_rejected(n in 1u64..1000, unit in 0usize..7) {
        let (unit, _) = UNITS[unit];
        let input = format!("-{n}{unit}");
        prop_assert!(!is_valid_duration(&input));
    }

    // -------------------------------------------------------------------------
    // Group-by keys
    // -------------------------------------------------------------------------

    #[test]
    fn prop_distinct_group_by_passes(
        keys in prop::collection::btree_set("[a-z][a-z0-9_]{0,8}", 1..6)
    ) {
        let route = Route::new("default").group_by(keys);
        prop_assert_eq!(validate_config(&document(&["default"], route)), Ok(()));
    }

    #[test]
    fn prop_repeated_group_by_fails(
        keys in prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..6),
        pick in any::<prop::sample::Index>()
    ) {
        let mut keys = keys;
        let repeated = keys[pick.index(keys.len())].clone();
        keys.push(repeated);
        let route = Route::new("default").group_by(keys);
        let err = validate_config(&document(&["default"], route)).unwrap_err();
        prop_assert!(
            matches!(err, ValidationError::Route(RouteError::DuplicateGroupBy { .. })),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn prop_wildcard_with_other_keys_fails(key in "[a-z][a-z0-9_]{0,8}") {
        let route = Route::new("default").group_by([GROUP_BY_ALL.to_string(), key]);
        prop_assert!(validate_config(&document(&["default"], route)).is_err());
    }

    // -------------------------------------------------------------------------
    // Receivers and references
    // -------------------------------------------------------------------------

    #[test]
    fn prop_duplicate_receiver_named(name in "[a-z][a-z0-9-]{0,15}") {
        let doc = document(&[name.as_str(), name.as_str()], Route::new(name.clone()));
        prop_assert_eq!(
            validate_config(&doc),
            Err(ValidationError::DuplicateReceiver { name })
        );
    }

    #[test]
    fn prop_unknown_child_receiver_reports_index(
        known in 0usize..5,
        name in "[a-z]{3,10}"
    ) {
        let mut route = Route::new("default");
        for _ in 0..known {
            route = route.child(Route::new("default"));
        }
        route = route.child(Route::new(format!("unknown-{name}")));
        let err = validate_config(&document(&["default"], route)).unwrap_err();
        prop_assert_eq!(err.route_path(), Some(vec![known]));
        prop_assert_eq!(
            err.to_string(),
            format!("route[{known}]: receiver \"unknown-{name}\" not found")
        );
    }

    #[test]
    fn prop_validation_is_idempotent(
        names in prop::collection::btree_set("[a-z]{1,8}", 1..5),
        target in "[a-z]{1,8}"
    ) {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let doc = document(&names, Route::new(names[0]).child(Route::new(target)));
        let validator = Validator::new();
        prop_assert_eq!(validator.validate(&doc), validator.validate(&doc));
    }

    // -------------------------------------------------------------------------
    // Integrations
    // -------------------------------------------------------------------------

    #[test]
    fn prop_pagerduty_either_key_passes(key in "[A-Za-z0-9]{1,32}", routing in any::<bool>()) {
        let mut config = PagerdutyConfig::default();
        if routing {
            config.routing_key = Secret::new(key);
        } else {
            config.service_key = Secret::new(key);
        }
        let mut receiver = Receiver::new("pager");
        receiver.pagerduty_configs.push(config);
        prop_assert_eq!(validate_receiver(&receiver), Ok(()));
    }
}

#[test]
fn empty_non_root_receiver_is_inherited() {
    let route = Route::new("default").child(Route::default().child(Route::default()));
    assert_eq!(validate_config(&document(&["default"], route)), Ok(()));
}

#[test]
fn adding_missing_interval_fixes_route() {
    let route = Route::new("default").mute_during("holidays");
    let mut doc = document(&["default"], route);
    assert!(matches!(
        validate_config(&doc),
        Err(ValidationError::Route(RouteError::MuteTimeIntervalNotFound { ref name })) if name == "holidays"
    ));
    doc.time_intervals
        .push(TimeInterval::new("holidays", vec![]));
    assert_eq!(validate_config(&doc), Ok(()));
}
