//! Semantic validation for assembled Alertmanager configurations.
//!
//! A configuration assembled from independently authored fragments can be
//! well-formed YAML and still be unusable: a route may name a receiver that
//! another fragment never defined, a timer may use a unit the engine does not
//! know, a notifier may miss the one field it cannot work without. This crate
//! proves a candidate tree is internally consistent before it is written out.
//!
//! Validation is fail-fast and pure. The first violation is returned as a
//! [`ValidationError`] naming the entity class, its name or position, and the
//! cause. Route failures carry their path from the root.
//!
//! # Example
//!
//! ```
//! use alertcfg_model::{AlertmanagerConfig, Receiver, Route};
//! use alertcfg_validation::{EntityKind, Validator, ValidatorConfig};
//!
//! let config = AlertmanagerConfig {
//!     route: Some(
//!         Route::new("default")
//!             .group_by(["alertname"])
//!             .child(Route::new("pager").timers("30s", "5m", "4h")),
//!     ),
//!     receivers: vec![Receiver::new("default")],
//!     ..AlertmanagerConfig::default()
//! };
//!
//! let validator = Validator::with_config(ValidatorConfig::default().with_max_route_depth(8));
//! let err = validator.validate(&config).unwrap_err();
//!
//! assert_eq!(err.entity(), EntityKind::Route);
//! assert_eq!(err.route_path(), Some(vec![0]));
//! assert_eq!(err.to_string(), "route[0]: receiver \"pager\" not found");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod checks;
pub mod config;
pub mod duration;
pub mod error;
pub mod global;
pub mod http;
pub mod inhibit;
pub mod integrations;
pub mod matcher;
pub mod route;
pub mod time_interval;
pub mod validator;

#[cfg(test)]
mod tests;

// Re-export main types at crate root
pub use checks::{split_host_port, validate_url};
pub use config::ValidatorConfig;
pub use duration::{DURATION_PATTERN, is_valid_duration, parse_duration};
pub use error::{
    EntityKind, HttpConfigError, InhibitRuleError, IntegrationError, MatcherError, Result,
    RouteError, TimeIntervalError, ValidationError,
};
pub use global::validate_global;
pub use http::{validate_http_config, validate_tls_config};
pub use inhibit::validate_inhibit_rule;
pub use integrations::{Integration, IntegrationKind, RULES, ReceiverCheck, validate_receiver};
pub use matcher::{MatchOp, Matcher, is_valid_label_name};
pub use route::{RouteContext, validate_route};
pub use time_interval::validate_time_interval;
pub use validator::{Validator, validate_config};
