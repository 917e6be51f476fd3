//! Rendering a document under an explicit secret policy.
//!
//! One struct family serves both audiences: generated documents that must
//! carry credentials, and review output that must not.

pub use crate::secret::SecretPolicy;

use serde::Serialize;

use crate::error::Result;
use crate::secret::PolicyGuard;

/// Renders any model value as YAML under the given policy.
pub fn render_yaml<T: Serialize + ?Sized>(value: &T, policy: SecretPolicy) -> Result<String> {
    let _guard = PolicyGuard::enter(policy);
    Ok(serde_yaml::to_string(value)?)
}

/// Renders any model value as pretty-printed JSON under the given policy.
pub fn render_json<T: Serialize + ?Sized>(value: &T, policy: SecretPolicy) -> Result<String> {
    let _guard = PolicyGuard::enter(policy);
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AlertmanagerConfig, BasicAuth, HttpClientConfig, PagerdutyConfig, Receiver, Route,
        Secret, current_policy,
    };

    fn config_with_secrets() -> AlertmanagerConfig {
        let mut receiver = Receiver::new("pager");
        receiver.pagerduty_configs.push(PagerdutyConfig {
            routing_key: Secret::new("pd-routing-key"),
            http_config: Some(HttpClientConfig {
                basic_auth: Some(BasicAuth {
                    username: "admin".to_string(),
                    password: Secret::new("pd-password"),
                    password_file: String::new(),
                }),
                ..HttpClientConfig::default()
            }),
            ..PagerdutyConfig::default()
        });
        AlertmanagerConfig {
            route: Some(Route::new("pager")),
            receivers: vec![receiver],
            ..AlertmanagerConfig::default()
        }
    }

    #[test]
    fn reveal_keeps_secrets() {
        let yaml = render_yaml(&config_with_secrets(), SecretPolicy::Reveal).unwrap();
        assert!(yaml.contains("routing_key: pd-routing-key"));
        assert!(yaml.contains("password: pd-password"));
    }

    #[test]
    fn redact_hides_every_secret() {
        let yaml = render_yaml(&config_with_secrets(), SecretPolicy::Redact).unwrap();
        assert!(!yaml.contains("pd-routing-key"));
        assert!(!yaml.contains("pd-password"));
        assert!(yaml.contains("routing_key: <secret>"));
        assert!(yaml.contains("username: admin"));
    }

    #[test]
    fn policy_is_restored_after_render() {
        let _ = render_json(&config_with_secrets(), SecretPolicy::Redact).unwrap();
        assert_eq!(current_policy(), SecretPolicy::Reveal);
    }

    #[test]
    fn redacted_json_round_trips_structure() {
        let json = render_json(&config_with_secrets(), SecretPolicy::Redact).unwrap();
        let parsed = AlertmanagerConfig::from_json(&json).unwrap();
        assert_eq!(
            parsed.receivers[0].pagerduty_configs[0].routing_key.expose(),
            "<secret>"
        );
    }

    #[test]
    fn revealed_yaml_round_trips() {
        let original = config_with_secrets();
        let yaml = original.to_yaml().unwrap();
        assert_eq!(AlertmanagerConfig::from_yaml(&yaml).unwrap(), original);
    }

    #[test]
    fn policies_are_isolated_per_thread() {
        let config = config_with_secrets();
        let redacted = std::thread::spawn(move || {
            render_yaml(&config, SecretPolicy::Redact).unwrap()
        });
        let revealed = render_yaml(&config_with_secrets(), SecretPolicy::Reveal).unwrap();
        assert!(revealed.contains("pd-routing-key"));
        assert!(!redacted.join().unwrap().contains("pd-routing-key"));
    }
}
