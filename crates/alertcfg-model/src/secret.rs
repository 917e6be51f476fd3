//! Secret-bearing values and the policy that decides how they serialize.
//!
//! Alertmanager hides secrets whenever its own types are marshaled,
//! which makes it impossible to generate a document that still carries the
//! credentials. [`Secret`] instead serializes according to the
//! [`SecretPolicy`] active on the current thread, which defaults to
//! [`SecretPolicy::Reveal`]. The rendering functions in [`crate::render`]
//! scope a policy to a single call.

use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// The marker the engine itself emits in place of a hidden secret.
pub const REDACTED: &str = "<secret>";

/// How secret-bearing fields are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretPolicy {
    /// Write the literal value.
    #[default]
    Reveal,
    /// Replace every non-empty value with [`REDACTED`].
    Redact,
}

thread_local! {
    static POLICY: Cell<SecretPolicy> = const { Cell::new(SecretPolicy::Reveal) };
}

/// Returns the policy active on the current thread.
#[must_use]
pub fn current_policy() -> SecretPolicy {
    POLICY.with(Cell::get)
}

/// Installs a policy for the lifetime of the guard and restores the
/// previous one on drop.
#[derive(Debug)]
pub(crate) struct PolicyGuard {
    previous: SecretPolicy,
}

impl PolicyGuard {
    pub(crate) fn enter(policy: SecretPolicy) -> Self {
        let previous = POLICY.with(|cell| cell.replace(policy));
        Self { previous }
    }
}

impl Drop for PolicyGuard {
    fn drop(&mut self) {
        POLICY.with(|cell| cell.set(self.previous));
    }
}

/// A credential or credential-bearing URL.
///
/// The value is kept verbatim and is only hidden when a document is
/// rendered under [`SecretPolicy::Redact`]. `Debug` output never shows it.
#[derive(Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wraps a literal secret value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the literal value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if no value is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match current_policy() {
            SecretPolicy::Redact if !self.0.is_empty() => serializer.serialize_str(REDACTED),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Secret(\"\")")
        } else {
            f.write_str("Secret([REDACTED])")
        }
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn serializes_in_the_clear_by_default() {
        let secret = Secret::new("hunter2");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"hunter2\"");
    }

    #[test]
    fn redacts_under_guard_and_restores() {
        let secret = Secret::new("hunter2");
        {
            let _guard = PolicyGuard::enter(SecretPolicy::Redact);
            assert_eq!(serde_json::to_string(&secret).unwrap(), "\"<secret>\"");
        }
        assert_eq!(current_policy(), SecretPolicy::Reveal);
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"hunter2\"");
    }

    #[test_case("hunter2", SecretPolicy::Reveal, "\"hunter2\"" ; "revealed")]
    #[test_case("hunter2", SecretPolicy::Redact, "\"<secret>\"" ; "redacted")]
    #[test_case("", SecretPolicy::Reveal, "\"\"" ; "empty revealed")]
    #[test_case("", SecretPolicy::Redact, "\"\"" ; "empty stays empty when redacted")]
    fn serializes_under_policy(value: &str, policy: SecretPolicy, expected: &str) {
        let _guard = PolicyGuard::enter(policy);
        assert_eq!(serde_json::to_string(&Secret::new(value)).unwrap(), expected);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let outer = PolicyGuard::enter(SecretPolicy::Redact);
        {
            let _inner = PolicyGuard::enter(SecretPolicy::Reveal);
            assert_eq!(current_policy(), SecretPolicy::Reveal);
        }
        assert_eq!(current_policy(), SecretPolicy::Redact);
        drop(outer);
        assert_eq!(current_policy(), SecretPolicy::Reveal);
    }

    #[test]
    fn debug_never_shows_value() {
        let secret = Secret::new("hunter2");
        let debug = format!("{secret:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn deserializes_from_plain_string() {
        let secret: Secret = serde_json::from_str("\"token\"").unwrap();
        assert_eq!(secret.expose(), "token");
    }
}
