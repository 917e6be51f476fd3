//! Inhibition rule checks.

use std::collections::BTreeMap;

use alertcfg_model::InhibitRule;

use crate::error::{InhibitRuleError, MatcherError};
use crate::matcher::{Matcher, compile_anchored, is_valid_label_name};

/// Validates the matchers and `equal` labels of one rule.
pub fn validate_inhibit_rule(rule: &InhibitRule) -> Result<(), InhibitRuleError> {
    check_matchers("source_matchers", &rule.source_matchers)?;
    check_matchers("target_matchers", &rule.target_matchers)?;

    check_legacy("source_match", &rule.source_match, false)?;
    check_legacy("source_match_re", &rule.source_match_re, true)?;
    check_legacy("target_match", &rule.target_match, false)?;
    check_legacy("target_match_re", &rule.target_match_re, true)?;

    if let Some(name) = rule.equal.iter().find(|name| !is_valid_label_name(name)) {
        return Err(InhibitRuleError::InvalidEqualLabel { name: name.clone() });
    }
    Ok(())
}

fn check_matchers(field: &'static str, exprs: &[String]) -> Result<(), InhibitRuleError> {
    for (index, expr) in exprs.iter().enumerate() {
        Matcher::parse(expr).map_err(|source| InhibitRuleError::InvalidMatcher {
            field,
            index,
            source,
        })?;
    }
    Ok(())
}

fn check_legacy(
    field: &'static str,
    entries: &BTreeMap<String, String>,
    is_regex: bool,
) -> Result<(), InhibitRuleError> {
    for (label, value) in entries {
        let invalid = |source| InhibitRuleError::InvalidLegacyMatcher {
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
