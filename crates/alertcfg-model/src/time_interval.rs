//! Named recurring time windows referenced by routes.
//!
//! Ranges are kept exactly as authored (`"monday:friday"`, `"1:5"`,
//! `"-3:-1"`); parsing them is the validator's job.

use serde::{Deserialize, Serialize};

/// A named set of time periods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeInterval {
    /// Name referenced from routes.
    pub name: String,
    /// The periods making up the interval. A point in time matches the
    /// interval if it matches any period.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub time_intervals: Vec<TimePeriod>,
}

impl TimeInterval {
    /// Creates an interval with the given name and periods.
    #[must_use]
    pub fn new(name: impl Into<String>, periods: Vec<TimePeriod>) -> Self {
        Self {
            name: name.into(),
            time_intervals: periods,
        }
    }
}

/// One period. Every non-empty field must match for the period to match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePeriod {
    /// Times of day.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub times: Vec<TimeRange>,
    /// Days of the week, e.g. `monday:friday`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub weekdays: Vec<String>,
    /// Days of the month, negative values count from the end.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub days_of_month: Vec<String>,
    /// Months, by name or number.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<String>,
    /// Calendar years.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub years: Vec<String>,
    /// IANA time zone the period is evaluated in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A time-of-day range in `HH:MM` notation, end exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRange {
    /// Start of the range.
    pub start_time: String,
    /// End of the range.
    pub end_time: String,
}

impl TimeRange {
    /// Creates a range from two `HH:MM` strings.
    #[must_use]
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_engine_layout() {
        let yaml = r#"
name: business-hours
time_intervals:
- times:
  - start_time: "09:00"
    end_time: "17:00"
  weekdays: ['monday:friday']
  location: Europe/Berlin
"#;
        let interval: TimeInterval = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(interval.name, "business-hours");
        let period = &interval.time_intervals[0];
        assert_eq!(period.times[0], TimeRange::new("09:00", "17:00"));
        assert_eq!(period.weekdays, vec!["monday:friday"]);
        assert_eq!(period.location.as_deref(), Some("Europe/Berlin"));
    }

    #[test]
    fn empty_period_fields_are_omitted() {
        let interval = TimeInterval::new(
            "weekends",
            vec![TimePeriod {
                weekdays: vec!["saturday".to_string(), "sunday".to_string()],
                ..TimePeriod::default()
            }],
        );
        let yaml = serde_yaml::to_string(&interval).unwrap();
        assert!(!yaml.contains("months"));
        assert!(yaml.contains("- saturday"));
    }
}
