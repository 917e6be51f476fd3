//! Structural checks for named time intervals.
//!
//! Ranges are written `start:end` or as a single value. Times of day use
//! `HH:MM` between `00:00` and `24:00`.

use alertcfg_model::{TimeInterval, TimePeriod, TimeRange};

use crate::error::TimeIntervalError;

const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Validates one interval: a name and well-formed periods.
pub fn validate_time_interval(interval: &TimeInterval) -> Result<(), TimeIntervalError> {
    if interval.name.trim().is_empty() {
        return Err(TimeIntervalError::MissingName);
    }
    interval
        .time_intervals
        .iter()
        .enumerate()
        .try_for_each(|(index, period)| validate_period(index, period))
}

fn validate_period(period: usize, entry: &TimePeriod) -> Result<(), TimeIntervalError> {
    let invalid = |field: &'static str, value: &str, reason: String| {
        TimeIntervalError::InvalidRange {
            period,
            field,
            value: value.to_string(),
            reason,
        }
    };

    for range in &entry.times {
        check_times(range).map_err(|reason| {
            invalid(
                "times",
                &format!("{}-{}", range.start_time, range.end_time),
                reason,
            )
        })?;
    }
    for value in &entry.weekdays {
        parse_range(value, parse_weekday)
            .and_then(ascending)
            .map_err(|reason| invalid("weekdays", value, reason))?;
    }
    for value in &entry.days_of_month {
        check_days_of_month(value).map_err(|reason| invalid("days_of_month", value, reason))?;
    }
    for value in &entry.months {
        parse_range(value, parse_month)
            .and_then(ascending)
            .map_err(|reason| invalid("months", value, reason))?;
    }
    for value in &entry.years {
        parse_range(value, parse_year)
            .and_then(ascending)
            .map_err(|reason| invalid("years", value, reason))?;
    }
    Ok(())
}

fn check_times(range: &TimeRange) -> Result<(), String> {
    let start = parse_clock(&range.start_time)?;
    let end = parse_clock(&range.end_time)?;
    if start >= end {
        return Err("start time must be before end time".to_string());
    }
    Ok(())
}

/// Minutes since midnight for `HH:MM`.
fn parse_clock(value: &str) -> Result<u32, String> {
    let malformed = || format!("{value:?} is not a time of day in HH:MM format");
    let (hours, minutes) = value.split_once(':').ok_or_else(malformed)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(malformed());
    }
    let hours: u32 = hours.parse().map_err(|_| malformed())?;
    let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
    if minutes > 59 || hours > 24 || (hours == 24 && minutes != 0) {
        return Err(format!("{value:?} is outside 00:00..24:00"));
    }
    Ok(hours * 60 + minutes)
}

fn check_days_of_month(value: &str) -> Result<(), String> {
    let (start, end) = parse_range(value, parse_day)?;
    if start < 0 && end > 0 {
        return Err("end day must be negative if start day is negative".to_string());
    }
    if start.signum() == end.signum() && start > end {
        return Err("start day cannot be after end day".to_string());
    }
    Ok(())
}

fn parse_range<T: Copy>(
    value: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<(T, T), String> {
    match value.split_once(':') {
        Some((start, end)) => Ok((parse(start)?, parse(end)?)),
        None => {
            let single = parse(value)?;
            Ok((single, single))
        }
    }
}

fn ascending<T: PartialOrd>((start, end): (T, T)) -> Result<(T, T), String> {
    if start > end {
        Err("start of range cannot be after its end".to_string())
    } else {
        Ok((start, end))
    }
}

fn parse_weekday(value: &str) -> Result<usize, String> {
    let name = value.trim().to_lowercase();
    WEEKDAYS
        .iter()
        .position(|day| *day == name)
        .ok_or_else(|| format!("{value:?} is not a day of the week"))
}

fn parse_month(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        return if (1..=12).contains(&number) {
            Ok(number)
        } else {
            Err(format!("month {number} is outside 1..12"))
        };
    }
    let name = trimmed.to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == name)
        .and_then(|index| u32::try_from(index + 1).ok())
        .ok_or_else(|| format!("{value:?} is not a month"))
}

fn parse_day(value: &str) -> Result<i32, String> {
    let day: i32 = value
        .trim()
        .parse()
        .map_err(|_| format!("{value:?} is not a day of the month"))?;
    if day == 0 || !(-31..=31).contains(&day) {
        return Err(format!("day {day} is outside 1..31 and -31..-1"));
    }
    Ok(day)
}

fn parse_year(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(year) if year > 0 => Ok(year),
        _ => Err(format!("{value:?} is not a positive year")),
    }
}
