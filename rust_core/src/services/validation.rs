//! Schedule diagnostics.
//!
//! The evaluator collapses "closed" and "schedule data is broken"
//! into the same answer. These checks pull them apart again so vendor
//! tooling can show what will actually happen with a schedule:
//! - Missing days (treated as closed)
//! - Unparseable times (treated as midnight)
//! - Zero-length windows (open around the clock)
//! - Overnight windows (informational)

use crate::core::domain::{DayOfWeek, WeeklySchedule};
use crate::time::{format_minutes, parse_time_of_day};

/// Criticality level for schedule issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Criticality {
    Low,
    Medium,
    High,
    Critical,
}

impl Criticality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Low => "Low",
            Criticality::Medium => "Medium",
            Criticality::High => "High",
            Criticality::Critical => "Critical",
        }
    }
}

/// Issue category for grouping schedule problems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    MissingSchedule,
    MissingDay,
    NeverOpen,
    UnparseableTime,
    ZeroLengthWindow,
    OvernightWindow,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::MissingSchedule => "missing_schedule",
            IssueCategory::MissingDay => "missing_day",
            IssueCategory::NeverOpen => "never_open",
            IssueCategory::UnparseableTime => "unparseable_time",
            IssueCategory::ZeroLengthWindow => "zero_length_window",
            IssueCategory::OvernightWindow => "overnight_window",
        }
    }
}

/// A single finding about a schedule
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleIssue {
    /// `None` for whole-schedule findings
    pub day: Option<DayOfWeek>,
    pub category: IssueCategory,
    pub criticality: Criticality,
    pub description: String,
}

impl ScheduleIssue {
    fn new(
        day: Option<DayOfWeek>,
        category: IssueCategory,
        criticality: Criticality,
        description: String,
    ) -> Self {
        Self {
            day,
            category,
            criticality,
            description,
        }
    }
}

/// Diagnose a possibly-absent schedule.
///
/// An absent schedule is reported as `MissingSchedule`; the evaluator's
/// answer for it depends on the configured policy.
pub fn validate_optional_schedule(schedule: Option<&WeeklySchedule>) -> Vec<ScheduleIssue> {
    match schedule {
        Some(schedule) => validate_schedule(schedule),
        None => vec![ScheduleIssue::new(
            None,
            IssueCategory::MissingSchedule,
            Criticality::Medium,
            "No business hours configured; open/closed follows the missing-schedule policy"
                .to_string(),
        )],
    }
}

/// Diagnose every day of `schedule`, in Sunday..Saturday order.
pub fn validate_schedule(schedule: &WeeklySchedule) -> Vec<ScheduleIssue> {
    let mut issues = Vec::new();
    let mut trading_days = 0;

    for day in DayOfWeek::ALL {
        let Some(hours) = schedule.day(day) else {
            issues.push(ScheduleIssue::new(
                Some(day),
                IssueCategory::MissingDay,
                Criticality::Low,
                format!("No hours for {}; treated as closed", day),
            ));
            continue;
        };
        if hours.closed {
            continue;
        }
        trading_days += 1;

        let open = parse_time_of_day(&hours.open);
        let close = parse_time_of_day(&hours.close);

        for (label, parsed) in [("opening", &open), ("closing", &close)] {
            if let Err(e) = parsed {
                issues.push(ScheduleIssue::new(
                    Some(day),
                    IssueCategory::UnparseableTime,
                    Criticality::High,
                    format!("{} {} time: {}; treated as midnight", day, label, e),
                ));
            }
        }

        if let (Ok(open), Ok(close)) = (open, close) {
            if open == close {
                issues.push(ScheduleIssue::new(
                    Some(day),
                    IssueCategory::ZeroLengthWindow,
                    Criticality::Medium,
                    format!(
                        "{} opens and closes at {}; evaluated as open around the clock",
                        day,
                        format_minutes(open)
                    ),
                ));
            } else if close < open {
                issues.push(ScheduleIssue::new(
                    Some(day),
                    IssueCategory::OvernightWindow,
                    Criticality::Low,
                    format!(
                        "{} runs past midnight ({} to {}); hours before {} are read from {}'s entry",
                        day,
                        format_minutes(open),
                        format_minutes(close),
                        format_minutes(close),
                        day
                    ),
                ));
            }
        }
    }

    if trading_days == 0 {
        issues.push(ScheduleIssue::new(
            None,
            IssueCategory::NeverOpen,
            Criticality::High,
            "Schedule has no trading days; the truck always reads as closed".to_string(),
        ));
    }

    issues
}

/// `true` if any issue is `High` or worse.
pub fn has_blocking_issues(issues: &[ScheduleIssue]) -> bool {
    issues.iter().any(|i| i.criticality >= Criticality::High)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::DayHours;

    fn full_week(hours: DayHours) -> WeeklySchedule {
        DayOfWeek::ALL.into_iter().map(|d| (d, hours.clone())).collect()
    }

    #[test]
    fn test_clean_schedule_has_no_issues() {
        let issues = validate_schedule(&full_week(DayHours::new("9:00 AM", "5:00 PM")));
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn test_missing_days_and_never_open() {
        let schedule = WeeklySchedule::new().with_day(DayOfWeek::Monday, DayHours::closed());
        let issues = validate_schedule(&schedule);

        let missing = issues
            .iter()
            .filter(|i| i.category == IssueCategory::MissingDay)
            .count();
        assert_eq!(missing, 6);
        assert!(issues.iter().any(|i| i.category == IssueCategory::NeverOpen));
        assert!(has_blocking_issues(&issues));
    }

    #[test]
    fn test_unparseable_time_is_high() {
        let mut schedule = full_week(DayHours::new("09:00", "17:00"));
        schedule.insert(DayOfWeek::Thursday, DayHours::new("9am-ish", "17:00"));

        let issues = validate_schedule(&schedule);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].day, Some(DayOfWeek::Thursday));
        assert_eq!(issues[0].category, IssueCategory::UnparseableTime);
        assert_eq!(issues[0].criticality, Criticality::High);
        assert!(issues[0].description.contains("opening"));
    }

    #[test]
    fn test_window_shapes() {
        let schedule = full_week(DayHours::new("09:00", "17:00"))
            .with_day(DayOfWeek::Friday, DayHours::new("22:00", "02:00"))
            .with_day(DayOfWeek::Saturday, DayHours::new("10:00", "10:00 AM"));

        let issues = validate_schedule(&schedule);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].category, IssueCategory::OvernightWindow);
        assert_eq!(issues[0].criticality, Criticality::Low);
        assert_eq!(issues[1].category, IssueCategory::ZeroLengthWindow);
        assert!(!has_blocking_issues(&issues));
    }

    #[test]
    fn test_missing_schedule() {
        let issues = validate_optional_schedule(None);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category.as_str(), "missing_schedule");
        assert_eq!(issues[0].criticality.as_str(), "Medium");
    }
}
