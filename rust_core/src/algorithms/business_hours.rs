//! Business-hours evaluation.
//!
//! Given a vendor's weekly schedule and a point in time, decide whether the
//! vendor is open. The evaluator never fails: a missing schedule follows the
//! [`MissingSchedulePolicy`], a missing or closed day is closed, and an
//! unparseable bound degrades to midnight (see
//! [`crate::time::minutes_or_midnight`]).
//!
//! ## Window semantics
//! - Same-day window (`close > open`): open on `[open, close)`, so the exact
//!   closing minute is already closed.
//! - Overnight window (`close <= open`, e.g. 22:00-02:00): open when
//!   `now >= open` or `now < close`. The early-morning tail is read from the
//!   current day's entry, not the previous day's.

use chrono::{Datelike, Local, Timelike};

use crate::core::domain::{DayOfWeek, DayHours, MissingSchedulePolicy, OpenStatus, WeeklySchedule};
use crate::time::minutes_or_midnight;

/// Evaluate `schedule` at `now`, treating an absent schedule as open.
///
/// `now` may be any chrono value carrying a calendar date and a wall-clock
/// time: a `NaiveDateTime` already in the vendor's local time, or a
/// `DateTime<Tz>` whose zone provides the local day and time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use truckmap_rust::algorithms::business_hours::is_open;
/// use truckmap_rust::core::domain::{DayHours, DayOfWeek, OpenStatus, WeeklySchedule};
///
/// let schedule = WeeklySchedule::new()
///     .with_day(DayOfWeek::Monday, DayHours::new("9:00 AM", "5:00 PM"));
///
/// // 2024-06-03 is a Monday.
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let two_pm = monday.and_hms_opt(14, 0, 0).unwrap();
/// let five_pm = monday.and_hms_opt(17, 0, 0).unwrap();
///
/// assert_eq!(is_open(Some(&schedule), &two_pm), OpenStatus::Open);
/// assert_eq!(is_open(Some(&schedule), &five_pm), OpenStatus::Closed);
/// assert_eq!(is_open(None, &five_pm), OpenStatus::Open);
/// ```
pub fn is_open<T>(schedule: Option<&WeeklySchedule>, now: &T) -> OpenStatus
where
    T: Datelike + Timelike,
{
    is_open_with_policy(schedule, now, MissingSchedulePolicy::Open)
}

/// Same as [`is_open`], with the absent-schedule outcome chosen by the caller.
pub fn is_open_with_policy<T>(
    schedule: Option<&WeeklySchedule>,
    now: &T,
    policy: MissingSchedulePolicy,
) -> OpenStatus
where
    T: Datelike + Timelike,
{
    let Some(schedule) = schedule else {
        return policy.status();
    };

    let day = DayOfWeek::from(now.weekday());
    match schedule.day(day) {
        Some(hours) if !hours.closed => {
            let current = (now.hour() * 60 + now.minute()) as u16;
            OpenStatus::from(within_hours(hours, current))
        }
        _ => OpenStatus::Closed,
    }
}

/// Evaluate against the machine's local clock.
pub fn is_open_now(schedule: Option<&WeeklySchedule>) -> OpenStatus {
    is_open(schedule, &Local::now())
}

/// Whether `current` (minutes since midnight) falls inside the day's window.
fn within_hours(hours: &DayHours, current: u16) -> bool {
    let open = minutes_or_midnight(&hours.open);
    let close = minutes_or_midnight(&hours.close);

    if close > open {
        open <= current && current < close
    } else {
        current >= open || current < close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

    // 2024-06-02 is a Sunday; offsets 0..=6 walk the week.
    fn at(day_offset: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 2 + day_offset)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn weekday_only_schedule() -> WeeklySchedule {
        DayOfWeek::ALL
            .into_iter()
            .map(|day| {
                let hours = if day == DayOfWeek::Monday {
                    DayHours::new("9:00 AM", "5:00 PM")
                } else {
                    DayHours::closed()
                };
                (day, hours)
            })
            .collect()
    }

    #[test]
    fn test_monday_scenario() {
        let schedule = weekday_only_schedule();
        assert_eq!(is_open(Some(&schedule), &at(1, 14, 0)), OpenStatus::Open);
        assert_eq!(is_open(Some(&schedule), &at(1, 17, 0)), OpenStatus::Closed);
        assert_eq!(is_open(Some(&schedule), &at(2, 14, 0)), OpenStatus::Closed);
    }

    #[test]
    fn test_opening_minute_is_open_closing_minute_is_closed() {
        let schedule = weekday_only_schedule();
        assert_eq!(is_open(Some(&schedule), &at(1, 8, 59)), OpenStatus::Closed);
        assert_eq!(is_open(Some(&schedule), &at(1, 9, 0)), OpenStatus::Open);
        assert_eq!(is_open(Some(&schedule), &at(1, 16, 59)), OpenStatus::Open);
    }

    #[test]
    fn test_overnight_window() {
        let schedule = WeeklySchedule::new().with_day(DayOfWeek::Friday, DayHours::new("22:00", "02:00"));
        assert_eq!(is_open(Some(&schedule), &at(5, 23, 30)), OpenStatus::Open);
        assert_eq!(is_open(Some(&schedule), &at(5, 1, 0)), OpenStatus::Open);
        assert_eq!(is_open(Some(&schedule), &at(5, 10, 0)), OpenStatus::Closed);
        assert_eq!(is_open(Some(&schedule), &at(5, 2, 0)), OpenStatus::Closed);
        assert_eq!(is_open(Some(&schedule), &at(5, 22, 0)), OpenStatus::Open);
    }

    #[test]
    fn test_missing_day_is_closed() {
        let schedule = WeeklySchedule::new().with_day(DayOfWeek::Monday, DayHours::new("00:00", "23:59"));
        assert_eq!(is_open(Some(&schedule), &at(3, 12, 0)), OpenStatus::Closed);
    }

    #[test]
    fn test_missing_schedule_policy() {
        let now = at(0, 3, 0);
        assert_eq!(is_open(None, &now), OpenStatus::Open);
        assert_eq!(
            is_open_with_policy(None, &now, MissingSchedulePolicy::Closed),
            OpenStatus::Closed
        );
        // The policy only covers a missing schedule, not an empty one.
        let empty = WeeklySchedule::new();
        assert_eq!(
            is_open_with_policy(Some(&empty), &now, MissingSchedulePolicy::Open),
            OpenStatus::Closed
        );
    }

    #[test]
    fn test_unparseable_bound_degrades_to_midnight() {
        // open -> 0, so the window is [00:00, 17:00)
        let schedule = WeeklySchedule::new().with_day(DayOfWeek::Sunday, DayHours::new("nine", "17:00"));
        assert_eq!(is_open(Some(&schedule), &at(0, 0, 30)), OpenStatus::Open);
        assert_eq!(is_open(Some(&schedule), &at(0, 18, 0)), OpenStatus::Closed);

        // close -> 0 makes close <= open, read as overnight until midnight
        let schedule = WeeklySchedule::new().with_day(DayOfWeek::Sunday, DayHours::new("10:00", ""));
        assert_eq!(is_open(Some(&schedule), &at(0, 9, 0)), OpenStatus::Closed);
        assert_eq!(is_open(Some(&schedule), &at(0, 23, 0)), OpenStatus::Open);
    }

    #[test]
    fn test_mixed_formats() {
        let schedule = WeeklySchedule::new().with_day(DayOfWeek::Saturday, DayHours::new("11:30", "9:00 PM"));
        assert_eq!(is_open(Some(&schedule), &at(6, 20, 59)), OpenStatus::Open);
        assert_eq!(is_open(Some(&schedule), &at(6, 21, 0)), OpenStatus::Closed);
    }

    #[test]
    fn test_zoned_datetime_uses_its_own_wall_clock() {
        let schedule = weekday_only_schedule();
        // Monday 14:00 UTC
        let utc = Utc.with_ymd_and_hms(2024, 6, 3, 14, 0, 0).unwrap();
        assert_eq!(is_open(Some(&schedule), &utc), OpenStatus::Open);

        // Same instant seen from UTC-12 is Monday 02:00, before opening.
        let west = chrono::FixedOffset::west_opt(12 * 3600).unwrap();
        assert_eq!(
            is_open(Some(&schedule), &utc.with_timezone(&west)),
            OpenStatus::Closed
        );
    }
}
