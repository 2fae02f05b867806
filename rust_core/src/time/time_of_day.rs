//! Wall-clock parsing for vendor-entered opening and closing times.
//!
//! Vendors type hours in both 24-hour (`"09:00"`, `"17:30"`) and 12-hour
//! (`"9:00 AM"`, `"12:30pm"`) forms, and times copied from a formatted
//! locale string often carry a non-breaking or narrow no-break space before
//! the meridiem. Both forms resolve to minutes since midnight.

use crate::error::TimeParseError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Log target for schedule data that had to be degraded.
pub(crate) const HOURS_LOG_TARGET: &str = "truckmap::hours";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a wall-clock time into minutes since midnight.
///
/// 24-hour input requires hours 0-23; 12-hour input requires hours 1-12.
/// Minutes are always two digits in 0-59.
///
/// # Examples
///
/// ```
/// use truckmap_rust::time::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("9:00 AM"), Ok(540));
/// assert_eq!(parse_time_of_day("12:00 PM"), Ok(720));
/// assert_eq!(parse_time_of_day("12:00 AM"), Ok(0));
/// assert_eq!(parse_time_of_day("17:30"), Ok(1050));
/// assert!(parse_time_of_day("25:99").is_err());
/// ```
pub fn parse_time_of_day(input: &str) -> Result<u16, TimeParseError> {
    let normalized: String = input
        .chars()
        .map(|c| match c {
            '\u{00A0}' | '\u{202F}' | '\u{2007}' => ' ',
            other => other,
        })
        .collect();
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let (clock, meridiem) = split_meridiem(trimmed);
    let (hour_str, minute_str) = clock
        .trim_end()
        .split_once(':')
        .ok_or_else(|| TimeParseError::Malformed(input.to_string()))?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if hour_str.len() > 2 || !all_digits(hour_str) || minute_str.len() != 2 || !all_digits(minute_str)
    {
        return Err(TimeParseError::Malformed(input.to_string()));
    }

    // Both parts are at most two ASCII digits, so these cannot overflow.
    let hour: u16 = hour_str
        .parse()
        .map_err(|_| TimeParseError::Malformed(input.to_string()))?;
    let minute: u16 = minute_str
        .parse()
        .map_err(|_| TimeParseError::Malformed(input.to_string()))?;

    if minute > 59 {
        return Err(TimeParseError::OutOfRange(input.to_string()));
    }

    let hour24 = match meridiem {
        None => {
            if hour > 23 {
                return Err(TimeParseError::OutOfRange(input.to_string()));
            }
            hour
        }
        Some(m) => {
            if !(1..=12).contains(&hour) {
                return Err(TimeParseError::OutOfRange(input.to_string()));
            }
            match (m, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Am, h) => h,
                (Meridiem::Pm, 12) => 12,
                (Meridiem::Pm, h) => h + 12,
            }
        }
    };

    Ok(hour24 * 60 + minute)
}

/// Never-failing form of [`parse_time_of_day`].
///
/// Unparseable input becomes `0` (midnight) so that rendering is never
/// blocked by bad schedule data. Every fallback is logged at `warn` on the
/// `truckmap::hours` target so misconfigured vendors stay visible.
pub fn minutes_or_midnight(input: &str) -> u16 {
    match parse_time_of_day(input) {
        Ok(minutes) => minutes,
        Err(e) => {
            log::warn!(target: HOURS_LOG_TARGET, "{}; treating as midnight", e);
            0
        }
    }
}

/// Render minutes since midnight as `HH:MM`.
///
/// ```
/// use truckmap_rust::time::format_minutes;
///
/// assert_eq!(format_minutes(1050), "17:30");
/// assert_eq!(format_minutes(0), "00:00");
/// ```
pub fn format_minutes(minutes: u16) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Split a trailing `AM`/`PM` (or `a.m.`/`p.m.`) marker off the clock text.
fn split_meridiem(text: &str) -> (&str, Option<Meridiem>) {
    const MARKERS: [(&str, Meridiem); 4] = [
        ("a.m.", Meridiem::Am),
        ("p.m.", Meridiem::Pm),
        ("am", Meridiem::Am),
        ("pm", Meridiem::Pm),
    ];

    for (marker, meridiem) in MARKERS {
        if text.len() >= marker.len() {
            let split = text.len() - marker.len();
            if text.is_char_boundary(split) && text[split..].eq_ignore_ascii_case(marker) {
                return (&text[..split], Some(meridiem));
            }
        }
    }
    (text, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_24_hour() {
        assert_eq!(parse_time_of_day("00:00"), Ok(0));
        assert_eq!(parse_time_of_day("09:00"), Ok(540));
        assert_eq!(parse_time_of_day("9:05"), Ok(545));
        assert_eq!(parse_time_of_day("23:59"), Ok(1439));
    }

    #[test]
    fn test_parse_12_hour() {
        assert_eq!(parse_time_of_day("9:00 AM"), Ok(540));
        assert_eq!(parse_time_of_day("12:00 PM"), Ok(720));
        assert_eq!(parse_time_of_day("12:00 AM"), Ok(0));
        assert_eq!(parse_time_of_day("12:30 AM"), Ok(30));
        assert_eq!(parse_time_of_day("5:00 PM"), Ok(1020));
        assert_eq!(parse_time_of_day("11:59 PM"), Ok(1439));
    }

    #[test]
    fn test_parse_12_hour_flexible_whitespace_and_case() {
        assert_eq!(parse_time_of_day("9:00AM"), Ok(540));
        assert_eq!(parse_time_of_day("9:00   pm"), Ok(1260));
        assert_eq!(parse_time_of_day("9:00\u{00A0}PM"), Ok(1260));
        assert_eq!(parse_time_of_day("9:00\u{202F}AM"), Ok(540));
        assert_eq!(parse_time_of_day("  7:15 a.m. "), Ok(435));
        assert_eq!(parse_time_of_day("7:15 P.M."), Ok(1155));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_time_of_day(""), Err(TimeParseError::Empty));
        assert_eq!(parse_time_of_day("   "), Err(TimeParseError::Empty));
        assert!(matches!(
            parse_time_of_day("abc"),
            Err(TimeParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_time_of_day("9"),
            Err(TimeParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_time_of_day("9:5"),
            Err(TimeParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_time_of_day("-1:00"),
            Err(TimeParseError::Malformed(_))
        ));
        assert!(matches!(
            parse_time_of_day("PM"),
            Err(TimeParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            parse_time_of_day("25:99"),
            Err(TimeParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_time_of_day("24:00"),
            Err(TimeParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_time_of_day("13:00 PM"),
            Err(TimeParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_time_of_day("0:30 AM"),
            Err(TimeParseError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_time_of_day("10:60"),
            Err(TimeParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_minutes_or_midnight_falls_back_to_zero() {
        assert_eq!(minutes_or_midnight("abc"), 0);
        assert_eq!(minutes_or_midnight(""), 0);
        assert_eq!(minutes_or_midnight("25:99"), 0);
        assert_eq!(minutes_or_midnight("5:00 PM"), 1020);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(540), "09:00");
        assert_eq!(format_minutes(1439), "23:59");
    }
}
