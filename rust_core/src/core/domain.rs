//! Domain models for vendor schedules, coordinates and proximity queries.
//!
//! These are plain value types: they are built per call, never mutated by the
//! evaluator or the filter, and carry no lifecycle of their own.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// One of the seven fixed schedule keys, Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All days in schedule order, starting on Sunday.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        }
    }

    /// Resolve a day name as vendors tend to type it.
    ///
    /// Matching is case-insensitive and accepts full names and
    /// three-letter abbreviations (`"Mon"`, `"THU"`, `"sunday"`).
    ///
    /// ```
    /// use truckmap_rust::core::domain::DayOfWeek;
    ///
    /// assert_eq!(DayOfWeek::from_name("Mon"), Some(DayOfWeek::Monday));
    /// assert_eq!(DayOfWeek::from_name(" Saturday "), Some(DayOfWeek::Saturday));
    /// assert_eq!(DayOfWeek::from_name("someday"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|day| {
            let full = day.as_str();
            lowered == full || (lowered.len() == 3 && full.starts_with(lowered.as_str()))
        })
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opening hours for a single weekday.
///
/// `open` and `close` hold the wall-clock text exactly as the vendor entered
/// it (`"09:00"`, `"9:00 AM"`). They are parsed leniently at evaluation time,
/// see [`crate::time::time_of_day`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

impl DayHours {
    /// Hours for a day the vendor trades.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            closed: false,
        }
    }

    /// A day marked as closed.
    pub fn closed() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
            closed: true,
        }
    }
}

/// Weekly schedule keyed by day. A day with no entry counts as closed.
///
/// # Examples
///
/// ```
/// use truckmap_rust::core::domain::{DayHours, DayOfWeek, WeeklySchedule};
///
/// let schedule = WeeklySchedule::new()
///     .with_day(DayOfWeek::Monday, DayHours::new("9:00 AM", "5:00 PM"))
///     .with_day(DayOfWeek::Tuesday, DayHours::closed());
///
/// assert!(schedule.day(DayOfWeek::Monday).is_some());
/// assert!(schedule.day(DayOfWeek::Wednesday).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<DayOfWeek, DayHours>);

impl WeeklySchedule {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert, replacing any hours already set for `day`.
    pub fn with_day(mut self, day: DayOfWeek, hours: DayHours) -> Self {
        self.0.insert(day, hours);
        self
    }

    pub fn insert(&mut self, day: DayOfWeek, hours: DayHours) -> Option<DayHours> {
        self.0.insert(day, hours)
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DayHours> {
        self.0.get(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &DayHours)> {
        self.0.iter().map(|(day, hours)| (*day, hours))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(DayOfWeek, DayHours)> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = (DayOfWeek, DayHours)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Result of a business-hours evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenStatus {
    Open,
    Closed,
}

impl OpenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenStatus::Open => "open",
            OpenStatus::Closed => "closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OpenStatus::Open)
    }
}

impl From<bool> for OpenStatus {
    fn from(open: bool) -> Self {
        if open {
            OpenStatus::Open
        } else {
            OpenStatus::Closed
        }
    }
}

impl fmt::Display for OpenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the evaluator answers when a vendor has no schedule at all.
///
/// Defaults to [`MissingSchedulePolicy::Open`]; switching to `Closed` is an
/// explicit configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSchedulePolicy {
    #[default]
    Open,
    Closed,
}

impl MissingSchedulePolicy {
    pub fn status(&self) -> OpenStatus {
        match self {
            MissingSchedulePolicy::Open => OpenStatus::Open,
            MissingSchedulePolicy::Closed => OpenStatus::Closed,
        }
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `true` when both components are finite and inside
    /// [-90, 90] x [-180, 180].
    ///
    /// ```
    /// use truckmap_rust::core::domain::GeoPoint;
    ///
    /// assert!(GeoPoint::new(33.8283, -98.5795).is_valid());
    /// assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    /// assert!(!GeoPoint::new(91.0, 0.0).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Parameters of a radius search around a center point.
///
/// Fields are private so that every query in circulation satisfies
/// `radius_km > 0`, `max_results > 0` and has a valid center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProximityQuery {
    center: GeoPoint,
    radius_km: f64,
    max_results: usize,
}

impl ProximityQuery {
    /// Build a query, rejecting parameters the filter cannot honor.
    ///
    /// ```
    /// use truckmap_rust::core::domain::{GeoPoint, ProximityQuery};
    ///
    /// let center = GeoPoint::new(33.8283, -98.5795);
    /// assert!(ProximityQuery::new(center, 50.0, 20).is_ok());
    /// assert!(ProximityQuery::new(center, 0.0, 20).is_err());
    /// assert!(ProximityQuery::new(center, 50.0, 0).is_err());
    /// ```
    pub fn new(center: GeoPoint, radius_km: f64, max_results: usize) -> Result<Self, QueryError> {
        if !center.is_valid() {
            return Err(QueryError::InvalidCenter {
                latitude: center.latitude,
                longitude: center.longitude,
            });
        }
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(QueryError::InvalidRadius(radius_km));
        }
        if max_results == 0 {
            return Err(QueryError::ZeroMaxResults);
        }
        Ok(Self {
            center,
            radius_km,
            max_results,
        })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

/// An entity paired with its great-circle distance from the query center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredEntity<T> {
    pub entity: T,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week_from_chrono() {
        assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from(Weekday::Sat), DayOfWeek::Saturday);
    }

    #[test]
    fn test_day_of_week_from_name_rejects_partial_prefixes() {
        assert_eq!(DayOfWeek::from_name("tu"), None);
        assert_eq!(DayOfWeek::from_name("tues"), None);
        assert_eq!(DayOfWeek::from_name("TUE"), Some(DayOfWeek::Tuesday));
    }

    #[test]
    fn test_schedule_serde_uses_lowercase_day_keys() {
        let schedule = WeeklySchedule::new()
            .with_day(DayOfWeek::Friday, DayHours::new("11:00", "22:00"));
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["friday"]["open"], "11:00");
        assert_eq!(json["friday"]["closed"], false);

        let back: WeeklySchedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, schedule);
    }

    #[test]
    fn test_day_hours_closed_defaults() {
        let hours: DayHours = serde_json::from_str(r#"{"closed": true}"#).unwrap();
        assert_eq!(hours, DayHours::closed());
    }

    #[test]
    fn test_open_status_strings() {
        assert_eq!(OpenStatus::Open.as_str(), "open");
        assert_eq!(OpenStatus::Closed.to_string(), "closed");
        assert_eq!(
            serde_json::to_string(&OpenStatus::Closed).unwrap(),
            "\"closed\""
        );
    }

    #[test]
    fn test_query_rejects_invalid_center_and_radius() {
        let bad_center = GeoPoint::new(f64::INFINITY, 0.0);
        assert!(matches!(
            ProximityQuery::new(bad_center, 10.0, 5),
            Err(QueryError::InvalidCenter { .. })
        ));

        let center = GeoPoint::new(0.0, 0.0);
        assert!(matches!(
            ProximityQuery::new(center, f64::NAN, 5),
            Err(QueryError::InvalidRadius(_))
        ));
        assert!(matches!(
            ProximityQuery::new(center, -1.0, 5),
            Err(QueryError::InvalidRadius(_))
        ));
    }
}
