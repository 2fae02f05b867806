use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

use crate::core::domain::{DayHours, DayOfWeek, WeeklySchedule};
use crate::time::time_of_day::HOURS_LOG_TARGET;

/// Candidate keys that may hold the weekly schedule inside a truck document
const SCHEDULE_KEYS: &[&str] = &[
    "hours",
    "businessHours",
    "business_hours",
    "schedule",
    "openingHours",
    "opening_hours",
    "operatingHours",
];

/// Candidate keys for the opening time of a day
const OPEN_KEYS: &[&str] = &["open", "openTime", "open_time", "opens", "opensAt", "start"];

/// Candidate keys for the closing time of a day
const CLOSE_KEYS: &[&str] = &["close", "closeTime", "close_time", "closes", "closesAt", "end"];

/// Candidate keys for the closed flag of a day
const CLOSED_KEYS: &[&str] = &["closed", "isClosed", "is_closed"];

/// Candidate keys for an inverted "open today" flag
const OPEN_FLAG_KEYS: &[&str] = &["isOpen", "is_open", "open"];

/// Parse a weekly schedule from a JSON file
pub fn parse_schedule_file(path: &Path) -> Result<WeeklySchedule> {
    let json_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file: {}", path.display()))?;

    parse_schedule_str(&json_content)
}

/// Parse a weekly schedule from a JSON string.
///
/// Accepts either a bare day map or a document that nests it under one of
/// the usual schedule keys.
pub fn parse_schedule_str(json_str: &str) -> Result<WeeklySchedule> {
    let value: Value = serde_json::from_str(json_str).context("Failed to parse schedule JSON")?;

    schedule_from_value(&value).context("Could not find a weekly schedule in JSON")
}

/// Strict decoding of a bare `{ "monday": { "open", "close", "closed" } }`
/// map, reporting the exact path of the first offending field.
pub fn parse_schedule_strict(json_str: &str) -> Result<WeeklySchedule> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    serde_path_to_error::deserialize(deserializer)
        .map_err(|e| anyhow!("Invalid schedule at '{}': {}", e.path(), e.inner()))
}

/// Extract the schedule field of a truck document.
///
/// Only the usual schedule keys are consulted; other document fields are
/// never read as day names. The first key present with a non-null value
/// wins. Returns `None` only when no such key holds a value, i.e. the vendor
/// never configured hours. A present value with no readable day yields an
/// empty schedule, which evaluates as closed every day.
pub fn schedule_from_document(doc: &Value) -> Option<WeeklySchedule> {
    let obj = doc.as_object()?;
    let (key, value) = SCHEDULE_KEYS
        .iter()
        .find_map(|key| obj.get(*key).filter(|v| !v.is_null()).map(|v| (*key, v)))?;

    let schedule = match value {
        Value::Object(days) => schedule_from_document(value).unwrap_or_else(|| day_map(days)),
        _ => WeeklySchedule::new(),
    };
    if schedule.is_empty() {
        log::warn!(
            target: HOURS_LOG_TARGET,
            "Unreadable '{}' field; treating every day as closed",
            key
        );
    }
    Some(schedule)
}

/// Extract a weekly schedule from a JSON value.
///
/// The value may be a document holding one of the usual schedule keys (see
/// [`schedule_from_document`]) or a bare day map. Unknown keys are ignored.
/// A day whose entry cannot be read at all is left out, which the evaluator
/// treats as closed. Returns `None` when neither form is recognized.
pub fn schedule_from_value(value: &Value) -> Option<WeeklySchedule> {
    if let Some(schedule) = schedule_from_document(value) {
        return Some(schedule);
    }

    let schedule = day_map(value.as_object()?);
    (!schedule.is_empty()).then_some(schedule)
}

/// Every recognized day key of `obj` with a readable entry.
fn day_map(obj: &Map<String, Value>) -> WeeklySchedule {
    obj.iter()
        .filter_map(|(key, day_value)| {
            let day = DayOfWeek::from_name(key)?;
            let hours = day_hours_from_value(day_value)?;
            Some((day, hours))
        })
        .collect()
}

/// Parse one day's entry.
///
/// Besides the object form, `null`, `false` and the string `"closed"` all
/// mean a closed day.
fn day_hours_from_value(value: &Value) -> Option<DayHours> {
    match value {
        Value::Null | Value::Bool(false) => Some(DayHours::closed()),
        Value::String(s) if s.trim().eq_ignore_ascii_case("closed") => Some(DayHours::closed()),
        Value::Object(obj) => Some(day_hours_from_object(obj)),
        _ => None,
    }
}

fn day_hours_from_object(obj: &Map<String, Value>) -> DayHours {
    let open = find_string_by_keys(obj, OPEN_KEYS).unwrap_or_default();
    let close = find_string_by_keys(obj, CLOSE_KEYS).unwrap_or_default();

    let closed_flag = find_bool_by_keys(obj, CLOSED_KEYS).unwrap_or(false);
    let not_open_flag = find_bool_by_keys(obj, OPEN_FLAG_KEYS) == Some(false);

    DayHours {
        open,
        close,
        closed: closed_flag || not_open_flag,
    }
}

/// First key present holding a string.
fn find_string_by_keys(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(|v| v.as_str().map(str::to_string))
}

/// First key present holding a boolean (or a `"true"`/`"false"` string).
fn find_bool_by_keys(obj: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    keys.iter().filter_map(|key| obj.get(*key)).find_map(|v| match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse::<bool>().ok(),
        _ => None,
    })
}
