use serde_json::{Map, Value};

use crate::algorithms::proximity::Locatable;
use crate::core::domain::GeoPoint;

/// Candidate keys for a nested coordinate object
const NESTED_KEYS: &[&str] = &["location", "coordinates", "coords", "geo", "position", "geopoint"];

/// Candidate keys for latitude
const LATITUDE_KEYS: &[&str] = &["latitude", "lat", "Latitude", "Lat", "_latitude"];

/// Candidate keys for longitude
const LONGITUDE_KEYS: &[&str] = &[
    "longitude",
    "lng",
    "lon",
    "long",
    "Longitude",
    "Lng",
    "_longitude",
];

/// Candidate keys for the document identifier
const ID_KEYS: &[&str] = &["id", "truckId", "truck_id", "uid", "docId", "doc_id"];

/// Extract a valid coordinate pair from a JSON document.
///
/// Flat keys win over nested ones. A GeoJSON `Point` (`[lng, lat]` order) is
/// recognized under any nested key. Returns `None` when no finite, in-range
/// pair can be found.
pub fn location_from_value(value: &Value) -> Option<GeoPoint> {
    let obj = value.as_object()?;

    if let Some(point) = flat_location(obj) {
        return Some(point);
    }

    if let Some(point) = geojson_point(obj) {
        return Some(point);
    }

    NESTED_KEYS
        .iter()
        .filter_map(|key| obj.get(*key))
        .find_map(location_from_value)
}

fn flat_location(obj: &Map<String, Value>) -> Option<GeoPoint> {
    let latitude = find_number_by_keys(obj, LATITUDE_KEYS)?;
    let longitude = find_number_by_keys(obj, LONGITUDE_KEYS)?;
    let point = GeoPoint::new(latitude, longitude);
    point.is_valid().then_some(point)
}

fn geojson_point(obj: &Map<String, Value>) -> Option<GeoPoint> {
    if obj.get("type").and_then(Value::as_str) != Some("Point") {
        return None;
    }
    let coords = obj.get("coordinates")?.as_array()?;
    if coords.len() < 2 {
        return None;
    }
    let point = GeoPoint::new(number_value(&coords[1])?, number_value(&coords[0])?);
    point.is_valid().then_some(point)
}

/// First key present with a numeric value (numbers or numeric strings).
fn find_number_by_keys(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(number_value)
}

fn number_value(value: &Value) -> Option<f64> {
    if let Some(num) = value.as_f64() {
        return Some(num);
    }
    value.as_str()?.trim().parse::<f64>().ok()
}

/// A raw store document with its coordinates resolved once.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedRecord {
    pub id: Option<String>,
    pub location: Option<GeoPoint>,
    pub record: Value,
}

impl LocatedRecord {
    pub fn from_value(record: Value) -> Self {
        let location = location_from_value(&record);
        let id = record.as_object().and_then(|obj| {
            ID_KEYS
                .iter()
                .filter_map(|key| obj.get(*key))
                .find_map(|v| match v {
                    Value::String(s) if !s.is_empty() => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
        });
        Self {
            id,
            location,
            record,
        }
    }
}

impl Locatable for LocatedRecord {
    fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}

/// Resolve coordinates for a batch of documents. Documents without usable
/// coordinates are kept with `location: None` so the caller decides what to
/// do with them; the proximity filter drops them.
pub fn adapt_records(records: impl IntoIterator<Item = Value>) -> Vec<LocatedRecord> {
    let adapted: Vec<LocatedRecord> = records.into_iter().map(LocatedRecord::from_value).collect();
    let unlocated = adapted.iter().filter(|r| r.location.is_none()).count();
    if unlocated > 0 {
        log::debug!(
            "{} of {} records have no usable coordinates",
            unlocated,
            adapted.len()
        );
    }
    adapted
}
