//! Truck records as the services see them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::algorithms::proximity::Locatable;
use crate::core::domain::{GeoPoint, WeeklySchedule};
use crate::parsing::location::location_from_value;
use crate::parsing::schedule::schedule_from_document;

/// Store document id of a truck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruckId(pub String);

impl TruckId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TruckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully hydrated truck record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: TruckId,
    pub name: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// `None` when the vendor never configured hours.
    #[serde(default)]
    pub hours: Option<WeeklySchedule>,
}

impl Truck {
    /// Normalize a raw store document.
    ///
    /// Coordinates and hours go through the tolerant adapters in
    /// [`crate::parsing`]; the name falls back to the id. `hours` is `None`
    /// only when the document has no schedule field at all.
    pub fn from_document(id: TruckId, doc: &Value) -> Self {
        let text = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| doc.get(*key))
                .find_map(|v| v.as_str().map(str::to_string))
        };

        Self {
            name: text(&["name", "truckName", "displayName"]).unwrap_or_else(|| id.0.clone()),
            cuisine: text(&["cuisine", "category", "foodType"]),
            location: location_from_value(doc),
            hours: schedule_from_document(doc),
            id,
        }
    }

    /// Id and coordinates only.
    pub fn to_location(&self) -> TruckLocation {
        TruckLocation {
            id: self.id.clone(),
            location: self.location,
        }
    }
}

impl Locatable for Truck {
    fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}

/// The lightweight half of a truck record used by the proximity pre-filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckLocation {
    pub id: TruckId,
    pub location: Option<GeoPoint>,
}

impl Locatable for TruckLocation {
    fn location(&self) -> Option<GeoPoint> {
        self.location
    }
}
