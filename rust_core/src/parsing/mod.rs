//! Boundary adapters for loosely-shaped store records.
//!
//! Truck documents in the store have grown several spellings for the same
//! field over time (`lat`/`latitude`, `lng`/`lon`/`longitude`, `openTime`/
//! `open`). These parsers resolve that once, at the edge, so the evaluator and
//! the filter only ever see normalized [`crate::core::domain`] types.
//!
//! # Parsers
//!
//! - [`location`]: coordinates and located records from JSON documents
//! - [`schedule`]: weekly schedules from JSON documents
//!
//! # Example
//!
//! ```
//! use truckmap_rust::parsing::location::location_from_value;
//!
//! let doc = serde_json::json!({"name": "Taco Loco", "lat": 30.26, "lng": -97.74});
//! let point = location_from_value(&doc).unwrap();
//! assert_eq!(point.latitude, 30.26);
//! ```

pub mod location;
pub mod schedule;


pub use location::{adapt_records, location_from_value, LocatedRecord};
pub use schedule::{
    parse_schedule_file, parse_schedule_str, parse_schedule_strict, schedule_from_document,
    schedule_from_value,
};
