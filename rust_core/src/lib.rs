//! Truckmap core - shared business rules for the food-truck discovery clients.
//!
//! The mobile map, the web app and the embedded map surface all call into the
//! same two pure components:
//!
//! - [`algorithms::business_hours`]: is a vendor open right now?
//! - [`algorithms::proximity`]: which vendors are within range, nearest first?
//!
//! Everything else in this crate is plumbing around them: tolerant adapters for
//! loosely-shaped store records ([`parsing`]), schedule diagnostics, cart
//! gating, fee-split arithmetic and the filter-then-hydrate lookup
//! ([`services`]), a document-store seam ([`db`]) and TOML configuration
//! ([`config`]).

pub mod algorithms;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod parsing;
pub mod services;
pub mod time;

pub use crate::algorithms::business_hours::{is_open, is_open_now, is_open_with_policy};
pub use crate::algorithms::proximity::{filter_nearby, haversine_km, BoundingBox, Locatable};
pub use crate::config::CoreConfig;
pub use crate::core::domain::{
    DayHours, DayOfWeek, GeoPoint, MissingSchedulePolicy, OpenStatus, ProximityQuery,
    ScoredEntity, WeeklySchedule,
};
pub use crate::error::{ConfigError, QueryError};
