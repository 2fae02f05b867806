//! The two pure components every client surface shares.
//!
//! - [`business_hours`]: open/closed evaluation against a weekly schedule
//! - [`proximity`]: haversine radius filter with nearest-first ordering
//!
//! Both are synchronous, allocate only local state and are safe to call from
//! any thread.

pub mod business_hours;
pub mod proximity;

pub use business_hours::{is_open, is_open_now, is_open_with_policy};
pub use proximity::{filter_nearby, haversine_km, BoundingBox, Locatable};
