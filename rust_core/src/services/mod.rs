//! Service layer for the map, cart and checkout flows.
//!
//! Services sit between the document-store seam and the client surfaces and
//! compose the pure algorithms into the operations those surfaces call.

pub mod cart;
pub mod fees;
pub mod nearby;
pub mod validation;

pub use cart::{check_cart_action, CartAction, CartBlocked};
pub use fees::FeeSplit;
pub use nearby::{find_nearby, find_nearby_among, NearbyOptions, NearbyTruck};
pub use validation::{
    has_blocking_issues, validate_optional_schedule, validate_schedule, Criticality, IssueCategory,
    ScheduleIssue,
};
