//! Cart gating.
//!
//! Adding items, checking out and placing pre-orders are only allowed while
//! the vendor is open. A blocked action carries the fixed copy the client
//! shows in its modal.

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::algorithms::business_hours::is_open_with_policy;
use crate::core::domain::{MissingSchedulePolicy, WeeklySchedule};

/// Modal title shown for every blocked cart action.
pub const CLOSED_TITLE: &str = "Truck Closed";

/// Cart operations gated on business hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CartAction {
    AddItem,
    Checkout,
    PreOrder,
}

impl CartAction {
    /// Modal body for this action when the vendor is closed.
    pub fn closed_message(&self) -> &'static str {
        match self {
            CartAction::AddItem => {
                "This truck is currently closed. You can add items once it opens again."
            }
            CartAction::Checkout => {
                "This truck is currently closed. Your order can be placed once it opens again."
            }
            CartAction::PreOrder => {
                "This truck is currently closed and is not taking pre-orders right now."
            }
        }
    }
}

/// A cart action refused because the vendor is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{title}: {message}")]
pub struct CartBlocked {
    pub action: CartAction,
    pub title: &'static str,
    pub message: &'static str,
}

impl CartBlocked {
    fn closed(action: CartAction) -> Self {
        Self {
            action,
            title: CLOSED_TITLE,
            message: action.closed_message(),
        }
    }
}

/// Allow `action` only if the vendor is open at `now`.
///
/// ```
/// use chrono::NaiveDate;
/// use truckmap_rust::core::domain::{DayHours, DayOfWeek, MissingSchedulePolicy, WeeklySchedule};
/// use truckmap_rust::services::cart::{check_cart_action, CartAction};
///
/// let schedule = WeeklySchedule::new()
///     .with_day(DayOfWeek::Monday, DayHours::new("9:00 AM", "5:00 PM"));
/// let monday_night = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap().and_hms_opt(21, 0, 0).unwrap();
///
/// let blocked = check_cart_action(
///     Some(&schedule),
///     &monday_night,
///     CartAction::Checkout,
///     MissingSchedulePolicy::Open,
/// )
/// .unwrap_err();
/// assert_eq!(blocked.title, "Truck Closed");
/// ```
pub fn check_cart_action<T>(
    schedule: Option<&WeeklySchedule>,
    now: &T,
    action: CartAction,
    policy: MissingSchedulePolicy,
) -> Result<(), CartBlocked>
where
    T: Datelike + Timelike,
{
    if is_open_with_policy(schedule, now, policy).is_open() {
        Ok(())
    } else {
        log::debug!("Blocked {:?}: vendor closed", action);
        Err(CartBlocked::closed(action))
    }
}
