//! Fee-split arithmetic for marketplace payments.
//!
//! The payment processor is handed the total and the platform's application
//! fee; the vendor receives the remainder. Amounts are integer cents and the
//! fee rate is in basis points.

use serde::Serialize;

const BPS_DENOMINATOR: u128 = 10_000;

/// How a charge is divided between the platform and the vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeSplit {
    pub amount_cents: u64,
    pub application_fee_cents: u64,
    pub vendor_payout_cents: u64,
}

impl FeeSplit {
    /// Split `amount_cents` at `fee_bps`, rounding the fee half-up to the
    /// nearest cent. Rates above 100% are capped, so the fee never exceeds
    /// the amount.
    ///
    /// ```
    /// use truckmap_rust::services::fees::FeeSplit;
    ///
    /// let split = FeeSplit::compute(1_250, 250); // 2.5% of $12.50
    /// assert_eq!(split.application_fee_cents, 31);
    /// assert_eq!(split.vendor_payout_cents, 1_219);
    /// ```
    pub fn compute(amount_cents: u64, fee_bps: u32) -> Self {
        let bps = u128::from(fee_bps).min(BPS_DENOMINATOR);
        let fee = (u128::from(amount_cents) * bps + BPS_DENOMINATOR / 2) / BPS_DENOMINATOR;
        // bps <= denominator keeps fee <= amount, so it fits back into u64.
        let application_fee_cents = u64::try_from(fee).unwrap_or(amount_cents).min(amount_cents);

        Self {
            amount_cents,
            application_fee_cents,
            vendor_payout_cents: amount_cents - application_fee_cents,
        }
    }
}
