pub mod calculator;
pub mod format;

pub use calculator::{PriceCalculator, DEFAULT_CURRENCY, STANDARD_DURATIONS};
pub use format::{currency_symbol, format_price};

use crate::error::{PricingError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Platform commission and VAT, both as fractions (0.20 == 20%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub platform_fee_rate: f64,
    pub vat_rate: f64,
}

impl FeeSchedule {
    pub const PLATFORM_FEE_RATE: f64 = 0.20;
    pub const VAT_RATE: f64 = 0.20;

    pub fn new(platform_fee_rate: f64, vat_rate: f64) -> Self {
        Self {
            platform_fee_rate,
            vat_rate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [
            ("platform_fee_rate", self.platform_fee_rate),
            ("vat_rate", self.vat_rate),
        ] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(PricingError::InvalidConfig(format!(
                    "{} must be a fraction between 0 and 1, got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::new(Self::PLATFORM_FEE_RATE, Self::VAT_RATE)
    }
}

/// Itemised price of a single session. Every monetary field is rounded
/// to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub mentor_fee: f64,
    pub platform_fee: f64,
    pub subtotal: f64,
    pub vat: f64,
    pub total: f64,
    pub currency: String,
    pub duration_minutes: u32,
}

/// Round half-up to 2 decimal places.
///
/// Rounds the shortest decimal form of `value` (what a caller sees when the
/// number is printed), so 1.005 becomes 1.01 even though its binary value
/// sits just below the tie. Values outside `Decimal`'s range have no
/// pennies left to round and go through plain float rounding.
pub fn round_to_pennies(value: f64) -> f64 {
    Decimal::from_str(&value.to_string())
        .ok()
        .and_then(|d| {
            d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .to_string()
                .parse::<f64>()
                .ok()
        })
        .unwrap_or_else(|| (value * 100.0).round() / 100.0)
}
