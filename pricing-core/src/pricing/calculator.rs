use super::{round_to_pennies, FeeSchedule, PriceBreakdown};
use crate::error::{PricingError, Result};
use tracing::{debug, warn};

pub const DEFAULT_CURRENCY: &str = "GBP";

/// Session lengths offered by the booking flow. The calculator itself
/// accepts any positive duration.
pub const STANDARD_DURATIONS: [u32; 2] = [30, 60];

#[derive(Debug, Clone)]
pub struct PriceCalculator {
    fees: FeeSchedule,
}

impl PriceCalculator {
    pub fn new(fees: FeeSchedule) -> Self {
        Self { fees }
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Price a session of `duration_minutes` at `hourly_rate`.
    ///
    /// Commission is taken on the mentor fee, then VAT on the subtotal.
    /// Each field is derived at full precision and rounded on its own,
    /// never from an already-rounded predecessor.
    pub fn calculate_session_price(
        &self,
        hourly_rate: f64,
        duration_minutes: u32,
        currency: &str,
    ) -> Result<PriceBreakdown> {
        if !hourly_rate.is_finite() || hourly_rate < 0.0 {
            warn!(hourly_rate, "rejected hourly rate");
            return Err(PricingError::InvalidInput(format!(
                "hourly rate must be a finite, non-negative number, got {}",
                hourly_rate
            )));
        }

        if duration_minutes == 0 {
            warn!("rejected zero-length session");
            return Err(PricingError::InvalidInput(
                "duration must be at least one minute".to_string(),
            ));
        }

        if currency.trim().is_empty() {
            return Err(PricingError::InvalidInput(
                "currency code must not be empty".to_string(),
            ));
        }

        let mentor_fee = hourly_rate * f64::from(duration_minutes) / 60.0;
        let platform_fee = mentor_fee * self.fees.platform_fee_rate;
        let subtotal = mentor_fee + platform_fee;
        let vat = subtotal * self.fees.vat_rate;
        let total = subtotal + vat;

        if !total.is_finite() {
            warn!(hourly_rate, duration_minutes, "session price overflowed");
            return Err(PricingError::InvalidInput(format!(
                "hourly rate {} for {} minutes is too large to price",
                hourly_rate, duration_minutes
            )));
        }

        let breakdown = PriceBreakdown {
            mentor_fee: round_to_pennies(mentor_fee),
            platform_fee: round_to_pennies(platform_fee),
            subtotal: round_to_pennies(subtotal),
            vat: round_to_pennies(vat),
            total: round_to_pennies(total),
            currency: currency.to_string(),
            duration_minutes,
        };

        debug!(
            hourly_rate,
            duration_minutes,
            currency,
            total = breakdown.total,
            "calculated session price"
        );

        Ok(breakdown)
    }

    pub fn calculate_session_price_gbp(
        &self,
        hourly_rate: f64,
        duration_minutes: u32,
    ) -> Result<PriceBreakdown> {
        self.calculate_session_price(hourly_rate, duration_minutes, DEFAULT_CURRENCY)
    }

    /// One breakdown per duration, in the order given.
    pub fn session_options(
        &self,
        hourly_rate: f64,
        durations: &[u32],
        currency: &str,
    ) -> Result<Vec<PriceBreakdown>> {
        durations
            .iter()
            .map(|&minutes| self.calculate_session_price(hourly_rate, minutes, currency))
            .collect()
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_hour() {
        let calc = PriceCalculator::default();
        let b = calc.calculate_session_price_gbp(100.0, 60).unwrap();
        assert_eq!(b.mentor_fee, 100.0);
        assert_eq!(b.platform_fee, 20.0);
        assert_eq!(b.subtotal, 120.0);
        assert_eq!(b.vat, 24.0);
        assert_eq!(b.total, 144.0);
        assert_eq!(b.currency, "GBP");
        assert_eq!(b.duration_minutes, 60);
    }

    #[test]
    fn test_half_hour() {
        let calc = PriceCalculator::default();
        let b = calc.calculate_session_price_gbp(100.0, 30).unwrap();
        assert_eq!(b.mentor_fee, 50.0);
        assert_eq!(b.platform_fee, 10.0);
        assert_eq!(b.subtotal, 60.0);
        assert_eq!(b.vat, 12.0);
        assert_eq!(b.total, 72.0);
    }

    #[test]
    fn test_fields_rounded_independently() {
        // 45 / hour for 20 minutes: mentor fee 15.00, platform 3.00,
        // subtotal 18.00, vat 3.60, total 21.60
        let calc = PriceCalculator::default();
        let b = calc.calculate_session_price_gbp(45.0, 20).unwrap();
        assert_eq!(b.mentor_fee, 15.0);
        assert_eq!(b.total, 21.6);

        // 33.33 / hour for 45 minutes: mentor fee 24.9975, total 35.9964
        let b = calc.calculate_session_price_gbp(33.33, 45).unwrap();
        assert_eq!(b.mentor_fee, 25.0);
        assert_eq!(b.platform_fee, 5.0);
        assert_eq!(b.subtotal, 30.0);
        assert_eq!(b.vat, 6.0);
        assert_eq!(b.total, 36.0);
    }

    #[test]
    fn test_decimal_tie_rounds_up() {
        let calc = PriceCalculator::default();
        let b = calc.calculate_session_price_gbp(1.005, 60).unwrap();
        assert_eq!(b.mentor_fee, 1.01);
        let b = calc.calculate_session_price_gbp(2.675, 60).unwrap();
        assert_eq!(b.mentor_fee, 2.68);
    }

    #[test]
    fn test_rejects_overflowing_rate() {
        let calc = PriceCalculator::default();
        assert!(matches!(
            calc.calculate_session_price_gbp(1e308, 120),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(calc.calculate_session_price_gbp(f64::MAX, 60).is_err());
    }

    #[test]
    fn test_zero_rate_is_free() {
        let calc = PriceCalculator::default();
        let b = calc.calculate_session_price_gbp(0.0, 60).unwrap();
        assert_eq!(b.total, 0.0);
    }

    #[test]
    fn test_currency_passed_through() {
        let calc = PriceCalculator::default();
        let b = calc.calculate_session_price(80.0, 60, "USD").unwrap();
        assert_eq!(b.currency, "USD");
        assert_eq!(b.total, 115.2);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let calc = PriceCalculator::default();
        assert!(matches!(
            calc.calculate_session_price_gbp(-1.0, 60),
            Err(PricingError::InvalidInput(_))
        ));
        assert!(calc.calculate_session_price_gbp(f64::NAN, 60).is_err());
        assert!(calc.calculate_session_price_gbp(f64::INFINITY, 60).is_err());
        assert!(calc.calculate_session_price_gbp(100.0, 0).is_err());
        assert!(calc.calculate_session_price(100.0, 60, "  ").is_err());
    }

    #[test]
    fn test_custom_fee_schedule() {
        let calc = PriceCalculator::new(FeeSchedule::new(0.10, 0.0));
        let b = calc.calculate_session_price_gbp(100.0, 60).unwrap();
        assert_eq!(b.platform_fee, 10.0);
        assert_eq!(b.vat, 0.0);
        assert_eq!(b.total, 110.0);
    }

    #[test]
    fn test_session_options() {
        let calc = PriceCalculator::default();
        let options = calc
            .session_options(100.0, &STANDARD_DURATIONS, DEFAULT_CURRENCY)
            .unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].total, 72.0);
        assert_eq!(options[1].total, 144.0);

        assert!(calc.session_options(100.0, &[30, 0], DEFAULT_CURRENCY).is_err());
    }
}
