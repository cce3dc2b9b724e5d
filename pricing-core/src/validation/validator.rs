use super::ValidationResult;
use crate::pricing::format_price;
use crate::tier::{MentorTier, TierBandRegistry};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RateValidator {
    registry: TierBandRegistry,
}

impl RateValidator {
    pub fn new(registry: TierBandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TierBandRegistry {
        &self.registry
    }

    /// Check `rate` against the tier's band. Both bounds are inclusive.
    pub fn validate_rate_for_tier(&self, rate: f64, tier: MentorTier) -> ValidationResult {
        let band = self.registry.get_band(tier);

        if !rate.is_finite() {
            info!(%tier, "rejected non-numeric rate");
            return ValidationResult::rejected("Hourly rate must be a number");
        }

        if rate < band.min {
            info!(%tier, rate, min = band.min, "rate below tier minimum");
            return ValidationResult::rejected(format!(
                "Minimum rate for {} tier is {}/hour",
                tier.label(),
                format_price(band.min, &band.currency)
            ));
        }

        if rate > band.max {
            info!(%tier, rate, max = band.max, "rate above tier maximum");
            return ValidationResult::rejected(format!(
                "Maximum rate for {} tier is {}/hour. You can lower your rate later.",
                tier.label(),
                format_price(band.max, &band.currency)
            ));
        }

        ValidationResult::ok()
    }
}

impl Default for RateValidator {
    fn default() -> Self {
        Self::new(TierBandRegistry::default())
    }
}
