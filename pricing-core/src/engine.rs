use crate::config::PricingConfig;
use crate::error::Result;
use crate::pricing::{PriceBreakdown, PriceCalculator};
use crate::tier::{MentorTier, PricingBand, TierBandRegistry};
use crate::validation::{RateValidator, ValidationResult};

/// Calculator, validator and tier bands built from one validated config.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    calculator: PriceCalculator,
    validator: RateValidator,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: PricingConfig) -> Self {
        Self {
            calculator: PriceCalculator::new(config.fees),
            validator: RateValidator::new(config.tiers),
        }
    }

    pub fn registry(&self) -> &TierBandRegistry {
        self.validator.registry()
    }

    pub fn calculator(&self) -> &PriceCalculator {
        &self.calculator
    }

    pub fn config(&self) -> PricingConfig {
        PricingConfig::new(*self.calculator.fees(), self.registry().clone())
    }

    pub fn get_band(&self, tier: MentorTier) -> &PricingBand {
        self.registry().get_band(tier)
    }

    pub fn calculate_session_price(
        &self,
        hourly_rate: f64,
        duration_minutes: u32,
        currency: &str,
    ) -> Result<PriceBreakdown> {
        self.calculator
            .calculate_session_price(hourly_rate, duration_minutes, currency)
    }

    pub fn validate_rate_for_tier(&self, rate: f64, tier: MentorTier) -> ValidationResult {
        self.validator.validate_rate_for_tier(rate, tier)
    }

    /// Breakdowns for the booking flow's standard durations at the tier's
    /// default rate.
    pub fn default_session_options(&self, tier: MentorTier) -> Result<Vec<PriceBreakdown>> {
        let band = self.get_band(tier);
        self.calculator.session_options(
            band.default_rate,
            &crate::pricing::STANDARD_DURATIONS,
            &band.currency,
        )
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::from_validated(PricingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_validated_default_config() {
        let config = PricingConfig::default();
        assert!(config.validate().is_ok());

        let engine = PricingEngine::default();
        assert_eq!(engine.config(), config);
        assert_eq!(engine.config(), PricingEngine::new(config).unwrap().config());
    }
}
