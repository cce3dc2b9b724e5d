use super::{MentorTier, PricingBand};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One band per tier. Holding each band in its own field keeps
/// `get_band` total without a not-found branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierBandRegistry {
    pub associate: PricingBand,
    pub senior: PricingBand,
    pub principal: PricingBand,
}

impl TierBandRegistry {
    pub fn new(associate: PricingBand, senior: PricingBand, principal: PricingBand) -> Self {
        Self {
            associate,
            senior,
            principal,
        }
    }

    pub fn get_band(&self, tier: MentorTier) -> &PricingBand {
        match tier {
            MentorTier::Associate => &self.associate,
            MentorTier::Senior => &self.senior,
            MentorTier::Principal => &self.principal,
        }
    }

    pub fn default_rate(&self, tier: MentorTier) -> f64 {
        self.get_band(tier).default_rate
    }

    pub fn bands(&self) -> impl Iterator<Item = (MentorTier, &PricingBand)> + '_ {
        MentorTier::ALL.into_iter().map(move |tier| (tier, self.get_band(tier)))
    }

    pub fn validate(&self) -> Result<()> {
        for (tier, band) in self.bands() {
            band.validate(tier)?;
        }
        Ok(())
    }
}

impl Default for TierBandRegistry {
    fn default() -> Self {
        Self {
            associate: PricingBand::gbp(20.0, 60.0, 40.0),
            senior: PricingBand::gbp(80.0, 120.0, 100.0),
            principal: PricingBand::gbp(120.0, 200.0, 150.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let registry = TierBandRegistry::default();
        let senior = registry.get_band(MentorTier::Senior);
        assert_eq!(senior, &PricingBand::gbp(80.0, 120.0, 100.0));
        assert_eq!(senior.currency, "GBP");
        assert_eq!(registry.default_rate(MentorTier::Associate), 40.0);
        assert_eq!(registry.get_band(MentorTier::Principal).max, 200.0);
    }

    #[test]
    fn test_bands_in_tier_order() {
        let registry = TierBandRegistry::default();
        let tiers: Vec<_> = registry.bands().map(|(tier, _)| tier).collect();
        assert_eq!(tiers, MentorTier::ALL.to_vec());
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_band() {
        let registry = TierBandRegistry {
            senior: PricingBand::gbp(120.0, 80.0, 100.0),
            ..TierBandRegistry::default()
        };
        assert!(registry.validate().is_err());
    }
}
