/// Mentor tiers and the hourly-rate bands attached to them

pub mod registry;

pub use registry::TierBandRegistry;

use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorTier {
    Associate,
    Senior,
    Principal,
}

impl MentorTier {
    pub const ALL: [MentorTier; 3] = [
        MentorTier::Associate,
        MentorTier::Senior,
        MentorTier::Principal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MentorTier::Associate => "associate",
            MentorTier::Senior => "senior",
            MentorTier::Principal => "principal",
        }
    }

    /// Human-facing label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            MentorTier::Associate => "Associate",
            MentorTier::Senior => "Senior",
            MentorTier::Principal => "Principal",
        }
    }
}

impl fmt::Display for MentorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MentorTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "associate" => Ok(MentorTier::Associate),
            "senior" => Ok(MentorTier::Senior),
            "principal" => Ok(MentorTier::Principal),
            _ => Err(PricingError::UnknownTier(s.to_string())),
        }
    }
}

/// Permitted hourly-rate range for one tier, in major currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBand {
    pub min: f64,
    pub max: f64,
    #[serde(rename = "default")]
    pub default_rate: f64,
    pub currency: String,
}

impl PricingBand {
    pub fn new(min: f64, max: f64, default_rate: f64, currency: impl Into<String>) -> Self {
        Self {
            min,
            max,
            default_rate,
            currency: currency.into(),
        }
    }

    pub fn gbp(min: f64, max: f64, default_rate: f64) -> Self {
        Self::new(min, max, default_rate, "GBP")
    }

    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.min && rate <= self.max
    }

    /// Check `0 <= min <= default <= max` with every bound finite.
    pub fn validate(&self, tier: MentorTier) -> Result<(), PricingError> {
        let bounds = [self.min, self.max, self.default_rate];
        if bounds.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(PricingError::InvalidConfig(format!(
                "{} band bounds must be finite and non-negative",
                tier
            )));
        }

        if !(self.min <= self.default_rate && self.default_rate <= self.max) {
            return Err(PricingError::InvalidConfig(format!(
                "{} band must satisfy min <= default <= max (got {} / {} / {})",
                tier, self.min, self.default_rate, self.max
            )));
        }

        if self.currency.trim().is_empty() {
            return Err(PricingError::InvalidConfig(format!(
                "{} band has no currency",
                tier
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parsing() {
        assert_eq!("senior".parse::<MentorTier>().unwrap(), MentorTier::Senior);
        assert_eq!(" Principal ".parse::<MentorTier>().unwrap(), MentorTier::Principal);
        assert!(matches!(
            "consultant".parse::<MentorTier>(),
            Err(PricingError::UnknownTier(_))
        ));
    }

    #[test]
    fn test_tier_serde_lowercase() {
        let json = serde_json::to_string(&MentorTier::Associate).unwrap();
        assert_eq!(json, "\"associate\"");
        let tier: MentorTier = serde_json::from_str("\"principal\"").unwrap();
        assert_eq!(tier, MentorTier::Principal);
    }

    #[test]
    fn test_band_validate() {
        assert!(PricingBand::gbp(20.0, 60.0, 40.0).validate(MentorTier::Associate).is_ok());
        assert!(PricingBand::gbp(60.0, 20.0, 40.0).validate(MentorTier::Associate).is_err());
        assert!(PricingBand::gbp(20.0, 60.0, 70.0).validate(MentorTier::Associate).is_err());
        assert!(PricingBand::gbp(f64::NAN, 60.0, 40.0).validate(MentorTier::Associate).is_err());
        assert!(PricingBand::new(20.0, 60.0, 40.0, "").validate(MentorTier::Associate).is_err());
    }
}
