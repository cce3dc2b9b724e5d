//! Pricing configuration: fee schedule plus tier bands, loadable from TOML

use crate::error::{PricingError, Result};
use crate::pricing::FeeSchedule;
use crate::tier::TierBandRegistry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub fees: FeeSchedule,
    pub tiers: TierBandRegistry,
}

impl PricingConfig {
    pub fn new(fees: FeeSchedule, tiers: TierBandRegistry) -> Self {
        Self { fees, tiers }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PricingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded pricing config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PricingError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.fees.validate()?;
        self.tiers.validate()
    }
}
