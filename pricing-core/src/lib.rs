pub mod config;
pub mod engine;
pub mod error;
pub mod observability;
pub mod pricing;
pub mod tier;
pub mod validation;

pub use config::PricingConfig;
pub use engine::PricingEngine;
pub use error::{PricingError, Result};
pub use pricing::{format_price, FeeSchedule, PriceBreakdown, PriceCalculator};
pub use tier::{MentorTier, PricingBand, TierBandRegistry};
pub use validation::{RateValidator, ValidationResult};
