pub mod validator;

pub use validator::RateValidator;

use serde::{Deserialize, Serialize};

/// Outcome of checking a mentor's proposed hourly rate. A rejected rate is
/// a normal value the caller surfaces as a form error, not a `PricingError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}
