use crate::errors::to_py_err;
use mentor_pricing::pricing::DEFAULT_CURRENCY;
use mentor_pricing::{format_price, MentorTier, PricingConfig, PricingEngine};
use pyo3::prelude::*;
use pyo3::types::PyDict;

#[pyclass(name = "PricingEngine")]
pub struct PyPricingEngine {
    inner: PricingEngine,
}

fn parse_tier(tier: &str) -> PyResult<MentorTier> {
    tier.parse::<MentorTier>().map_err(to_py_err)
}

#[pymethods]
impl PyPricingEngine {
    #[new]
    #[pyo3(signature = (config_toml=None))]
    fn new(config_toml: Option<&str>) -> PyResult<Self> {
        let config = match config_toml {
            Some(content) => PricingConfig::from_toml_str(content).map_err(to_py_err)?,
            None => PricingConfig::default(),
        };
        let inner = PricingEngine::new(config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[pyo3(signature = (hourly_rate, duration_minutes, currency=DEFAULT_CURRENCY))]
    fn calculate_session_price<'py>(
        &self,
        py: Python<'py>,
        hourly_rate: f64,
        duration_minutes: u32,
        currency: &str,
    ) -> PyResult<&'py PyDict> {
        let breakdown = self
            .inner
            .calculate_session_price(hourly_rate, duration_minutes, currency)
            .map_err(to_py_err)?;

        let result = PyDict::new(py);
        result.set_item("mentor_fee", breakdown.mentor_fee)?;
        result.set_item("platform_fee", breakdown.platform_fee)?;
        result.set_item("subtotal", breakdown.subtotal)?;
        result.set_item("vat", breakdown.vat)?;
        result.set_item("total", breakdown.total)?;
        result.set_item("currency", breakdown.currency)?;
        result.set_item("duration_minutes", breakdown.duration_minutes)?;
        Ok(result)
    }

    fn validate_rate_for_tier<'py>(
        &self,
        py: Python<'py>,
        rate: f64,
        tier: &str,
    ) -> PyResult<&'py PyDict> {
        let outcome = self.inner.validate_rate_for_tier(rate, parse_tier(tier)?);

        let result = PyDict::new(py);
        result.set_item("valid", outcome.valid)?;
        if let Some(error) = outcome.error {
            result.set_item("error", error)?;
        }
        Ok(result)
    }

    fn get_band<'py>(&self, py: Python<'py>, tier: &str) -> PyResult<&'py PyDict> {
        let band = self.inner.get_band(parse_tier(tier)?);

        let result = PyDict::new(py);
        result.set_item("min", band.min)?;
        result.set_item("max", band.max)?;
        result.set_item("default", band.default_rate)?;
        result.set_item("currency", band.currency.as_str())?;
        Ok(result)
    }

    fn config_toml(&self) -> PyResult<String> {
        self.inner.config().to_toml_string().map_err(to_py_err)
    }
}

#[pyfunction]
#[pyo3(name = "format_price")]
pub fn py_format_price(amount: f64, currency: &str) -> String {
    format_price(amount, currency)
}
