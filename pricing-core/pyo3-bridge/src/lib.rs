use pyo3::prelude::*;

mod errors;
mod pricing_bindings;

use pricing_bindings::{py_format_price, PyPricingEngine};

#[pymodule]
fn pyo3_bridge(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyPricingEngine>()?;
    m.add_function(wrap_pyfunction!(py_format_price, m)?)?;

    mentor_pricing::observability::setup_logging("warn");

    Ok(())
}
