use mentor_pricing::PricingError;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::PyErr;

pub fn to_py_err(err: PricingError) -> PyErr {
    match err {
        PricingError::Io(e) => PyIOError::new_err(format!("IO error: {}", e)),
        other => PyValueError::new_err(other.to_string()),
    }
}
