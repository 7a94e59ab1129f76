//! Python bindings, built with the `python` feature.

use pyo3::{
    exceptions::{PyOSError, PyValueError},
    prelude::*,
};

use crate::error::Error;

mod strip;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidParameter { .. } => PyValueError::new_err(err.to_string()),
            Error::Image(_) => PyOSError::new_err(err.to_string()),
        }
    }
}

#[pymodule]
pub(crate) fn geometry(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<strip::PyMobiusStrip>()?;
    m.add_function(wrap_pyfunction!(strip::surface_area, m)?)?;
    m.add_function(wrap_pyfunction!(strip::edge_length, m)?)?;
    Ok(())
}
