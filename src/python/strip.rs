use numpy::{PyArray2, ToPyArray};
use pyo3::prelude::*;

use crate::{
    error::{Error, Result},
    estimate,
    geometry::{ParameterGrid, StripParams},
    render,
    strip::{compute, MobiusStrip},
};

/// Validate `R`, `w` and `n` as given from Python.
///
/// Python integers are signed, so negative resolutions are reported here
/// rather than failing the conversion to `usize`.
fn strip_params(radius: f64, width: f64, resolution: i64) -> Result<StripParams> {
    let resolution = usize::try_from(resolution)
        .map_err(|_| Error::invalid("resolution", "must be at least 2", resolution))?;

    StripParams::new(radius, width, resolution)
}

/// A Möbius strip, sampled and measured on construction.
///
/// Args:
///     R (float): The distance from the center of the strip
///         to its center circle.
///     w (float): The strip width.
///     n (int): The number of samples along each parametric axis,
///         at least 2.
///
/// Raises:
///     ValueError: If any parameter is outside of its valid range.
#[pyclass(name = "MobiusStrip", module = "mobius_core.geometry", frozen)]
pub(crate) struct PyMobiusStrip {
    inner: MobiusStrip,
}

#[cfg(not(tarpaulin_include))]
#[pymethods]
impl PyMobiusStrip {
    #[new]
    #[pyo3(signature = (R, w, n))]
    #[allow(non_snake_case)]
    fn new(py: Python<'_>, R: f64, w: f64, n: i64) -> PyResult<Self> {
        let params = strip_params(R, w, n)?;
        let inner = py.allow_threads(|| compute(params));
        Ok(Self { inner })
    }

    /// float: The center radius.
    #[getter(R)]
    fn radius(&self) -> f64 {
        self.inner.params().radius()
    }

    /// float: The strip width.
    #[getter(w)]
    fn width(&self) -> f64 {
        self.inner.params().width()
    }

    /// int: The resolution.
    #[getter(n)]
    fn resolution(&self) -> usize {
        self.inner.params().resolution()
    }

    /// float: The estimated surface area.
    #[getter]
    fn surface_area(&self) -> f64 {
        self.inner.surface_area()
    }

    /// float: The estimated length of the boundary curve.
    #[getter]
    fn edge_length(&self) -> f64 {
        self.inner.edge_length()
    }

    /// numpy.ndarray: The ``(n, n)`` array of ``u`` parameters.
    #[getter(U)]
    fn u<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.parameters().u().to_pyarray(py)
    }

    /// numpy.ndarray: The ``(n, n)`` array of ``v`` parameters.
    #[getter(V)]
    fn v<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.parameters().v().to_pyarray(py)
    }

    /// numpy.ndarray: The ``(n, n)`` array of ``x`` coordinates.
    #[getter(X)]
    fn x<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.surface().x().to_pyarray(py)
    }

    /// numpy.ndarray: The ``(n, n)`` array of ``y`` coordinates.
    #[getter(Y)]
    fn y<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.surface().y().to_pyarray(py)
    }

    /// numpy.ndarray: The ``(n, n)`` array of ``z`` coordinates.
    #[getter(Z)]
    fn z<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.surface().z().to_pyarray(py)
    }

    /// Render the strip and save it as a PNG image.
    ///
    /// Args:
    ///     file (str): The output path.
    ///
    /// Raises:
    ///     OSError: If the image could not be written.
    #[pyo3(signature = (file = render::DEFAULT_FILENAME))]
    fn plot_surface(&self, py: Python<'_>, file: &str) -> PyResult<()> {
        py.allow_threads(|| self.inner.plot_surface(file))?;
        Ok(())
    }

    fn __repr__(&self) -> String {
        let params = self.inner.params();
        format!(
            "MobiusStrip(R={}, w={}, n={})",
            params.radius(),
            params.width(),
            params.resolution()
        )
    }
}

/// Estimate the surface area of a Möbius strip.
///
/// Args:
///     R (float): The center radius.
///     w (float): The strip width.
///     n (int): The number of samples along each parametric axis.
///
/// Returns:
///     float: The surface area.
#[pyfunction]
#[pyo3(signature = (R, w, n))]
#[allow(non_snake_case)]
pub(crate) fn surface_area(py: Python<'_>, R: f64, w: f64, n: i64) -> PyResult<f64> {
    let params = strip_params(R, w, n)?;
    let grid = ParameterGrid::new(&params);

    Ok(py.allow_threads(|| estimate::surface_area(&grid, params.radius())))
}

/// Estimate the boundary length of a Möbius strip.
///
/// Args:
///     R (float): The center radius.
///     w (float): The strip width.
///     n (int): The number of samples along each parametric axis;
///         the boundary is sampled ``2 * n`` times.
///
/// Returns:
///     float: The edge length.
#[pyfunction]
#[pyo3(signature = (R, w, n))]
#[allow(non_snake_case)]
pub(crate) fn edge_length(py: Python<'_>, R: f64, w: f64, n: i64) -> PyResult<f64> {
    let params = strip_params(R, w, n)?;

    Ok(py.allow_threads(|| estimate::edge_length(&params)))
}
