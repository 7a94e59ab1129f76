//! Mesh generation and numerical estimation of Möbius strip properties.
//!
//! The entry point is [`compute`], which samples the strip described by
//! [`StripParams`] and returns a [`MobiusStrip`] holding its grids, its
//! surface area and the length of its boundary.

pub mod error;
pub mod estimate;
pub mod geometry;
pub mod numerics;
#[cfg(feature = "python")]
mod python;
pub mod render;
pub mod strip;

pub use error::{Error, Result};
pub use geometry::StripParams;
pub use strip::{compute, MobiusStrip};

#[cfg(feature = "python")]
use pyo3::{exceptions::PyValueError, prelude::*, wrap_pymodule};

/// Core of the mobius module, implemented in Rust.
#[cfg(feature = "python")]
#[cfg(not(tarpaulin_include))]
#[pymodule(gil_used = false)]
fn _mobius_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    let mut version = env!("CARGO_PKG_VERSION").to_string();
    version = version.replace("-alpha", "a").replace("-beta", "b");
    m.add("__version__", version)?;

    let parse = |part: &str| {
        part.parse::<u32>()
            .map_err(|err| PyValueError::new_err(format!("invalid version number: {err}")))
    };
    let version_info = (
        parse(env!("CARGO_PKG_VERSION_MAJOR"))?,
        parse(env!("CARGO_PKG_VERSION_MINOR"))?,
        parse(env!("CARGO_PKG_VERSION_PATCH"))?,
    );
    m.add("__version_info__", version_info)?;
    m.add_wrapped(wrap_pymodule!(python::geometry))?;
    Ok(())
}
