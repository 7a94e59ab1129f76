//! Numerical integration helpers.

pub mod quadrature;

pub use quadrature::{trapezoid, trapezoid_axis};
