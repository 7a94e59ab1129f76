use std::f64::consts::TAU;

use nalgebra::Point3;
use ndarray::Array1;

use crate::{geometry::mobius, geometry::StripParams, numerics};

/// Curve parameter range covered by the boundary.
///
/// The half-twist only closes the `v = w/2` edge after two turns.
pub const BOUNDARY_SPAN: f64 = 2.0 * TAU;

/// Sample the boundary curve parameter, uniformly over `[0, 4π]`.
///
/// The returned array has exactly
/// [`boundary_resolution`](StripParams::boundary_resolution) samples.
pub fn boundary_samples(params: &StripParams) -> Array1<f64> {
    Array1::linspace(0.0, BOUNDARY_SPAN, params.boundary_resolution())
}

/// Speed `|∂S/∂u|` of the boundary curve at each sample of `s`.
pub fn boundary_speed(params: &StripParams, s: &Array1<f64>) -> Array1<f64> {
    let radius = params.radius();
    let v = params.half_width();

    s.mapv(|u| mobius::partial_u(radius, u, v).norm())
}

/// Points of the boundary curve, at [`boundary_samples`].
pub fn boundary_curve(params: &StripParams) -> Vec<Point3<f64>> {
    let radius = params.radius();
    let v = params.half_width();

    boundary_samples(params)
        .iter()
        .map(|&u| mobius::point(radius, u, v))
        .collect()
}

/// Estimate the length of the strip's (single) boundary curve.
///
/// The curve speed is integrated over `[0, 4π]` with the trapezoidal
/// rule.
///
/// As the width vanishes, the two turns collapse onto the center circle,
/// and the length tends to `4πR` rather than `2πR`.
pub fn edge_length(params: &StripParams) -> f64 {
    let s = boundary_samples(params);
    let speed = boundary_speed(params, &s);

    numerics::trapezoid(&speed.view(), &s.view())
}
