use ndarray::{Array2, Axis, Zip};

use crate::{geometry::mobius, geometry::ParameterGrid, numerics};

/// Evaluate the area element `|∂S/∂u × ∂S/∂v|` at every grid point.
///
/// The result has the same shape as `grid`.
pub fn area_element(grid: &ParameterGrid, radius: f64) -> Array2<f64> {
    Zip::from(grid.u())
        .and(grid.v())
        .par_map_collect(|&u, &v| mobius::area_element(radius, u, v))
}

/// Estimate the surface area of the strip sampled by `grid`.
///
/// The area element is first integrated along `v` (one integral per `u`
/// sample), then the partial integrals are integrated along `u`, both
/// with the trapezoidal rule.
pub fn surface_area(grid: &ParameterGrid, radius: f64) -> f64 {
    let elements = area_element(grid, radius);
    let along_v = numerics::trapezoid_axis(&elements.view(), &grid.v_samples(), Axis(1));

    numerics::trapezoid(&along_v.view(), &grid.u_samples())
}
