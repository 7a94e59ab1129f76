//! Closed-form Möbius embedding and its first derivatives.
//!
//! The strip of center radius `R` is parametrized by
//! `u` in `[0, 2π]` (angle around the center circle) and
//! `v` in `[-w/2, w/2]` (signed distance across the strip):
//!
//! ```text
//! x(u, v) = (R + v cos(u/2)) cos(u)
//! y(u, v) = (R + v cos(u/2)) sin(u)
//! z(u, v) = v sin(u/2)
//! ```
//!
//! The half-angle `u/2` is the half-twist that makes the surface
//! non-orientable.

use nalgebra::{Point3, Vector3};

/// Surface point at parameters `(u, v)`.
#[inline]
pub fn point(radius: f64, u: f64, v: f64) -> Point3<f64> {
    let (sin_half, cos_half) = (0.5 * u).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let r = radius + v * cos_half;

    Point3::new(r * cos_u, r * sin_u, v * sin_half)
}

/// Tangent vector along `u`, i.e., `∂S/∂u` at `(u, v)`.
#[inline]
pub fn partial_u(radius: f64, u: f64, v: f64) -> Vector3<f64> {
    let (sin_half, cos_half) = (0.5 * u).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let r = radius + v * cos_half;
    let twist = -0.5 * v * sin_half;

    Vector3::new(
        twist * cos_u - r * sin_u,
        twist * sin_u + r * cos_u,
        0.5 * v * cos_half,
    )
}

/// Tangent vector along `v`, i.e., `∂S/∂v` at `u`.
///
/// The embedding is linear in `v`, so this does not depend on it.
#[inline]
pub fn partial_v(u: f64) -> Vector3<f64> {
    let (sin_half, cos_half) = (0.5 * u).sin_cos();
    let (sin_u, cos_u) = u.sin_cos();

    Vector3::new(cos_half * cos_u, cos_half * sin_u, sin_half)
}

/// Local area element `|∂S/∂u × ∂S/∂v|` at `(u, v)`.
#[inline]
pub fn area_element(radius: f64, u: f64, v: f64) -> f64 {
    partial_u(radius, u, v).cross(&partial_v(u)).norm()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0.0, Point3::new(1.0, 0.0, 0.0))]
    #[case(0.0, 0.25, Point3::new(1.25, 0.0, 0.0))]
    #[case(PI, 0.25, Point3::new(-1.0, 0.0, 0.25))]
    #[case(TAU, 0.25, Point3::new(0.75, 0.0, 0.0))]
    fn test_point(#[case] u: f64, #[case] v: f64, #[case] expected: Point3<f64>) {
        let got = point(1.0, u, v);
        assert_relative_eq!(got, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_half_twist_seam() {
        // After one turn, the strip comes back flipped: (0, v) meets (2π, -v).
        for v in [-0.25, -0.1, 0.0, 0.1, 0.25] {
            assert_relative_eq!(point(1.0, 0.0, v), point(1.0, TAU, -v), epsilon = 1e-12);
        }
    }

    #[rstest]
    #[case(0.3, 0.1)]
    #[case(FRAC_PI_2, -0.2)]
    #[case(4.0, 0.25)]
    fn test_partials_match_finite_differences(#[case] u: f64, #[case] v: f64) {
        let h = 1e-6;
        let radius = 1.5;

        let du = (point(radius, u + h, v) - point(radius, u - h, v)) / (2.0 * h);
        let dv = (point(radius, u, v + h) - point(radius, u, v - h)) / (2.0 * h);

        assert_relative_eq!(partial_u(radius, u, v), du, epsilon = 1e-6);
        assert_relative_eq!(partial_v(u), dv, epsilon = 1e-6);
    }

    #[test]
    fn test_partial_v_is_unit() {
        for k in 0..16 {
            let u = k as f64 * TAU / 16.0;
            assert_relative_eq!(partial_v(u).norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_area_element_on_center_circle() {
        // At v = 0 the tangents are orthogonal with norms R and 1.
        for k in 0..16 {
            let u = k as f64 * TAU / 16.0;
            assert_relative_eq!(area_element(2.0, u, 0.0), 2.0, epsilon = 1e-12);
        }
    }
}
