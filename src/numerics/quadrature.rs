use ndarray::{parallel::prelude::*, Array1, ArrayView1, ArrayView2, Axis};

/// Integrate `y(x)` with the composite trapezoidal rule.
///
/// Samples need not be evenly spaced. The sum is always accumulated
/// in index order, so the result only depends on the inputs.
///
/// Less than two samples integrate to zero.
///
/// # Panicking
///
/// If `y` and `x` do not have the same length.
pub fn trapezoid(y: &ArrayView1<f64>, x: &ArrayView1<f64>) -> f64 {
    assert_eq!(y.len(), x.len(), "'y' and 'x' must have the same length");

    if y.len() < 2 {
        return 0.0;
    }
    y.windows(2)
        .into_iter()
        .zip(x.windows(2))
        .fold(0.0, |acc, (y, x)| acc + 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
}

/// Integrate a 2D array along `axis`, with the trapezoidal rule.
///
/// Returns one integral per lane, i.e., an array whose length is the size
/// of the other axis. Lanes are integrated in parallel.
///
/// # Panicking
///
/// If `x` does not have as many samples as `y` along `axis`,
/// or if `axis` is not `0` or `1`.
pub fn trapezoid_axis(y: &ArrayView2<f64>, x: &ArrayView1<f64>, axis: Axis) -> Array1<f64> {
    assert!(axis.index() < 2, "'axis' must be 0 or 1");
    assert_eq!(
        y.len_of(axis),
        x.len(),
        "'x' must have as many samples as the integrated axis"
    );

    let other = Axis(1 - axis.index());
    let integrals: Vec<f64> = y
        .axis_iter(other)
        .into_par_iter()
        .map(|lane| trapezoid(&lane, x))
        .collect();

    Array1::from_vec(integrals)
}
