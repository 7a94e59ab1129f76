use image::Rgb;

/// Samples of the viridis colormap, evenly spaced over `[0, 1]`.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

/// Map `t` in `[0, 1]` to a viridis color.
///
/// Values outside of the unit interval are clamped, and NaN maps to the
/// lowest color.
pub fn viridis(t: f64) -> Rgb<u8> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let last = VIRIDIS.len() - 1;
    let scaled = t * last as f64;
    let index = (scaled.floor() as usize).min(last - 1);
    let frac = scaled - index as f64;
    let (lo, hi) = (VIRIDIS[index], VIRIDIS[index + 1]);

    Rgb(std::array::from_fn(|k| {
        (f64::from(lo[k]) + frac * (f64::from(hi[k]) - f64::from(lo[k]))).round() as u8
    }))
}

/// Scale a color's intensity by `factor`, clamped to `[0, 1]`.
pub fn shade(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
    let factor = factor.clamp(0.0, 1.0);

    Rgb(color.0.map(|c| (f64::from(c) * factor).round() as u8))
}
