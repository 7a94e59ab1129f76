use crate::error::{Error, Result};

/// Parameters of a Möbius strip, together with the sampling resolution.
///
/// A value of this type is always valid: the radius and width lie within
/// [`StripParams::MIN_LENGTH`, `StripParams::MAX_LENGTH`], and the
/// resolution is at least 2, so that each parametric axis has at least one
/// interval to integrate over. Within that range the surface area and edge
/// length are finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripParams {
    radius: f64,
    width: f64,
    resolution: usize,
}

impl StripParams {
    /// Smallest accepted resolution.
    pub const MIN_RESOLUTION: usize = 2;
    /// Smallest accepted radius or width.
    pub const MIN_LENGTH: f64 = 1e-150;
    /// Largest accepted radius or width.
    pub const MAX_LENGTH: f64 = 1e150;

    /// Validate and create strip parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `radius` or `width` is not
    /// finite and strictly positive, or falls outside of
    /// [`StripParams::MIN_LENGTH`, `StripParams::MAX_LENGTH`], or if
    /// `resolution` is less than [`StripParams::MIN_RESOLUTION`].
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        check_length("radius", radius)?;
        check_length("width", width)?;
        if resolution < Self::MIN_RESOLUTION {
            return Err(Error::invalid(
                "resolution",
                "must be at least 2",
                resolution,
            ));
        }
        Ok(Self {
            radius,
            width,
            resolution,
        })
    }

    /// Distance from the strip's center circle to the origin.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Width of the strip, measured across the center circle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of samples along each parametric axis.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Value of `v` on the boundary curve.
    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * self.width
    }

    /// Number of samples taken along the boundary curve.
    ///
    /// The curve spans twice the `u` range of the surface grid,
    /// so it is sampled twice as densely.
    #[inline]
    pub fn boundary_resolution(&self) -> usize {
        2 * self.resolution
    }

    /// Whether the strip passes through its own axis of revolution.
    ///
    /// Such strips are still valid input, they just self-intersect.
    #[inline]
    pub fn is_self_intersecting(&self) -> bool {
        self.half_width() >= self.radius
    }
}

/// Squares of lengths outside of this range underflow or overflow,
/// turning the estimates into zero or infinity.
fn check_length(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(
            name,
            "must be finite and strictly positive",
            value,
        ));
    }
    if !(StripParams::MIN_LENGTH..=StripParams::MAX_LENGTH).contains(&value) {
        return Err(Error::invalid(name, "must lie within [1e-150, 1e150]", value));
    }
    Ok(())
}
