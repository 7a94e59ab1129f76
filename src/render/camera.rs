use nalgebra::{Point3, Vector3};

/// Orthographic camera orbiting the origin.
///
/// Projected points are expressed in view coordinates: `x` to the right,
/// `y` upwards and `z` towards the viewer (larger is nearer).
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    right: Vector3<f64>,
    up: Vector3<f64>,
    toward_viewer: Vector3<f64>,
}

impl Camera {
    /// Camera looking at the origin from the given angles, in degrees.
    ///
    /// The elevation is measured from the `xy` plane, the azimuth around
    /// the `z` axis, from the `x` axis.
    pub fn from_angles(elevation: f64, azimuth: f64) -> Self {
        let (sin_e, cos_e) = elevation.to_radians().sin_cos();
        let (sin_a, cos_a) = azimuth.to_radians().sin_cos();

        let toward_viewer = Vector3::new(cos_e * cos_a, cos_e * sin_a, sin_e);
        let right = Vector3::new(-sin_a, cos_a, 0.0);
        let up = toward_viewer.cross(&right);

        Self {
            right,
            up,
            toward_viewer,
        }
    }

    /// Project a world point into view coordinates.
    #[inline]
    pub fn project(&self, point: &Point3<f64>) -> Point3<f64> {
        let p = point.coords;

        Point3::new(p.dot(&self.right), p.dot(&self.up), p.dot(&self.toward_viewer))
    }

    /// Direction of the key light: from above, slightly left of the viewer.
    pub fn light(&self) -> Vector3<f64> {
        (self.toward_viewer + 0.5 * self.up - 0.3 * self.right).normalize()
    }
}
