use image::{Rgb, RgbImage};
use nalgebra::Point3;

/// An RGB image paired with a depth buffer.
///
/// Points are given in pixel coordinates (`x` to the right, `y` downwards),
/// with `z` holding the depth, larger meaning nearer to the viewer.
pub(crate) struct Canvas {
    image: RgbImage,
    depth: Vec<f64>,
}

/// Twice the signed area of triangle `(a, b, p)`, in the `xy` plane.
#[inline]
fn edge_function(a: &Point3<f64>, b: &Point3<f64>, p: (f64, f64)) -> f64 {
    (b.x - a.x) * (p.1 - a.y) - (b.y - a.y) * (p.0 - a.x)
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
            depth: vec![f64::NEG_INFINITY; width as usize * height as usize],
        }
    }

    /// Pixel range covered by `[lo, hi]`, clipped to `[0, size)`.
    fn pixel_range(lo: f64, hi: f64, size: u32) -> Option<(u32, u32)> {
        let lo = lo.floor().max(0.0);
        let hi = hi.ceil().min(f64::from(size) - 1.0);

        if lo > hi || !lo.is_finite() || !hi.is_finite() {
            return None;
        }
        Some((lo as u32, hi as u32))
    }

    /// Write `color` at `(x, y)` if `depth` is not behind what is stored.
    #[inline]
    fn plot(&mut self, x: u32, y: u32, depth: f64, color: Rgb<u8>) {
        let index = y as usize * self.image.width() as usize + x as usize;

        if depth >= self.depth[index] {
            self.depth[index] = depth;
            self.image.put_pixel(x, y, color);
        }
    }

    /// Fill a triangle, interpolating depth across it.
    ///
    /// Pixels are covered when their center lies inside the triangle.
    /// Degenerate (zero-area) triangles draw nothing.
    pub(crate) fn fill_triangle(&mut self, vertices: [&Point3<f64>; 3], color: Rgb<u8>) {
        let [a, b, c] = vertices;
        let area = edge_function(a, b, (c.x, c.y));

        if area.abs() < f64::EPSILON {
            return;
        }

        let Some((x_min, x_max)) = Self::pixel_range(
            a.x.min(b.x).min(c.x),
            a.x.max(b.x).max(c.x),
            self.image.width(),
        ) else {
            return;
        };
        let Some((y_min, y_max)) = Self::pixel_range(
            a.y.min(b.y).min(c.y),
            a.y.max(b.y).max(c.y),
            self.image.height(),
        ) else {
            return;
        };

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let p = (f64::from(x) + 0.5, f64::from(y) + 0.5);
                let w_a = edge_function(b, c, p) / area;
                let w_b = edge_function(c, a, p) / area;
                let w_c = edge_function(a, b, p) / area;

                if w_a >= 0.0 && w_b >= 0.0 && w_c >= 0.0 {
                    let depth = w_a * a.z + w_b * b.z + w_c * c.z;
                    self.plot(x, y, depth, color);
                }
            }
        }
    }

    /// Draw a one-pixel wide segment.
    ///
    /// `bias` is added to the depth, so that lines lying on a surface
    /// are drawn over it.
    pub(crate) fn draw_line(
        &mut self,
        from: &Point3<f64>,
        to: &Point3<f64>,
        bias: f64,
        color: Rgb<u8>,
    ) {
        let (width, height) = self.image.dimensions();
        let steps = (to.x - from.x).abs().max((to.y - from.y).abs()).ceil().max(1.0);

        if !steps.is_finite() {
            return;
        }

        for k in 0..=(steps as usize) {
            let p = from + (to - from) * (k as f64 / steps);
            let (x, y) = (p.x.floor(), p.y.floor());

            if x >= 0.0 && y >= 0.0 && x < f64::from(width) && y < f64::from(height) {
                self.plot(x as u32, y as u32, p.z + bias, color);
            }
        }
    }

    pub(crate) fn into_image(self) -> RgbImage {
        self.image
    }
}
