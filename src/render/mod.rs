//! Static rendering of a strip to a shaded 3D picture.
//!
//! This is a small software rasterizer: the surface grid is projected
//! orthographically, each grid cell is drawn as two depth-tested triangles
//! colored by height and lit with a single directional light.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use nalgebra::Point3;
use ndarray::Array2;

use crate::{
    error::{Error, Result},
    geometry::SurfaceGrid,
};

mod camera;
pub mod colormap;
mod raster;

pub use camera::Camera;
use raster::Canvas;

/// File name used when none is given.
pub const DEFAULT_FILENAME: &str = "mobius_strip.png";

const AMBIENT: f64 = 0.35;
const DIFFUSE: f64 = 0.65;
/// Fraction of the image left blank on each side.
const MARGIN: f64 = 0.05;

/// How to render a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Image width, in pixels.
    pub width: u32,
    /// Image height, in pixels.
    pub height: u32,
    /// Camera elevation above the `xy` plane, in degrees.
    pub elevation: f64,
    /// Camera azimuth around the `z` axis, in degrees.
    pub azimuth: f64,
    /// Color of empty pixels.
    pub background: Rgb<u8>,
    /// Color of the boundary curve, if drawn.
    pub outline: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            elevation: 30.0,
            azimuth: -60.0,
            background: Rgb([255, 255, 255]),
            outline: Rgb([20, 20, 20]),
        }
    }
}

impl RenderOptions {
    fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::invalid(
                "image_width",
                "must be strictly positive",
                self.width,
            ));
        }
        if self.height == 0 {
            return Err(Error::invalid(
                "image_height",
                "must be strictly positive",
                self.height,
            ));
        }
        Ok(())
    }
}

/// Maps view coordinates to pixel coordinates, fitting the
/// projected scene in the image.
struct Viewport {
    center: (f64, f64),
    scale: f64,
    size: (f64, f64),
}

impl Viewport {
    fn fit(points: &Array2<Point3<f64>>, width: u32, height: u32) -> Self {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);

        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        let size = (f64::from(width), f64::from(height));
        let usable = 1.0 - 2.0 * MARGIN;
        let extent_x = (x_max - x_min).max(f64::EPSILON);
        let extent_y = (y_max - y_min).max(f64::EPSILON);
        let scale = (usable * size.0 / extent_x).min(usable * size.1 / extent_y);

        Self {
            center: (0.5 * (x_min + x_max), 0.5 * (y_min + y_max)),
            scale,
            size,
        }
    }

    #[inline]
    fn to_pixels(&self, p: &Point3<f64>) -> Point3<f64> {
        Point3::new(
            0.5 * self.size.0 + self.scale * (p.x - self.center.0),
            0.5 * self.size.1 - self.scale * (p.y - self.center.1),
            p.z,
        )
    }
}

/// Render `surface`, and optionally a curve drawn on top of it.
///
/// Faces are colored with [`colormap::viridis`] by their mean height and
/// lit on both sides, as a non-orientable surface has no outer side.
///
/// # Errors
///
/// If the image width or height is zero.
pub fn render(
    surface: &SurfaceGrid,
    curve: Option<&[Point3<f64>]>,
    options: &RenderOptions,
) -> Result<RgbImage> {
    options.validate()?;

    let mut canvas = Canvas::new(options.width, options.height, options.background);
    let (rows, cols) = surface.dim();
    let Some((min, max)) = surface.bounds() else {
        log::debug!("nothing to render, surface grid is empty");
        return Ok(canvas.into_image());
    };

    let camera = Camera::from_angles(options.elevation, options.azimuth);
    let light = camera.light();
    let view = Array2::from_shape_fn((rows, cols), |(i, j)| {
        camera.project(&surface.point(i, j))
    });
    let viewport = Viewport::fit(&view, options.width, options.height);
    let pixels = view.map(|p| viewport.to_pixels(p));
    let z_range = max.z - min.z;

    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let corners = [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)];
            let [a, b, c, d] = corners.map(|index| surface.point(index.0, index.1));

            let mean_z = 0.25 * (a.z + b.z + c.z + d.z);
            let t = if z_range > 0.0 {
                (mean_z - min.z) / z_range
            } else {
                0.5
            };
            let normal = (c - a).cross(&(d - b));
            let lambert = normal
                .try_normalize(f64::EPSILON)
                .map_or(0.0, |n| n.dot(&light).abs());
            let color = colormap::shade(colormap::viridis(t), AMBIENT + DIFFUSE * lambert);

            let [pa, pb, pc, pd] = corners.map(|index| &pixels[index]);
            canvas.fill_triangle([pa, pb, pc], color);
            canvas.fill_triangle([pa, pc, pd], color);
        }
    }

    if let Some(curve) = curve {
        let bias = 1e-3 * (max - min).norm();
        let projected: Vec<_> = curve
            .iter()
            .map(|p| viewport.to_pixels(&camera.project(p)))
            .collect();

        for segment in projected.windows(2) {
            canvas.draw_line(&segment[0], &segment[1], bias, options.outline);
        }
    }

    Ok(canvas.into_image())
}

/// [`render`] the surface and write it as a PNG file.
///
/// # Errors
///
/// If the options are invalid, or the file cannot be written.
pub fn save_png<P: AsRef<Path>>(
    surface: &SurfaceGrid,
    curve: Option<&[Point3<f64>]>,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    let image = render(surface, curve, options)?;

    image.save_with_format(path, ImageFormat::Png)?;
    log::info!("saved {}x{} render to {}", options.width, options.height, path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{estimate::edge::boundary_curve, geometry::StripParams, strip::compute};

    fn non_background(image: &RgbImage, background: Rgb<u8>) -> usize {
        image.pixels().filter(|&&p| p != background).count()
    }

    #[test]
    fn test_render_default() {
        let strip = compute(StripParams::new(1.0, 0.5, 60).unwrap());
        let options = RenderOptions::default();
        let image = render(strip.surface(), None, &options).unwrap();

        assert_eq!(image.dimensions(), (640, 480));
        for (x, y) in [(0, 0), (639, 0), (0, 479), (639, 479)] {
            assert_eq!(image.get_pixel(x, y), &options.background);
        }

        let covered = non_background(&image, options.background);
        assert!(covered > 640 * 480 / 10, "only {covered} pixels drawn");
        assert!(covered < 640 * 480 * 3 / 4, "{covered} pixels drawn");
    }

    #[test]
    fn test_render_outline() {
        let params = StripParams::new(1.0, 0.5, 40).unwrap();
        let strip = compute(params);
        let curve = boundary_curve(&params);
        let options = RenderOptions::default();

        let plain = render(strip.surface(), None, &options).unwrap();
        let outlined = render(strip.surface(), Some(curve.as_slice()), &options).unwrap();

        assert!(outlined.pixels().any(|&p| p == options.outline));
        assert_ne!(plain, outlined);
    }

    #[test]
    fn test_render_single_row() {
        let params = StripParams::new(1.0, 0.5, 2).unwrap();
        let strip = compute(params);
        let options = RenderOptions {
            width: 32,
            height: 24,
            ..Default::default()
        };

        // Two samples per axis still make one cell.
        let image = render(strip.surface(), None, &options).unwrap();
        assert_eq!(image.dimensions(), (32, 24));
    }

    #[test]
    fn test_invalid_options() {
        let strip = compute(StripParams::new(1.0, 0.5, 10).unwrap());
        let options = RenderOptions {
            height: 0,
            ..Default::default()
        };

        assert!(matches!(
            render(strip.surface(), None, &options),
            Err(Error::InvalidParameter {
                name: "image_height",
                ..
            })
        ));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.png");
        let strip = compute(StripParams::new(1.0, 0.5, 20).unwrap());
        let options = RenderOptions {
            width: 64,
            height: 48,
            ..Default::default()
        };

        save_png(strip.surface(), None, &path, &options).unwrap();

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image, render(strip.surface(), None, &options).unwrap());
    }

    #[test]
    fn test_save_png_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("strip.png");
        let strip = compute(StripParams::new(1.0, 0.5, 10).unwrap());

        assert!(matches!(
            save_png(strip.surface(), None, &path, &RenderOptions::default()),
            Err(Error::Image(_))
        ));
    }
}
