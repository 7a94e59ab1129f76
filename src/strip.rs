use std::path::Path;

use crate::{
    error::Result,
    estimate,
    geometry::{Mesh, ParameterGrid, StripParams, SurfaceGrid},
    render::{self, RenderOptions},
};

/// A fully computed Möbius strip: its mesh, surface area and edge length.
///
/// Values of this type are immutable; to change the resolution or shape,
/// call [`compute`] again with new parameters.
#[derive(Clone, Debug)]
pub struct MobiusStrip {
    params: StripParams,
    mesh: Mesh,
    surface_area: f64,
    edge_length: f64,
}

/// Generate the mesh of a strip and estimate its area and edge length.
pub fn compute(params: StripParams) -> MobiusStrip {
    if params.is_self_intersecting() {
        log::warn!(
            "strip half-width {} reaches radius {}, the surface self-intersects",
            params.half_width(),
            params.radius()
        );
    }

    let mesh = Mesh::generate(&params);
    let surface_area = estimate::surface_area(mesh.parameters(), params.radius());
    let edge_length = estimate::edge_length(&params);

    log::debug!(
        "computed strip {params:?}: surface area = {surface_area}, edge length = {edge_length}"
    );

    MobiusStrip {
        params,
        mesh,
        surface_area,
        edge_length,
    }
}

impl MobiusStrip {
    /// Validate parameters and [`compute`] the strip.
    ///
    /// # Errors
    ///
    /// See [`StripParams::new`].
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        StripParams::new(radius, width, resolution).map(compute)
    }

    /// Parameters the strip was computed from.
    #[inline]
    pub fn params(&self) -> &StripParams {
        &self.params
    }

    /// Parameter and surface grids.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Shortcut for `self.mesh().parameters()`.
    #[inline]
    pub fn parameters(&self) -> &ParameterGrid {
        self.mesh.parameters()
    }

    /// Shortcut for `self.mesh().surface()`.
    #[inline]
    pub fn surface(&self) -> &SurfaceGrid {
        self.mesh.surface()
    }

    /// Estimated surface area.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// Estimated length of the boundary curve.
    #[inline]
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// Render the strip to a PNG file, with default [`RenderOptions`].
    ///
    /// # Errors
    ///
    /// If the image cannot be written.
    pub fn plot_surface<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let options = RenderOptions::default();
        let boundary = estimate::edge::boundary_curve(&self.params);

        render::save_png(self.surface(), Some(boundary.as_slice()), path, &options)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_reference_scenario() {
        let strip = MobiusStrip::new(1.0, 0.5, 100).unwrap();

        assert_relative_eq!(strip.surface_area(), 3.1499, epsilon = 1e-4);
        assert_relative_eq!(strip.edge_length(), 12.6673, epsilon = 1e-4);
        assert_eq!(format!("{:.4}", strip.surface_area()), "3.1499");
        assert_eq!(format!("{:.4}", strip.edge_length()), "12.6673");
    }

    #[test]
    fn test_results_match_estimators() {
        let params = StripParams::new(2.0, 0.75, 40).unwrap();
        let strip = compute(params);

        assert_eq!(strip.params(), &params);
        assert_eq!(strip.surface().dim(), (40, 40));
        assert_eq!(strip.parameters().dim(), (40, 40));
        assert_eq!(
            strip.surface_area(),
            estimate::surface_area(&ParameterGrid::new(&params), 2.0)
        );
        assert_eq!(strip.edge_length(), estimate::edge_length(&params));
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let a = MobiusStrip::new(1.0, 0.5, 64).unwrap();
        let b = MobiusStrip::new(1.0, 0.5, 64).unwrap();

        assert_eq!(a.surface_area(), b.surface_area());
        assert_eq!(a.edge_length(), b.edge_length());
        assert_eq!(a.surface().x(), b.surface().x());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            MobiusStrip::new(1.0, 0.5, 1),
            Err(Error::InvalidParameter {
                name: "resolution",
                ..
            })
        ));
        assert!(matches!(
            MobiusStrip::new(1.0, -0.5, 10),
            Err(Error::InvalidParameter { name: "width", .. })
        ));
    }

    #[rstest]
    #[case(StripParams::MIN_LENGTH, StripParams::MIN_LENGTH, 2)]
    #[case(StripParams::MAX_LENGTH, StripParams::MAX_LENGTH, 3)]
    #[case(StripParams::MIN_LENGTH, StripParams::MAX_LENGTH, 2)]
    #[case(StripParams::MAX_LENGTH, StripParams::MIN_LENGTH, 2)]
    fn test_extreme_lengths_stay_finite(
        #[case] radius: f64,
        #[case] width: f64,
        #[case] resolution: usize,
    ) {
        let strip = MobiusStrip::new(radius, width, resolution).unwrap();

        for value in [strip.surface_area(), strip.edge_length()] {
            assert!(value.is_finite() && value > 0.0, "got {value}");
        }
    }

    #[test]
    fn test_self_intersection_warning() {
        testing_logger::setup();
        let strip = MobiusStrip::new(0.5, 2.0, 10).unwrap();
        assert!(strip.surface_area() > 0.0);

        testing_logger::validate(|captured_logs| {
            let warnings: Vec<_> = captured_logs
                .iter()
                .filter(|log| log.level == log::Level::Warn)
                .collect();
            assert_eq!(warnings.len(), 1);
            assert_eq!(
                warnings[0].body,
                "strip half-width 1 reaches radius 0.5, the surface self-intersects"
            );
        });
    }

    #[test]
    fn test_plot_surface() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(render::DEFAULT_FILENAME);
        let strip = MobiusStrip::new(1.0, 0.5, 30).unwrap();

        strip.plot_surface(&path).unwrap();

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (640, 480));
    }
}
