use std::f64::consts::TAU;

use nalgebra::Point3;
use ndarray::{Array1, Array2, ArrayView1, Zip};

use super::{mobius, params::StripParams};

/// Regular `(u, v)` sampling of the strip's parameter domain.
///
/// Both arrays have shape `(n, n)`, with `u` varying along the first axis
/// and `v` along the second one (``indexing='ij'`` in NumPy terms).
///
/// The `u` axis includes both `0` and `2π`, so the first and last rows
/// of the mesh coincide geometrically. That duplicated seam slightly biases
/// the integrals and is kept as is, so results stay comparable with other
/// implementations that sample the same way.
#[derive(Clone, Debug)]
pub struct ParameterGrid {
    /// Angle around the center circle.
    pub(crate) u: Array2<f64>,
    /// Signed distance across the strip.
    pub(crate) v: Array2<f64>,
}

impl ParameterGrid {
    /// Sample the parameter domain of the given strip.
    pub fn new(params: &StripParams) -> Self {
        let n = params.resolution();
        let half_width = params.half_width();
        let u_samples = Array1::linspace(0.0, TAU, n);
        let v_samples = Array1::linspace(-half_width, half_width, n);

        Self::from_samples(&u_samples.view(), &v_samples.view())
    }

    /// Build the outer-product grid of two 1D samplings.
    ///
    /// This is mostly useful to evaluate the estimators on
    /// custom (e.g., synthetic) domains.
    pub fn from_samples(u_samples: &ArrayView1<f64>, v_samples: &ArrayView1<f64>) -> Self {
        let shape = (u_samples.len(), v_samples.len());

        Self {
            u: Array2::from_shape_fn(shape, |(i, _)| u_samples[i]),
            v: Array2::from_shape_fn(shape, |(_, j)| v_samples[j]),
        }
    }

    /// The `U` array.
    #[inline]
    pub fn u(&self) -> &Array2<f64> {
        &self.u
    }

    /// The `V` array.
    #[inline]
    pub fn v(&self) -> &Array2<f64> {
        &self.v
    }

    /// The `u` samples, one per row.
    #[inline]
    pub fn u_samples(&self) -> ArrayView1<'_, f64> {
        self.u.column(0)
    }

    /// The `v` samples, one per column.
    #[inline]
    pub fn v_samples(&self) -> ArrayView1<'_, f64> {
        self.v.row(0)
    }

    /// Shape of the grid, `(num_u, num_v)`.
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.u.dim()
    }
}

/// Surface points, as three coordinate arrays shaped like the
/// [`ParameterGrid`] they were mapped from.
#[derive(Clone, Debug)]
pub struct SurfaceGrid {
    pub(crate) x: Array2<f64>,
    pub(crate) y: Array2<f64>,
    pub(crate) z: Array2<f64>,
}

impl SurfaceGrid {
    /// Map every point of `grid` through the Möbius embedding.
    pub fn from_parameters(grid: &ParameterGrid, radius: f64) -> Self {
        let points: Array2<Point3<f64>> = Zip::from(&grid.u)
            .and(&grid.v)
            .par_map_collect(|&u, &v| mobius::point(radius, u, v));

        Self {
            x: points.map(|p| p.x),
            y: points.map(|p| p.y),
            z: points.map(|p| p.z),
        }
    }

    /// The `X` array.
    #[inline]
    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    /// The `Y` array.
    #[inline]
    pub fn y(&self) -> &Array2<f64> {
        &self.y
    }

    /// The `Z` array.
    #[inline]
    pub fn z(&self) -> &Array2<f64> {
        &self.z
    }

    /// Shape of the grid, `(num_u, num_v)`.
    #[inline]
    pub fn dim(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Point at row `i` and column `j`.
    ///
    /// # Panicking
    ///
    /// If the index is out of bounds.
    #[inline]
    pub fn point(&self, i: usize, j: usize) -> Point3<f64> {
        Point3::new(self.x[(i, j)], self.y[(i, j)], self.z[(i, j)])
    }

    /// Axis-aligned bounding box, as `(min, max)` corners.
    ///
    /// An empty grid returns `None`.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let (rows, cols) = self.dim();
        if rows == 0 || cols == 0 {
            return None;
        }
        let first = self.point(0, 0);

        Some(Zip::from(&self.x).and(&self.y).and(&self.z).fold(
            (first, first),
            |(min, max), &x, &y, &z| {
                let p = Point3::new(x, y, z);
                (min.inf(&p), max.sup(&p))
            },
        ))
    }
}

/// Parameter and surface grids of a strip, generated together.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub(crate) parameters: ParameterGrid,
    pub(crate) surface: SurfaceGrid,
}

impl Mesh {
    /// Sample the strip and map the samples to 3D.
    pub fn generate(params: &StripParams) -> Self {
        let parameters = ParameterGrid::new(params);
        let surface = SurfaceGrid::from_parameters(&parameters, params.radius());

        log::trace!(
            "generated {}x{} Möbius mesh",
            params.resolution(),
            params.resolution()
        );

        Self {
            parameters,
            surface,
        }
    }

    /// The `(u, v)` grid.
    #[inline]
    pub fn parameters(&self) -> &ParameterGrid {
        &self.parameters
    }

    /// The `(x, y, z)` grid.
    #[inline]
    pub fn surface(&self) -> &SurfaceGrid {
        &self.surface
    }
}
