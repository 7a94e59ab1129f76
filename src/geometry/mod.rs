//! Möbius strip parameters, embedding and mesh generation.

pub mod mesh;
pub mod mobius;
pub mod params;

pub use mesh::{Mesh, ParameterGrid, SurfaceGrid};
pub use params::StripParams;
