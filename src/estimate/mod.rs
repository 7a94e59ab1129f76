//! Numerical estimators of the strip's scalar quantities.

pub mod area;
pub mod edge;

pub use area::surface_area;
pub use edge::edge_length;
