//! Hand-replay engine crate.
//!
//! This crate owns the drawing-surface contract and the geometry used by the
//! table layer: shape paths, scoped style state, a recording surface for
//! inspection and a raster surface for output.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod text;

mod error;

pub use error::GeometryError;
