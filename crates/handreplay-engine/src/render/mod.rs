//! Raster rendering.
//!
//! [`PixmapSurface`] paints surface calls into an RGBA pixmap with tiny-skia
//! (re-exported by `resvg`) and rasterizes text through [`FontSystem`].
//!
//! Convention:
//! - path points are mapped through the surface transform as they are added,
//!   like a canvas context
//! - shadows are offset in device space and drawn without blur
//!
//! [`FontSystem`]: crate::text::FontSystem

mod error;
mod pixmap;

pub use error::RasterError;
pub use pixmap::PixmapSurface;
