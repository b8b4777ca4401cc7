//! Font loading and text layout for raster surfaces.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, TextLayout};
