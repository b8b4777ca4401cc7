//! Paint model shared by shapes, surfaces and the table layer.
//!
//! Colors are straight-alpha sRGB, the same model canvas style strings use.
//! Raster backends premultiply at the point of drawing.

mod color;

pub use color::{Color, ColorParseError};
