//! Coordinate and geometry types shared by shapes, surfaces and the table layer.
//!
//! Canonical canvas space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are radians; with +Y down, increasing angles run clockwise on screen.

mod canvas;
mod point;
mod rect;
mod transform;

pub use canvas::CanvasSize;
pub use point::Point;
pub use rect::Rect;
pub use transform::Transform;
