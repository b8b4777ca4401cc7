//! Geometry/shape renderer and style helpers.
//!
//! Each shape has a pure `*_path` builder that validates its parameters and
//! a `draw_*` function that replays the path onto a surface. Style overrides
//! apply inside a saved-state scope, so no shape leaves its colors or widths
//! behind for the next draw. Fields a style leaves unset use whatever the
//! surface currently holds.

mod ellipse;
mod rounded_rect;
mod style;
mod text;

pub use ellipse::{
    draw_ellipse_bezier, draw_ellipse_parametric, ellipse_bezier_path, ellipse_parametric_path,
    ellipse_points, ELLIPSE_BEZIER_WIDTH_SCALE, ELLIPSE_STEPS,
};
pub use rounded_rect::{draw_rounded_rect, rounded_rect_path};
pub use style::{stroke_and_fill, ShapeStyle, TextStyle};
pub use text::{draw_text, set_shadow};

use crate::GeometryError;

/// Shared size check: finite and strictly positive.
pub(crate) fn check_size(width: f32, height: f32) -> Result<(), GeometryError> {
    if !width.is_finite() || !height.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if width <= 0.0 || height <= 0.0 {
        return Err(GeometryError::NonPositiveSize { width, height });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "expected {b}, got {a}");
}
