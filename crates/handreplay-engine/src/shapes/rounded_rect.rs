use crate::coords::{Point, Rect};
use crate::path::Path;
use crate::surface::DrawingSurface;
use crate::GeometryError;

use super::{check_size, stroke_and_fill, ShapeStyle};

/// Outline of `rect` with four quadratic corners of `radius`.
///
/// Starts at the end of the top-left corner and runs clockwise. `radius = 0`
/// collapses every corner onto its vertex, leaving a plain rectangle.
///
/// Errors when the size is not positive, the radius is negative, or the
/// radius exceeds half the smaller side.
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Result<Path, GeometryError> {
    if !rect.is_finite() || !radius.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    check_size(rect.width(), rect.height())?;
    if radius < 0.0 {
        return Err(GeometryError::NegativeRadius(radius));
    }
    let max = rect.width().min(rect.height()) / 2.0;
    if radius > max {
        return Err(GeometryError::RadiusTooLarge { radius, max });
    }

    let (x, y, w, h, r) = (rect.x(), rect.y(), rect.width(), rect.height(), radius);

    let mut path = Path::with_capacity(10);
    path.move_to(Point::new(x + r, y))
        .line_to(Point::new(x + w - r, y))
        .quad_to(Point::new(x + w, y), Point::new(x + w, y + r))
        .line_to(Point::new(x + w, y + h - r))
        .quad_to(Point::new(x + w, y + h), Point::new(x + w - r, y + h))
        .line_to(Point::new(x + r, y + h))
        .quad_to(Point::new(x, y + h), Point::new(x, y + h - r))
        .line_to(Point::new(x, y + r))
        .quad_to(Point::new(x, y), Point::new(x + r, y))
        .close();
    Ok(path)
}

/// Strokes, then optionally fills, a rounded rectangle.
pub fn draw_rounded_rect<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    rect: Rect,
    radius: f32,
    style: &ShapeStyle,
) -> Result<(), GeometryError> {
    let path = rounded_rect_path(rect, radius)?;
    stroke_and_fill(surface, &path, style);
    Ok(())
}
