use core::f32::consts::TAU;

use crate::coords::Point;
use crate::path::Path;
use crate::surface::DrawingSurface;
use crate::GeometryError;

use super::{check_size, stroke_and_fill, ShapeStyle};

/// Width calibration for the two-cubic ellipse.
///
/// Two cubics spanning the full height undershoot the true half-width; widening
/// the control rectangle by this empirical factor brings the widest point back
/// close to `width / 2` for moderate eccentricities.
pub const ELLIPSE_BEZIER_WIDTH_SCALE: f32 = 1.33;

/// Angular resolution of the sampled ellipse. Fixed, not adaptive.
pub const ELLIPSE_STEPS: usize = 360;

/// Approximate ellipse as two symmetric cubic halves.
///
/// Starts at the top point, sweeps the left half down to the bottom point and
/// the right half back up. Cheaper than sampling; visibly off for very
/// eccentric ellipses.
pub fn ellipse_bezier_path(center: Point, width: f32, height: f32) -> Result<Path, GeometryError> {
    check_size(width, height)?;
    if !center.is_finite() {
        return Err(GeometryError::NonFinite);
    }

    let half_w = width * ELLIPSE_BEZIER_WIDTH_SCALE / 2.0;
    let half_h = height / 2.0;
    let (cx, cy) = (center.x, center.y);

    let top = Point::new(cx, cy - half_h);
    let bottom = Point::new(cx, cy + half_h);

    let mut path = Path::with_capacity(4);
    path.move_to(top)
        .cubic_to(Point::new(cx - half_w, cy - half_h), Point::new(cx - half_w, cy + half_h), bottom)
        .cubic_to(Point::new(cx + half_w, cy + half_h), Point::new(cx + half_w, cy - half_h), top)
        .close();
    Ok(path)
}

/// `steps` points on the ellipse at angles `2π·i/steps` for `i` in `[0, steps)`.
///
/// The first point is the rightmost one; with +Y down, points run clockwise.
pub fn ellipse_points(center: Point, width: f32, height: f32, steps: usize) -> Vec<Point> {
    let (a, b) = (width / 2.0, height / 2.0);
    (0..steps)
        .map(|i| center.on_ellipse(a, b, TAU * i as f32 / steps as f32))
        .collect()
}

/// Closed polyline through [`ELLIPSE_STEPS`] samples of the true ellipse.
pub fn ellipse_parametric_path(center: Point, width: f32, height: f32) -> Result<Path, GeometryError> {
    check_size(width, height)?;
    if !center.is_finite() {
        return Err(GeometryError::NonFinite);
    }

    let points = ellipse_points(center, width, height, ELLIPSE_STEPS);
    let mut path = Path::with_capacity(points.len() + 1);
    let mut iter = points.into_iter();
    if let Some(first) = iter.next() {
        path.move_to(first);
    }
    for p in iter {
        path.line_to(p);
    }
    path.close();
    Ok(path)
}

/// Strokes, then optionally fills, the bezier-approximated ellipse.
pub fn draw_ellipse_bezier<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    width: f32,
    height: f32,
    style: &ShapeStyle,
) -> Result<(), GeometryError> {
    let path = ellipse_bezier_path(center, width, height)?;
    stroke_and_fill(surface, &path, style);
    Ok(())
}

/// Strokes, then optionally fills, the sampled ellipse.
///
/// Prefer this over [`draw_ellipse_bezier`] where the outline must be accurate.
pub fn draw_ellipse_parametric<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    width: f32,
    height: f32,
    style: &ShapeStyle,
) -> Result<(), GeometryError> {
    let path = ellipse_parametric_path(center, width, height)?;
    log::trace!("parametric ellipse at ({}, {}) {}x{}: {} ops", center.x, center.y, width, height, path.len());
    stroke_and_fill(surface, &path, style);
    Ok(())
}
