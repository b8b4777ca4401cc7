//! Path descriptors.
//!
//! Shapes compute their outline as a [`Path`] first and replay it onto a
//! surface second, so geometry can be validated and inspected without a
//! surface.

use crate::coords::{Point, Transform};
use crate::surface::DrawingSurface;

/// One path construction step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathOp {
    /// End point of the segment, if it has one.
    #[inline]
    pub fn end(self) -> Option<Point> {
        match self {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => Some(p),
            PathOp::QuadTo { to, .. } | PathOp::CubicTo { to, .. } => Some(to),
            PathOp::Close => None,
        }
    }

    #[inline]
    pub fn is_curve(self) -> bool {
        matches!(self, PathOp::QuadTo { .. } | PathOp::CubicTo { .. })
    }

    /// The same step with every point mapped through `t`.
    pub fn transformed(self, t: Transform) -> PathOp {
        match self {
            PathOp::MoveTo(p) => PathOp::MoveTo(t.apply(p)),
            PathOp::LineTo(p) => PathOp::LineTo(t.apply(p)),
            PathOp::QuadTo { ctrl, to } => PathOp::QuadTo { ctrl: t.apply(ctrl), to: t.apply(to) },
            PathOp::CubicTo { ctrl1, ctrl2, to } => PathOp::CubicTo {
                ctrl1: t.apply(ctrl1),
                ctrl2: t.apply(ctrl2),
                to: t.apply(to),
            },
            PathOp::Close => PathOp::Close,
        }
    }

    /// Issues this step against `surface`.
    pub fn emit<S: DrawingSurface + ?Sized>(self, surface: &mut S) {
        match self {
            PathOp::MoveTo(p) => surface.move_to(p),
            PathOp::LineTo(p) => surface.line_to(p),
            PathOp::QuadTo { ctrl, to } => surface.quad_to(ctrl, to),
            PathOp::CubicTo { ctrl1, ctrl2, to } => surface.cubic_to(ctrl1, ctrl2, to),
            PathOp::Close => surface.close_path(),
        }
    }
}

/// Ordered list of path steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self { ops: Vec::with_capacity(n) }
    }

    #[inline]
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.ops.push(PathOp::MoveTo(p));
        self
    }

    #[inline]
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.ops.push(PathOp::LineTo(p));
        self
    }

    #[inline]
    pub fn quad_to(&mut self, ctrl: Point, to: Point) -> &mut Self {
        self.ops.push(PathOp::QuadTo { ctrl, to });
        self
    }

    #[inline]
    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> &mut Self {
        self.ops.push(PathOp::CubicTo { ctrl1, ctrl2, to });
        self
    }

    #[inline]
    pub fn close(&mut self) -> &mut Self {
        self.ops.push(PathOp::Close);
        self
    }

    #[inline]
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// End points of every segment, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.ops.iter().filter_map(|op| op.end())
    }

    /// True when at least one curve segment bends away from its chord.
    ///
    /// A curve whose control points sit on its end points draws as a straight
    /// line and does not count.
    pub fn has_visible_curves(&self) -> bool {
        let mut current = Point::zero();
        for op in &self.ops {
            match *op {
                PathOp::QuadTo { ctrl, to } => {
                    if ctrl != current && ctrl != to {
                        return true;
                    }
                }
                PathOp::CubicTo { ctrl1, ctrl2, to } => {
                    let degenerate = (ctrl1 == current || ctrl1 == to) && (ctrl2 == current || ctrl2 == to);
                    if !degenerate {
                        return true;
                    }
                }
                _ => {}
            }
            if let Some(end) = op.end() {
                current = end;
            }
        }
        false
    }

    /// Starts a new path on `surface` and issues every step.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        surface.begin_path();
        self.append_to(surface);
    }

    /// Issues every step onto the surface's current path without resetting it.
    pub fn append_to<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for op in &self.ops {
            op.emit(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_skip_close() {
        let mut p = Path::new();
        p.move_to(Point::new(0.0, 0.0)).line_to(Point::new(1.0, 0.0)).close();
        assert_eq!(p.points().count(), 2);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn collapsed_quad_is_not_a_visible_curve() {
        let mut p = Path::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        p.move_to(a).quad_to(a, a).line_to(b);
        assert!(!p.has_visible_curves());

        p.quad_to(Point::new(10.0, 10.0), Point::new(0.0, 10.0));
        assert!(p.has_visible_curves());
    }

    #[test]
    fn transformed_maps_control_points() {
        let op = PathOp::QuadTo { ctrl: Point::new(1.0, 1.0), to: Point::new(2.0, 0.0) };
        let moved = op.transformed(Transform::translation(5.0, 5.0));
        assert_eq!(moved, PathOp::QuadTo { ctrl: Point::new(6.0, 6.0), to: Point::new(7.0, 5.0) });
    }
}
