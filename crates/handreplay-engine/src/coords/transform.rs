use super::Point;

/// 2D affine transform in canvas `setTransform(a, b, c, d, e, f)` order.
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 }
    }

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: tx, f: ty }
    }

    /// Rotation by `angle` radians about the origin (clockwise on screen).
    #[inline]
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// `self ∘ inner`: applies `inner` first, then `self`.
    pub fn then(self, inner: Transform) -> Transform {
        Transform {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    /// Same as canvas `translate(tx, ty)`: the offset applies in local space.
    #[inline]
    pub fn pre_translate(self, tx: f32, ty: f32) -> Transform {
        self.then(Transform::translation(tx, ty))
    }

    /// Same as canvas `rotate(angle)`.
    #[inline]
    pub fn pre_rotate(self, angle: f32) -> Transform {
        self.then(Transform::rotation(angle))
    }

    #[inline]
    pub fn apply(self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Rotation component in radians, assuming no skew.
    #[inline]
    pub fn rotation_angle(self) -> f32 {
        self.b.atan2(self.a)
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Transform::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_leaves_points() {
        let p = Point::new(3.0, -4.0);
        assert_eq!(Transform::identity().apply(p), p);
    }

    #[test]
    fn quarter_turn_maps_x_axis_to_y_axis() {
        // +Y is down, so a positive quarter turn points +X at the bottom of the screen.
        let p = Transform::rotation(FRAC_PI_2).apply(Point::new(1.0, 0.0));
        assert!(close(p, Point::new(0.0, 1.0)));
    }

    #[test]
    fn pre_translate_applies_in_local_space() {
        let t = Transform::translation(100.0, 0.0)
            .pre_rotate(FRAC_PI_2)
            .pre_translate(10.0, 0.0);
        assert!(close(t.apply(Point::zero()), Point::new(100.0, 10.0)));
    }

    #[test]
    fn rotation_angle_round_trips() {
        let t = Transform::translation(5.0, 5.0).pre_rotate(0.7);
        assert!((t.rotation_angle() - 0.7).abs() < 1e-5);
    }
}
