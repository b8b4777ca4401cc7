use core::f32::consts::{FRAC_PI_2, TAU};

use handreplay_engine::coords::Point;
use handreplay_engine::path::Path;
use handreplay_engine::shapes::{stroke_and_fill, ShapeStyle};
use handreplay_engine::surface::DrawingSurface;
use handreplay_engine::GeometryError;

use crate::TableError;

/// Default length of each arm of a seat tick, end to end.
pub const TICK_SIZE: f32 = 30.0;

/// How cards dealt to a seat are turned.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CardOrientation {
    /// Every card reads upright regardless of seat.
    #[default]
    Upright,
    /// Card bottoms face their seat, tops face the table center.
    FacingCenter,
}

/// Where a seat sits and where its cards go.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeatPlacement {
    pub seat: usize,
    /// Seat angle on the ring, radians.
    pub angle: f32,
    /// Seat point on the ring (where the tick is drawn).
    pub anchor: Point,
    /// Center of the seat's card spot, pulled in toward the table center.
    pub card_center: Point,
    /// Card rotation about `card_center`, radians.
    pub rotation: f32,
}

impl SeatPlacement {
    /// Centers of `n` cards laid side by side along the card's own x axis,
    /// `spacing` apart center to center.
    pub fn spread(&self, n: usize, spacing: f32) -> Vec<Point> {
        let (sin, cos) = self.rotation.sin_cos();
        let mid = (n as f32 - 1.0) / 2.0;
        (0..n)
            .map(|k| {
                let dx = (k as f32 - mid) * spacing;
                self.card_center + Point::new(dx * cos, dx * sin)
            })
            .collect()
    }
}

/// `count` seats spread evenly around an ellipse.
///
/// Seat `i` sits at angle `start_angle + 2π·i/count`. With +Y down, angle 0
/// is the right end of the ellipse and seats proceed clockwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeatLayout {
    count: usize,
    start_angle: f32,
    center: Point,
    radius_x: f32,
    radius_y: f32,
    tick_size: f32,
}

impl SeatLayout {
    pub fn new(count: usize, start_angle: f32, center: Point, radius_x: f32, radius_y: f32) -> Result<Self, TableError> {
        if count < 1 {
            return Err(TableError::InvalidSeatCount(count));
        }
        if !start_angle.is_finite() || !center.is_finite() || !radius_x.is_finite() || !radius_y.is_finite() {
            return Err(GeometryError::NonFinite.into());
        }
        if radius_x <= 0.0 || radius_y <= 0.0 {
            return Err(GeometryError::NonPositiveSize { width: radius_x * 2.0, height: radius_y * 2.0 }.into());
        }
        Ok(Self { count, start_angle, center, radius_x, radius_y, tick_size: TICK_SIZE })
    }

    pub fn with_tick_size(mut self, tick_size: f32) -> Self {
        self.tick_size = tick_size;
        self
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn angle(&self, seat: usize) -> f32 {
        self.start_angle + TAU * seat as f32 / self.count as f32
    }

    #[inline]
    pub fn position(&self, seat: usize) -> Point {
        self.center.on_ellipse(self.radius_x, self.radius_y, self.angle(seat))
    }

    /// One point per seat, seat 0 first.
    pub fn positions(&self) -> Vec<Point> {
        (0..self.count).map(|i| self.position(i)).collect()
    }

    /// A `+` of `tick_size` centered on every seat, as one path.
    pub fn tick_path(&self) -> Path {
        let half = self.tick_size / 2.0;
        let mut path = Path::with_capacity(self.count * 4);
        for p in self.positions() {
            path.move_to(Point::new(p.x - half, p.y))
                .line_to(Point::new(p.x + half, p.y))
                .move_to(Point::new(p.x, p.y + half))
                .line_to(Point::new(p.x, p.y - half));
        }
        path
    }

    /// Strokes the seat ticks with `style` (fills too, when the style has one).
    pub fn draw_ticks<S: DrawingSurface + ?Sized>(&self, surface: &mut S, style: &ShapeStyle) {
        log::trace!("drawing {} seat ticks", self.count);
        stroke_and_fill(surface, &self.tick_path(), style);
    }

    /// Card spot for `seat`.
    ///
    /// `inset` is the fraction of the seat's distance from the center by which
    /// the spot moves inward: 0 keeps it on the ring, 1 puts it at the center.
    pub fn placement(&self, seat: usize, inset: f32, orientation: CardOrientation) -> Result<SeatPlacement, TableError> {
        if seat >= self.count {
            return Err(TableError::SeatOutOfRange { seat, count: self.count });
        }
        Ok(self.place(seat, inset, orientation))
    }

    /// Placements for every seat.
    pub fn placements(&self, inset: f32, orientation: CardOrientation) -> Vec<SeatPlacement> {
        (0..self.count).map(|seat| self.place(seat, inset, orientation)).collect()
    }

    fn place(&self, seat: usize, inset: f32, orientation: CardOrientation) -> SeatPlacement {
        let angle = self.angle(seat);
        let anchor = self.position(seat);
        let card_center = self.center + (anchor - self.center) * (1.0 - inset.clamp(0.0, 1.0));
        let rotation = match orientation {
            CardOrientation::Upright => 0.0,
            // A seat at the bottom (angle π/2) reads upright.
            CardOrientation::FacingCenter => angle - FRAC_PI_2,
        };
        SeatPlacement { seat, angle, anchor, card_center, rotation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;
    use handreplay_engine::paint::Color;
    use handreplay_engine::path::PathOp;
    use handreplay_engine::scene::DrawList;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    fn six() -> SeatLayout {
        SeatLayout::new(6, 0.0, Point::zero(), 375.0, 225.0).unwrap()
    }

    // ── positions ─────────────────────────────────────────────────────────

    #[test]
    fn six_seats_are_evenly_spaced() {
        let layout = six();
        for i in 1..6 {
            assert!((layout.angle(i) - layout.angle(i - 1) - TAU / 6.0).abs() < 1e-5);
        }
        let p = layout.positions();
        assert_eq!(p.len(), 6);
        assert!(close(p[0], Point::new(375.0, 0.0)));
        assert!(close(p[3], Point::new(-375.0, 0.0)));
    }

    #[test]
    fn start_angle_rotates_every_seat() {
        let layout = SeatLayout::new(4, FRAC_PI_2, Point::new(400.0, 300.0), 100.0, 50.0).unwrap();
        assert!(close(layout.position(0), Point::new(400.0, 350.0)));
        assert!(close(layout.position(1), Point::new(300.0, 300.0)));
    }

    #[test]
    fn single_seat_is_allowed() {
        let layout = SeatLayout::new(1, 0.0, Point::zero(), 10.0, 10.0).unwrap();
        assert_eq!(layout.positions().len(), 1);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn zero_seats_is_rejected() {
        assert_eq!(SeatLayout::new(0, 0.0, Point::zero(), 1.0, 1.0), Err(TableError::InvalidSeatCount(0)));
    }

    #[test]
    fn flat_ring_is_rejected() {
        assert!(matches!(
            SeatLayout::new(6, 0.0, Point::zero(), 0.0, 10.0),
            Err(TableError::InvalidGeometry(GeometryError::NonPositiveSize { .. }))
        ));
        assert!(matches!(
            SeatLayout::new(6, f32::NAN, Point::zero(), 1.0, 1.0),
            Err(TableError::InvalidGeometry(GeometryError::NonFinite))
        ));
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn ticks_are_crosses_centered_on_seats() {
        let layout = six();
        let path = layout.tick_path();
        assert_eq!(path.len(), 24);
        let ops = &path.ops()[..4];
        assert!(matches!(ops[0], PathOp::MoveTo(p) if close(p, Point::new(360.0, 0.0))));
        assert!(matches!(ops[1], PathOp::LineTo(p) if close(p, Point::new(390.0, 0.0))));
        assert!(matches!(ops[2], PathOp::MoveTo(p) if close(p, Point::new(375.0, 15.0))));
        assert!(matches!(ops[3], PathOp::LineTo(p) if close(p, Point::new(375.0, -15.0))));
    }

    #[test]
    fn ticks_stroke_once_with_style() {
        let mut list = DrawList::new();
        six().draw_ticks(&mut list, &ShapeStyle::new().stroke(Color::rgb(200, 0, 0), 10.0));
        let strokes: Vec<_> = list.strokes().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].width, 10.0);
        assert_eq!(list.fills().count(), 0);
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn placement_pulls_cards_toward_center() {
        let p = six().placement(0, 0.4, CardOrientation::Upright).unwrap();
        assert!(close(p.anchor, Point::new(375.0, 0.0)));
        assert!(close(p.card_center, Point::new(225.0, 0.0)));
        assert_eq!(p.rotation, 0.0);
    }

    #[test]
    fn facing_center_turns_top_seat_upside_down() {
        let layout = SeatLayout::new(4, FRAC_PI_2, Point::zero(), 100.0, 100.0).unwrap();
        let bottom = layout.placement(0, 0.5, CardOrientation::FacingCenter).unwrap();
        let top = layout.placement(2, 0.5, CardOrientation::FacingCenter).unwrap();
        assert!(bottom.rotation.abs() < 1e-5);
        assert!((top.rotation - PI).abs() < 1e-5);
    }

    #[test]
    fn placement_rejects_unknown_seat() {
        assert_eq!(
            six().placement(6, 0.0, CardOrientation::Upright),
            Err(TableError::SeatOutOfRange { seat: 6, count: 6 })
        );
        assert_eq!(six().placements(0.3, CardOrientation::Upright).len(), 6);
    }

    #[test]
    fn placements_agree_with_single_placement() {
        let layout = six();
        let all = layout.placements(0.25, CardOrientation::FacingCenter);
        assert_eq!(all.len(), 6);
        for (seat, p) in all.iter().enumerate() {
            assert_eq!(Ok(*p), layout.placement(seat, 0.25, CardOrientation::FacingCenter));
        }
    }

    #[test]
    fn spread_is_symmetric_about_card_center() {
        let p = six().placement(0, 0.0, CardOrientation::Upright).unwrap();
        let centers = p.spread(2, 54.0);
        assert!(close(centers[0], Point::new(348.0, 0.0)));
        assert!(close(centers[1], Point::new(402.0, 0.0)));
        assert_eq!(p.spread(1, 54.0), vec![p.card_center]);
    }
}
