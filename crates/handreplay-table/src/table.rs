use handreplay_engine::coords::{CanvasSize, Point, Rect};
use handreplay_engine::paint::Color;
use handreplay_engine::shapes::{draw_ellipse_parametric, rounded_rect_path, ShapeStyle};
use handreplay_engine::surface::DrawingSurface;
use handreplay_engine::GeometryError;

use crate::{CardCode, CardOrientation, CardRenderer, CardStyle, SeatLayout, SeatPlacement, TableError, TICK_SIZE};

/// Scene configuration. Defaults reproduce the stock 800×600 table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Canvas size supplied by the host; the table is centered in it.
    pub canvas: CanvasSize,
    /// Felt ellipse, full width and height.
    pub table_size: Point,
    pub table_border: Color,
    pub table_border_width: f32,
    pub felt: Color,
    /// Seat ring ellipse, full width and height.
    pub seat_ring: Point,
    pub seat_count: usize,
    pub start_angle: f32,
    pub tick_color: Color,
    pub tick_width: f32,
    pub tick_size: f32,
    pub orientation: CardOrientation,
    /// Fraction of the ring radius by which card spots move inward.
    pub card_inset: f32,
    /// Gap between cards dealt to the same seat.
    pub card_gap: f32,
    /// Card drawn at a fixed canvas position by [`Table::render`].
    pub demo_card: Option<(String, Point)>,
    pub card_style: CardStyle,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::new(800.0, 600.0),
            table_size: Point::new(650.0, 350.0),
            table_border: Color::rgba(47, 47, 46, 1.0),
            table_border_width: 20.0,
            felt: Color::rgba(70, 99, 13, 0.8),
            seat_ring: Point::new(750.0, 450.0),
            seat_count: 6,
            start_angle: 0.0,
            tick_color: Color::rgba(200, 0, 0, 1.0),
            tick_width: 10.0,
            tick_size: TICK_SIZE,
            orientation: CardOrientation::Upright,
            card_inset: 0.35,
            card_gap: 4.0,
            demo_card: Some(("Ad".to_string(), Point::new(5.0, 5.0))),
            card_style: CardStyle::default(),
        }
    }
}

impl TableConfig {
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas = CanvasSize::new(width, height);
        self
    }

    pub fn with_seats(mut self, count: usize, start_angle: f32) -> Self {
        self.seat_count = count;
        self.start_angle = start_angle;
        self
    }

    pub fn with_orientation(mut self, orientation: CardOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn without_demo_card(mut self) -> Self {
        self.demo_card = None;
        self
    }
}

/// Table composer: one full scene per call, nothing retained between calls.
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    cards: CardRenderer,
    demo: Option<(CardCode, Point)>,
}

impl Table {
    /// Validates the whole configuration, demo card included, so that only a
    /// bad hand passed to [`draw_seats`](Self::draw_seats) can fail later.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        if !config.canvas.is_valid() {
            return Err(GeometryError::NonPositiveSize { width: config.canvas.width, height: config.canvas.height }.into());
        }
        check_size(config.table_size)?;
        // Builds the ring once to surface seat count and radius errors now.
        ring(&config, config.seat_count)?;

        if !config.tick_size.is_finite() || !config.card_gap.is_finite() {
            return Err(GeometryError::NonFinite.into());
        }
        if config.tick_size <= 0.0 {
            return Err(GeometryError::NonPositiveSize { width: config.tick_size, height: config.tick_size }.into());
        }
        if !(0.0..=1.0).contains(&config.card_inset) {
            return Err(TableError::InvalidConfig { field: "card_inset", value: config.card_inset });
        }

        let style = &config.card_style;
        rounded_rect_path(Rect::from_origin_size(Point::zero(), style.size()), style.corner_radius)?;

        let demo = match &config.demo_card {
            Some((name, at)) => {
                if !at.is_finite() {
                    return Err(GeometryError::NonFinite.into());
                }
                Some((CardCode::parse(name)?, *at))
            }
            None => None,
        };

        let cards = CardRenderer::new(config.card_style.clone());
        Ok(Self { config, cards, demo })
    }

    #[inline]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[inline]
    pub fn cards(&self) -> &CardRenderer {
        &self.cards
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.config.canvas.center()
    }

    /// Seat ring with the configured seat count.
    pub fn seat_layout(&self) -> Result<SeatLayout, TableError> {
        ring(&self.config, self.config.seat_count)
    }

    /// Draws the felt, the seat ticks and the demo card, in that order.
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<(), TableError> {
        let c = &self.config;
        log::debug!(
            "rendering table on {}x{} canvas with {} seats",
            c.canvas.width,
            c.canvas.height,
            c.seat_count
        );

        let felt = ShapeStyle::new().stroke(c.table_border, c.table_border_width).fill(c.felt);
        draw_ellipse_parametric(surface, self.center(), c.table_size.x, c.table_size.y, &felt)?;

        let ticks = ShapeStyle::new().stroke(c.tick_color, c.tick_width);
        self.seat_layout()?.draw_ticks(surface, &ticks);

        if let Some((card, at)) = &self.demo {
            self.cards.draw(surface, card, *at)?;
        }
        Ok(())
    }

    /// Card spots for a table of `amount` seats on the configured ring.
    pub fn seats(&self, amount: usize) -> Result<Vec<SeatPlacement>, TableError> {
        let layout = ring(&self.config, amount)?;
        Ok(layout.placements(self.config.card_inset, self.config.orientation))
    }

    /// Draws each seat's cards at its spot on the configured ring, the same
    /// ring [`render`](Self::render) puts the ticks on. `holdings[i]` is seat
    /// `i`; seats past the end of `holdings` and empty entries stay empty.
    ///
    /// More entries than seats is rejected before anything is drawn.
    pub fn draw_seats<S: DrawingSurface + ?Sized>(&self, surface: &mut S, holdings: &[Vec<CardCode>]) -> Result<(), TableError> {
        let count = self.config.seat_count;
        if holdings.len() > count {
            return Err(TableError::SeatOutOfRange { seat: holdings.len() - 1, count });
        }
        let placements = self.seat_layout()?.placements(self.config.card_inset, self.config.orientation);
        let style = self.cards.style();
        let half = style.size() / 2.0;
        let spacing = style.width + self.config.card_gap;

        for (placement, hand) in placements.iter().zip(holdings) {
            if hand.is_empty() {
                continue;
            }
            log::debug!("seat {}: {} card(s)", placement.seat, hand.len());
            for (card, center) in hand.iter().zip(placement.spread(hand.len(), spacing)) {
                self.cards.draw_oriented(surface, card, center - half, placement.rotation)?;
            }
        }
        Ok(())
    }

    /// Full scene: table, then seated cards.
    pub fn init<S: DrawingSurface + ?Sized>(&self, surface: &mut S, holdings: &[Vec<CardCode>]) -> Result<(), TableError> {
        self.render(surface)?;
        self.draw_seats(surface, holdings)
    }
}

fn check_size(size: Point) -> Result<(), GeometryError> {
    if !size.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(GeometryError::NonPositiveSize { width: size.x, height: size.y });
    }
    Ok(())
}

fn ring(config: &TableConfig, count: usize) -> Result<SeatLayout, TableError> {
    SeatLayout::new(
        count,
        config.start_angle,
        config.canvas.center(),
        config.seat_ring.x / 2.0,
        config.seat_ring.y / 2.0,
    )
    .map(|layout| layout.with_tick_size(config.tick_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use handreplay_engine::path::PathOp;
    use handreplay_engine::scene::DrawList;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2
    }

    fn hand(codes: &[&str]) -> Vec<CardCode> {
        codes.iter().map(|c| CardCode::parse(c).unwrap()).collect()
    }

    // ── scene ─────────────────────────────────────────────────────────────

    #[test]
    fn default_scene_matches_stock_table() {
        let table = Table::new(TableConfig::default()).unwrap();
        let mut list = DrawList::new();
        table.render(&mut list).unwrap();

        let paths = list.paths();

        // Felt: sampled ellipse centered on the canvas with radii 325 x 175.
        let felt = &paths[0];
        assert_eq!(felt.len(), 361);
        assert_eq!(felt[0], PathOp::MoveTo(Point::new(725.0, 300.0)));
        for op in felt {
            if let Some(p) = op.end() {
                let dx = (p.x - 400.0) / 325.0;
                let dy = (p.y - 300.0) / 175.0;
                assert!((dx * dx + dy * dy - 1.0).abs() < 1e-3);
            }
        }

        let strokes: Vec<_> = list.strokes().collect();
        assert_eq!(strokes[0].width, 20.0);
        assert_eq!(strokes[0].color, Color::rgba(47, 47, 46, 1.0));
        assert_eq!(list.fills().next().unwrap().color, Color::rgba(70, 99, 13, 0.8));

        // Ticks: six crosses on the 375 x 225 ring.
        let ticks = &paths[1];
        assert_eq!(ticks.len(), 24);
        let centers: Vec<Point> = ticks.chunks(4).map(|t| {
            let (PathOp::MoveTo(a), PathOp::LineTo(b)) = (t[0], t[1]) else { panic!("expected tick arm") };
            (a + b) / 2.0
        }).collect();
        assert!(close(centers[0], Point::new(775.0, 300.0)));
        assert!(close(centers[3], Point::new(25.0, 300.0)));
        assert_eq!(strokes[1].width, 10.0);
        assert_eq!(strokes[1].color, Color::rgba(200, 0, 0, 1.0));

        // Demo card.
        let ranks: Vec<_> = list.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(ranks, vec!["A", "♦", "♦"]);
        assert!(list.state().shadow.is_cleared());
    }

    #[test]
    fn render_leaves_surface_style_untouched() {
        let table = Table::new(TableConfig::default()).unwrap();
        let mut list = DrawList::new();
        let before = list.state().clone();
        table.render(&mut list).unwrap();
        assert_eq!(list.state(), &before);
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[test]
    fn invalid_configs_are_rejected_up_front() {
        assert_eq!(
            Table::new(TableConfig::default().with_seats(0, 0.0)).unwrap_err(),
            TableError::InvalidSeatCount(0)
        );
        assert!(matches!(
            Table::new(TableConfig::default().with_canvas(0.0, 600.0)),
            Err(TableError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn bad_demo_card_is_rejected_by_new() {
        let mut config = TableConfig::default();
        config.demo_card = Some(("A?".to_string(), Point::new(5.0, 5.0)));
        assert!(matches!(Table::new(config), Err(TableError::InvalidCardCode { .. })));
    }

    #[test]
    fn oversized_corner_radius_is_rejected_by_new() {
        let mut config = TableConfig::default();
        config.card_style.corner_radius = 40.0;
        assert_eq!(
            Table::new(config).unwrap_err(),
            TableError::InvalidGeometry(GeometryError::RadiusTooLarge { radius: 40.0, max: 25.0 })
        );
    }

    #[test]
    fn bad_tick_size_is_rejected_by_new() {
        let mut config = TableConfig::default();
        config.tick_size = f32::NAN;
        assert_eq!(Table::new(config.clone()).unwrap_err(), TableError::InvalidGeometry(GeometryError::NonFinite));
        config.tick_size = -5.0;
        assert!(matches!(
            Table::new(config),
            Err(TableError::InvalidGeometry(GeometryError::NonPositiveSize { .. }))
        ));
    }

    #[test]
    fn card_inset_must_be_a_fraction() {
        for inset in [-0.1, 1.5, f32::NAN] {
            let mut config = TableConfig::default();
            config.card_inset = inset;
            assert!(matches!(
                Table::new(config),
                Err(TableError::InvalidConfig { field: "card_inset", .. })
            ));
        }
    }

    #[test]
    fn card_gap_must_be_finite() {
        let mut config = TableConfig::default();
        config.card_gap = f32::INFINITY;
        assert_eq!(Table::new(config).unwrap_err(), TableError::InvalidGeometry(GeometryError::NonFinite));
    }

    #[test]
    fn canvas_size_moves_the_center() {
        let table = Table::new(TableConfig::default().with_canvas(1000.0, 700.0)).unwrap();
        assert_eq!(table.center(), Point::new(500.0, 350.0));
        assert!(close(table.seat_layout().unwrap().position(0), Point::new(875.0, 350.0)));
    }

    // ── seats ─────────────────────────────────────────────────────────────

    #[test]
    fn seats_returns_one_spot_per_seat() {
        let table = Table::new(TableConfig::default()).unwrap();
        let spots = table.seats(9).unwrap();
        assert_eq!(spots.len(), 9);
        assert!(spots.iter().enumerate().all(|(i, s)| s.seat == i));
        assert_eq!(table.seats(0).unwrap_err(), TableError::InvalidSeatCount(0));
    }

    #[test]
    fn draw_seats_draws_every_held_card() {
        let table = Table::new(TableConfig::default().without_demo_card()).unwrap();
        let mut list = DrawList::new();
        let holdings = vec![hand(&["Ah", "Kh"]), Vec::new(), hand(&["7c", "7d"])];
        table.draw_seats(&mut list, &holdings).unwrap();

        // Three text marks per card.
        assert_eq!(list.texts().count(), 12);
        assert!(list.state().shadow.is_cleared());
    }

    #[test]
    fn seat_cards_sit_side_by_side_at_the_spot() {
        let table = Table::new(TableConfig::default()).unwrap();
        let mut list = DrawList::new();
        table.draw_seats(&mut list, &[hand(&["Ah", "Kh"])]).unwrap();

        // Seat 0 sits at angle 0; its spot is pulled 35% toward the center.
        let spot = table.seats(1).unwrap()[0].card_center;
        assert!(close(spot, Point::new(400.0 + 375.0 * 0.65, 300.0)));

        let clears: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                handreplay_engine::scene::DrawCmd::ClearRect(r) => Some(r.rect),
                _ => None,
            })
            .collect();
        assert_eq!(clears.len(), 2);
        assert!(close(clears[0].center(), spot - Point::new(27.0, 0.0)));
        assert!(close(clears[1].center(), spot + Point::new(27.0, 0.0)));
    }

    #[test]
    fn seated_cards_follow_their_ticks() {
        let table = Table::new(TableConfig::default()).unwrap();
        let mut list = DrawList::new();
        table.init(&mut list, &[hand(&["Ah"]), hand(&["Kd"])]).unwrap();

        let center = table.center();
        let PathOp::MoveTo(left) = list.paths()[1][4] else { panic!("expected tick arm") };
        let tick = left + Point::new(TICK_SIZE / 2.0, 0.0);
        assert!(close(tick, table.seat_layout().unwrap().position(1)));

        // Demo card clears first, then seat 0, then seat 1.
        let clears: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                handreplay_engine::scene::DrawCmd::ClearRect(r) => Some(r.rect),
                _ => None,
            })
            .collect();
        assert_eq!(clears.len(), 3);
        let card = clears[2].center() - center;
        let ray = tick - center;
        assert!((card.y.atan2(card.x) - ray.y.atan2(ray.x)).abs() < 1e-3);
        assert!(close(card, ray * 0.65));
    }

    #[test]
    fn more_hands_than_seats_is_rejected() {
        let table = Table::new(TableConfig::default()).unwrap();
        let mut list = DrawList::new();
        let holdings: Vec<Vec<CardCode>> = (0..7).map(|_| hand(&["2c"])).collect();
        assert_eq!(
            table.draw_seats(&mut list, &holdings),
            Err(TableError::SeatOutOfRange { seat: 6, count: 6 })
        );
        assert!(list.is_empty());
    }

    #[test]
    fn facing_center_rotates_cards() {
        let config = TableConfig::default().with_orientation(CardOrientation::FacingCenter);
        let table = Table::new(config).unwrap();
        let mut list = DrawList::new();
        let holdings: Vec<Vec<CardCode>> = (0..4).map(|_| hand(&["2s"])).collect();
        table.draw_seats(&mut list, &holdings).unwrap();

        // Seat 0 sits at angle 0, so its card is turned a quarter turn back.
        let first = list.texts().next().unwrap();
        assert!((first.rotation + core::f32::consts::FRAC_PI_2).abs() < 1e-4);
        assert!(list.state().transform.is_identity());
    }

    #[test]
    fn init_draws_table_then_seats() {
        let table = Table::new(TableConfig::default()).unwrap();
        let mut list = DrawList::new();
        table.init(&mut list, &[hand(&["Qs", "Jd"])]).unwrap();
        // Demo card plus two seated cards.
        assert_eq!(list.texts().count(), 9);
    }
}
