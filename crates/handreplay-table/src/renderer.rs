use handreplay_engine::coords::{Point, Rect};
use handreplay_engine::paint::Color;
use handreplay_engine::shapes::{draw_text, rounded_rect_path, stroke_and_fill, ShapeStyle, TextStyle};
use handreplay_engine::surface::{save, with_shadow_scope, DrawingSurface, Font, Shadow};

use crate::{CardCode, Suit, SuitTone, TableError};

/// Card face appearance.
///
/// Text anchors are fixed fractions of the card size, so scaling the card
/// keeps the face layout.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// Rank label and small suit glyph.
    pub corner_font: Font,
    /// Large suit glyph.
    pub center_font: Font,
    pub background: Color,
    pub border: Color,
    pub border_width: f32,
    pub warm: Color,
    pub cool: Color,
    pub shadow: Shadow,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 70.0,
            corner_radius: 3.0,
            corner_font: Font::new(18.0, "serif"),
            center_font: Font::new(40.0, "serif"),
            background: Color::WHITE,
            border: Color::BLACK,
            border_width: 1.0,
            warm: Color::RED,
            cool: Color::BLACK,
            shadow: Shadow::new(1.0, 1.0, 1.0, Color::BLACK),
        }
    }
}

impl CardStyle {
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub fn suit_color(&self, suit: Suit) -> Color {
        match suit.tone() {
            SuitTone::Warm => self.warm,
            SuitTone::Cool => self.cool,
        }
    }
}

/// Draws card faces.
#[derive(Debug, Clone, Default)]
pub struct CardRenderer {
    style: CardStyle,
}

impl CardRenderer {
    pub fn new(style: CardStyle) -> Self {
        Self { style }
    }

    #[inline]
    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    /// Parses `name` and draws it with its top-left corner at `(x, y)`.
    pub fn create<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        name: &str,
        x: f32,
        y: f32,
    ) -> Result<CardCode, TableError> {
        let card = CardCode::parse(name)?;
        self.draw(surface, &card, Point::new(x, y))?;
        Ok(card)
    }

    /// Draws `card` upright with its top-left corner at `origin`.
    pub fn draw<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        card: &CardCode,
        origin: Point,
    ) -> Result<(), TableError> {
        self.draw_oriented(surface, card, origin, 0.0)
    }

    /// Draws `card` rotated by `rotation` radians about its center; `origin`
    /// is the top-left corner of the unrotated card.
    pub fn draw_oriented<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        card: &CardCode,
        origin: Point,
        rotation: f32,
    ) -> Result<(), TableError> {
        log::trace!("card {card} at ({}, {}) rot {rotation}", origin.x, origin.y);

        if rotation == 0.0 {
            return self.face(surface, card, origin);
        }

        let half = self.style.size() / 2.0;
        let center = origin + half;
        let mut s = save(surface);
        let t = s.state().transform.pre_translate(center.x, center.y).pre_rotate(rotation);
        s.set_transform(t);
        self.face(&mut *s, card, -half)
    }

    /// Face drawing sequence: clear, shadowed background, crease, three text marks.
    fn face<S: DrawingSurface + ?Sized>(&self, surface: &mut S, card: &CardCode, origin: Point) -> Result<(), TableError> {
        let st = &self.style;
        let rect = Rect::from_origin_size(origin, st.size());
        // Validate before touching the surface.
        let background = rounded_rect_path(rect, st.corner_radius)?;

        let color = st.suit_color(card.suit());
        let glyph = card.suit().glyph();
        let (x, y, w, h) = (origin.x, origin.y, st.width, st.height);

        let mut s = save(surface);
        s.clear_rect(rect);

        {
            let mut shadowed = with_shadow_scope(&mut *s, st.shadow);
            let style = ShapeStyle::new().stroke(st.border, st.border_width).fill(st.background);
            stroke_and_fill(&mut *shadowed, &background, &style);
        }

        s.begin_path();
        s.move_to(Point::new(x + w, y + h / 4.0));
        s.line_to(Point::new(x + w / 3.0, y + h / 4.0));
        s.line_to(Point::new(x + w / 3.0, y + h));
        s.set_stroke_color(st.border);
        s.set_line_width(st.border_width);
        s.stroke();

        let corner = TextStyle::centered(st.corner_font.clone(), color);
        draw_text(&mut *s, Point::new(x + w / 6.0, y + h / 8.0), card.rank(), &corner);
        draw_text(&mut *s, Point::new(x + w / 6.0, y + h / 3.0), glyph, &corner);

        let center = TextStyle::centered(st.center_font.clone(), color);
        draw_text(&mut *s, Point::new(x + w - w / 3.0, y + h - h / 2.5), glyph, &center);

        Ok(())
    }
}
