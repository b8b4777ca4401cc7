use crate::coords::Point;
use crate::surface::{save, DrawingSurface, Shadow};

use super::TextStyle;

/// Single text placement with `style`; surface text state is restored afterwards.
pub fn draw_text<S: DrawingSurface + ?Sized>(surface: &mut S, at: Point, text: &str, style: &TextStyle) {
    let mut s = save(surface);
    s.begin_path();
    s.set_font(style.font.clone());
    s.set_text_baseline(style.baseline);
    s.set_text_align(style.align);
    s.set_fill_color(style.color);
    s.fill_text(text, at);
}

/// Sets the surface-wide shadow without scoping.
///
/// The shadow stays on every later draw until the caller resets it. Prefer
/// [`with_shadow`](crate::surface::with_shadow) unless the shadow must span
/// several unrelated calls.
pub fn set_shadow<S: DrawingSurface + ?Sized>(surface: &mut S, shadow: Shadow) {
    surface.set_shadow(shadow);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::DrawList;
    use crate::surface::{Font, TextAlign, TextBaseline};

    #[test]
    fn text_carries_style() {
        let mut list = DrawList::new();
        let style = TextStyle::centered(Font::new(18.0, "serif"), Color::RED);
        draw_text(&mut list, Point::new(10.0, 20.0), "A", &style);

        let t = list.texts().next().unwrap();
        assert_eq!(t.text, "A");
        assert_eq!(t.at, Point::new(10.0, 20.0));
        assert_eq!(t.font, Font::new(18.0, "serif"));
        assert_eq!(t.color, Color::RED);
        assert_eq!(t.baseline, TextBaseline::Middle);
        assert_eq!(t.align, TextAlign::Center);
    }

    #[test]
    fn text_style_does_not_leak() {
        let mut list = DrawList::new();
        let style = TextStyle::new(Font::new(40.0, "serif"), Color::RED).with_align(TextAlign::Right);
        draw_text(&mut list, Point::zero(), "x", &style);
        assert_eq!(list.state().font, Font::default());
        assert_eq!(list.state().text_align, TextAlign::Left);
        assert_eq!(list.state().fill_color, Color::BLACK);
    }

    #[test]
    fn raw_shadow_persists_until_reset() {
        let mut list = DrawList::new();
        let shadow = Shadow::new(2.0, 2.0, 1.0, Color::BLACK);
        set_shadow(&mut list, shadow);
        draw_text(&mut list, Point::zero(), "x", &TextStyle::new(Font::default(), Color::BLACK));
        assert_eq!(list.texts().next().unwrap().shadow, shadow);
        assert_eq!(list.state().shadow, shadow);
    }
}
