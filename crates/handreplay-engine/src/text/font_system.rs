use thiserror::Error;

use crate::coords::Point;
use crate::surface::{TextAlign, TextBaseline};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// One glyph ready to rasterize: the fontdue raster key plus its top-left in
/// local text space.
#[derive(Debug, Clone)]
pub(crate) struct PlacedGlyph {
    pub key: fontdue::layout::GlyphRasterConfig,
    pub origin: Point,
}

/// Laid-out text run, positioned relative to its anchor.
#[derive(Debug, Clone)]
pub struct TextLayout {
    pub(crate) font: FontId,
    pub(crate) glyphs: Vec<PlacedGlyph>,
    /// Advance width of the whole run in pixels.
    pub width: f32,
    /// Ascent minus descent at the laid-out size.
    pub height: f32,
}

/// Owns the fonts available to a raster surface, keyed by family name.
///
/// Fonts are immutable after loading. A family that was never loaded falls
/// back to the first font, so a single loaded face serves every request.
pub struct FontSystem {
    fonts: Vec<(String, fontdue::Font)>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font under `family`.
    pub fn load_font(&mut self, family: impl Into<String>, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        let family = family.into();
        log::debug!("loaded font {id:?} as `{family}`");
        self.fonts.push((family, font));
        Ok(id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Font for `family`, falling back to the first loaded font.
    pub fn resolve(&self, family: &str) -> Option<FontId> {
        self.fonts
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case(family))
            .or(if self.fonts.is_empty() { None } else { Some(0) })
            .map(FontId)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0).map(|(_, f)| f)
    }

    /// Lays out a single line of `text` so that `(0, 0)` is the anchor point
    /// described by `baseline` and `align`.
    pub fn layout(
        &self,
        text: &str,
        family: &str,
        size: f32,
        baseline: TextBaseline,
        align: TextAlign,
    ) -> Option<TextLayout> {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let id = self.resolve(family)?;
        let font = self.get(id)?;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        // Layout y = 0 is the top of the line box; the baseline sits at `ascent`.
        let (ascent, descent) = font
            .horizontal_line_metrics(size)
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((size * 0.8, -size * 0.2));

        let width = layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);

        let offset = anchor_offset(width, ascent - descent, baseline, align);

        let glyphs = layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| PlacedGlyph { key: g.key, origin: Point::new(g.x, g.y) + offset })
            .collect();

        Some(TextLayout { font: id, glyphs, width, height: ascent - descent })
    }
}

/// Shift from the line box's top-left to the anchor named by `baseline` and
/// `align`, for a run `width` wide and `height` tall.
fn anchor_offset(width: f32, height: f32, baseline: TextBaseline, align: TextAlign) -> Point {
    let dx = match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => -width / 2.0,
        TextAlign::Right => -width,
    };
    let dy = match baseline {
        TextBaseline::Top => 0.0,
        TextBaseline::Middle => -height / 2.0,
        TextBaseline::Bottom => -height,
    };
    Point::new(dx, dy)
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_resolves_nothing() {
        let fonts = FontSystem::new();
        assert!(fonts.is_empty());
        assert_eq!(fonts.resolve("serif"), None);
        assert!(fonts.layout("A", "serif", 18.0, TextBaseline::Middle, TextAlign::Center).is_none());
    }

    // ── anchor offsets ────────────────────────────────────────────────────

    #[test]
    fn anchor_offset_covers_every_baseline_and_align() {
        let (w, h) = (40.0, 20.0);
        let cases = [
            (TextBaseline::Top, TextAlign::Left, Point::new(0.0, 0.0)),
            (TextBaseline::Top, TextAlign::Center, Point::new(-20.0, 0.0)),
            (TextBaseline::Top, TextAlign::Right, Point::new(-40.0, 0.0)),
            (TextBaseline::Middle, TextAlign::Left, Point::new(0.0, -10.0)),
            (TextBaseline::Middle, TextAlign::Center, Point::new(-20.0, -10.0)),
            (TextBaseline::Middle, TextAlign::Right, Point::new(-40.0, -10.0)),
            (TextBaseline::Bottom, TextAlign::Left, Point::new(0.0, -20.0)),
            (TextBaseline::Bottom, TextAlign::Center, Point::new(-20.0, -20.0)),
            (TextBaseline::Bottom, TextAlign::Right, Point::new(-40.0, -20.0)),
        ];
        for (baseline, align, expected) in cases {
            assert_eq!(anchor_offset(w, h, baseline, align), expected, "{baseline:?} {align:?}");
        }
    }

    // ── loading ───────────────────────────────────────────────────────────

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font("serif", b"not a font").is_err());
        assert!(fonts.is_empty());
    }
}
