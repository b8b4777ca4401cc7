use crate::paint::Color;
use crate::path::Path;
use crate::surface::{save, DrawingSurface, Font, TextAlign, TextBaseline};

/// Optional stroke/fill overrides for a shape.
///
/// `fill_color: None` means stroke only. Unset stroke fields keep the
/// surface's current stroke color or width.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShapeStyle {
    pub stroke_color: Option<Color>,
    pub stroke_width: Option<f32>,
    pub fill_color: Option<Color>,
}

impl ShapeStyle {
    #[inline]
    pub const fn new() -> Self {
        Self { stroke_color: None, stroke_width: None, fill_color: None }
    }

    #[inline]
    pub const fn stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = Some(width);
        self
    }

    #[inline]
    pub const fn stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    #[inline]
    pub const fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    #[inline]
    pub const fn fill(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }
}

/// Text placement style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub color: Color,
    pub baseline: TextBaseline,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font: Font, color: Color) -> Self {
        Self { font, color, baseline: TextBaseline::Top, align: TextAlign::Left }
    }

    /// Middle baseline, centered alignment: the anchor is the glyph center.
    pub fn centered(font: Font, color: Color) -> Self {
        Self { font, color, baseline: TextBaseline::Middle, align: TextAlign::Center }
    }

    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Replays `path`, strokes it, then fills it when the style has a fill.
///
/// The fill goes on after the stroke and covers its inner half, as on a
/// canvas. Surface state is restored afterwards.
pub fn stroke_and_fill<S: DrawingSurface + ?Sized>(surface: &mut S, path: &Path, style: &ShapeStyle) {
    let mut s = save(surface);
    path.replay(&mut *s);

    if let Some(width) = style.stroke_width {
        s.set_line_width(width);
    }
    if let Some(color) = style.stroke_color {
        s.set_stroke_color(color);
    }
    s.stroke();

    if let Some(fill) = style.fill_color {
        s.set_fill_color(fill);
        s.fill();
    }
}
