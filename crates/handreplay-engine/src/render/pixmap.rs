use std::path::Path as FsPath;

use resvg::tiny_skia::{self as sk, FillRule, Pixmap, PixmapPaint, PremultipliedColorU8, Stroke};

use crate::coords::{CanvasSize, Point, Rect, Transform};
use crate::paint::Color;
use crate::path::PathOp;
use crate::surface::{DrawingSurface, SurfaceState};
use crate::text::{FontSystem, TextLayout};

use super::RasterError;

/// Drawing surface backed by an RGBA pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    fonts: FontSystem,
    state: SurfaceState,
    /// Current path in device space.
    path: Vec<PathOp>,
    warned_missing_font: bool,
}

impl PixmapSurface {
    /// Transparent surface of `width` × `height` pixels with no fonts.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::InvalidCanvasSize { width, height })?;
        Ok(Self {
            pixmap,
            fonts: FontSystem::new(),
            state: SurfaceState::default(),
            path: Vec::new(),
            warned_missing_font: false,
        })
    }

    /// Uses `fonts` for every later `fill_text`.
    pub fn with_fonts(mut self, fonts: FontSystem) -> Self {
        self.fonts = fonts;
        self
    }

    #[inline]
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    /// Paints every pixel with `color`, ignoring state.
    pub fn fill_background(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(sk::Color::from_rgba8(r, g, b, a));
    }

    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        self.pixmap.encode_png().map_err(|e| RasterError::Encode(e.to_string()))
    }

    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<(), RasterError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn build_path(&self) -> Option<sk::Path> {
        let mut pb = sk::PathBuilder::new();
        for op in &self.path {
            match *op {
                PathOp::MoveTo(p) => pb.move_to(p.x, p.y),
                PathOp::LineTo(p) => pb.line_to(p.x, p.y),
                PathOp::QuadTo { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
                PathOp::CubicTo { ctrl1, ctrl2, to } => {
                    pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)
                }
                PathOp::Close => pb.close(),
            }
        }
        pb.finish()
    }

    /// Transform that displaces a draw by the active shadow, if it paints.
    fn shadow_offset(&self) -> Option<(sk::Transform, Color)> {
        let shadow = self.state.shadow;
        shadow
            .is_visible()
            .then(|| (sk::Transform::from_translate(shadow.offset_x, shadow.offset_y), shadow.color))
    }

    fn blit_text(&mut self, layout: &TextLayout, transform: Transform, color: Color) {
        let Some(font) = self.fonts.get(layout.font) else {
            return;
        };
        for glyph in &layout.glyphs {
            let (metrics, coverage) = font.rasterize_config(glyph.key);
            let Some(mut bitmap) = Pixmap::new(metrics.width as u32, metrics.height as u32) else {
                continue;
            };
            for (px, cov) in bitmap.pixels_mut().iter_mut().zip(coverage) {
                *px = coverage_pixel(color, cov);
            }
            let t = to_sk(transform.pre_translate(glyph.origin.x, glyph.origin.y));
            self.pixmap.draw_pixmap(0, 0, bitmap.as_ref(), &PixmapPaint::default(), t, None);
        }
    }
}

impl DrawingSurface for PixmapSurface {
    #[inline]
    fn state(&self) -> &SurfaceState {
        &self.state
    }

    #[inline]
    fn state_mut(&mut self) -> &mut SurfaceState {
        &mut self.state
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Point) {
        self.path.push(PathOp::MoveTo(p).transformed(self.state.transform));
    }

    fn line_to(&mut self, p: Point) {
        self.path.push(PathOp::LineTo(p).transformed(self.state.transform));
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.path.push(PathOp::QuadTo { ctrl, to }.transformed(self.state.transform));
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.path.push(PathOp::CubicTo { ctrl1, ctrl2, to }.transformed(self.state.transform));
    }

    fn close_path(&mut self) {
        self.path.push(PathOp::Close);
    }

    fn stroke(&mut self) {
        let Some(path) = self.build_path() else {
            log::debug!("stroke skipped: empty or degenerate path");
            return;
        };
        let stroke = Stroke { width: self.state.line_width.max(0.0), ..Stroke::default() };

        if let Some((offset, color)) = self.shadow_offset() {
            self.pixmap.stroke_path(&path, &solid(color), &stroke, offset, None);
        }
        let paint = solid(self.state.stroke_color);
        self.pixmap.stroke_path(&path, &paint, &stroke, sk::Transform::identity(), None);
    }

    fn fill(&mut self) {
        let Some(path) = self.build_path() else {
            log::debug!("fill skipped: empty or degenerate path");
            return;
        };

        if let Some((offset, color)) = self.shadow_offset() {
            self.pixmap.fill_path(&path, &solid(color), FillRule::Winding, offset, None);
        }
        let paint = solid(self.state.fill_color);
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, sk::Transform::identity(), None);
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let s = &self.state;
        let Some(layout) = self.fonts.layout(text, &s.font.family, s.font.size_px, s.text_baseline, s.text_align) else {
            if !self.warned_missing_font {
                log::warn!("no font loaded for `{}`; text is not rasterized", s.font);
                self.warned_missing_font = true;
            }
            return;
        };

        let base = s.transform.pre_translate(at.x, at.y);
        let fill = s.fill_color;
        let shadow = s.shadow;

        if shadow.is_visible() {
            let displaced = Transform::translation(shadow.offset_x, shadow.offset_y).then(base);
            self.blit_text(&layout, displaced, shadow.color);
        }
        self.blit_text(&layout, base, fill);
    }

    fn clear_rect(&mut self, rect: Rect) {
        let Some(r) = sk::Rect::from_xywh(rect.x(), rect.y(), rect.width(), rect.height()) else {
            return;
        };
        let mut paint = sk::Paint::default();
        paint.blend_mode = sk::BlendMode::Clear;
        self.pixmap.fill_rect(r, &paint, to_sk(self.state.transform), None);
    }
}

#[inline]
fn to_sk(t: Transform) -> sk::Transform {
    sk::Transform::from_row(t.a, t.b, t.c, t.d, t.e, t.f)
}

fn solid(color: Color) -> sk::Paint<'static> {
    let [r, g, b, a] = color.to_rgba8();
    let mut paint = sk::Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Premultiplied pixel for `color` at glyph `coverage`.
fn coverage_pixel(color: Color, coverage: u8) -> PremultipliedColorU8 {
    let a = (color.alpha_u8() as u16 * coverage as u16 / 255) as u8;
    let mul = |c: u8| (c as u16 * a as u16 / 255) as u8;
    PremultipliedColorU8::from_rgba(mul(color.r), mul(color.g), mul(color.b), a)
        .unwrap_or(PremultipliedColorU8::TRANSPARENT)
}
