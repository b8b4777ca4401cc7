//! Drawing-surface contract.
//!
//! A surface is a 2D canvas context: it builds one path at a time, strokes and
//! fills it with the colors held in its [`SurfaceState`], draws text and
//! carries shadow and transform state that applies to every later draw.
//!
//! State is global to the surface. Code that changes it for one draw should do
//! so through [`save`] or [`with_shadow_scope`] so the change cannot outlive
//! the draw.

mod guard;
mod state;

pub use guard::{save, with_saved_state, with_shadow, with_shadow_scope, ShadowScope, StateGuard};
pub use state::{Font, FontParseError, Shadow, SurfaceState, TextAlign, TextBaseline};

use crate::coords::{Point, Rect, Transform};
use crate::paint::Color;

/// Immediate-mode 2D drawing surface.
///
/// Path methods mirror the canvas path API. `stroke` and `fill` consume the
/// current path using the state in effect at the time of the call; the path is
/// kept until the next `begin_path`, so a shape may be stroked and then filled.
pub trait DrawingSurface {
    fn state(&self) -> &SurfaceState;
    fn state_mut(&mut self) -> &mut SurfaceState;

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn quad_to(&mut self, ctrl: Point, to: Point);
    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);
    fn close_path(&mut self);

    fn stroke(&mut self);
    fn fill(&mut self);

    /// Draws `text` anchored at `at` using the current font, fill color,
    /// baseline and alignment. No wrapping or clipping.
    fn fill_text(&mut self, text: &str, at: Point);

    /// Resets every pixel inside `rect` to transparent.
    fn clear_rect(&mut self, rect: Rect);

    // ── style setters ─────────────────────────────────────────────────────

    fn set_stroke_color(&mut self, color: Color) {
        self.state_mut().stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state_mut().line_width = width;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state_mut().fill_color = color;
    }

    fn set_font(&mut self, font: Font) {
        self.state_mut().font = font;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state_mut().text_baseline = baseline;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state_mut().text_align = align;
    }

    /// Sets the surface-wide shadow. It stays in effect until changed.
    fn set_shadow(&mut self, shadow: Shadow) {
        self.state_mut().shadow = shadow;
    }

    fn set_transform(&mut self, transform: Transform) {
        self.state_mut().transform = transform;
    }
}
