use crate::coords::{Point, Rect};
use crate::path::PathOp;
use crate::surface::{DrawingSurface, SurfaceState};

use super::{ClearCmd, DrawCmd, FillCmd, StrokeCmd, TextCmd};

/// Recording drawing surface.
///
/// Keeps canvas-like state and appends one [`DrawCmd`] per call. Nothing is
/// rasterized. Used as the inspection surface in tests and for dumping the
/// primitive stream of a scene.
///
/// Performance characteristics:
/// - every call is O(1) amortized
/// - [`clear`](Self::clear) keeps allocated capacity for reuse
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCmd>,
    state: SurfaceState,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands. Surface state is kept, like a canvas whose
    /// pixels were wiped.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Returns commands in call order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = &StrokeCmd> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Stroke(s) => Some(s),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = &FillCmd> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Fill(f) => Some(f),
            _ => None,
        })
    }

    pub fn path_ops(&self) -> impl Iterator<Item = PathOp> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Path(op) => Some(*op),
            _ => None,
        })
    }

    /// Splits the stream into paths: the steps between each `BeginPath` and
    /// the next one.
    pub fn paths(&self) -> Vec<Vec<PathOp>> {
        let mut out: Vec<Vec<PathOp>> = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCmd::BeginPath => out.push(Vec::new()),
                DrawCmd::Path(op) => match out.last_mut() {
                    Some(path) => path.push(*op),
                    // Steps before any begin_path still belong to a path.
                    None => out.push(vec![*op]),
                },
                _ => {}
            }
        }
        out
    }

    #[inline]
    fn push_path(&mut self, op: PathOp) {
        let op = op.transformed(self.state.transform);
        self.commands.push(DrawCmd::Path(op));
    }
}

impl DrawingSurface for DrawList {
    #[inline]
    fn state(&self) -> &SurfaceState {
        &self.state
    }

    #[inline]
    fn state_mut(&mut self) -> &mut SurfaceState {
        &mut self.state
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCmd::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.push_path(PathOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.push_path(PathOp::LineTo(p));
    }

    fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.push_path(PathOp::QuadTo { ctrl, to });
    }

    fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.push_path(PathOp::CubicTo { ctrl1, ctrl2, to });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCmd::Path(PathOp::Close));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCmd::Stroke(StrokeCmd {
            color: self.state.stroke_color,
            width: self.state.line_width,
            shadow: self.state.shadow,
        }));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCmd::Fill(FillCmd {
            color: self.state.fill_color,
            shadow: self.state.shadow,
        }));
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let s = &self.state;
        self.commands.push(DrawCmd::Text(TextCmd {
            text: text.to_string(),
            at: s.transform.apply(at),
            rotation: s.transform.rotation_angle(),
            font: s.font.clone(),
            color: s.fill_color,
            baseline: s.text_baseline,
            align: s.text_align,
            shadow: s.shadow,
        }));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCmd::ClearRect(ClearCmd { rect, transform: self.state.transform }));
    }
}
