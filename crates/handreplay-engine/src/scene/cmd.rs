use crate::coords::{Point, Rect, Transform};
use crate::paint::Color;
use crate::path::PathOp;
use crate::surface::{Font, Shadow, TextAlign, TextBaseline};

/// Stroke of the current path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub color: Color,
    pub width: f32,
    pub shadow: Shadow,
}

/// Fill of the current path.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub color: Color,
    pub shadow: Shadow,
}

/// Single text placement.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Anchor in device space (after the surface transform).
    pub at: Point,
    /// Rotation of the text run in radians, taken from the surface transform.
    pub rotation: f32,
    pub font: Font,
    pub color: Color,
    pub baseline: TextBaseline,
    pub align: TextAlign,
    pub shadow: Shadow,
}

/// Cleared rectangle, in local space under `transform`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearCmd {
    pub rect: Rect,
    pub transform: Transform,
}

/// Surface-agnostic draw command stream.
///
/// Path points are stored in device space: the transform in effect when the
/// step was issued has already been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    BeginPath,
    Path(PathOp),
    Stroke(StrokeCmd),
    Fill(FillCmd),
    Text(TextCmd),
    ClearRect(ClearCmd),
}
