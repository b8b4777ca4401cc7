use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::coords::Transform;
use crate::paint::Color;

/// Vertical text anchor.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Horizontal text anchor.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font request: pixel size plus family name, CSS shorthand `"18px serif"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size_px: f32,
    pub family: String,
}

impl Font {
    pub fn new(size_px: f32, family: impl Into<String>) -> Self {
        Self { size_px, family: family.into() }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(10.0, "sans-serif")
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size_px, self.family)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("font must look like `<size>px <family>`, got `{0}`")]
pub struct FontParseError(pub String);

impl FromStr for Font {
    type Err = FontParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || FontParseError(s.to_string());
        let (size, family) = s.trim().split_once(char::is_whitespace).ok_or_else(err)?;
        let size_px: f32 = size.strip_suffix("px").ok_or_else(err)?.parse().map_err(|_| err())?;
        let family = family.trim();
        if size_px <= 0.0 || !size_px.is_finite() || family.is_empty() {
            return Err(err());
        }
        Ok(Font::new(size_px, family))
    }
}

/// Drop shadow applied to every draw while set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

impl Shadow {
    #[inline]
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self { offset_x, offset_y, blur, color }
    }

    /// Canvas default: transparent black, no offset, no blur.
    #[inline]
    pub const fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, Color::TRANSPARENT)
    }

    /// Same color with zero offset and blur: the reset state after a shadowed draw.
    #[inline]
    pub const fn cleared(self) -> Self {
        Self::new(0.0, 0.0, 0.0, self.color)
    }

    #[inline]
    pub fn is_cleared(self) -> bool {
        self.offset_x == 0.0 && self.offset_y == 0.0 && self.blur == 0.0
    }

    /// A shadow paints only when it has a color and is displaced or blurred.
    #[inline]
    pub fn is_visible(self) -> bool {
        !self.color.is_transparent() && !self.is_cleared()
    }
}

/// Style state carried by a surface between draws.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub stroke_color: Color,
    pub line_width: f32,
    pub fill_color: Color,
    pub font: Font,
    pub text_baseline: TextBaseline,
    pub text_align: TextAlign,
    pub shadow: Shadow,
    pub transform: Transform,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            line_width: 1.0,
            fill_color: Color::BLACK,
            font: Font::default(),
            text_baseline: TextBaseline::default(),
            text_align: TextAlign::default(),
            shadow: Shadow::none(),
            transform: Transform::identity(),
        }
    }
}
