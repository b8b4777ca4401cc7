use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Straight-alpha sRGB color.
///
/// Channels are bytes, alpha is a fraction in `[0, 1]`, matching CSS
/// `rgba(r, g, b, a)` notation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a byte, clamped to `[0, 255]`.
    #[inline]
    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.alpha_u8()]
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.alpha_u8() == 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Error returned when a color string is not understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color `{0}`")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` and the
    /// handful of names the table scene uses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let src = s.trim();
        let err = || ColorParseError(s.to_string());

        if let Some(hex) = src.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(err);
        }

        let lower = src.to_ascii_lowercase();
        if let Some(args) = lower.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            let [r, g, b, a] = parts.as_slice() else {
                return Err(err());
            };
            let a: f32 = a.parse().map_err(|_| err())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(err());
            }
            return Ok(Color::rgba(channel(r).ok_or_else(err)?, channel(g).ok_or_else(err)?, channel(b).ok_or_else(err)?, a));
        }
        if let Some(args) = lower.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            let [r, g, b] = parts.as_slice() else {
                return Err(err());
            };
            return Ok(Color::rgb(channel(r).ok_or_else(err)?, channel(g).ok_or_else(err)?, channel(b).ok_or_else(err)?));
        }

        match lower.as_str() {
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::RED),
            "green" => Ok(Color::GREEN),
            "transparent" => Ok(Color::TRANSPARENT),
            _ => Err(err()),
        }
    }
}

fn channel(s: &str) -> Option<u8> {
    s.parse::<u8>().ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(Color::rgb(out[0], out[1], out[2]))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_nibbles() {
        assert_eq!("#000".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
    }

    #[test]
    fn long_hex() {
        assert_eq!("#2f2f2e".parse::<Color>().unwrap(), Color::rgb(47, 47, 46));
    }

    #[test]
    fn css_rgba_with_fractional_alpha() {
        let c: Color = "rgba(70, 99, 13, 0.8)".parse().unwrap();
        assert_eq!(c, Color::rgba(70, 99, 13, 0.8));
        assert_eq!(c.alpha_u8(), 204);
    }

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!("Black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("Red".parse::<Color>().unwrap(), Color::RED);
    }

    #[test]
    fn rejects_garbage() {
        assert!("rgba(1, 2, 3)".parse::<Color>().is_err());
        assert!("rgb(300, 0, 0)".parse::<Color>().is_err());
        assert!("#12".parse::<Color>().is_err());
        assert!("mauve".parse::<Color>().is_err());
    }

    #[test]
    fn display_is_css() {
        assert_eq!(Color::rgba(200, 0, 0, 1.0).to_string(), "rgba(200, 0, 0, 1)");
    }
}
