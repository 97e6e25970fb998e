//! Color representation used by the button style and animations.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color with 8-bit alpha, red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgbColor {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ArgbColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Unpack a `0xAARRGGBB` integer.
    pub const fn from_argb32(value: u32) -> Self {
        Self::new(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    /// Pack into a `0xAARRGGBB` integer.
    pub const fn to_argb32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl From<ArgbColor> for Color {
    fn from(color: ArgbColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl From<Color> for ArgbColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.a, rgba.r, rgba.g, rgba.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb32_packing() {
        let color = ArgbColor::from_argb32(0x80FF4020);
        assert_eq!(color, ArgbColor::new(0x80, 0xFF, 0x40, 0x20));
        assert_eq!(color.to_argb32(), 0x80FF4020);
    }

    #[test]
    fn test_peniko_conversion_keeps_channels() {
        let color = ArgbColor::new(200, 10, 20, 30);
        let back: ArgbColor = Color::from(color).into();
        assert_eq!(back, color);
    }
}
