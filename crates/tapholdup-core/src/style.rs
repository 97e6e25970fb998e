//! Button style attributes.

use crate::color::ArgbColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default ring stroke width in pixels.
pub const DEFAULT_RING_STROKE_WIDTH: u32 = 20;
/// Default gap between the ring and the inner circle in pixels.
pub const DEFAULT_CIRCLE_GAP: u32 = 10;

/// Style errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Ring stroke width must be positive")]
    InvalidStrokeWidth,
    #[error("Style parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

/// Visual configuration of a button, fixed once the button is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Width of the outer ring stroke in pixels.
    pub ring_stroke_width: u32,
    /// Color of the outer ring.
    pub ring_color: ArgbColor,
    /// Fill color of the inner circle at rest.
    pub circle_color: ArgbColor,
    /// Fill color of the inner circle while held.
    pub circle_color_on_hold: ArgbColor,
    /// Space between the ring and the inner circle in pixels.
    pub circle_gap: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            ring_stroke_width: DEFAULT_RING_STROKE_WIDTH,
            ring_color: ArgbColor::WHITE,
            circle_color: ArgbColor::RED,
            circle_color_on_hold: ArgbColor::RED,
            circle_gap: DEFAULT_CIRCLE_GAP,
        }
    }
}

impl ButtonStyle {
    /// Parse a style from JSON. Missing attributes keep their defaults.
    pub fn from_json(json: &str) -> StyleResult<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Check the attribute ranges.
    pub fn validate(&self) -> StyleResult<()> {
        if self.ring_stroke_width == 0 {
            return Err(StyleError::InvalidStrokeWidth);
        }
        Ok(())
    }

    pub fn with_ring_stroke_width(mut self, width: u32) -> Self {
        self.ring_stroke_width = width;
        self
    }

    pub fn with_ring_color(mut self, color: ArgbColor) -> Self {
        self.ring_color = color;
        self
    }

    pub fn with_circle_color(mut self, color: ArgbColor) -> Self {
        self.circle_color = color;
        self
    }

    pub fn with_circle_color_on_hold(mut self, color: ArgbColor) -> Self {
        self.circle_color_on_hold = color;
        self
    }

    pub fn with_circle_gap(mut self, gap: u32) -> Self {
        self.circle_gap = gap;
        self
    }
}
