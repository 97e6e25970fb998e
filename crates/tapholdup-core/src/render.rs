//! Pure render step: button state in, draw commands out.

use kurbo::{Circle, Point, Size};

use crate::color::ArgbColor;
use crate::state::ButtonState;
use crate::style::ButtonStyle;

/// Drawing primitive in the button's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Circle outline.
    StrokeCircle {
        circle: Circle,
        width: f64,
        color: ArgbColor,
    },
    /// Filled circle.
    FillCircle { circle: Circle, color: ArgbColor },
}

/// Build the draw commands for a button of `size`.
///
/// Draws the outer ring first, then the inner circle scaled by the current
/// animation state. Returns nothing for an empty size.
pub fn render(style: &ButtonStyle, size: Size, state: &ButtonState) -> Vec<DrawCommand> {
    if size.width <= 0.0 || size.height <= 0.0 {
        return Vec::new();
    }

    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let half = size.width.min(size.height) / 2.0;
    let stroke = style.ring_stroke_width as f64;
    let gap = style.circle_gap as f64;

    let ring_radius = (half - stroke / 2.0).max(0.0);
    let inner_radius = ((half - stroke - gap) * state.scale_percent).max(0.0);

    vec![
        DrawCommand::StrokeCircle {
            circle: Circle::new(center, ring_radius),
            width: stroke,
            color: style.ring_color,
        },
        DrawCommand::FillCircle {
            circle: Circle::new(center, inner_radius),
            color: state.circle_color,
        },
    ]
}
