//! Mutable state of a single button.

use crate::color::ArgbColor;

/// Touch state of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchState {
    /// No press in progress.
    #[default]
    Idle,
    /// Pointer is down inside the button.
    Pressed,
    /// Pointer stayed down past the hold delay.
    Held,
}

/// Render-relevant state owned by one button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonState {
    /// Current touch state.
    pub touch: TouchState,
    /// Scale of the inner circle relative to its rest size.
    pub scale_percent: f64,
    /// Current (possibly mid-animation) fill color of the inner circle.
    pub circle_color: ArgbColor,
}

impl ButtonState {
    pub fn new(circle_color: ArgbColor) -> Self {
        Self {
            touch: TouchState::Idle,
            scale_percent: 1.0,
            circle_color,
        }
    }

    /// True between a pointer-down and the matching up.
    pub fn pointer_down(&self) -> bool {
        matches!(self.touch, TouchState::Pressed | TouchState::Held)
    }

    /// True once the hold delay elapsed while the pointer is still down.
    pub fn hold_active(&self) -> bool {
        self.touch == TouchState::Held
    }
}
