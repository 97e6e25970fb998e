//! egui integration for gesture buttons.
//!
//! - **HoldButton**: hosts a [`tapholdup_core::GestureButton`] inside an egui
//!   layout, forwarding pointer input, driving its clock and painting it.

pub mod hold_button;

pub use hold_button::{to_color32, HoldButton};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Default edge length of a hold button.
    pub const HOLD_BUTTON: f32 = 96.0;
}
