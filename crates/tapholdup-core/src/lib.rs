//! TapHoldUp Core Library
//!
//! Toolkit-agnostic logic for a circular button that tells a tap apart from a
//! press-and-hold, animates its feedback and reports gestures to a listener.
//! Hosts feed pointer events and a clock in, and draw the commands that come out.

pub mod animation;
pub mod button;
pub mod color;
pub mod gesture;
pub mod input;
pub mod listener;
pub mod render;
pub mod state;
pub mod style;
pub mod timer;
pub mod tween;

pub use animation::{AnimationCoordinator, ScaleAnimationKind};
pub use button::{ButtonId, GestureButton, ANIMATION_DURATION, LONG_HOLD_DELAY, PRESSED_SCALE};
pub use color::ArgbColor;
pub use gesture::hit_test;
pub use input::PointerEvent;
pub use listener::{ButtonEvent, ButtonListener, EventQueue};
pub use render::{render, DrawCommand};
pub use state::{ButtonState, TouchState};
pub use style::{ButtonStyle, StyleError, StyleResult};
pub use timer::{DeadlineQueue, HoldTimer, Scheduler, TimerToken};
pub use tween::{Easing, Lerp, Tween};

/// Clock types used throughout the crate.
///
/// `web_time` stands in for `std::time` on WASM, where `Instant::now` panics.
pub mod time {
    #[cfg(not(target_arch = "wasm32"))]
    pub use std::time::{Duration, Instant};

    #[cfg(target_arch = "wasm32")]
    pub use web_time::{Duration, Instant};
}
