//! Coordination of the scale and color animations.
//!
//! At most one scale animation runs at a time: a press-in and a release-out
//! never fight over the scale. The color animation runs independently of the
//! scale, and restarting it replaces the one in flight.

use crate::color::ArgbColor;
use crate::state::ButtonState;
use crate::time::{Duration, Instant};
use crate::tween::{Easing, Tween};

/// Which scale animation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAnimationKind {
    /// Shrinks the inner circle when pressed.
    PressIn,
    /// Grows the inner circle back to rest size.
    ReleaseOut,
}

#[derive(Debug, Clone)]
struct ScaleAnimation {
    kind: ScaleAnimationKind,
    tween: Tween<f64>,
}

/// Result of advancing the animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A rendered value changed.
    pub changed: bool,
    /// When the press-in animation ended, if it ended on this tick.
    pub press_in_finished_at: Option<Instant>,
}

/// Owns the running animations of one button.
#[derive(Debug, Clone)]
pub struct AnimationCoordinator {
    duration: Duration,
    easing: Easing,
    scale: Option<ScaleAnimation>,
    color: Option<Tween<ArgbColor>>,
}

impl AnimationCoordinator {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            scale: None,
            color: None,
        }
    }

    /// The scale animation currently running.
    pub fn active_scale(&self) -> Option<ScaleAnimationKind> {
        self.scale.as_ref().map(|anim| anim.kind)
    }

    pub fn is_color_animating(&self) -> bool {
        self.color.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.scale.is_some() || self.color.is_some()
    }

    /// Start shrinking from `current` to `target`. Rejected while any scale animation runs.
    pub fn start_press_in(&mut self, current: f64, target: f64, now: Instant) -> bool {
        if self.scale.is_some() {
            return false;
        }
        self.start_scale(ScaleAnimationKind::PressIn, current, target, now);
        true
    }

    /// Start growing from `current` back to 1.0.
    ///
    /// Rejected while a press-in runs; the caller chains the release once the
    /// press-in finishes. Also rejected while a release-out already runs.
    pub fn start_release_out(&mut self, current: f64, now: Instant) -> bool {
        if self.scale.is_some() {
            return false;
        }
        self.start_scale(ScaleAnimationKind::ReleaseOut, current, 1.0, now);
        true
    }

    /// Start a color transition, replacing any transition in flight.
    pub fn start_color(&mut self, current: ArgbColor, target: ArgbColor, now: Instant) {
        if self.color.is_some() {
            log::trace!("Replacing in-flight color animation");
        }
        self.color = Some(Tween::new(current, target, now, self.duration, self.easing));
    }

    /// Advance every running animation to `now`, writing into `state`.
    pub fn tick(&mut self, now: Instant, state: &mut ButtonState) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(anim) = &self.scale {
            let (value, finished) = anim.tween.sample(now);
            if value != state.scale_percent {
                state.scale_percent = value;
                outcome.changed = true;
            }
            if finished {
                if anim.kind == ScaleAnimationKind::PressIn {
                    outcome.press_in_finished_at = Some(anim.tween.finishes_at());
                }
                self.scale = None;
            }
        }

        if let Some(tween) = &self.color {
            let (value, finished) = tween.sample(now);
            if value != state.circle_color {
                state.circle_color = value;
                outcome.changed = true;
            }
            if finished {
                self.color = None;
            }
        }

        outcome
    }

    fn start_scale(&mut self, kind: ScaleAnimationKind, from: f64, to: f64, now: Instant) {
        log::trace!("Starting {:?} scale animation {} -> {}", kind, from, to);
        self.scale = Some(ScaleAnimation {
            kind,
            tween: Tween::new(from, to, now, self.duration, self.easing),
        });
    }
}
