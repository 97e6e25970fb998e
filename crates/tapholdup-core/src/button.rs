//! The gesture button: touch state machine wired to the hold timer,
//! animations and listener.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::animation::{AnimationCoordinator, ScaleAnimationKind};
use crate::gesture::hit_test;
use crate::input::PointerEvent;
use crate::listener::{ButtonEvent, ButtonListener};
use crate::render::{render, DrawCommand};
use crate::state::{ButtonState, TouchState};
use crate::style::ButtonStyle;
use crate::time::{Duration, Instant};
use crate::timer::{DeadlineQueue, HoldTimer, Scheduler, TimerToken};
use crate::tween::Easing;

/// How long the pointer must stay down before a press becomes a hold.
pub const LONG_HOLD_DELAY: Duration = Duration::from_millis(800);
/// Duration of every scale and color animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(150);
/// Inner circle scale while pressed.
pub const PRESSED_SCALE: f64 = 0.8;

/// Unique identifier of a button instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonId(Uuid);

impl ButtonId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Circular button distinguishing tap, press-and-hold and release after hold.
///
/// All methods are synchronous and expect to be called from the host's event
/// loop. The host forwards pointer events, calls [`advance`](Self::advance)
/// whenever [`next_wakeup`](Self::next_wakeup) says so, and redraws from
/// [`render`](Self::render) after [`take_redraw`](Self::take_redraw) reports a change.
pub struct GestureButton {
    id: ButtonId,
    style: ButtonStyle,
    size: Size,
    state: ButtonState,
    long_hold_enabled: bool,
    animations: AnimationCoordinator,
    timer: HoldTimer,
    scheduler: Box<dyn Scheduler>,
    listener: Option<Box<dyn ButtonListener>>,
    needs_redraw: bool,
}

impl GestureButton {
    /// Create a button driven by an in-process [`DeadlineQueue`].
    pub fn new(style: ButtonStyle) -> Self {
        Self::with_scheduler(style, Box::new(DeadlineQueue::new()))
    }

    /// Create a button with a host-provided scheduler.
    pub fn with_scheduler(style: ButtonStyle, scheduler: Box<dyn Scheduler>) -> Self {
        Self {
            id: ButtonId::new(),
            style,
            size: Size::ZERO,
            state: ButtonState::new(style.circle_color),
            long_hold_enabled: true,
            animations: AnimationCoordinator::new(ANIMATION_DURATION, Easing::Decelerate),
            timer: HoldTimer::new(),
            scheduler,
            listener: None,
            needs_redraw: true,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn state(&self) -> &ButtonState {
        &self.state
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Scale animation currently running, if any.
    pub fn active_scale_animation(&self) -> Option<ScaleAnimationKind> {
        self.animations.active_scale()
    }

    pub fn is_color_animating(&self) -> bool {
        self.animations.is_color_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.animations.is_animating()
    }

    pub fn is_long_hold_enabled(&self) -> bool {
        self.long_hold_enabled
    }

    /// Set the laid-out size of the button.
    pub fn set_size(&mut self, size: Size) {
        if self.size != size {
            self.size = size;
            self.needs_redraw = true;
        }
    }

    /// Install the listener that receives gesture notifications.
    pub fn set_listener(&mut self, listener: impl ButtonListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Enable or disable hold detection.
    ///
    /// Disabling takes effect for a press already in progress if its hold
    /// delay has not elapsed yet.
    pub fn enable_long_hold(&mut self, enable: bool) {
        self.long_hold_enabled = enable;
    }

    /// Dispatch a pointer event. Returns true if the button consumed it.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, now: Instant) -> bool {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position, now),
            PointerEvent::Up { position } => self.pointer_up(position, now),
            PointerEvent::Move { .. } => false,
        }
    }

    /// Pointer went down at `position` (local coordinates).
    ///
    /// Ignored outside the hit region and while a press is already in progress.
    pub fn pointer_down(&mut self, position: Point, now: Instant) -> bool {
        self.advance(now);
        if self.state.touch != TouchState::Idle {
            log::trace!("Button {}: ignoring down during press", self.id);
            return false;
        }
        if !hit_test(self.size, position) {
            log::trace!("Button {}: down at {:?} outside hit region", self.id, position);
            return false;
        }

        log::debug!("Button {}: pressed", self.id);
        self.state.touch = TouchState::Pressed;
        self.timer.arm(self.scheduler.as_mut(), now, LONG_HOLD_DELAY);
        self.animations
            .start_press_in(self.state.scale_percent, PRESSED_SCALE, now);
        self.needs_redraw = true;
        true
    }

    /// Pointer went up. Ignored unless a press is in progress.
    pub fn pointer_up(&mut self, _position: Point, now: Instant) -> bool {
        self.advance(now);
        let was_held = match self.state.touch {
            TouchState::Idle => {
                log::trace!("Button {}: ignoring up without press", self.id);
                return false;
            }
            TouchState::Pressed => false,
            TouchState::Held => true,
        };

        self.state.touch = TouchState::Idle;
        self.timer.cancel(self.scheduler.as_mut());
        self.start_release_out(now);

        if was_held {
            self.end_long_hold(now);
        } else {
            log::debug!("Button {}: click", self.id);
            self.emit(ButtonEvent::Click);
        }
        true
    }

    /// Force-end an in-progress hold as if the pointer were released.
    ///
    /// No-op unless the button is currently held. The physical release that
    /// follows is ignored.
    pub fn reset_long_hold(&mut self, now: Instant) {
        self.advance(now);
        if !self.state.hold_active() {
            return;
        }

        log::debug!("Button {}: hold reset", self.id);
        self.state.touch = TouchState::Idle;
        self.timer.cancel(self.scheduler.as_mut());
        self.start_release_out(now);
        self.end_long_hold(now);
    }

    /// Fire due timers and advance animations to `now`.
    ///
    /// The pointer methods and [`reset_long_hold`](Self::reset_long_hold)
    /// call this first, so an input never overtakes a hold deadline that
    /// already passed.
    pub fn advance(&mut self, now: Instant) {
        self.fire_due_timers(now);

        loop {
            let outcome = self.animations.tick(now, &mut self.state);
            if outcome.changed {
                self.needs_redraw = true;
            }
            // A release-out waiting on the press-in starts where the press-in
            // ended, then gets ticked up to `now`.
            match outcome.press_in_finished_at {
                Some(ended) if !self.state.pointer_down() => self.start_release_out(ended),
                _ => break,
            }
        }
    }

    /// When the host must call [`advance`](Self::advance) next.
    ///
    /// `now` while animating, the pending hold deadline otherwise, `None` when idle.
    pub fn next_wakeup(&self, now: Instant) -> Option<Instant> {
        if self.animations.is_animating() {
            return Some(now);
        }
        self.scheduler.next_deadline()
    }

    /// Whether something visible changed since the last call. Clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Draw commands for the current state.
    pub fn render(&self) -> Vec<DrawCommand> {
        render(&self.style, self.size, &self.state)
    }

    fn fire_due_timers(&mut self, now: Instant) {
        for token in self.scheduler.poll_due(now) {
            self.on_hold_timer(token, now);
        }
    }

    fn on_hold_timer(&mut self, token: TimerToken, now: Instant) {
        if !self.timer.accept(token) {
            log::trace!("Button {}: stale hold timer {:?}", self.id, token);
            return;
        }
        if !self.long_hold_enabled {
            log::trace!("Button {}: hold detection disabled", self.id);
            return;
        }
        if self.state.touch != TouchState::Pressed {
            return;
        }

        log::debug!("Button {}: hold started", self.id);
        self.state.touch = TouchState::Held;
        self.animations.start_color(
            self.state.circle_color,
            self.style.circle_color_on_hold,
            now,
        );
        self.needs_redraw = true;
        self.emit(ButtonEvent::LongHoldStart);
    }

    fn end_long_hold(&mut self, now: Instant) {
        log::debug!("Button {}: hold ended", self.id);
        self.animations
            .start_color(self.state.circle_color, self.style.circle_color, now);
        self.needs_redraw = true;
        self.emit(ButtonEvent::LongHoldEnd);
    }

    fn start_release_out(&mut self, now: Instant) {
        if self.animations.start_release_out(self.state.scale_percent, now) {
            self.needs_redraw = true;
        }
    }

    fn emit(&mut self, event: ButtonEvent) {
        // Taken out for the call so the listener can borrow the button.
        let Some(mut listener) = self.listener.take() else {
            return;
        };
        match event {
            ButtonEvent::LongHoldStart => listener.on_long_hold_start(self),
            ButtonEvent::LongHoldEnd => listener.on_long_hold_end(self),
            ButtonEvent::Click => listener.on_click(self),
        }
        self.listener = Some(listener);
    }
}

impl Drop for GestureButton {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
    }
}

impl std::fmt::Debug for GestureButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureButton")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("long_hold_enabled", &self.long_hold_enabled)
            .finish_non_exhaustive()
    }
}
