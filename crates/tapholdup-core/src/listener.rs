//! Notifications sent from a button to its owner.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::button::GestureButton;

/// Gesture notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEvent {
    /// Pointer stayed down past the hold delay.
    LongHoldStart,
    /// A hold ended, by release or by `reset_long_hold`.
    LongHoldEnd,
    /// Pointer was released before the hold delay.
    Click,
}

/// Receiver of button notifications.
///
/// Each completed press produces either `on_click`, or `on_long_hold_start`
/// followed by `on_long_hold_end`.
pub trait ButtonListener {
    fn on_long_hold_start(&mut self, button: &GestureButton) {
        let _ = button;
    }

    fn on_long_hold_end(&mut self, button: &GestureButton) {
        let _ = button;
    }

    fn on_click(&mut self, button: &GestureButton) {
        let _ = button;
    }
}

impl<F> ButtonListener for F
where
    F: FnMut(ButtonEvent, &GestureButton),
{
    fn on_long_hold_start(&mut self, button: &GestureButton) {
        self(ButtonEvent::LongHoldStart, button)
    }

    fn on_long_hold_end(&mut self, button: &GestureButton) {
        self(ButtonEvent::LongHoldEnd, button)
    }

    fn on_click(&mut self, button: &GestureButton) {
        self(ButtonEvent::Click, button)
    }
}

/// Listener that records events for hosts that poll instead of reacting.
///
/// Clones share the same queue, so one clone can be handed to the button
/// while the host keeps another to drain.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Rc<RefCell<VecDeque<ButtonEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every recorded event, oldest first.
    pub fn drain(&self) -> Vec<ButtonEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: ButtonEvent) {
        self.events.borrow_mut().push_back(event);
    }
}

impl ButtonListener for EventQueue {
    fn on_long_hold_start(&mut self, _button: &GestureButton) {
        self.push(ButtonEvent::LongHoldStart);
    }

    fn on_long_hold_end(&mut self, _button: &GestureButton) {
        self.push(ButtonEvent::LongHoldEnd);
    }

    fn on_click(&mut self, _button: &GestureButton) {
        self.push(ButtonEvent::Click);
    }
}
