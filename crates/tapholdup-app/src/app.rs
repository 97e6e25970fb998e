//! Replays gesture scripts against a button on a simulated frame clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tapholdup_core::time::Instant;
use tapholdup_core::{ButtonEvent, ButtonListener, GestureButton};

use crate::script::{GestureScript, ScriptAction};

/// Demo configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Time between simulated frames.
    pub frame_interval: Duration,
    /// How long to keep running after the last step so animations settle.
    pub settle_time: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            settle_time: Duration::from_millis(500),
        }
    }
}

/// Text label driven by button notifications, plus the events that set it.
#[derive(Debug, Clone, Default)]
pub struct StatusLabel {
    inner: Rc<RefCell<StatusInner>>,
}

#[derive(Debug, Default)]
struct StatusInner {
    text: String,
    history: Vec<ButtonEvent>,
}

impl StatusLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    pub fn history(&self) -> Vec<ButtonEvent> {
        self.inner.borrow().history.clone()
    }

    fn set(&self, event: ButtonEvent, text: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.text = text.to_string();
        inner.history.push(event);
    }
}

impl ButtonListener for StatusLabel {
    fn on_long_hold_start(&mut self, _button: &GestureButton) {
        self.set(ButtonEvent::LongHoldStart, "on long click start");
    }

    fn on_long_hold_end(&mut self, _button: &GestureButton) {
        self.set(ButtonEvent::LongHoldEnd, "on long click end");
    }

    fn on_click(&mut self, _button: &GestureButton) {
        self.set(ButtonEvent::Click, "on click");
    }
}

/// Outcome of replaying one script.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    /// Final label text.
    pub status: String,
    /// Notifications in the order they fired.
    pub events: Vec<ButtonEvent>,
    /// Frames on which the button needed a redraw.
    pub redraws: usize,
    /// Smallest inner-circle scale seen on any frame.
    pub min_scale: f64,
    /// Inner-circle scale after the button settled.
    pub final_scale: f64,
}

/// Demo application.
#[derive(Debug, Default)]
pub struct App {
    config: AppConfig,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run `script` against a fresh button.
    pub fn replay(&self, script: &GestureScript) -> ReplayReport {
        let mut button = GestureButton::new(script.style);
        button.set_size(script.size);
        let label = StatusLabel::new();
        button.set_listener(label.clone());

        let start = Instant::now();
        let end = script.duration() + self.config.settle_time;
        let frame = self.config.frame_interval.max(Duration::from_millis(1));
        let mut steps = script.steps.iter().peekable();
        let mut elapsed = Duration::ZERO;
        let mut redraws = 0;
        let mut min_scale = button.state().scale_percent;

        loop {
            while let Some(step) = steps.next_if(|step| step.at() <= elapsed) {
                let at = start + step.at();
                // Deadlines falling between the last frame and the step come first.
                button.advance(at);
                log::debug!("{:?}ms: {:?}", step.at_ms, step.action);
                match step.action {
                    ScriptAction::Pointer { event } => {
                        button.handle_pointer_event(event, at);
                    }
                    ScriptAction::ResetLongHold => button.reset_long_hold(at),
                    ScriptAction::EnableLongHold { enabled } => button.enable_long_hold(enabled),
                }
            }

            button.advance(start + elapsed);
            if button.take_redraw() {
                redraws += 1;
                min_scale = min_scale.min(button.state().scale_percent);
            }

            if elapsed >= end {
                break;
            }
            elapsed = (elapsed + frame).min(end);
        }

        ReplayReport {
            status: label.text(),
            events: label.history(),
            redraws,
            min_scale,
            final_scale: button.state().scale_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapholdup_core::PRESSED_SCALE;

    #[test]
    fn test_tap_replay() {
        let report = App::new().replay(&GestureScript::tap());
        assert_eq!(report.status, "on click");
        assert_eq!(report.events, vec![ButtonEvent::Click]);
        assert!((report.min_scale - PRESSED_SCALE).abs() < 1e-9);
        assert_eq!(report.final_scale, 1.0);
        assert!(report.redraws > 2);
    }

    #[test]
    fn test_long_hold_replay() {
        let report = App::new().replay(&GestureScript::long_hold());
        assert_eq!(report.status, "on long click end");
        assert_eq!(
            report.events,
            vec![ButtonEvent::LongHoldStart, ButtonEvent::LongHoldEnd]
        );
        assert_eq!(report.final_scale, 1.0);
    }

    #[test]
    fn test_disabled_hold_replays_as_click() {
        let json = r#"{ "steps": [
            { "at_ms": 0, "action": "pointer", "event": { "type": "down", "position": { "x": 100.0, "y": 100.0 } } },
            { "at_ms": 400, "action": "enable_long_hold", "enabled": false },
            { "at_ms": 1200, "action": "pointer", "event": { "type": "up", "position": { "x": 100.0, "y": 100.0 } } }
        ] }"#;
        let script = GestureScript::from_json(json).unwrap();
        let report = App::new().replay(&script);
        assert_eq!(report.events, vec![ButtonEvent::Click]);
    }

    #[test]
    fn test_off_frame_release_after_hold_delay() {
        let json = r#"{ "steps": [
            { "at_ms": 10, "action": "pointer", "event": { "type": "down", "position": { "x": 100.0, "y": 100.0 } } },
            { "at_ms": 812, "action": "pointer", "event": { "type": "up", "position": { "x": 100.0, "y": 100.0 } } }
        ] }"#;
        let script = GestureScript::from_json(json).unwrap();
        let report = App::new().replay(&script);
        assert_eq!(
            report.events,
            vec![ButtonEvent::LongHoldStart, ButtonEvent::LongHoldEnd]
        );
    }

    #[test]
    fn test_disable_after_hold_started_keeps_hold() {
        let json = r#"{ "steps": [
            { "at_ms": 10, "action": "pointer", "event": { "type": "down", "position": { "x": 100.0, "y": 100.0 } } },
            { "at_ms": 812, "action": "enable_long_hold", "enabled": false },
            { "at_ms": 900, "action": "pointer", "event": { "type": "up", "position": { "x": 100.0, "y": 100.0 } } }
        ] }"#;
        let script = GestureScript::from_json(json).unwrap();
        let report = App::new().replay(&script);
        assert_eq!(report.status, "on long click end");
        assert_eq!(
            report.events,
            vec![ButtonEvent::LongHoldStart, ButtonEvent::LongHoldEnd]
        );
    }

    #[test]
    fn test_reset_swallows_release() {
        let json = r#"{ "steps": [
            { "at_ms": 0, "action": "pointer", "event": { "type": "down", "position": { "x": 100.0, "y": 100.0 } } },
            { "at_ms": 1000, "action": "reset_long_hold" },
            { "at_ms": 1100, "action": "pointer", "event": { "type": "up", "position": { "x": 100.0, "y": 100.0 } } }
        ] }"#;
        let script = GestureScript::from_json(json).unwrap();
        let report = App::new().replay(&script);
        assert_eq!(report.status, "on long click end");
        assert_eq!(
            report.events,
            vec![ButtonEvent::LongHoldStart, ButtonEvent::LongHoldEnd]
        );
    }

    #[test]
    fn test_press_outside_does_nothing() {
        let json = r#"{ "steps": [
            { "at_ms": 0, "action": "pointer", "event": { "type": "down", "position": { "x": 1.0, "y": 1.0 } } },
            { "at_ms": 100, "action": "pointer", "event": { "type": "up", "position": { "x": 1.0, "y": 1.0 } } }
        ] }"#;
        let script = GestureScript::from_json(json).unwrap();
        let report = App::new().replay(&script);
        assert!(report.events.is_empty());
        assert_eq!(report.status, "");
        assert_eq!(report.min_scale, 1.0);
    }
}
