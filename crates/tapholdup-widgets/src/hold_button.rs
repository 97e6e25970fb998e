//! Hold button widget.

use egui::{vec2, Color32, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};
use kurbo::{Point, Size};
use tapholdup_core::time::Instant;
use tapholdup_core::{ArgbColor, DrawCommand, GestureButton};

use crate::sizing;

/// Convert a button color to an egui color.
pub fn to_color32(color: ArgbColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// egui widget hosting a [`GestureButton`].
///
/// The button keeps its state between frames; the widget only lays it out,
/// forwards primary-pointer presses and releases, advances its clock and
/// paints it. Gesture notifications go to the button's listener.
///
/// egui repaints the whole frame, so the widget never consumes the button's
/// redraw flag.
pub struct HoldButton<'a> {
    button: &'a mut GestureButton,
    size: Vec2,
}

impl<'a> HoldButton<'a> {
    /// Create a new hold button widget.
    pub fn new(button: &'a mut GestureButton) -> Self {
        Self {
            button,
            size: vec2(sizing::HOLD_BUTTON, sizing::HOLD_BUTTON),
        }
    }

    /// Set the widget size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the button.
    pub fn show(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click_and_drag());
        let button = self.button;
        button.set_size(Size::new(rect.width() as f64, rect.height() as f64));

        let now = Instant::now();
        let (pressed, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });

        if pressed {
            if let Some(pos) = pointer.filter(|pos| rect.contains(*pos)) {
                button.pointer_down(to_local(rect, pos), now);
            }
        }
        if released {
            // The release may land anywhere; the button only needs to know it happened.
            let local = pointer.map(|pos| to_local(rect, pos)).unwrap_or(Point::ZERO);
            button.pointer_up(local, now);
        }

        button.advance(now);

        if ui.is_rect_visible(rect) {
            paint(ui, rect, &button.render());
        }

        if let Some(deadline) = button.next_wakeup(now) {
            ui.ctx()
                .request_repaint_after(deadline.saturating_duration_since(now));
        }

        response
    }
}

fn to_local(rect: Rect, pos: Pos2) -> Point {
    let offset = pos - rect.min;
    Point::new(offset.x as f64, offset.y as f64)
}

fn to_screen(rect: Rect, point: Point) -> Pos2 {
    rect.min + vec2(point.x as f32, point.y as f32)
}

fn paint(ui: &Ui, rect: Rect, commands: &[DrawCommand]) {
    let painter = ui.painter();
    for command in commands {
        match *command {
            DrawCommand::StrokeCircle { circle, width, color } => {
                painter.circle_stroke(
                    to_screen(rect, circle.center),
                    circle.radius as f32,
                    Stroke::new(width as f32, to_color32(color)),
                );
            }
            DrawCommand::FillCircle { circle, color } => {
                painter.circle_filled(
                    to_screen(rect, circle.center),
                    circle.radius as f32,
                    to_color32(color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapholdup_core::{ButtonEvent, ButtonStyle, EventQueue, TouchState};

    fn run_frame(ctx: &egui::Context, button: &mut GestureButton, events: Vec<egui::Event>) -> Rect {
        let mut rect = Rect::NOTHING;
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = HoldButton::new(&mut *button).size(vec2(100.0, 100.0)).show(ui).rect;
            });
        });
        rect
    }

    fn primary(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_to_color32() {
        let color = to_color32(ArgbColor::rgb(10, 20, 30));
        assert_eq!(color, Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_local_coordinates_round_trip() {
        let rect = Rect::from_min_size(Pos2::new(40.0, 60.0), vec2(100.0, 100.0));
        let local = to_local(rect, Pos2::new(90.0, 110.0));
        assert_eq!(local, Point::new(50.0, 50.0));
        assert_eq!(to_screen(rect, local), Pos2::new(90.0, 110.0));
    }

    #[test]
    fn test_press_and_release_clicks() {
        let ctx = egui::Context::default();
        let mut button = GestureButton::new(ButtonStyle::default());
        let events = EventQueue::new();
        button.set_listener(events.clone());

        let rect = run_frame(&ctx, &mut button, Vec::new());
        assert_eq!(button.size(), Size::new(100.0, 100.0));

        let center = rect.center();
        run_frame(
            &ctx,
            &mut button,
            vec![egui::Event::PointerMoved(center), primary(center, true)],
        );
        assert_eq!(button.state().touch, TouchState::Pressed);

        run_frame(&ctx, &mut button, vec![primary(center, false)]);
        assert_eq!(button.state().touch, TouchState::Idle);
        assert_eq!(events.drain(), vec![ButtonEvent::Click]);
    }

    #[test]
    fn test_press_leaves_redraw_flag_set() {
        let ctx = egui::Context::default();
        let mut button = GestureButton::new(ButtonStyle::default());

        let rect = run_frame(&ctx, &mut button, Vec::new());
        button.take_redraw();
        let center = rect.center();
        run_frame(
            &ctx,
            &mut button,
            vec![egui::Event::PointerMoved(center), primary(center, true)],
        );
        assert!(button.take_redraw());
    }

    #[test]
    fn test_press_outside_ignored() {
        let ctx = egui::Context::default();
        let mut button = GestureButton::new(ButtonStyle::default());

        let rect = run_frame(&ctx, &mut button, Vec::new());
        let outside = rect.max + vec2(50.0, 50.0);
        run_frame(
            &ctx,
            &mut button,
            vec![egui::Event::PointerMoved(outside), primary(outside, true)],
        );
        assert_eq!(button.state().touch, TouchState::Idle);
    }
}
