//! Renderer trait abstraction.

use kurbo::{Affine, Point};
use peniko::Color;
use tapholdup_core::{DrawCommand, GestureButton};

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The button to render.
    pub button: &'a GestureButton,
    /// Where the button's local origin lands in the scene.
    pub origin: Point,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Color filling the button's bounding box before drawing, if any.
    pub background_color: Option<Color>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context with the button at the scene origin.
    pub fn new(button: &'a GestureButton) -> Self {
        Self {
            button,
            origin: Point::ZERO,
            scale_factor: 1.0,
            background_color: None,
        }
    }

    /// Place the button's top-left corner at `origin`.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Transform from button-local coordinates to device pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor) * Affine::translate(self.origin.to_vec2())
    }

    /// Draw commands for the button's current state.
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.button.render()
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene for a frame from the button's draw commands.
    fn build_scene(&mut self, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use tapholdup_core::ButtonStyle;

    #[test]
    fn test_transform_places_and_scales() {
        let button = GestureButton::new(ButtonStyle::default());
        let ctx = RenderContext::new(&button)
            .with_origin(Point::new(10.0, 20.0))
            .with_scale_factor(2.0);
        let mapped = ctx.transform() * Point::new(5.0, 5.0);
        assert_eq!(mapped, Point::new(30.0, 50.0));
    }

    #[test]
    fn test_commands_follow_button_size() {
        let mut button = GestureButton::new(ButtonStyle::default());
        let ctx = RenderContext::new(&button);
        assert!(ctx.commands().is_empty());

        button.set_size(Size::new(120.0, 120.0));
        let ctx = RenderContext::new(&button);
        assert_eq!(ctx.commands().len(), 2);
    }
}
