//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, Point, Rect, Stroke};
use peniko::{Color, Fill};
use tapholdup_core::DrawCommand;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
#[derive(Default)]
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn draw_command(&mut self, command: &DrawCommand, transform: Affine) {
        match *command {
            DrawCommand::StrokeCircle { circle, width, color } => {
                let stroke = Stroke::new(width);
                self.scene
                    .stroke(&stroke, transform, Color::from(color), None, &circle);
            }
            DrawCommand::FillCircle { circle, color } => {
                if circle.radius <= 0.0 {
                    return;
                }
                self.scene
                    .fill(Fill::NonZero, transform, Color::from(color), None, &circle);
            }
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        let transform = ctx.transform();

        if let Some(background) = ctx.background_color {
            let bounds = Rect::from_origin_size(Point::ZERO, ctx.button.size());
            self.scene
                .fill(Fill::NonZero, transform, background, None, &bounds);
        }

        for command in ctx.commands() {
            self.draw_command(&command, transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use tapholdup_core::{ButtonStyle, GestureButton};

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_unsized_button_draws_nothing() {
        let mut renderer = VelloRenderer::new();
        let button = GestureButton::new(ButtonStyle::default());
        renderer.build_scene(&RenderContext::new(&button));
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_button() {
        let mut renderer = VelloRenderer::new();
        let mut button = GestureButton::new(ButtonStyle::default());
        button.set_size(Size::new(160.0, 160.0));

        let ctx = RenderContext::new(&button)
            .with_origin(Point::new(20.0, 20.0))
            .with_background(Some(Color::from_rgba8(30, 30, 30, 255)));
        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());

        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }
}
