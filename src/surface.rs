//! [`Renderer`] on top of a ggez context.

use ggez::graphics::{self, Color, DrawMode, DrawParam, Font, Text};
use ggez::nalgebra::Point2;
use ggez::{Context, GameResult};

use crate::render::Renderer;
use crate::ui::{Hud, UiWrapper};

pub struct GgezSurface<'a> {
    ctx: &'a mut Context,
    font: Font,
    background: Color,
    overlay: Option<(&'a mut UiWrapper, Hud)>,
}

impl<'a> GgezSurface<'a> {
    pub fn new(ctx: &'a mut Context, font: Font) -> Self {
        GgezSurface {
            ctx,
            font,
            background: graphics::BLACK,
            overlay: None,
        }
    }

    /// Draws the imgui overlay on top of the frame just before it is
    /// presented.
    pub fn with_overlay(mut self, ui: &'a mut UiWrapper, hud: Hud) -> Self {
        self.overlay = Some((ui, hud));
        self
    }
}

impl<'a> Renderer for GgezSurface<'a> {
    fn end_frame(&mut self) -> GameResult<()> {
        if let Some((ui, hud)) = self.overlay.as_mut() {
            ui.update_ui(self.ctx, hud)?;
        }
        graphics::present(self.ctx)
    }

    fn clear_frame(&mut self) -> GameResult<()> {
        graphics::clear(self.ctx, self.background);
        Ok(())
    }

    fn draw_filled_circle(&mut self, center: Point2<f32>, radius: f32, color: Color) -> GameResult<()> {
        // Destroyed bodies may have been shrunk to nothing
        if radius <= 0.0 {
            return Ok(());
        }
        let circle = graphics::Mesh::new_circle(self.ctx, DrawMode::fill(), center, radius, 0.1, color)?;
        graphics::draw(self.ctx, &circle, DrawParam::default())
    }

    fn draw_line_segment(
        &mut self,
        from: Point2<f32>,
        to: Point2<f32>,
        thickness: f32,
        color: Color,
    ) -> GameResult<()> {
        self.draw_polyline(&[from, to], thickness, color)
    }

    fn draw_text(&mut self, text: &str, pos: Point2<f32>, font_size: f32, color: Color) -> GameResult<()> {
        let text = Text::new((text.to_string(), self.font, font_size));
        graphics::draw(self.ctx, &text, DrawParam::default().dest(pos).color(color))
    }

    fn draw_polyline(&mut self, points: &[Point2<f32>], thickness: f32, color: Color) -> GameResult<()> {
        // lyon cannot stroke zero-length segments
        let mut deduped: Vec<Point2<f32>> = Vec::with_capacity(points.len());
        for p in points {
            if deduped.last() != Some(p) {
                deduped.push(*p);
            }
        }
        if deduped.len() < 2 {
            return Ok(());
        }
        let line = graphics::Mesh::new_line(self.ctx, &deduped, thickness, color)?;
        graphics::draw(self.ctx, &line, DrawParam::default())
    }

    fn should_close(&self) -> bool {
        !self.ctx.continuing
    }
}
