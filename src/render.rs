//! The drawing surface the simulation talks to, and the projection from
//! simulation space onto it.

use ggez::graphics::Color;
use ggez::nalgebra::Point2;
use ggez::GameResult;

use crate::config::SimConfig;

/// Something that can show a frame of the simulation.
///
/// Coordinates are screen pixels. `begin_frame`/`end_frame` bracket every
/// frame; `should_close` is polled once per iteration of the frame loop.
pub trait Renderer {
    fn begin_frame(&mut self) -> GameResult<()> {
        Ok(())
    }

    fn end_frame(&mut self) -> GameResult<()> {
        Ok(())
    }

    fn clear_frame(&mut self) -> GameResult<()>;

    fn draw_filled_circle(&mut self, center: Point2<f32>, radius: f32, color: Color) -> GameResult<()>;

    fn draw_line_segment(
        &mut self,
        from: Point2<f32>,
        to: Point2<f32>,
        thickness: f32,
        color: Color,
    ) -> GameResult<()>;

    fn draw_text(&mut self, text: &str, pos: Point2<f32>, font_size: f32, color: Color) -> GameResult<()>;

    /// Connected segments through `points`. Surfaces that can batch this
    /// should override it.
    fn draw_polyline(&mut self, points: &[Point2<f32>], thickness: f32, color: Color) -> GameResult<()> {
        for pair in points.windows(2) {
            self.draw_line_segment(pair[0], pair[1], thickness, color)?;
        }
        Ok(())
    }

    fn should_close(&self) -> bool;
}

/// Maps simulation metres to screen pixels with the origin at the centre of
/// the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub size: (f32, f32), // (width, height)
}

impl Viewport {
    pub fn new(scale: f64, size: (f32, f32)) -> Self {
        Viewport { scale, size }
    }

    pub fn from_config(cfg: &SimConfig) -> Self {
        Viewport::new(cfg.length_scale, cfg.screen_size)
    }

    pub fn project(&self, pos: &Point2<f64>) -> Point2<f32> {
        let (w, h) = self.size;
        let x = pos.x * self.scale + (w / 2.0) as f64;
        let y = pos.y * self.scale + (h / 2.0) as f64;
        Point2::new(x as f32, y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AU;

    #[test]
    fn origin_maps_to_screen_centre() {
        let vp = Viewport::new(1500.0 / AU, (1440.0, 810.0));
        assert_eq!(vp.project(&Point2::new(0.0, 0.0)), Point2::new(720.0, 405.0));
    }

    #[test]
    fn one_au_left_is_1500_px_left_of_centre() {
        let vp = Viewport::new(1500.0 / AU, (1440.0, 810.0));
        let p = vp.project(&Point2::new(-AU, 0.1 * AU));
        assert!((p.x - (720.0 - 1500.0)).abs() < 1e-3);
        assert!((p.y - (405.0 + 150.0)).abs() < 1e-3);
    }
}
