use ggez::graphics::{self, Color};
use ggez::nalgebra::{Point2, Vector2};
use ggez::GameResult;

use crate::render::{Renderer, Viewport};
use crate::trail::Trail;

pub const TRAIL_THICKNESS: f32 = 2.0;
pub const LABEL_OFFSET: f32 = 20.0;
pub const LABEL_FONT_SIZE: f32 = 10.0;

// All points/vectors are in reference to global xy-plane
// For convenience, 1 unit = 1 metre
#[derive(Debug, Clone)]
pub struct Body {
    pub mass: f64,
    pub pos: Point2<f64>,
    pub v: Vector2<f64>,
    // Drawn in pixels, but collisions also read it as metres when pushing
    // two bodies apart
    pub radius: f32,
    pub color: Color,
    pub trail: Trail,
}

impl Body {
    pub fn new(pos: Point2<f64>, radius: f32, color: Color, mass: f64) -> Self {
        Body {
            mass,
            pos,
            v: Vector2::new(0.0, 0.0),
            radius,
            color,
            trail: Trail::unbounded(),
        }
    }

    pub fn with_velocity(mut self, v: Vector2<f64>) -> Self {
        self.v = v;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: Option<usize>) -> Self {
        self.trail = Trail::new(capacity);
        self
    }

    /// A body with no mass neither pulls nor is pulled; it keeps coasting at
    /// its current velocity. Collisions leave both bodies in this state with
    /// zero velocity, so they stay put.
    pub fn is_inert(&self) -> bool {
        self.mass == 0.0
    }

    pub fn distance_to(&self, point: &Point2<f64>) -> f64 {
        (*point - self.pos).norm()
    }

    /// Gravitational force this body feels from `other`, F = G m1 m2 / r^2
    /// pointing from this body towards `other`.
    ///
    /// Returns zero when the two bodies sit at exactly the same position.
    pub fn compute_attraction(&self, other: &Body, g: f64) -> Vector2<f64> {
        let dx = other.pos.x - self.pos.x;
        let dy = other.pos.y - self.pos.y;

        let r_squared = dx.powi(2) + dy.powi(2);
        if r_squared == 0.0 { return Vector2::new(0.0, 0.0); }

        let f = g * self.mass * other.mass / r_squared;

        let theta = dy.atan2(dx);
        Vector2::new(f * theta.cos(), f * theta.sin())
    }

    /// One explicit Euler step: velocity first, then position with the new
    /// velocity. The new position is appended to the trail.
    ///
    /// A massless body has no acceleration and only coasts.
    pub fn integrate(&mut self, force: Vector2<f64>, dt: f64) {
        if !self.is_inert() {
            let a = force / self.mass;
            self.v += a * dt;
        }
        self.pos += self.v * dt;
        self.trail.push(self.pos);
    }

    /// Draws the trail, the body, and (when given) its distance to the
    /// anchor in kilometres.
    pub fn render<R: Renderer + ?Sized>(
        &self,
        surface: &mut R,
        viewport: &Viewport,
        anchor_distance: Option<f64>,
    ) -> GameResult<()> {
        let center = viewport.project(&self.pos);

        if self.trail.len() > 2 {
            let points: Vec<Point2<f32>> = self.trail.iter().map(|p| viewport.project(p)).collect();
            surface.draw_polyline(&points, TRAIL_THICKNESS, self.color)?;
        }

        surface.draw_filled_circle(center, self.radius, self.color)?;

        if let Some(d) = anchor_distance {
            let label = format!("{:.1} km", d / 1000.0);
            let dest = Point2::new(center.x + LABEL_OFFSET, center.y);
            surface.draw_text(&label, dest, LABEL_FONT_SIZE, graphics::WHITE)?;
        }

        Ok(())
    }
}
