//! The body collection and the per-tick update.
//!
//! Each tick sums the pairwise gravitational forces on every live body,
//! takes one explicit Euler step, appends to the trails, and finally runs the
//! collision pass. Bodies are never removed: a destroyed body stays in the
//! collection with zero mass, so indices are stable for the whole run.

use ggez::nalgebra::Vector2;
use ggez::GameResult;
use log::{info, warn};

use crate::body::Body;
use crate::collision::resolve_collisions;
use crate::config::{SimConfig, UpdateOrder};
use crate::error::{SimError, SimResult};
use crate::render::{Renderer, Viewport};
use crate::trail::Trail;

#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    anchor: Option<usize>, // index of the body distances are reported against
    config: SimConfig,
    viewport: Viewport,
    tick: u64,
}

impl Simulation {
    /// Checks the configuration and starting state, and gives every body a
    /// fresh trail of the configured capacity.
    pub fn new(mut bodies: Vec<Body>, anchor: Option<usize>, config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        for (index, b) in bodies.iter().enumerate() {
            let finite = b.pos.x.is_finite()
                && b.pos.y.is_finite()
                && b.v.x.is_finite()
                && b.v.y.is_finite()
                && b.mass.is_finite()
                && b.radius.is_finite();
            if !finite {
                return Err(SimError::NonFiniteState { index });
            }
            if b.mass < 0.0 {
                return Err(SimError::NegativeMass { index, mass: b.mass });
            }
        }

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if bodies[i].pos == bodies[j].pos {
                    return Err(SimError::CoincidentBodies { first: i, second: j });
                }
            }
        }

        if let Some(index) = anchor {
            if index >= bodies.len() {
                return Err(SimError::AnchorOutOfRange { index, len: bodies.len() });
            }
        }

        for b in &mut bodies {
            b.trail = Trail::new(config.trail_capacity);
        }

        info!(
            "simulation ready: {} bodies, dt = {} s, {:?} update, collisions {}",
            bodies.len(),
            config.time_step,
            config.update_order,
            if config.collisions { "on" } else { "off" }
        );

        Ok(Simulation {
            bodies,
            anchor,
            viewport: Viewport::from_config(&config),
            config,
            tick: 0,
        })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Ticks executed so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds elapsed.
    pub fn elapsed(&self) -> f64 {
        self.tick as f64 * self.config.time_step
    }

    /// Bodies that have not been destroyed in a collision.
    pub fn live_bodies(&self) -> usize {
        self.bodies.iter().filter(|b| !b.is_inert()).count()
    }

    /// Distance from body `index` to the anchor, or `None` for the anchor
    /// itself or when there is no anchor.
    pub fn anchor_distance(&self, index: usize) -> Option<f64> {
        let anchor = self.anchor?;
        if anchor == index {
            return None;
        }
        let target = self.bodies.get(anchor)?;
        self.bodies.get(index).map(|b| b.distance_to(&target.pos))
    }

    /// Sum of the forces every other body exerts on body `index`, using the
    /// positions as they are right now. `None` if there is no such body.
    pub fn net_force(&self, index: usize) -> Option<Vector2<f64>> {
        self.bodies.get(index).map(|b| self.force_on(index, b))
    }

    fn force_on(&self, index: usize, b: &Body) -> Vector2<f64> {
        if b.is_inert() {
            return Vector2::new(0.0, 0.0);
        }

        let g = self.config.gravitational_constant;
        let mut total = Vector2::new(0.0, 0.0);
        for (j, other) in self.bodies.iter().enumerate() {
            if j == index || other.is_inert() {
                continue;
            }
            if other.pos == b.pos {
                warn!("bodies {} and {} coincide; dropping their mutual force", index, j);
                continue;
            }
            total += b.compute_attraction(other, g);
        }
        total
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        let dt = self.config.time_step;

        match self.config.update_order {
            UpdateOrder::Simultaneous => {
                let forces: Vec<Vector2<f64>> = self
                    .bodies
                    .iter()
                    .enumerate()
                    .map(|(i, b)| self.force_on(i, b))
                    .collect();
                for (b, f) in self.bodies.iter_mut().zip(forces) {
                    b.integrate(f, dt);
                }
            }
            UpdateOrder::Sequential => {
                for i in 0..self.bodies.len() {
                    let f = self.force_on(i, &self.bodies[i]);
                    self.bodies[i].integrate(f, dt);
                }
            }
        }

        if self.config.collisions {
            resolve_collisions(&mut self.bodies, self.config.collision_distance);
        }

        self.tick += 1;
    }

    pub fn step_n(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Emits draw calls for every body. Does not clear or present.
    pub fn render<R: Renderer + ?Sized>(&self, surface: &mut R) -> GameResult<()> {
        for (i, b) in self.bodies.iter().enumerate() {
            b.render(surface, &self.viewport, self.anchor_distance(i))?;
        }
        Ok(())
    }

    /// A complete frame without advancing time: begin, clear, draw, end.
    pub fn draw_frame<R: Renderer + ?Sized>(&self, surface: &mut R) -> GameResult<()> {
        surface.begin_frame()?;
        surface.clear_frame()?;
        self.render(surface)?;
        surface.end_frame()
    }

    /// Advances `ticks_per_frame` ticks and draws the result.
    pub fn run_frame<R: Renderer + ?Sized>(&mut self, surface: &mut R) -> GameResult<()> {
        self.step_n(self.config.ticks_per_frame as u64);
        self.draw_frame(surface)
    }

    /// Runs frames until the surface asks to close. Returns the number of
    /// frames drawn.
    pub fn run<R: Renderer + ?Sized>(&mut self, surface: &mut R) -> GameResult<u64> {
        let mut frames = 0;
        while !surface.should_close() {
            self.run_frame(surface)?;
            frames += 1;
        }
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ggez::graphics;
    use ggez::nalgebra::Point2;

    fn body(x: f64, y: f64, mass: f64) -> Body {
        Body::new(Point2::new(x, y), 4.0, graphics::WHITE, mass)
    }

    fn quiet_config() -> SimConfig {
        SimConfig::default().with_collisions(false).with_time_step(1.0)
    }

    #[test]
    fn rejects_coincident_start() {
        let bodies = vec![body(1.0, 2.0, 1.0), body(5.0, 5.0, 1.0), body(1.0, 2.0, 1.0)];
        let err = Simulation::new(bodies, None, quiet_config()).unwrap_err();
        assert_eq!(err, SimError::CoincidentBodies { first: 0, second: 2 });
    }

    #[test]
    fn rejects_negative_mass() {
        let bodies = vec![body(0.0, 0.0, 1.0), body(1.0, 0.0, -2.0)];
        let err = Simulation::new(bodies, None, quiet_config()).unwrap_err();
        assert_eq!(err, SimError::NegativeMass { index: 1, mass: -2.0 });
    }

    #[test]
    fn rejects_non_finite_state() {
        let bodies = vec![body(0.0, f64::NAN, 1.0)];
        let err = Simulation::new(bodies, None, quiet_config()).unwrap_err();
        assert_eq!(err, SimError::NonFiniteState { index: 0 });
    }

    #[test]
    fn rejects_anchor_out_of_range() {
        let bodies = vec![body(0.0, 0.0, 1.0)];
        let err = Simulation::new(bodies, Some(1), quiet_config()).unwrap_err();
        assert_eq!(err, SimError::AnchorOutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn applies_trail_capacity() {
        let cfg = quiet_config().with_trail_capacity(Some(2));
        let mut sim = Simulation::new(vec![body(0.0, 0.0, 1.0)], None, cfg).unwrap();
        sim.step_n(5);
        assert_eq!(sim.bodies()[0].trail.len(), 2);
        assert_eq!(sim.tick(), 5);
    }

    #[test]
    fn accepts_huge_trail_capacity() {
        let cfg = quiet_config().with_trail_capacity(Some(usize::MAX));
        let mut sim = Simulation::new(vec![body(0.0, 0.0, 1.0)], None, cfg).unwrap();
        sim.step_n(3);
        assert_eq!(sim.bodies()[0].trail.len(), 3);
    }

    #[test]
    fn newtons_third_law() {
        let sim = Simulation::new(
            vec![body(-1.0e9, 2.0e8, 3.0e27), body(4.0e9, -1.0e9, 7.0e25)],
            None,
            quiet_config(),
        )
        .unwrap();

        let f01 = sim.net_force(0).unwrap();
        let f10 = sim.net_force(1).unwrap();
        assert!((f01 + f10).norm() <= 1e-9 * f01.norm());
    }

    #[test]
    fn net_force_on_missing_body_is_none() {
        let sim = Simulation::new(vec![body(0.0, 0.0, 1.0), body(1.0, 0.0, 1.0)], None, quiet_config()).unwrap();
        assert!(sim.net_force(1).is_some());
        assert_eq!(sim.net_force(2), None);
    }

    #[test]
    fn anchor_distance_skips_the_anchor() {
        let sim = Simulation::new(
            vec![body(0.0, 0.0, 1.0e30), body(3.0e3, 4.0e3, 1.0)],
            Some(0),
            quiet_config(),
        )
        .unwrap();
        assert_eq!(sim.anchor_distance(0), None);
        assert_eq!(sim.anchor_distance(1), Some(5.0e3));
    }

    #[test]
    fn sequential_order_sees_moved_bodies() {
        let bodies = vec![body(-1.0e9, 0.0, 1.0e28), body(1.0e9, 0.0, 1.0e28)];
        let seq_cfg = quiet_config().with_time_step(1.0e3).with_update_order(UpdateOrder::Sequential);

        let mut simultaneous = Simulation::new(bodies.clone(), None, seq_cfg.clone().with_update_order(UpdateOrder::Simultaneous)).unwrap();
        let mut sequential = Simulation::new(bodies, None, seq_cfg).unwrap();
        simultaneous.step();
        sequential.step();

        // Body 0 moves first in both, so it lands in the same place
        assert_eq!(simultaneous.bodies()[0].pos, sequential.bodies()[0].pos);
        // Body 1 is pulled by the already-moved body 0 and ends up elsewhere
        assert!(simultaneous.bodies()[1].pos != sequential.bodies()[1].pos);
    }
}
