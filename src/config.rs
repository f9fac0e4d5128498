//! Compiled-in constants and the immutable configuration handed to a
//! [`Simulation`](crate::simulation::Simulation).

use crate::error::{SimError, SimResult};

/// Gravitational constant, N m^2 / kg^2
pub const G: f64 = 6.674e-11;
/// Astronomical unit, metres
pub const AU: f64 = 149.6e6 * 1000.0;
/// One day, seconds
pub const DAY: f64 = 3600.0 * 24.0;

pub const SCREEN_WIDTH: f32 = 1440.0;
pub const SCREEN_HEIGHT: f32 = 810.0;

pub const DEFAULT_TRAIL_CAPACITY: usize = 4096;

/// How bodies see each other's positions while a tick is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrder {
    /// Every force is computed from the positions at the start of the tick.
    Simultaneous,
    /// Bodies are moved one at a time; later bodies see earlier bodies
    /// already advanced this tick.
    Sequential,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub gravitational_constant: f64,
    pub time_step: f64,    // seconds per tick
    pub length_scale: f64, // screen pixels per simulation metre
    pub screen_size: (f32, f32), // (width, height)

    pub collisions: bool,
    pub collision_distance: f64, // metres

    /// `None` keeps every position ever visited.
    pub trail_capacity: Option<usize>,
    pub update_order: UpdateOrder,

    pub ticks_per_frame: u32,
    /// `None` runs one update per drawn frame, unthrottled.
    pub target_fps: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            gravitational_constant: G,
            time_step: DAY / 800.0,
            length_scale: 1500.0 / AU,
            screen_size: (SCREEN_WIDTH, SCREEN_HEIGHT),
            collisions: true,
            collision_distance: 0.01 * AU,
            trail_capacity: Some(DEFAULT_TRAIL_CAPACITY),
            update_order: UpdateOrder::Simultaneous,
            ticks_per_frame: 1,
            target_fps: None,
        }
    }
}

impl SimConfig {
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_length_scale(mut self, length_scale: f64) -> Self {
        self.length_scale = length_scale;
        self
    }

    pub fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.screen_size = (width, height);
        self
    }

    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions = enabled;
        self
    }

    pub fn with_collision_distance(mut self, distance: f64) -> Self {
        self.collision_distance = distance;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: Option<usize>) -> Self {
        self.trail_capacity = capacity;
        self
    }

    pub fn with_update_order(mut self, order: UpdateOrder) -> Self {
        self.update_order = order;
        self
    }

    pub fn with_ticks_per_frame(mut self, ticks: u32) -> Self {
        self.ticks_per_frame = ticks;
        self
    }

    pub fn with_target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn validate(&self) -> SimResult<()> {
        fn positive(name: &str, value: f64) -> SimResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )))
            }
        }

        positive("gravitational constant", self.gravitational_constant)?;
        positive("time step", self.time_step)?;
        positive("length scale", self.length_scale)?;

        let (w, h) = self.screen_size;
        if !(w > 0.0 && h > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "screen size must be non-zero, got {}x{}",
                w, h
            )));
        }
        if self.collisions {
            positive("collision distance", self.collision_distance)?;
        }
        if self.trail_capacity == Some(0) {
            return Err(SimError::InvalidConfig(
                "trail capacity must be at least 1".to_string(),
            ));
        }
        if self.ticks_per_frame == 0 {
            return Err(SimError::InvalidConfig(
                "ticks per frame must be at least 1".to_string(),
            ));
        }
        if self.target_fps == Some(0) {
            return Err(SimError::InvalidConfig(
                "target fps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
