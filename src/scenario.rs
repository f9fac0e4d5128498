//! Compiled-in starting conditions.
//!
//! Each scenario returns the bodies together with the index of the anchor
//! body (if any), ready for [`Simulation::new`](crate::simulation::Simulation::new).

use ggez::graphics::{self, Color};
use ggez::nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::config::{SimConfig, AU};
use crate::error::SimResult;
use crate::simulation::Simulation;

pub const SUN_MASS: f64 = 1.989e30;
pub const EARTH_ORBITAL_SPEED: f64 = 29783.0;

/// Heavy planet mass used by the three-planet set
const PLANET_MASS: f64 = 5.972e32;

pub struct Scenario {
    pub name: &'static str,
    pub bodies: Vec<Body>,
    pub anchor: Option<usize>,
}

impl Scenario {
    pub fn build(self, config: SimConfig) -> SimResult<Simulation> {
        Simulation::new(self.bodies, self.anchor, config)
    }
}

fn orange() -> Color {
    Color::from_rgb(255, 161, 0)
}

fn planets() -> Vec<Body> {
    vec![
        Body::new(Point2::new(-0.4 * AU, -AU), 5.0, Color::from_rgb(0, 117, 44), PLANET_MASS),
        Body::new(Point2::new(-0.4 * AU, 0.0), 6.0, Color::from_rgb(127, 106, 79), PLANET_MASS)
            .with_velocity(Vector2::new(40.0 * 10000.0, 0.0)),
        Body::new(Point2::new(-0.2 * AU, AU), 8.0, graphics::WHITE, PLANET_MASS),
    ]
}

/// Three equal heavy planets, one of them thrown sideways. No anchor.
pub fn three_planets() -> Scenario {
    Scenario {
        name: "three planets",
        bodies: planets(),
        anchor: None,
    }
}

/// A heavy sun at the origin anchoring the three planets.
pub fn sun_and_planets() -> Scenario {
    let mut bodies = vec![Body::new(Point2::new(0.0, 0.0), 10.0, orange(), 6e30)];
    bodies.extend(planets());
    Scenario {
        name: "sun and planets",
        bodies,
        anchor: Some(0),
    }
}

/// The Sun and an Earth-like body on a near-circular 1 AU orbit.
pub fn sun_and_earth() -> Scenario {
    Scenario {
        name: "sun and earth",
        bodies: vec![
            Body::new(Point2::new(0.0, 0.0), 10.0, orange(), SUN_MASS),
            Body::new(Point2::new(-AU, 0.0), 4.0, Color::from_rgb(0, 121, 241), 5.972e24)
                .with_velocity(Vector2::new(0.0, EARTH_ORBITAL_SPEED)),
        ],
        anchor: Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_builds() {
        for s in vec![three_planets(), sun_and_planets(), sun_and_earth()] {
            let name = s.name;
            let sim = s.build(SimConfig::default());
            assert!(sim.is_ok(), "{} failed: {:?}", name, sim.err());
        }
    }

    #[test]
    fn anchor_is_the_sun() {
        let sim = sun_and_planets().build(SimConfig::default()).unwrap();
        let anchor = sim.anchor().unwrap();
        assert_eq!(sim.bodies()[anchor].mass, 6e30);
        assert_eq!(sim.live_bodies(), 4);
    }
}
