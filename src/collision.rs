//! Destructive collisions.
//!
//! Any pair closer than the collision distance is stopped dead: both bodies
//! lose their velocity and mass, and are pushed apart along the line between
//! their centres until their centres are exactly `r1 + r2` apart. Nothing is
//! conserved; this only keeps the force sum away from r -> 0.

use ggez::nalgebra::Vector2;
use log::debug;

use crate::body::Body;

/// Checks every unordered pair once and resolves those closer than
/// `threshold`. Returns the number of new collisions, i.e. pairs where at
/// least one body still had mass. Pairs destroyed earlier are re-resolved
/// but not counted.
pub fn resolve_collisions(bodies: &mut [Body], threshold: f64) -> usize {
    let mut resolved = 0;
    for i in 0..bodies.len() {
        let (left, right) = bodies.split_at_mut(i + 1);
        let a = &mut left[i];
        for (k, b) in right.iter_mut().enumerate() {
            let distance = a.distance_to(&b.pos);
            if distance < threshold {
                // Already-resolved pairs sit at r1 + r2 and stay there
                if !(a.is_inert() && b.is_inert()) {
                    debug!("bodies {} and {} collided {:.3e} m apart", i, i + 1 + k, distance);
                    resolved += 1;
                }
                resolve_pair(a, b);
            }
        }
    }
    resolved
}

/// Stops both bodies and separates them so their centres are `r1 + r2`
/// apart.
pub fn resolve_pair(a: &mut Body, b: &mut Body) {
    a.v = Vector2::new(0.0, 0.0);
    b.v = Vector2::new(0.0, 0.0);
    a.mass = 0.0;
    b.mass = 0.0;

    let delta = a.pos - b.pos;
    let distance = delta.norm();
    let dir = if distance > 0.0 {
        delta / distance
    } else {
        Vector2::new(1.0, 0.0)
    };

    let overlap = (a.radius + b.radius) as f64 - distance;
    let shift = dir * (overlap / 2.0);
    a.pos += shift;
    b.pos -= shift;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ggez::graphics;
    use ggez::nalgebra::Point2;

    const EPSILON: f64 = 1e-6;

    fn body(x: f64, y: f64, radius: f32) -> Body {
        Body::new(Point2::new(x, y), radius, graphics::WHITE, 1.0e24)
            .with_velocity(Vector2::new(5.0, -3.0))
    }

    #[test]
    fn resolved_pair_is_stopped_and_separated() {
        let mut a = body(0.0, 0.0, 5.0);
        let mut b = body(3.0, 4.0, 6.0);
        resolve_pair(&mut a, &mut b);

        assert_eq!(a.mass, 0.0);
        assert_eq!(b.mass, 0.0);
        assert_eq!(a.v.norm(), 0.0);
        assert_eq!(b.v.norm(), 0.0);
        assert!((a.distance_to(&b.pos) - 11.0).abs() < EPSILON);
    }

    #[test]
    fn separation_keeps_the_midpoint() {
        let mut a = body(0.0, 0.0, 5.0);
        let mut b = body(100.0, 0.0, 5.0);
        resolve_pair(&mut a, &mut b);

        assert!((a.pos.x + b.pos.x - 100.0).abs() < EPSILON);
        assert!((b.pos.x - a.pos.x - 10.0).abs() < EPSILON);
    }

    #[test]
    fn coincident_pair_separates_along_x() {
        let mut a = body(7.0, 7.0, 2.0);
        let mut b = body(7.0, 7.0, 2.0);
        resolve_pair(&mut a, &mut b);

        assert!((a.pos.x - 9.0).abs() < EPSILON);
        assert!((b.pos.x - 5.0).abs() < EPSILON);
        assert_eq!(a.pos.y, 7.0);
    }

    #[test]
    fn only_close_pairs_collide() {
        let mut bodies = vec![body(0.0, 0.0, 1.0), body(50.0, 0.0, 1.0), body(1.0e6, 0.0, 1.0)];
        let n = resolve_collisions(&mut bodies, 100.0);

        assert_eq!(n, 1);
        assert!(bodies[0].is_inert());
        assert!(bodies[1].is_inert());
        assert!(!bodies[2].is_inert());
        assert_eq!(bodies[2].v, Vector2::new(5.0, -3.0));
    }

    #[test]
    fn resolving_again_changes_nothing() {
        let mut bodies = vec![body(0.0, 0.0, 1.0), body(50.0, 0.0, 1.0)];
        assert_eq!(resolve_collisions(&mut bodies, 100.0), 1);
        let (a, b) = (bodies[0].pos, bodies[1].pos);

        assert_eq!(resolve_collisions(&mut bodies, 100.0), 0);
        assert!((bodies[0].pos - a).norm() < EPSILON);
        assert!((bodies[1].pos - b).norm() < EPSILON);
    }
}
