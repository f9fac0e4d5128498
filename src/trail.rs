use std::collections::VecDeque;

use ggez::nalgebra::Point2;

/// Past positions of a body, oldest first.
///
/// With a capacity the oldest point is dropped once the trail is full, so
/// memory stays flat over long runs. Without one every point is kept.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Point2<f64>>,
    capacity: Option<usize>,
}

impl Trail {
    /// Storage grows as points arrive, so a huge capacity costs nothing up
    /// front.
    pub fn new(capacity: Option<usize>) -> Self {
        Trail { points: VecDeque::new(), capacity }
    }

    pub fn unbounded() -> Self {
        Trail::new(None)
    }

    pub fn push(&mut self, point: Point2<f64>) {
        if let Some(cap) = self.capacity {
            while self.points.len() >= cap {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2<f64>> + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&Point2<f64>> {
        self.points.back()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Trail::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_keeps_everything_in_order() {
        let mut trail = Trail::unbounded();
        for i in 0..100 {
            trail.push(Point2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), 100);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[99], 99.0);
    }

    #[test]
    fn bounded_drops_oldest() {
        let mut trail = Trail::new(Some(3));
        for i in 0..5 {
            trail.push(Point2::new(i as f64, -(i as f64)));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.last(), Some(&Point2::new(4.0, -4.0)));
    }

    #[test]
    fn huge_capacity_does_not_allocate_up_front() {
        let mut trail = Trail::new(Some(usize::MAX));
        trail.push(Point2::new(1.0, 1.0));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.capacity(), Some(usize::MAX));
    }
}
