use std::ops::Index;

use crate::math::Point3;

/// Address of a single point inside a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingPoint {
    /// Index of the ring within the shape.
    pub ring: usize,
    /// Index of the point within the ring.
    pub index: usize,
}

impl RingPoint {
    #[must_use]
    pub fn new(ring: usize, index: usize) -> Self {
        Self { ring, index }
    }
}

/// A closed loop of points at one layer of a shape.
///
/// The last point implicitly connects back to the first; point order is
/// what connectivity indexes into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    points: Vec<Point3>,
}

impl Ring {
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point3> {
        self.points.get(index)
    }
}

impl Index<usize> for Ring {
    type Output = Point3;

    fn index(&self, index: usize) -> &Point3 {
        &self.points[index]
    }
}

impl FromIterator<Point3> for Ring {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An ordered sequence of rings.
///
/// Ring order drives both the color gradient position and, for tori, which
/// ring is bridged to which (the last ring wraps to the first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    rings: Vec<Ring>,
}

impl Shape {
    #[must_use]
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    #[must_use]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Number of rings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Total number of points across all rings.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }

    /// Looks up a point by ring and index.
    #[must_use]
    pub fn point(&self, at: RingPoint) -> Option<&Point3> {
        self.rings.get(at.ring)?.get(at.index)
    }

    /// Returns `true` if every ring has the same number of points.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.rings.windows(2).all(|w| w[0].len() == w[1].len())
    }
}

impl Index<usize> for Shape {
    type Output = Ring;

    fn index(&self, index: usize) -> &Ring {
        &self.rings[index]
    }
}

impl FromIterator<Ring> for Shape {
    fn from_iter<I: IntoIterator<Item = Ring>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn point_lookup() {
        let shape = Shape::new(vec![
            Ring::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]),
            Ring::new(vec![p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0)]),
        ]);
        assert_eq!(shape.point(RingPoint::new(1, 0)), Some(&p(0.0, 1.0, 0.0)));
        assert_eq!(shape.point(RingPoint::new(2, 0)), None);
        assert_eq!(shape.point(RingPoint::new(0, 5)), None);
        assert_eq!(shape.point_count(), 4);
    }

    #[test]
    fn uniformity() {
        let even = Shape::new(vec![Ring::new(vec![p(0.0, 0.0, 0.0)]); 3]);
        assert!(even.is_uniform());

        let uneven = Shape::new(vec![
            Ring::new(vec![p(0.0, 0.0, 0.0)]),
            Ring::new(Vec::new()),
        ]);
        assert!(!uneven.is_uniform());

        assert!(Shape::default().is_uniform());
    }
}
