use tracing::debug;

use crate::geometry::{RingPoint, Shape};
use crate::math::Point3;

/// Which kind of connection an [`Edge`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Skip connection between two points of the same ring.
    Ring,
    /// Connection from a point to the same index on the next ring.
    Bridge,
}

/// A line segment between two points of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Ring the edge belongs to (drives its color).
    pub ring: usize,
    pub start: RingPoint,
    pub end: RingPoint,
    pub kind: EdgeKind,
}

impl Edge {
    /// Looks up both endpoints in `shape`.
    #[must_use]
    pub fn resolve(&self, shape: &Shape) -> Option<(Point3, Point3)> {
        Some((*shape.point(self.start)?, *shape.point(self.end)?))
    }
}

/// Plans which points of a shape are joined by lines.
///
/// Every point `j` of a ring connects to point `j + density` (wrapping).
/// The walk runs `size + density` steps, so the first `density` connections
/// are emitted twice and every point is visited even when `density` does
/// not divide the ring size. In rounded mode each step also bridges to the
/// same index on the next ring, with the last ring wrapping to the first.
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityPlanner {
    density: i32,
    rounded: bool,
}

impl ConnectivityPlanner {
    /// Creates a new `ConnectivityPlanner` operation.
    #[must_use]
    pub fn new(density: i32, rounded: bool) -> Self {
        Self { density, rounded }
    }

    /// Returns `true` if `density` leaves something to draw on `shape`.
    ///
    /// Only the first ring is checked; generated shapes are uniform.
    #[must_use]
    pub fn is_drawable(&self, shape: &Shape) -> bool {
        let Some(first) = shape.rings().first() else {
            return false;
        };
        if first.is_empty() {
            return false;
        }
        match usize::try_from(self.density) {
            Ok(density) => density < first.len(),
            Err(_) => true,
        }
    }

    /// Executes the planning, returning edges grouped by ring in draw order.
    ///
    /// Returns no edges at all when the shape is empty or `density` is not
    /// smaller than the first ring's size.
    #[must_use]
    pub fn execute(&self, shape: &Shape) -> Vec<Edge> {
        if !self.is_drawable(shape) {
            match shape.rings().first() {
                None => debug!("shape has no rings, nothing to connect"),
                Some(first) if first.is_empty() => {
                    debug!("first ring has no points, nothing to connect");
                }
                Some(first) => debug!(
                    density = self.density,
                    ring_size = first.len(),
                    "density not below ring size, nothing to connect"
                ),
            }
            return Vec::new();
        }

        let count = shape.len();
        let mut edges = Vec::new();
        for (ring_index, ring) in shape.rings().iter().enumerate() {
            let Ok(size) = i64::try_from(ring.len()) else {
                continue;
            };
            if size == 0 {
                continue;
            }
            let next = (ring_index + 1) % count;
            let density = i64::from(self.density);
            for j in 0..(size + density).max(0) {
                let from = to_index(j.rem_euclid(size));
                let to = to_index((j + density).rem_euclid(size));
                edges.push(Edge {
                    ring: ring_index,
                    start: RingPoint::new(ring_index, from),
                    end: RingPoint::new(ring_index, to),
                    kind: EdgeKind::Ring,
                });
                if self.rounded && shape[next].len() > from {
                    edges.push(Edge {
                        ring: ring_index,
                        start: RingPoint::new(ring_index, from),
                        end: RingPoint::new(next, from),
                        kind: EdgeKind::Bridge,
                    });
                }
            }
        }
        edges
    }
}

/// Converts a Euclidean remainder (always non-negative) to an index.
fn to_index(value: i64) -> usize {
    usize::try_from(value).unwrap_or_default()
}
