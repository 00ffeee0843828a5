use std::f64::consts::TAU;

use tracing::debug;

use crate::math::Point3;

use super::{Ring, Shape};

/// Tube radius used by [`TorusGenerator`].
pub const TUBE_RADIUS: f64 = 1.0;

/// Generates a torus around the Y axis as a set of tube cross-sections.
///
/// Major ring `j` sits at angle `2*pi*j / sides` around the axis and holds
/// `verts` points spaced evenly around a tube of radius [`TUBE_RADIUS`]:
///
/// `P(j, i) = ((R + r*cos(v)) * cos(u), r*sin(v), (R + r*cos(v)) * sin(u))`
#[derive(Debug, Clone)]
pub struct TorusGenerator {
    sides: i32,
    verts: i32,
    radius: f64,
}

impl TorusGenerator {
    /// Creates a new `TorusGenerator` operation.
    ///
    /// `sides` is the number of major rings, `verts` the points per ring and
    /// `radius` the distance from the axis to the tube center.
    #[must_use]
    pub fn new(sides: i32, verts: i32, radius: f64) -> Self {
        Self {
            sides,
            verts,
            radius,
        }
    }

    /// Executes the generation.
    #[must_use]
    pub fn execute(&self) -> Shape {
        debug!(
            sides = self.sides,
            verts = self.verts,
            radius = self.radius,
            "generating torus"
        );

        let center_step = TAU / f64::from(self.sides);
        let ring_step = TAU / f64::from(self.verts);
        (0..self.sides)
            .map(|j| {
                let u = center_step * f64::from(j);
                (0..self.verts)
                    .map(|i| {
                        let v = ring_step * f64::from(i);
                        let reach = self.radius + TUBE_RADIUS * v.cos();
                        Point3::new(u.cos() * reach, TUBE_RADIUS * v.sin(), u.sin() * reach)
                    })
                    .collect::<Ring>()
            })
            .collect()
    }
}
