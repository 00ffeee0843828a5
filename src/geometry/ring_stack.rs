use std::f64::consts::TAU;

use tracing::debug;

use super::point_on_ring::point_on_ring;
use super::{Ring, Shape};

/// Generates a stack of flat rings centered on the origin along Y.
///
/// Produces `max(lines, 1)` rings of `sides` points each. Rings are spaced
/// `height / lines` apart and the stack is centered so the offsets are
/// symmetric about zero.
#[derive(Debug, Clone)]
pub struct RingGenerator {
    sides: i32,
    lines: i32,
    radius: f64,
    height: f64,
    scale_by_distance: bool,
}

impl RingGenerator {
    /// Creates a new `RingGenerator` operation.
    ///
    /// # Arguments
    ///
    /// * `sides` - Points per ring; zero or negative gives empty rings
    /// * `lines` - Number of stacked rings, raised to at least 1
    /// * `radius` - Ring radius before distance scaling
    /// * `height` - Total extent of the stack along Y
    /// * `scale_by_distance` - Shrink rings away from the vertical center
    #[must_use]
    pub fn new(sides: i32, lines: i32, radius: f64, height: f64, scale_by_distance: bool) -> Self {
        Self {
            sides,
            lines: lines.max(1),
            radius,
            height,
            scale_by_distance,
        }
    }

    /// Distance between consecutive rings.
    #[must_use]
    pub fn offset_per_line(&self) -> f64 {
        self.height / f64::from(self.lines)
    }

    /// Distance from the center to the outermost ring.
    #[must_use]
    pub fn initial_offset(&self) -> f64 {
        if self.lines > 1 {
            self.offset_per_line() * f64::from(self.lines - 1) / 2.0
        } else {
            0.0
        }
    }

    /// Signed Y offset of the ring at `line`.
    #[must_use]
    pub fn stack_offset(&self, line: i32) -> f64 {
        -self.initial_offset() + self.offset_per_line() * f64::from(line)
    }

    /// Executes the generation.
    #[must_use]
    pub fn execute(&self) -> Shape {
        debug!(
            initial_offset = self.initial_offset(),
            lines = self.lines,
            sides = self.sides,
            "generating ring stack"
        );

        let step = TAU / f64::from(self.sides);
        (0..self.lines)
            .map(|line| {
                let offset = self.stack_offset(line);
                let distance = offset.abs();
                (0..self.sides)
                    .map(|side| {
                        point_on_ring(
                            step * f64::from(side),
                            distance,
                            self.radius,
                            offset,
                            self.scale_by_distance,
                        )
                    })
                    .collect::<Ring>()
            })
            .collect()
    }
}
