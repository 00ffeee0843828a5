use crate::math::Color;

/// Three-stop color gradient applied across the rings of a shape.
///
/// Rings are split into thirds: the first blends `start` toward `mid`, the
/// second `mid` toward `end`, and the last `end` back toward `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Color,
    pub mid: Color,
    pub end: Color,
}

impl Gradient {
    #[must_use]
    pub fn new(start: Color, mid: Color, end: Color) -> Self {
        Self { start, mid, end }
    }

    /// Color of ring `index` out of `count` rings.
    ///
    /// With two rings or fewer every ring gets `start`. Band fractions are
    /// `i / first`, `(i - first) / second` and `(i - second) / first`, where
    /// `first = count / 3` and `second = count / 3 * 2`, so the middle band
    /// never reaches `end` and the last band can saturate early.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn color_for(&self, index: usize, count: usize) -> Color {
        if count <= 2 || count / 2 == 0 {
            return self.start;
        }

        let first = count / 3;
        let second = count / 3 * 2;
        if index < first {
            Color::lerp(self.start, self.mid, index as f32 / first as f32)
        } else if index < second {
            Color::lerp(self.mid, self.end, (index - first) as f32 / second as f32)
        } else {
            Color::lerp(self.end, self.start, (index - second) as f32 / first as f32)
        }
    }

    /// Colors for every ring of a `count`-ring shape, in ring order.
    #[must_use]
    pub fn colors(&self, count: usize) -> Vec<Color> {
        (0..count).map(|i| self.color_for(i, count)).collect()
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(Color::RED, Color::BLUE, Color::BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rgb() -> Gradient {
        Gradient::new(Color::RED, Color::GREEN, Color::BLUE)
    }

    #[test]
    fn few_rings_use_start() {
        let g = rgb();
        for count in 0..=2 {
            for index in 0..count {
                assert_eq!(g.color_for(index, count), Color::RED);
            }
        }
    }

    #[test]
    fn first_ring_is_start() {
        let g = rgb();
        for count in 3..40 {
            assert_eq!(g.color_for(0, count), Color::RED);
        }
    }

    #[test]
    fn band_boundaries_for_nine_rings() {
        let g = rgb();
        // first = 3, second = 6
        assert_eq!(g.color_for(3, 9), Color::GREEN);
        assert_eq!(g.color_for(6, 9), Color::BLUE);

        let c = g.color_for(1, 9);
        assert_relative_eq!(c.r, 2.0 / 3.0);
        assert_relative_eq!(c.g, 1.0 / 3.0);
    }

    #[test]
    fn middle_band_uses_second_as_denominator() {
        let g = rgb();
        // index 5: (5 - 3) / 6
        let c = g.color_for(5, 9);
        assert_relative_eq!(c.g, 1.0 - 2.0 / 6.0);
        assert_relative_eq!(c.b, 2.0 / 6.0);
    }

    #[test]
    fn last_band_saturates_at_start() {
        let g = rgb();
        // five rings: first = 1, second = 2, index 4 gives t = 2 (clamped)
        assert_eq!(g.color_for(4, 5), Color::RED);
        assert_eq!(g.color_for(2, 5), Color::BLUE);
    }

    #[test]
    fn colors_align_with_rings() {
        let g = rgb();
        let colors = g.colors(9);
        assert_eq!(colors.len(), 9);
        for (i, c) in colors.iter().enumerate() {
            assert_eq!(*c, g.color_for(i, 9));
        }
    }
}
