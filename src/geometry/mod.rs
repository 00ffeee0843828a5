mod point_on_ring;
mod ring_stack;
mod shape;
mod torus;

pub use point_on_ring::point_on_ring;
pub use ring_stack::RingGenerator;
pub use shape::{Ring, RingPoint, Shape};
pub use torus::{TorusGenerator, TUBE_RADIUS};

use crate::params::ShapeParameters;

/// Builds the shape described by `params`.
///
/// Rounded parameters produce a torus; otherwise a stack of flat rings.
/// Height and distance scaling only apply to the flat stack.
/// The result is always rebuilt from scratch and is in local space.
#[must_use]
pub fn generate(params: &ShapeParameters) -> Shape {
    if params.rounded {
        TorusGenerator::new(params.sides, params.lines(), params.radius).execute()
    } else {
        RingGenerator::new(
            params.sides,
            params.lines(),
            params.radius,
            params.height,
            params.scale_by_distance,
        )
        .execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterEdit;

    #[test]
    fn flat_parameters_stack_rings() {
        let params = ShapeParameters {
            sides: 6,
            verts_per_line: 3,
            ..ShapeParameters::default()
        };
        let shape = generate(&params);
        assert_eq!(shape.len(), 3);
        assert!(shape.rings().iter().all(|r| r.len() == 6));
    }

    #[test]
    fn rounded_parameters_build_torus() {
        let params = ShapeParameters {
            sides: 6,
            verts_per_line: 3,
            rounded: true,
            ..ShapeParameters::default()
        };
        let shape = generate(&params);
        assert_eq!(shape.len(), 6);
        assert!(shape.rings().iter().all(|r| r.len() == 3));
    }

    #[test]
    fn rounded_ignores_height_and_scaling() {
        let mut params = ShapeParameters {
            sides: 5,
            verts_per_line: 4,
            rounded: true,
            ..ShapeParameters::default()
        };
        let before = generate(&params);
        params.apply(ParameterEdit::Height(9.0));
        params.apply(ParameterEdit::ScaleByDistance(true));
        assert_eq!(generate(&params), before);
    }

    #[test]
    fn zero_verts_per_line_gives_single_point_tube() {
        let params = ShapeParameters {
            sides: 3,
            verts_per_line: 0,
            rounded: true,
            ..ShapeParameters::default()
        };
        let shape = generate(&params);
        assert_eq!(shape.len(), 3);
        assert!(shape.rings().iter().all(|r| r.len() == 1));
    }
}
