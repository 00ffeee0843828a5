use std::str::FromStr;

use crate::error::{ParameterError, Result};
use crate::math::Color;
use crate::wireframe::Gradient;

/// Inputs controlling shape generation and coloring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    /// Points per ring (flat) or number of major rings (rounded).
    pub sides: i32,
    /// Number of stacked rings (flat) or points per tube section (rounded).
    pub verts_per_line: i32,
    /// Ring radius, or the torus major radius.
    pub radius: f64,
    /// Skip distance between connected points of a ring.
    pub density: i32,
    /// Shrink flat rings with distance from the vertical center.
    pub scale_by_distance: bool,
    /// Extent of the flat ring stack along Y.
    pub height: f64,
    pub start_color: Color,
    pub mid_color: Color,
    pub end_color: Color,
    /// Generate a torus instead of a flat stack.
    pub rounded: bool,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            sides: 3,
            verts_per_line: 4,
            radius: 5.0,
            density: 1,
            scale_by_distance: false,
            height: 1.0,
            start_color: Color::RED,
            mid_color: Color::BLUE,
            end_color: Color::BLUE,
            rounded: false,
        }
    }
}

impl ShapeParameters {
    /// The ring color gradient.
    #[must_use]
    pub fn gradient(&self) -> Gradient {
        Gradient::new(self.start_color, self.mid_color, self.end_color)
    }

    /// Verts per line with zero raised to one.
    #[must_use]
    pub fn lines(&self) -> i32 {
        if self.verts_per_line == 0 {
            1
        } else {
            self.verts_per_line
        }
    }

    /// Applies a single edit in place.
    ///
    /// A verts-per-line of zero is stored as one, so it stays one after a
    /// switch between flat and rounded mode.
    pub fn apply(&mut self, edit: ParameterEdit) {
        match edit {
            ParameterEdit::Sides(v) => self.sides = v,
            ParameterEdit::VertsPerLine(v) => self.verts_per_line = if v == 0 { 1 } else { v },
            ParameterEdit::Radius(v) => self.radius = v,
            ParameterEdit::Density(v) => self.density = v,
            ParameterEdit::Height(v) => self.height = v,
            ParameterEdit::ScaleByDistance(v) => self.scale_by_distance = v,
            ParameterEdit::Rounded(v) => self.rounded = v,
            ParameterEdit::StartColor(c) => self.start_color = c,
            ParameterEdit::MidColor(c) => self.mid_color = c,
            ParameterEdit::EndColor(c) => self.end_color = c,
        }
    }
}

/// A change to one field of [`ShapeParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterEdit {
    Sides(i32),
    VertsPerLine(i32),
    Radius(f64),
    Density(i32),
    Height(f64),
    ScaleByDistance(bool),
    Rounded(bool),
    StartColor(Color),
    MidColor(Color),
    EndColor(Color),
}

impl ParameterEdit {
    /// Parses host text input for the field named `field`.
    ///
    /// Accepted names are `sides`, `verts_per_line`, `radius`, `density`,
    /// `height`, `scale_by_distance` and `rounded`. Colors are not edited
    /// through text.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is unknown or `input` does not parse as
    /// the field's type.
    pub fn parse(field: &str, input: &str) -> Result<Self> {
        let edit = match field {
            "sides" => Self::Sides(parse_value("sides", input)?),
            "verts_per_line" => Self::VertsPerLine(parse_value("verts_per_line", input)?),
            "radius" => Self::Radius(parse_value("radius", input)?),
            "density" => Self::Density(parse_value("density", input)?),
            "height" => Self::Height(parse_value("height", input)?),
            "scale_by_distance" => Self::ScaleByDistance(parse_value("scale_by_distance", input)?),
            "rounded" => Self::Rounded(parse_value("rounded", input)?),
            other => return Err(ParameterError::UnknownField(other.to_owned()).into()),
        };
        Ok(edit)
    }

    /// Whether applying this edit changes the geometry.
    ///
    /// Color edits only affect how the existing shape is drawn.
    #[must_use]
    pub fn regenerates(&self) -> bool {
        !matches!(
            self,
            Self::StartColor(_) | Self::MidColor(_) | Self::EndColor(_)
        )
    }
}

fn parse_value<T: FromStr>(field: &'static str, input: &str) -> Result<T> {
    input.trim().parse().map_err(|_| {
        ParameterError::Parse {
            field,
            input: input.to_owned(),
        }
        .into()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyringError;

    #[test]
    fn defaults() {
        let p = ShapeParameters::default();
        assert_eq!(p.sides, 3);
        assert_eq!(p.verts_per_line, 4);
        assert_eq!(p.density, 1);
        assert!(!p.rounded);
        assert!(!p.scale_by_distance);
        assert_eq!(p.gradient(), Gradient::new(Color::RED, Color::BLUE, Color::BLUE));
    }

    #[test]
    fn parse_typed_fields() {
        assert_eq!(ParameterEdit::parse("sides", "8").unwrap(), ParameterEdit::Sides(8));
        assert_eq!(ParameterEdit::parse("density", " -2 ").unwrap(), ParameterEdit::Density(-2));
        assert_eq!(ParameterEdit::parse("radius", "2.5").unwrap(), ParameterEdit::Radius(2.5));
        assert_eq!(
            ParameterEdit::parse("rounded", "true").unwrap(),
            ParameterEdit::Rounded(true)
        );
    }

    #[test]
    fn parse_rejects_bad_text() {
        let err = ParameterEdit::parse("sides", "2.5").unwrap_err();
        assert!(matches!(
            err,
            PolyringError::Parameter(ParameterError::Parse { field: "sides", .. })
        ));
        assert!(ParameterEdit::parse("height", "tall").is_err());
    }

    #[test]
    fn parse_rejects_unknown_field() {
        let err = ParameterEdit::parse("thickness", "1").unwrap_err();
        assert!(matches!(
            err,
            PolyringError::Parameter(ParameterError::UnknownField(_))
        ));
    }

    #[test]
    fn apply_updates_one_field() {
        let mut p = ShapeParameters::default();
        p.apply(ParameterEdit::Height(4.0));
        assert_eq!(p, ShapeParameters { height: 4.0, ..ShapeParameters::default() });
    }

    #[test]
    fn zero_verts_per_line_stored_as_one() {
        let mut p = ShapeParameters::default();
        p.apply(ParameterEdit::VertsPerLine(0));
        assert_eq!(p.verts_per_line, 1);

        p.apply(ParameterEdit::VertsPerLine(-2));
        assert_eq!(p.verts_per_line, -2);
        assert_eq!(ShapeParameters { verts_per_line: 0, ..p }.lines(), 1);
    }

    #[test]
    fn color_edits_do_not_regenerate() {
        assert!(!ParameterEdit::MidColor(Color::GREEN).regenerates());
        assert!(ParameterEdit::Density(2).regenerates());
    }
}
