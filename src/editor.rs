use tracing::trace;

use crate::error::Result;
use crate::geometry::{generate, Shape};
use crate::math::Matrix4;
use crate::params::{ParameterEdit, ShapeParameters};
use crate::wireframe::{BuildLineMesh, LineMesh};

/// Holds the live parameters and the shape generated from them.
///
/// Every geometry edit rebuilds the whole shape, so the stored shape always
/// matches the stored parameters.
#[derive(Debug, Clone)]
pub struct ShapeEditor {
    params: ShapeParameters,
    shape: Shape,
    local_to_world: Matrix4,
}

impl ShapeEditor {
    /// Creates an editor and generates the initial shape.
    #[must_use]
    pub fn new(params: ShapeParameters) -> Self {
        Self {
            shape: generate(&params),
            params,
            local_to_world: Matrix4::identity(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// The current shape, in local space.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn local_to_world(&self) -> &Matrix4 {
        &self.local_to_world
    }

    /// Sets the transform applied by [`ShapeEditor::line_mesh`].
    pub fn set_local_to_world(&mut self, matrix: Matrix4) {
        self.local_to_world = matrix;
    }

    /// Applies an edit, regenerating the shape if geometry changed.
    pub fn edit(&mut self, edit: ParameterEdit) {
        trace!(?edit, "applying parameter edit");
        self.params.apply(edit);
        if edit.regenerates() {
            self.shape = generate(&self.params);
        }
    }

    /// Parses text input for `field` and applies it.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be parsed; the parameters and
    /// shape are left unchanged.
    pub fn edit_text(&mut self, field: &str, input: &str) -> Result<()> {
        let edit = ParameterEdit::parse(field, input)?;
        self.edit(edit);
        Ok(())
    }

    /// Builds the colored line mesh for the current shape in world space.
    ///
    /// Empty when the density leaves nothing to connect.
    #[must_use]
    pub fn line_mesh(&self) -> LineMesh {
        BuildLineMesh::new(
            &self.shape,
            self.params.density,
            self.params.rounded,
            self.params.gradient(),
        )
        .execute()
        .transformed(&self.local_to_world)
    }
}

impl Default for ShapeEditor {
    fn default() -> Self {
        Self::new(ShapeParameters::default())
    }
}
