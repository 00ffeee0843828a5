mod color;
mod connectivity;

pub use color::Gradient;
pub use connectivity::{ConnectivityPlanner, Edge, EdgeKind};

use tracing::debug;

use crate::geometry::Shape;
use crate::math::{transform_point, Color, Matrix4, Point3};

/// A colored line list ready to be drawn as line primitives.
#[derive(Debug, Clone, Default)]
pub struct LineMesh {
    /// Vertex positions; two per segment.
    pub vertices: Vec<Point3>,
    /// Per-vertex colors, aligned with `vertices`.
    pub colors: Vec<Color>,
    /// Segment indices into `vertices`.
    pub segments: Vec<[u32; 2]>,
}

impl LineMesh {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a copy with every vertex mapped through `matrix`.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|p| transform_point(matrix, p))
                .collect(),
            colors: self.colors.clone(),
            segments: self.segments.clone(),
        }
    }
}

/// Builds the colored line mesh for a shape.
///
/// Edges come from [`ConnectivityPlanner`]; each edge takes the gradient
/// color of the ring it belongs to. Vertices are duplicated per segment so
/// every segment carries its own color.
#[derive(Debug)]
pub struct BuildLineMesh<'a> {
    shape: &'a Shape,
    planner: ConnectivityPlanner,
    gradient: Gradient,
}

impl<'a> BuildLineMesh<'a> {
    /// Creates a new `BuildLineMesh` operation.
    #[must_use]
    pub fn new(shape: &'a Shape, density: i32, rounded: bool, gradient: Gradient) -> Self {
        Self {
            shape,
            planner: ConnectivityPlanner::new(density, rounded),
            gradient,
        }
    }

    /// Executes the build, producing the mesh in the shape's local space.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> LineMesh {
        let edges = self.planner.execute(self.shape);
        let colors = self.gradient.colors(self.shape.len());

        let mut mesh = LineMesh {
            vertices: Vec::with_capacity(edges.len() * 2),
            colors: Vec::with_capacity(edges.len() * 2),
            segments: Vec::with_capacity(edges.len()),
        };
        for edge in &edges {
            let Some((a, b)) = edge.resolve(self.shape) else {
                continue;
            };
            let color = colors[edge.ring];
            let idx = mesh.vertices.len() as u32;
            mesh.vertices.extend_from_slice(&[a, b]);
            mesh.colors.extend_from_slice(&[color, color]);
            mesh.segments.push([idx, idx + 1]);
        }

        debug!(
            rings = self.shape.len(),
            segments = mesh.segments.len(),
            "built line mesh"
        );
        mesh
    }
}
