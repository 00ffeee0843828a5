pub mod editor;
pub mod error;
pub mod geometry;
pub mod math;
pub mod params;
pub mod wireframe;

pub use editor::ShapeEditor;
pub use error::{PolyringError, Result};
pub use params::{ParameterEdit, ShapeParameters};
