//! Polyring wireframe demo: drives a `ShapeEditor` the way a UI host would.
//!
//! ```text
//! cargo run --example wireframe
//! RUST_LOG=polyring=debug cargo run --example wireframe
//! ```

use polyring::math::{Matrix4, Vector3};
use polyring::{ShapeEditor, ShapeParameters};
use tracing::{info, warn};

fn report(editor: &ShapeEditor) {
    let mesh = editor.line_mesh();
    info!(
        rings = editor.shape().len(),
        points = editor.shape().point_count(),
        segments = mesh.segments.len(),
        rounded = editor.params().rounded,
        "shape ready"
    );
}

fn main() {
    // Default: WARN for everything, INFO for polyring and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyring=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("wireframe=info".parse().unwrap_or_default())
        .add_directive("polyring=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut editor = ShapeEditor::new(ShapeParameters::default());
    editor.set_local_to_world(Matrix4::new_translation(&Vector3::new(0.0, 2.0, 0.0)));
    report(&editor);

    let edits = [
        ("sides", "12"),
        ("verts_per_line", "7"),
        ("density", "5"),
        ("scale_by_distance", "true"),
        ("height", "not a number"),
        ("rounded", "true"),
        ("density", "40"),
    ];
    for (field, input) in edits {
        match editor.edit_text(field, input) {
            Ok(()) => report(&editor),
            Err(err) => warn!(%err, "edit ignored"),
        }
    }
}
