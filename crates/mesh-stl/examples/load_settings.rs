//! Example: Load Settings
//!
//! This example shows how `LoadSettings` drives an STL load: the settings are
//! parsed from TOML, a cube is written to disk as ASCII STL, and the file is
//! loaded back with the configured transform.
//!
//! Run with: `cargo run --example load_settings`

use mesh_stl::{LoadSettings, Mesh, MeshResult, PrintObject};
use nalgebra::Point3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // =========================================================================
    // 1. Parse settings from TOML
    // =========================================================================

    let settings = LoadSettings::from_toml(
        r#"
        max_line_length = 256
        scale = 25.4
        # swap Y and Z
        matrix = [[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]]
        "#,
    )?;
    println!("=== Settings as JSON ===\n{}", settings.to_json()?);

    // =========================================================================
    // 2. Write a test cube
    // =========================================================================

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cube.stl");
    create_test_cube(1.0)?.save(&path)?;
    println!("\nWrote {}", path.display());

    // =========================================================================
    // 3. Load it back into an object, with and without the transform
    // =========================================================================

    let mut object = PrintObject::new();
    object.load(&path, &LoadSettings::default())?;
    object.load(&path, &settings)?;

    for (i, mesh) in object.meshes.iter().enumerate() {
        println!("\n=== Mesh {} ===\n{}", i, mesh.summary());
    }

    Ok(())
}

/// Create a cube with edge length `size`, one corner at the origin.
fn create_test_cube(size: f64) -> MeshResult<Mesh> {
    let p = |x: f64, y: f64, z: f64| Point3::new(x * size, y * size, z * size);
    let corners = [
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(0.0, 1.0, 0.0),
        p(0.0, 0.0, 1.0),
        p(1.0, 0.0, 1.0),
        p(1.0, 1.0, 1.0),
        p(0.0, 1.0, 1.0),
    ];
    let faces = [
        [0, 2, 1],
        [0, 3, 2],
        [4, 5, 6],
        [4, 6, 7],
        [0, 1, 5],
        [0, 5, 4],
        [2, 3, 7],
        [2, 7, 6],
        [0, 4, 7],
        [0, 7, 3],
        [1, 2, 6],
        [1, 6, 5],
    ];

    let mut mesh = Mesh::with_capacity(faces.len());
    for [a, b, c] in faces {
        mesh.add_face(corners[a], corners[b], corners[c])?;
    }
    mesh.finish();
    Ok(mesh)
}
