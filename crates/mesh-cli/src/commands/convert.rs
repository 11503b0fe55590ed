//! `convert`: load a mesh and write it back as ASCII STL.

use std::path::Path;

use anyhow::{Context, Result};
use mesh_stl::Mesh;
use serde::Serialize;

use crate::output;
use crate::{LoadArgs, OutputFormat};

#[derive(Serialize)]
struct ConvertReport<'a> {
    input: &'a Path,
    output: &'a Path,
    faces: usize,
}

pub fn run(
    input: &Path,
    output_path: &Path,
    args: &LoadArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let settings = super::load_settings(args)?;
    let mesh = Mesh::load(input, &settings)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    if mesh.is_empty() {
        output::warning("Writing a mesh with no faces", format, quiet);
    }

    mesh.save(output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    output::success(
        &format!(
            "Wrote {} faces to {}",
            mesh.face_count(),
            output_path.display()
        ),
        format,
        quiet,
    );
    output::print(
        &ConvertReport {
            input,
            output: output_path,
            faces: mesh.face_count(),
        },
        format,
        quiet,
    );

    Ok(())
}
