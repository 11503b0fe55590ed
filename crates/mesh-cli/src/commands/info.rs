//! `info`: load a mesh and report what was read.

use std::path::Path;

use anyhow::{Context, Result};
use mesh_stl::{log_summary, Mesh};
use serde::Serialize;

use crate::output;
use crate::{LoadArgs, OutputFormat};

#[derive(Serialize)]
struct InfoReport<'a> {
    path: &'a Path,
    #[serde(flatten)]
    summary: mesh_stl::MeshSummary,
}

pub fn run(input: &Path, args: &LoadArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let settings = super::load_settings(args)?;
    let mesh = Mesh::load(input, &settings)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let summary = mesh.summary();
    log_summary(&summary);

    if !summary.has_geometry() {
        output::warning("Mesh has no faces", format, quiet);
    }

    match format {
        OutputFormat::Text => {
            output::info(&format!("{}", input.display()), format, quiet);
            output::info(summary.to_string().trim_end(), format, quiet);
        }
        OutputFormat::Json => {
            output::print(
                &InfoReport {
                    path: input,
                    summary,
                },
                format,
                quiet,
            );
        }
    }

    Ok(())
}
