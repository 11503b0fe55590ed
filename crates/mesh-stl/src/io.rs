//! Mesh file loading and saving by file name.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::LoadSettings;
use crate::error::{MeshError, MeshResult};
use crate::object::PrintObject;
use crate::stl::{self, line::DEFAULT_MAX_LINE_LENGTH};
use crate::transform::Transform;
use crate::Mesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Stl,
}

impl MeshFormat {
    /// Detect format from the file name suffix.
    ///
    /// Only a literal lowercase `.stl` is recognized; `model.STL` is rejected.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let dot = name.rfind('.')?;
        match &name[dot..] {
            ".stl" => Some(MeshFormat::Stl),
            _ => None,
        }
    }
}

fn unsupported(path: &Path) -> MeshError {
    MeshError::UnsupportedExtension {
        path: path.to_path_buf(),
        extension: path.extension().and_then(|e| e.to_str()).map(String::from),
    }
}

/// Load a mesh from file, choosing the reader from the file name.
///
/// The extension is checked before the file is opened.
pub fn load_mesh(path: &Path, settings: &LoadSettings) -> MeshResult<Mesh> {
    load_mesh_with(path, &settings.transform(), settings.max_line_length)
}

fn load_mesh_with(path: &Path, transform: &Transform, max_line_length: usize) -> MeshResult<Mesh> {
    let format = MeshFormat::from_path(path).ok_or_else(|| unsupported(path))?;

    info!("Loading mesh from {:?} (format: {:?})", path, format);

    let mesh = match format {
        MeshFormat::Stl => stl::load_stl(path, transform, max_line_length)?,
    };

    info!(
        "Loaded mesh: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    if let Some((min, max)) = mesh.bounds() {
        let dims = max - min;
        debug!(
            "Bounding box: [{:.1}, {:.1}, {:.1}] to [{:.1}, {:.1}, {:.1}]",
            min.x, min.y, min.z, max.x, max.y, max.z
        );

        let max_dim = dims.x.max(dims.y).max(dims.z);
        if max_dim < 0.1 {
            warn!(
                "Mesh largest dimension is {:.6} - may need scaling",
                max_dim
            );
        }
    }

    Ok(mesh)
}

/// Load a mesh file into `object`.
///
/// On success exactly one mesh is appended to `object.meshes`; on failure
/// the object is left untouched.
pub fn load_mesh_file(
    object: &mut PrintObject,
    path: impl AsRef<Path>,
    transform: &Transform,
) -> MeshResult<()> {
    let mesh = load_mesh_with(path.as_ref(), transform, DEFAULT_MAX_LINE_LENGTH)?;
    object.meshes.push(mesh);
    Ok(())
}

/// Save a mesh to file. The output is always ASCII STL.
pub fn save_mesh(mesh: &Mesh, path: &Path) -> MeshResult<()> {
    stl::save_stl(mesh, path)
}
