//! Container for the meshes that make up one printable object.

use std::path::Path;

use crate::config::LoadSettings;
use crate::error::MeshResult;
use crate::io;
use crate::Mesh;

/// An object built from one or more loaded meshes.
#[derive(Debug, Clone, Default)]
pub struct PrintObject {
    /// Meshes in load order.
    pub meshes: Vec<Mesh>,
}

impl PrintObject {
    /// Create an object with no meshes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a mesh file and append it. The object is unchanged on failure.
    pub fn load(&mut self, path: impl AsRef<Path>, settings: &LoadSettings) -> MeshResult<()> {
        let mesh = io::load_mesh(path.as_ref(), settings)?;
        self.meshes.push(mesh);
        Ok(())
    }

    /// Total faces across all meshes.
    pub fn face_count(&self) -> usize {
        self.meshes.iter().map(Mesh::face_count).sum()
    }
}
