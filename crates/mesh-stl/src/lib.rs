//! STL mesh ingestion and export.
//!
//! This crate loads triangle meshes from STL files, in either the ASCII or the
//! binary encoding, and writes them back as ASCII STL:
//!
//! - **Detection**: the first five bytes are sniffed for `solid`; an ASCII
//!   pass that finds no faces falls back to the binary reader
//! - **Line endings**: `\n`, `\r` and `\r\n` are all accepted
//! - **Transform**: a 3x3 matrix is applied to every vertex while loading
//! - **Connectivity**: finished meshes know which face lies across each edge
//!
//! # Example
//!
//! ```no_run
//! use mesh_stl::{LoadSettings, Mesh};
//!
//! // Load a mesh, scaling inches to millimeters
//! let settings = LoadSettings::default().with_scale(25.4);
//! let mesh = Mesh::load("model.stl", &settings).unwrap();
//!
//! println!("{}", mesh.summary());
//!
//! // Write it back out as ASCII STL
//! mesh.save("model_mm.stl").unwrap();
//! ```

mod error;
mod types;

pub mod config;
pub mod connectivity;
pub mod io;
pub mod object;
pub mod stl;
pub mod summary;
pub mod transform;

// Re-export core types at crate root
pub use error::{MeshError, MeshResult};
pub use types::{Mesh, Triangle, Vertex, MAX_FACES};

pub use config::LoadSettings;
pub use io::{load_mesh, load_mesh_file, save_mesh, MeshFormat};
pub use object::PrintObject;
pub use stl::{load_stl, read_stl, save_stl, StlEncoding};
pub use summary::{log_summary, summarize, MeshSummary};
pub use transform::Transform;

// Convenience methods on Mesh
impl Mesh {
    /// Load a mesh from a file, choosing the reader from the file name.
    pub fn load(path: impl AsRef<std::path::Path>, settings: &LoadSettings) -> MeshResult<Self> {
        io::load_mesh(path.as_ref(), settings)
    }

    /// Save the mesh as ASCII STL.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> MeshResult<()> {
        io::save_mesh(self, path.as_ref())
    }

    /// Counts, bounds and open edges.
    pub fn summary(&self) -> MeshSummary {
        summary::summarize(self)
    }
}
