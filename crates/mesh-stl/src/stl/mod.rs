//! STL (Stereolithography) file format support.
//!
//! # Format Detection
//!
//! A file whose first five bytes spell `solid` (any case) is tried as ASCII
//! first. Many binary exporters also start their 80-byte header with `solid`,
//! so an ASCII pass that yields no faces is discarded and the same source is
//! re-read as binary. Anything else is read as binary directly.
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```

pub mod ascii;
pub mod binary;
pub mod export;
pub mod line;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{MeshError, MeshResult};
use crate::transform::Transform;
use crate::types::Mesh;

/// Number of bytes inspected to guess the encoding.
const SNIFF_LEN: usize = 5;

/// The two STL encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlEncoding {
    Ascii,
    Binary,
}

impl StlEncoding {
    /// Guess the encoding from the first bytes of a file.
    pub fn sniff(prefix: &[u8]) -> Self {
        if prefix.len() >= SNIFF_LEN && prefix[..SNIFF_LEN].eq_ignore_ascii_case(b"solid") {
            StlEncoding::Ascii
        } else {
            StlEncoding::Binary
        }
    }
}

/// Read an STL mesh from a seekable source, detecting the encoding.
///
/// The returned mesh is finished. Errors carry an empty path.
pub fn read_stl<R: BufRead + Seek>(
    reader: &mut R,
    transform: &Transform,
    max_line_length: usize,
) -> MeshResult<Mesh> {
    let mut prefix = [0u8; SNIFF_LEN];
    reader.read_exact(&mut prefix).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            MeshError::TooShort {
                path: Default::default(),
            }
        } else {
            MeshError::read(e)
        }
    })?;
    reader.rewind().map_err(MeshError::read)?;

    let mut mesh = Mesh::new();
    match StlEncoding::sniff(&prefix) {
        StlEncoding::Ascii => {
            debug!("STL starts with \"solid\", reading as ASCII");
            ascii::read_ascii(&mut *reader, transform, max_line_length, &mut mesh)?;

            if mesh.face_count() == 0 {
                info!("ASCII STL produced no faces, re-reading as binary");
                mesh.clear();
                reader.rewind().map_err(MeshError::read)?;
                binary::read_binary(reader, transform, &mut mesh)?;
            }
        }
        StlEncoding::Binary => {
            debug!("Reading as binary STL");
            binary::read_binary(reader, transform, &mut mesh)?;
        }
    }

    Ok(mesh)
}

/// Load a mesh from an STL file (binary or ASCII).
///
/// The file handle is released on every return path.
pub fn load_stl(path: &Path, transform: &Transform, max_line_length: usize) -> MeshResult<Mesh> {
    let file = File::open(path).map_err(|e| MeshError::IoRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let mesh = read_stl(&mut reader, transform, max_line_length).map_err(|e| e.with_path(path))?;

    debug!(
        "STL {:?}: {} vertices, {} faces",
        path,
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(mesh)
}

/// Save mesh to an ASCII STL file, truncating any existing file.
pub fn save_stl(mesh: &Mesh, path: &Path) -> MeshResult<()> {
    info!("Saving mesh to {:?}", path);

    let write_error = |e: std::io::Error| MeshError::IoWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(write_error)?;
    export::write_ascii(mesh, BufWriter::new(file)).map_err(write_error)?;

    info!("Saved {} triangles to {:?}", mesh.face_count(), path);

    Ok(())
}
