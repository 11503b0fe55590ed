//! Error types for mesh loading and saving.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while loading or saving a mesh.
///
/// Readers that operate on in-memory sources report an empty `path`; the
/// file-level entry points fill in the real one.
#[derive(Debug, Error)]
pub enum MeshError {
    /// File extension is not a recognized mesh format. Raised before any I/O.
    #[error("unsupported mesh format for {path}: {extension:?}")]
    UnsupportedExtension {
        path: PathBuf,
        extension: Option<String>,
    },

    /// Error opening or reading a file.
    #[error("failed to read mesh from {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error opening or writing a file.
    #[error("failed to write mesh to {path}: {source}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer than 5 bytes available, so the file cannot be either STL encoding.
    #[error("{path} is too short to be an STL file")]
    TooShort { path: PathBuf },

    /// Binary STL ended inside the 80-byte header or the triangle count.
    #[error("truncated binary STL header in {path}")]
    TruncatedHeader { path: PathBuf },

    /// Binary STL ended inside a triangle record.
    #[error("truncated binary STL in {path}: record {index} of {expected} is incomplete")]
    TruncatedRecord {
        path: PathBuf,
        index: u32,
        expected: u32,
    },

    /// More faces than `u32` vertex indices can address.
    #[error("{path} has more than {limit} faces")]
    TooManyFaces { path: PathBuf, limit: usize },

    /// Load settings could not be parsed.
    #[error("invalid load settings: {details}")]
    Config { details: String },
}

impl MeshError {
    /// Attach a file path to an error produced by a path-less reader.
    pub(crate) fn with_path(self, path: &std::path::Path) -> Self {
        let path = path.to_path_buf();
        match self {
            MeshError::IoRead { source, .. } => MeshError::IoRead { path, source },
            MeshError::IoWrite { source, .. } => MeshError::IoWrite { path, source },
            MeshError::TooShort { .. } => MeshError::TooShort { path },
            MeshError::TruncatedHeader { .. } => MeshError::TruncatedHeader { path },
            MeshError::TruncatedRecord {
                index, expected, ..
            } => MeshError::TruncatedRecord {
                path,
                index,
                expected,
            },
            MeshError::TooManyFaces { limit, .. } => MeshError::TooManyFaces { path, limit },
            other => other,
        }
    }

    /// Wrap a read-side I/O error from an in-memory source.
    pub(crate) fn read(source: std::io::Error) -> Self {
        MeshError::IoRead {
            path: PathBuf::new(),
            source,
        }
    }
}
