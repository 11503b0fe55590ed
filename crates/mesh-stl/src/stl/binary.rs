//! Binary STL parsing.
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```

use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::transform::Transform;
use crate::types::{Mesh, MAX_FACES};

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute).
pub const RECORD_SIZE: usize = 50;

/// Cap on faces reserved up front, so a bogus count cannot force a huge allocation.
const MAX_PREALLOCATED_FACES: usize = 1 << 20;

fn truncated(err: io::Error, on_eof: impl FnOnce() -> MeshError) -> MeshError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        on_eof()
    } else {
        MeshError::read(err)
    }
}

/// Parse binary STL from the start of `reader` into `mesh`, then finish it.
///
/// Exactly as many records as the declared count are read. A short read
/// anywhere is a hard failure; faces added before it stay in `mesh` but the
/// load must not be treated as successful.
pub fn read_binary<R: Read>(
    reader: &mut R,
    transform: &Transform,
    mesh: &mut Mesh,
) -> MeshResult<usize> {
    let header_error = || MeshError::TruncatedHeader {
        path: Default::default(),
    };

    let mut header = [0u8; HEADER_SIZE];
    reader
        .read_exact(&mut header)
        .map_err(|e| truncated(e, header_error))?;
    let face_count = reader
        .read_u32::<LittleEndian>()
        .map_err(|e| truncated(e, header_error))?;

    debug!("Binary STL declares {} triangles", face_count);
    if face_count as usize > MAX_FACES {
        return Err(MeshError::TooManyFaces {
            path: Default::default(),
            limit: MAX_FACES,
        });
    }
    mesh.reserve((face_count as usize).min(MAX_PREALLOCATED_FACES));

    let mut normal = [0u8; 12];
    let mut coords = [0f32; 9];
    for index in 0..face_count {
        let record_error = || MeshError::TruncatedRecord {
            path: Default::default(),
            index,
            expected: face_count,
        };

        reader
            .read_exact(&mut normal)
            .map_err(|e| truncated(e, record_error))?;
        reader
            .read_f32_into::<LittleEndian>(&mut coords)
            .map_err(|e| truncated(e, record_error))?;

        mesh.add_face(
            transform.apply([coords[0], coords[1], coords[2]]),
            transform.apply([coords[3], coords[4], coords[5]]),
            transform.apply([coords[6], coords[7], coords[8]]),
        )?;

        reader
            .read_u16::<LittleEndian>()
            .map_err(|e| truncated(e, record_error))?;
    }

    mesh.finish();
    Ok(face_count as usize)
}
