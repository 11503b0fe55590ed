//! ASCII STL parsing.
//!
//! Only `vertex x y z` lines carry data. Every three of them form a face;
//! `facet`, `outer loop` and the closing keywords are not used to
//! synchronize, and a trailing group of fewer than three vertices is dropped.

use std::io::BufRead;

use nalgebra::Point3;
use tracing::debug;

use super::line::LineReader;
use crate::error::{MeshError, MeshResult};
use crate::transform::Transform;
use crate::types::Mesh;

/// Match a `vertex <f> <f> <f>` line.
///
/// Leading and inter-token whitespace is free-form. The keyword is case
/// sensitive and exactly three float tokens must follow it.
pub fn parse_vertex_line(line: &[u8]) -> Option<[f32; 3]> {
    let text = std::str::from_utf8(line).ok()?;
    let mut tokens = text.split_ascii_whitespace();

    if tokens.next()? != "vertex" {
        return None;
    }

    let x = tokens.next()?.parse::<f32>().ok()?;
    let y = tokens.next()?.parse::<f32>().ok()?;
    let z = tokens.next()?.parse::<f32>().ok()?;

    if tokens.next().is_some() {
        return None;
    }

    Some([x, y, z])
}

/// Parse ASCII STL text into `mesh`, then finish it.
///
/// Returns the number of faces added. Zero faces is not an error here.
pub fn read_ascii<R: BufRead>(
    reader: R,
    transform: &Transform,
    max_line_length: usize,
    mesh: &mut Mesh,
) -> MeshResult<usize> {
    let mut lines = LineReader::with_capacity(reader, max_line_length);
    let mut pending: [Point3<f64>; 3] = [Point3::origin(); 3];
    let mut collected = 0usize;
    let mut added = 0usize;
    let mut vertex_lines = 0usize;

    while let Some(line) = lines.next_line().map_err(MeshError::read)? {
        let Some(raw) = parse_vertex_line(line) else {
            continue;
        };
        vertex_lines += 1;

        pending[collected] = transform.apply(raw);
        collected += 1;

        if collected == 3 {
            mesh.add_face(pending[0], pending[1], pending[2])?;
            added += 1;
            collected = 0;
        }
    }

    if collected > 0 {
        debug!("Dropped {} trailing vertex line(s) without a full face", collected);
    }
    debug!(
        "ASCII STL: {} lines, {} vertex lines, {} faces",
        lines.lines_read(),
        vertex_lines,
        added
    );

    mesh.finish();
    Ok(added)
}
