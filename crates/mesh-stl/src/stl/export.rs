//! ASCII STL export.
//!
//! Output is the inverse of the ASCII reader: one `vertex` line per corner,
//! in stored order. Normals are always written as `0 0 0`.

use std::io::Write;

use crate::types::Mesh;

/// Object name written on the `solid` and `endsolid` lines.
pub const SOLID_NAME: &str = "name";

/// Write `mesh` as ASCII STL text.
pub fn write_ascii<W: Write>(mesh: &Mesh, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "solid {SOLID_NAME}")?;

    for tri in mesh.triangles() {
        writeln!(writer, "facet normal 0 0 0")?;
        writeln!(writer, "    outer loop")?;
        for v in tri.vertices() {
            writeln!(writer, "        vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "endfacet")?;
    }

    writeln!(writer, "endsolid {SOLID_NAME}")?;
    writer.flush()
}
