//! Mesh statistics and reporting.

use serde::Serialize;
use tracing::{debug, info};

use crate::Mesh;

/// Summary of a loaded mesh.
#[derive(Debug, Clone, Serialize)]
pub struct MeshSummary {
    /// Total vertex count.
    pub vertex_count: usize,

    /// Total face count.
    pub face_count: usize,

    /// Face edges with no neighbouring face. Only meaningful once the mesh is finished.
    pub open_edge_count: usize,

    /// Sum of face areas.
    pub surface_area: f64,

    /// Bounding box as (min_corner, max_corner).
    pub bounds: Option<([f64; 3], [f64; 3])>,

    /// Dimensions (x, y, z).
    pub dimensions: Option<[f64; 3]>,
}

impl MeshSummary {
    /// Check if the mesh has any geometry.
    pub fn has_geometry(&self) -> bool {
        self.vertex_count > 0 && self.face_count > 0
    }
}

impl std::fmt::Display for MeshSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mesh Summary:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;

        if let Some((min, max)) = &self.bounds {
            writeln!(
                f,
                "  Bounds: [{:.1}, {:.1}, {:.1}] to [{:.1}, {:.1}, {:.1}]",
                min[0], min[1], min[2], max[0], max[1], max[2]
            )?;
        }

        if let Some([dx, dy, dz]) = &self.dimensions {
            writeln!(f, "  Dimensions: {:.1} x {:.1} x {:.1}", dx, dy, dz)?;
        }

        writeln!(f, "  Surface area: {:.2}", self.surface_area)?;
        writeln!(f, "  Open edges: {}", self.open_edge_count)?;

        Ok(())
    }
}

/// Summarize a mesh.
pub fn summarize(mesh: &Mesh) -> MeshSummary {
    let bounds = mesh.bounds();
    let dimensions = bounds.map(|(min, max)| [max.x - min.x, max.y - min.y, max.z - min.z]);

    let summary = MeshSummary {
        vertex_count: mesh.vertex_count(),
        face_count: mesh.face_count(),
        open_edge_count: mesh.open_edge_count(),
        surface_area: mesh.triangles().map(|t| t.area()).sum(),
        bounds: bounds.map(|(min, max)| ([min.x, min.y, min.z], [max.x, max.y, max.z])),
        dimensions,
    };

    debug!("{}", summary);

    summary
}

/// Log a one-line summary.
pub fn log_summary(summary: &MeshSummary) {
    info!(
        "Mesh: {} verts, {} faces, {}",
        summary.vertex_count,
        summary.face_count,
        summary
            .dimensions
            .map(|d| format!("{:.1}x{:.1}x{:.1}", d[0], d[1], d[2]))
            .unwrap_or_default(),
    );
}
