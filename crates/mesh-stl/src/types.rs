//! Core mesh data types.

use nalgebra::{Point3, Vector3};

use std::path::PathBuf;

use crate::connectivity;
use crate::error::{MeshError, MeshResult};

/// Largest face count whose vertices stay addressable with `u32` indices.
pub const MAX_FACES: usize = (u32::MAX / 3) as usize;

/// A vertex in the mesh.
///
/// Positions are in the destination coordinate space, after the load
/// transform has been applied. Vertices are never merged: every face owns
/// three of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a new vertex.
    #[inline]
    pub fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

/// A triangle mesh built incrementally from a triangle soup.
///
/// Faces are added with [`Mesh::add_face`] in source order, then
/// [`Mesh::finish`] links each face to its edge neighbours.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex data, three per face.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array, in source winding.
    pub faces: Vec<[u32; 3]>,

    /// Per face, the face across edge (v0,v1), (v1,v2) and (v2,v0).
    connected: Vec<[Option<u32>; 3]>,

    finished: bool,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with room for `face_count` faces.
    pub fn with_capacity(face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(face_count * 3),
            faces: Vec::with_capacity(face_count),
            connected: Vec::new(),
            finished: false,
        }
    }

    /// Reserve room for `additional` more faces.
    pub fn reserve(&mut self, additional: usize) {
        self.vertices.reserve(additional * 3);
        self.faces.reserve(additional);
    }

    /// Append one triangle. The three positions are stored as new vertices.
    ///
    /// Fails with [`MeshError::TooManyFaces`] once the new vertex indices would
    /// not fit in a `u32`.
    pub fn add_face(
        &mut self,
        v0: Point3<f64>,
        v1: Point3<f64>,
        v2: Point3<f64>,
    ) -> MeshResult<()> {
        let base = u32::try_from(self.vertices.len())
            .ok()
            .filter(|base| base.checked_add(2).is_some())
            .ok_or(MeshError::TooManyFaces {
                path: PathBuf::new(),
                limit: MAX_FACES,
            })?;
        self.vertices.push(Vertex::new(v0));
        self.vertices.push(Vertex::new(v1));
        self.vertices.push(Vertex::new(v2));
        self.faces.push([base, base + 1, base + 2]);
        self.finished = false;
        Ok(())
    }

    /// Signal that no more faces will be added and build face connectivity.
    pub fn finish(&mut self) {
        self.connected = connectivity::connect_faces(&self.vertices, &self.faces);
        self.finished = true;
    }

    /// Discard every face and vertex so a parse can be retried.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.connected.clear();
        self.finished = false;
    }

    /// Whether [`Mesh::finish`] has run since the last modification.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of vertices in the mesh.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces (triangles) in the mesh.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if mesh is empty (no vertices or faces).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Neighbouring faces of `face_idx`, one slot per edge.
    ///
    /// Returns `None` if the face does not exist or the mesh is not finished.
    pub fn connected_faces(&self, face_idx: usize) -> Option<[Option<u32>; 3]> {
        if !self.finished {
            return None;
        }
        self.connected.get(face_idx).copied()
    }

    /// Number of face edges with no neighbour. Zero until the mesh is finished.
    pub fn open_edge_count(&self) -> usize {
        self.connected
            .iter()
            .flat_map(|links| links.iter())
            .filter(|link| link.is_none())
            .count()
    }

    /// Compute the axis-aligned bounding box.
    /// Returns (min_corner, max_corner) or None if mesh is empty.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.vertices.first()?;
        let mut min = first.position;
        let mut max = first.position;

        for vertex in &self.vertices[1..] {
            let p = &vertex.position;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }

    /// Iterate over triangles in face order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }

    /// Get a specific triangle by face index.
    pub fn triangle(&self, face_idx: usize) -> Option<Triangle> {
        self.faces.get(face_idx).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }
}

/// A triangle with concrete vertex positions, in stored winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Point3<f64>,
    pub v1: Point3<f64>,
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// The three corners in order.
    #[inline]
    pub fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Compute the (unnormalized) face normal via cross product.
    #[inline]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the area of the triangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }
}
