//! Face-to-face connectivity for triangle soups.
//!
//! Loaded faces never share vertex indices, so edges are matched by the exact
//! coordinates of their endpoints instead.

use hashbrown::HashMap;
use nalgebra::Point3;

use crate::types::Vertex;

/// Exact bit pattern of a position, with `-0.0` folded into `0.0`.
type PointKey = [u64; 3];

fn point_key(p: &Point3<f64>) -> PointKey {
    let bits = |c: f64| if c == 0.0 { 0.0f64.to_bits() } else { c.to_bits() };
    [bits(p.x), bits(p.y), bits(p.z)]
}

/// Edge lookup keyed by endpoint positions.
#[derive(Debug, Clone, Default)]
pub struct EdgeMap {
    /// Maps edge (min_key, max_key) → faces that have this edge.
    /// Key order is canonical so both windings of an edge collide.
    pub edge_to_faces: HashMap<(PointKey, PointKey), Vec<u32>>,
}

impl EdgeMap {
    /// Build the edge map from a vertex list and its faces.
    pub fn build(vertices: &[Vertex], faces: &[[u32; 3]]) -> Self {
        let mut edge_to_faces: HashMap<(PointKey, PointKey), Vec<u32>> = HashMap::new();

        for (face_idx, face) in faces.iter().enumerate() {
            for (a, b) in face_edges(vertices, face) {
                edge_to_faces
                    .entry(edge_key(a, b))
                    .or_default()
                    .push(face_idx as u32);
            }
        }

        Self { edge_to_faces }
    }

    /// Faces sharing the edge between two positions.
    pub fn faces_on_edge(&self, a: &Point3<f64>, b: &Point3<f64>) -> &[u32] {
        self.edge_to_faces
            .get(&edge_key(point_key(a), point_key(b)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }
}

fn edge_key(a: PointKey, b: PointKey) -> (PointKey, PointKey) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn face_edges(vertices: &[Vertex], face: &[u32; 3]) -> [(PointKey, PointKey); 3] {
    let k = |i: u32| point_key(&vertices[i as usize].position);
    let [k0, k1, k2] = [k(face[0]), k(face[1]), k(face[2])];
    [(k0, k1), (k1, k2), (k2, k0)]
}

/// For every face, the first other face sharing each of its three edges.
pub fn connect_faces(vertices: &[Vertex], faces: &[[u32; 3]]) -> Vec<[Option<u32>; 3]> {
    let edges = EdgeMap::build(vertices, faces);

    faces
        .iter()
        .enumerate()
        .map(|(face_idx, face)| {
            let face_idx = face_idx as u32;
            let mut links = [None; 3];
            for (slot, (a, b)) in face_edges(vertices, face).into_iter().enumerate() {
                links[slot] = edges.edge_to_faces.get(&edge_key(a, b)).and_then(|shared| {
                    shared.iter().copied().find(|&other| other != face_idx)
                });
            }
            links
        })
        .collect()
}
