//! End-to-end loading behaviour through the public API.

use std::io::{Cursor, Write};
use std::path::Path;

use mesh_stl::{
    load_mesh_file, read_stl, save_mesh, LoadSettings, Mesh, MeshError, PrintObject, Transform,
};
use nalgebra::Point3;
use tempfile::NamedTempFile;

const HEADER_SIZE: usize = 80;

fn binary_stl(header: &[u8], declared: u32, triangles: &[[f32; 9]]) -> Vec<u8> {
    let mut out = vec![0u8; HEADER_SIZE];
    out[..header.len()].copy_from_slice(header);
    out.extend_from_slice(&declared.to_le_bytes());
    for tri in triangles {
        out.extend_from_slice(&[0u8; 12]);
        for c in tri {
            out.extend_from_slice(&c.to_le_bytes());
        }
        out.extend_from_slice(&[0u8; 2]);
    }
    out
}

fn stl_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".stl").unwrap();
    file.write_all(bytes).unwrap();
    file
}

fn load(bytes: &[u8]) -> Result<Mesh, MeshError> {
    let file = stl_file(bytes);
    let mut object = PrintObject::new();
    load_mesh_file(&mut object, file.path(), &Transform::identity())?;
    assert_eq!(object.meshes.len(), 1);
    Ok(object.meshes.remove(0))
}

fn corners(mesh: &Mesh) -> Vec<Point3<f64>> {
    mesh.triangles().flat_map(|t| t.vertices()).collect()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(1.0)
}

const TWO_FACETS: &str = "solid cube_corner
  facet normal 0 0 -1
    outer loop
      vertex 0 0 0
      vertex 0 10 0
      vertex 10 0 0
    endloop
  endfacet
  facet normal 0 -1 0
    outer loop
      vertex 0 0 0
      vertex 10 0 0
      vertex 0 0 10
    endloop
  endfacet
endsolid cube_corner
";

#[test]
fn one_triangle_with_a_transform() {
    let file = stl_file(b"solid t\nvertex 1 2 3\nvertex 4 5 6\nvertex 7 8 9\nendsolid t\n");
    let mut object = PrintObject::new();
    let swap_yz = Transform::from_rows([[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]]);

    load_mesh_file(&mut object, file.path(), &swap_yz).unwrap();

    let mesh = &object.meshes[0];
    assert_eq!(mesh.face_count(), 1);
    assert_eq!(
        corners(mesh),
        vec![
            Point3::new(1.0, 3.0, 2.0),
            Point3::new(4.0, 6.0, 5.0),
            Point3::new(7.0, 9.0, 8.0),
        ]
    );
}

#[test]
fn partial_trailing_triangle_is_dropped() {
    let mut text = String::from(TWO_FACETS.trim_end_matches("endsolid cube_corner\n"));
    for i in 0..4 {
        text.push_str(&format!("      vertex {i} {i} {i}\n"));
    }
    text.push_str("endsolid cube_corner\n");

    let mesh = load(text.as_bytes()).unwrap();
    assert_eq!(mesh.face_count(), 3);
    assert_eq!(mesh.vertex_count(), 9);
}

#[test]
fn complete_triples_become_faces() {
    for (vertex_lines, expected_faces) in [(0, 0), (2, 0), (3, 1), (5, 1), (6, 2), (7, 2), (9, 3)] {
        let mut text = String::from("solid s\n");
        for i in 0..vertex_lines {
            text.push_str(&format!("vertex {i} 1 2\n"));
        }
        text.push_str("endsolid s\n");

        let result = load(text.as_bytes());
        if expected_faces == 0 {
            // nothing readable as ASCII and far too short for binary
            assert!(matches!(result, Err(MeshError::TruncatedHeader { .. })));
        } else {
            assert_eq!(result.unwrap().face_count(), expected_faces);
        }
    }
}

#[test]
fn binary_with_solid_header_loads_via_fallback() {
    let tri = [0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 5.0, 0.0];
    let mesh = load(&binary_stl(b"solid", 1, &[tri])).unwrap();

    assert_eq!(mesh.face_count(), 1);
    assert_eq!(mesh.triangle(0).unwrap().v1, Point3::new(5.0, 0.0, 0.0));
}

#[test]
fn fallback_matches_direct_binary_load() {
    let triangles = [
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        [-3.25, 7.5, 1e-3, 2.0, -8.0, 4.5, 0.125, 0.25, 0.5],
    ];

    let sniffed_ascii = load(&binary_stl(b"SOLID by some exporter", 3, &triangles)).unwrap();
    let sniffed_binary = load(&binary_stl(b"\x00binary", 3, &triangles)).unwrap();

    assert_eq!(sniffed_ascii.face_count(), 3);
    assert_eq!(corners(&sniffed_ascii), corners(&sniffed_binary));
    assert_eq!(sniffed_ascii.vertex_count(), sniffed_binary.vertex_count());
    assert_eq!(
        sniffed_ascii.connected_faces(0),
        sniffed_binary.connected_faces(0)
    );
}

#[test]
fn binary_faces_in_file_order() {
    let triangles: Vec<[f32; 9]> = (0..20)
        .map(|i| {
            let z = i as f32;
            [0.0, 0.0, z, 1.0, 0.0, z, 0.0, 1.0, z]
        })
        .collect();

    let mesh = load(&binary_stl(b"header", 20, &triangles)).unwrap();
    assert_eq!(mesh.face_count(), 20);
    for (i, tri) in mesh.triangles().enumerate() {
        assert_eq!(tri.v0.z, i as f64);
    }
}

#[test]
fn obj_extension_is_rejected_before_reading() {
    let mut file = NamedTempFile::with_suffix(".obj").unwrap();
    file.write_all(TWO_FACETS.as_bytes()).unwrap();
    let mut object = PrintObject::new();

    let err = load_mesh_file(&mut object, file.path(), &Transform::identity()).unwrap_err();
    assert!(matches!(err, MeshError::UnsupportedExtension { .. }));
    assert!(object.meshes.is_empty());

    // a path that does not exist fails the same way, so no open was attempted
    let err = load_mesh_file(&mut object, Path::new("/no/such/dir/part.obj"), &Transform::identity())
        .unwrap_err();
    assert!(matches!(err, MeshError::UnsupportedExtension { .. }));
}

#[test]
fn uppercase_extension_is_rejected() {
    let mut file = NamedTempFile::with_suffix(".STL").unwrap();
    file.write_all(TWO_FACETS.as_bytes()).unwrap();
    let mut object = PrintObject::new();

    assert!(matches!(
        load_mesh_file(&mut object, file.path(), &Transform::identity()),
        Err(MeshError::UnsupportedExtension { .. })
    ));
}

#[test]
fn truncated_binary_fails_without_a_mesh() {
    let tri = [0.0; 9];
    let bytes = binary_stl(b"", 5, &[tri, tri, tri]);

    let file = stl_file(&bytes);
    let mut object = PrintObject::new();
    let err = load_mesh_file(&mut object, file.path(), &Transform::identity()).unwrap_err();

    match err {
        MeshError::TruncatedRecord {
            path,
            index,
            expected,
        } => {
            assert_eq!(path, file.path());
            assert_eq!(index, 3);
            assert_eq!(expected, 5);
        }
        other => panic!("expected truncated record, got {other:?}"),
    }
    assert!(object.meshes.is_empty());
}

#[test]
fn line_endings_parse_identically() {
    let lf = TWO_FACETS.to_string();
    let cr = lf.replace('\n', "\r");
    let crlf = lf.replace('\n', "\r\n");

    let from_lf = load(lf.as_bytes()).unwrap();
    let from_cr = load(cr.as_bytes()).unwrap();
    let from_crlf = load(crlf.as_bytes()).unwrap();

    assert_eq!(from_lf.face_count(), 2);
    assert_eq!(corners(&from_lf), corners(&from_cr));
    assert_eq!(corners(&from_lf), corners(&from_crlf));
}

#[test]
fn missing_final_newline_drops_last_vertex() {
    // the unterminated third vertex is not a line, so ASCII finds no face and
    // the binary fallback runs out of bytes in the header
    let result = load(b"solid s\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0");
    assert!(matches!(result, Err(MeshError::TruncatedHeader { .. })));

    let mesh = load(b"solid s\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendsolid s").unwrap();
    assert_eq!(mesh.face_count(), 1);
}

#[test]
fn export_then_reparse_roundtrips() {
    let triangles = [
        [0.1, 0.2, 0.3, 1.0, -2.5, 3.75, 1e-5, 12345.678, -0.0],
        [3.0, 3.0, 3.0, 4.0, 3.0, 3.0, 3.0, 4.0, 3.0],
    ];
    let original = load(&binary_stl(b"", 2, &triangles)).unwrap();

    let out = NamedTempFile::with_suffix(".stl").unwrap();
    save_mesh(&original, out.path()).unwrap();

    let text = std::fs::read_to_string(out.path()).unwrap();
    assert!(text.starts_with("solid name\n"));
    assert!(text.trim_end().ends_with("endsolid name"));
    assert_eq!(text.matches("facet normal 0 0 0").count(), 2);

    let reparsed = Mesh::load(out.path(), &LoadSettings::default()).unwrap();
    assert_eq!(reparsed.face_count(), original.face_count());
    for (a, b) in corners(&original).iter().zip(corners(&reparsed).iter()) {
        assert!(approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z));
    }
}

#[test]
fn roundtrip_with_scaled_coordinates() {
    let settings = LoadSettings::default().with_scale(0.1);
    let file = stl_file(TWO_FACETS.as_bytes());
    let original = Mesh::load(file.path(), &settings).unwrap();

    let out = NamedTempFile::with_suffix(".stl").unwrap();
    original.save(out.path()).unwrap();
    let reparsed = Mesh::load(out.path(), &LoadSettings::default()).unwrap();

    assert_eq!(reparsed.face_count(), 2);
    for (a, b) in corners(&original).iter().zip(corners(&reparsed).iter()) {
        assert!(approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z));
    }
}

#[test]
fn in_memory_reader_matches_file_loader() {
    let from_memory = read_stl(
        &mut Cursor::new(TWO_FACETS.as_bytes()),
        &Transform::identity(),
        1024,
    )
    .unwrap();
    let from_file = load(TWO_FACETS.as_bytes()).unwrap();

    assert_eq!(corners(&from_memory), corners(&from_file));
    assert!(from_memory.is_finished());
}

#[test]
fn finished_mesh_links_shared_edges() {
    let mesh = load(TWO_FACETS.as_bytes()).unwrap();

    // both facets share the edge (0,0,0)-(10,0,0)
    let first = mesh.connected_faces(0).unwrap();
    let second = mesh.connected_faces(1).unwrap();
    assert_eq!(first.iter().flatten().count(), 1);
    assert_eq!(second.iter().flatten().count(), 1);
    assert_eq!(first[2], Some(1));
    assert_eq!(second[0], Some(0));
    assert_eq!(mesh.summary().open_edge_count, 4);
}

#[test]
fn settings_file_drives_the_load() {
    let mut settings_file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(settings_file, "scale = 2.0").unwrap();
    let settings = LoadSettings::from_toml_file(settings_file.path()).unwrap();

    let file = stl_file(TWO_FACETS.as_bytes());
    let mut object = PrintObject::new();
    object.load(file.path(), &settings).unwrap();

    let (_, max) = object.meshes[0].bounds().unwrap();
    assert_eq!(max, Point3::new(20.0, 20.0, 20.0));
}
