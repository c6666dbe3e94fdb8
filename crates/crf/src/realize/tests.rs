use super::*;
use crate::specs::registry;
use approx::assert_relative_eq;
use std::collections::BTreeMap;

fn mesh(name: &str) -> Polyhedron {
    realize(&registry().resolve(name).unwrap()).unwrap()
}

fn histogram(pairs: &[(usize, usize)]) -> BTreeMap<usize, usize> {
    pairs.iter().copied().collect()
}

#[test]
fn every_specification_realizes_to_a_crf_solid() {
    for spec in registry().all() {
        let m = realize(&spec).unwrap_or_else(|e| panic!("{spec}: {e}"));
        assert!(m.is_crf(), "{spec}");
        assert_relative_eq!(m.edge_length(), 1.0, epsilon = 1e-9);
        assert!(m.centroid().norm() < 1e-9, "{spec} not centered");
        let euler = m.num_vertices() as i64 - m.num_edges() as i64 + m.num_faces() as i64;
        assert_eq!(euler, 2, "{spec}");
    }
}

#[test]
fn known_face_histograms() {
    let cases: [(&str, (usize, usize, usize), &[(usize, usize)]); 12] = [
        ("tetrahedron", (4, 6, 4), &[(3, 4)]),
        ("truncated icosidodecahedron", (120, 180, 62), &[(4, 30), (6, 20), (10, 12)]),
        ("snub dodecahedron", (60, 150, 92), &[(3, 80), (5, 12)]),
        ("digonal antiprism", (4, 6, 4), &[(3, 4)]),
        ("decagonal prism", (20, 30, 12), &[(4, 10), (10, 2)]),
        ("gyroelongated pentagonal rotunda", (30, 65, 37), &[(3, 30), (5, 6), (10, 1)]),
        ("elongated pentagonal gyrocupolarotunda", (35, 70, 37), &[(3, 15), (4, 15), (5, 7)]),
        ("gyrobifastigium", (8, 14, 8), &[(3, 4), (4, 4)]),
        ("augmented tridiminished icosahedron", (10, 15, 7), &[(3, 4), (5, 3)]),
        ("metabiaugmented truncated dodecahedron", (70, 120, 52), &[(3, 30), (4, 10), (5, 2), (10, 10)]),
        ("bigyrate diminished rhombicosidodecahedron", (55, 105, 52), &[(3, 15), (4, 25), (5, 11), (10, 1)]),
        ("snub square antiprism", (16, 40, 26), &[(3, 24), (4, 2)]),
    ];
    for (name, (v, e, f), hist) in cases {
        let m = mesh(name);
        assert_eq!((m.num_vertices(), m.num_edges(), m.num_faces()), (v, e, f), "{name}");
        assert_eq!(m.face_counts(), histogram(hist), "{name}");
    }
}

#[test]
fn sporadic_solids() {
    let cases = [
        ("sphenocorona", 10, 14),
        ("augmented sphenocorona", 11, 17),
        ("sphenomegacorona", 12, 18),
        ("hebesphenomegacorona", 14, 21),
        ("disphenocingulum", 16, 24),
        ("bilunabirotunda", 14, 14),
        ("triangular hebesphenorotunda", 18, 20),
        ("snub disphenoid", 8, 12),
    ];
    for (name, v, f) in cases {
        let m = mesh(name);
        assert_eq!((m.num_vertices(), m.num_faces()), (v, f), "{name}");
    }
}

#[test]
fn ortho_and_gyro_differ() {
    let ortho = mesh("triangular orthobicupola");
    let gyro = mesh("cuboctahedron");
    assert_eq!(ortho.face_counts(), gyro.face_counts());
    let spec = *registry().capstone.get_all_with_name("cuboctahedron")[0];
    assert_eq!(spec.gyrate, Some(crate::specs::Gyrate::Gyro));
    // the orthobicupola has a square-square edge, the cuboctahedron none
    let square_pair = |m: &Polyhedron| {
        m.edges()
            .iter()
            .any(|e| e.face().num_sides() == 4 && e.twin_face().num_sides() == 4)
    };
    assert!(square_pair(&ortho));
    assert!(!square_pair(&realize(&spec.into()).unwrap()));
}

#[test]
fn twists_are_mirror_images() {
    let all = registry().capstone.get_all_with_name("gyroelongated square bicupola");
    let left = realize(&(*all[0]).into()).unwrap();
    let right = realize(&(*all[1]).into()).unwrap();
    let mirrored = left.mirror();
    assert!(crate::mesh::is_congruent(&mirrored, &right, false));
    assert!(!crate::mesh::is_congruent(&left, &right, false));
    assert!(crate::mesh::is_congruent(&left, &right, true));
}

#[test]
fn alignments_give_distinct_solids() {
    let para = mesh("parabiaugmented dodecahedron");
    let meta = mesh("metabiaugmented dodecahedron");
    assert_eq!(para.face_counts(), meta.face_counts());
    assert!(!crate::mesh::is_congruent(&para, &meta, true));
}

#[test]
fn realization_is_deterministic() {
    let spec = registry().resolve("J70").unwrap();
    let a = realize(&spec).unwrap();
    let b = build(&spec).unwrap();
    assert_eq!(a.faces(), b.faces());
    for (p, q) in a.vertices().iter().zip(b.vertices()) {
        assert_relative_eq!(p, q, epsilon = 1e-12);
    }
}

#[test]
fn crf_hull_rejects_irregular_sets() {
    let mut pts = mesh("cube").vertices().to_vec();
    pts[0] *= 1.05;
    assert!(matches!(crf_hull(&pts), Err(PolyError::MeshInvariantViolation(_))));
}
