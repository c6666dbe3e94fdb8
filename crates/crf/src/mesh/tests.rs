use super::*;
use crate::error::PolyError;
use crate::geom::rand::{random_similarity, MotionCfg, ReplayToken};
use crate::geom::Vec3;
use approx::assert_relative_eq;
use std::f64::consts::FRAC_PI_2;

fn cube() -> Polyhedron {
    let vertices = (0..8)
        .map(|i| {
            Vec3::new(
                (i & 1) as f64 - 0.5,
                ((i >> 1) & 1) as f64 - 0.5,
                ((i >> 2) & 1) as f64 - 0.5,
            )
        })
        .collect();
    let faces = vec![
        vec![0, 2, 3, 1],
        vec![4, 5, 7, 6],
        vec![0, 1, 5, 4],
        vec![2, 6, 7, 3],
        vec![0, 4, 6, 2],
        vec![1, 3, 7, 5],
    ];
    Polyhedron::new(vertices, faces).unwrap()
}

fn cube_points_with_apex() -> Vec<Vec3> {
    let mut pts = cube().vertices().to_vec();
    pts.push(Vec3::new(0.0, 0.0, 0.5 + 0.5f64.sqrt()));
    pts
}

#[test]
fn cube_counts_and_measures() {
    let c = cube();
    assert_eq!((c.num_vertices(), c.num_edges(), c.num_faces()), (8, 12, 6));
    assert_relative_eq!(c.edge_length(), 1.0, epsilon = 1e-12);
    for f in c.face_handles() {
        assert!(f.normal().dot(&f.centroid()) > 0.0, "{f:?} not outward");
        assert!(f.is_valid());
        assert_relative_eq!(f.apothem(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(f.distance_to_center(), 0.5, epsilon = 1e-12);
    }
    for e in c.edges() {
        assert_relative_eq!(e.dihedral_angle(), FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(e.twin().twin(), e);
        assert_eq!(e.next().v1(), e.v2());
        assert_eq!(e.prev().v2(), e.v1());
    }
}

#[test]
fn vertex_fan_is_rotational() {
    let c = cube();
    for v in c.vertex_handles() {
        let faces = v.adjacent_faces();
        assert_eq!(faces.len(), 3);
        for k in 0..faces.len() {
            let f = faces[k];
            let g = faces[(k + 1) % faces.len()];
            let shared = f
                .vertex_indices()
                .iter()
                .filter(|i| g.vertex_indices().contains(i))
                .count();
            assert_eq!(shared, 2, "consecutive fan faces must share an edge");
        }
        // counterclockwise about the outward vertex direction
        let a = faces[0].centroid() - v.position();
        let b = faces[1].centroid() - v.position();
        assert!(a.cross(&b).dot(&v.position()) > 0.0);
    }
}

#[test]
fn open_or_inconsistent_tables_are_rejected() {
    let c = cube();
    let mut faces = c.faces().to_vec();
    faces.pop();
    assert!(matches!(
        Polyhedron::new(c.vertices().to_vec(), faces),
        Err(PolyError::MeshInvariantViolation(_))
    ));
    let mut faces = c.faces().to_vec();
    faces[0].reverse();
    assert!(Polyhedron::new(c.vertices().to_vec(), faces).is_err());
    let mut faces = c.faces().to_vec();
    faces[0][0] = 99;
    assert!(Polyhedron::new(c.vertices().to_vec(), faces).is_err());
    assert!(c.with_vertices(vec![Vec3::zeros(); 3]).is_err());
}

#[test]
fn handles_compare_by_mesh_identity() {
    let a = cube();
    let b = a.clone();
    assert_eq!(a.vertex(0), a.vertex(0));
    assert_ne!(a.vertex(0), b.vertex(0));
    assert_ne!(a.face(0), a.face(1));
}

#[test]
fn copy_on_write_leaves_source_untouched() {
    let a = cube();
    let b = a.map_vertices(|p| p * 2.0);
    assert_relative_eq!(a.edge_length(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(b.edge_length(), 2.0, epsilon = 1e-12);
    let mut edit = a.edit();
    edit.remove_faces([0]);
    assert!(edit.build().is_err());
    assert_eq!(a.num_faces(), 6);
}

#[test]
fn reflection_keeps_normals_outward() {
    let cfg = MotionCfg {
        allow_reflection: true,
        ..MotionCfg::default()
    };
    for i in 0..8 {
        let s = random_similarity(&cfg, ReplayToken::new(11, i));
        let m = cube().transform(&s);
        let c = m.centroid();
        for f in m.face_handles() {
            assert!(f.normal().dot(&(f.centroid() - c)) > 0.0);
        }
    }
    let m = cube().mirror();
    for f in m.face_handles() {
        assert!(f.normal().dot(&f.centroid()) > 0.0);
    }
}

#[test]
fn hit_face_prefers_faces_the_point_is_outside_of() {
    let c = cube();
    // outside +x by 0.2 but only 0.05 below the +z plane
    let hit = c.hit_face(&Vec3::new(0.7, 0.0, 0.45));
    assert_relative_eq!(hit.normal(), Vec3::x(), epsilon = 1e-12);
    let on_face = c.hit_face(&Vec3::new(0.1, -0.2, 0.5));
    assert_relative_eq!(on_face.normal(), Vec3::z(), epsilon = 1e-12);
    let inside = c.hit_face(&Vec3::new(0.0, -0.4, 0.1));
    assert_relative_eq!(inside.normal(), -Vec3::y(), epsilon = 1e-12);
}

#[test]
fn dedup_collapses_face_and_is_idempotent() {
    let c = cube();
    let top = [4, 5, 6, 7];
    let apex = Vec3::new(0.0, 0.0, 0.5);
    let collapsed = c.map_vertices(|p| if p.z > 0.0 { apex } else { *p });
    let once = collapsed.dedup().unwrap();
    assert_eq!(once.num_vertices(), 5);
    assert_eq!(once.face_counts().get(&3), Some(&4));
    assert_eq!(once.face_counts().get(&4), Some(&1));
    let twice = once.dedup().unwrap();
    assert_eq!(twice.vertices(), once.vertices());
    assert_eq!(twice.faces(), once.faces());
    assert!(top.iter().all(|&i| i < c.num_vertices()));
}

#[test]
fn hull_rebuilds_cube_and_augmented_cube() {
    let h = Polyhedron::from_points_hull(cube().vertices()).unwrap();
    assert_eq!(h.face_counts().get(&4), Some(&6));
    let aug = Polyhedron::from_points_hull(&cube_points_with_apex()).unwrap();
    assert_eq!((aug.num_vertices(), aug.num_edges(), aug.num_faces()), (9, 16, 9));
    assert_eq!(aug.face_counts().get(&3), Some(&4));
    for f in aug.face_handles() {
        assert!(f.normal().dot(&(f.centroid() - aug.centroid())) > 0.0);
    }
}

#[test]
fn pyramid_cap_found_and_removed() {
    let aug = Polyhedron::from_points_hull(&cube_points_with_apex()).unwrap();
    let found = caps(&aug);
    let pyramids: Vec<_> = found.iter().filter(|c| c.kind == CapKind::Pyramid).collect();
    assert_eq!(pyramids.len(), 1);
    let cap = pyramids[0];
    assert_eq!(cap.top, vec![8]);
    assert_eq!(cap.base(), 4);
    assert!(cap.normal(&aug).z > 0.99);
    let back = aug.without_cap(cap).unwrap();
    assert_eq!(back.num_vertices(), 8);
    assert_eq!(back.face_counts().get(&4), Some(&6));
}

#[test]
fn triangular_prism_has_three_digonal_cupolae() {
    let h = 3f64.sqrt() / 6.0;
    let mut pts = Vec::new();
    for z in [-0.5, 0.5] {
        pts.push(Vec3::new(2.0 * h, 0.0, z));
        pts.push(Vec3::new(-h, 0.5, z));
        pts.push(Vec3::new(-h, -0.5, z));
    }
    let prism = Polyhedron::from_points_hull(&pts).unwrap();
    let found = caps(&prism);
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|c| c.kind == CapKind::Cupola && c.base() == 2));
}

#[test]
fn export_round_trips_through_json() {
    let c = cube();
    let json = serde_json::to_string(&c.export()).unwrap();
    let back: MeshExport = serde_json::from_str(&json).unwrap();
    let m = Polyhedron::try_from(back).unwrap();
    assert_eq!(m.faces(), c.faces());
    assert_eq!(m.vertices(), c.vertices());
}

#[test]
fn congruence_ignores_placement_but_not_shape() {
    let c = cube();
    let cfg = MotionCfg {
        allow_reflection: true,
        ..MotionCfg::default()
    };
    for i in 0..8 {
        let moved = c.transform(&random_similarity(&cfg, ReplayToken::new(11, i)));
        assert!(is_congruent(&c, &moved, true));
        assert!(is_congruent(&moved, &c, true));
    }
    let stretched = c.map_vertices(|p| Vec3::new(p.x, p.y, 1.5 * p.z));
    assert!(!is_congruent(&c, &stretched, true));
    let aug = Polyhedron::from_points_hull(&cube_points_with_apex()).unwrap();
    assert!(!is_congruent(&c, &aug, true));
}
