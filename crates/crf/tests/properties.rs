//! Property tests: deduplication and invariance under similarity.

use approx::assert_relative_eq;
use proptest::prelude::*;

use crf::geom::{Pose, Similarity};
use crf::mesh::{is_congruent, Polyhedron};
use crf::ops::{FacetOptions, Operation, Solid, TRUNCATE};
use crf::realize::realize;
use crf::specs::registry;
use crf::Vec3;

fn vec3() -> impl Strategy<Value = Vec3> {
    (-1.0..1.0f64, -1.0..1.0f64, -1.0..1.0f64).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

/// A random proper similarity: origin, scale and two directions that span a frame.
fn similarity() -> impl Strategy<Value = Similarity> {
    (vec3(), 0.2..5.0f64, vec3(), vec3())
        .prop_filter("degenerate frame", |(_, _, n, u)| n.norm() > 0.1 && n.cross(u).norm() > 0.1)
        .prop_map(|(origin, scale, n, u)| {
            let from = Pose {
                origin: Vec3::zeros(),
                scale: 1.0,
                orientation: [Vec3::z(), Vec3::x()],
            };
            let to = Pose {
                origin: origin * 3.0,
                scale,
                orientation: [n, u],
            };
            Similarity::between(&from, &to)
        })
}

fn same_mesh(a: &Polyhedron, b: &Polyhedron) -> bool {
    a.faces() == b.faces() && a.vertices().iter().zip(b.vertices()).all(|(p, q)| (p - q).norm() < 1e-12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn dedup_is_idempotent(index in 0usize..60, s in similarity()) {
        let spec = registry().all().nth(index).unwrap();
        let mesh = realize(&spec).unwrap().transform(&s);
        let once = mesh.dedup().unwrap();
        let twice = once.dedup().unwrap();
        prop_assert!(same_mesh(&once, &twice));
        prop_assert_eq!(once.num_vertices(), mesh.num_vertices());
    }

    #[test]
    fn congruence_ignores_placement(index in 0usize..60, s in similarity()) {
        let spec = registry().all().nth(index).unwrap();
        let mesh = realize(&spec).unwrap();
        let moved = mesh.transform(&s);
        prop_assert!(!s.is_reflection());
        prop_assert!(is_congruent(&mesh, &moved, false));
        prop_assert!(is_congruent(&moved, &mesh, false));
    }

    #[test]
    fn truncation_follows_the_input_placement(s in similarity()) {
        let spec = registry().resolve("dodecahedron").unwrap();
        let moved = Solid::with_mesh(spec, realize(&spec).unwrap().transform(&s));
        let r = TRUNCATE.apply(&moved, &FacetOptions::default()).unwrap();
        prop_assert_eq!(r.result.name(), "truncated dodecahedron");
        let c = r.result.mesh().centroid();
        let expected = moved.mesh().centroid();
        assert_relative_eq!(c, expected, epsilon = 1e-6 * s.scale);
        let reference = realize(&r.result.spec()).unwrap();
        prop_assert!(is_congruent(r.result.mesh(), &reference, false));
    }
}
