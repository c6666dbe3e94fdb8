use super::*;
use crate::geom::is_inverse;
use crate::mesh::CapKind;
use crate::realize::realize;
use crate::specs::{registry, Align, Facet, PrismType, Prismatic, Twist};
use approx::assert_relative_eq;
use std::f64::consts::PI;

fn forme(name: &str) -> Forme {
    let spec = registry().resolve(name).unwrap();
    Forme::new(spec, realize(&spec).unwrap())
}

fn capstone(name: &str) -> CapstoneForme {
    let spec = (*registry().capstone.with_name(name).unwrap()).into();
    CapstoneForme::new(spec, realize(&spec).unwrap()).unwrap()
}

fn classical(name: &str) -> ClassicalForme {
    let spec = *registry().classical.with_name(name).unwrap();
    ClassicalForme::new(spec, realize(&spec.into()).unwrap())
}

fn composite(name: &str) -> CompositeForme {
    let spec = *registry().composite.with_name(name).unwrap();
    CompositeForme::new(spec, realize(&spec.into()).unwrap())
}

#[test]
fn dispatch_follows_family() {
    assert!(matches!(forme("octahedron"), Forme::Classical(_)));
    assert!(matches!(forme("hexagonal prism"), Forme::Capstone(_)));
    assert!(matches!(forme("pentagonal rotunda"), Forme::Capstone(_)));
    assert!(matches!(forme("augmented dodecahedron"), Forme::Composite(_)));
    assert!(matches!(forme("sphenocorona"), Forme::Generic(_)));
    let f = forme("sphenocorona");
    assert_eq!(f.spec().name(), "sphenocorona");
    assert_eq!(f.mesh().num_vertices(), 10);
}

#[test]
fn prism_ends_are_opposite_faces() {
    let f = capstone("hexagonal prism");
    assert_eq!(f.kind(), CapstoneKind::Prismatic);
    let ends = f.ends().unwrap();
    assert!(is_inverse(&ends.top.normal, &ends.bottom.normal));
    assert_eq!(ends.top.ring.len(), 6);
    assert_relative_eq!(f.prismatic_height().unwrap(), 1.0, epsilon = 1e-9);
    let sides = f.mesh().face_handles().filter(|g| f.is_side_face(g.index())).count();
    assert_eq!(sides, 6);
    assert!(f.end_caps().is_empty());
}

#[test]
fn mono_capstone_pairs_cap_with_base() {
    let f = capstone("pentagonal rotunda");
    assert_eq!(f.kind(), CapstoneKind::Mono);
    let ends = f.ends().unwrap();
    assert_eq!(ends.top.cap.as_ref().map(|c| c.kind), Some(CapKind::Rotunda));
    let base = ends.bottom.face.unwrap();
    assert_eq!(f.mesh().face(base).num_sides(), 10);
    assert_relative_eq!(f.prismatic_height().unwrap(), 0.0, epsilon = 1e-9);
    assert!(f.is_top(ends.top.cap.as_ref().unwrap().faces[0]));
    assert_eq!(f.containing_end(base), Some(1));
    // the rotunda's top pentagon
    let top = f.mesh().faces_with_num_sides(5).find(|g| f.is_facet_face(g.index(), 5));
    assert!(top.is_some());
}

#[test]
fn gyroelongated_band_has_antiprism_height() {
    let f = capstone("gyroelongated square pyramid");
    let h = (1.0 - 1.0 / (4.0 * (PI / 8.0).cos().powi(2))).sqrt();
    assert_relative_eq!(f.prismatic_height().unwrap(), h, epsilon = 1e-9);
    assert_eq!(f.end_caps().len(), 1);
}

#[test]
fn bi_capstone_splits_into_halves() {
    let f = capstone("elongated pentagonal orthobicupola");
    assert_eq!(f.kind(), CapstoneKind::Bi);
    assert_eq!(f.end_caps().len(), 2);
    let [top, bottom] = f.halves().unwrap();
    assert_eq!((top.len(), bottom.len()), (15, 15));
    let [a, b] = f.end_boundaries().unwrap();
    assert_eq!((a.len(), b.len()), (10, 10));

    let cr = capstone("pentagonal orthocupolarotunda");
    let ends = cr.ends().unwrap();
    assert_eq!(ends.top.cap.as_ref().map(|c| c.kind), Some(CapKind::Rotunda));
    assert_eq!(ends.bottom.cap.as_ref().map(|c| c.kind), Some(CapKind::Cupola));
}

#[test]
fn snub_antiprism_ends_are_its_squares() {
    let f = forme("snub square antiprism");
    let Forme::Capstone(f) = f else { panic!("snub square antiprism has capstone queries") };
    assert_eq!(f.kind(), CapstoneKind::Snub);
    let ends = f.ends().unwrap();
    assert_eq!((ends.top.ring.len(), ends.bottom.ring.len()), (4, 4));
    assert!(ends.top.face.is_some() && ends.bottom.face.is_some());
    assert!(is_inverse(&ends.top.normal, &ends.bottom.normal));
    let [top, bottom] = f.halves().unwrap();
    assert_eq!((top.len(), bottom.len()), (8, 8));
    let sides = f.mesh().face_handles().filter(|g| f.is_side_face(g.index())).count();
    assert_eq!(sides, 24);
    assert!(f.end_caps().is_empty());
}

#[test]
fn digonal_ends_are_opposite_edges() {
    let spec = Prismatic {
        base: 2,
        kind: PrismType::Antiprism,
    }
    .into();
    let f = CapstoneForme::new(spec, realize(&spec).unwrap()).unwrap();
    assert_eq!(f.kind(), CapstoneKind::Prismatic);
    let ends = f.ends().unwrap();
    assert_eq!((ends.top.ring.len(), ends.bottom.ring.len()), (2, 2));
    assert_eq!(ends.top.face, None);
    assert!(is_inverse(&ends.top.normal, &ends.bottom.normal));
    let shared = ends.top.ring.iter().filter(|v| ends.bottom.ring.contains(v)).count();
    assert_eq!(shared, 0);
    let [top, bottom] = f.halves().unwrap();
    assert_eq!((top.len(), bottom.len()), (2, 2));
    // regular tetrahedron with unit edges
    assert_relative_eq!(f.prismatic_height().unwrap(), 0.5f64.sqrt(), epsilon = 1e-9);
    assert_eq!(f.mesh().face_handles().filter(|g| f.is_side_face(g.index())).count(), 4);
}

#[test]
fn snub_disphenoid_ends_join_degree_four_vertices() {
    let Forme::Capstone(f) = forme("snub disphenoid") else {
        panic!("snub disphenoid has capstone queries")
    };
    assert_eq!(f.kind(), CapstoneKind::Snub);
    let ends = f.ends().unwrap();
    for end in [&ends.top, &ends.bottom] {
        assert_eq!(end.ring.len(), 2);
        assert!(end.ring.iter().all(|&v| f.mesh().vertex(v).degree() == 4));
    }
    assert!(is_inverse(&ends.top.normal, &ends.bottom.normal));
    let [top, bottom] = f.halves().unwrap();
    assert_eq!((top.len(), bottom.len()), (4, 4));
}

#[test]
fn antiprism_without_snub_stays_prismatic() {
    let spec = registry()
        .modified
        .iter()
        .find(|m| !m.is_snub() && m.base() == 4)
        .copied()
        .unwrap()
        .into();
    let f = CapstoneForme::new(spec, realize(&spec).unwrap()).unwrap();
    assert_eq!(f.kind(), CapstoneKind::Prismatic);
    assert_eq!(f.ends().unwrap().top.ring.len(), 4);
}

#[test]
fn anchor_borders_a_cap_triangle() {
    let f = capstone("square cupola");
    let ends = f.ends().unwrap();
    let cap = ends.top.cap.as_ref().unwrap();
    let a = ends.top.anchor(f.mesh());
    let k = ends.top.ring.iter().position(|&v| v == a).unwrap();
    let b = ends.top.ring[(k + 1) % ends.top.ring.len()];
    let tri = cap.faces.iter().any(|&fi| {
        let g = f.mesh().face(fi);
        g.num_sides() == 3 && g.vertex_indices().contains(&a) && g.vertex_indices().contains(&b)
    });
    assert!(tri);
}

#[test]
fn truncated_faces_split_big_and_small() {
    let f = classical("truncated cube");
    assert_eq!(f.big_faces().len(), 6);
    assert_eq!(f.small_faces().len(), 8);
    assert_eq!(f.facet_sides(Facet::Face), 8);
    assert!(classical("cube").big_faces().is_empty());
    let axis = f.main_axis(Facet::Face).unwrap();
    assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-9);
}

#[test]
fn expanded_faces_match_the_regular_solid() {
    let rco = classical("rhombicuboctahedron");
    assert_eq!(rco.expanded_faces(4).unwrap().len(), 6);
    assert_eq!(rco.expanded_faces(3).unwrap().len(), 8);
    let snub = classical("snub dodecahedron");
    assert_eq!(snub.expanded_faces(5).unwrap().len(), 12);
    assert_eq!(snub.expanded_faces(3).unwrap().len(), 20);

    // cantellated tetrahedron: one of the two tetrahedral sets of triangles
    let cant = ClassicalForme::new(
        registry()
            .classical
            .iter()
            .copied()
            .find(|c| c.is_tetrahedral() && c.is_cantellated())
            .unwrap(),
        realize(&registry().resolve("cuboctahedron").unwrap()).unwrap(),
    );
    let faces = cant.expanded_faces(3).unwrap();
    assert_eq!(faces.len(), 4);
    for (i, &a) in faces.iter().enumerate() {
        for &b in &faces[i + 1..] {
            let d = cant.mesh().face(a).normal().dot(&cant.mesh().face(b).normal());
            assert_relative_eq!(d, -1.0 / 3.0, epsilon = 1e-6);
        }
    }
    assert!(classical("cube").expanded_faces(4).is_err());
}

#[test]
fn snub_twist_is_detected() {
    let all = registry().classical.get_all_with_name("snub cube");
    for c in all {
        let f = ClassicalForme::new(*c, realize(&(*c).into()).unwrap());
        assert_eq!(f.twist(), c.twist);
        let mirrored = ClassicalForme::new(*c, f.mesh().mirror());
        assert_eq!(mirrored.twist(), c.twist.map(Twist::opposite));
    }
    assert_eq!(classical("cube").twist(), None);
}

#[test]
fn augmentations_and_alignment() {
    let one = composite("augmented dodecahedron");
    assert_eq!(one.mod_caps().len(), 1);
    let para = composite("parabiaugmented dodecahedron");
    assert_eq!(para.mod_caps().len(), 2);
    for cap in para.mod_caps() {
        assert_eq!(para.alignment(cap), Align::Para);
    }
    let meta = composite("metabiaugmented dodecahedron");
    for cap in meta.mod_caps() {
        assert_eq!(meta.alignment(cap), Align::Meta);
    }
    let prism = composite("biaugmented triangular prism");
    assert_eq!(prism.mod_caps().len(), 2);
}

#[test]
fn gyrate_cupolae_and_diminished_faces() {
    let rid = forme("rhombicosidodecahedron");
    assert!(!rid.mod_caps().is_empty());
    let plain = composite("gyrate rhombicosidodecahedron");
    assert!(plain.mod_caps().iter().any(|c| plain.is_gyrate(c)));
    let dim = composite("diminished rhombicosidodecahedron");
    let decagons = dim
        .mesh()
        .face_handles()
        .filter(|g| dim.is_diminished_face(g.index()))
        .count();
    assert_eq!(decagons, 1);
    assert!(dim.mod_caps().iter().all(|c| !dim.is_gyrate(c)));

    let ico = composite("metabidiminished icosahedron");
    let pentagons = ico
        .mesh()
        .face_handles()
        .filter(|g| ico.is_diminished_face(g.index()))
        .count();
    assert_eq!(pentagons, 2);
    assert!(ico.mod_caps().iter().all(|c| c.kind == CapKind::Pyramid));
}
