use super::*;
use crate::error::PolyError;
use crate::names::{all_solid_names, is_canonical_name};
use std::collections::HashSet;

#[test]
fn family_counts() {
    let r = registry();
    // 3 tetrahedral + 2 * (4 faceted pairs) + snub pairs + the rest
    assert_eq!(r.classical.len(), 6 + 2 * (2 * 2 + 3 + 2));
    assert_eq!(r.prismatic.len(), 13);
    assert_eq!(r.modified.len(), 7);
    assert_eq!(r.elementary.len(), 7);
    assert!(!r.is_empty());
}

#[test]
fn every_generated_name_is_canonical() {
    for spec in registry().all() {
        let name = spec.name();
        assert!(is_canonical_name(&name), "{spec:?} -> {name:?}");
    }
}

#[test]
fn every_canonical_name_resolves() {
    for name in all_solid_names() {
        let spec = registry().resolve(name).unwrap();
        assert_eq!(&spec.name(), name);
    }
}

#[test]
fn johnson_solids_have_a_construction() {
    let names: HashSet<String> = registry().all().map(|s| s.name()).collect();
    for j in crate::names::JOHNSON_SOLIDS {
        assert!(names.contains(j), "{j} missing");
    }
}

#[test]
fn resolution_follows_family_order() {
    let r = registry();
    assert!(r.resolve("octahedron").unwrap().is_classical());
    assert!(matches!(r.resolve("square antiprism").unwrap(), Specification::Prismatic(_)));
    assert!(r.resolve("gyroelongated pentagonal pyramid").unwrap().is_capstone());
    let all = r.all_with_name("gyroelongated pentagonal pyramid");
    assert!(all.iter().any(Specification::is_composite), "diminished icosahedron also realizes it");
}

#[test]
fn icosahedral_rhombi_names_resolve() {
    let r = registry();
    let rid = r.resolve("rhombicosidodecahedron").unwrap();
    let c = rid.as_classical().unwrap();
    assert_eq!((c.family, c.operation), (Family::Icosahedral, ClassicalOp::Cantellate));
    assert_eq!(rid.name(), "rhombicosidodecahedron");
    assert_eq!(r.resolve("rhombicuboctahedron").unwrap().name(), "rhombicuboctahedron");
    let para = r.resolve("parabigyrate rhombicosidodecahedron").unwrap();
    assert!(para.is_composite());
    assert!(r.resolve("diminished rhombicosidodecahedron").unwrap().is_composite());
    assert!(r.resolve("rhombiicosidodecahedron").is_err());
}

#[test]
fn tetrahedron_resolves_to_regular_family_three() {
    let spec = registry().resolve("tetrahedron").unwrap();
    let c = spec.as_classical().unwrap();
    assert_eq!(c.family, Family::Tetrahedral);
    assert_eq!(c.operation, ClassicalOp::Regular);
    assert_eq!(c.facet, None);
}

#[test]
fn alternate_escaped_and_conway_forms_resolve() {
    let r = registry();
    assert_eq!(r.resolve("square-prism").unwrap().name(), "cube");
    assert_eq!(r.resolve("augmented-cube").unwrap().name(), "elongated square pyramid");
    assert_eq!(r.resolve("J37").unwrap().name(), "elongated square gyrobicupola");
    assert_eq!(r.resolve("P4").unwrap().name(), "cube");
    assert_eq!(r.resolve("tT").unwrap().name(), "truncated tetrahedron");
    assert!(matches!(r.resolve("J93"), Err(PolyError::InvalidName(_))));
    assert!(matches!(r.resolve("great dodecahedron"), Err(PolyError::InvalidName(_))));
}

#[test]
fn queries_with_name_reports_family() {
    let r = registry();
    let prism = r.prismatic.with_name("cube").unwrap();
    assert_eq!(prism.base, 4);
    match r.elementary.with_name("cube") {
        Err(PolyError::NotFound { family, name }) => {
            assert_eq!(family, "elementary");
            assert_eq!(name, "cube");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(r.classical.has_name("snub cube"));
    assert_eq!(r.classical.get_all_with_name("snub cube").len(), 2);
    assert_eq!(r.capstone.where_(|c| c.is_rotunda()).count(), 3 + 6);
}

#[test]
fn illegal_combinations_are_never_generated() {
    let r = registry();
    assert!(r
        .prismatic
        .iter()
        .all(|p| !(p.base == 2 && p.kind == PrismType::Prism)));
    assert!(r.modified.iter().all(|m| !(m.base() == 5 && m.is_snub())));
    assert!(!r.capstone.iter().any(|c| c.is_pyramid() && c.base == 3 && c.is_gyroelongated() && c.count > 0));
    assert!(!r.capstone.iter().any(|c| c.base == 2 && c.count > 0 && !c.is_shortened()));
    for c in r.classical.iter() {
        let faceted = matches!(c.operation, ClassicalOp::Regular | ClassicalOp::Truncate) && !c.is_tetrahedral();
        assert_eq!(c.facet.is_some(), faceted, "{c:?}");
        assert_eq!(c.twist.is_some(), c.is_snub() && !c.is_tetrahedral(), "{c:?}");
    }
    for c in r.composite.iter() {
        assert_eq!(c.align.is_some(), c.has_alignment(), "{c:?}");
    }
}

#[test]
fn chiral_and_aligned_pairs_share_or_split_names() {
    let r = registry();
    assert_eq!(r.capstone.get_all_with_name("gyroelongated square bicupola").len(), 2);
    assert!(r.composite.has_name("parabiaugmented hexagonal prism"));
    assert!(r.composite.has_name("metabiaugmented hexagonal prism"));
    assert!(r.composite.has_name("paragyrate diminished rhombicosidodecahedron"));
    assert!(r.composite.has_name("augmented tridiminished icosahedron"));
}

#[test]
fn composite_transitions() {
    let r = registry();
    let j76 = *r.composite.with_name("diminished rhombicosidodecahedron").unwrap();
    assert_eq!(j76.augment_gyrate(Gyrate::Ortho).name(), "gyrate rhombicosidodecahedron");
    assert_eq!(j76.augment_gyrate(Gyrate::Gyro).name(), "rhombicosidodecahedron");
    let j72 = *r.composite.with_name("gyrate rhombicosidodecahedron").unwrap();
    assert_eq!(j72.ungyrate().name(), "rhombicosidodecahedron");
    let j61 = *r.composite.with_name("triaugmented dodecahedron").unwrap();
    assert_eq!(j61.diminish().name(), "metabiaugmented dodecahedron");
    let j63 = *r.composite.with_name("tridiminished icosahedron").unwrap();
    assert_eq!(j63.augment_diminished(true).name(), "augmented tridiminished icosahedron");
    assert_eq!(j63.augment_diminished(false).name(), "metabidiminished icosahedron");
}

#[test]
fn capstone_builders() {
    let r = registry();
    let j27 = *r.capstone.with_name("triangular orthobicupola").unwrap();
    assert_eq!(j27.with_elongation(Elongation::Prism, None, None).name(), "elongated triangular orthobicupola");
    let twisted = j27.with_elongation(Elongation::Antiprism, None, Some(Twist::Right));
    assert_eq!(twisted.twist, Some(Twist::Right));
    assert_eq!(twisted.gyrate, None);
    assert_eq!(Specification::from(j27.remove(CapType::Cupola)).name(), "triangular cupola");
    let j32 = *r.capstone.with_name("pentagonal orthocupolarotunda").unwrap();
    assert_eq!(j32.cap_types(), vec![CapType::Cupola, CapType::Rotunda]);
    assert_eq!(j32.remove(CapType::Cupola).name(), "pentagonal rotunda");
    let j6 = *r.capstone.with_name("pentagonal rotunda").unwrap();
    assert_eq!(j6.remove(CapType::Rotunda).count, 0);
}

#[test]
fn classical_builders_normalize_options() {
    let cube = *registry().classical.with_name("cube").unwrap();
    let snub = cube.with_operation(ClassicalOp::Snub, Some(Facet::Vertex), None);
    assert_eq!(snub.facet, None);
    assert_eq!(snub.twist, Some(Twist::Left));
    let oct = cube.with_operation(ClassicalOp::Regular, Some(Facet::Vertex), None);
    assert_eq!(Specification::from(oct).name(), "octahedron");
}

#[test]
fn specifications_serialize() {
    let spec = registry().resolve("J72").unwrap();
    let json = serde_json::to_string(&spec).unwrap();
    let back: Specification = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);
}

#[test]
fn native_constructions_represent_their_name() {
    let r = registry();
    let oct = *r.resolve("octahedron").unwrap().as_classical().unwrap();
    assert_eq!((oct.family, oct.facet), (Family::Octahedral, Some(Facet::Vertex)));
    let ico = *r.resolve("icosahedron").unwrap().as_classical().unwrap();
    assert_eq!(ico.family, Family::Icosahedral);
    let co = *r.resolve("cuboctahedron").unwrap().as_classical().unwrap();
    assert_eq!((co.family, co.operation), (Family::Octahedral, ClassicalOp::Rectify));
    assert_eq!(r.classical.get_all_with_name("octahedron").len(), 2);
}
