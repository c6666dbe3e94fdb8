use super::*;
use crate::specs::registry;

fn sym(name: &str) -> Symmetry {
    symmetry(&registry().resolve(name).unwrap()).unwrap()
}

#[test]
fn classical_orders() {
    let expected = [
        ("tetrahedron", 24),
        ("cube", 48),
        ("octahedron", 48),
        ("dodecahedron", 120),
        ("icosahedron", 120),
        ("truncated tetrahedron", 24),
        ("cuboctahedron", 48),
        ("truncated icosidodecahedron", 120),
        ("snub cube", 24),
        ("snub dodecahedron", 60),
    ];
    for (name, order) in expected {
        assert_eq!(sym(name).order(), order, "{name}");
    }
    for c in registry().classical.iter() {
        let s = symmetry(&(*c).into()).unwrap();
        assert_eq!(s.is_chiral(), c.is_snub(), "{c:?}");
    }
}

#[test]
fn tetrahedron_is_achiral_tetrahedral() {
    assert_eq!(
        sym("tetrahedron"),
        Symmetry::Polyhedral {
            family: Family::Tetrahedral,
            chiral: false
        }
    );
    assert_eq!(sym("tetrahedron").symbol(), "Td");
}

#[test]
fn capstone_cases() {
    assert_eq!(sym("square pyramid").symbol(), "C4v");
    assert_eq!(sym("pentagonal bipyramid").symbol(), "D5h");
    assert_eq!(sym("gyroelongated square bipyramid").symbol(), "D4d");
    assert_eq!(sym("triangular orthobicupola").symbol(), "D3h");
    assert_eq!(sym("square gyrobicupola").symbol(), "D4d");
    assert_eq!(sym("gyroelongated square bicupola").symbol(), "D4");
    assert_eq!(sym("pentagonal orthocupolarotunda").symbol(), "C5v");
    assert_eq!(sym("gyroelongated pentagonal cupolarotunda").symbol(), "C5");
    assert!(sym("gyroelongated pentagonal birotunda").is_chiral());
}

#[test]
fn composite_cases() {
    assert_eq!(sym("augmented triangular prism"), Symmetry::BIRADIAL);
    assert_eq!(sym("parabiaugmented hexagonal prism").symbol(), "D2h");
    assert_eq!(sym("metabiaugmented hexagonal prism"), Symmetry::BIRADIAL);
    assert_eq!(sym("triaugmented triangular prism").symbol(), "D3h");
    assert_eq!(sym("augmented dodecahedron").symbol(), "C5v");
    assert_eq!(sym("parabiaugmented dodecahedron").symbol(), "D5d");
    assert_eq!(sym("metabiaugmented dodecahedron"), Symmetry::BIRADIAL);
    assert_eq!(sym("biaugmented truncated cube").symbol(), "D4h");
    assert_eq!(sym("paragyrate diminished rhombicosidodecahedron").symbol(), "C5v");
    assert_eq!(sym("metagyrate diminished rhombicosidodecahedron"), Symmetry::BILATERAL);
    assert_eq!(sym("trigyrate rhombicosidodecahedron").symbol(), "C3v");
    assert_eq!(sym("bigyrate diminished rhombicosidodecahedron"), Symmetry::BILATERAL);
    assert_eq!(sym("augmented tridiminished icosahedron").symbol(), "C3v");
}

#[test]
fn too_many_modifications_is_an_error() {
    let j72 = *registry().composite.with_name("gyrate rhombicosidodecahedron").unwrap();
    let bad = Composite {
        augmented: 3,
        diminished: 2,
        ..j72
    };
    assert!(matches!(
        symmetry(&bad.into()),
        Err(PolyError::SpecificationDomain(_))
    ));
}

#[test]
fn modified_and_elementary() {
    assert_eq!(sym("snub disphenoid").symbol(), "D2d");
    assert_eq!(sym("snub square antiprism").symbol(), "D4d");
    assert_eq!(sym("disphenocingulum").symbol(), "D2d");
    assert_eq!(sym("bilunabirotunda").symbol(), "D2h");
    assert_eq!(sym("triangular hebesphenorotunda").symbol(), "C3v");
    assert_eq!(sym("augmented sphenocorona").symbol(), "Cs");
    assert_eq!(sym("sphenocorona").symbol(), "C2v");
}

#[test]
fn every_specification_has_a_symmetry() {
    for spec in registry().all() {
        let s = symmetry(&spec).unwrap();
        assert!(s.order() >= 2, "{spec}: {s}");
    }
}

#[test]
fn names() {
    assert_eq!(Symmetry::BILATERAL.name(), "bilateral");
    assert_eq!(Symmetry::BIRADIAL.name(), "biradial");
    assert_eq!(sym("square pyramid").name(), "square pyramidal");
    assert_eq!(sym("pentagonal antiprism").name(), "pentagonal antiprismatic");
    assert_eq!(sym("snub cube").name(), "chiral octahedral");
    assert_eq!(sym("snub cube").to_string(), "O");
}
