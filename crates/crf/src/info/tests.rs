use super::*;
use crate::error::PolyError;

fn info(name: &str) -> SolidInfo {
    SolidInfo::new(name).unwrap()
}

#[test]
fn solid_types() {
    assert_eq!(info("tetrahedron").solid_type(), SolidType::Platonic);
    assert_eq!(info("octahedron").solid_type(), SolidType::Platonic);
    assert_eq!(info("snub cube").solid_type(), SolidType::Archimedean);
    assert_eq!(info("decagonal prism").solid_type(), SolidType::Prism);
    assert_eq!(info("square antiprism").solid_type(), SolidType::Antiprism);
    assert_eq!(info("square pyramid").solid_type(), SolidType::Johnson);
    assert_eq!(info("J92").solid_type().as_str(), "Johnson solid");
}

#[test]
fn conway_symbols_name_the_solid() {
    assert_eq!(info("J92").name(), "triangular hebesphenorotunda");
    assert_eq!(info("P5").name(), "pentagonal prism");
    assert_eq!(info("tC").name(), "truncated cube");
    assert_eq!(info("J37").conway_symbol().as_deref(), Some("J37"));
}

#[test]
fn flags() {
    assert!(info("icosidodecahedron").is_quasi_regular());
    assert!(!info("icosahedron").is_quasi_regular());
    assert!(info("hexagonal antiprism").is_uniform());
    assert!(!info("gyrobifastigium").is_uniform());
    assert!(info("gyrobifastigium").is_honeycomb());
    assert!(info("snub dodecahedron").is_chiral());
    assert!(info("gyroelongated triangular bicupola").is_chiral());
    assert!(!info("icosahedron").is_chiral());
    assert!(!info("gyroelongated square bipyramid").is_chiral());
}

#[test]
fn names_and_symmetry() {
    let cube = info("square-prism");
    assert_eq!(cube.name(), "cube");
    assert_eq!(cube.alternate_names(), &["square prism"]);
    assert_eq!(cube.conway_symbol().as_deref(), Some("C"));
    assert_eq!(cube.order().unwrap(), 48);
    assert_eq!(info("icosahedron").symmetry().unwrap().symbol(), "Ih");
    assert_eq!(info("elongated square gyrobicupola").conway_symbol().as_deref(), Some("J37"));
    assert!(matches!(SolidInfo::new("tetrahedra"), Err(PolyError::InvalidName(_))));
}
