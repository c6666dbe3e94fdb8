use super::*;

#[test]
fn polygon_prefix_round_trip() {
    for n in [2, 3, 4, 5, 6, 8, 10] {
        let p = polygon_prefix(n).unwrap();
        assert_eq!(polygon_from_prefix(p), Some(n));
    }
    assert_eq!(polygon_prefix(7), None);
    assert_eq!(polygon_from_prefix("heptagonal"), None);
}

#[test]
fn canonical_name_accepts_alternates_and_escaped() {
    assert_eq!(canonical_name("cube").unwrap(), "cube");
    assert_eq!(canonical_name("square-prism").unwrap(), "cube");
    assert_eq!(canonical_name("augmented cube").unwrap(), "elongated square pyramid");
    assert_eq!(
        canonical_name("truncated-icosidodecahedron").unwrap(),
        "truncated icosidodecahedron"
    );
    assert!(matches!(
        canonical_name("great stellated dodecahedron"),
        Err(PolyError::InvalidName(_))
    ));
}

#[test]
fn alternates_are_never_canonical() {
    for (canon, alts) in tables::ALTERNATE_NAMES.iter() {
        assert!(is_canonical_name(canon), "{canon}");
        for a in alts.iter() {
            assert!(!is_canonical_name(a), "{a}");
            assert!(is_alternate_name(a));
        }
    }
    assert_eq!(alternate_names("triangular-prism"), &["fastigium", "digonal cupola"]);
    assert!(alternate_names("sphenocorona").is_empty());
}

#[test]
fn all_solid_names_counts() {
    // 5 Platonic + 13 Archimedean + 5 prisms + 5 antiprisms + 92 Johnson
    assert_eq!(all_solid_names().len(), 120);
    assert!(!all_solid_names().iter().any(|n| n == "square prism"));
}

#[test]
fn conway_symbols() {
    assert!(is_conway_symbol("J37"));
    assert!(is_conway_symbol("J0"));
    assert!(!is_conway_symbol("J93"));
    assert!(is_conway_symbol("P8"));
    assert!(!is_conway_symbol("P7"));
    assert!(is_conway_symbol("sD"));
    assert!(!is_conway_symbol("X3"));
    assert_eq!(from_conway_notation("J37").unwrap(), JOHNSON_SOLIDS[36]);
    assert_eq!(from_conway_notation("J37").unwrap(), "elongated square gyrobicupola");
    assert_eq!(from_conway_notation("A5").unwrap(), "pentagonal antiprism");
    assert_eq!(from_conway_notation("tI").unwrap(), "truncated icosahedron");
    assert!(from_conway_notation("J0").is_err());
}

#[test]
fn to_conway_inverts_from_conway_on_canonical_names() {
    for name in all_solid_names() {
        let sym = to_conway_notation(name).unwrap_or_else(|| panic!("{name}"));
        assert_eq!(&from_conway_notation(&sym).unwrap(), name);
    }
    assert_eq!(to_conway_notation("octagonal prism").as_deref(), Some("P8"));
}
