use super::options::{OptionSet, Opts};
use super::*;
use crate::error::PolyError;
use crate::mesh::{is_congruent, CapKind};
use crate::specs::{Facet, Gyrate};

fn solid(name: &str) -> Solid {
    Solid::from_name(name).unwrap()
}

/// The result mesh realizes the result spec and the animation is consistent.
fn check(r: &OpResult) {
    let reference = realize(&r.result.spec()).unwrap();
    assert!(is_congruent(r.result.mesh(), &reference, true), "{}", r.result.name());
    assert_eq!(r.animation.start.num_vertices(), r.animation.end_vertices.len());
}

#[test]
fn operations_have_distinct_names() {
    let names: Vec<&str> = operations().iter().map(|op| op.name()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
    assert_eq!(names[0], "truncate");
}

#[test]
fn requests_admit_entries_field_by_field() {
    let entry = Opts {
        facet: Some(Facet::Face),
        face_type: Some(4),
        ..Opts::default()
    };
    assert!(entry.admits(&Opts::default()));
    assert!(entry.admits(&Opts {
        face_type: Some(4),
        ..Opts::default()
    }));
    assert!(!entry.admits(&Opts {
        face_type: Some(3),
        ..Opts::default()
    }));
    assert!(!entry.admits(&Opts {
        twist: Some(Twist::Left),
        ..Opts::default()
    }));
    let turn = TurnOptions {
        twist: Some(Twist::Right),
        gyrate: None,
    };
    assert_eq!(TurnOptions::from_opts(&turn.to_opts()), turn);
}

#[test]
fn truncate_and_sharpen_cube() {
    let cube = solid("cube");
    assert!(TRUNCATE.can_apply_to(&cube));
    assert!(!SHARPEN.can_apply_to(&cube));
    let t = TRUNCATE.apply(&cube, &FacetOptions::default()).unwrap();
    assert_eq!(t.result.name(), "truncated cube");
    check(&t);
    let back = SHARPEN.apply(&t.result, &FacetOptions::default()).unwrap();
    assert_eq!(back.result.name(), "cube");
    check(&back);
}

#[test]
fn sharpened_end_state_collapses_to_the_result() {
    let t = solid("truncated cube");
    let r = SHARPEN.apply(&t, &FacetOptions::default()).unwrap();
    assert_eq!(r.animation.end_vertices.len(), 24);
    let end = r.animation.start.with_vertices(r.animation.end_vertices.clone()).unwrap();
    let merged = end.dedup().unwrap();
    assert_eq!(merged.num_vertices(), 8);
    assert_eq!(merged.face_counts(), r.result.mesh().face_counts());
    assert!(is_congruent(&merged, r.result.mesh(), false));
}

#[test]
fn morphs_that_do_not_collapse_onto_the_goal_are_rejected() {
    let cube = realize(&registry().resolve("cube").unwrap()).unwrap();
    let t = realize(&registry().resolve("truncated cube").unwrap()).unwrap();
    assert!(!pair::collapses_onto(&t, &cube));
    assert!(pair::collapses_onto(&cube, &cube));
    let r = TRUNCATE.apply(&solid("cube"), &FacetOptions::default()).unwrap();
    assert!(pair::collapses_onto(&r.animation.start, &cube));
}

#[test]
fn cut_paste_results_are_settled_before_naming() {
    let cube = solid("cube");
    let kept = cut_paste::settle(cube.mesh()).unwrap();
    assert_eq!(kept.vertices(), cube.mesh().vertices());
    let r = SHARPEN.apply(&solid("truncated cube"), &FacetOptions::default()).unwrap();
    let end = r.animation.start.with_vertices(r.animation.end_vertices).unwrap();
    let settled = cut_paste::settle(&end).unwrap();
    assert_eq!(settled.num_vertices(), 8);
    assert!(is_congruent(&settled, cube.mesh(), false));
    let flattened = cube.mesh().map_vertices(|p| Vec3::new(p.x, p.y, p.z.min(0.0)));
    assert!(cut_paste::settle(&flattened).is_none());
}

#[test]
fn classify_names_by_signature_then_congruence() {
    let cube = solid("cube");
    assert_eq!(cut_paste::classify(cube.mesh()).map(|s| s.name()).as_deref(), Some("cube"));
    let prism = solid("triangular prism");
    assert_eq!(cut_paste::classify(prism.mesh()).map(|s| s.name()).as_deref(), Some("triangular prism"));
    // same counts as the prism, but twice as tall
    let tall = prism.mesh().map_vertices(|p| Vec3::new(p.x, p.y, p.z * 2.0));
    assert_eq!(tall.face_counts(), prism.mesh().face_counts());
    assert_eq!(cut_paste::classify(&tall), None);
    let truncated = solid("truncated cube");
    assert_eq!(cut_paste::classify(truncated.mesh()).map(|s| s.name()).as_deref(), Some("truncated cube"));
}

#[test]
fn rectify_then_contract_needs_a_face_type() {
    let r = RECTIFY.apply(&solid("cube"), &FacetOptions::default()).unwrap();
    assert_eq!(r.result.name(), "cuboctahedron");
    check(&r);
    let co = r.result;
    assert!(CONTRACT.has_options(&co));
    assert!(matches!(
        CONTRACT.apply(&co, &ExpandOptions::default()),
        Err(PolyError::SpecificationDomain(_))
    ));
    let tet = CONTRACT.apply(&co, &ExpandOptions { face_type: Some(3) }).unwrap();
    assert_eq!(tet.result.name(), "tetrahedron");
    let oct = CONTRACT.apply(&co, &ExpandOptions { face_type: Some(4) }).unwrap();
    assert_eq!(oct.result.name(), "octahedron");
    check(&oct);
    assert!(!CONTRACT.can_apply_to(&solid("octahedron")));
}

#[test]
fn expand_and_snub_cube() {
    let cube = solid("cube");
    let e = EXPAND.apply(&cube, &ExpandOptions::default()).unwrap();
    assert_eq!(e.result.name(), "rhombicuboctahedron");
    check(&e);
    let combos = SNUB.all_option_combos(&cube);
    assert_eq!(combos.len(), 2);
    let s = SNUB
        .apply(
            &cube,
            &SnubOptions {
                twist: Some(Twist::Right),
                ..SnubOptions::default()
            },
        )
        .unwrap();
    assert_eq!(s.result.name(), "snub cube");
    assert_eq!(twist_of(&s.result.spec()), Some(Twist::Right));
    check(&s);
}

#[test]
fn not_applicable_is_reported() {
    let err = TRUNCATE.apply(&solid("sphenocorona"), &FacetOptions::default()).unwrap_err();
    assert!(matches!(err, PolyError::OperationNotApplicable { op: "truncate", .. }));
    assert!(!ELONGATE.can_apply_to(&solid("cube")));
}

#[test]
fn elongate_and_shorten_pyramid() {
    let pyr = solid("square pyramid");
    let e = ELONGATE.apply(&pyr, &()).unwrap();
    assert_eq!(e.result.name(), "elongated square pyramid");
    check(&e);
    let back = SHORTEN.apply(&e.result, &ShortenOptions::default()).unwrap();
    assert_eq!(back.result.name(), "square pyramid");
    check(&back);
}

#[test]
fn gyroelongated_bicupola_shortens_to_either_alignment() {
    let g = GYROELONGATE
        .apply(
            &solid("square orthobicupola"),
            &TwistOptions {
                twist: Some(Twist::Left),
            },
        )
        .unwrap();
    assert_eq!(g.result.name(), "gyroelongated square bicupola");
    check(&g);
    let combos = SHORTEN.all_option_combos(&g.result);
    assert_eq!(combos.len(), 2);
    for gyrate in [Gyrate::Ortho, Gyrate::Gyro] {
        let r = SHORTEN.apply(&g.result, &ShortenOptions { gyrate: Some(gyrate) }).unwrap();
        assert_eq!(r.result.spec().as_capstone().and_then(|c| c.gyrate), Some(gyrate));
        check(&r);
    }
}

#[test]
fn turn_pentagonal_prism() {
    let t = TURN.apply(&solid("pentagonal prism"), &TurnOptions::default()).unwrap();
    assert_eq!(t.result.name(), "pentagonal antiprism");
    check(&t);
    let back = TURN.apply(&t.result, &TurnOptions::default()).unwrap();
    assert_eq!(back.result.name(), "pentagonal prism");
}

#[test]
fn augment_cube_face_with_pyramid() {
    let cube = solid("cube");
    let r = AUGMENT
        .apply(
            &cube,
            &AugmentOptions {
                face: Some(0),
                using: Some(CapKind::Pyramid),
                gyrate: None,
            },
        )
        .unwrap();
    assert_eq!(r.result.name(), "elongated square pyramid");
    check(&r);
    let states = AUGMENT.face_selection_states(
        &cube,
        &AugmentOptions {
            face: Some(0),
            ..AugmentOptions::default()
        },
    );
    assert_eq!(states[0], Some(SelectState::Selected));
    assert!(states[1..].iter().all(|s| *s == Some(SelectState::Selectable)));
}

#[test]
fn diminish_restores_the_cube() {
    let e = solid("elongated square pyramid");
    let r = DIMINISH.apply(&e, &CapOptions::default()).unwrap();
    assert_eq!(r.result.name(), "cube");
    check(&r);
    assert!(!DIMINISH.can_apply_to(&solid("cube")));
}

#[test]
fn gyrate_switches_bicupola_alignment() {
    let ortho = solid("pentagonal orthobicupola");
    let r = GYRATE.apply(&ortho, &CapOptions::default()).unwrap();
    assert_eq!(r.result.name(), "pentagonal gyrobicupola");
    check(&r);
    let back = GYRATE.apply(&r.result, &CapOptions::default()).unwrap();
    assert_eq!(back.result.name(), "pentagonal orthobicupola");
}
