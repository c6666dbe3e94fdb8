//! Augment, diminish and gyrate: add, remove or rotate a single cap.
//!
//! These operations build the result mesh directly from the input: the
//! hull of the input plus cap points, the input without a cap, or the hull
//! with a cap turned by one rim step. The result is named by congruence
//! against the reference realizations.

use std::collections::{BTreeMap, HashMap};
use std::f64::consts::PI;
use std::sync::OnceLock;

use itertools::Itertools;
use tracing::debug;

use crate::error::{PolyError, Result};
use crate::geom::{rotate_about, Vec3};
use crate::mesh::{is_congruent, Cap, CapKind, Polyhedron};
use crate::realize::realize;
use crate::realize::stack::{cap_points, CapFrame};
use crate::specs::{registry, Gyrate, Specification};

use super::options::{AugmentOptions, CapOptions};
use super::{twist_of, AnimationData, OpResult, Operation, OperationInfo, SelectState, Solid};

/// Vertex count and face histogram.
type Signature = (usize, BTreeMap<usize, usize>);

/// Registered specifications grouped by the signature of their realization,
/// each group in family order. Built once.
fn by_signature() -> &'static HashMap<Signature, Vec<Specification>> {
    static INDEX: OnceLock<HashMap<Signature, Vec<Specification>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: HashMap<Signature, Vec<Specification>> = HashMap::new();
        for spec in registry().all() {
            match realize(&spec) {
                Ok(r) => index.entry((r.num_vertices(), r.face_counts())).or_default().push(spec),
                Err(e) => debug!(solid = %spec, error = %e, "left out of the signature index"),
            }
        }
        debug!(signatures = index.len(), "signature index built");
        index
    })
}

/// First registered specification whose realization is congruent to `mesh`.
/// Only specifications with the same vertex count and face histogram are realized.
pub(super) fn classify(mesh: &Polyhedron) -> Option<Specification> {
    let candidates = by_signature().get(&(mesh.num_vertices(), mesh.face_counts()))?;
    candidates
        .iter()
        .find(|spec| realize(spec).is_ok_and(|r| is_congruent(mesh, &r, false)))
        .copied()
}

/// `mesh` with coincident vertices merged, if that is a CRF solid. Vertex
/// order is kept when nothing merges.
pub(super) fn settle(mesh: &Polyhedron) -> Option<Polyhedron> {
    let merged = mesh.dedup().ok()?;
    merged.is_crf().then_some(merged)
}

/// Hull of `points` if it is a CRF solid on all of them, vertex order kept.
fn exact_hull(points: &[Vec3]) -> Option<Polyhedron> {
    let hull = settle(&Polyhedron::from_points_hull(points).ok()?)?;
    (hull.num_vertices() == points.len()).then_some(hull)
}

/// A candidate result: the options that produce it and its mesh.
#[derive(Clone, Debug)]
struct Outcome<O> {
    options: O,
    spec: Specification,
    mesh: Polyhedron,
    animation: AnimationData,
}

/// The single result the candidates agree on.
fn pick<O: std::fmt::Debug>(op: &'static str, solid: &Solid, found: Vec<Outcome<O>>) -> Result<Outcome<O>> {
    let mut iter = found.into_iter();
    let Some(first) = iter.next() else {
        return Err(PolyError::OperationNotApplicable {
            op,
            spec: solid.name(),
        });
    };
    let name = first.spec.name();
    if let Some(other) = iter.find(|o| o.spec.name() != name || twist_of(&o.spec) != twist_of(&first.spec)) {
        return Err(PolyError::domain(format!(
            "{op} on {}: leads to {name} and {}; choose one",
            solid.name(),
            other.spec.name()
        )));
    }
    Ok(first)
}

fn finish<O: std::fmt::Debug>(op: &'static str, solid: &Solid, outcome: Outcome<O>) -> OpResult {
    debug!(op, from_solid = %solid.name(), to_solid = %outcome.spec, options = ?outcome.options, "applied");
    OpResult {
        result: Solid::with_mesh(outcome.spec, outcome.mesh),
        animation: outcome.animation,
    }
}

fn dedup_options<O: PartialEq>(outcomes: Vec<Outcome<O>>) -> Vec<O> {
    let mut out: Vec<O> = Vec::new();
    for o in outcomes {
        if !out.contains(&o.options) {
            out.push(o.options);
        }
    }
    out
}

/// Caps that fit on a face with `sides` sides.
fn cap_kinds_for(sides: usize) -> &'static [CapKind] {
    match sides {
        3 | 5 => &[CapKind::Pyramid],
        4 => &[CapKind::Pyramid, CapKind::Cupola],
        6 | 8 => &[CapKind::Cupola],
        10 => &[CapKind::Cupola, CapKind::Rotunda],
        _ => &[],
    }
}

/// `Ortho` when some new square meets an old square across the rim.
fn rim_alignment(hull: &Polyhedron, rim: &[usize]) -> Gyrate {
    let squares_meet = rim.iter().circular_tuple_windows().any(|(&a, &b)| {
        hull.edge(a, b)
            .is_some_and(|e| e.face().num_sides() == 4 && e.twin_face().num_sides() == 4)
    });
    if squares_meet {
        Gyrate::Ortho
    } else {
        Gyrate::Gyro
    }
}

/// Add a pyramid, cupola or rotunda on a face.
#[derive(Debug)]
pub struct AugmentOp;

impl AugmentOp {
    fn face_outcomes(&self, solid: &Solid, fi: usize, request: &AugmentOptions) -> Vec<Outcome<AugmentOptions>> {
        let mesh = solid.mesh();
        let face = mesh.face(fi);
        let frame = CapFrame::on_face(&face);
        let plane = face.plane();
        let mut out = Vec::new();
        for &kind in cap_kinds_for(face.num_sides()) {
            if request.using.is_some_and(|u| u != kind) {
                continue;
            }
            let parities: &[u8] = if kind == CapKind::Pyramid { &[0] } else { &[0, 1] };
            for &parity in parities {
                let mut points = mesh.vertices().to_vec();
                points.extend(cap_points(kind, face.num_sides(), &frame, parity));
                let Some(hull) = exact_hull(&points) else { continue };
                let gyrate = (kind != CapKind::Pyramid).then(|| rim_alignment(&hull, face.vertex_indices()));
                if request.gyrate.is_some() && request.gyrate != gyrate {
                    continue;
                }
                let Some(spec) = classify(&hull) else { continue };
                let start: Vec<Vec3> = points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| if i < mesh.num_vertices() { *p } else { plane.project(p) })
                    .collect();
                let Ok(start) = hull.with_vertices(start) else { continue };
                out.push(Outcome {
                    options: AugmentOptions {
                        face: Some(fi),
                        using: Some(kind),
                        gyrate,
                    },
                    spec,
                    animation: AnimationData {
                        start,
                        end_vertices: points,
                    },
                    mesh: hull,
                });
            }
        }
        out
    }

    fn outcomes(&self, solid: &Solid, request: &AugmentOptions) -> Vec<Outcome<AugmentOptions>> {
        let n = solid.mesh().num_faces();
        let faces: Vec<usize> = match request.face {
            Some(f) if f < n => vec![f],
            Some(_) => Vec::new(),
            None => (0..n).collect(),
        };
        faces
            .into_iter()
            .flat_map(|fi| self.face_outcomes(solid, fi, request))
            .collect()
    }
}

impl OperationInfo for AugmentOp {
    fn name(&self) -> &'static str {
        "augment"
    }

    fn can_apply_to(&self, solid: &Solid) -> bool {
        let request = AugmentOptions::default();
        (0..solid.mesh().num_faces()).any(|fi| !self.face_outcomes(solid, fi, &request).is_empty())
    }

    fn has_options(&self, solid: &Solid) -> bool {
        self.all_option_combos(solid).len() > 1
    }
}

impl Operation for AugmentOp {
    type Options = AugmentOptions;

    fn all_option_combos(&self, solid: &Solid) -> Vec<AugmentOptions> {
        dedup_options(self.outcomes(solid, &AugmentOptions::default()))
    }

    fn apply(&self, solid: &Solid, options: &AugmentOptions) -> Result<OpResult> {
        let outcome = pick(self.name(), solid, self.outcomes(solid, options))?;
        Ok(finish(self.name(), solid, outcome))
    }

    fn face_selection_states(&self, solid: &Solid, options: &AugmentOptions) -> Vec<Option<SelectState>> {
        let combos = self.all_option_combos(solid);
        (0..solid.mesh().num_faces())
            .map(|f| {
                if options.face == Some(f) {
                    Some(SelectState::Selected)
                } else if combos.iter().any(|c| c.face == Some(f)) {
                    Some(SelectState::Selectable)
                } else {
                    None
                }
            })
            .collect()
    }

    fn hit_option(&self, solid: &Solid, hit: &Vec3) -> AugmentOptions {
        let face = solid.mesh().hit_face(hit).index();
        let request = AugmentOptions {
            face: Some(face),
            ..AugmentOptions::default()
        };
        self.outcomes(solid, &request)
            .into_iter()
            .next()
            .map_or(request, |o| o.options)
    }
}

/// Caps offered by the solid's forme, with their index.
fn mod_caps(solid: &Solid, rotatable: bool) -> Vec<(usize, Cap)> {
    solid
        .forme()
        .mod_caps()
        .into_iter()
        .enumerate()
        .filter(|(_, c)| !rotatable || c.kind != CapKind::Pyramid)
        .collect()
}

fn cap_selection(caps: &[(usize, Cap)], chosen: Option<usize>, faces: usize) -> Vec<Option<SelectState>> {
    (0..faces)
        .map(|f| {
            let mut state = None;
            for (i, _) in caps.iter().filter(|(_, c)| c.contains_face(f)) {
                if chosen == Some(*i) {
                    return Some(SelectState::Selected);
                }
                state = Some(SelectState::Selectable);
            }
            state
        })
        .collect()
}

fn cap_hit(caps: &[(usize, Cap)], solid: &Solid, hit: &Vec3) -> CapOptions {
    let face = solid.mesh().hit_face(hit).index();
    CapOptions {
        cap: caps.iter().find(|(_, c)| c.contains_face(face)).map(|(i, _)| *i),
    }
}

/// Remove a cap, closing the hole with its base.
#[derive(Debug)]
pub struct DiminishOp;

impl DiminishOp {
    fn outcomes(&self, solid: &Solid, request: &CapOptions) -> Vec<Outcome<CapOptions>> {
        let mesh = solid.mesh();
        let mut out = Vec::new();
        for (i, cap) in mod_caps(solid, false) {
            if request.cap.is_some_and(|c| c != i) {
                continue;
            }
            let Some(result) = mesh.without_cap(&cap).ok().and_then(|m| settle(&m)) else {
                continue;
            };
            let Some(spec) = classify(&result) else { continue };
            let plane = cap.boundary_plane(mesh);
            let end_vertices = mesh
                .vertices()
                .iter()
                .enumerate()
                .map(|(v, p)| if cap.contains_vertex(v) { plane.project(p) } else { *p })
                .collect();
            out.push(Outcome {
                options: CapOptions { cap: Some(i) },
                spec,
                mesh: result,
                animation: AnimationData {
                    start: mesh.clone(),
                    end_vertices,
                },
            });
        }
        out
    }
}

impl OperationInfo for DiminishOp {
    fn name(&self) -> &'static str {
        "diminish"
    }

    fn can_apply_to(&self, solid: &Solid) -> bool {
        !self.outcomes(solid, &CapOptions::default()).is_empty()
    }

    fn has_options(&self, solid: &Solid) -> bool {
        self.all_option_combos(solid).len() > 1
    }
}

impl Operation for DiminishOp {
    type Options = CapOptions;

    fn all_option_combos(&self, solid: &Solid) -> Vec<CapOptions> {
        dedup_options(self.outcomes(solid, &CapOptions::default()))
    }

    fn apply(&self, solid: &Solid, options: &CapOptions) -> Result<OpResult> {
        let outcome = pick(self.name(), solid, self.outcomes(solid, options))?;
        Ok(finish(self.name(), solid, outcome))
    }

    fn face_selection_states(&self, solid: &Solid, options: &CapOptions) -> Vec<Option<SelectState>> {
        let usable: Vec<Option<usize>> = self.all_option_combos(solid).into_iter().map(|o| o.cap).collect();
        let caps: Vec<(usize, Cap)> = mod_caps(solid, false)
            .into_iter()
            .filter(|(i, _)| usable.contains(&Some(*i)))
            .collect();
        cap_selection(&caps, options.cap, solid.mesh().num_faces())
    }

    fn hit_option(&self, solid: &Solid, hit: &Vec3) -> CapOptions {
        cap_hit(&mod_caps(solid, false), solid, hit)
    }
}

/// Turn a cupola or rotunda by one rim step.
#[derive(Debug)]
pub struct GyrateOp;

impl GyrateOp {
    fn outcomes(&self, solid: &Solid, request: &CapOptions) -> Vec<Outcome<CapOptions>> {
        let mesh = solid.mesh();
        let mut out = Vec::new();
        for (i, cap) in mod_caps(solid, true) {
            if request.cap.is_some_and(|c| c != i) {
                continue;
            }
            let axis = cap.normal(mesh);
            let center = cap.boundary_centroid(mesh);
            let angle = 2.0 * PI / cap.boundary.len() as f64;
            let points: Vec<Vec3> = mesh
                .vertices()
                .iter()
                .enumerate()
                .map(|(v, p)| if cap.contains_vertex(v) { rotate_about(p, &center, &axis, angle) } else { *p })
                .collect();
            let Some(hull) = exact_hull(&points) else { continue };
            let Some(spec) = classify(&hull) else { continue };
            out.push(Outcome {
                options: CapOptions { cap: Some(i) },
                spec,
                mesh: hull,
                animation: AnimationData {
                    start: mesh.clone(),
                    end_vertices: points,
                },
            });
        }
        out
    }
}

impl OperationInfo for GyrateOp {
    fn name(&self) -> &'static str {
        "gyrate"
    }

    fn can_apply_to(&self, solid: &Solid) -> bool {
        !self.outcomes(solid, &CapOptions::default()).is_empty()
    }

    fn has_options(&self, solid: &Solid) -> bool {
        self.all_option_combos(solid).len() > 1
    }
}

impl Operation for GyrateOp {
    type Options = CapOptions;

    fn all_option_combos(&self, solid: &Solid) -> Vec<CapOptions> {
        dedup_options(self.outcomes(solid, &CapOptions::default()))
    }

    fn apply(&self, solid: &Solid, options: &CapOptions) -> Result<OpResult> {
        let outcome = pick(self.name(), solid, self.outcomes(solid, options))?;
        Ok(finish(self.name(), solid, outcome))
    }

    fn face_selection_states(&self, solid: &Solid, options: &CapOptions) -> Vec<Option<SelectState>> {
        let usable: Vec<Option<usize>> = self.all_option_combos(solid).into_iter().map(|o| o.cap).collect();
        let caps: Vec<(usize, Cap)> = mod_caps(solid, true)
            .into_iter()
            .filter(|(i, _)| usable.contains(&Some(*i)))
            .collect();
        cap_selection(&caps, options.cap, solid.mesh().num_faces())
    }

    fn hit_option(&self, solid: &Solid, hit: &Vec3) -> CapOptions {
        cap_hit(&mod_caps(solid, true), solid, hit)
    }
}

pub static AUGMENT: AugmentOp = AugmentOp;
pub static DIMINISH: DiminishOp = DiminishOp;
pub static GYRATE: GyrateOp = GyrateOp;
