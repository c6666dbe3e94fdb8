//! Truncate, rectify and their inverse, sharpen.
//!
//! Both pairs read the animation off the truncated solid: its big faces lie in
//! the regular solid's face planes, so the regular, truncated and rectified
//! solids share the pose `(center, face distance, [face normal, corner])`.

use crate::error::{PolyError, Result};
use crate::forme::ClassicalForme;
use crate::geom::{Pose, Vec3};
use crate::mesh::{Face, Polyhedron};
use crate::specs::{registry, Classical, ClassicalOp, Facet, Specification};

use super::options::{FacetOptions, Opts};
use super::pair::{Entry, OperationPair, PairOperation, PairRules, Part, Pos};

/// Pose on `face`, oriented toward `up`.
pub(super) fn face_pose(mesh: &Polyhedron, face: &Face<'_>, up: Vec3, scale: f64) -> Pose {
    Pose {
        origin: mesh.centroid(),
        scale,
        orientation: [face.normal(), up - face.centroid()],
    }
}

pub(super) fn classical(spec: &Specification) -> Result<Classical> {
    spec.as_classical()
        .copied()
        .ok_or_else(|| PolyError::domain(format!("{spec} is not classical")))
}

/// Facet of the regular solid on the left of `entry`.
fn facet(entry: &Entry) -> Facet {
    entry.left.as_classical().and_then(|c| c.facet).unwrap_or(Facet::Face)
}

/// Pose of a regular, truncated or rectified solid on its facet face.
fn facet_pose(mesh: &Polyhedron, spec: Classical, facet: Facet) -> Result<Vec<Pose>> {
    let forme = ClassicalForme::new(spec, mesh.clone());
    let face = mesh.face(forme.facet_face(facet)?);
    let up = match spec.operation {
        ClassicalOp::Regular => face.positions()[0],
        ClassicalOp::Truncate => face
            .edges()
            .into_iter()
            .find(|e| e.twin_face().num_sides() != face.num_sides())
            .map(|e| e.midpoint())
            .ok_or_else(|| PolyError::mesh(format!("{}: no cut corner", spec.name())))?,
        _ => face.edges()[0].midpoint(),
    };
    Ok(vec![face_pose(mesh, &face, up, face.distance_to_center())])
}

fn regulars() -> impl Iterator<Item = Classical> {
    registry().classical.iter().copied().filter(|c| c.is_regular())
}

struct TruncateRules;

impl PairRules for TruncateRules {
    fn name(&self) -> &'static str {
        "truncate"
    }

    fn graph(&self) -> Vec<Entry> {
        regulars()
            .map(|c| {
                let opts = Opts {
                    facet: c.facet,
                    ..Opts::default()
                };
                Entry::new(c, c.with_operation(ClassicalOp::Truncate, c.facet, None), opts, opts)
            })
            .collect()
    }

    fn poses(&self, mesh: &Polyhedron, pos: Pos, entry: &Entry) -> Result<Vec<Pose>> {
        let spec = match pos {
            Pos::Left => entry.left,
            Pos::Right | Pos::Middle => entry.right,
        };
        facet_pose(mesh, classical(&spec)?, facet(entry))
    }
}

struct RectifyRules;

impl PairRules for RectifyRules {
    fn name(&self) -> &'static str {
        "rectify"
    }

    /// Entries toward the regular solid carry the sides of the faces that
    /// shrink to points.
    fn graph(&self) -> Vec<Entry> {
        regulars()
            .map(|c| {
                let vanish = match c.facet {
                    Some(Facet::Vertex) => c.family.n(),
                    _ => 3,
                };
                let to_left = Opts {
                    facet: c.facet,
                    face_type: Some(vanish),
                    ..Opts::default()
                };
                let to_right = Opts {
                    facet: c.facet,
                    ..Opts::default()
                };
                Entry::new(c, c.with_operation(ClassicalOp::Rectify, None, None), to_left, to_right)
            })
            .collect()
    }

    fn middle(&self, entry: &Entry) -> Specification {
        match entry.left {
            Specification::Classical(c) => c.with_operation(ClassicalOp::Truncate, c.facet, None).into(),
            other => other,
        }
    }

    fn poses(&self, mesh: &Polyhedron, pos: Pos, entry: &Entry) -> Result<Vec<Pose>> {
        let spec = match pos {
            Pos::Left => entry.left,
            Pos::Right => entry.right,
            Pos::Middle => self.middle(entry),
        };
        facet_pose(mesh, classical(&spec)?, facet(entry))
    }
}

static TRUNCATE_PAIR: OperationPair = OperationPair::new(&TruncateRules);
pub(super) static RECTIFY_PAIR: OperationPair = OperationPair::new(&RectifyRules);

static TRUNCATE_PARTS: [Part; 1] = [Part::from_left(&TRUNCATE_PAIR)];
static RECTIFY_PARTS: [Part; 1] = [Part::from_left(&RECTIFY_PAIR)];
static SHARPEN_PARTS: [Part; 2] = [Part::from_right(&TRUNCATE_PAIR), Part::from_right(&RECTIFY_PAIR)];

/// Regular solid to its truncation.
pub static TRUNCATE: PairOperation<FacetOptions> = PairOperation::new("truncate", &TRUNCATE_PARTS);
/// Regular solid to its rectification.
pub static RECTIFY: PairOperation<FacetOptions> = PairOperation::new("rectify", &RECTIFY_PARTS);
/// Truncated or rectified solid back to a regular one.
pub static SHARPEN: PairOperation<FacetOptions> = PairOperation::new("sharpen", &SHARPEN_PARTS);
