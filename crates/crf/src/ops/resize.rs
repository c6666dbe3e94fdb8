//! Expand, snub and contract.
//!
//! The faces of the regular solid move outward (and turn, for snubs) to
//! become the expanded faces of the result; every result vertex lies on
//! exactly one of them. Poses put a face and its nearest neighbor face
//! in correspondence, at equal side length.

use crate::cfg::ANGLE_EPS;
use crate::error::{PolyError, Result};
use crate::forme::ClassicalForme;
use crate::geom::{Pose, Vec3};
use crate::mesh::Polyhedron;
use crate::specs::{registry, Classical, ClassicalOp, Twist};

use super::options::{ExpandOptions, Opts, SnubOptions};
use super::pair::{snap_close, Entry, OperationPair, PairOperation, PairRules, Part, Pos};
use super::truncate::{classical, face_pose, RECTIFY_PAIR};
use super::Side;

/// Sides of the faces that move, stored on every entry.
fn face_type(entry: &Entry) -> Result<usize> {
    entry
        .options(Side::Left)
        .face_type
        .ok_or_else(|| PolyError::domain("expansion entry without a face type"))
}

/// Pose on `faces[0]`, oriented toward the nearest other face of the set.
fn expansion_pose(mesh: &Polyhedron, faces: &[usize]) -> Result<Vec<Pose>> {
    let (&first, rest) = faces
        .split_first()
        .ok_or_else(|| PolyError::mesh("no faces to expand"))?;
    let f0 = mesh.face(first);
    let n0 = f0.normal();
    let next = rest
        .iter()
        .map(|&i| mesh.face(i))
        .max_by(|a, b| n0.dot(&a.normal()).total_cmp(&n0.dot(&b.normal())))
        .ok_or_else(|| PolyError::mesh("a single face cannot orient a pose"))?;
    Ok(vec![face_pose(mesh, &f0, next.centroid(), f0.side_length())])
}

/// Expanded faces of `spec` on `mesh`; every face of a regular solid.
fn moving_faces(mesh: &Polyhedron, spec: Classical, sides: usize) -> Result<Vec<usize>> {
    if spec.is_regular() {
        return Ok((0..mesh.num_faces()).collect());
    }
    ClassicalForme::new(spec, mesh.clone()).expanded_faces(sides)
}

/// Slide each expanded face of the middle onto the parallel face of the
/// regular target, vertex by vertex.
fn onto_regular(middle: &Polyhedron, spec: Classical, sides: usize, target: &Polyhedron) -> Result<Vec<Vec3>> {
    let mut out: Vec<Option<Vec3>> = vec![None; middle.num_vertices()];
    for fi in moving_faces(middle, spec, sides)? {
        let face = middle.face(fi);
        let normal = face.normal();
        let onto = target
            .face_handles()
            .find(|t| t.normal().dot(&normal) > 1.0 - ANGLE_EPS)
            .ok_or_else(|| PolyError::mesh("no parallel face on the regular solid"))?;
        let shift = onto.centroid() - face.centroid();
        let corners = onto.positions();
        for (v, p) in face.vertex_indices().iter().zip(face.positions()) {
            let q = p + shift;
            out[*v] = corners
                .iter()
                .min_by(|a, b| (*a - q).norm().total_cmp(&(*b - q).norm()))
                .copied();
        }
    }
    let placed = out
        .into_iter()
        .collect::<Option<Vec<Vec3>>>()
        .ok_or_else(|| PolyError::mesh("vertex on no expanded face"))?;
    snap_close(&placed, target)
}

struct ResizeRules {
    name: &'static str,
    operation: ClassicalOp,
}

impl ResizeRules {
    fn result(&self, c: &Classical, twist: Option<Twist>) -> Classical {
        c.with_operation(self.operation, None, twist)
    }
}

impl PairRules for ResizeRules {
    fn name(&self) -> &'static str {
        self.name
    }

    fn graph(&self) -> Vec<Entry> {
        let mut out = Vec::new();
        for c in registry().classical.iter().filter(|c| c.is_regular()) {
            let sides = c.facet_sides();
            let twists: &[Option<Twist>] = if self.operation == ClassicalOp::Snub && !c.is_tetrahedral() {
                &[Some(Twist::Left), Some(Twist::Right)]
            } else {
                &[None]
            };
            for &twist in twists {
                let to_left = Opts {
                    face_type: Some(sides),
                    ..Opts::default()
                };
                let to_right = Opts { twist, ..to_left };
                out.push(Entry::new(*c, self.result(c, twist), to_left, to_right));
            }
        }
        out
    }

    fn poses(&self, mesh: &Polyhedron, pos: Pos, entry: &Entry) -> Result<Vec<Pose>> {
        let spec = match pos {
            Pos::Left => entry.left,
            Pos::Right | Pos::Middle => entry.right,
        };
        expansion_pose(mesh, &moving_faces(mesh, classical(&spec)?, face_type(entry)?)?)
    }

    fn to_side(&self, side: Side, middle: &Polyhedron, entry: &Entry, target: &Polyhedron) -> Result<Vec<Vec3>> {
        match side {
            Side::Left => onto_regular(middle, classical(&entry.right)?, face_type(entry)?, target),
            Side::Right => snap_close(middle.vertices(), target),
        }
    }
}

static EXPAND_RULES: ResizeRules = ResizeRules {
    name: "expand",
    operation: ClassicalOp::Cantellate,
};
static SNUB_RULES: ResizeRules = ResizeRules {
    name: "snub",
    operation: ClassicalOp::Snub,
};

static EXPAND_PAIR: OperationPair = OperationPair::new(&EXPAND_RULES);
static SNUB_PAIR: OperationPair = OperationPair::new(&SNUB_RULES);

/// Rectified solids contract only onto the regular solid whose faces shrink
/// to its family polygon's vertices. The rectified tetrahedron is the
/// octahedron, which is regular and does not contract.
fn contracts_by_rectify(entry: &Entry) -> bool {
    let family = entry
        .left
        .as_classical()
        .filter(|c| !c.is_tetrahedral())
        .map(|c| c.family.n());
    entry.options(Side::Left).face_type == family
}

static EXPAND_PARTS: [Part; 1] = [Part::from_left(&EXPAND_PAIR)];
static SNUB_PARTS: [Part; 1] = [Part::from_left(&SNUB_PAIR)];
static CONTRACT_PARTS: [Part; 3] = [
    Part::from_right(&EXPAND_PAIR),
    Part::from_right(&SNUB_PAIR),
    Part {
        pair: &RECTIFY_PAIR,
        from: Some(Side::Right),
        filter: Some(contracts_by_rectify),
    },
];

/// Regular solid to its cantellation.
pub static EXPAND: PairOperation<ExpandOptions> = PairOperation::new("expand", &EXPAND_PARTS);
/// Regular solid to a snub of either handedness.
pub static SNUB: PairOperation<SnubOptions> = PairOperation::new("snub", &SNUB_PARTS);
/// Cantellated, snub or rectified solid back to a regular one.
pub static CONTRACT: PairOperation<ExpandOptions> = PairOperation::new("contract", &CONTRACT_PARTS);
