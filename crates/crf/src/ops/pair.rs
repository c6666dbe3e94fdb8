//! Bidirectional operation pairs and their combination into public operations.
//!
//! An `OperationPair` owns a graph of `(left, right, options)` entries and the
//! rules to animate along one: a middle solid both sides can be read off,
//! poses to align the middle and the target onto the input, and vertex-target
//! functions placing the middle's vertices on either side.

use std::sync::OnceLock;

use tracing::debug;

use crate::cfg::SNAP_EPS;
use crate::error::{PolyError, Result};
use crate::geom::{Pose, Similarity, Vec3};
use crate::mesh::Polyhedron;
use crate::realize::realize;
use crate::specs::{Specification, Twist};

use super::options::{OptionSet, Opts};
use super::{twist_of, AnimationData, OpResult, Operation, OperationInfo, SelectState, Side, Solid};

/// Which solid of an entry a pose is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pos {
    Left,
    Right,
    Middle,
}

impl From<Side> for Pos {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Pos::Left,
            Side::Right => Pos::Right,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub left: Specification,
    pub right: Specification,
    /// Options selecting this entry when heading toward each side.
    options: [Opts; 2],
    names: [String; 2],
}

impl Entry {
    pub fn new(
        left: impl Into<Specification>,
        right: impl Into<Specification>,
        to_left: Opts,
        to_right: Opts,
    ) -> Self {
        let (left, right) = (left.into(), right.into());
        Self {
            names: [left.name(), right.name()],
            left,
            right,
            options: [to_left, to_right],
        }
    }

    pub fn spec(&self, side: Side) -> Specification {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn name(&self, side: Side) -> &str {
        &self.names[side.index()]
    }

    /// Options that pick this entry when heading toward `side`.
    pub fn options(&self, toward: Side) -> &Opts {
        &self.options[toward.index()]
    }

    fn holds(&self, side: Side, name: &str, twist: Option<Twist>) -> bool {
        self.name(side) == name
            && match (twist, twist_of(&self.spec(side))) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
    }
}

pub(crate) trait PairRules: Send + Sync {
    fn name(&self) -> &'static str;

    fn graph(&self) -> Vec<Entry>;

    /// Solid the animation is read off; the right side unless overridden.
    fn middle(&self, entry: &Entry) -> Specification {
        entry.right
    }

    /// Candidate poses of `mesh` playing role `pos` in `entry`, preferred
    /// first. Errors if the landmark is missing.
    fn poses(&self, mesh: &Polyhedron, pos: Pos, entry: &Entry) -> Result<Vec<Pose>>;

    /// Positions of the aligned middle's vertices on `side`, whose aligned
    /// mesh is `target`. Errors if the middle does not fit the target.
    fn to_side(&self, _side: Side, middle: &Polyhedron, _entry: &Entry, target: &Polyhedron) -> Result<Vec<Vec3>> {
        snap(middle.vertices(), target, f64::INFINITY)
    }
}

/// Nearest `target` vertex for each point. Every target vertex must be hit
/// and every point must lie within `tolerance` edge lengths of its image.
pub(crate) fn snap(points: &[Vec3], target: &Polyhedron, tolerance: f64) -> Result<Vec<Vec3>> {
    let scale = target.edge_length();
    let mut hit = vec![false; target.num_vertices()];
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        let (i, q) = target
            .vertices()
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - p).norm().total_cmp(&(*b - p).norm()))
            .ok_or_else(|| PolyError::mesh("snap onto an empty mesh"))?;
        if (q - p).norm() > tolerance * scale {
            return Err(PolyError::mesh("vertex off target"));
        }
        hit[i] = true;
        out.push(*q);
    }
    if hit.iter().all(|&h| h) {
        Ok(out)
    } else {
        Err(PolyError::mesh("target vertices left uncovered"))
    }
}

/// `snap` for points that should already sit on the target.
pub(crate) fn snap_close(points: &[Vec3], target: &Polyhedron) -> Result<Vec<Vec3>> {
    snap(points, target, SNAP_EPS)
}

/// `morph` with coincident vertices merged has the vertices of `goal`.
/// Faces are not compared: a morph may leave coplanar triangles where `goal`
/// has a square, as when an antiprism band turns into a prism band.
pub(super) fn collapses_onto(morph: &Polyhedron, goal: &Polyhedron) -> bool {
    morph
        .dedup()
        .is_ok_and(|m| m.num_vertices() == goal.num_vertices())
}

/// An operation pair: rules plus the graph, built once.
pub(crate) struct OperationPair {
    rules: &'static dyn PairRules,
    graph: OnceLock<Vec<Entry>>,
}

impl OperationPair {
    pub const fn new(rules: &'static dyn PairRules) -> Self {
        Self {
            rules,
            graph: OnceLock::new(),
        }
    }

    pub fn graph(&self) -> &[Entry] {
        self.graph.get_or_init(|| {
            let g = self.rules.graph();
            debug!(op = self.rules.name(), entries = g.len(), "graph built");
            g
        })
    }

    /// Animate `solid` along `entry`, starting on side `from`.
    fn apply_entry(&self, solid: &Solid, entry: &Entry, from: Side) -> Result<OpResult> {
        let rules = self.rules;
        let to = from.opposite();
        let start = rules
            .poses(solid.mesh(), Pos::from(from), entry)?
            .into_iter()
            .next()
            .ok_or_else(|| PolyError::mesh(format!("{}: no pose on {}", rules.name(), solid.name())))?;
        let middle_spec = rules.middle(entry);
        let middle = realize(&middle_spec)?;
        let target_spec = entry.spec(to);
        let target = realize(&target_spec)?;
        let target_poses = rules.poses(&target, Pos::from(to), entry)?;

        for mp in rules.poses(&middle, Pos::Middle, entry)? {
            let aligned = middle.transform(&Similarity::between(&mp, &start));
            let Ok(start_vertices) = rules.to_side(from, &aligned, entry, solid.mesh()) else {
                continue;
            };
            let start_mesh = aligned.with_vertices(start_vertices)?;
            if !collapses_onto(&start_mesh, solid.mesh()) {
                continue;
            }
            for tp in &target_poses {
                let placed = target.transform(&Similarity::between(tp, &start));
                let Ok(end_vertices) = rules.to_side(to, &aligned, entry, &placed) else {
                    continue;
                };
                if !collapses_onto(&aligned.with_vertices(end_vertices.clone())?, &placed) {
                    continue;
                }
                debug!(op = rules.name(), ?from, from_solid = %solid.name(), to_solid = %target_spec, "applied");
                return Ok(OpResult {
                    result: Solid::with_mesh(target_spec, placed),
                    animation: AnimationData {
                        start: start_mesh,
                        end_vertices,
                    },
                });
            }
        }
        Err(PolyError::mesh(format!(
            "{}: {middle_spec} does not align onto {}",
            rules.name(),
            solid.name()
        )))
    }
}

/// One pair exposed through a public operation: the side the input must be
/// on (`None` for both) and an optional entry filter.
#[derive(Clone, Copy)]
pub(crate) struct Part {
    pub pair: &'static OperationPair,
    pub from: Option<Side>,
    pub filter: Option<fn(&Entry) -> bool>,
}

impl Part {
    pub const fn from_left(pair: &'static OperationPair) -> Self {
        Self {
            pair,
            from: Some(Side::Left),
            filter: None,
        }
    }

    pub const fn from_right(pair: &'static OperationPair) -> Self {
        Self {
            pair,
            from: Some(Side::Right),
            filter: None,
        }
    }

    pub const fn both(pair: &'static OperationPair) -> Self {
        Self {
            pair,
            from: None,
            filter: None,
        }
    }
}

#[derive(Clone, Copy)]
struct Match<'a> {
    part: &'a Part,
    entry: &'a Entry,
    from: Side,
}

impl Match<'_> {
    fn to(&self) -> Side {
        self.from.opposite()
    }

    fn options(&self) -> &Opts {
        self.entry.options(self.to())
    }

    fn same_result(&self, other: &Match<'_>) -> bool {
        let (a, b) = (self.entry.spec(self.to()), other.entry.spec(other.to()));
        self.entry.name(self.to()) == other.entry.name(other.to()) && twist_of(&a) == twist_of(&b)
    }
}

/// A public operation over the sides of one or more pairs, with typed options.
pub struct PairOperation<O> {
    name: &'static str,
    parts: &'static [Part],
    to_opts: fn(&O) -> Opts,
    from_opts: fn(&Opts) -> O,
}

impl<O> PairOperation<O> {
    pub(crate) const fn new(name: &'static str, parts: &'static [Part]) -> Self
    where
        O: OptionSet,
    {
        Self {
            name,
            parts,
            to_opts: O::to_opts,
            from_opts: O::from_opts,
        }
    }

    fn matches(&self, solid: &Solid) -> Vec<Match<'_>> {
        let name = solid.name();
        let twist = twist_of(&solid.spec());
        let mut out = Vec::new();
        for part in self.parts {
            for entry in part.pair.graph() {
                if part.filter.is_some_and(|f| !f(entry)) {
                    continue;
                }
                for from in [Side::Left, Side::Right] {
                    if part.from.map_or(true, |s| s == from) && entry.holds(from, &name, twist) {
                        out.push(Match { part, entry, from });
                    }
                }
            }
        }
        out
    }

    fn resolve(&self, solid: &Solid, request: &Opts) -> Result<Match<'_>> {
        let found: Vec<Match<'_>> = self
            .matches(solid)
            .into_iter()
            .filter(|m| m.options().admits(request))
            .collect();
        match found.as_slice() {
            [] => Err(PolyError::OperationNotApplicable {
                op: self.name,
                spec: solid.name(),
            }),
            [first, rest @ ..] if rest.iter().all(|m| m.same_result(first)) => Ok(*first),
            [first, ..] => Err(PolyError::domain(format!(
                "{} on {}: {} results match {request:?}; choose among them (first: {})",
                self.name,
                solid.name(),
                found.len(),
                first.entry.name(first.to())
            ))),
        }
    }

    fn combos(&self, solid: &Solid) -> Vec<Opts> {
        let mut out: Vec<Opts> = Vec::new();
        for m in self.matches(solid) {
            if !out.contains(m.options()) {
                out.push(*m.options());
            }
        }
        out
    }
}

impl<O> OperationInfo for PairOperation<O> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn can_apply_to(&self, solid: &Solid) -> bool {
        !self.matches(solid).is_empty()
    }

    fn has_options(&self, solid: &Solid) -> bool {
        self.combos(solid).len() > 1
    }
}

impl<O> Operation for PairOperation<O>
where
    O: Clone + std::fmt::Debug + Default + PartialEq + Send + Sync,
{
    type Options = O;

    fn all_option_combos(&self, solid: &Solid) -> Vec<O> {
        let mut out: Vec<O> = Vec::new();
        for o in self.combos(solid).iter().map(self.from_opts) {
            if !out.contains(&o) {
                out.push(o);
            }
        }
        out
    }

    fn apply(&self, solid: &Solid, options: &O) -> Result<OpResult> {
        let m = self.resolve(solid, &(self.to_opts)(options))?;
        m.part.pair.apply_entry(solid, m.entry, m.from)
    }

    fn face_selection_states(&self, solid: &Solid, options: &O) -> Vec<Option<SelectState>> {
        let combos = self.combos(solid);
        let chosen = self
            .resolve(solid, &(self.to_opts)(options))
            .ok()
            .and_then(|m| m.options().face_type);
        solid
            .mesh()
            .face_handles()
            .map(|f| {
                let sides = Some(f.num_sides());
                if chosen.is_some() && chosen == sides {
                    Some(SelectState::Selected)
                } else if combos.iter().any(|c| c.face_type == sides) {
                    Some(SelectState::Selectable)
                } else {
                    None
                }
            })
            .collect()
    }

    fn hit_option(&self, solid: &Solid, hit: &Vec3) -> O {
        let sides = solid.mesh().hit_face(hit).num_sides();
        self.combos(solid)
            .iter()
            .find(|c| c.face_type == Some(sides))
            .map(self.from_opts)
            .unwrap_or_default()
    }
}
