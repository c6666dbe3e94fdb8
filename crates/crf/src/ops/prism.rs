//! Elongate, gyroelongate, shorten and turn: adding, removing or swapping the
//! prism or antiprism band of a capstone.
//!
//! All solids of an entry are posed at the band center with the top end's
//! anchor vertex as reference. Moving between bands slides the two halves
//! along the axis; leaving an antiprism band also turns the bottom half back
//! by half a ring step, in whichever direction lands on the target.

use std::f64::consts::PI;

use crate::error::{PolyError, Result};
use crate::forme::CapstoneForme;
use crate::geom::{rotate_about, Pose, Vec3};
use crate::mesh::Polyhedron;
use crate::specs::{registry, Capstone, Elongation, PrismType, Prismatic, Specification, Twist};

use super::options::{Opts, ShortenOptions, TurnOptions, TwistOptions};
use super::pair::{snap_close, Entry, OperationPair, PairOperation, PairRules, Part, Pos};
use super::Side;

fn forme(spec: Specification, mesh: &Polyhedron) -> Result<CapstoneForme> {
    CapstoneForme::new(spec, mesh.clone()).ok_or_else(|| PolyError::domain(format!("{spec} has no band")))
}

/// Capstones with at least one cap on an `elongation` band.
fn capped(elongation: Elongation) -> impl Iterator<Item = Capstone> {
    registry()
        .capstone
        .iter()
        .copied()
        .filter(move |c| c.count > 0 && c.base > 2 && c.elongation == elongation)
}

fn is_registered(c: &Capstone) -> bool {
    registry().capstone.iter().any(|x| x == c)
}

/// Entries from `from` bands to `to` bands. Bicupolae and birotundae pick
/// their alignment on non-antiprism sides and their twist on antiprism ones.
fn band_entries(from: Elongation, to: Elongation) -> Vec<Entry> {
    let mut out = Vec::new();
    for c in capped(from) {
        let twists: &[Option<Twist>] = if to == Elongation::Antiprism && c.gyrate.is_some() {
            &[Some(Twist::Left), Some(Twist::Right)]
        } else {
            &[None]
        };
        for &twist in twists {
            let right = c.with_elongation(to, c.gyrate, twist);
            if !is_registered(&right) {
                continue;
            }
            let to_left = Opts {
                gyrate: c.gyrate,
                ..Opts::default()
            };
            let to_right = Opts {
                twist,
                ..Opts::default()
            };
            out.push(Entry::new(c, right, to_left, to_right));
        }
    }
    out
}

struct BandRules {
    name: &'static str,
    from: Elongation,
    to: Elongation,
}

impl PairRules for BandRules {
    fn name(&self) -> &'static str {
        self.name
    }

    fn graph(&self) -> Vec<Entry> {
        let mut out = Vec::new();
        if self.from == Elongation::Prism && self.to == Elongation::Antiprism {
            for p in registry().prismatic.iter().filter(|p| p.is_prism() && p.base > 2) {
                let anti = Prismatic {
                    kind: PrismType::Antiprism,
                    ..*p
                };
                out.push(Entry::new(*p, anti, Opts::default(), Opts::default()));
            }
        }
        out.extend(band_entries(self.from, self.to));
        out
    }

    fn poses(&self, mesh: &Polyhedron, pos: Pos, entry: &Entry) -> Result<Vec<Pose>> {
        let spec = match pos {
            Pos::Left => entry.left,
            Pos::Right | Pos::Middle => entry.right,
        };
        let forme = forme(spec, mesh)?;
        let ends = forme.ends()?;
        let origin = (ends.top.centroid + ends.bottom.centroid) / 2.0;
        let anchor = mesh.vertices()[ends.top.anchor(mesh)];
        Ok(vec![Pose {
            origin,
            scale: mesh.edge_length(),
            orientation: [ends.top.normal, anchor - origin],
        }])
    }

    fn to_side(&self, side: Side, middle: &Polyhedron, entry: &Entry, target: &Polyhedron) -> Result<Vec<Vec3>> {
        if side == Side::Right {
            return snap_close(middle.vertices(), target);
        }
        let mid = forme(entry.right, middle)?;
        let goal = forme(entry.left, target)?;
        let [top, bottom] = mid.halves()?;
        let axis = mid.axis()?;
        let ends = mid.ends()?;
        let origin = (ends.top.centroid + ends.bottom.centroid) / 2.0;
        let slide = axis * (mid.prismatic_height()? - goal.prismatic_height()?) / 2.0;
        let step = PI / mid.ring_size() as f64;
        let turns: &[f64] = if mid.elongation() == Elongation::Antiprism && goal.elongation() != Elongation::Antiprism {
            &[step, -step]
        } else {
            &[0.0]
        };
        let mut last = Err(PolyError::mesh(format!("{}: no band turn fits", self.name)));
        for &angle in turns {
            let mut placed = middle.vertices().to_vec();
            for &v in &top {
                placed[v] -= slide;
            }
            for &v in &bottom {
                placed[v] = rotate_about(&(placed[v] + slide), &origin, &axis, angle);
            }
            last = snap_close(&placed, target);
            if last.is_ok() {
                break;
            }
        }
        last
    }
}

static ELONGATE_RULES: BandRules = BandRules {
    name: "elongate",
    from: Elongation::None,
    to: Elongation::Prism,
};
static GYROELONGATE_RULES: BandRules = BandRules {
    name: "gyroelongate",
    from: Elongation::None,
    to: Elongation::Antiprism,
};
static TURN_RULES: BandRules = BandRules {
    name: "turn",
    from: Elongation::Prism,
    to: Elongation::Antiprism,
};

static ELONGATE_PAIR: OperationPair = OperationPair::new(&ELONGATE_RULES);
static GYROELONGATE_PAIR: OperationPair = OperationPair::new(&GYROELONGATE_RULES);
static TURN_PAIR: OperationPair = OperationPair::new(&TURN_RULES);

static ELONGATE_PARTS: [Part; 1] = [Part::from_left(&ELONGATE_PAIR)];
static GYROELONGATE_PARTS: [Part; 1] = [Part::from_left(&GYROELONGATE_PAIR)];
static SHORTEN_PARTS: [Part; 2] = [Part::from_right(&ELONGATE_PAIR), Part::from_right(&GYROELONGATE_PAIR)];
static TURN_PARTS: [Part; 1] = [Part::both(&TURN_PAIR)];

/// Insert a prism band.
pub static ELONGATE: PairOperation<()> = PairOperation::new("elongate", &ELONGATE_PARTS);
/// Insert an antiprism band of either handedness.
pub static GYROELONGATE: PairOperation<TwistOptions> = PairOperation::new("gyroelongate", &GYROELONGATE_PARTS);
/// Remove the band.
pub static SHORTEN: PairOperation<ShortenOptions> = PairOperation::new("shorten", &SHORTEN_PARTS);
/// Swap a prism band for an antiprism band and back.
pub static TURN: PairOperation<TurnOptions> = PairOperation::new("turn", &TURN_PARTS);
