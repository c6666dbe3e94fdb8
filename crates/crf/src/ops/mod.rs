//! Operations: transformations between solids, with animation data.
//!
//! Purpose
//! - Each public operation maps an input `Solid` and typed options to the
//!   resulting solid plus a `(start mesh, end vertices)` pair a renderer can
//!   interpolate. Start and end share one vertex order.
//!
//! Structure
//! - Resize, truncate and prism operations are bidirectional `OperationPair`s:
//!   a lazily built graph of `(left, right, options)` entries plus pose and
//!   vertex-target rules. Public operations combine one or more pair sides.
//! - Cut-paste operations (augment, diminish, gyrate) build their result
//!   directly: hull of the input plus or minus a cap, classified by congruence.
//!
//! Conventions
//! - The result mesh is the realization of the result specification, aligned
//!   onto the input by a similarity.
//! - `OperationNotApplicable` if the input is not in the graph,
//!   `SpecificationDomain` if the options leave several different results.
//!
//! References
//! - Related code: `crate::forme` (landmarks), `crate::realize`.

mod cut_paste;
mod options;
mod pair;
mod prism;
mod resize;
mod truncate;

pub use cut_paste::{AugmentOp, DiminishOp, GyrateOp, AUGMENT, DIMINISH, GYRATE};
pub use options::{
    AugmentOptions, CapOptions, ExpandOptions, FacetOptions, ShortenOptions, SnubOptions, TurnOptions,
    TwistOptions,
};
pub use pair::PairOperation;
pub use prism::{ELONGATE, GYROELONGATE, SHORTEN, TURN};
pub use resize::{CONTRACT, EXPAND, SNUB};
pub use truncate::{RECTIFY, SHARPEN, TRUNCATE};

use std::fmt::Debug;

use crate::error::Result;
use crate::forme::Forme;
use crate::geom::Vec3;
use crate::mesh::Polyhedron;
use crate::realize::realize;
use crate::specs::{registry, Specification, Twist};

/// Side of an operation pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A specification together with a concrete (placed) mesh realizing it.
#[derive(Clone, Debug)]
pub struct Solid {
    spec: Specification,
    mesh: Polyhedron,
}

/// Handedness carried by a specification, if any.
pub(crate) fn twist_of(spec: &Specification) -> Option<Twist> {
    match spec {
        Specification::Classical(c) => c.twist,
        Specification::Capstone(c) => c.twist,
        _ => None,
    }
}

impl Solid {
    /// The reference realization of `spec`.
    pub fn new(spec: Specification) -> Result<Self> {
        Ok(Self {
            mesh: realize(&spec)?,
            spec,
        })
    }

    /// Bind `spec` to a mesh the caller knows realizes it.
    pub fn with_mesh(spec: Specification, mesh: Polyhedron) -> Self {
        Self { spec, mesh }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::new(registry().resolve(name)?)
    }

    pub fn spec(&self) -> Specification {
        self.spec
    }

    pub fn mesh(&self) -> &Polyhedron {
        &self.mesh
    }

    pub fn name(&self) -> String {
        self.spec.name()
    }

    pub fn forme(&self) -> Forme {
        Forme::new(self.spec, self.mesh.clone())
    }

    /// Another specification for the same solid, same handedness.
    pub fn is_same_solid(&self, spec: &Specification) -> bool {
        self.spec.same_solid(spec)
            && match (twist_of(&self.spec), twist_of(spec)) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
    }

    /// Every specification naming this solid with the same handedness.
    pub fn alternatives(&self) -> Vec<Specification> {
        registry()
            .all_with_name(&self.name())
            .into_iter()
            .filter(|s| self.is_same_solid(s))
            .collect()
    }
}

/// Interpolation endpoints: `start` morphs into `end_vertices` in place.
#[derive(Clone, Debug)]
pub struct AnimationData {
    pub start: Polyhedron,
    pub end_vertices: Vec<Vec3>,
}

#[derive(Clone, Debug)]
pub struct OpResult {
    pub result: Solid,
    pub animation: AnimationData,
}

/// Face state for interactive option picking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectState {
    Selected,
    Selectable,
}

/// The options-independent view of an operation, for listing and filtering.
pub trait OperationInfo: Send + Sync {
    fn name(&self) -> &'static str;
    fn can_apply_to(&self, solid: &Solid) -> bool;
    /// More than one option combination applies.
    fn has_options(&self, solid: &Solid) -> bool;
}

/// A transformation between solids.
pub trait Operation: OperationInfo {
    type Options: Clone + Debug + Default + PartialEq + Send + Sync;

    /// Every option combination that leads to a result, deduplicated.
    fn all_option_combos(&self, solid: &Solid) -> Vec<Self::Options>;

    /// Errors: `OperationNotApplicable` if nothing matches `(solid, options)`;
    /// `SpecificationDomain` if the options are ambiguous or invalid.
    fn apply(&self, solid: &Solid, options: &Self::Options) -> Result<OpResult>;

    /// Per face: does it pick an option, and is that option the current one.
    fn face_selection_states(&self, solid: &Solid, _options: &Self::Options) -> Vec<Option<SelectState>> {
        vec![None; solid.mesh().num_faces()]
    }

    /// Options selected by clicking at `hit` on the solid's surface.
    fn hit_option(&self, _solid: &Solid, _hit: &Vec3) -> Self::Options {
        Self::Options::default()
    }
}

/// All public operations, in menu order.
pub fn operations() -> [&'static dyn OperationInfo; 13] {
    [
        &TRUNCATE,
        &RECTIFY,
        &SHARPEN,
        &EXPAND,
        &SNUB,
        &CONTRACT,
        &ELONGATE,
        &GYROELONGATE,
        &SHORTEN,
        &TURN,
        &AUGMENT,
        &DIMINISH,
        &GYRATE,
    ]
}

#[cfg(test)]
mod tests;
