//! Curated API for renderers and other external callers.
//!
//! Important
//! - Prefer these entry points over reaching into `ops`, `realize` or `specs`
//!   directly; the modules behind them may be reorganized.

pub use crate::info::{SolidInfo, SolidType};
pub use crate::ops::{
    AnimationData, AugmentOptions, CapOptions, ExpandOptions, FacetOptions, OpResult, Operation,
    OperationInfo, SelectState, ShortenOptions, SnubOptions, Solid, TurnOptions, TwistOptions,
    AUGMENT, CONTRACT, DIMINISH, ELONGATE, EXPAND, GYRATE, GYROELONGATE, RECTIFY, SHARPEN, SHORTEN,
    SNUB, TRUNCATE, TURN,
};
pub use crate::realize::realize;
pub use crate::symmetry::{symmetry, Symmetry};

use crate::error::Result;
use crate::specs::{registry, Specification};

/// Any accepted name (canonical, alternate, escaped or Conway) to its first
/// specification.
pub fn resolve_specification(name: &str) -> Result<Specification> {
    registry().resolve(name)
}

/// Reference solid for a name.
pub fn solid(name: &str) -> Result<Solid> {
    Solid::from_name(name)
}

pub fn info(name: &str) -> Result<SolidInfo> {
    SolidInfo::new(name)
}

/// Every operation, in menu order.
pub fn operations() -> [&'static dyn OperationInfo; 13] {
    crate::ops::operations()
}

pub fn operation(name: &str) -> Option<&'static dyn OperationInfo> {
    operations().into_iter().find(|op| op.name() == name)
}

/// Names of the operations that apply to `solid`.
pub fn applicable_operations(solid: &Solid) -> Vec<&'static str> {
    operations()
        .into_iter()
        .filter(|op| op.can_apply_to(solid))
        .map(|op| op.name())
        .collect()
}

/// Apply `op` with `options`.
pub fn apply<O: Operation + ?Sized>(op: &O, solid: &Solid, options: &O::Options) -> Result<OpResult> {
    op.apply(solid, options)
}
