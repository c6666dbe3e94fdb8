//! Solid specifications: a closed sum type over the six families.
//!
//! Purpose
//! - Describe every supported CRF solid structurally, independent of any mesh.
//! - Enumerate each family's legal instance space (`all()`), so illegal
//!   combinations never exist as values.
//!
//! Conventions
//! - Payloads are `Copy` and immutable; builders (`with_*`) return new values.
//! - `name()` on a payload is the family's own construction name; use
//!   [`Specification::name`] for the canonical form (alternates normalized,
//!   e.g. "square prism" becomes "cube").
//! - Family order for name resolution: Classical, Prismatic, Capstone,
//!   Composite, ModifiedAntiprism, Elementary.

mod capstone;
mod classical;
mod composite;
mod elementary;
mod modified;
mod prismatic;
mod queries;
mod registry;

use serde::{Deserialize, Serialize};

pub use capstone::{CapType, Capstone, Elongation};
pub use classical::{Classical, ClassicalOp, Family};
pub use composite::{Composite, CompositeSource};
pub use elementary::{Elementary, ElementaryKind};
pub use modified::{ModifiedAntiprism, ModifiedOp};
pub use prismatic::{PrismType, Prismatic, PRISMATIC_BASES};
pub use queries::Queries;
pub use registry::{registry, Registry};

use crate::names::normalize_name;

/// Which figure of a classical solid an operation is built around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facet {
    Face,
    Vertex,
}

/// Handedness of a chiral solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Twist {
    Left,
    Right,
}

impl Twist {
    pub fn opposite(self) -> Twist {
        match self {
            Twist::Left => Twist::Right,
            Twist::Right => Twist::Left,
        }
    }
}

/// Relative rotation of two adjacent caps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gyrate {
    Ortho,
    Gyro,
}

/// Relative position of two modifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Align {
    Para,
    Meta,
}

/// A solid family payload that can be indexed by canonical name.
pub trait Named {
    /// Family label used in `NotFound` errors.
    const FAMILY: &'static str;
    /// Construction name before alternate-name normalization.
    fn raw_name(&self) -> String;
    fn canonical_name(&self) -> String {
        normalize_name(self.raw_name())
    }
}

macro_rules! impl_named {
    ($($ty:ty => $family:literal),* $(,)?) => {
        $(impl Named for $ty {
            const FAMILY: &'static str = $family;
            fn raw_name(&self) -> String {
                self.name()
            }
        })*
    };
}

impl_named! {
    Classical => "classical",
    Prismatic => "prismatic",
    Capstone => "capstone",
    Composite => "composite",
    ModifiedAntiprism => "modified antiprism",
    Elementary => "elementary",
}

/// Any supported solid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specification {
    Classical(Classical),
    Prismatic(Prismatic),
    Capstone(Capstone),
    Composite(Composite),
    ModifiedAntiprism(ModifiedAntiprism),
    Elementary(Elementary),
}

impl Specification {
    /// Canonical name.
    pub fn name(&self) -> String {
        match self {
            Specification::Classical(s) => s.canonical_name(),
            Specification::Prismatic(s) => s.canonical_name(),
            Specification::Capstone(s) => s.canonical_name(),
            Specification::Composite(s) => s.canonical_name(),
            Specification::ModifiedAntiprism(s) => s.canonical_name(),
            Specification::Elementary(s) => s.canonical_name(),
        }
    }

    pub fn family(&self) -> &'static str {
        match self {
            Specification::Classical(_) => Classical::FAMILY,
            Specification::Prismatic(_) => Prismatic::FAMILY,
            Specification::Capstone(_) => Capstone::FAMILY,
            Specification::Composite(_) => Composite::FAMILY,
            Specification::ModifiedAntiprism(_) => ModifiedAntiprism::FAMILY,
            Specification::Elementary(_) => Elementary::FAMILY,
        }
    }

    pub fn as_classical(&self) -> Option<&Classical> {
        match self {
            Specification::Classical(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_prismatic(&self) -> Option<&Prismatic> {
        match self {
            Specification::Prismatic(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_capstone(&self) -> Option<&Capstone> {
        match self {
            Specification::Capstone(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Specification::Composite(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_modified(&self) -> Option<&ModifiedAntiprism> {
        match self {
            Specification::ModifiedAntiprism(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_classical(&self) -> bool {
        self.as_classical().is_some()
    }

    pub fn is_capstone(&self) -> bool {
        self.as_capstone().is_some()
    }

    pub fn is_composite(&self) -> bool {
        self.as_composite().is_some()
    }

    /// Canonical name equality; distinct specifications may realize the same solid.
    pub fn same_solid(&self, other: &Specification) -> bool {
        self.name() == other.name()
    }
}

impl std::fmt::Display for Specification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<Classical> for Specification {
    fn from(s: Classical) -> Self {
        Specification::Classical(s)
    }
}

impl From<Prismatic> for Specification {
    fn from(s: Prismatic) -> Self {
        Specification::Prismatic(s)
    }
}

impl From<Capstone> for Specification {
    fn from(s: Capstone) -> Self {
        Specification::Capstone(s)
    }
}

impl From<Composite> for Specification {
    fn from(s: Composite) -> Self {
        Specification::Composite(s)
    }
}

impl From<ModifiedAntiprism> for Specification {
    fn from(s: ModifiedAntiprism) -> Self {
        Specification::ModifiedAntiprism(s)
    }
}

impl From<Elementary> for Specification {
    fn from(s: Elementary) -> Self {
        Specification::Elementary(s)
    }
}

impl From<CompositeSource> for Specification {
    fn from(s: CompositeSource) -> Self {
        match s {
            CompositeSource::Classical(c) => Specification::Classical(c),
            CompositeSource::Capstone(c) => Specification::Capstone(c),
        }
    }
}

#[cfg(test)]
mod tests;
