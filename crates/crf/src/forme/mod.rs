//! Formes: a specification bound to a mesh that realizes it.
//!
//! Purpose
//! - Answer specification-aware questions about a concrete (possibly moved or
//!   scaled) mesh: where the ends of a capstone are, which faces a classical
//!   operation expands, which caps of a composite were added or rotated.
//!
//! Conventions
//! - The dispatch is closed: one variant per family that carries landmark
//!   queries, plus `Generic` for the rest.
//! - Derived queries are memoized in `OnceLock` cells on first access. Inputs
//!   are immutable, so repeated or concurrent initialization converges.
//! - Landmark queries that cannot find their landmark return
//!   `MeshInvariantViolation`: the mesh does not realize the specification.
//!
//! References
//! - Related code: `crate::ops` (poses and selections), `crate::mesh::caps`.

mod capstone;
mod classical;
mod composite;

pub use capstone::{CapstoneForme, CapstoneKind, End, Ends};
pub use classical::ClassicalForme;
pub use composite::CompositeForme;

use std::sync::OnceLock;

use crate::mesh::{caps, Cap, Polyhedron};
use crate::specs::Specification;

/// Specification plus mesh, with family-specific landmark queries.
#[derive(Debug)]
pub enum Forme {
    Classical(ClassicalForme),
    Capstone(CapstoneForme),
    Composite(CompositeForme),
    Generic(GenericForme),
}

impl Forme {
    /// Bind `spec` to `mesh`. Prismatic solids and snubs use the capstone queries.
    pub fn new(spec: Specification, mesh: Polyhedron) -> Forme {
        match spec {
            Specification::Classical(c) => Forme::Classical(ClassicalForme::new(c, mesh)),
            Specification::Prismatic(_)
            | Specification::Capstone(_)
            | Specification::ModifiedAntiprism(_) => {
                match CapstoneForme::new(spec, mesh.clone()) {
                    Some(f) => Forme::Capstone(f),
                    None => Forme::Generic(GenericForme::new(spec, mesh)),
                }
            }
            Specification::Composite(c) => Forme::Composite(CompositeForme::new(c, mesh)),
            _ => Forme::Generic(GenericForme::new(spec, mesh)),
        }
    }

    pub fn spec(&self) -> Specification {
        match self {
            Forme::Classical(f) => f.spec().into(),
            Forme::Capstone(f) => f.spec(),
            Forme::Composite(f) => f.spec().into(),
            Forme::Generic(f) => f.spec,
        }
    }

    pub fn mesh(&self) -> &Polyhedron {
        match self {
            Forme::Classical(f) => f.mesh(),
            Forme::Capstone(f) => f.mesh(),
            Forme::Composite(f) => f.mesh(),
            Forme::Generic(f) => &f.mesh,
        }
    }

    /// Caps that a cut-paste operation may remove or rotate.
    pub fn mod_caps(&self) -> Vec<Cap> {
        match self {
            Forme::Capstone(f) => f.end_caps(),
            Forme::Composite(f) => f.mod_caps().to_vec(),
            Forme::Classical(f) => f.caps().to_vec(),
            Forme::Generic(f) => f.caps().to_vec(),
        }
    }
}

/// Families without landmark queries: only the memoized cap list.
#[derive(Debug)]
pub struct GenericForme {
    spec: Specification,
    mesh: Polyhedron,
    caps: OnceLock<Vec<Cap>>,
}

impl GenericForme {
    fn new(spec: Specification, mesh: Polyhedron) -> Self {
        Self {
            spec,
            mesh,
            caps: OnceLock::new(),
        }
    }

    pub fn caps(&self) -> &[Cap] {
        self.caps.get_or_init(|| caps(&self.mesh))
    }
}

#[cfg(test)]
mod tests;
