//! CRF polyhedra: specifications, reference meshes and reversible operations.
//!
//! Layers, leaves first:
//! - `names`: canonical names, alternates and Conway notation (pure tables).
//! - `mesh`: indexed polyhedron with derived half-edge adjacency and caps.
//! - `specs`: the closed `Specification` sum type, per-family generators and
//!   `Queries` indices.
//! - `symmetry`, `info`: pure functions of a specification.
//! - `realize`: deterministic unit-edge reference mesh for any specification.
//! - `forme`: a specification bound to a mesh, with memoized landmark queries.
//! - `ops`: the operation-pair graph and every public operation.
//!
//! API Policy
//! - `api` is the curated surface for external callers (renderers, writers).
//!   Everything else is reachable but may change without notice.

pub mod api;
mod cfg;
pub mod error;
pub mod forme;
pub mod geom;
pub mod info;
pub mod mesh;
pub mod names;
pub mod ops;
pub mod realize;
pub mod specs;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PolyError, Result};
pub use geom::Vec3;
pub use mesh::Polyhedron;
pub use specs::Specification;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{PolyError, Result};
    pub use crate::geom::{Plane, Pose, Similarity, Vec3};
    pub use crate::mesh::{Cap, CapKind, Edge, Face, MeshExport, Polyhedron, Vertex};
    pub use crate::ops::{
        AnimationData, AugmentOptions, CapOptions, ExpandOptions, FacetOptions, OpResult, Operation,
        OperationInfo, SelectState, ShortenOptions, Side, SnubOptions, Solid, TurnOptions, TwistOptions,
    };
    pub use crate::realize::realize;
    pub use crate::specs::{registry, Specification};
    pub use crate::symmetry::{symmetry, Symmetry};
}
