//! Indexed polygon mesh with derived half-edge adjacency.
//!
//! Purpose
//! - Store a closed convex solid as a vertex list plus counterclockwise faces and
//!   answer adjacency and measurement queries from the face table alone.
//!
//! Why this design (short)
//! - The directed-edge index is a pure fold over the face table, built and
//!   validated once in `Polyhedron::new` and shared (`Arc`) by copies that keep
//!   the same faces. Nothing is stored redundantly.
//! - `Vertex`/`Face`/`Edge` are borrowed `(mesh, index)` handles. Equality is
//!   mesh identity plus index.
//! - Edits are copy-on-write through `MeshBuilder`; the source mesh is never
//!   touched.
//!
//! Assumptions and conventions
//! - Face winding is counterclockwise seen from outside.
//! - Tolerances are relative to the mesh scale (`cfg.rs`).
//! - A fan that does not close is a `MeshInvariantViolation`, never a partial
//!   answer.
//!
//! References
//! - Related code: `crate::realize` (producers), `crate::ops` (consumers).

mod caps;
mod congruence;
mod dedup;
mod handles;
mod hull;
mod types;

pub use caps::{caps, Cap, CapKind};
pub use congruence::is_congruent;
pub use handles::{Edge, Face, Vertex};
pub use hull::HullCfg;
pub use types::{MeshBuilder, MeshExport, Polyhedron};

#[cfg(test)]
mod tests;
