//! Reference meshes: deterministic unit-edge realizations of specifications.
//!
//! Purpose
//! - `realize(spec)` returns a closed, convex mesh with unit edges and regular
//!   faces, centered at the origin. Same spec, same mesh (vertex order
//!   included).
//!
//! Construction
//! - Classical: Wythoff orbit of a seed point (`wythoff`).
//! - Prismatic, Capstone: regular rings stacked along `z` (`stack`).
//! - Composite: caps added to, removed from or rotated on the source
//!   (`composite`).
//! - ModifiedAntiprism, Elementary: tabulated coordinates (`tables`), except
//!   the snub triangular antiprism which is the icosahedron.
//! - Every point set goes through the unit-edge hull (`Polyhedron::from_points_hull`)
//!   and is rejected unless the result is a CRF solid.
//!
//! Caching
//! - Results are memoized per specification for the process lifetime.
//!   Construction runs outside the lock, so concurrent first calls may both
//!   build; they produce identical meshes.

pub(crate) mod composite;
pub(crate) mod stack;
mod tables;
pub(crate) mod wythoff;

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use tracing::debug;

use crate::error::{PolyError, Result};
use crate::geom::Vec3;
use crate::mesh::Polyhedron;
use crate::specs::{
    Classical, ClassicalOp, ElementaryKind, Facet, Family, ModifiedOp, Specification,
};

/// Unit-edge reference mesh of `spec`.
///
/// Errors: `MeshInvariantViolation` if a construction does not close into a
/// CRF solid; `SpecificationDomain` for composites without a construction.
pub fn realize(spec: &Specification) -> Result<Polyhedron> {
    static CACHE: OnceLock<Mutex<HashMap<Specification, Polyhedron>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    if let Some(hit) = cache.lock().ok().and_then(|m| m.get(spec).cloned()) {
        return Ok(hit);
    }
    let mesh = build(spec)?;
    debug!(solid = %spec, vertices = mesh.num_vertices(), faces = mesh.num_faces(), "realized");
    if let Ok(mut m) = cache.lock() {
        m.entry(*spec).or_insert_with(|| mesh.clone());
    }
    Ok(mesh)
}

fn build(spec: &Specification) -> Result<Polyhedron> {
    match spec {
        Specification::Classical(c) => wythoff::classical(c),
        Specification::Prismatic(p) => stack::prismatic(p.base, p.kind),
        Specification::Capstone(c) => stack::capstone(c),
        Specification::Composite(c) => composite::composite(c),
        Specification::ModifiedAntiprism(m) => match (m.operation, m.base()) {
            (ModifiedOp::None, _) => stack::prismatic(m.base(), m.source.kind),
            (ModifiedOp::Snub, 2) => table(&tables::SNUB_DISPHENOID),
            (ModifiedOp::Snub, 3) => wythoff::classical(&Classical {
                family: Family::Icosahedral,
                operation: ClassicalOp::Regular,
                facet: Some(Facet::Vertex),
                twist: None,
            }),
            (ModifiedOp::Snub, 4) => table(&tables::SNUB_SQUARE_ANTIPRISM),
            (ModifiedOp::Snub, b) => Err(PolyError::domain(format!("no snub {b}-antiprism"))),
        },
        Specification::Elementary(e) => table(match e.base {
            ElementaryKind::Sphenocorona => &tables::SPHENOCORONA[..],
            ElementaryKind::AugmentedSphenocorona => &tables::AUGMENTED_SPHENOCORONA[..],
            ElementaryKind::Sphenomegacorona => &tables::SPHENOMEGACORONA[..],
            ElementaryKind::Hebesphenomegacorona => &tables::HEBESPHENOMEGACORONA[..],
            ElementaryKind::Disphenocingulum => &tables::DISPHENOCINGULUM[..],
            ElementaryKind::Bilunabirotunda => &tables::BILUNABIROTUNDA[..],
            ElementaryKind::TriangularHebesphenorotunda => &tables::TRIANGULAR_HEBESPHENOROTUNDA[..],
        }),
    }
}

fn table(rows: &[[f64; 3]]) -> Result<Polyhedron> {
    let pts: Vec<Vec3> = rows.iter().map(|&[x, y, z]| Vec3::new(x, y, z)).collect();
    crf_hull(&pts)
}

/// Unit-edge hull of `points`, centered, or an error if it is not a CRF solid
/// using every point.
pub(crate) fn crf_hull(points: &[Vec3]) -> Result<Polyhedron> {
    let hull = Polyhedron::from_points_hull(points)?;
    if !hull.is_crf() {
        return Err(PolyError::mesh(format!(
            "{} points do not span a CRF solid",
            points.len()
        )));
    }
    Ok(hull.center().normalize_edge())
}

#[cfg(test)]
mod tests;
