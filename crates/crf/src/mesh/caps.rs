//! Cap detection: pyramids, cupolae (including the digonal fastigium), rotundae.
//!
//! A cap is a set of faces around a top (apex vertex, top face or top edge)
//! whose outer rim is a single planar regular polygon, the boundary. Removing
//! the cap and closing the boundary with one face leaves a valid solid.
//!
//! Templates, by face sizes in rotational order around each top vertex
//! (starting at the top face):
//! - pyramid: apex of degree 3..=5 surrounded by triangles;
//! - cupola: `[n, 4, 3, 4]` for an `n`-gon top, `n` in 3..=5;
//! - digonal cupola: a top edge between two squares, endpoints `[4, 4, 3]`;
//! - rotunda: `[5, 3, 5, 3]` for a pentagon top.

use itertools::Itertools;

use crate::cfg::{EDGE_EPS, PLANE_EPS};
use crate::error::Result;
use crate::geom::{centroid, Plane, Vec3};

use super::Polyhedron;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapKind {
    Pyramid,
    Cupola,
    Rotunda,
}

/// A removable cap of a mesh. All indices refer to the mesh it was found on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cap {
    pub kind: CapKind,
    /// Apex, top face vertices, or top edge.
    pub top: Vec<usize>,
    /// Vertices removed with the cap (sorted).
    pub inner: Vec<usize>,
    /// Rim, wound like the face that closes the hole when the cap is removed.
    pub boundary: Vec<usize>,
    /// Cap faces (sorted).
    pub faces: Vec<usize>,
}

impl Cap {
    /// Polygon size of the cap's base type: pyramid rim, or half the rim.
    pub fn base(&self) -> usize {
        match self.kind {
            CapKind::Pyramid => self.boundary.len(),
            CapKind::Cupola | CapKind::Rotunda => self.boundary.len() / 2,
        }
    }

    pub fn boundary_positions(&self, mesh: &Polyhedron) -> Vec<Vec3> {
        self.boundary.iter().map(|&v| mesh.vertices[v]).collect()
    }

    pub fn boundary_centroid(&self, mesh: &Polyhedron) -> Vec3 {
        centroid(&self.boundary_positions(mesh))
    }

    /// Unit normal of the rim, pointing into the cap.
    pub fn normal(&self, mesh: &Polyhedron) -> Vec3 {
        newell(&self.boundary_positions(mesh))
    }

    pub fn boundary_plane(&self, mesh: &Polyhedron) -> Plane {
        Plane::new(&self.boundary_centroid(mesh), &self.normal(mesh))
    }

    pub fn top_centroid(&self, mesh: &Polyhedron) -> Vec3 {
        centroid(&self.top.iter().map(|&v| mesh.vertices[v]).collect::<Vec<_>>())
    }

    pub fn contains_face(&self, face: usize) -> bool {
        self.faces.binary_search(&face).is_ok()
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        self.inner.binary_search(&v).is_ok()
    }

    /// True if the two caps face opposite directions.
    pub fn is_inverse_of(&self, other: &Cap, mesh: &Polyhedron) -> bool {
        crate::geom::is_inverse(&self.normal(mesh), &other.normal(mesh))
    }
}

fn newell(ps: &[Vec3]) -> Vec3 {
    ps.iter()
        .circular_tuple_windows()
        .fold(Vec3::zeros(), |n, (p, q)| n + p.cross(q))
        .normalize()
}

fn sides_around(mesh: &Polyhedron, v: usize, start_face: usize) -> Option<Vec<usize>> {
    let faces = mesh.vertex(v).adjacent_faces();
    let s = faces.iter().position(|f| f.index() == start_face)?;
    Some(
        (0..faces.len())
            .map(|k| faces[(s + k) % faces.len()].num_sides())
            .collect(),
    )
}

/// Build a cap from its inner vertices and check the rim.
fn cap_from_inner(
    mesh: &Polyhedron,
    kind: CapKind,
    top: Vec<usize>,
    mut inner: Vec<usize>,
    rim_len: usize,
) -> Option<Cap> {
    inner.sort_unstable();
    inner.dedup();
    let mut faces: Vec<usize> = inner
        .iter()
        .flat_map(|&v| mesh.vertex(v).adjacent_faces())
        .map(|f| f.index())
        .collect();
    faces.sort_unstable();
    faces.dedup();

    let mut next = std::collections::HashMap::new();
    for &fi in &faces {
        for e in mesh.face(fi).edges() {
            if faces.binary_search(&e.twin_face().index()).is_err() {
                let (a, b) = e.value();
                if next.insert(a, b).is_some() {
                    return None;
                }
            }
        }
    }
    if next.len() != rim_len {
        return None;
    }
    let start = *next.keys().min()?;
    let mut boundary = vec![start];
    let mut v = *next.get(&start)?;
    while v != start {
        if boundary.len() > rim_len {
            return None;
        }
        boundary.push(v);
        v = *next.get(&v)?;
    }
    if boundary.len() != rim_len || boundary.iter().any(|b| inner.binary_search(b).is_ok()) {
        return None;
    }

    // planar, regular, and the inner vertices strictly outside the rim plane
    let ps: Vec<Vec3> = boundary.iter().map(|&b| mesh.vertices[b]).collect();
    let c = centroid(&ps);
    let n = newell(&ps);
    let scale = mesh.edge_length().max(1e-12);
    let r0 = (ps[0] - c).norm();
    let planar = ps.iter().all(|p| n.dot(&(p - c)).abs() < PLANE_EPS * scale * 10.0);
    let regular = ps.iter().all(|p| ((p - c).norm() - r0).abs() < EDGE_EPS * scale);
    let above = inner
        .iter()
        .all(|&v| n.dot(&(mesh.vertices[v] - c)) > PLANE_EPS * scale);
    (planar && regular && above).then(|| Cap {
        kind,
        top,
        inner,
        boundary,
        faces,
    })
}

/// All caps of a mesh: pyramids by apex index, then cupolae (top faces by
/// index, then digonal top edges), then rotundae.
pub fn caps(mesh: &Polyhedron) -> Vec<Cap> {
    let mut out = Vec::new();

    for v in mesh.vertex_handles() {
        let faces = v.adjacent_faces();
        let d = faces.len();
        if (3..=5).contains(&d) && faces.iter().all(|f| f.num_sides() == 3) {
            let i = v.index();
            if let Some(cap) = cap_from_inner(mesh, CapKind::Pyramid, vec![i], vec![i], d) {
                out.push(cap);
            }
        }
    }

    for f in mesh.face_handles() {
        let n = f.num_sides();
        if !(3..=5).contains(&n) {
            continue;
        }
        let top = f.vertex_indices().to_vec();
        if top
            .iter()
            .all(|&v| sides_around(mesh, v, f.index()).as_deref() == Some(&[n, 4, 3, 4][..]))
        {
            if let Some(cap) = cap_from_inner(mesh, CapKind::Cupola, top.clone(), top, 2 * n) {
                out.push(cap);
            }
        }
    }

    for e in mesh.edges() {
        let (a, b) = e.value();
        if e.face().num_sides() != 4 || e.twin_face().num_sides() != 4 {
            continue;
        }
        let fan_ok = |v: usize| {
            sides_around(mesh, v, e.face().index())
                .map(|s| {
                    let mut s = s;
                    s.sort_unstable();
                    s == [3, 4, 4]
                })
                .unwrap_or(false)
        };
        if fan_ok(a) && fan_ok(b) {
            if let Some(cap) = cap_from_inner(mesh, CapKind::Cupola, vec![a, b], vec![a, b], 4) {
                out.push(cap);
            }
        }
    }

    for f in mesh.faces_with_num_sides(5) {
        let top = f.vertex_indices().to_vec();
        if !top
            .iter()
            .all(|&v| sides_around(mesh, v, f.index()).as_deref() == Some(&[5, 3, 5, 3][..]))
        {
            continue;
        }
        let mut inner = top.clone();
        for e in f.edges() {
            let tri = e.twin_face();
            inner.extend(
                tri.vertex_indices()
                    .iter()
                    .copied()
                    .filter(|v| !top.contains(v)),
            );
        }
        if let Some(cap) = cap_from_inner(mesh, CapKind::Rotunda, top, inner, 10) {
            out.push(cap);
        }
    }
    out
}

impl Polyhedron {
    /// Remove a cap and close the hole with its boundary face.
    pub fn without_cap(&self, cap: &Cap) -> Result<Polyhedron> {
        let mut b = self.edit();
        b.remove_faces(cap.faces.iter().copied());
        b.add_faces([cap.boundary.clone()]);
        b.build()
    }
}
