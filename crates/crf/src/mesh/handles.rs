//! Borrowed index handles: `Vertex`, `Face`, `Edge`.
//!
//! A handle is `(&Polyhedron, index)`. Equality compares mesh identity (pointer)
//! and index, so handles from different meshes never compare equal and cannot
//! outlive their mesh.

use std::f64::consts::PI;
use std::fmt;

use itertools::Itertools;

use crate::cfg::EDGE_EPS;
use crate::error::Result;
use crate::geom::{Plane, Vec3};

use super::Polyhedron;

#[derive(Clone, Copy)]
pub struct Vertex<'a> {
    mesh: &'a Polyhedron,
    index: usize,
}

#[derive(Clone, Copy)]
pub struct Face<'a> {
    mesh: &'a Polyhedron,
    index: usize,
}

/// Directed edge `v1 -> v2`, owned by the face that contains it in that direction.
#[derive(Clone, Copy)]
pub struct Edge<'a> {
    mesh: &'a Polyhedron,
    a: usize,
    b: usize,
}

macro_rules! handle_eq {
    ($t:ident, $($f:ident),+) => {
        impl PartialEq for $t<'_> {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.mesh, other.mesh) $(&& self.$f == other.$f)+
            }
        }
        impl Eq for $t<'_> {}
    };
}
handle_eq!(Vertex, index);
handle_eq!(Face, index);
handle_eq!(Edge, a, b);

impl fmt::Debug for Vertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self.index)
    }
}
impl fmt::Debug for Face<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face({}, {:?})", self.index, self.mesh.faces[self.index])
    }
}
impl fmt::Debug for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.a, self.b)
    }
}

impl Polyhedron {
    /// Handle for vertex `index`. Panics if out of range, like slice indexing.
    pub fn vertex(&self, index: usize) -> Vertex<'_> {
        assert!(index < self.vertices.len(), "vertex {index} out of range");
        Vertex { mesh: self, index }
    }

    /// Handle for face `index`. Panics if out of range, like slice indexing.
    pub fn face(&self, index: usize) -> Face<'_> {
        assert!(index < self.faces.len(), "face {index} out of range");
        Face { mesh: self, index }
    }

    /// The directed edge `a -> b`, if some face contains it.
    pub fn edge(&self, a: usize, b: usize) -> Option<Edge<'_>> {
        self.adj
            .edge_face
            .contains_key(&(a, b))
            .then_some(Edge { mesh: self, a, b })
    }

    pub fn vertex_handles(&self) -> impl Iterator<Item = Vertex<'_>> + '_ {
        (0..self.vertices.len()).map(move |index| Vertex { mesh: self, index })
    }

    pub fn face_handles(&self) -> impl Iterator<Item = Face<'_>> + '_ {
        (0..self.faces.len()).map(move |index| Face { mesh: self, index })
    }

    /// One directed edge per undirected edge (`v1 < v2`), sorted.
    pub fn edges(&self) -> Vec<Edge<'_>> {
        let mut out: Vec<_> = self
            .adj
            .edge_face
            .keys()
            .filter(|(a, b)| a < b)
            .map(|&(a, b)| Edge { mesh: self, a, b })
            .collect();
        out.sort_by_key(|e| (e.a, e.b));
        out
    }

    pub fn faces_with_num_sides(&self, n: usize) -> impl Iterator<Item = Face<'_>> + '_ {
        self.face_handles().filter(move |f| f.num_sides() == n)
    }

    pub fn face_with_num_sides(&self, n: usize) -> Option<Face<'_>> {
        self.faces_with_num_sides(n).next()
    }

    /// Every vertex on the surface, every face regular, every edge of one
    /// length and every dihedral angle convex.
    pub fn is_crf(&self) -> bool {
        let l = self.edge_length();
        let tol = EDGE_EPS * l.max(1e-12);
        self.adj.vertex_edge.iter().all(Option::is_some)
            && self.face_handles().all(|f| f.is_valid() && (f.side_length() - l).abs() < tol)
            && self.edges().iter().all(|e| {
                let a = e.dihedral_angle();
                a > 1e-6 && a < PI - 1e-6
            })
    }

    /// Face whose plane is nearest to `p` among faces whose outward side `p` is on
    /// (or nearest overall when `p` is inside).
    pub fn hit_face(&self, p: &Vec3) -> Face<'_> {
        let distances: Vec<f64> = self.face_handles().map(|f| f.plane().signed_distance(p)).collect();
        let outside = distances.iter().any(|&d| d >= 0.0);
        let index = distances
            .iter()
            .enumerate()
            .filter(|&(_, &d)| !outside || d >= 0.0)
            .min_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()))
            .map_or(0, |(i, _)| i);
        Face { mesh: self, index }
    }
}

impl<'a> Vertex<'a> {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.mesh.vertices[self.index]
    }
    #[inline]
    pub fn mesh(&self) -> &'a Polyhedron {
        self.mesh
    }

    /// Outgoing edges in counterclockwise order seen from outside.
    /// Empty for vertices no face references.
    pub fn adjacent_edges(&self) -> Result<Vec<Edge<'a>>> {
        let Some(start) = self.mesh.adj.vertex_edge[self.index] else {
            return Ok(Vec::new());
        };
        let fan = self.mesh.adj.fan(&self.mesh.faces, start)?;
        Ok(fan
            .into_iter()
            .map(|(a, b)| Edge {
                mesh: self.mesh,
                a,
                b,
            })
            .collect())
    }

    /// Incident faces in rotational order.
    pub fn adjacent_faces(&self) -> Vec<Face<'a>> {
        self.fan_or_empty().into_iter().map(|e| e.face()).collect()
    }

    /// Neighboring vertices in rotational order.
    pub fn adjacent_vertices(&self) -> Vec<Vertex<'a>> {
        self.fan_or_empty().into_iter().map(|e| e.v2()).collect()
    }

    pub fn degree(&self) -> usize {
        self.fan_or_empty().len()
    }

    // Fans of a validated mesh always close.
    fn fan_or_empty(&self) -> Vec<Edge<'a>> {
        self.adjacent_edges().unwrap_or_default()
    }
}

impl<'a> Face<'a> {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
    #[inline]
    pub fn mesh(&self) -> &'a Polyhedron {
        self.mesh
    }
    #[inline]
    pub fn vertex_indices(&self) -> &'a [usize] {
        &self.mesh.faces[self.index]
    }
    #[inline]
    pub fn num_sides(&self) -> usize {
        self.vertex_indices().len()
    }

    pub fn vertices(&self) -> Vec<Vertex<'a>> {
        self.vertex_indices()
            .iter()
            .map(|&index| Vertex {
                mesh: self.mesh,
                index,
            })
            .collect()
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.vertex_indices()
            .iter()
            .map(|&i| self.mesh.vertices[i])
            .collect()
    }

    /// Edges in face order: edge `k` runs from vertex `k` to vertex `k + 1`.
    pub fn edges(&self) -> Vec<Edge<'a>> {
        let vs = self.vertex_indices();
        (0..vs.len())
            .map(|k| Edge {
                mesh: self.mesh,
                a: vs[k],
                b: vs[(k + 1) % vs.len()],
            })
            .collect()
    }

    /// Faces across each edge, in edge order.
    pub fn adjacent_faces(&self) -> Vec<Face<'a>> {
        self.edges().into_iter().map(|e| e.twin_face()).collect()
    }

    pub fn centroid(&self) -> Vec3 {
        crate::geom::centroid(&self.positions())
    }

    /// Outward unit normal (Newell's method).
    pub fn normal(&self) -> Vec3 {
        self.positions()
            .iter()
            .circular_tuple_windows()
            .fold(Vec3::zeros(), |n, (p, q)| n + p.cross(q))
            .normalize()
    }

    pub fn plane(&self) -> Plane {
        Plane::new(&self.centroid(), &self.normal())
    }

    pub fn side_length(&self) -> f64 {
        let ps = self.positions();
        (ps[1] - ps[0]).norm()
    }

    /// Distance from the centroid to a vertex.
    pub fn radius(&self) -> f64 {
        (self.positions()[0] - self.centroid()).norm()
    }

    /// Distance from the centroid to an edge midpoint.
    pub fn apothem(&self) -> f64 {
        self.side_length() / (2.0 * (PI / self.num_sides() as f64).tan())
    }

    /// Regular within tolerance: equal sides and equal circumradii.
    pub fn is_valid(&self) -> bool {
        let ps = self.positions();
        let s = self.side_length();
        let c = self.centroid();
        let r = (ps[0] - c).norm();
        let tol = EDGE_EPS * s.max(1e-12);
        ps.iter()
            .circular_tuple_windows()
            .all(|(p, q)| ((q - p).norm() - s).abs() < tol && ((p - c).norm() - r).abs() < tol)
    }

    /// Distance from the mesh centroid to the face plane.
    pub fn distance_to_center(&self) -> f64 {
        self.plane().signed_distance(&self.mesh.centroid()).abs()
    }

    pub fn in_set(&self, indices: &[usize]) -> bool {
        indices.contains(&self.index)
    }
}

impl<'a> Edge<'a> {
    #[inline]
    pub fn v1(&self) -> Vertex<'a> {
        Vertex {
            mesh: self.mesh,
            index: self.a,
        }
    }
    #[inline]
    pub fn v2(&self) -> Vertex<'a> {
        Vertex {
            mesh: self.mesh,
            index: self.b,
        }
    }
    /// `(v1, v2)` indices.
    #[inline]
    pub fn value(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    pub fn twin(&self) -> Edge<'a> {
        Edge {
            mesh: self.mesh,
            a: self.b,
            b: self.a,
        }
    }

    fn slot(&self) -> (usize, usize) {
        // present for every edge handed out by a validated mesh
        self.mesh.adj.edge_face.get(&(self.a, self.b)).copied().unwrap_or((0, 0))
    }

    pub fn face(&self) -> Face<'a> {
        Face {
            mesh: self.mesh,
            index: self.slot().0,
        }
    }

    pub fn twin_face(&self) -> Face<'a> {
        self.twin().face()
    }

    /// Next edge along the owning face.
    pub fn next(&self) -> Edge<'a> {
        let (fi, k) = self.slot();
        let f = &self.mesh.faces[fi];
        Edge {
            mesh: self.mesh,
            a: self.b,
            b: f[(k + 2) % f.len()],
        }
    }

    /// Previous edge along the owning face.
    pub fn prev(&self) -> Edge<'a> {
        let (fi, k) = self.slot();
        let f = &self.mesh.faces[fi];
        Edge {
            mesh: self.mesh,
            a: f[(k + f.len() - 1) % f.len()],
            b: self.a,
        }
    }

    pub fn midpoint(&self) -> Vec3 {
        (self.mesh.vertices[self.a] + self.mesh.vertices[self.b]) / 2.0
    }

    pub fn length(&self) -> f64 {
        (self.mesh.vertices[self.b] - self.mesh.vertices[self.a]).norm()
    }

    /// Interior angle between the two incident faces; in `(0, π)` on convex solids.
    pub fn dihedral_angle(&self) -> f64 {
        let n1 = self.face().normal();
        let n2 = self.twin_face().normal();
        PI - n1.dot(&n2).clamp(-1.0, 1.0).acos()
    }
}
