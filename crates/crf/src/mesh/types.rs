//! `Polyhedron` value type, adjacency index and copy-on-write edits.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{PolyError, Result};
use crate::geom::{centroid, Similarity, Vec3};

/// Directed-edge index derived from the face table.
#[derive(Debug, Default)]
pub(crate) struct Adjacency {
    /// Directed edge `(a, b)` -> `(face, position of a in face)`.
    pub(crate) edge_face: HashMap<(usize, usize), (usize, usize)>,
    /// One outgoing directed edge per referenced vertex.
    pub(crate) vertex_edge: Vec<Option<(usize, usize)>>,
}

impl Adjacency {
    /// Fold the face table into a directed-edge index and check that the surface
    /// is closed: every directed edge occurs once, its twin exists, and the face
    /// fan around every referenced vertex closes into a single cycle.
    fn build(num_vertices: usize, faces: &[Vec<usize>]) -> Result<Self> {
        let mut edge_face = HashMap::with_capacity(faces.iter().map(Vec::len).sum());
        let mut vertex_edge = vec![None; num_vertices];
        let mut out_degree = vec![0usize; num_vertices];
        for (fi, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(PolyError::mesh(format!("face {fi} has {} vertices", face.len())));
            }
            for (k, &a) in face.iter().enumerate() {
                let b = face[(k + 1) % face.len()];
                if a >= num_vertices || b >= num_vertices {
                    return Err(PolyError::mesh(format!("face {fi} references a missing vertex")));
                }
                if a == b {
                    return Err(PolyError::mesh(format!("face {fi} repeats vertex {a}")));
                }
                if edge_face.insert((a, b), (fi, k)).is_some() {
                    return Err(PolyError::mesh(format!("directed edge ({a}, {b}) appears twice")));
                }
                vertex_edge[a].get_or_insert((a, b));
                out_degree[a] += 1;
            }
        }
        for &(a, b) in edge_face.keys() {
            if !edge_face.contains_key(&(b, a)) {
                return Err(PolyError::mesh(format!("edge ({a}, {b}) has no twin")));
            }
        }
        let adj = Self {
            edge_face,
            vertex_edge,
        };
        for (v, start) in adj.vertex_edge.iter().enumerate() {
            let Some(start) = *start else { continue };
            let fan = adj.fan(faces, start)?;
            if fan.len() != out_degree[v] {
                return Err(PolyError::mesh(format!(
                    "vertex {v} is non-manifold ({} of {} edges in its fan)",
                    fan.len(),
                    out_degree[v]
                )));
            }
        }
        Ok(adj)
    }

    /// Directed edge of `face` ending at the tail of `(a, b)`.
    fn prev_in_face(&self, faces: &[Vec<usize>], (a, b): (usize, usize)) -> Option<(usize, usize)> {
        let &(fi, k) = self.edge_face.get(&(a, b))?;
        let face = &faces[fi];
        let u = face[(k + face.len() - 1) % face.len()];
        Some((u, a))
    }

    /// Outgoing edges of the tail of `start`, in counterclockwise order seen from
    /// outside. Walks `twin(prev(e))` and fails if it does not return to `start`.
    pub(crate) fn fan(&self, faces: &[Vec<usize>], start: (usize, usize)) -> Result<Vec<(usize, usize)>> {
        let mut out = vec![start];
        let mut e = start;
        let bound = self.edge_face.len();
        loop {
            let (u, v) = self
                .prev_in_face(faces, e)
                .ok_or_else(|| PolyError::mesh(format!("edge {e:?} is not in any face")))?;
            e = (v, u);
            if e == start {
                return Ok(out);
            }
            if out.len() > bound || !self.edge_face.contains_key(&e) {
                return Err(PolyError::mesh(format!("fan around vertex {} does not close", start.0)));
            }
            out.push(e);
        }
    }
}

/// Closed, consistently wound polygon mesh.
///
/// Invariants (checked by [`Polyhedron::new`]):
/// - every face has at least 3 distinct, valid vertex indices, counterclockwise
///   seen from outside;
/// - every undirected edge is shared by exactly two faces, once in each direction;
/// - the faces around every referenced vertex form a single closed fan.
///
/// Values are immutable; edits build a new mesh and never affect copies.
#[derive(Clone, Debug)]
pub struct Polyhedron {
    pub(crate) vertices: Vec<Vec3>,
    pub(crate) faces: Vec<Vec<usize>>,
    pub(crate) adj: Arc<Adjacency>,
}

impl Polyhedron {
    /// Validate and index a face table.
    ///
    /// Errors: `MeshInvariantViolation` if the surface is open, non-manifold or
    /// references missing vertices.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Vec<usize>>) -> Result<Self> {
        let adj = Adjacency::build(vertices.len(), &faces)?;
        Ok(Self {
            vertices,
            faces,
            adj: Arc::new(adj),
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
    #[inline]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.adj.edge_face.len() / 2
    }

    /// Mean of the vertex positions.
    pub fn centroid(&self) -> Vec3 {
        centroid(&self.vertices)
    }

    /// Length of the first edge of the first face (all edges are equal on CRF solids).
    pub fn edge_length(&self) -> f64 {
        match self.faces.first() {
            Some(f) => (self.vertices[f[1]] - self.vertices[f[0]]).norm(),
            None => 0.0,
        }
    }

    /// Histogram `sides -> number of faces`.
    pub fn face_counts(&self) -> BTreeMap<usize, usize> {
        let mut out = BTreeMap::new();
        for f in &self.faces {
            *out.entry(f.len()).or_insert(0) += 1;
        }
        out
    }

    /// Largest distance of a vertex from the centroid; the length scale used for
    /// size-relative tolerances.
    pub fn radius(&self) -> f64 {
        let c = self.centroid();
        self.vertices
            .iter()
            .map(|v| (v - c).norm())
            .fold(0.0, f64::max)
    }

    /// Same faces, new positions. The adjacency index is shared.
    pub fn with_vertices(&self, vertices: Vec<Vec3>) -> Result<Self> {
        if vertices.len() != self.vertices.len() {
            return Err(PolyError::mesh(format!(
                "expected {} vertex positions, got {}",
                self.vertices.len(),
                vertices.len()
            )));
        }
        Ok(Self {
            vertices,
            faces: self.faces.clone(),
            adj: Arc::clone(&self.adj),
        })
    }

    pub fn map_vertices(&self, f: impl Fn(&Vec3) -> Vec3) -> Self {
        Self {
            vertices: self.vertices.iter().map(f).collect(),
            faces: self.faces.clone(),
            adj: Arc::clone(&self.adj),
        }
    }

    /// Apply a similarity; reflections reverse the winding so normals stay outward.
    pub fn transform(&self, s: &Similarity) -> Self {
        let moved = self.map_vertices(|p| s.apply(p));
        if s.is_reflection() {
            moved.reversed()
        } else {
            moved
        }
    }

    /// Mirror image through the plane `x = 0`.
    pub fn mirror(&self) -> Self {
        self.map_vertices(|p| Vec3::new(-p.x, p.y, p.z)).reversed()
    }

    /// Translate so the vertex centroid is at the origin.
    pub fn center(&self) -> Self {
        let c = self.centroid();
        self.map_vertices(|p| p - c)
    }

    /// Scale about the origin so edges have unit length.
    pub fn normalize_edge(&self) -> Self {
        let l = self.edge_length();
        if l <= 0.0 {
            return self.clone();
        }
        self.map_vertices(|p| p / l)
    }

    fn reversed(&self) -> Self {
        let faces: Vec<Vec<usize>> = self
            .faces
            .iter()
            .map(|f| f.iter().rev().copied().collect())
            .collect();
        let adj = reverse_adjacency(&self.adj, &faces);
        Self {
            vertices: self.vertices.clone(),
            faces,
            adj: Arc::new(adj),
        }
    }

    /// Start a copy-on-write edit.
    pub fn edit(&self) -> MeshBuilder {
        MeshBuilder {
            vertices: self.vertices.clone(),
            faces: self.faces.iter().map(|f| Some(f.clone())).collect(),
        }
    }

    /// Plain vertex/face lists for external writers.
    pub fn export(&self) -> MeshExport {
        MeshExport {
            vertices: self.vertices.iter().map(|v| [v.x, v.y, v.z]).collect(),
            faces: self.faces.clone(),
        }
    }
}

fn reverse_adjacency(adj: &Adjacency, faces: &[Vec<usize>]) -> Adjacency {
    let mut edge_face = HashMap::with_capacity(adj.edge_face.len());
    for (fi, face) in faces.iter().enumerate() {
        for (k, &a) in face.iter().enumerate() {
            edge_face.insert((a, face[(k + 1) % face.len()]), (fi, k));
        }
    }
    // every directed edge keeps its twin, so the outgoing edges are unchanged
    Adjacency {
        edge_face,
        vertex_edge: adj.vertex_edge.clone(),
    }
}

/// Pending edit of a mesh; faces are removed by index, so indices stay stable
/// until [`MeshBuilder::build`].
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    vertices: Vec<Vec3>,
    faces: Vec<Option<Vec<usize>>>,
}

impl MeshBuilder {
    /// Append vertices; returns the index of the first one.
    pub fn add_vertices(&mut self, points: impl IntoIterator<Item = Vec3>) -> usize {
        let first = self.vertices.len();
        self.vertices.extend(points);
        first
    }

    pub fn add_faces(&mut self, faces: impl IntoIterator<Item = Vec<usize>>) -> &mut Self {
        self.faces.extend(faces.into_iter().map(Some));
        self
    }

    pub fn remove_faces(&mut self, indices: impl IntoIterator<Item = usize>) -> &mut Self {
        for i in indices {
            if let Some(slot) = self.faces.get_mut(i) {
                *slot = None;
            }
        }
        self
    }

    /// Validate the edited table. Unreferenced vertices are dropped and the
    /// survivors keep their relative order.
    pub fn build(self) -> Result<Polyhedron> {
        let faces: Vec<Vec<usize>> = self.faces.into_iter().flatten().collect();
        let (vertices, faces) = compact(self.vertices, faces);
        Polyhedron::new(vertices, faces)
    }
}

/// Drop unreferenced vertices, preserving order, and remap faces.
pub(crate) fn compact(vertices: Vec<Vec3>, faces: Vec<Vec<usize>>) -> (Vec<Vec3>, Vec<Vec<usize>>) {
    let mut used = vec![false; vertices.len()];
    for f in &faces {
        for &v in f {
            if let Some(u) = used.get_mut(v) {
                *u = true;
            }
        }
    }
    let mut remap = vec![usize::MAX; vertices.len()];
    let mut kept = Vec::with_capacity(vertices.len());
    for (i, p) in vertices.into_iter().enumerate() {
        if used[i] {
            remap[i] = kept.len();
            kept.push(p);
        }
    }
    let faces = faces
        .into_iter()
        .map(|f| {
            f.into_iter()
                .map(|v| remap.get(v).copied().unwrap_or(usize::MAX))
                .collect()
        })
        .collect();
    (kept, faces)
}

/// Export contract: enough to rebuild the mesh with [`Polyhedron::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshExport {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
}

impl TryFrom<MeshExport> for Polyhedron {
    type Error = PolyError;

    fn try_from(e: MeshExport) -> Result<Self> {
        Polyhedron::new(
            e.vertices
                .into_iter()
                .map(|[x, y, z]| Vec3::new(x, y, z))
                .collect(),
            e.faces,
        )
    }
}
