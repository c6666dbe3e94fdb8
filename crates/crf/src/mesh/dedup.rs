//! Merge near-coincident vertices.

use tracing::trace;

use crate::cfg::DEDUP_EPS;
use crate::error::Result;

use super::types::compact;
use super::Polyhedron;

impl Polyhedron {
    /// Merge vertices closer than `DEDUP_EPS` (relative to the mesh radius).
    ///
    /// Each vertex maps to the first earlier vertex within tolerance. Faces are
    /// remapped, consecutive repeats are collapsed, faces left with fewer than
    /// three distinct vertices are dropped, then unreferenced vertices are
    /// removed with the survivors kept in order. Idempotent.
    pub fn dedup(&self) -> Result<Polyhedron> {
        let tol = DEDUP_EPS * self.radius().max(1e-12);
        let n = self.vertices.len();
        let mut rep: Vec<usize> = (0..n).collect();
        for i in 0..n {
            for j in 0..i {
                if rep[j] == j && (self.vertices[i] - self.vertices[j]).norm() < tol {
                    rep[i] = j;
                    break;
                }
            }
        }
        let merged = rep.iter().enumerate().filter(|(i, r)| *i != **r).count();
        let mut faces = Vec::with_capacity(self.faces.len());
        for f in &self.faces {
            let mut g: Vec<usize> = Vec::with_capacity(f.len());
            for &v in f {
                let r = rep[v];
                if g.last() != Some(&r) {
                    g.push(r);
                }
            }
            while g.len() > 1 && g.first() == g.last() {
                g.pop();
            }
            let mut distinct = g.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() >= 3 {
                faces.push(g);
            }
        }
        trace!(merged, faces_before = self.faces.len(), faces_after = faces.len(), "dedup");
        let (vertices, faces) = compact(self.vertices.clone(), faces);
        Polyhedron::new(vertices, faces)
    }
}
