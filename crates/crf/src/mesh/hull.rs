//! Convex hull of a point cloud whose hull has equal edges.
//!
//! Model
//! - Every CRF solid has all edges of one length `d`, the minimum pairwise
//!   distance. Candidate edges are the pairs at distance `d`; for each directed
//!   candidate `(i, j)` the face is the supporting plane through `i`, `j` and a
//!   candidate neighbor `k` of `j`. Candidates without a supporting plane are
//!   interior chords and are skipped.
//! - Face vertices are all points on the plane, sorted counterclockwise about
//!   the outward normal.
//!
//! Complexity: O(n · deg² · n); fine for the ≤120-vertex solids handled here.

use std::collections::HashSet;

use tracing::warn;

use crate::cfg::{EDGE_EPS, PLANE_EPS};
use crate::error::{PolyError, Result};
use crate::geom::{centroid, Vec3};

use super::Polyhedron;

/// Tolerances for [`Polyhedron::from_points_hull_with`], relative to the edge length.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Relative slack when matching candidate edges to the minimum distance.
    pub edge_tol: f64,
    /// Relative slack for "on the plane" and "behind the plane".
    pub plane_tol: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            edge_tol: EDGE_EPS,
            plane_tol: PLANE_EPS,
        }
    }
}

impl Polyhedron {
    /// Hull with default tolerances. Vertex order follows `points`.
    pub fn from_points_hull(points: &[Vec3]) -> Result<Polyhedron> {
        Self::from_points_hull_with(points, &HullCfg::default())
    }

    pub fn from_points_hull_with(points: &[Vec3], cfg: &HullCfg) -> Result<Polyhedron> {
        let n = points.len();
        if n < 4 {
            return Err(PolyError::mesh(format!("hull needs 4 points, got {n}")));
        }
        let mut dmin = f64::INFINITY;
        for i in 0..n {
            for j in (i + 1)..n {
                dmin = dmin.min((points[i] - points[j]).norm());
            }
        }
        if dmin <= 1e-12 {
            return Err(PolyError::mesh("hull input has coincident points"));
        }
        let edge_tol = cfg.edge_tol * dmin;
        let plane_tol = cfg.plane_tol * dmin;
        let nbrs: Vec<Vec<usize>> = (0..n)
            .map(|i| {
                (0..n)
                    .filter(|&j| j != i && ((points[i] - points[j]).norm() - dmin).abs() < edge_tol)
                    .collect()
            })
            .collect();

        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut faces: Vec<Vec<usize>> = Vec::new();
        for i in 0..n {
            for &j in &nbrs[i] {
                if seen.contains(&(i, j)) {
                    continue;
                }
                let Some((normal, offset)) = supporting_plane(points, &nbrs[j], i, j, plane_tol)
                else {
                    continue;
                };
                let face = plane_face(points, &normal, offset, i, plane_tol);
                for k in 0..face.len() {
                    seen.insert((face[k], face[(k + 1) % face.len()]));
                }
                faces.push(face);
            }
        }
        Polyhedron::new(points.to_vec(), faces).map_err(|e| {
            warn!(points = n, error = %e, "hull reconstruction failed");
            e
        })
    }
}

fn supporting_plane(
    points: &[Vec3],
    candidates: &[usize],
    i: usize,
    j: usize,
    tol: f64,
) -> Option<(Vec3, f64)> {
    for &k in candidates {
        if k == i {
            continue;
        }
        let nrm = (points[j] - points[i]).cross(&(points[k] - points[j]));
        if nrm.norm() < 1e-9 {
            continue;
        }
        let nrm = nrm.normalize();
        let d = nrm.dot(&points[i]);
        if points.iter().all(|p| nrm.dot(p) <= d + tol) {
            return Some((nrm, d));
        }
    }
    None
}

/// Points on the plane, counterclockwise about `normal`, rotated to start at `start`.
fn plane_face(points: &[Vec3], normal: &Vec3, offset: f64, start: usize, tol: f64) -> Vec<usize> {
    let mut on: Vec<usize> = (0..points.len())
        .filter(|&m| (normal.dot(&points[m]) - offset).abs() < tol)
        .collect();
    let c = centroid(&on.iter().map(|&m| points[m]).collect::<Vec<_>>());
    let r1 = (points[on[0]] - c).normalize();
    let r2 = normal.cross(&r1);
    let angle = |m: usize| {
        let d = points[m] - c;
        d.dot(&r2).atan2(d.dot(&r1))
    };
    on.sort_by(|&a, &b| angle(a).total_cmp(&angle(b)));
    let s = on.iter().position(|&m| m == start).unwrap_or(0);
    on.rotate_left(s);
    on
}
