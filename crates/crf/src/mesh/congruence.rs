//! Congruence of convex solids up to position, scale and (optionally) reflection.
//!
//! A convex solid is determined by its vertex set, so two meshes are congruent
//! when a similarity carries one vertex set onto the other. Candidate maps send
//! the first directed edge of `a` onto every directed edge of `b` whose tail
//! has the same degree.

use nalgebra::Matrix3;

use crate::cfg::EDGE_EPS;
use crate::geom::{frame, Vec3};

use super::Polyhedron;

/// Centered, unit-edge vertex positions.
fn normalized(mesh: &Polyhedron) -> Vec<Vec3> {
    let c = mesh.centroid();
    let l = mesh.edge_length().max(f64::MIN_POSITIVE);
    mesh.vertices().iter().map(|p| (p - c) / l).collect()
}

fn covers(rotation: &Matrix3<f64>, from: &[Vec3], to: &[Vec3]) -> bool {
    from.iter().all(|p| {
        let q = rotation * p;
        to.iter().any(|r| (q - r).norm() < EDGE_EPS)
    })
}

/// True if `a` and `b` are the same solid. With `allow_reflection`, mirror
/// images count as congruent.
pub fn is_congruent(a: &Polyhedron, b: &Polyhedron, allow_reflection: bool) -> bool {
    if a.num_vertices() != b.num_vertices() || a.face_counts() != b.face_counts() {
        return false;
    }
    let Some(first) = a.faces().first() else {
        return b.num_faces() == 0;
    };
    let (pa, pb) = (normalized(a), normalized(b));
    let (u, v) = (first[0], first[1]);
    let degree = a.vertex(u).degree();
    let fa = frame(&pa[u], &pa[v]);
    let flip = Matrix3::from_diagonal(&Vec3::new(1.0, 1.0, -1.0));
    for x in b.vertex_handles().filter(|x| x.degree() == degree) {
        for y in x.adjacent_vertices() {
            let fb = frame(&pb[x.index()], &pb[y.index()]);
            if (pa[u].norm() - pb[x.index()].norm()).abs() > EDGE_EPS {
                continue;
            }
            let rotation = fb * fa.transpose();
            if covers(&rotation, &pa, &pb) {
                return true;
            }
            if allow_reflection && covers(&(fb * flip * fa.transpose()), &pa, &pb) {
                return true;
            }
        }
    }
    false
}
