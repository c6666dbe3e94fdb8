//! Wythoff construction of the Platonic and Archimedean solids.
//!
//! The fundamental triangle has corners on the face center `F`, vertex `V`
//! and edge midpoint `E` directions of the family's regular solid. A seed
//! point is placed by its distances to the three mirrors; its orbit under the
//! reflection group is the vertex set. Snubs use the rotation subgroup with
//! the seed chosen so that the three rotation-neighbor distances agree.

use std::collections::HashSet;

use nalgebra::{Matrix3, Vector2};

use crate::cfg::{ANGLE_EPS, NEWTON_ITERS};
use crate::error::{PolyError, Result};
use crate::geom::Vec3;
use crate::mesh::Polyhedron;
use crate::specs::{Classical, ClassicalOp, Facet, Family, Twist};

const PHI: f64 = 1.618_033_988_749_895;

/// Mirror distances (to mirrors `EF`, `FV`, `VE`) of the seed point.
fn seed(c: &Classical) -> Vec3 {
    let vertex = c.facet == Some(Facet::Vertex);
    match (c.operation, vertex) {
        (ClassicalOp::Regular, false) => Vec3::new(1.0, 0.0, 0.0),
        (ClassicalOp::Regular, true) => Vec3::new(0.0, 0.0, 1.0),
        (ClassicalOp::Truncate, false) => Vec3::new(1.0, 1.0, 0.0),
        (ClassicalOp::Truncate, true) => Vec3::new(0.0, 1.0, 1.0),
        (ClassicalOp::Rectify, _) => Vec3::new(0.0, 1.0, 0.0),
        (ClassicalOp::Cantellate, _) => Vec3::new(1.0, 0.0, 1.0),
        (ClassicalOp::Bevel, _) | (ClassicalOp::Snub, _) => Vec3::new(1.0, 1.0, 1.0),
    }
}

/// `(F, V, E)` unit directions.
fn triangle(family: Family) -> [Vec3; 3] {
    let [f, v, e] = match family {
        Family::Tetrahedral => [
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ],
        Family::Octahedral => [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ],
        Family::Icosahedral => {
            let a = Vec3::new(0.0, 1.0, PHI);
            let b = Vec3::new(0.0, -1.0, PHI);
            let c = Vec3::new(PHI, 0.0, 1.0);
            [a, a + b + c, a + c]
        }
    };
    [f.normalize(), v.normalize(), e.normalize()]
}

/// Unit mirror normals as matrix rows, each pointing into the triangle.
fn mirrors(family: Family) -> Matrix3<f64> {
    let [f, v, e] = triangle(family);
    let inward = |n: Vec3, toward: &Vec3| {
        let n = n.normalize();
        if n.dot(toward) > 0.0 {
            n
        } else {
            -n
        }
    };
    let m_ef = inward(e.cross(&f), &v);
    let m_fv = inward(f.cross(&v), &e);
    let m_ve = inward(v.cross(&e), &f);
    Matrix3::from_rows(&[m_ef.transpose(), m_fv.transpose(), m_ve.transpose()])
}

fn reflection(m: &Vec3) -> Matrix3<f64> {
    Matrix3::identity() - 2.0 * m * m.transpose()
}

fn key(m: &Matrix3<f64>) -> [i64; 9] {
    let mut k = [0i64; 9];
    for (slot, x) in k.iter_mut().zip(m.iter()) {
        *slot = (x * 1e6).round() as i64;
    }
    k
}

/// Closure of the generators under multiplication.
fn group(generators: &[Matrix3<f64>]) -> Vec<Matrix3<f64>> {
    let mut seen: HashSet<[i64; 9]> = HashSet::new();
    let id = Matrix3::identity();
    seen.insert(key(&id));
    let mut out = vec![id];
    let mut frontier = vec![id];
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for a in &frontier {
            for g in generators {
                let b = g * a;
                if seen.insert(key(&b)) {
                    out.push(b);
                    next.push(b);
                }
            }
        }
        frontier = next;
    }
    out
}

fn orbit(p: &Vec3, group: &[Matrix3<f64>]) -> Vec<Vec3> {
    let mut out: Vec<Vec3> = Vec::new();
    for g in group {
        let q = g * p;
        if out.iter().all(|r| (q - r).norm() > 1e-6) {
            out.push(q);
        }
    }
    out
}

/// Seed on the sphere whose distances to its images under the three
/// generating rotations agree. Newton on two tangent coordinates with a
/// forward-difference Jacobian.
fn snub_seed(ms: &Matrix3<f64>, rotations: &[Matrix3<f64>; 3]) -> Result<Vec3> {
    let p = ms
        .try_inverse()
        .map(|inv| (inv * Vec3::new(1.0, 1.0, 1.0)).normalize())
        .ok_or_else(|| PolyError::mesh("degenerate mirror triangle"))?;
    let t1 = p.cross(&Vec3::new(0.3, 0.7, 0.1)).normalize();
    let t2 = p.cross(&t1);
    let point = |x: &Vector2<f64>| (p + t1 * x.x + t2 * x.y).normalize();
    let residual = |x: &Vector2<f64>| {
        let q = point(x);
        let [df, dv, de] = rotations.map(|r| (q - r * q).norm());
        Vector2::new(df - de, dv - de)
    };
    let h = 1e-7;
    let mut x = Vector2::zeros();
    for _ in 0..NEWTON_ITERS {
        let f = residual(&x);
        let fu = (residual(&(x + Vector2::new(h, 0.0))) - f) / h;
        let fv = (residual(&(x + Vector2::new(0.0, h))) - f) / h;
        let jac = nalgebra::Matrix2::from_columns(&[fu, fv]);
        let Some(step) = jac.try_inverse().map(|inv| inv * f) else {
            break;
        };
        x -= step;
        if step.abs().sum() < 1e-15 {
            break;
        }
    }
    let f = residual(&x);
    if f.abs().max() > ANGLE_EPS {
        return Err(PolyError::mesh(format!("snub seed did not converge ({f:?})")));
    }
    Ok(point(&x))
}

/// Vertex set of a classical solid (unnormalized, on the unit sphere).
pub(crate) fn points(c: &Classical) -> Result<Vec<Vec3>> {
    let ms = mirrors(c.family);
    let normals: Vec<Vec3> = ms.row_iter().map(|r| r.transpose()).collect();
    let reflections: Vec<Matrix3<f64>> = normals.iter().map(reflection).collect();
    let full = group(&reflections);
    if c.operation == ClassicalOp::Snub {
        let rotations: Vec<Matrix3<f64>> =
            full.into_iter().filter(|g| g.determinant() > 0.0).collect();
        let gens = [
            reflections[0] * reflections[1],
            reflections[1] * reflections[2],
            reflections[2] * reflections[0],
        ];
        let p = snub_seed(&ms, &gens)?;
        return Ok(orbit(&p, &rotations));
    }
    let p = ms
        .try_inverse()
        .map(|inv| (inv * seed(c)).normalize())
        .ok_or_else(|| PolyError::mesh("degenerate mirror triangle"))?;
    Ok(orbit(&p, &full))
}

/// Unit-edge mesh of a classical solid. The left snub is the mirror image of
/// the right one; the tetrahedral snub is the achiral icosahedron.
pub(crate) fn classical(c: &Classical) -> Result<Polyhedron> {
    let mesh = super::crf_hull(&points(c)?)?;
    Ok(match c.twist {
        Some(Twist::Left) => mesh.mirror(),
        _ => mesh,
    })
}
