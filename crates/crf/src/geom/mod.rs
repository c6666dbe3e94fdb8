//! 3D geometry helpers: planes, poses, similarity transforms.
//!
//! Purpose
//! - Small vocabulary shared by mesh queries, realization and operations. Points
//!   and directions are both `Vec3` (`nalgebra::Vector3<f64>`); the distinction is
//!   carried by names, not types.
//!
//! Conventions
//! - Face winding is counterclockwise seen from outside, so `(b-a)×(c-b)` over
//!   consecutive face vertices points outward.
//! - Angles are radians; `signed_angle` is counterclockwise about the given axis.
//! - A `Pose` is `(origin, scale, [normal, up])`; only the component of `up`
//!   orthogonal to `normal` matters.
//!
//! References
//! - Related code: `crate::mesh` (face planes), `crate::ops` (pose alignment).

pub mod rand;

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use crate::cfg::ANGLE_EPS;

/// Point or direction in R³.
pub type Vec3 = Vector3<f64>;

/// Circumradius of a regular `n`-gon with unit sides.
#[inline]
pub fn polygon_radius(n: usize) -> f64 {
    1.0 / (2.0 * (std::f64::consts::PI / n as f64).sin())
}

/// Inradius (apothem) of a regular `n`-gon with unit sides.
#[inline]
pub fn polygon_apothem(n: usize) -> f64 {
    polygon_radius(n) * (std::f64::consts::PI / n as f64).cos()
}

/// Arithmetic mean of `points`; the origin for an empty slice.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::zeros();
    }
    points.iter().sum::<Vec3>() / points.len() as f64
}

/// Rotate `p` by `angle` about the line through `origin` with direction `axis`.
pub fn rotate_about(p: &Vec3, origin: &Vec3, axis: &Vec3, angle: f64) -> Vec3 {
    let rot = Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle);
    origin + rot * (p - origin)
}

/// Counterclockwise angle from `a` to `b` about `axis`, in `(-π, π]`.
/// Both vectors are first projected onto the plane orthogonal to `axis`.
pub fn signed_angle(a: &Vec3, b: &Vec3, axis: &Vec3) -> f64 {
    let n = axis.normalize();
    let pa = a - n * n.dot(a);
    let pb = b - n * n.dot(b);
    let y = n.dot(&pa.cross(&pb));
    let x = pa.dot(&pb);
    y.atan2(x)
}

/// True if `a` and `b` point in opposite directions.
#[inline]
pub fn is_inverse(a: &Vec3, b: &Vec3) -> bool {
    a.normalize().dot(&b.normalize()) < -1.0 + ANGLE_EPS
}

/// True if `a` and `b` point in the same direction.
#[inline]
pub fn is_parallel(a: &Vec3, b: &Vec3) -> bool {
    a.normalize().dot(&b.normalize()) > 1.0 - ANGLE_EPS
}

/// Oriented plane `normal · x = offset` with unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f64,
}

impl Plane {
    /// Plane through `point` with the given (not necessarily unit) normal.
    pub fn new(point: &Vec3, normal: &Vec3) -> Self {
        let n = normal.normalize();
        Self {
            normal: n,
            offset: n.dot(point),
        }
    }

    /// Plane through three points, oriented by `(b-a)×(c-b)`; `None` if collinear.
    pub fn through(a: &Vec3, b: &Vec3, c: &Vec3) -> Option<Self> {
        let n = (b - a).cross(&(c - b));
        if n.norm() < 1e-12 {
            return None;
        }
        Some(Self::new(a, &n))
    }

    #[inline]
    pub fn signed_distance(&self, p: &Vec3) -> f64 {
        self.normal.dot(p) - self.offset
    }

    #[inline]
    pub fn project(&self, p: &Vec3) -> Vec3 {
        p - self.normal * self.signed_distance(p)
    }

    /// Intersection with the line `p + t·dir`; `None` if parallel.
    pub fn intersect_line(&self, p: &Vec3, dir: &Vec3) -> Option<Vec3> {
        let denom = self.normal.dot(dir);
        if denom.abs() < 1e-12 {
            return None;
        }
        let t = -self.signed_distance(p) / denom;
        Some(p + dir * t)
    }
}

/// Similarity frame used to align two meshes before interpolating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub origin: Vec3,
    pub scale: f64,
    /// Two independent reference directions `[normal, up]`.
    pub orientation: [Vec3; 2],
}

/// Orthonormal basis (as matrix columns) spanned by `n` and the part of `u`
/// orthogonal to it: `[n̂, û, n̂×û]`.
pub fn frame(n: &Vec3, u: &Vec3) -> Matrix3<f64> {
    let n = n.normalize();
    let u = (u - n * n.dot(u)).normalize();
    Matrix3::from_columns(&[n, u, n.cross(&u)])
}

/// `x ↦ scale · rotation · x + translation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Similarity {
    pub rotation: Matrix3<f64>,
    pub scale: f64,
    pub translation: Vec3,
}

impl Default for Similarity {
    fn default() -> Self {
        Self::identity()
    }
}

impl Similarity {
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            scale: 1.0,
            translation: Vec3::zeros(),
        }
    }

    /// The transform carrying pose `from` onto pose `to`: origins coincide,
    /// lengths scale by `to.scale / from.scale` and the reference frames match.
    pub fn between(from: &Pose, to: &Pose) -> Self {
        let f_from = frame(&from.orientation[0], &from.orientation[1]);
        let f_to = frame(&to.orientation[0], &to.orientation[1]);
        let rotation = f_to * f_from.transpose();
        let scale = to.scale / from.scale;
        let translation = to.origin - rotation * from.origin * scale;
        Self {
            rotation,
            scale,
            translation,
        }
    }

    #[inline]
    pub fn apply(&self, p: &Vec3) -> Vec3 {
        self.rotation * p * self.scale + self.translation
    }

    /// Rotate and scale a direction (no translation).
    #[inline]
    pub fn apply_vector(&self, v: &Vec3) -> Vec3 {
        self.rotation * v * self.scale
    }

    /// True if the linear part reverses orientation.
    pub fn is_reflection(&self) -> bool {
        self.rotation.determinant() < 0.0
    }
}
