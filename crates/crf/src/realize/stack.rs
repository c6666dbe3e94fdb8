//! Prisms, antiprisms and capstones by stacking regular rings along `z`.
//!
//! Rim vertex `k` of an `m`-ring sits at angle `phase + 2πk/m`. Caps reuse
//! the same angular convention: a cupola top vertex `j` sits over the middle
//! of rim edge `(2j + parity, 2j + parity + 1)`.

use std::f64::consts::PI;

use crate::error::Result;
use crate::geom::{polygon_apothem, polygon_radius, Vec3};
use crate::mesh::{CapKind, Face, Polyhedron};
use crate::specs::{CapType, Capstone, Elongation, Gyrate, PrismType, Twist};

const PHI: f64 = 1.618_033_988_749_895;

/// Where a cap goes: `axis` points away from the solid, rim vertex `k` is at
/// angle `2πk/m` in the `(u, w)` plane.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CapFrame {
    pub origin: Vec3,
    pub axis: Vec3,
    pub u: Vec3,
    pub w: Vec3,
}

impl CapFrame {
    /// Frame over a face: `u` toward its first vertex, counterclockwise about
    /// the outward normal.
    pub(crate) fn on_face(face: &Face<'_>) -> Self {
        let origin = face.centroid();
        let axis = face.normal();
        let u = (face.positions()[0] - origin).normalize();
        CapFrame {
            origin,
            axis,
            u,
            w: axis.cross(&u),
        }
    }

    fn ring(z: f64, phase: f64, up: bool) -> Self {
        CapFrame {
            origin: Vec3::new(0.0, 0.0, z),
            axis: Vec3::new(0.0, 0.0, if up { 1.0 } else { -1.0 }),
            u: Vec3::new(phase.cos(), phase.sin(), 0.0),
            w: Vec3::new(-phase.sin(), phase.cos(), 0.0),
        }
    }

    fn at(&self, r: f64, angle: f64, h: f64) -> Vec3 {
        self.origin + self.axis * h + self.u * (r * angle.cos()) + self.w * (r * angle.sin())
    }
}

/// Vertices a cap adds over an `m`-sided rim.
///
/// `parity` (0 or 1) selects which alternate rim edges carry the cupola
/// squares (rotunda pentagons).
pub(crate) fn cap_points(kind: CapKind, m: usize, frame: &CapFrame, parity: u8) -> Vec<Vec3> {
    let t = f64::from(parity);
    let step = 2.0 * PI / m as f64;
    match kind {
        CapKind::Pyramid => {
            let h = (1.0 - polygon_radius(m).powi(2)).max(0.0).sqrt();
            vec![frame.at(0.0, 0.0, h)]
        }
        CapKind::Cupola => {
            let k = m / 2;
            let h = (1.0 - (polygon_apothem(m) - polygon_apothem(k)).powi(2)).sqrt();
            (0..k)
                .map(|j| frame.at(polygon_radius(k), (2.0 * j as f64 + t + 0.5) * step, h))
                .collect()
        }
        CapKind::Rotunda => {
            let r5 = polygon_radius(5);
            let ht = (PHI * PHI - r5 * r5).sqrt();
            let top = (0..5).map(|j| frame.at(r5, (2.0 * j as f64 + t + 0.5) * step, ht));
            let mid = (0..5).map(|j| frame.at(ht, (2.0 * j as f64 + t + 1.5) * step, r5));
            top.chain(mid).collect()
        }
    }
}

fn ring(m: usize, z: f64, phase: f64) -> Vec<Vec3> {
    let r = polygon_radius(m);
    (0..m)
        .map(|k| {
            let a = phase + 2.0 * PI * k as f64 / m as f64;
            Vec3::new(r * a.cos(), r * a.sin(), z)
        })
        .collect()
}

fn antiprism_height(m: usize) -> f64 {
    let sec = 1.0 / (PI / (2.0 * m as f64)).cos();
    (1.0 - sec * sec / 4.0).sqrt()
}

/// `(z, phase)` of the band rings, bottom first.
fn band(m: usize, elongation: Elongation) -> Vec<(f64, f64)> {
    match elongation {
        Elongation::None => vec![(0.0, 0.0)],
        Elongation::Prism => vec![(-0.5, 0.0), (0.5, 0.0)],
        Elongation::Antiprism => {
            let h = antiprism_height(m);
            vec![(-h / 2.0, 0.0), (h / 2.0, PI / m as f64)]
        }
    }
}

fn band_points(m: usize, elongation: Elongation) -> Vec<Vec3> {
    band(m, elongation)
        .into_iter()
        .flat_map(|(z, ph)| ring(m, z, ph))
        .collect()
}

pub(crate) fn prismatic(base: usize, kind: PrismType) -> Result<Polyhedron> {
    let elongation = match kind {
        PrismType::Prism => Elongation::Prism,
        PrismType::Antiprism => Elongation::Antiprism,
    };
    super::crf_hull(&band_points(base, elongation))
}

fn cap_kind(t: CapType) -> CapKind {
    match t {
        CapType::Pyramid => CapKind::Pyramid,
        CapType::Rotunda => CapKind::Rotunda,
        CapType::Cupola | CapType::CupolaRotunda => CapKind::Cupola,
    }
}

/// Bottom cap first. Ortho caps share parity across the band; gyro caps and
/// right-twisted antiprism bands flip it.
pub(crate) fn capstone(c: &Capstone) -> Result<Polyhedron> {
    let m = c.ring_size();
    let rings = band(m, c.elongation);
    let mut pts = band_points(m, c.elongation);
    let (zb, pb) = rings[0];
    let (zt, pt) = rings[rings.len() - 1];
    match c.count {
        0 => {}
        1 => pts.extend(cap_points(cap_kind(c.kind), m, &CapFrame::ring(zt, pt, true), 0)),
        _ => {
            let (bottom, top) = match c.kind {
                CapType::CupolaRotunda => (CapKind::Cupola, CapKind::Rotunda),
                k => (cap_kind(k), cap_kind(k)),
            };
            let top_parity = match (c.elongation, c.gyrate, c.twist) {
                (Elongation::Antiprism, _, Some(Twist::Right)) => 1,
                (Elongation::Antiprism, _, _) => 0,
                (_, Some(Gyrate::Gyro), _) => 1,
                _ => 0,
            };
            pts.extend(cap_points(bottom, m, &CapFrame::ring(zb, pb, false), 0));
            pts.extend(cap_points(top, m, &CapFrame::ring(zt, pt, true), top_parity));
        }
    }
    super::crf_hull(&pts)
}
