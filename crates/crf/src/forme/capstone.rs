//! Prisms, antiprisms, their snubs and capstones: the two ends bounding the band.
//!
//! Digonal solids have no end faces; their ends are opposite edges.

use std::sync::OnceLock;

use crate::error::{PolyError, Result};
use crate::geom::{is_inverse, Vec3};
use crate::mesh::{caps, Cap, CapKind, Polyhedron};
use crate::specs::{CapType, Elongation, ModifiedOp, PrismType, Specification};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CapstoneKind {
    /// No caps: both ends are faces.
    Prismatic,
    /// One cap; the other end is a face.
    Mono,
    Bi,
    /// Snub antiprism: no caps, two antiprism bands between the end faces.
    Snub,
}

/// One end of the band: a face, an edge, or the rim of a cap.
#[derive(Clone, Debug, PartialEq)]
pub struct End {
    /// Rim vertices, counterclockwise about `normal`.
    pub ring: Vec<usize>,
    /// Outward unit normal.
    pub normal: Vec3,
    pub centroid: Vec3,
    pub face: Option<usize>,
    pub cap: Option<Cap>,
}

impl End {
    fn from_face(mesh: &Polyhedron, index: usize) -> End {
        let f = mesh.face(index);
        End {
            ring: f.vertex_indices().to_vec(),
            normal: f.normal(),
            centroid: f.centroid(),
            face: Some(index),
            cap: None,
        }
    }

    /// Digonal end; the normal points from the solid's center through the edge.
    fn from_edge(mesh: &Polyhedron, a: usize, b: usize) -> End {
        let mid = (mesh.vertices()[a] + mesh.vertices()[b]) / 2.0;
        End {
            ring: vec![a, b],
            normal: (mid - mesh.centroid()).normalize(),
            centroid: mid,
            face: None,
            cap: None,
        }
    }

    fn from_cap(mesh: &Polyhedron, cap: Cap) -> End {
        End {
            ring: cap.boundary.clone(),
            normal: cap.normal(mesh),
            centroid: cap.boundary_centroid(mesh),
            face: None,
            cap: Some(cap),
        }
    }

    /// True if `face` is this end's face or one of its cap faces.
    pub fn contains_face(&self, face: usize) -> bool {
        self.face == Some(face) || self.cap.as_ref().is_some_and(|c| c.contains_face(face))
    }

    /// Rim vertex whose following rim edge borders a cap triangle; the first
    /// rim vertex for face ends.
    pub fn anchor(&self, mesh: &Polyhedron) -> usize {
        let Some(cap) = &self.cap else {
            return self.ring[0];
        };
        let n = self.ring.len();
        (0..n)
            .find(|&k| {
                let (a, b) = (self.ring[k], self.ring[(k + 1) % n]);
                cap.faces.iter().any(|&fi| {
                    let f = mesh.face(fi);
                    f.num_sides() == 3 && f.vertex_indices().contains(&a) && f.vertex_indices().contains(&b)
                })
            })
            .map_or(self.ring[0], |k| self.ring[k])
    }
}

/// The two opposite ends; `top` is the preferred pose landmark.
#[derive(Clone, Debug, PartialEq)]
pub struct Ends {
    pub top: End,
    pub bottom: End,
}

#[derive(Debug)]
pub struct CapstoneForme {
    spec: Specification,
    mesh: Polyhedron,
    kind: CapstoneKind,
    ring: usize,
    elongation: Elongation,
    /// Top then bottom cap kinds (empty for prismatic).
    cap_kinds: Vec<CapKind>,
    ends: OnceLock<Result<Ends>>,
}

fn cap_kind(t: CapType) -> CapKind {
    match t {
        CapType::Pyramid => CapKind::Pyramid,
        CapType::Rotunda => CapKind::Rotunda,
        CapType::Cupola | CapType::CupolaRotunda => CapKind::Cupola,
    }
}

impl CapstoneForme {
    /// `None` unless `spec` is prismatic, a capstone or a modified antiprism.
    pub fn new(spec: Specification, mesh: Polyhedron) -> Option<Self> {
        let (kind, ring, elongation, cap_kinds) = match spec {
            Specification::Prismatic(p) => {
                let e = match p.kind {
                    PrismType::Prism => Elongation::Prism,
                    PrismType::Antiprism => Elongation::Antiprism,
                };
                (CapstoneKind::Prismatic, p.base, e, Vec::new())
            }
            Specification::Capstone(c) => {
                let kinds = match (c.count, c.kind) {
                    (0, _) => Vec::new(),
                    (1, k) => vec![cap_kind(k)],
                    (_, CapType::CupolaRotunda) => vec![CapKind::Rotunda, CapKind::Cupola],
                    (_, k) => vec![cap_kind(k), cap_kind(k)],
                };
                let kind = match c.count {
                    0 => CapstoneKind::Prismatic,
                    1 => CapstoneKind::Mono,
                    _ => CapstoneKind::Bi,
                };
                (kind, c.ring_size(), c.elongation, kinds)
            }
            Specification::ModifiedAntiprism(m) => {
                let kind = match m.operation {
                    ModifiedOp::None => CapstoneKind::Prismatic,
                    ModifiedOp::Snub => CapstoneKind::Snub,
                };
                (kind, m.base(), Elongation::Antiprism, Vec::new())
            }
            _ => return None,
        };
        Some(Self {
            spec,
            mesh,
            kind,
            ring,
            elongation,
            cap_kinds,
            ends: OnceLock::new(),
        })
    }

    pub fn spec(&self) -> Specification {
        self.spec
    }

    pub fn mesh(&self) -> &Polyhedron {
        &self.mesh
    }

    pub fn kind(&self) -> CapstoneKind {
        self.kind
    }

    /// Sides of the band polygon.
    pub fn ring_size(&self) -> usize {
        self.ring
    }

    pub fn elongation(&self) -> Elongation {
        self.elongation
    }

    fn face_ends(&self) -> Vec<End> {
        if self.ring == 2 {
            return self.edge_ends();
        }
        self.mesh
            .faces_with_num_sides(self.ring)
            .map(|f| End::from_face(&self.mesh, f.index()))
            .collect()
    }

    /// Every edge of a digonal antiprism; only the edges joining two
    /// degree-four vertices of a digonal snub.
    fn edge_ends(&self) -> Vec<End> {
        let degree = |v: usize| self.mesh.vertex(v).degree();
        self.mesh
            .edges()
            .iter()
            .map(|e| e.value())
            .filter(|&(a, b)| self.kind != CapstoneKind::Snub || (degree(a) == 4 && degree(b) == 4))
            .map(|(a, b)| End::from_edge(&self.mesh, a, b))
            .collect()
    }

    fn cap_ends(&self, all: &[Cap], kind: CapKind) -> Vec<End> {
        all.iter()
            .filter(|c| c.kind == kind && c.boundary.len() == self.ring)
            .map(|c| End::from_cap(&self.mesh, c.clone()))
            .collect()
    }

    fn find_ends(&self) -> Result<Ends> {
        let found = if self.cap_kinds.is_empty() { Vec::new() } else { caps(&self.mesh) };
        let (tops, bottoms) = match self.kind {
            CapstoneKind::Prismatic | CapstoneKind::Snub => (self.face_ends(), self.face_ends()),
            CapstoneKind::Mono => (self.cap_ends(&found, self.cap_kinds[0]), self.face_ends()),
            CapstoneKind::Bi => (
                self.cap_ends(&found, self.cap_kinds[0]),
                self.cap_ends(&found, self.cap_kinds[1]),
            ),
        };
        for top in &tops {
            for bottom in &bottoms {
                if top != bottom && is_inverse(&top.normal, &bottom.normal) {
                    return Ok(Ends {
                        top: top.clone(),
                        bottom: bottom.clone(),
                    });
                }
            }
        }
        Err(PolyError::mesh(format!("no opposite ends on {}", self.spec)))
    }

    /// Top and bottom ends, mutually opposite.
    ///
    /// Errors: `MeshInvariantViolation` if no opposite pair exists.
    pub fn ends(&self) -> Result<&Ends> {
        self.ends
            .get_or_init(|| self.find_ends())
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn end_boundaries(&self) -> Result<[Vec<Vec3>; 2]> {
        let ends = self.ends()?;
        let pos = |e: &End| e.ring.iter().map(|&v| self.mesh.vertices()[v]).collect();
        Ok([pos(&ends.top), pos(&ends.bottom)])
    }

    /// Distance between the two end planes.
    pub fn prismatic_height(&self) -> Result<f64> {
        let ends = self.ends()?;
        Ok((ends.top.centroid - ends.bottom.centroid).dot(&ends.top.normal).abs())
    }

    /// Unit axis from bottom to top.
    pub fn axis(&self) -> Result<Vec3> {
        Ok(self.ends()?.top.normal)
    }

    /// `Some(0)` for the top end, `Some(1)` for the bottom end, `None` for band faces.
    pub fn containing_end(&self, face: usize) -> Option<usize> {
        let ends = self.ends().ok()?;
        if ends.top.contains_face(face) {
            Some(0)
        } else if ends.bottom.contains_face(face) {
            Some(1)
        } else {
            None
        }
    }

    pub fn is_top(&self, face: usize) -> bool {
        self.containing_end(face) == Some(0)
    }

    pub fn is_side_face(&self, face: usize) -> bool {
        self.ends().is_ok() && self.containing_end(face).is_none()
    }

    /// End face, or cap top face, with `sides` sides.
    pub fn is_facet_face(&self, face: usize, sides: usize) -> bool {
        let Ok(ends) = self.ends() else { return false };
        let f = self.mesh.face(face);
        if f.num_sides() != sides {
            return false;
        }
        [&ends.top, &ends.bottom].into_iter().any(|e| {
            e.face == Some(face)
                || e.cap.as_ref().is_some_and(|c| {
                    c.contains_face(face) && f.vertex_indices().iter().all(|v| c.top.contains(v))
                })
        })
    }

    /// Caps at the ends, top first.
    pub fn end_caps(&self) -> Vec<Cap> {
        let Ok(ends) = self.ends() else { return Vec::new() };
        [&ends.top, &ends.bottom]
            .into_iter()
            .filter_map(|e| e.cap.clone())
            .collect()
    }

    /// Vertices on the top side of the band center, then the rest.
    pub fn halves(&self) -> Result<[Vec<usize>; 2]> {
        let ends = self.ends()?;
        let mid = (ends.top.centroid + ends.bottom.centroid) / 2.0;
        let n = ends.top.normal;
        let (top, bottom): (Vec<usize>, Vec<usize>) = (0..self.mesh.num_vertices())
            .partition(|&v| n.dot(&(self.mesh.vertices()[v] - mid)) > 0.0);
        Ok([top, bottom])
    }
}
