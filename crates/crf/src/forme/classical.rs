//! Platonic and Archimedean solids: facet faces and the faces an expansion
//! pushes outward.

use std::sync::OnceLock;

use crate::cfg::ANGLE_EPS;
use crate::error::{PolyError, Result};
use crate::geom::Vec3;
use crate::mesh::{caps, is_congruent, Cap, Polyhedron};
use crate::realize::realize;
use crate::specs::{Classical, ClassicalOp, Facet, Twist};

#[derive(Debug)]
pub struct ClassicalForme {
    spec: Classical,
    mesh: Polyhedron,
    caps: OnceLock<Vec<Cap>>,
}

impl ClassicalForme {
    pub fn new(spec: Classical, mesh: Polyhedron) -> Self {
        Self {
            spec,
            mesh,
            caps: OnceLock::new(),
        }
    }

    pub fn spec(&self) -> Classical {
        self.spec
    }

    pub fn mesh(&self) -> &Polyhedron {
        &self.mesh
    }

    pub fn caps(&self) -> &[Cap] {
        self.caps.get_or_init(|| caps(&self.mesh))
    }

    /// Sides of the faces standing for `facet` on this solid. Face-first is
    /// the family polygon, vertex-first the triangle; truncation and
    /// bevelling double them.
    pub fn facet_sides(&self, facet: Facet) -> usize {
        let base = match facet {
            Facet::Face => self.spec.family.n(),
            Facet::Vertex => 3,
        };
        match self.spec.operation {
            ClassicalOp::Truncate | ClassicalOp::Bevel => 2 * base,
            _ => base,
        }
    }

    /// Faces standing for `facet`. For cantellated and snub solids these are
    /// the expanded faces only.
    pub fn facet_faces(&self, facet: Facet) -> Result<Vec<usize>> {
        let sides = self.facet_sides(facet);
        match self.spec.operation {
            ClassicalOp::Cantellate | ClassicalOp::Snub => self.expanded_faces(sides),
            _ => Ok(self.mesh.faces_with_num_sides(sides).map(|f| f.index()).collect()),
        }
    }

    /// First facet face.
    ///
    /// Errors: `MeshInvariantViolation` if the mesh has none.
    pub fn facet_face(&self, facet: Facet) -> Result<usize> {
        self.facet_faces(facet)?
            .first()
            .copied()
            .ok_or_else(|| PolyError::mesh(format!("{} has no {facet:?} face", self.spec.name())))
    }

    pub fn is_facet_face(&self, face: usize, facet: Facet) -> bool {
        self.facet_faces(facet).is_ok_and(|fs| fs.contains(&face))
    }

    /// Normal of the first facet face.
    pub fn main_axis(&self, facet: Facet) -> Result<Vec3> {
        Ok(self.mesh.face(self.facet_face(facet)?).normal())
    }

    /// Truncated solids: the faces inherited from the regular solid.
    pub fn big_faces(&self) -> Vec<usize> {
        if !self.spec.is_truncated() {
            return Vec::new();
        }
        let sides = 2 * self.spec.facet_sides();
        self.mesh.faces_with_num_sides(sides).map(|f| f.index()).collect()
    }

    /// Truncated solids: the faces cut at the old vertices.
    pub fn small_faces(&self) -> Vec<usize> {
        let big = self.big_faces();
        if big.is_empty() {
            return big;
        }
        self.mesh
            .face_handles()
            .filter(|f| !big.contains(&f.index()))
            .map(|f| f.index())
            .collect()
    }

    /// Faces of a cantellated or snub solid that lie in the face planes of
    /// the expanded regular solid with `sides`-gon faces.
    ///
    /// Errors: `SpecificationDomain` for other operations or face types;
    /// `MeshInvariantViolation` if no consistent set exists.
    pub fn expanded_faces(&self, sides: usize) -> Result<Vec<usize>> {
        let ring = match self.spec.operation {
            ClassicalOp::Cantellate => 4,
            ClassicalOp::Snub => 3,
            _ => {
                return Err(PolyError::domain(format!("{} is not expanded", self.spec.name())));
            }
        };
        let n = self.spec.family.n();
        let facet = if sides == n {
            Facet::Face
        } else if sides == 3 {
            Facet::Vertex
        } else {
            return Err(PolyError::domain(format!("{} has no expanded {sides}-gons", self.spec.name())));
        };
        let regular = realize(&self.spec.with_operation(ClassicalOp::Regular, Some(facet), None).into())?;
        let expected = regular.num_faces();
        let candidates: Vec<usize> = self
            .mesh
            .faces_with_num_sides(sides)
            .filter(|f| f.adjacent_faces().iter().all(|g| g.num_sides() == ring))
            .map(|f| f.index())
            .collect();
        if candidates.len() == expected {
            return Ok(candidates);
        }

        // tetrahedral: two interleaved sets, keep the one around the first face
        let n0 = regular.face(0).normal();
        let dots: Vec<f64> = regular
            .face_handles()
            .skip(1)
            .map(|f| n0.dot(&f.normal()))
            .collect();
        let allowed = |a: &Vec3, b: &Vec3| dots.iter().any(|d| (a.dot(b) - d).abs() < ANGLE_EPS);
        let normals: Vec<Vec3> = candidates.iter().map(|&f| self.mesh.face(f).normal()).collect();
        let mut picked: Vec<usize> = Vec::new();
        for (k, nk) in normals.iter().enumerate() {
            if picked.iter().all(|&j| allowed(&normals[j], nk)) {
                picked.push(k);
            }
        }
        if picked.len() != expected {
            return Err(PolyError::mesh(format!(
                "{}: found {} of {expected} expanded {sides}-gons",
                self.spec.name(),
                picked.len()
            )));
        }
        Ok(picked.into_iter().map(|k| candidates[k]).collect())
    }

    /// Handedness of a snub mesh, by congruence with the right-handed reference.
    pub fn twist(&self) -> Option<Twist> {
        self.spec.twist?;
        let right = realize(&self.spec.with_operation(ClassicalOp::Snub, None, Some(Twist::Right)).into()).ok()?;
        Some(if is_congruent(&self.mesh, &right, false) {
            Twist::Right
        } else {
            Twist::Left
        })
    }
}
