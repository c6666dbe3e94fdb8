//! Name-level facts about a solid that need no geometry.
//!
//! Purpose
//! - Classification (Platonic / Archimedean / prism / antiprism / Johnson),
//!   Conway symbol, alternate names and the symmetry of the representative
//!   specification.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::names::{alternate_names, to_conway_notation};
use crate::specs::{registry, ClassicalOp, Elongation, PrismType, Specification};
use crate::symmetry::{symmetry, Symmetry};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolidType {
    Platonic,
    Archimedean,
    Prism,
    Antiprism,
    Johnson,
}

impl SolidType {
    pub fn as_str(self) -> &'static str {
        match self {
            SolidType::Platonic => "Platonic solid",
            SolidType::Archimedean => "Archimedean solid",
            SolidType::Prism => "Prism",
            SolidType::Antiprism => "Antiprism",
            SolidType::Johnson => "Johnson solid",
        }
    }
}

/// Facts about a canonical solid name.
#[derive(Clone, Debug)]
pub struct SolidInfo {
    name: String,
    spec: Specification,
}

const HONEYCOMBS: [&str; 5] = [
    "cube",
    "truncated octahedron",
    "triangular prism",
    "hexagonal prism",
    "gyrobifastigium",
];

impl SolidInfo {
    /// Errors: `InvalidName` if the name (canonical, alternate, escaped or
    /// Conway symbol) is unknown.
    pub fn new(name: &str) -> Result<Self> {
        let spec = registry().resolve(name)?;
        Ok(SolidInfo { name: spec.name(), spec })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specification(&self) -> &Specification {
        &self.spec
    }

    pub fn alternate_names(&self) -> &'static [&'static str] {
        alternate_names(&self.name)
    }

    pub fn conway_symbol(&self) -> Option<String> {
        to_conway_notation(&self.name)
    }

    pub fn symmetry(&self) -> Result<Symmetry> {
        symmetry(&self.spec)
    }

    pub fn order(&self) -> Result<usize> {
        Ok(self.symmetry()?.order())
    }

    fn classical_ops(&self) -> impl Iterator<Item = ClassicalOp> + '_ {
        registry()
            .classical
            .get_all_with_name(&self.name)
            .into_iter()
            .map(|c| c.operation)
    }

    fn prism_types(&self) -> impl Iterator<Item = PrismType> + '_ {
        registry()
            .prismatic
            .get_all_with_name(&self.name)
            .into_iter()
            .map(|p| p.kind)
    }

    pub fn solid_type(&self) -> SolidType {
        if self.is_regular() {
            SolidType::Platonic
        } else if self.classical_ops().next().is_some() {
            SolidType::Archimedean
        } else if self.prism_types().any(|t| t == PrismType::Prism) {
            SolidType::Prism
        } else if self.prism_types().next().is_some() {
            SolidType::Antiprism
        } else {
            SolidType::Johnson
        }
    }

    pub fn is_regular(&self) -> bool {
        self.classical_ops().any(|op| op == ClassicalOp::Regular)
    }

    /// Two kinds of regular faces alternating around every vertex.
    pub fn is_quasi_regular(&self) -> bool {
        self.classical_ops().any(|op| op == ClassicalOp::Rectify)
    }

    pub fn is_uniform(&self) -> bool {
        self.classical_ops().next().is_some() || self.prism_types().next().is_some()
    }

    pub fn is_chiral(&self) -> bool {
        let r = registry();
        r.classical
            .get_all_with_name(&self.name)
            .iter()
            .any(|c| c.is_snub() && !c.is_tetrahedral())
            || r.capstone.get_all_with_name(&self.name).iter().any(|c| {
                c.elongation == Elongation::Antiprism && c.count == 2 && !c.is_pyramid()
            })
    }

    /// Tiles space by translation and rotation copies.
    pub fn is_honeycomb(&self) -> bool {
        HONEYCOMBS.contains(&self.name.as_str())
    }
}

#[cfg(test)]
mod tests;
