//! Sporadic Johnson solids with no generating construction.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementaryKind {
    Sphenocorona,
    AugmentedSphenocorona,
    Sphenomegacorona,
    Hebesphenomegacorona,
    Disphenocingulum,
    Bilunabirotunda,
    TriangularHebesphenorotunda,
}

impl ElementaryKind {
    pub const ALL: [ElementaryKind; 7] = [
        ElementaryKind::Sphenocorona,
        ElementaryKind::AugmentedSphenocorona,
        ElementaryKind::Sphenomegacorona,
        ElementaryKind::Hebesphenomegacorona,
        ElementaryKind::Disphenocingulum,
        ElementaryKind::Bilunabirotunda,
        ElementaryKind::TriangularHebesphenorotunda,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementaryKind::Sphenocorona => "sphenocorona",
            ElementaryKind::AugmentedSphenocorona => "augmented sphenocorona",
            ElementaryKind::Sphenomegacorona => "sphenomegacorona",
            ElementaryKind::Hebesphenomegacorona => "hebesphenomegacorona",
            ElementaryKind::Disphenocingulum => "disphenocingulum",
            ElementaryKind::Bilunabirotunda => "bilunabirotunda",
            ElementaryKind::TriangularHebesphenorotunda => "triangular hebesphenorotunda",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Elementary {
    pub base: ElementaryKind,
}

impl Elementary {
    pub fn all() -> Vec<Elementary> {
        ElementaryKind::ALL.iter().map(|&base| Elementary { base }).collect()
    }

    pub fn name(&self) -> String {
        self.base.as_str().to_string()
    }
}
