//! Uniform prisms and antiprisms.

use serde::{Deserialize, Serialize};

use crate::names::polygon_prefix;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrismType {
    Prism,
    Antiprism,
}

impl PrismType {
    pub fn as_str(self) -> &'static str {
        match self {
            PrismType::Prism => "prism",
            PrismType::Antiprism => "antiprism",
        }
    }
}

/// Bases with a polygon prefix.
pub const PRISMATIC_BASES: [usize; 7] = [2, 3, 4, 5, 6, 8, 10];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prismatic {
    pub base: usize,
    pub kind: PrismType,
}

impl Prismatic {
    /// Every base and type except the digonal prism, which is a flat square.
    pub fn all() -> Vec<Prismatic> {
        let mut out = Vec::new();
        for base in PRISMATIC_BASES {
            for kind in [PrismType::Prism, PrismType::Antiprism] {
                if base == 2 && kind == PrismType::Prism {
                    continue;
                }
                out.push(Prismatic { base, kind });
            }
        }
        out
    }

    pub fn name(&self) -> String {
        format!("{} {}", polygon_prefix(self.base).unwrap_or("?"), self.kind.as_str())
    }

    #[inline]
    pub fn is_prism(&self) -> bool {
        self.kind == PrismType::Prism
    }
    #[inline]
    pub fn is_antiprism(&self) -> bool {
        self.kind == PrismType::Antiprism
    }
    /// Bases 6, 8 and 10 are the rims of cupolae and rotundae.
    #[inline]
    pub fn is_secondary(&self) -> bool {
        self.base > 5
    }
}
