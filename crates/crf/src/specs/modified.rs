//! Antiprisms and their snubs (snub disphenoid, snub square antiprism).

use serde::{Deserialize, Serialize};

use super::{PrismType, Prismatic};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModifiedOp {
    None,
    Snub,
}

/// Source is always an antiprism of base 2..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifiedAntiprism {
    pub source: Prismatic,
    pub operation: ModifiedOp,
}

impl ModifiedAntiprism {
    /// The snub pentagonal antiprism is not convex and is left out.
    pub fn all() -> Vec<ModifiedAntiprism> {
        let mut out = Vec::new();
        for base in 2..=5 {
            let source = Prismatic {
                base,
                kind: PrismType::Antiprism,
            };
            for operation in [ModifiedOp::None, ModifiedOp::Snub] {
                if base == 5 && operation == ModifiedOp::Snub {
                    continue;
                }
                out.push(ModifiedAntiprism { source, operation });
            }
        }
        out
    }

    pub fn name(&self) -> String {
        match (self.operation, self.source.base) {
            (ModifiedOp::None, _) => self.source.name(),
            (ModifiedOp::Snub, 2) => "snub disphenoid".to_string(),
            (ModifiedOp::Snub, _) => format!("snub {}", self.source.name()),
        }
    }

    #[inline]
    pub fn is_snub(&self) -> bool {
        self.operation == ModifiedOp::Snub
    }

    #[inline]
    pub fn base(&self) -> usize {
        self.source.base
    }
}
