//! Platonic and Archimedean solids as Wythoff operations on a family.

use serde::{Deserialize, Serialize};

use super::{Facet, Twist};

/// Polyhedral family, named by the polygon of its regular face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Family {
    Tetrahedral,
    Octahedral,
    Icosahedral,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Tetrahedral, Family::Octahedral, Family::Icosahedral];

    /// 3, 4 or 5.
    #[inline]
    pub fn n(self) -> usize {
        match self {
            Family::Tetrahedral => 3,
            Family::Octahedral => 4,
            Family::Icosahedral => 5,
        }
    }

    pub fn from_n(n: usize) -> Option<Self> {
        match n {
            3 => Some(Family::Tetrahedral),
            4 => Some(Family::Octahedral),
            5 => Some(Family::Icosahedral),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassicalOp {
    Regular,
    Truncate,
    Rectify,
    Cantellate,
    Bevel,
    Snub,
}

impl ClassicalOp {
    pub const ALL: [ClassicalOp; 6] = [
        ClassicalOp::Regular,
        ClassicalOp::Truncate,
        ClassicalOp::Rectify,
        ClassicalOp::Cantellate,
        ClassicalOp::Bevel,
        ClassicalOp::Snub,
    ];
}

/// A Platonic or Archimedean solid.
///
/// `facet` is set exactly for regular/truncated solids of families 4 and 5;
/// `twist` exactly for their snubs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classical {
    pub family: Family,
    pub operation: ClassicalOp,
    pub facet: Option<Facet>,
    pub twist: Option<Twist>,
}

impl Classical {
    pub fn all() -> Vec<Classical> {
        let mut out = Vec::new();
        for family in Family::ALL {
            for operation in ClassicalOp::ALL {
                let base = Classical {
                    family,
                    operation,
                    facet: None,
                    twist: None,
                };
                let has_facet = matches!(operation, ClassicalOp::Regular | ClassicalOp::Truncate);
                if family == Family::Tetrahedral {
                    out.push(base);
                } else if has_facet {
                    for facet in [Facet::Face, Facet::Vertex] {
                        out.push(Classical {
                            facet: Some(facet),
                            ..base
                        });
                    }
                } else if operation == ClassicalOp::Snub {
                    for twist in [Twist::Left, Twist::Right] {
                        out.push(Classical {
                            twist: Some(twist),
                            ..base
                        });
                    }
                } else {
                    out.push(base);
                }
            }
        }
        out
    }

    pub fn name(&self) -> String {
        use ClassicalOp::*;
        use Family::*;
        let vertex = self.facet == Some(Facet::Vertex);
        let regular = match (self.family, vertex) {
            (Tetrahedral, _) => "tetrahedron",
            (Octahedral, false) => "cube",
            (Octahedral, true) => "octahedron",
            (Icosahedral, false) => "dodecahedron",
            (Icosahedral, true) => "icosahedron",
        };
        let rectified = match self.family {
            Tetrahedral => "tetratetrahedron",
            Octahedral => "cuboctahedron",
            Icosahedral => "icosidodecahedron",
        };
        match self.operation {
            Regular => regular.to_string(),
            Truncate => format!("truncated {regular}"),
            Rectify => rectified.to_string(),
            // rhombi + icosidodecahedron elides the repeated i
            Cantellate => format!("rhombi{}", rectified.strip_prefix('i').unwrap_or(rectified)),
            Bevel => format!("truncated {rectified}"),
            Snub => format!("snub {}", if self.family == Tetrahedral { regular } else { rectified }),
        }
    }

    #[inline]
    pub fn is_regular(&self) -> bool {
        self.operation == ClassicalOp::Regular
    }
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.operation == ClassicalOp::Truncate
    }
    #[inline]
    pub fn is_rectified(&self) -> bool {
        self.operation == ClassicalOp::Rectify
    }
    #[inline]
    pub fn is_cantellated(&self) -> bool {
        self.operation == ClassicalOp::Cantellate
    }
    #[inline]
    pub fn is_bevelled(&self) -> bool {
        self.operation == ClassicalOp::Bevel
    }
    #[inline]
    pub fn is_snub(&self) -> bool {
        self.operation == ClassicalOp::Snub
    }
    #[inline]
    pub fn has_facet(&self) -> bool {
        self.facet.is_some()
    }
    /// Face-first (the family's own polygon); family 3 counts as both.
    pub fn is_face(&self) -> bool {
        self.facet != Some(Facet::Vertex)
    }
    pub fn is_vertex(&self) -> bool {
        self.facet == Some(Facet::Vertex)
    }
    #[inline]
    pub fn is_tetrahedral(&self) -> bool {
        self.family == Family::Tetrahedral
    }
    #[inline]
    pub fn is_octahedral(&self) -> bool {
        self.family == Family::Octahedral
    }
    #[inline]
    pub fn is_icosahedral(&self) -> bool {
        self.family == Family::Icosahedral
    }

    /// Sides of the regular face this solid is built around: the family polygon
    /// for face-first solids, triangles for vertex-first ones.
    pub fn facet_sides(&self) -> usize {
        if self.is_vertex() {
            3
        } else {
            self.family.n()
        }
    }

    /// Same family, another operation; facet and twist are normalized to the
    /// legal combination (defaults: `Face`, `Left`).
    pub fn with_operation(&self, operation: ClassicalOp, facet: Option<Facet>, twist: Option<Twist>) -> Classical {
        let tet = self.family == Family::Tetrahedral;
        let facet = match operation {
            ClassicalOp::Regular | ClassicalOp::Truncate if !tet => Some(facet.unwrap_or(Facet::Face)),
            _ => None,
        };
        let twist = match operation {
            ClassicalOp::Snub if !tet => Some(twist.unwrap_or(Twist::Left)),
            _ => None,
        };
        Classical {
            family: self.family,
            operation,
            facet,
            twist,
        }
    }
}
