//! Symmetry groups of specifications.
//!
//! Purpose
//! - `symmetry(spec)` maps any specification to its point group, by family
//!   case tables. Pure; no geometry involved.
//!
//! Conventions
//! - `Cyclic { n, chiral: false }` is C_nv (C_s for n = 1); `Dihedral` kinds are
//!   plain D_n, prismatic D_nh and antiprismatic D_nd.
//! - Classical solids get the group of their construction family, so the
//!   tetrahedral rectification reports T_d even though it realizes the
//!   octahedron. Name-level queries (`info`) resolve the highest-family
//!   construction first.

use serde::{Deserialize, Serialize};

use crate::error::{PolyError, Result};
use crate::specs::{
    CapType, Capstone, Composite, ElementaryKind, Family, Gyrate, Align, ModifiedOp, PrismType,
    Specification,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DihedralKind {
    Plain,
    Prism,
    Antiprism,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    Cyclic { n: usize, chiral: bool },
    Dihedral { n: usize, kind: DihedralKind },
    Polyhedral { family: Family, chiral: bool },
}

impl Symmetry {
    pub const BILATERAL: Symmetry = Symmetry::Cyclic { n: 1, chiral: false };
    pub const BIRADIAL: Symmetry = Symmetry::Cyclic { n: 2, chiral: false };

    pub fn cyclic(n: usize) -> Self {
        Symmetry::Cyclic { n, chiral: false }
    }

    pub fn dihedral(n: usize, kind: DihedralKind) -> Self {
        Symmetry::Dihedral { n, kind }
    }

    /// Number of group elements, reflections included.
    pub fn order(&self) -> usize {
        match *self {
            Symmetry::Cyclic { n, chiral } => {
                if chiral {
                    n
                } else {
                    2 * n
                }
            }
            Symmetry::Dihedral { n, kind } => match kind {
                DihedralKind::Plain => 2 * n,
                _ => 4 * n,
            },
            Symmetry::Polyhedral { family, chiral } => {
                let rotations = match family {
                    Family::Tetrahedral => 12,
                    Family::Octahedral => 24,
                    Family::Icosahedral => 60,
                };
                if chiral {
                    rotations
                } else {
                    2 * rotations
                }
            }
        }
    }

    pub fn is_chiral(&self) -> bool {
        match *self {
            Symmetry::Cyclic { chiral, .. } | Symmetry::Polyhedral { chiral, .. } => chiral,
            Symmetry::Dihedral { kind, .. } => kind == DihedralKind::Plain,
        }
    }

    /// Schoenflies symbol, e.g. `C3v`, `D5d`, `Ih`.
    pub fn symbol(&self) -> String {
        match *self {
            Symmetry::Cyclic { n: 1, chiral: false } => "Cs".to_string(),
            Symmetry::Cyclic { n, chiral } => format!("C{n}{}", if chiral { "" } else { "v" }),
            Symmetry::Dihedral { n, kind } => {
                let suffix = match kind {
                    DihedralKind::Plain => "",
                    DihedralKind::Prism => "h",
                    DihedralKind::Antiprism => "d",
                };
                format!("D{n}{suffix}")
            }
            Symmetry::Polyhedral { family, chiral } => {
                let base = match family {
                    Family::Tetrahedral => "T",
                    Family::Octahedral => "O",
                    Family::Icosahedral => "I",
                };
                let suffix = match (family, chiral) {
                    (_, true) => "",
                    (Family::Tetrahedral, false) => "d",
                    (_, false) => "h",
                };
                format!("{base}{suffix}")
            }
        }
    }

    /// Descriptive name ("bilateral", "pentagonal antiprismatic", ...).
    pub fn name(&self) -> String {
        let polygon = |n: usize| crate::names::polygon_prefix(n).unwrap_or("polygonal");
        match *self {
            Symmetry::Cyclic { n: 1, chiral: false } => "bilateral".to_string(),
            Symmetry::Cyclic { n: 2, chiral: false } => "biradial".to_string(),
            Symmetry::Cyclic { n, chiral: false } => format!("{} pyramidal", polygon(n)),
            Symmetry::Cyclic { n, chiral: true } => format!("chiral {} cyclic", polygon(n)),
            Symmetry::Dihedral { n, kind } => match kind {
                DihedralKind::Plain => format!("chiral {} dihedral", polygon(n)),
                DihedralKind::Prism => format!("{} prismatic", polygon(n)),
                DihedralKind::Antiprism => format!("{} antiprismatic", polygon(n)),
            },
            Symmetry::Polyhedral { family, chiral } => {
                let base = match family {
                    Family::Tetrahedral => "tetrahedral",
                    Family::Octahedral => "octahedral",
                    Family::Icosahedral => "icosahedral",
                };
                if chiral {
                    format!("chiral {base}")
                } else {
                    base.to_string()
                }
            }
        }
    }
}

impl std::fmt::Display for Symmetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol())
    }
}

/// Point group of a specification.
///
/// Errors: `SpecificationDomain` for composites with more modifications than
/// the case tables cover.
pub fn symmetry(spec: &Specification) -> Result<Symmetry> {
    match spec {
        Specification::Classical(c) => Ok(Symmetry::Polyhedral {
            family: c.family,
            chiral: c.is_snub(),
        }),
        Specification::Prismatic(p) => Ok(Symmetry::dihedral(
            p.base,
            match p.kind {
                PrismType::Prism => DihedralKind::Prism,
                PrismType::Antiprism => DihedralKind::Antiprism,
            },
        )),
        Specification::Capstone(c) => Ok(capstone_symmetry(c)),
        Specification::Composite(c) => composite_symmetry(c),
        Specification::ModifiedAntiprism(m) => match m.operation {
            ModifiedOp::Snub => Ok(Symmetry::dihedral(m.base(), DihedralKind::Antiprism)),
            ModifiedOp::None => symmetry(&Specification::Prismatic(m.source)),
        },
        Specification::Elementary(e) => Ok(match e.base {
            ElementaryKind::Sphenocorona => Symmetry::BIRADIAL,
            ElementaryKind::AugmentedSphenocorona => Symmetry::BILATERAL,
            ElementaryKind::Sphenomegacorona => Symmetry::BIRADIAL,
            ElementaryKind::Hebesphenomegacorona => Symmetry::BIRADIAL,
            ElementaryKind::Disphenocingulum => Symmetry::dihedral(2, DihedralKind::Antiprism),
            ElementaryKind::Bilunabirotunda => Symmetry::dihedral(2, DihedralKind::Prism),
            ElementaryKind::TriangularHebesphenorotunda => Symmetry::cyclic(3),
        }),
    }
}

fn capstone_symmetry(c: &Capstone) -> Symmetry {
    let gyroelongated = c.is_gyroelongated();
    if c.is_prismatic() {
        let kind = if gyroelongated {
            DihedralKind::Antiprism
        } else {
            DihedralKind::Prism
        };
        return Symmetry::dihedral(c.ring_size(), kind);
    }
    if c.is_mono() {
        return Symmetry::cyclic(c.base);
    }
    match c.kind {
        CapType::Pyramid => Symmetry::dihedral(
            c.base,
            if gyroelongated {
                DihedralKind::Antiprism
            } else {
                DihedralKind::Prism
            },
        ),
        CapType::CupolaRotunda => Symmetry::Cyclic {
            n: c.base,
            chiral: gyroelongated,
        },
        _ if gyroelongated => Symmetry::dihedral(c.base, DihedralKind::Plain),
        _ => Symmetry::dihedral(
            c.base,
            if c.gyrate == Some(Gyrate::Gyro) {
                DihedralKind::Antiprism
            } else {
                DihedralKind::Prism
            },
        ),
    }
}

fn composite_symmetry(c: &Composite) -> Result<Symmetry> {
    let prismatic = c.source.is_prismatic();
    let pure = c.is_pure();
    let polygon = c.source.polygon();
    match c.total_count() {
        0 => symmetry(&Specification::from(c.source)),
        1 => Ok(if prismatic {
            Symmetry::BIRADIAL
        } else {
            Symmetry::cyclic(polygon)
        }),
        2 if prismatic => Ok(if c.align == Some(Align::Para) {
            Symmetry::dihedral(2, DihedralKind::Prism)
        } else {
            Symmetry::BIRADIAL
        }),
        2 if polygon == 4 => Ok(Symmetry::dihedral(4, DihedralKind::Prism)),
        2 => Ok(match (c.align, pure) {
            (Some(Align::Para), true) => Symmetry::dihedral(polygon, DihedralKind::Antiprism),
            (Some(Align::Para), false) => Symmetry::cyclic(polygon),
            (_, true) => Symmetry::BIRADIAL,
            (_, false) => Symmetry::BILATERAL,
        }),
        3 if prismatic => Ok(Symmetry::dihedral(3, DihedralKind::Prism)),
        3 => Ok(if pure { Symmetry::cyclic(3) } else { Symmetry::BILATERAL }),
        4 => Ok(Symmetry::cyclic(3)),
        n => Err(PolyError::domain(format!(
            "too many modifications ({n}) on {}",
            c.source.name()
        ))),
    }
}

#[cfg(test)]
mod tests;
