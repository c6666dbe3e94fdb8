//! Pyramids, cupolae and rotundae stacked on an optional prism or antiprism band.

use serde::{Deserialize, Serialize};

use crate::names::polygon_prefix;

use super::{Gyrate, Twist};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapType {
    Pyramid,
    Cupola,
    Rotunda,
    /// One cupola and one rotunda (count 2 only).
    CupolaRotunda,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Elongation {
    None,
    Prism,
    Antiprism,
}

/// A capstone solid. `base` is the polygon of the cap top (pyramid base for
/// pyramids); cupolae and rotundae sit on a `2 * base` rim.
///
/// Count 0 with an elongation is the bare prism or antiprism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capstone {
    pub base: usize,
    pub kind: CapType,
    pub count: u8,
    pub elongation: Elongation,
    pub gyrate: Option<Gyrate>,
    pub twist: Option<Twist>,
}

impl Capstone {
    pub fn all() -> Vec<Capstone> {
        let mut out = Vec::new();
        let kinds: [(CapType, &[usize], &[u8]); 4] = [
            (CapType::Pyramid, &[3, 4, 5], &[0, 1, 2]),
            (CapType::Cupola, &[2, 3, 4, 5], &[0, 1, 2]),
            (CapType::Rotunda, &[5], &[1, 2]),
            (CapType::CupolaRotunda, &[5], &[2]),
        ];
        for (kind, bases, counts) in kinds {
            for &base in bases {
                for &count in counts {
                    for elongation in [Elongation::None, Elongation::Prism, Elongation::Antiprism] {
                        if !Self::is_legal(kind, base, count, elongation) {
                            continue;
                        }
                        let has_gyrate = count == 2 && kind != CapType::Pyramid;
                        let gyrates: &[Option<Gyrate>] = if has_gyrate && elongation != Elongation::Antiprism {
                            if base == 2 {
                                &[Some(Gyrate::Gyro)]
                            } else {
                                &[Some(Gyrate::Ortho), Some(Gyrate::Gyro)]
                            }
                        } else {
                            &[None]
                        };
                        let twists: &[Option<Twist>] = if has_gyrate && elongation == Elongation::Antiprism {
                            &[Some(Twist::Left), Some(Twist::Right)]
                        } else {
                            &[None]
                        };
                        for &gyrate in gyrates {
                            for &twist in twists {
                                out.push(Capstone {
                                    base,
                                    kind,
                                    count,
                                    elongation,
                                    gyrate,
                                    twist,
                                });
                            }
                        }
                    }
                }
            }
        }
        out
    }

    fn is_legal(kind: CapType, base: usize, count: u8, elongation: Elongation) -> bool {
        if count == 0 {
            // bare bands; the digonal cupola rim is the square already covered by pyramids
            return elongation != Elongation::None && !(kind == CapType::Cupola && base == 2);
        }
        // elongated fastigia are not convex-regular
        if base == 2 && elongation != Elongation::None {
            return false;
        }
        // the gyroelongated triangular pyramid has coplanar faces
        !(kind == CapType::Pyramid && base == 3 && elongation == Elongation::Antiprism)
    }

    pub fn name(&self) -> String {
        let band = match self.elongation {
            Elongation::Prism => "prism",
            _ => "antiprism",
        };
        if self.count == 0 {
            let prefix = polygon_prefix(self.ring_size()).unwrap_or("?");
            return format!("{prefix} {band}");
        }
        let elong = match self.elongation {
            Elongation::None => "",
            Elongation::Prism => "elongated ",
            Elongation::Antiprism => "gyroelongated ",
        };
        let prefix = polygon_prefix(self.base).unwrap_or("?");
        let gyro = match self.gyrate {
            Some(Gyrate::Ortho) => "ortho",
            Some(Gyrate::Gyro) => "gyro",
            None => "",
        };
        let top = match (self.kind, self.count) {
            (CapType::Pyramid, 1) => "pyramid".to_string(),
            (CapType::Pyramid, _) => "bipyramid".to_string(),
            (CapType::Cupola, 1) => "cupola".to_string(),
            (CapType::Cupola, _) => format!("{gyro}bicupola"),
            (CapType::Rotunda, 1) => "rotunda".to_string(),
            (CapType::Rotunda, _) => format!("{gyro}birotunda"),
            (CapType::CupolaRotunda, _) => format!("{gyro}cupolarotunda"),
        };
        format!("{elong}{prefix} {top}")
    }

    /// Number of sides of the band polygon.
    pub fn ring_size(&self) -> usize {
        if self.kind == CapType::Pyramid {
            self.base
        } else {
            2 * self.base
        }
    }

    #[inline]
    pub fn is_pyramid(&self) -> bool {
        self.kind == CapType::Pyramid
    }
    #[inline]
    pub fn is_cupola(&self) -> bool {
        self.kind == CapType::Cupola
    }
    #[inline]
    pub fn is_rotunda(&self) -> bool {
        self.kind == CapType::Rotunda
    }
    #[inline]
    pub fn is_cupola_rotunda(&self) -> bool {
        self.kind == CapType::CupolaRotunda
    }
    #[inline]
    pub fn is_prismatic(&self) -> bool {
        self.count == 0
    }
    #[inline]
    pub fn is_mono(&self) -> bool {
        self.count == 1
    }
    #[inline]
    pub fn is_bi(&self) -> bool {
        self.count == 2
    }
    #[inline]
    pub fn is_shortened(&self) -> bool {
        self.elongation == Elongation::None
    }
    #[inline]
    pub fn is_elongated(&self) -> bool {
        self.elongation == Elongation::Prism
    }
    #[inline]
    pub fn is_gyroelongated(&self) -> bool {
        self.elongation == Elongation::Antiprism
    }
    /// Band is a prism (count 0, elongated by a prism).
    pub fn is_prism(&self) -> bool {
        self.is_prismatic() && self.is_elongated()
    }
    /// Pyramids sit on the base polygon itself.
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.is_pyramid()
    }
    #[inline]
    pub fn is_secondary(&self) -> bool {
        !self.is_pyramid()
    }

    /// The caps this solid can lose: both kinds for a cupolarotunda.
    pub fn cap_types(&self) -> Vec<CapType> {
        match self.kind {
            CapType::CupolaRotunda => vec![CapType::Cupola, CapType::Rotunda],
            k => vec![k],
        }
    }

    /// This solid with one cap of the given type removed.
    pub fn remove(&self, cap: CapType) -> Capstone {
        let kind = match (self.kind, self.count) {
            (CapType::CupolaRotunda, _) if cap == CapType::Cupola => CapType::Rotunda,
            (CapType::CupolaRotunda, _) => CapType::Cupola,
            // bare bands are stored as pyramid or cupola rims
            (CapType::Rotunda, 1) => CapType::Cupola,
            (k, _) => k,
        };
        Capstone {
            base: self.base,
            kind,
            count: self.count.saturating_sub(1),
            elongation: self.elongation,
            gyrate: None,
            twist: None,
        }
    }

    /// Same caps with another band. Gyrate/twist are reset to the legal
    /// combination for the new band (defaults `Ortho`, `Left`).
    pub fn with_elongation(&self, elongation: Elongation, gyrate: Option<Gyrate>, twist: Option<Twist>) -> Capstone {
        let has_gyrate = self.count == 2 && self.kind != CapType::Pyramid;
        let antiprism = elongation == Elongation::Antiprism;
        Capstone {
            elongation,
            gyrate: (has_gyrate && !antiprism).then(|| gyrate.unwrap_or(Gyrate::Ortho)),
            twist: (has_gyrate && antiprism).then(|| twist.unwrap_or(Twist::Left)),
            ..*self
        }
    }
}
