//! Augmented, diminished and gyrate solids built on a classical or capstone source.

use serde::{Deserialize, Serialize};

use super::{Align, CapType, Capstone, Classical, ClassicalOp, Elongation, Facet, Family, Gyrate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositeSource {
    Classical(Classical),
    Capstone(Capstone),
}

impl CompositeSource {
    pub fn name(&self) -> String {
        match self {
            CompositeSource::Classical(c) => crate::names::normalize_name(c.name()),
            CompositeSource::Capstone(c) => crate::names::normalize_name(c.name()),
        }
    }

    pub fn is_prismatic(&self) -> bool {
        matches!(self, CompositeSource::Capstone(_))
    }

    pub fn classical(&self) -> Option<&Classical> {
        match self {
            CompositeSource::Classical(c) => Some(c),
            CompositeSource::Capstone(_) => None,
        }
    }

    pub fn capstone(&self) -> Option<&Capstone> {
        match self {
            CompositeSource::Capstone(c) => Some(c),
            CompositeSource::Classical(_) => None,
        }
    }

    /// Classical family polygon, or the prism base.
    pub fn polygon(&self) -> usize {
        match self {
            CompositeSource::Classical(c) => c.family.n(),
            CompositeSource::Capstone(c) => c.ring_size(),
        }
    }
}

/// A source solid with caps added (`augmented`), removed (`diminished`) or
/// rotated (`gyrate`). `align` is present exactly when two modifications can be
/// opposite (`para`) or not (`meta`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Composite {
    pub source: CompositeSource,
    pub augmented: u8,
    pub diminished: u8,
    pub gyrate: u8,
    pub align: Option<Align>,
}

fn prism(base: usize, kind: CapType) -> Capstone {
    Capstone {
        base,
        kind,
        count: 0,
        elongation: Elongation::Prism,
        gyrate: None,
        twist: None,
    }
}

fn classical(family: Family, operation: ClassicalOp, facet: Option<Facet>) -> Classical {
    Classical {
        family,
        operation,
        facet,
        twist: None,
    }
}

impl Composite {
    /// Build with `align` dropped when the modification pattern has none.
    pub fn new(source: CompositeSource, augmented: u8, diminished: u8, gyrate: u8, align: Option<Align>) -> Self {
        let mut c = Composite {
            source,
            augmented,
            diminished,
            gyrate,
            align,
        };
        if !c.has_alignment() {
            c.align = None;
        }
        c
    }

    /// Sources that take pyramids or cupolae on their faces: the triangular,
    /// square, pentagonal and hexagonal prisms, the dodecahedron, and the
    /// face-first truncated solids.
    pub fn augmented_sources() -> Vec<CompositeSource> {
        use ClassicalOp::*;
        use Family::*;
        vec![
            CompositeSource::Capstone(prism(3, CapType::Pyramid)),
            CompositeSource::Capstone(prism(4, CapType::Pyramid)),
            CompositeSource::Capstone(prism(5, CapType::Pyramid)),
            CompositeSource::Capstone(prism(3, CapType::Cupola)),
            CompositeSource::Classical(classical(Tetrahedral, Truncate, None)),
            CompositeSource::Classical(classical(Octahedral, Truncate, Some(Facet::Face))),
            CompositeSource::Classical(classical(Icosahedral, Regular, Some(Facet::Face))),
            CompositeSource::Classical(classical(Icosahedral, Truncate, Some(Facet::Face))),
        ]
    }

    pub fn icosahedron() -> CompositeSource {
        CompositeSource::Classical(classical(Family::Icosahedral, ClassicalOp::Regular, Some(Facet::Vertex)))
    }

    pub fn rhombicosidodecahedron() -> CompositeSource {
        CompositeSource::Classical(classical(Family::Icosahedral, ClassicalOp::Cantellate, None))
    }

    /// Maximum number of caps a source takes without losing convexity.
    pub fn modify_limit(source: &CompositeSource) -> u8 {
        match source {
            CompositeSource::Capstone(c) => {
                if c.ring_size() % 3 == 0 {
                    3
                } else {
                    2
                }
            }
            CompositeSource::Classical(c) => c.family.n() as u8 - 2,
        }
    }

    fn with_alignments(source: CompositeSource, augmented: u8, diminished: u8, gyrate: u8) -> Vec<Composite> {
        let candidate = Composite {
            source,
            augmented,
            diminished,
            gyrate,
            align: None,
        };
        if candidate.has_alignment() {
            [Align::Para, Align::Meta]
                .into_iter()
                .map(|a| Composite {
                    align: Some(a),
                    ..candidate
                })
                .collect()
        } else {
            vec![candidate]
        }
    }

    pub fn all() -> Vec<Composite> {
        let mut out = Vec::new();
        for source in Self::augmented_sources() {
            for augmented in 0..=Self::modify_limit(&source) {
                out.extend(Self::with_alignments(source, augmented, 0, 0));
            }
        }
        let ico = Self::icosahedron();
        for diminished in 0..=3 {
            out.extend(Self::with_alignments(ico, 0, diminished, 0));
        }
        out.push(Composite::new(ico, 1, 3, 0, None));
        let rid = Self::rhombicosidodecahedron();
        for gyrate in 0..=3u8 {
            for diminished in 0..=(3 - gyrate) {
                out.extend(Self::with_alignments(rid, 0, diminished, gyrate));
            }
        }
        out
    }

    pub fn name(&self) -> String {
        let count_prefix = |n: u8| match n {
            2 => "bi",
            3 => "tri",
            _ => "",
        };
        let mut parts: Vec<String> = Vec::new();
        for (n, word) in [
            (self.gyrate, "gyrate"),
            (self.augmented, "augmented"),
            (self.diminished, "diminished"),
        ] {
            if n > 0 {
                parts.push(format!("{}{word}", count_prefix(n)));
            }
        }
        if let (Some(align), Some(first)) = (self.align, parts.first_mut()) {
            let a = match align {
                Align::Para => "para",
                Align::Meta => "meta",
            };
            first.insert_str(0, a);
        }
        parts.push(self.source.name());
        parts.join(" ")
    }

    #[inline]
    pub fn total_count(&self) -> u8 {
        self.augmented + self.diminished + self.gyrate
    }

    /// Only one kind of modification.
    pub fn is_pure(&self) -> bool {
        let c = self.total_count();
        c == self.augmented || c == self.diminished || c == self.gyrate
    }

    pub fn has_alignment(&self) -> bool {
        if self.total_count() != 2 {
            return false;
        }
        match &self.source {
            CompositeSource::Capstone(c) => c.is_secondary(),
            CompositeSource::Classical(c) => c.is_icosahedral(),
        }
    }

    pub fn is_augmented_prism(&self) -> bool {
        self.source.is_prismatic()
    }

    pub fn is_augmented_classical(&self) -> bool {
        match &self.source {
            CompositeSource::Classical(c) => c.is_truncated() || (c.is_regular() && !c.is_vertex()),
            CompositeSource::Capstone(_) => false,
        }
    }

    pub fn is_augmented_solid(&self) -> bool {
        self.is_augmented_prism() || self.is_augmented_classical()
    }

    pub fn is_diminished_solid(&self) -> bool {
        matches!(&self.source, CompositeSource::Classical(c) if c.is_regular() && c.is_vertex())
    }

    pub fn is_gyrate_solid(&self) -> bool {
        matches!(&self.source, CompositeSource::Classical(c) if c.is_cantellated())
    }

    fn with_counts(&self, augmented: u8, diminished: u8, gyrate: u8, align: Option<Align>) -> Composite {
        Composite::new(self.source, augmented, diminished, gyrate, align)
    }

    /// One augmentation removed (augmented solids).
    pub fn diminish(&self) -> Composite {
        self.with_counts(self.augmented.saturating_sub(1), self.diminished, self.gyrate, Some(Align::Meta))
    }

    /// Refill one diminished vertex, or add a triangular-face pyramid.
    pub fn augment_diminished(&self, triangular: bool) -> Composite {
        if triangular {
            self.with_counts(1, self.diminished, self.gyrate, self.align)
        } else {
            self.with_counts(self.augmented, self.diminished.saturating_sub(1), self.gyrate, Some(Align::Meta))
        }
    }

    /// Refill one diminished cupola of a rhombicosidodecahedron, either rotated
    /// relative to the original (`Ortho` cap alignment gives a gyrate cupola) or not.
    pub fn augment_gyrate(&self, gyrate: Gyrate) -> Composite {
        match gyrate {
            Gyrate::Ortho => self.with_counts(
                self.augmented,
                self.diminished.saturating_sub(1),
                self.gyrate + 1,
                self.align,
            ),
            Gyrate::Gyro => self.with_counts(
                self.augmented,
                self.diminished.saturating_sub(1),
                self.gyrate,
                Some(Align::Meta),
            ),
        }
    }

    pub fn ungyrate(&self) -> Composite {
        self.with_counts(self.augmented, self.diminished, self.gyrate.saturating_sub(1), Some(Align::Meta))
    }
}
