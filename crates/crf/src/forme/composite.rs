//! Augmented, diminished and gyrate solids: which caps were modified.

use std::sync::OnceLock;

use itertools::Itertools;

use crate::geom::is_inverse;
use crate::mesh::{caps, Cap, CapKind, Polyhedron};
use crate::specs::{Align, Composite, CompositeSource};

#[derive(Debug)]
pub struct CompositeForme {
    spec: Composite,
    mesh: Polyhedron,
    caps: OnceLock<Vec<Cap>>,
    mod_caps: OnceLock<Vec<Cap>>,
}

impl CompositeForme {
    pub fn new(spec: Composite, mesh: Polyhedron) -> Self {
        Self {
            spec,
            mesh,
            caps: OnceLock::new(),
            mod_caps: OnceLock::new(),
        }
    }

    pub fn spec(&self) -> Composite {
        self.spec
    }

    pub fn mesh(&self) -> &Polyhedron {
        &self.mesh
    }

    pub fn caps(&self) -> &[Cap] {
        self.caps.get_or_init(|| caps(&self.mesh))
    }

    /// Kind and rim size of the caps a cut-paste operation may act on.
    fn mod_shape(&self) -> Vec<(CapKind, usize)> {
        let c = &self.spec;
        if c.is_diminished_solid() {
            let mut shapes = vec![(CapKind::Pyramid, 5)];
            if c.augmented > 0 {
                shapes.push((CapKind::Pyramid, 3));
            }
            return shapes;
        }
        if c.is_gyrate_solid() {
            return vec![(CapKind::Cupola, 10)];
        }
        match &c.source {
            CompositeSource::Capstone(_) => vec![(CapKind::Pyramid, 4)],
            CompositeSource::Classical(cl) if cl.is_truncated() => {
                vec![(CapKind::Cupola, 2 * cl.family.n())]
            }
            CompositeSource::Classical(cl) => vec![(CapKind::Pyramid, cl.family.n())],
        }
    }

    /// Augmentations, remaining icosahedron pyramids, or rhombicosidodecahedron
    /// cupolae (gyrated or not).
    pub fn mod_caps(&self) -> &[Cap] {
        self.mod_caps.get_or_init(|| {
            let shapes = self.mod_shape();
            self.caps()
                .iter()
                .filter(|cap| shapes.contains(&(cap.kind, cap.boundary.len())))
                .cloned()
                .collect()
        })
    }

    /// A cupola turned against its surroundings: some rim edge has a square on
    /// both sides.
    pub fn is_gyrate(&self, cap: &Cap) -> bool {
        if cap.kind != CapKind::Cupola {
            return false;
        }
        cap.boundary.iter().circular_tuple_windows().any(|(&a, &b)| {
            self.mesh
                .edge(a, b)
                .is_some_and(|e| e.face().num_sides() == 4 && e.twin_face().num_sides() == 4)
        })
    }

    /// Face left by a removed cap: a decagon on a rhombicosidodecahedron, a
    /// pentagon on an icosahedron.
    pub fn is_diminished_face(&self, face: usize) -> bool {
        let sides = self.mesh.face(face).num_sides();
        if self.spec.is_gyrate_solid() {
            sides == 10
        } else if self.spec.is_diminished_solid() {
            sides == 5
        } else {
            false
        }
    }

    /// `Para` if another modification sits opposite `cap`, else `Meta`.
    pub fn alignment(&self, cap: &Cap) -> Align {
        let normal = cap.normal(&self.mesh);
        let others = self
            .mod_caps()
            .iter()
            .filter(|c| *c != cap)
            .filter(|c| !self.spec.is_gyrate_solid() || self.is_gyrate(c))
            .map(|c| c.normal(&self.mesh));
        let faces = self
            .mesh
            .face_handles()
            .filter(|f| self.is_diminished_face(f.index()))
            .map(|f| f.normal());
        if others.chain(faces).any(|n| is_inverse(&n, &normal)) {
            Align::Para
        } else {
            Align::Meta
        }
    }
}
