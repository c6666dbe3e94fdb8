use std::sync::OnceLock;

use tracing::debug;

use crate::error::{PolyError, Result};
use crate::names::{canonical_name, from_conway_notation, is_conway_symbol};

use super::{
    Capstone, Classical, Composite, Elementary, ModifiedAntiprism, Prismatic, Queries,
    Specification,
};

/// The generated instance sets of every family.
#[derive(Debug)]
pub struct Registry {
    pub classical: Queries<Classical>,
    pub prismatic: Queries<Prismatic>,
    pub capstone: Queries<Capstone>,
    pub composite: Queries<Composite>,
    pub modified: Queries<ModifiedAntiprism>,
    pub elementary: Queries<Elementary>,
}

/// Process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let r = Registry {
            classical: Queries::new(Classical::all()),
            prismatic: Queries::new(Prismatic::all()),
            capstone: Queries::new(Capstone::all()),
            composite: Queries::new(Composite::all()),
            modified: Queries::new(ModifiedAntiprism::all()),
            elementary: Queries::new(Elementary::all()),
        };
        debug!(specs = r.len(), "registry built");
        r
    })
}

impl Registry {
    pub fn len(&self) -> usize {
        self.classical.len()
            + self.prismatic.len()
            + self.capstone.len()
            + self.composite.len()
            + self.modified.len()
            + self.elementary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every specification, in family order.
    pub fn all(&self) -> impl Iterator<Item = Specification> + '_ {
        self.classical
            .iter()
            .map(|&s| Specification::from(s))
            .chain(self.prismatic.iter().map(|&s| s.into()))
            .chain(self.capstone.iter().map(|&s| s.into()))
            .chain(self.composite.iter().map(|&s| s.into()))
            .chain(self.modified.iter().map(|&s| s.into()))
            .chain(self.elementary.iter().map(|&s| s.into()))
    }

    /// Every specification whose canonical name is `name`, in family order.
    pub fn all_with_name(&self, name: &str) -> Vec<Specification> {
        let mut out: Vec<Specification> = Vec::new();
        out.extend(self.classical.get_all_with_name(name).into_iter().map(|&s| Specification::from(s)));
        out.extend(self.prismatic.get_all_with_name(name).into_iter().map(|&s| Specification::from(s)));
        out.extend(self.capstone.get_all_with_name(name).into_iter().map(|&s| Specification::from(s)));
        out.extend(self.composite.get_all_with_name(name).into_iter().map(|&s| Specification::from(s)));
        out.extend(self.modified.get_all_with_name(name).into_iter().map(|&s| Specification::from(s)));
        out.extend(self.elementary.get_all_with_name(name).into_iter().map(|&s| Specification::from(s)));
        out
    }

    /// Canonical, alternate, escaped or Conway name to the first specification
    /// in family order.
    ///
    /// Errors: `InvalidName` if the name does not resolve.
    pub fn resolve(&self, name: &str) -> Result<Specification> {
        let canonical = if is_conway_symbol(name) {
            canonical_name(&from_conway_notation(name)?)?
        } else {
            canonical_name(name)?
        };
        self.all_with_name(&canonical)
            .into_iter()
            .next()
            .ok_or(PolyError::InvalidName(name.to_string()))
    }
}
