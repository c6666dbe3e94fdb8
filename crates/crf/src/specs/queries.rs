use std::collections::BTreeMap;

use crate::error::{PolyError, Result};

use super::Named;

/// Immutable index over all generated instances of one family.
///
/// A canonical name may map to several instances (chiral pairs, alignments
/// that coincide, sources that normalize to the same solid). Instances whose
/// construction name is already canonical come first.
#[derive(Clone, Debug)]
pub struct Queries<T> {
    items: Vec<T>,
    by_name: BTreeMap<String, Vec<usize>>,
}

impl<T: Named> Queries<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut by_name: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (i, item) in items.iter().enumerate() {
            by_name.entry(item.canonical_name()).or_default().push(i);
        }
        // constructions named after the solid itself represent it
        // ("octahedron" over the rectified tetrahedron)
        for (name, idx) in by_name.iter_mut() {
            idx.sort_by_key(|&i| items[i].raw_name() != *name);
        }
        Queries { items, by_name }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lazily filter by predicate.
    pub fn where_<'a, P>(&'a self, pred: P) -> impl Iterator<Item = &'a T> + 'a
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.items.iter().filter(move |t| pred(t))
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// First representative of a canonical name.
    ///
    /// Errors: `NotFound` if this family has no solid with that name.
    pub fn with_name(&self, name: &str) -> Result<&T> {
        self.by_name
            .get(name)
            .and_then(|idx| idx.first())
            .map(|&i| &self.items[i])
            .ok_or_else(|| PolyError::NotFound {
                family: T::FAMILY,
                name: name.to_string(),
            })
    }

    /// Every instance with a canonical name; empty if none.
    pub fn get_all_with_name(&self, name: &str) -> Vec<&T> {
        self.by_name
            .get(name)
            .map(|idx| idx.iter().map(|&i| &self.items[i]).collect())
            .unwrap_or_default()
    }

    /// Canonical names in this family, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }
}
