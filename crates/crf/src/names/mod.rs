//! Canonical names, alternate names and Conway notation.
//!
//! Purpose
//! - Pure lookup tables, independent of geometry. Everything else in the crate
//!   compares solids by canonical name, so this module is the single place where
//!   strings are normalized.
//!
//! Conventions
//! - Canonical names are lowercase with single spaces ("elongated square
//!   pyramid"). Escaped names replace spaces with hyphens (URL form).
//! - Conway symbols: `T C O D I` (Platonic), two-letter Archimedean symbols,
//!   `P<n>`/`A<n>` for prisms/antiprisms, `J<n>` for Johnson solids.

mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{PolyError, Result};

pub use tables::JOHNSON_SOLIDS;
use tables::{
    ALTERNATE_NAMES, ANTIPRISM_BASES, ARCHIMEDEAN, PLATONIC, POLYGON_PREFIXES, PRISM_BASES,
};

/// Prefix for a regular polygon with `n` sides ("triangular", "square", ...).
pub fn polygon_prefix(n: usize) -> Option<&'static str> {
    POLYGON_PREFIXES
        .iter()
        .find(|(k, _)| *k == n)
        .map(|(_, p)| *p)
}

/// Inverse of [`polygon_prefix`].
pub fn polygon_from_prefix(prefix: &str) -> Option<usize> {
    POLYGON_PREFIXES
        .iter()
        .find(|(_, p)| *p == prefix)
        .map(|(k, _)| *k)
}

pub fn escape_name(name: &str) -> String {
    name.replace(' ', "-")
}

pub fn unescape_name(name: &str) -> String {
    name.replace('-', " ")
}

/// Every canonical solid name: Platonic, Archimedean, prisms, antiprisms, Johnson.
pub fn all_solid_names() -> &'static [String] {
    static NAMES: OnceLock<Vec<String>> = OnceLock::new();
    NAMES.get_or_init(|| {
        let mut out: Vec<String> = PLATONIC.iter().map(|(_, n)| n.to_string()).collect();
        out.extend(ARCHIMEDEAN.iter().map(|(_, n)| n.to_string()));
        for &b in &PRISM_BASES {
            if let Some(p) = polygon_prefix(b) {
                out.push(format!("{p} prism"));
            }
        }
        for &b in &ANTIPRISM_BASES {
            if let Some(p) = polygon_prefix(b) {
                out.push(format!("{p} antiprism"));
            }
        }
        out.extend(JOHNSON_SOLIDS.iter().map(|n| n.to_string()));
        out
    })
}

pub fn is_canonical_name(name: &str) -> bool {
    all_solid_names().iter().any(|n| n == name)
}

fn inverse_alternates() -> &'static HashMap<&'static str, &'static str> {
    static INV: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    INV.get_or_init(|| {
        ALTERNATE_NAMES
            .iter()
            .flat_map(|(canon, alts)| alts.iter().map(move |a| (*a, *canon)))
            .collect()
    })
}

/// Alternate names of a canonical (possibly escaped) name; empty if none.
pub fn alternate_names(name: &str) -> &'static [&'static str] {
    let name = unescape_name(name);
    ALTERNATE_NAMES
        .iter()
        .find(|(canon, _)| *canon == name)
        .map(|(_, alts)| *alts)
        .unwrap_or(&[])
}

pub fn is_alternate_name(name: &str) -> bool {
    inverse_alternates().contains_key(unescape_name(name).as_str())
}

/// Canonical form of a canonical, alternate or escaped name.
///
/// Errors: `InvalidName` if the name is neither canonical nor an alternate.
pub fn canonical_name(name: &str) -> Result<String> {
    if is_canonical_name(name) {
        return Ok(name.to_string());
    }
    let unescaped = unescape_name(name);
    if is_canonical_name(&unescaped) {
        return Ok(unescaped);
    }
    inverse_alternates()
        .get(unescaped.as_str())
        .map(|c| c.to_string())
        .ok_or_else(|| PolyError::InvalidName(name.to_string()))
}

/// Like [`canonical_name`] but leaves unknown names untouched. Used to
/// normalize names produced by the specification generators, some of which
/// (e.g. "augmented cube") only exist as alternates.
pub(crate) fn normalize_name(name: String) -> String {
    match inverse_alternates().get(name.as_str()) {
        Some(c) => c.to_string(),
        None => name,
    }
}

fn split_symbol(symbol: &str) -> Option<(char, u32)> {
    let mut chars = symbol.chars();
    let prefix = chars.next()?;
    let rest = chars.as_str();
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok().map(|n| (prefix, n))
}

pub fn is_conway_symbol(symbol: &str) -> bool {
    if PLATONIC.iter().any(|(s, _)| *s == symbol) || ARCHIMEDEAN.iter().any(|(s, _)| *s == symbol)
    {
        return true;
    }
    match split_symbol(symbol) {
        Some(('J', n)) => n <= 92,
        Some(('P' | 'A', n)) => polygon_prefix(n as usize).is_some(),
        _ => false,
    }
}

/// Solid name for a Conway symbol.
///
/// `P4` yields "square prism" and `A3` "triangular antiprism"; pass the result
/// through [`canonical_name`] for the canonical form.
pub fn from_conway_notation(symbol: &str) -> Result<String> {
    let invalid = || PolyError::InvalidName(symbol.to_string());
    if let Some((_, n)) = PLATONIC.iter().chain(ARCHIMEDEAN.iter()).find(|(s, _)| *s == symbol) {
        return Ok(n.to_string());
    }
    match split_symbol(symbol) {
        Some(('J', n)) if (1..=92).contains(&n) => Ok(JOHNSON_SOLIDS[n as usize - 1].to_string()),
        Some(('P', n)) => polygon_prefix(n as usize)
            .map(|p| format!("{p} prism"))
            .ok_or_else(invalid),
        Some(('A', n)) => polygon_prefix(n as usize)
            .map(|p| format!("{p} antiprism"))
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// Conway symbol for a canonical name; `None` if the solid has none.
pub fn to_conway_notation(name: &str) -> Option<String> {
    if let Some((s, _)) = PLATONIC.iter().chain(ARCHIMEDEAN.iter()).find(|(_, n)| *n == name) {
        return Some(s.to_string());
    }
    if let Some(i) = JOHNSON_SOLIDS.iter().position(|n| *n == name) {
        return Some(format!("J{}", i + 1));
    }
    let (prefix, kind) = name.split_once(' ')?;
    let n = polygon_from_prefix(prefix)?;
    match kind {
        "prism" => Some(format!("P{n}")),
        "antiprism" => Some(format!("A{n}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
