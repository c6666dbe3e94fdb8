//! Error taxonomy for the engine.
//!
//! Conventions
//! - `InvalidName` and `OperationNotApplicable` are caller-facing: the request
//!   cannot be satisfied and should be reported, never retried.
//! - `SpecificationDomain` signals misuse (illegal parameter combination,
//!   missing or ambiguous option).
//! - `MeshInvariantViolation` signals a defect in mesh construction.

/// Errors surfaced by name resolution, realization and operations.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum PolyError {
    /// A name, alternate name or Conway symbol does not resolve to any known solid.
    #[error("invalid solid name: {0}")]
    InvalidName(String),
    /// A family's index does not contain the requested name.
    #[error("no {family} solid named {name:?}")]
    NotFound {
        /// Family that was searched.
        family: &'static str,
        /// The requested canonical name.
        name: String,
    },
    /// Illegal parameter combination or missing/ambiguous option.
    #[error("specification domain error: {0}")]
    SpecificationDomain(String),
    /// No operation graph entry matches the request.
    #[error("operation {op} is not applicable to {spec}")]
    OperationNotApplicable {
        /// Operation name.
        op: &'static str,
        /// Canonical name of the input solid.
        spec: String,
    },
    /// Malformed face table, non-closing traversal or failed reconstruction.
    #[error("mesh invariant violated: {0}")]
    MeshInvariantViolation(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolyError>;

impl PolyError {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        PolyError::SpecificationDomain(msg.into())
    }

    pub(crate) fn mesh(msg: impl Into<String>) -> Self {
        PolyError::MeshInvariantViolation(msg.into())
    }
}
