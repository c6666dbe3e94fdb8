//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; reference meshes are unit-edge and centered, so a single
//!   absolute scale is adequate. Geometry that depends on the input's size
//!   scales these by the mesh edge length.

/// Two vertices closer than this (relative to edge length) are merged by `dedup`.
pub(crate) const DEDUP_EPS: f64 = 1e-6;
/// Coplanarity threshold for face reconstruction and cap-boundary checks.
pub(crate) const PLANE_EPS: f64 = 1e-6;
/// Relative tolerance when comparing an edge to the unit length.
pub(crate) const EDGE_EPS: f64 = 1e-4;
/// Angle tolerance (radians) for regularity and antipodality checks.
pub(crate) const ANGLE_EPS: f64 = 1e-6;
/// Newton iterations for numerically solved seeds (snub vertex).
pub(crate) const NEWTON_ITERS: usize = 60;
/// Relative distance within which an animated vertex counts as landing on a
/// target vertex.
pub(crate) const SNAP_EPS: f64 = 1e-3;
