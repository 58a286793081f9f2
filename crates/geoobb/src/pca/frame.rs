//! Rotation into and out of the PCA-aligned frame.
//!
//! The basis is orthonormal, so its inverse is its transpose; both directions
//! are exact matrix products and round-trip to within round-off.
use nalgebra::Vector2;

use super::types::AxisBasis;

/// `points · basis⁻¹`: coordinates along the principal axes.
pub fn to_aligned(points: &[Vector2<f64>], basis: &AxisBasis) -> Vec<Vector2<f64>> {
    points.iter().map(|&p| basis.align(p)).collect()
}

/// `points · basis`: inverse of [`to_aligned`].
pub fn to_original(points: &[Vector2<f64>], basis: &AxisBasis) -> Vec<Vector2<f64>> {
    points.iter().map(|&q| basis.unalign(q)).collect()
}
