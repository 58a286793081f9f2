use nalgebra::Vector2;

use super::types::AlignedExtent;
use crate::error::{ObbError, ObbResult};

/// Componentwise min/max of aligned points, with half-extent and center.
///
/// A zero half-extent (all points share a coordinate) is accepted.
pub fn compute_extent(aligned: &[Vector2<f64>]) -> ObbResult<AlignedExtent> {
    let Some(&first) = aligned.first() else {
        return Err(ObbError::insufficient_data(0));
    };
    let (min, max) = aligned
        .iter()
        .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
    Ok(AlignedExtent::from_min_max(min, max))
}
