//! Error types for the OBB pipeline.

use thiserror::Error;

/// Result type alias for OBB operations.
pub type ObbResult<T> = Result<T, ObbError>;

/// Errors that can occur while estimating an oriented bounding box.
///
/// Degenerate inputs (collinear points) are not errors; they yield a box with
/// a zero extent. See `OrientedBox::is_degenerate`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObbError {
    /// Fewer than two distinct points: the covariance is undefined.
    #[error("insufficient data: need at least 2 distinct points, got {distinct}")]
    InsufficientData { distinct: usize },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate at point index {index}")]
    NonFinite { index: usize },
}

impl ObbError {
    #[must_use]
    pub const fn insufficient_data(distinct: usize) -> Self {
        Self::InsufficientData { distinct }
    }

    #[must_use]
    pub const fn non_finite(index: usize) -> Self {
        Self::NonFinite { index }
    }
}
