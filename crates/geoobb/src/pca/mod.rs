//! PCA stages of the oriented-bounding-box pipeline.
//!
//! Purpose
//! - Estimate principal axes from the biased covariance, rotate points into the
//!   aligned frame and back, and measure the aligned extent.
//!
//! Conventions
//! - Points are `Vector2<f64>` treated as row vectors: `to_aligned` is
//!   `P · B⁻¹`, `to_original` is `P · B`, with `B` holding axes as rows.
//! - The eigenbasis is canonicalized (major axis first, `det = +1`, major axis
//!   in `x > 0`) so repeated runs and different inputs with the same spread give
//!   the same corner ordering.
//!
//! Code cross-refs: `AxisBasis`, `AlignedExtent`, `ObbCfg`, `crate::obb`.

mod axes;
mod extent;
mod frame;
mod types;

pub use axes::{covariance, estimate_axes};
pub use extent::compute_extent;
pub use frame::{to_aligned, to_original};
pub use types::{AlignedExtent, AxisBasis, ObbCfg};
