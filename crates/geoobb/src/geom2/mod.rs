//! Small planar helpers shared by the pipeline and its tests.
//!
//! - `convex_hull`: monotone chain, used as the lower bound for box areas.
//! - `ring_area`: shoelace area of a corner ring.
//! - `parallelogram_area`: 2D cross product.

mod hull;

pub(crate) use hull::lex_cmp;
pub use hull::{convex_hull, parallelogram_area, ring_area};
