//! PCA oriented bounding boxes for planar point sets.
//!
//! Pipeline
//! - `pca::estimate_axes`: biased covariance and its eigenbasis.
//! - `pca::to_aligned` / `pca::to_original`: rotate into the principal frame and back.
//! - `pca::compute_extent`: min/max, half-extent and center in that frame.
//! - `obb::oriented_bounding_box`: corners, closed ring, dimensions and angle.
//!
//! The box is a heuristic: it is the minimum-area box when the principal axes
//! match the true minimal-box axes (rectangles) and an over-estimate otherwise.
//!
//! Geometry values (points, lines, polygons and their multi variants) enter
//! through `geometry::to_point_set` under an explicit `PointSetCfg`.

pub mod error;
pub mod geom2;
pub mod geometry;
pub mod obb;
pub mod pca;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ObbError, ObbResult};
pub use nalgebra::Vector2 as Vec2;
pub use obb::{
    oriented_bounding_box, oriented_bounding_box_of, oriented_bounding_boxes, OrientedBox,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{ObbError, ObbResult};
    pub use crate::geom2::{convex_hull, parallelogram_area, ring_area};
    pub use crate::geometry::{to_point_set, Geometry, PointSetCfg, Polygon};
    pub use crate::obb::{
        build_corners, build_dimensions, compute_angle, oriented_bounding_box,
        oriented_bounding_box_of, oriented_bounding_boxes, to_polygon, OrientedBox,
    };
    pub use crate::pca::{
        compute_extent, covariance, estimate_axes, to_aligned, to_original, AlignedExtent,
        AxisBasis, ObbCfg,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
