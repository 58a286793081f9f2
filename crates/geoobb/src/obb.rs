//! Oriented bounding box assembly.
//!
//! Purpose
//! - Run the PCA stages once and derive every output from that single result:
//!   corner array, closed polygon ring, dimensions, angle, area and center.
//!
//! Corner order is `(--, +-, ++, -+)` around the aligned center, which is
//! counterclockwise in the aligned frame and, since the basis is a proper
//! rotation, counterclockwise in the original frame too.
//!
//! Code cross-refs: `pca::{estimate_axes,to_aligned,compute_extent}`, `geometry::Geometry`.

use nalgebra::Vector2;
use rayon::prelude::*;
use tracing::debug;

use crate::error::ObbResult;
use crate::geometry::{to_point_set, Geometry, PointSetCfg};
use crate::pca::{compute_extent, estimate_axes, to_aligned, AlignedExtent, AxisBasis, ObbCfg};

/// Four corners at `center ± half_extent` (aligned frame), mapped back to the
/// original frame.
pub fn build_corners(
    center: Vector2<f64>,
    half_extent: Vector2<f64>,
    basis: &AxisBasis,
) -> [Vector2<f64>; 4] {
    let (a, b) = (half_extent.x, half_extent.y);
    [
        Vector2::new(-a, -b),
        Vector2::new(a, -b),
        Vector2::new(a, b),
        Vector2::new(-a, b),
    ]
    .map(|offset| basis.unalign(center + offset))
}

/// `|(max - min) · basis|`.
///
/// Both aligned side lengths are pushed through the basis before taking
/// magnitudes, so for rotated inputs this is not the pair of side lengths
/// (the unit right triangle gives `[1.5, 0.5]`, the diagonal segment
/// `(0,0)-(1,1)` gives `[1, 1]`). Use `OrientedBox::size` for side lengths.
pub fn build_dimensions(min: Vector2<f64>, max: Vector2<f64>, basis: &AxisBasis) -> Vector2<f64> {
    basis.unalign(max - min).abs()
}

/// Direction of the longest edge of the corner loop, as `atan2(dy, dx)`.
///
/// Edges are `i → i+1 (mod 4)`; on ties the first edge in order wins.
pub fn compute_angle(corners: &[Vector2<f64>; 4]) -> f64 {
    let mut best = corners[1] - corners[0];
    let mut best_len = best.norm();
    for i in 1..4 {
        let edge = corners[(i + 1) % 4] - corners[i];
        let len = edge.norm();
        if len > best_len {
            best = edge;
            best_len = len;
        }
    }
    best.y.atan2(best.x)
}

/// Close the corner loop by repeating the first corner.
pub fn to_polygon(corners: &[Vector2<f64>; 4]) -> Vec<Vector2<f64>> {
    let mut ring = Vec::with_capacity(5);
    ring.extend_from_slice(corners);
    ring.push(corners[0]);
    ring
}

/// PCA oriented bounding box of a planar point set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientedBox {
    basis: AxisBasis,
    extent: AlignedExtent,
    corners: [Vector2<f64>; 4],
    center: Vector2<f64>,
    degenerate: bool,
}

impl OrientedBox {
    #[inline]
    pub fn basis(&self) -> &AxisBasis {
        &self.basis
    }

    /// Extent in the aligned frame (major axis first).
    #[inline]
    pub fn extent(&self) -> &AlignedExtent {
        &self.extent
    }

    /// Corners in the original frame; the loop is not closed.
    #[inline]
    pub fn corners(&self) -> &[Vector2<f64>; 4] {
        &self.corners
    }

    /// Closed ring: the four corners followed by the first one again.
    pub fn polygon(&self) -> Vec<Vector2<f64>> {
        to_polygon(&self.corners)
    }

    /// Center in the original frame.
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }

    /// Side lengths along the major and minor axes.
    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        self.extent.size()
    }

    /// See [`build_dimensions`].
    #[inline]
    pub fn dimensions(&self) -> Vector2<f64> {
        build_dimensions(self.extent.min, self.extent.max, &self.basis)
    }

    /// Angle of the longest edge relative to the x-axis, in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        compute_angle(&self.corners)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        let s = self.size();
        s.x * s.y
    }

    /// True when the covariance had a negligible minor eigenvalue.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Point-in-box test with an absolute tolerance in the aligned frame.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let q = self.basis.align(p) - self.extent.center;
        let h = self.extent.half_extent;
        q.x.abs() <= h.x + eps && q.y.abs() <= h.y + eps
    }
}

/// Full pipeline: axes, alignment, extent, corners.
pub fn oriented_bounding_box(points: &[Vector2<f64>], cfg: &ObbCfg) -> ObbResult<OrientedBox> {
    let basis = estimate_axes(points, cfg)?;
    let aligned = to_aligned(points, &basis);
    let extent = compute_extent(&aligned)?;
    let corners = build_corners(extent.center, extent.half_extent, &basis);
    Ok(OrientedBox {
        center: basis.unalign(extent.center),
        degenerate: basis.is_degenerate(cfg.eps_degenerate),
        basis,
        extent,
        corners,
    })
}

/// Boxes for many independent point sets, computed in parallel.
///
/// Output order matches input order; each entry fails or succeeds on its own.
pub fn oriented_bounding_boxes<S>(sets: &[S], cfg: &ObbCfg) -> Vec<ObbResult<OrientedBox>>
where
    S: AsRef<[Vector2<f64>]> + Sync,
{
    debug!(sets = sets.len(), "batch oriented bounding boxes");
    sets.par_iter()
        .map(|pts| oriented_bounding_box(pts.as_ref(), cfg))
        .collect()
}

/// Adapter entry point: extract points from `geom` under `policy`, then run the pipeline.
pub fn oriented_bounding_box_of(
    geom: &Geometry,
    policy: &PointSetCfg,
    cfg: &ObbCfg,
) -> ObbResult<OrientedBox> {
    let pts = to_point_set(geom, policy);
    oriented_bounding_box(&pts, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObbError;
    use crate::geom2::{convex_hull, ring_area};
    use crate::geometry::Polygon;
    use nalgebra::vector;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn obb(pts: &[Vector2<f64>]) -> OrientedBox {
        oriented_bounding_box(pts, &ObbCfg::default()).unwrap()
    }

    fn square() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]
    }

    fn assert_vec_near(a: Vector2<f64>, b: Vector2<f64>) {
        assert!((a - b).norm() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn unit_square() {
        let b = obb(&square());
        assert_vec_near(b.dimensions(), vector![1.0, 1.0]);
        assert!((b.area() - 1.0).abs() < 1e-9);
        assert!((ring_area(&b.polygon()) - 1.0).abs() < 1e-9);
        assert_vec_near(b.center(), vector![0.5, 0.5]);
    }

    #[test]
    fn rectangle() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 1.0],
            vector![0.0, 1.0],
        ];
        let b = obb(&pts);
        assert_vec_near(b.dimensions(), vector![2.0, 1.0]);
        assert_vec_near(b.size(), vector![2.0, 1.0]);
        assert!((ring_area(&b.polygon()) - 2.0).abs() < 1e-9);
        // Long edge is horizontal.
        assert!(b.angle().abs() < 1e-9);
    }

    #[test]
    fn shifted_square() {
        let pts = vec![
            vector![0.5, 0.5],
            vector![1.5, 0.5],
            vector![1.5, 1.5],
            vector![0.5, 1.5],
        ];
        let b = obb(&pts);
        assert_vec_near(b.dimensions(), vector![1.0, 1.0]);
        assert!((ring_area(&b.polygon()) - 1.0).abs() < 1e-9);
        assert_vec_near(b.center(), vector![1.0, 1.0]);
    }

    #[test]
    fn right_triangle_is_heuristic() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        let b = obb(&pts);
        assert_vec_near(b.dimensions(), vector![1.5, 0.5]);
        assert!((ring_area(&b.polygon()) - 1.0).abs() < 1e-9);
        // True sides are the hypotenuse and the altitude onto it.
        let s = std::f64::consts::SQRT_2;
        assert_vec_near(b.size(), vector![s, s / 2.0]);
        // Longest edge runs along the hypotenuse direction.
        assert!((b.angle() + FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn segment_is_degenerate() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
        let b = obb(&pts);
        assert!(b.is_degenerate());
        assert!(b.size().y.abs() < 1e-9);
        assert!((b.size().x - std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!(ring_area(&b.polygon()).abs() < 1e-9);
        assert!(b.area().abs() < 1e-9);
        // The literal dimension formula spreads the diagonal over both axes.
        assert_vec_near(b.dimensions(), vector![1.0, 1.0]);
    }

    #[test]
    fn huge_rectangle_keeps_its_dimensions() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1e200, 0.0],
            vector![1e200, 5e199],
            vector![0.0, 5e199],
        ];
        let b = obb(&pts);
        let dims = b.dimensions();
        assert!((dims - vector![1e200, 5e199]).norm() < 1e-9 * 1e200, "{dims:?}");
        assert!((b.center() - vector![5e199, 2.5e199]).norm() < 1e-9 * 1e200);
        assert!(!b.is_degenerate());
    }

    #[test]
    fn polygon_is_closed_and_corners_are_not() {
        let b = obb(&square());
        let ring = b.polygon();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert_eq!(&ring[..4], &b.corners()[..]);
        assert_ne!(b.corners()[0], b.corners()[3]);
    }

    #[test]
    fn corners_are_counterclockwise() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![3.0, 1.0],
            vector![2.5, 2.5],
            vector![-0.5, 1.5],
            vector![1.0, 0.8],
        ];
        let b = obb(&pts);
        assert!(ring_area(&b.polygon()) > 0.0);
    }

    #[test]
    fn angle_tie_break_takes_first_edge() {
        let corners = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert_eq!(compute_angle(&corners), 0.0);
        let corners = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 2.0],
            vector![0.0, 2.0],
        ];
        assert!((compute_angle(&corners) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn rotated_rectangle_angle_and_size() {
        let th: f64 = 0.4;
        let (c, s) = (th.cos(), th.sin());
        let rot = |x: f64, y: f64| vector![c * x - s * y + 5.0, s * x + c * y - 2.0];
        let pts = vec![rot(0.0, 0.0), rot(4.0, 0.0), rot(4.0, 1.0), rot(0.0, 1.0)];
        let b = obb(&pts);
        assert_vec_near(b.size(), vector![4.0, 1.0]);
        assert!((b.area() - 4.0).abs() < 1e-9);
        assert!((b.angle() - th).abs() < 1e-9);
        for p in &pts {
            assert!(b.contains_eps(*p, 1e-9));
        }
        assert!(!b.contains_eps(rot(5.0, 0.5), 1e-9));
    }

    #[test]
    fn errors_propagate() {
        let cfg = ObbCfg::default();
        assert_eq!(
            oriented_bounding_box(&[vector![1.0, 1.0]], &cfg),
            Err(ObbError::InsufficientData { distinct: 1 })
        );
        assert_eq!(
            oriented_bounding_box(&[], &cfg),
            Err(ObbError::InsufficientData { distinct: 0 })
        );
    }

    #[test]
    fn results_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OrientedBox>();
        assert_send_sync::<ObbError>();
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts: Vec<_> = (0..64)
            .map(|_| vector![rng.gen_range(-5.0..5.0), rng.gen_range(-1.0..1.0)])
            .collect();
        assert_eq!(obb(&pts), obb(&pts));
    }

    #[test]
    fn batch_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut sets: Vec<Vec<Vector2<f64>>> = (0..16)
            .map(|_| {
                (0..20)
                    .map(|_| vector![rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)])
                    .collect()
            })
            .collect();
        sets.push(vec![vector![0.0, 0.0]]);
        let cfg = ObbCfg::default();
        let batch = oriented_bounding_boxes(&sets, &cfg);
        assert_eq!(batch.len(), sets.len());
        for (set, res) in sets.iter().zip(&batch) {
            assert_eq!(res, &oriented_bounding_box(set, &cfg));
        }
        assert!(batch.last().unwrap().is_err());
    }

    #[test]
    fn geometry_entry_point() {
        let ring = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 1.0],
            vector![0.0, 1.0],
            vector![0.0, 0.0],
        ];
        let geom = Geometry::Polygon(Polygon::new(ring));
        let b = oriented_bounding_box_of(&geom, &PointSetCfg::default(), &ObbCfg::default())
            .unwrap();
        assert_vec_near(b.dimensions(), vector![2.0, 1.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let b = obb(&square());
        let json = serde_json::to_string(&b).unwrap();
        let back: OrientedBox = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }

    fn cloud() -> impl Strategy<Value = Vec<Vector2<f64>>> {
        prop::collection::vec(
            (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Vector2::new(x, y)),
            3..50,
        )
    }

    proptest! {
        #[test]
        fn box_covers_hull(pts in cloud()) {
            let b = obb(&pts);
            let hull = convex_hull(&pts);
            let hull_area = ring_area(&hull).abs();
            let box_area = ring_area(&b.polygon()).abs();
            prop_assert!(box_area + 1e-6 * (1.0 + hull_area) >= hull_area);
            for p in &pts {
                prop_assert!(b.contains_eps(*p, 1e-7));
            }
        }

        #[test]
        fn box_area_matches_size(pts in cloud()) {
            let b = obb(&pts);
            let ring = ring_area(&b.polygon());
            prop_assert!((ring - b.area()).abs() <= 1e-6 * (1.0 + b.area()));
        }
    }
}
