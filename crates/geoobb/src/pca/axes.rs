//! Principal-axis estimation from the biased covariance of a point set.
//!
//! - `covariance`: 2×2 population covariance (divide by N).
//! - `estimate_axes`: symmetric eigendecomposition, canonicalized into an `AxisBasis`.
use nalgebra::{Matrix2, Vector2};
use tracing::debug;

use super::types::{AxisBasis, ObbCfg};
use crate::error::{ObbError, ObbResult};

fn check_finite(points: &[Vector2<f64>]) -> ObbResult<()> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(ObbError::non_finite(index)),
        None => Ok(()),
    }
}

/// Reject non-finite coordinates and inputs without two distinct points.
fn validate_points(points: &[Vector2<f64>], eps_distinct: f64) -> ObbResult<()> {
    check_finite(points)?;
    let Some(first) = points.first() else {
        return Err(ObbError::insufficient_data(0));
    };
    let spread = points.iter().any(|p| (p - first).amax() > eps_distinct);
    if !spread {
        return Err(ObbError::insufficient_data(1));
    }
    Ok(())
}

/// Biased (population) covariance of the x/y coordinates.
///
/// Needs at least two points; coincident points are accepted here and simply
/// produce a zero matrix. Entries overflow for coordinates beyond roughly
/// `1e154`; `estimate_axes` rescales before calling this.
pub fn covariance(points: &[Vector2<f64>]) -> ObbResult<Matrix2<f64>> {
    if points.len() < 2 {
        return Err(ObbError::insufficient_data(points.len()));
    }
    check_finite(points)?;
    let n = points.len() as f64;
    let mean = points.iter().copied().sum::<Vector2<f64>>() / n;
    let mut cov = Matrix2::zeros();
    for p in points {
        let d = p - mean;
        cov += d * d.transpose();
    }
    Ok(cov / n)
}

/// Principal axes of `points` as an orthonormal basis (rows are axes).
///
/// Collinear input is not an error: the minor eigenvalue is zero and the
/// resulting box collapses to a segment.
pub fn estimate_axes(points: &[Vector2<f64>], cfg: &ObbCfg) -> ObbResult<AxisBasis> {
    validate_points(points, cfg.eps_distinct)?;
    // Axes are invariant under uniform scaling; dividing by the largest
    // coordinate keeps `d·dᵀ` finite for any finite input.
    let scale = points.iter().map(|p| p.amax()).fold(0.0, f64::max);
    let scaled: Vec<Vector2<f64>> = points.iter().map(|p| p / scale).collect();
    let cov = covariance(&scaled)?;
    let eig = cov.symmetric_eigen();
    let (i_major, i_minor) = if eig.eigenvalues[0] >= eig.eigenvalues[1] {
        (0, 1)
    } else {
        (1, 0)
    };
    // Round-off can push a zero eigenvalue slightly negative.
    let eigenvalues = Vector2::new(
        eig.eigenvalues[i_major].max(0.0),
        eig.eigenvalues[i_minor].max(0.0),
    );
    let major: Vector2<f64> = eig.eigenvectors.column(i_major).into_owned();
    let basis = AxisBasis::from_major_axis(major, eigenvalues)
        .ok_or_else(|| ObbError::insufficient_data(1))?
        .with_scale(scale);
    if basis.is_degenerate(cfg.eps_degenerate) {
        debug!(
            n = points.len(),
            lambda_major = basis.eigenvalues().x,
            lambda_minor = basis.eigenvalues().y,
            "degenerate covariance; box collapses to a segment"
        );
    }
    Ok(basis)
}
