//! Basic PCA types and tolerances.
//!
//! - `ObbCfg`: centralizes the epsilons used by the pipeline.
//! - `AxisBasis`: orthonormal principal-axis basis (rows are axes).
//! - `AlignedExtent`: min/max, half-extent and center in the aligned frame.

use nalgebra::{Matrix2, Vector2};

/// Pipeline configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObbCfg {
    /// Relative eigenvalue ratio `λ_minor / λ_major` at or below which the
    /// basis is reported as degenerate.
    pub eps_degenerate: f64,
    /// Points closer than this (max-norm) to the first point count as the same
    /// point when checking for at least two distinct inputs.
    pub eps_distinct: f64,
}

impl Default for ObbCfg {
    fn default() -> Self {
        Self {
            eps_degenerate: 1e-12,
            eps_distinct: 0.0,
        }
    }
}

/// Orthonormal principal-axis basis.
///
/// Stored as a matrix whose rows are the axes: row 0 is the major axis
/// (largest covariance eigenvalue), row 1 the minor axis. The basis is always
/// a proper rotation (`det = +1`), and the major axis points into the half-plane
/// `x > 0` (or along `+y` when vertical).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisBasis {
    m: Matrix2<f64>,
    /// Eigenvalues of the covariance of the points divided by `scale`.
    eigenvalues: Vector2<f64>,
    scale: f64,
}

impl AxisBasis {
    /// Build the canonical basis from a (not necessarily signed or normalized)
    /// major direction. Returns `None` for a zero or non-finite direction.
    pub fn from_major_axis(major: Vector2<f64>, eigenvalues: Vector2<f64>) -> Option<Self> {
        let norm = major.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return None;
        }
        let mut u = major / norm;
        if u.x < 0.0 || (u.x == 0.0 && u.y < 0.0) {
            u = -u;
        }
        let v = Vector2::new(-u.y, u.x);
        Some(Self {
            m: Matrix2::new(u.x, u.y, v.x, v.y),
            eigenvalues,
            scale: 1.0,
        })
    }

    /// Record that `eigenvalues` were measured on points divided by `scale`.
    #[inline]
    pub(crate) fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Rotation basis with rows as axes.
    #[inline]
    pub fn matrix(&self) -> Matrix2<f64> {
        self.m
    }

    /// Covariance eigenvalues `(λ_major, λ_minor)`.
    ///
    /// Overflows to infinity for coordinates beyond roughly `1e154`; the axes
    /// and `is_degenerate` are unaffected.
    #[inline]
    pub fn eigenvalues(&self) -> Vector2<f64> {
        self.eigenvalues * (self.scale * self.scale)
    }

    #[inline]
    pub fn major(&self) -> Vector2<f64> {
        Vector2::new(self.m[(0, 0)], self.m[(0, 1)])
    }

    #[inline]
    pub fn minor(&self) -> Vector2<f64> {
        Vector2::new(self.m[(1, 0)], self.m[(1, 1)])
    }

    /// Row-vector product `p · basis⁻¹`: coordinates of `p` along the axes.
    #[inline]
    pub fn align(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p
    }

    /// Row-vector product `q · basis`: back to the original frame.
    #[inline]
    pub fn unalign(&self, q: Vector2<f64>) -> Vector2<f64> {
        self.m.transpose() * q
    }

    /// True when the minor eigenvalue is negligible relative to the major one
    /// (collinear input).
    #[inline]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.eigenvalues.y.abs() <= eps * self.eigenvalues.x.abs()
    }
}

/// Axis-aligned extent of points expressed in the PCA frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignedExtent {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
    pub half_extent: Vector2<f64>,
    pub center: Vector2<f64>,
}

impl AlignedExtent {
    #[inline]
    pub fn from_min_max(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        let half_extent = (max - min) * 0.5;
        Self {
            min,
            max,
            half_extent,
            center: min + half_extent,
        }
    }

    /// Full side lengths along the major and minor axes.
    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }
}
