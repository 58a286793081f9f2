//! Input boundary: geometry values to point sets.
//!
//! Point-set policy is explicit (`PointSetCfg`): whether to drop the repeated
//! closing vertex of closed rings, and whether to deduplicate coincident points.
//! Both change the covariance weights, and therefore the estimated axes, for
//! inputs with repeated vertices.

use nalgebra::Vector2;
use tracing::trace;

use crate::geom2::lex_cmp;

/// Polygon with an exterior ring and optional holes. Rings may be closed
/// (first vertex repeated) or open.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    pub exterior: Vec<Vector2<f64>>,
    pub interiors: Vec<Vec<Vector2<f64>>>,
}

impl Polygon {
    pub fn new(exterior: Vec<Vector2<f64>>) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }
}

/// Planar geometry accepted by the adapter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Vector2<f64>),
    MultiPoint(Vec<Vector2<f64>>),
    LineString(Vec<Vector2<f64>>),
    MultiLineString(Vec<Vec<Vector2<f64>>>),
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    fn kind(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }
}

/// Point-set extraction policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSetCfg {
    /// Remove coincident points; the result is sorted by (x, y).
    pub dedup: bool,
    /// Drop the last vertex of a ring when it repeats the first.
    pub drop_closing_vertex: bool,
}

impl Default for PointSetCfg {
    fn default() -> Self {
        Self {
            dedup: true,
            drop_closing_vertex: true,
        }
    }
}

impl PointSetCfg {
    /// Every coordinate as given, in input order.
    pub fn raw() -> Self {
        Self {
            dedup: false,
            drop_closing_vertex: false,
        }
    }
}

fn push_ring(out: &mut Vec<Vector2<f64>>, ring: &[Vector2<f64>], drop_closing: bool) {
    let closed = ring.len() > 1 && ring.first() == ring.last();
    let take = if drop_closing && closed {
        ring.len() - 1
    } else {
        ring.len()
    };
    out.extend_from_slice(&ring[..take]);
}

/// Flatten `geom` into the points the OBB pipeline consumes.
///
/// Polygons contribute their exterior rings only: holes lie inside the
/// exterior and cannot change the box.
pub fn to_point_set(geom: &Geometry, cfg: &PointSetCfg) -> Vec<Vector2<f64>> {
    let drop = cfg.drop_closing_vertex;
    let mut out = Vec::new();
    match geom {
        Geometry::Point(p) => out.push(*p),
        Geometry::MultiPoint(ps) => out.extend_from_slice(ps),
        Geometry::LineString(line) => push_ring(&mut out, line, drop),
        Geometry::MultiLineString(lines) => {
            for line in lines {
                push_ring(&mut out, line, drop);
            }
        }
        Geometry::Polygon(poly) => push_ring(&mut out, &poly.exterior, drop),
        Geometry::MultiPolygon(polys) => {
            for poly in polys {
                push_ring(&mut out, &poly.exterior, drop);
            }
        }
    }
    let raw = out.len();
    if cfg.dedup {
        out.sort_by(lex_cmp);
        out.dedup();
    }
    trace!(kind = geom.kind(), raw, kept = out.len(), "point set extracted");
    out
}
