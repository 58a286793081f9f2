//! Print the OBB of the reference shapes as JSON.
//!
//! Usage:
//!   cargo run -p geoobb --example obb_report
//!
//! Logs go to stderr at DEBUG level; JSON goes to stdout.

use anyhow::Result;
use geoobb::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn polygon(coords: &[(f64, f64)]) -> Geometry {
    let mut ring: Vec<_> = coords.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
    ring.push(ring[0]);
    Geometry::Polygon(Polygon::new(ring))
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let shapes = [
        ("square", polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])),
        ("rectangle", polygon(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)])),
        ("losange", polygon(&[(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)])),
        ("triangle", polygon(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])),
        (
            "line",
            Geometry::LineString(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]),
        ),
    ];

    let policy = PointSetCfg::default();
    let cfg = ObbCfg::default();
    let mut rows = Vec::with_capacity(shapes.len());
    for (name, geom) in &shapes {
        let obb = oriented_bounding_box_of(geom, &policy, &cfg)?;
        tracing::info!(shape = *name, area = obb.area(), degenerate = obb.is_degenerate(), "obb");
        let corners: Vec<[f64; 2]> = obb.polygon().iter().map(|p| [p.x, p.y]).collect();
        rows.push(serde_json::json!({
            "name": name,
            "polygon": corners,
            "dimensions": [obb.dimensions().x, obb.dimensions().y],
            "angle": obb.angle(),
            "area": obb.area(),
        }));
    }
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
