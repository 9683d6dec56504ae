//! Half-circle depth of planar point sets.
//!
//! For each point of a finite set, the minimal number of points found in a
//! half-circle window around it, under two angle metrics. Used to rank points for
//! bagplot construction: low depth marks outlier candidates.
//!
//! API Policy
//! - Pure computation only. Loading points and presenting results belong to callers
//!   (see the `cli` crate for CSV/JSON and a text table).

pub mod api;
pub mod depth;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use depth::{build_table, DepthCfg, DepthRecord, DepthTable, Estimator, Scan};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::depth::rand::{
        draw_point_cloud, PointCloudCfg, PointCount, ReplayToken, Spread,
    };
    pub use crate::depth::{
        build_table, build_table_par, depth_of, DepthCfg, DepthEntry, DepthRecord, DepthTable,
        Estimator, Scan,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Build a point from a coordinate pair.
#[inline]
pub fn point(x: f64, y: f64) -> Vec2<f64> {
    Vec2::new(x, y)
}

/// Convert `(x, y)` pairs into points.
pub fn points_from_pairs(pairs: &[(f64, f64)]) -> Vec<Vec2<f64>> {
    pairs.iter().map(|&(x, y)| point(x, y)).collect()
}
