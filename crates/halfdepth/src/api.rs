//! Curated API surface for bindings and tools (UNSTABLE).
//!
//! - Prefer these re-exports over reaching into submodules from other crates.
//! - Breaking changes are allowed and expected.

// Depth table and configuration
pub use crate::depth::{
    build_table, build_table_par, depth_of, record_for, DepthCfg, DepthEntry, DepthRecord,
    DepthTable, Estimator, Scan,
};
// Building blocks
pub use crate::depth::{
    angles_of, atan_degrees, circular_distance, diamond_angle, half_circle_count, min_depth,
    recenter,
};
// Random point sets
pub use crate::depth::rand::{
    draw_point_cloud, PointCloudCfg, PointCount, ReplayToken as CloudReplay, Spread,
};
