//! Half-circle depth of 2D point sets.
//!
//! Purpose
//! - For every point of a finite set, re-express all other points as angles around
//!   it and report the minimal number of points inside a half-circle window centered
//!   on one of those angles. Low scores mark candidate outliers of a bagplot, high
//!   scores mark central points.
//! - Two angle metrics are computed side by side: the division-only diamond angle
//!   (modulus 4) and `atan2` in degrees (modulus 360).
//!
//! Conventions
//! - Coincidence is exact coordinate equality; coincident points never see each other.
//! - A point with no distinct neighbours has depth 0 under both metrics.
//! - The window boundary is inclusive: distance `<= modulus / 4`.
//!
//! Code cross-refs: `recenter`, `angle`, `half_circle`, `table::build_table`

mod angle;
mod half_circle;
pub mod rand;
mod recenter;
mod table;
mod types;

pub use angle::{angles_of, atan_degrees, circular_distance, diamond_angle};
pub use half_circle::{
    half_circle_count, min_depth, min_half_circle_depth, min_half_circle_depth_exhaustive,
    min_half_circle_depth_sorted,
};
pub use recenter::recenter;
pub use table::{build_table, build_table_par, depth_of, record_for, DepthEntry, DepthTable};
pub use types::{DepthCfg, DepthRecord, Estimator, Scan};
