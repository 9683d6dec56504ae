//! Basic types for half-circle depth.
//!
//! - `Estimator`: which angle metric to use, with its circular modulus.
//! - `Scan`: evaluation strategy for the minimal half-circle depth.
//! - `DepthCfg`: configuration bundle passed to the table builder.
//! - `DepthRecord`: the pair of scores kept per input point.
//!
//! Code cross-refs: `angle::{diamond_angle, atan_degrees}`, `half_circle`, `table`

use std::fmt;
use std::str::FromStr;

/// Angle metric used to express offsets as a scalar direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Estimator {
    /// Division-only monotone proxy with range [0, 4).
    Diamond,
    /// `atan2` in degrees with range (-180, 180].
    ATan,
}

impl Estimator {
    pub const ALL: [Estimator; 2] = [Estimator::Diamond, Estimator::ATan];

    /// Full-circle period of the angle scale.
    #[inline]
    pub fn modulus(self) -> f64 {
        match self {
            Estimator::Diamond => 4.0,
            Estimator::ATan => 360.0,
        }
    }

    /// Angle of the offset `(x, y)` under this metric.
    #[inline]
    pub fn angle(self, x: f64, y: f64) -> f64 {
        match self {
            Estimator::Diamond => super::angle::diamond_angle(x, y),
            Estimator::ATan => super::angle::atan_degrees(x, y),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Estimator::Diamond => "Diamond",
            Estimator::ATan => "ATan",
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the minimum over reference directions is evaluated.
///
/// All variants return the same depth for the same angle list; they differ in cost only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scan {
    /// Reference angles in list order, stop at the first count of 1. O(n²).
    #[default]
    EarlyExit,
    /// Every reference angle is evaluated. O(n²).
    Exhaustive,
    /// Sort once, then count each window with binary search. O(n log n).
    Sorted,
}

impl Scan {
    pub fn as_str(self) -> &'static str {
        match self {
            Scan::EarlyExit => "early-exit",
            Scan::Exhaustive => "exhaustive",
            Scan::Sorted => "sorted",
        }
    }
}

impl fmt::Display for Scan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "early-exit" | "early_exit" | "earlyexit" => Ok(Scan::EarlyExit),
            "exhaustive" => Ok(Scan::Exhaustive),
            "sorted" => Ok(Scan::Sorted),
            other => Err(format!(
                "unknown scan '{other}' (expected early-exit, exhaustive or sorted)"
            )),
        }
    }
}

/// Depth computation configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthCfg {
    pub scan: Scan,
}

impl DepthCfg {
    #[inline]
    pub fn with_scan(scan: Scan) -> Self {
        Self { scan }
    }
}

/// Minimal half-circle occupancy of one point under both estimators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DepthRecord {
    pub diamond: usize,
    pub atan: usize,
}

impl DepthRecord {
    #[inline]
    pub fn score(&self, est: Estimator) -> usize {
        match est {
            Estimator::Diamond => self.diamond,
            Estimator::ATan => self.atan,
        }
    }

    /// The smaller of the two scores.
    #[inline]
    pub fn min(&self) -> usize {
        self.diamond.min(self.atan)
    }
}
