//! Depth table: per-point Diamond and ATan depth over a whole point set.
//!
//! Every input point is an origin in turn: recenter, map offsets to angles, take the
//! minimal half-circle occupancy. Duplicates are evaluated independently and each
//! keeps its own entry.

use nalgebra::Vector2;

use super::angle::angles_of;
use super::half_circle::min_depth;
use super::recenter::recenter;
use super::types::{DepthCfg, DepthRecord, Estimator};

/// One row of a `DepthTable`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthEntry {
    /// Position of the point in the input sequence.
    pub index: usize,
    /// Original (un-recentered) coordinates.
    pub point: Vector2<f64>,
    pub record: DepthRecord,
}

/// Mapping from input point to its `DepthRecord`, stored in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepthTable {
    pub entries: Vec<DepthEntry>,
}

impl DepthTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DepthEntry> {
        self.entries.iter()
    }

    /// Record of the first entry whose coordinates equal `p` exactly.
    pub fn get(&self, p: Vector2<f64>) -> Option<DepthRecord> {
        self.entries
            .iter()
            .find(|e| e.point.x == p.x && e.point.y == p.y)
            .map(|e| e.record)
    }

    /// Records of every entry at `p` (one per duplicate).
    pub fn records_for(&self, p: Vector2<f64>) -> Vec<DepthRecord> {
        self.entries
            .iter()
            .filter(|e| e.point.x == p.x && e.point.y == p.y)
            .map(|e| e.record)
            .collect()
    }

    /// Scores under `est`, in input order.
    pub fn by_estimator(&self, est: Estimator) -> Vec<usize> {
        self.entries.iter().map(|e| e.record.score(est)).collect()
    }
}

impl<'a> IntoIterator for &'a DepthTable {
    type Item = &'a DepthEntry;
    type IntoIter = std::slice::Iter<'a, DepthEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Depth of `origin` within `points` under a single estimator.
pub fn depth_of(
    origin: Vector2<f64>,
    points: &[Vector2<f64>],
    est: Estimator,
    cfg: DepthCfg,
) -> usize {
    let offsets = recenter(origin, points);
    min_depth(&angles_of(&offsets, est), est.modulus(), cfg.scan)
}

/// Both scores for `origin`; offsets are computed once and shared by the estimators.
pub fn record_for(origin: Vector2<f64>, points: &[Vector2<f64>], cfg: DepthCfg) -> DepthRecord {
    let offsets = recenter(origin, points);
    let score = |est: Estimator| min_depth(&angles_of(&offsets, est), est.modulus(), cfg.scan);
    DepthRecord {
        diamond: score(Estimator::Diamond),
        atan: score(Estimator::ATan),
    }
}

/// Build the depth table for every point of `points`.
pub fn build_table(points: &[Vector2<f64>], cfg: DepthCfg) -> DepthTable {
    tracing::debug!(points = points.len(), scan = %cfg.scan, "build_table");
    let entries = points
        .iter()
        .enumerate()
        .map(|(index, &point)| entry_for(index, point, points, cfg))
        .collect();
    DepthTable { entries }
}

/// `build_table` split across up to `threads` scoped workers.
///
/// Points are chunked contiguously, so the result equals `build_table` entry for entry.
pub fn build_table_par(points: &[Vector2<f64>], cfg: DepthCfg, threads: usize) -> DepthTable {
    let threads = threads.max(1).min(points.len().max(1));
    if threads == 1 {
        return build_table(points, cfg);
    }
    tracing::debug!(points = points.len(), scan = %cfg.scan, threads, "build_table_par");
    let chunk = points.len().div_ceil(threads);
    let entries = std::thread::scope(|s| {
        let handles: Vec<_> = points
            .chunks(chunk)
            .enumerate()
            .map(|(k, part)| {
                s.spawn(move || {
                    part.iter()
                        .enumerate()
                        .map(|(j, &point)| entry_for(k * chunk + j, point, points, cfg))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let mut out = Vec::with_capacity(points.len());
        for h in handles {
            match h.join() {
                Ok(part) => out.extend(part),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        out
    });
    DepthTable { entries }
}

fn entry_for(
    index: usize,
    point: Vector2<f64>,
    points: &[Vector2<f64>],
    cfg: DepthCfg,
) -> DepthEntry {
    let record = record_for(point, points, cfg);
    tracing::trace!(
        index,
        x = point.x,
        y = point.y,
        diamond = record.diamond,
        atan = record.atan,
        "depth_entry"
    );
    DepthEntry {
        index,
        point,
        record,
    }
}
