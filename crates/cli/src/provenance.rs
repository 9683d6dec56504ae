//! Sidecar files describing how a depth artifact was produced.
//!
//! `<stem>.provenance.json` sits next to every file the CLI writes and records the
//! command, its parameters, the input file, statistics of the point set, and the
//! depth ranges of the table that was written.

use anyhow::{Context, Result};
use halfdepth::{DepthTable, Estimator, Vec2};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Size of a point set and how many of its points repeat an earlier one exactly.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PointStats {
    pub points: usize,
    pub duplicates: usize,
}

impl PointStats {
    pub fn of(pts: &[Vec2<f64>]) -> Self {
        let duplicates = pts
            .iter()
            .enumerate()
            .filter(|&(i, p)| pts[..i].iter().any(|q| q.x == p.x && q.y == p.y))
            .count();
        Self {
            points: pts.len(),
            duplicates,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ScoreRange {
    pub min: usize,
    pub max: usize,
}

/// Row count and per-estimator score range of a written depth table.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct DepthSummary {
    pub rows: usize,
    pub diamond: Option<ScoreRange>,
    pub atan: Option<ScoreRange>,
}

impl DepthSummary {
    pub fn of(table: &DepthTable) -> Self {
        let range = |est: Estimator| {
            let scores = table.by_estimator(est);
            let min = scores.iter().copied().min()?;
            let max = scores.iter().copied().max()?;
            Some(ScoreRange { min, max })
        };
        Self {
            rows: table.len(),
            diamond: range(Estimator::Diamond),
            atan: range(Estimator::ATan),
        }
    }
}

/// Contents of one sidecar file.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub command: &'static str,
    pub version: &'static str,
    pub code_rev: String,
    pub params: Value,
    pub input: Option<String>,
    pub points: Option<PointStats>,
    pub depths: Option<DepthSummary>,
    pub output: String,
}

impl Sidecar {
    pub fn new(command: &'static str, artifact: &Path, params: Value) -> Self {
        Self {
            command,
            version: halfdepth::VERSION,
            code_rev: code_rev(),
            params,
            input: None,
            points: None,
            depths: None,
            output: artifact.display().to_string(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.input = Some(path.display().to_string());
        self
    }

    pub fn points(mut self, pts: &[Vec2<f64>]) -> Self {
        self.points = Some(PointStats::of(pts));
        self
    }

    pub fn depths(mut self, table: &DepthTable) -> Self {
        self.depths = Some(DepthSummary::of(table));
        self
    }

    /// Write the sidecar next to `self.output` and return its path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = sidecar_path(Path::new(&self.output));
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

/// `dir/depths.json` → `dir/depths.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit of the build: `GIT_COMMIT` at compile or run time, else `git rev-parse HEAD`.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use halfdepth::{build_table, points_from_pairs, DepthCfg};
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_swaps_extension() {
        let derived = sidecar_path(Path::new("/tmp/output/depths.json"));
        assert_eq!(derived, Path::new("/tmp/output/depths.provenance.json"));
    }

    #[test]
    fn point_stats_count_exact_repeats() {
        let pts = points_from_pairs(&[
            (1.0, 1.0),
            (2.0, 0.0),
            (1.0, 1.0),
            (1.0, 1.0),
            (0.0, 2.0),
        ]);
        assert_eq!(
            PointStats::of(&pts),
            PointStats {
                points: 5,
                duplicates: 2
            }
        );
        assert_eq!(PointStats::of(&[]).duplicates, 0);
    }

    #[test]
    fn depth_summary_ranges_per_estimator() {
        let pts = points_from_pairs(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (-1.0, 0.0),
            (0.0, -1.0),
        ]);
        let summary = DepthSummary::of(&build_table(&pts, DepthCfg::default()));
        assert_eq!(summary.rows, 5);
        assert_eq!(summary.diamond, Some(ScoreRange { min: 3, max: 4 }));
        assert_eq!(summary.atan, Some(ScoreRange { min: 3, max: 4 }));
        let empty = DepthSummary::of(&DepthTable::default());
        assert_eq!(empty.rows, 0);
        assert!(empty.atan.is_none());
    }

    #[test]
    fn sidecar_records_input_points_and_depths() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("depths.json");
        fs::write(&artifact, "[]").unwrap();
        let pts = points_from_pairs(&[(2.0, 2.0), (2.0, 2.0)]);
        let table = build_table(&pts, DepthCfg::default());
        let path = Sidecar::new("run", &artifact, serde_json::json!({"scan": "sorted"}))
            .input(Path::new("points.csv"))
            .points(&pts)
            .depths(&table)
            .write()
            .unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "run");
        assert_eq!(parsed["input"], "points.csv");
        assert_eq!(parsed["output"], artifact.display().to_string());
        assert_eq!(parsed["params"]["scan"], "sorted");
        assert_eq!(parsed["points"]["duplicates"], 1);
        assert_eq!(parsed["depths"]["rows"], 2);
        assert_eq!(parsed["depths"]["diamond"]["max"], 0);
    }
}
