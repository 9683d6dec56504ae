use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use halfdepth::depth::build_table_par;
use halfdepth::depth::rand::{draw_point_cloud, PointCloudCfg, PointCount, ReplayToken, Spread};
use halfdepth::{DepthCfg, Scan};
use provenance::Sidecar;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod points;
mod provenance;

#[derive(Parser)]
#[command(name = "halfdepth")]
#[command(about = "Half-circle depth of 2D point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute depths for a CSV of points and write JSON plus a provenance sidecar
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// early-exit, exhaustive or sorted
        #[arg(long, default_value_t = Scan::EarlyExit)]
        scan: Scan,
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },
    /// Print the depth table of a CSV of points
    Show {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = Scan::EarlyExit)]
        scan: Scan,
    },
    /// Write a reproducible Gaussian point cloud as CSV
    Sample {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1.0)]
        sigma: f64,
        /// Probability that a point copies an earlier one
        #[arg(long, default_value_t = 0.0)]
        duplicates: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            scan,
            threads,
        } => run(&input, &out, scan, threads),
        Action::Show { input, scan } => show(&input, scan),
        Action::Sample {
            out,
            count,
            seed,
            sigma,
            duplicates,
        } => sample(&out, count, seed, sigma, duplicates),
        Action::Report => report(),
    }
}

fn run(input: &Path, out: &Path, scan: Scan, threads: usize) -> Result<()> {
    let pts = points::read_points(input)?;
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        %scan,
        threads,
        points = pts.len(),
        "run"
    );
    let table = build_table_par(&pts, DepthCfg::with_scan(scan), threads);

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&output::rows(&table))?)
        .with_context(|| format!("writing {}", out.display()))?;

    let prov = Sidecar::new(
        "run",
        out,
        serde_json::json!({ "scan": scan.as_str(), "threads": threads }),
    )
    .input(input)
    .points(&pts)
    .depths(&table)
    .write()?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn show(input: &Path, scan: Scan) -> Result<()> {
    let pts = points::read_points(input)?;
    tracing::info!(input = %input.display(), %scan, points = pts.len(), "show");
    let table = halfdepth::build_table(&pts, DepthCfg::with_scan(scan));
    print!("{}", output::render_text(&table));
    Ok(())
}

fn sample(out: &Path, count: usize, seed: u64, sigma: f64, duplicates: f64) -> Result<()> {
    tracing::info!(out = %out.display(), count, seed, sigma, duplicates, "sample");
    let cfg = PointCloudCfg {
        count: PointCount::Fixed(count),
        spread: Spread::Gaussian { sigma },
        duplicate_frac: duplicates,
    };
    let pts = draw_point_cloud(cfg, ReplayToken { seed, index: 0 });
    points::write_points(out, &pts)?;
    Sidecar::new(
        "sample",
        out,
        serde_json::json!({
            "count": count,
            "seed": seed,
            "sigma": sigma,
            "duplicates": duplicates,
        }),
    )
    .points(&pts)
    .write()?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "version": halfdepth::VERSION,
        "code_rev": provenance::code_rev(),
        "scans": [Scan::EarlyExit.as_str(), Scan::Exhaustive.as_str(), Scan::Sorted.as_str()],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn run_writes_rows_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("plus.csv");
        fs::write(&input, "x,y\n0,0\n1,0\n0,1\n-1,0\n0,-1\n1,0\n").unwrap();
        let out = dir.path().join("out/depths.json");
        run(&input, &out, Scan::Sorted, 2).unwrap();

        let rows: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["index"], 0);
        assert_eq!(rows[0]["atan"], 3);
        assert_eq!(rows[5]["x"], 1.0);

        let side = dir.path().join("out/depths.provenance.json");
        let side: Value = serde_json::from_slice(&fs::read(side).unwrap()).unwrap();
        assert_eq!(side["command"], "run");
        assert_eq!(side["input"], input.display().to_string());
        assert_eq!(side["params"]["scan"], "sorted");
        assert_eq!(side["points"]["points"], 6);
        assert_eq!(side["points"]["duplicates"], 1);
        assert_eq!(side["depths"]["rows"], 6);
        assert_eq!(side["depths"]["atan"]["min"], 3);
    }

    #[test]
    fn run_rejects_non_numeric_rows() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.csv");
        fs::write(&input, "x,y\n1,2\n3,\n").unwrap();
        let out = dir.path().join("depths.json");
        assert!(run(&input, &out, Scan::EarlyExit, 1).is_err());
        assert!(!out.exists());
    }
}
