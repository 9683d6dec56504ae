//! Depth table for a small bagplot demo set.
//!
//! Usage:
//!   cargo run -p halfdepth --example bagplot_demo
//!   cargo run -p halfdepth --example bagplot_demo -- sorted
//!
//! Prints one row per point with its Diamond and ATan depth.

use halfdepth::{build_table, points_from_pairs, DepthCfg, Scan};

const DEMO: [(f64, f64); 11] = [
    (634.0, 76.0),
    (241.0, 351.0),
    (761.0, 580.0),
    (43.0, 608.0),
    (579.0, 685.0),
    (345.0, 687.0),
    (246.0, 710.0),
    (315.0, 862.0),
    (315.0, 954.0),
    (322.0, 980.0),
    (318.5, 686.0),
];

fn main() -> Result<(), String> {
    let scan = scan_arg(std::env::args().nth(1))?;
    let pts = points_from_pairs(&DEMO);
    let table = build_table(&pts, DepthCfg::with_scan(scan));
    println!("{:>8} {:>8} {:>8} {:>8}", "x", "y", "Diamond", "ATan");
    for e in &table {
        println!(
            "{:>8} {:>8} {:>8} {:>8}",
            e.point.x, e.point.y, e.record.diamond, e.record.atan
        );
    }
    Ok(())
}

/// Scan named by the first argument; unknown names are an error.
fn scan_arg(arg: Option<String>) -> Result<Scan, String> {
    match arg {
        Some(s) => s.parse::<Scan>(),
        None => Ok(Scan::default()),
    }
}
