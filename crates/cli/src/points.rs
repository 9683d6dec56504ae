//! CSV input/output of point sets (columns `x`, `y`).

use anyhow::{bail, Context, Result};
use halfdepth::Vec2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read all rows of the `x` and `y` columns as points.
///
/// Missing and non-finite coordinates are rejected; the depth core assumes finite input.
pub fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut pts = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => pts.push(Vec2::new(x, y)),
            _ => bail!(
                "{}: row {row} has a missing or non-finite coordinate ({x:?}, {y:?})",
                path.display()
            ),
        }
    }
    Ok(pts)
}

/// Write points as a two-column CSV with header.
pub fn write_points(path: &Path, pts: &[Vec2<f64>]) -> Result<()> {
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => &xs, "y" => &ys)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
