//! Depth table and building-block bindings.

use crate::common::{modulus_from_py, points_from_py, scan_from_py};
use halfdepth::api::{build_table, circular_distance, DepthCfg};
use pyo3::prelude::*;

/// Depth table as `(x, y, diamond, atan)` tuples in input order.
#[pyfunction]
#[pyo3(signature = (points, scan = "early-exit"))]
pub fn depth_table(
    points: Vec<(f64, f64)>,
    scan: &str,
) -> PyResult<Vec<(f64, f64, usize, usize)>> {
    let pts = points_from_py(points)?;
    let table = build_table(&pts, DepthCfg::with_scan(scan_from_py(scan)?));
    Ok(table
        .iter()
        .map(|e| (e.point.x, e.point.y, e.record.diamond, e.record.atan))
        .collect())
}

#[pyfunction]
pub fn diamond_angle(x: f64, y: f64) -> f64 {
    halfdepth::api::diamond_angle(x, y)
}

#[pyfunction]
pub fn atan_degrees(x: f64, y: f64) -> f64 {
    halfdepth::api::atan_degrees(x, y)
}

#[pyfunction]
#[pyo3(name = "circular_distance")]
pub fn circular_distance_py(a: f64, b: f64, modulus: f64) -> PyResult<f64> {
    Ok(circular_distance(a, b, modulus_from_py(modulus)?))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(depth_table, m)?)?;
    m.add_function(wrap_pyfunction!(diamond_angle, m)?)?;
    m.add_function(wrap_pyfunction!(atan_degrees, m)?)?;
    m.add_function(wrap_pyfunction!(circular_distance_py, m)?)?;
    Ok(())
}
