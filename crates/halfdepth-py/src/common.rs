use halfdepth::{Scan, Vec2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(points: Vec<(f64, f64)>) -> PyResult<Vec<Vec2<f64>>> {
    points
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| {
            if x.is_finite() && y.is_finite() {
                Ok(Vec2::new(x, y))
            } else {
                Err(PyValueError::new_err(format!(
                    "point {i} has a non-finite coordinate ({x}, {y})"
                )))
            }
        })
        .collect()
}

pub fn scan_from_py(scan: &str) -> PyResult<Scan> {
    scan.parse::<Scan>().map_err(PyValueError::new_err)
}

/// Circular modulus; must be finite and positive.
pub fn modulus_from_py(modulus: f64) -> PyResult<f64> {
    if modulus.is_finite() && modulus > 0.0 {
        Ok(modulus)
    } else {
        Err(PyValueError::new_err(format!(
            "modulus must be finite and positive, got {modulus}"
        )))
    }
}
