//! PyO3 bindings for selected `halfdepth` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as `(x, y)`
//!   tuples, tables come back as `(x, y, diamond, atan)` tuples.
//! - Input validation (finite coordinates) happens here, not in the core.

use pyo3::prelude::*;

mod common;
mod depth;

#[pymodule]
fn halfdepth_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", halfdepth::VERSION)?;
    depth::register(m)?;
    Ok(())
}
