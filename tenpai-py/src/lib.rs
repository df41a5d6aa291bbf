//! Python bindings for the tenpai hand evaluation engine.

use pyo3::prelude::*;

mod eval;

#[pymodule]
fn _tenpai(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(eval::tile_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(eval::tile_counts, m)?)?;
    m.add_function(wrap_pyfunction!(eval::parse_hand, m)?)?;
    m.add_function(wrap_pyfunction!(eval::is_winning_hand, m)?)?;
    m.add_function(wrap_pyfunction!(eval::calculate_tenpai_waits, m)?)?;
    m.add_function(wrap_pyfunction!(eval::build_safety_map, m)?)?;
    Ok(())
}
