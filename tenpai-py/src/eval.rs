//! Function-level boundary for the UI collaborator.
//!
//! Tiles cross the boundary as string ids, count vectors as numpy `uint8`
//! arrays of length 34. Library errors surface as `ValueError`.

use std::collections::HashMap;

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use tenpai_core::counts::TileCounts;
use tenpai_core::tile::{MAX_COPIES, NUM_TILE_KINDS};

/// Catalog entry as seen from Python: `(id, label, is_honor, suit_group, rank)`.
type CatalogEntry = (&'static str, &'static str, bool, u8, u8);

/// The 34 tile kinds in canonical order.
#[pyfunction]
pub fn tile_catalog() -> Vec<CatalogEntry> {
    tenpai_core::tile_catalog()
        .iter()
        .map(|k| (k.id(), k.label(), k.is_honor(), k.suit().group(), k.rank()))
        .collect()
}

/// Count vector for a list of tile ids.
#[pyfunction]
pub fn tile_counts<'py>(py: Python<'py>, tiles: Vec<String>) -> PyResult<Bound<'py, PyArray1<u8>>> {
    let counts = tenpai_core::tile_counts_from_hand(&tiles)?;
    Ok(PyArray1::from_slice_bound(py, &counts.as_array()[..]))
}

/// Tile ids for a hand in compact notation (`"123m456p11z"`).
#[pyfunction]
pub fn parse_hand(text: &str) -> PyResult<Vec<&'static str>> {
    Ok(tenpai_core::parse_hand(text)?)
}

/// Whether `counts` is one pair plus `melds_needed` melds.
#[pyfunction]
pub fn is_winning_hand(counts: PyReadonlyArray1<'_, u8>, melds_needed: u8) -> PyResult<bool> {
    let slice = counts.as_slice()?;
    let array: [u8; NUM_TILE_KINDS] = slice.try_into().map_err(|_| {
        PyValueError::new_err(format!(
            "expected {NUM_TILE_KINDS} counts, got {}",
            slice.len()
        ))
    })?;
    if let Some(i) = array.iter().position(|&c| c > MAX_COPIES) {
        return Err(PyValueError::new_err(format!(
            "count {} at index {i} exceeds {MAX_COPIES}",
            array[i]
        )));
    }
    Ok(tenpai_core::is_winning_hand(
        &TileCounts::from_array(array),
        melds_needed,
    ))
}

/// Labels of the tiles that complete a hand of `hand_size` (3k+1) tiles.
#[pyfunction]
pub fn calculate_tenpai_waits(tiles: Vec<String>, hand_size: usize) -> PyResult<Vec<&'static str>> {
    Ok(tenpai_core::calculate_tenpai_waits(&tiles, hand_size)?)
}

/// `{tile id: (tier, rationale)}` for each distinct tile in the hand.
#[pyfunction]
pub fn build_safety_map(
    hand: Vec<String>,
    opponent_discards: Vec<Vec<String>>,
) -> PyResult<HashMap<&'static str, (&'static str, String)>> {
    let map = tenpai_core::build_safety_map(&hand, &opponent_discards)?;
    Ok(map
        .iter()
        .map(|(kind, verdict)| (kind.id(), (verdict.tier.as_str(), verdict.rationale.clone())))
        .collect())
}
