//! Error types for the evaluator.

use thiserror::Error;

/// Errors surfaced at the library boundary.
///
/// All of these are caller contract violations; none is transient and none
/// should be retried. "No waits" or "no safe tiles" are valid results, not
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TenpaiError {
    /// Identifier not present in the tile catalog.
    #[error("invalid tile id '{id}'")]
    InvalidTile { id: String },
    /// Hand size is not of the form 3k+1, or disagrees with the tile list.
    #[error("invalid hand size {hand_size} for {tiles} tiles (expected 3k+1 tiles)")]
    InvalidHandSize { hand_size: usize, tiles: usize },
    /// More copies of one kind than physically exist.
    #[error("tile '{id}' appears {count} times (at most 4 copies exist)")]
    TileOverflow { id: String, count: usize },
    /// Opponent index outside the tracked range.
    #[error("opponent index {index} out of range (tracking {num_opponents} opponents)")]
    InvalidOpponent { index: usize, num_opponents: usize },
    /// Hand notation could not be parsed.
    #[error("parse error on '{input}': {message}")]
    Parse { input: String, message: String },
    /// Rule configuration could not be loaded.
    #[error("invalid configuration: {message}")]
    Config { message: String },
    /// A result could not be serialized.
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

pub type TenpaiResult<T> = Result<T, TenpaiError>;

#[cfg(feature = "python")]
impl From<TenpaiError> for pyo3::PyErr {
    fn from(err: TenpaiError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
