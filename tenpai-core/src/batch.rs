//! Parallel wait enumeration over many hands.
//!
//! Each hand gets its own count vector and search cache; the only shared
//! state is the immutable catalog, so hands are evaluated independently on
//! the rayon pool.

use rayon::prelude::*;
use tracing::debug;

use crate::errors::TenpaiResult;
use crate::waits::calculate_tenpai_waits;

/// Waits for every hand, in input order. One bad hand does not affect the
/// others.
pub fn tenpai_waits_batch<S: AsRef<str> + Sync>(
    hands: &[Vec<S>],
    hand_size: usize,
) -> Vec<TenpaiResult<Vec<&'static str>>> {
    let results: Vec<_> = hands
        .par_iter()
        .map(|hand| calculate_tenpai_waits(hand, hand_size))
        .collect();
    debug!(
        hands = hands.len(),
        tenpai = results
            .iter()
            .filter(|r| r.as_ref().is_ok_and(|w| !w.is_empty()))
            .count(),
        "batch wait enumeration finished"
    );
    results
}
