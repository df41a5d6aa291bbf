//! Winning-hand decomposition search.
//!
//! Decides whether a count vector splits into exactly one pair plus a given
//! number of melds, where a meld is a triplet or a same-suit run of three
//! consecutive ranks. Honors never form runs.
//!
//! The search always expands the lowest non-zero index first. That fixes a
//! single exploration order per residual multiset, so results can be cached
//! on `(counts, remaining melds)` alone.

use std::collections::HashMap;

use tracing::trace;

use crate::counts::TileCounts;
use crate::tile::{CATALOG, NUM_TILE_KINDS};

/// Memoized decomposition search.
///
/// A result depends only on the residual counts and the number of melds
/// still required, so one instance can be reused across many queries (the
/// wait enumerator shares one across all 34 candidate draws).
#[derive(Debug, Default)]
pub struct AgariSearch {
    memo: HashMap<(TileCounts, u8), bool>,
    hits: u64,
}

impl AgariSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached `(counts, remaining)` states.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Number of lookups answered from the cache.
    pub fn memo_hits(&self) -> u64 {
        self.hits
    }

    /// True if `counts` minus one pair splits into exactly `melds_needed`
    /// melds with nothing left over.
    ///
    /// `counts` is never modified; each branch works on its own copy.
    pub fn is_winning_hand(&mut self, counts: &TileCounts, melds_needed: u8) -> bool {
        let mut rest = *counts;
        for i in 0..NUM_TILE_KINDS {
            if rest[i] < 2 {
                continue;
            }
            rest[i] -= 2;
            let found = self.can_form_melds(rest, melds_needed);
            rest[i] += 2;
            if found {
                return true;
            }
        }
        false
    }

    fn can_form_melds(&mut self, counts: TileCounts, remaining: u8) -> bool {
        let key = (counts, remaining);
        if let Some(&cached) = self.memo.get(&key) {
            self.hits += 1;
            return cached;
        }

        let result = match counts.first_nonzero() {
            None => remaining == 0,
            // Tiles left over but no melds left to place them in.
            Some(_) if remaining == 0 => false,
            Some(first) => {
                self.try_triplet(counts, first, remaining)
                    || self.try_run(counts, first, remaining)
            }
        };

        self.memo.insert(key, result);
        result
    }

    fn try_triplet(&mut self, mut counts: TileCounts, first: usize, remaining: u8) -> bool {
        if counts[first] < 3 {
            return false;
        }
        counts[first] -= 3;
        self.can_form_melds(counts, remaining - 1)
    }

    fn try_run(&mut self, mut counts: TileCounts, first: usize, remaining: u8) -> bool {
        // starts_run() guarantees first+1 and first+2 are in the same suit.
        if !CATALOG[first].starts_run() || counts[first + 1] == 0 || counts[first + 2] == 0 {
            return false;
        }
        counts[first] -= 1;
        counts[first + 1] -= 1;
        counts[first + 2] -= 1;
        self.can_form_melds(counts, remaining - 1)
    }
}

/// One-shot winning-hand check with a fresh cache.
pub fn is_winning_hand(counts: &TileCounts, melds_needed: u8) -> bool {
    let mut search = AgariSearch::new();
    let result = search.is_winning_hand(counts, melds_needed);
    trace!(
        tiles = counts.total(),
        melds_needed,
        result,
        memo_entries = search.memo_len(),
        memo_hits = search.memo_hits(),
        "decomposition search finished"
    );
    result
}
