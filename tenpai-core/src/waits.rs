//! Tenpai wait enumeration.
//!
//! Tries every kind the hand could still draw (count < 4), adds one copy and
//! runs the decomposition search. The kinds that complete the hand are the
//! waits, reported in catalog order.

use tracing::{debug, trace};

use crate::agari::AgariSearch;
use crate::counts::{tile_counts_from_hand, TileCounts};
use crate::errors::{TenpaiError, TenpaiResult};
use crate::tile::{TileKind, CATALOG, MAX_COPIES};

/// Melds a hand of `hand_size` tiles needs once it draws its winning tile.
///
/// `hand_size + 1` tiles must be one pair plus whole melds, so only sizes of
/// the form 3k+1 (1, 4, 7, 10, 13, ...) are accepted. Anything else is
/// rejected rather than truncated.
pub fn melds_needed_for(hand_size: usize) -> TenpaiResult<u8> {
    if hand_size % 3 != 1 {
        return Err(TenpaiError::InvalidHandSize {
            hand_size,
            tiles: hand_size,
        });
    }
    let melds = (hand_size + 1 - 2) / 3;
    u8::try_from(melds).map_err(|_| TenpaiError::InvalidHandSize {
        hand_size,
        tiles: hand_size,
    })
}

/// Kinds that complete `counts` into one pair plus `melds_needed` melds.
///
/// Kinds already held four times are skipped. An empty result means the hand
/// is not tenpai.
pub fn tenpai_waits(counts: &TileCounts, melds_needed: u8) -> Vec<TileKind> {
    let mut search = AgariSearch::new();
    let mut probe = *counts;
    let mut waits = Vec::new();

    for &kind in &CATALOG {
        if probe[kind] >= MAX_COPIES {
            continue;
        }
        probe[kind] += 1;
        if search.is_winning_hand(&probe, melds_needed) {
            waits.push(kind);
        }
        probe[kind] -= 1;
    }

    trace!(
        memo_entries = search.memo_len(),
        memo_hits = search.memo_hits(),
        "wait enumeration cache"
    );
    waits
}

/// True if at least one draw completes the hand.
pub fn is_tenpai(counts: &TileCounts, melds_needed: u8) -> bool {
    !tenpai_waits(counts, melds_needed).is_empty()
}

/// Waits for a hand given as tile ids, as display labels in catalog order.
///
/// `hand_size` must equal `tiles.len()` and be of the form 3k+1; see
/// [`melds_needed_for`].
pub fn calculate_tenpai_waits<S: AsRef<str>>(
    tiles: &[S],
    hand_size: usize,
) -> TenpaiResult<Vec<&'static str>> {
    if tiles.len() != hand_size {
        return Err(TenpaiError::InvalidHandSize {
            hand_size,
            tiles: tiles.len(),
        });
    }
    let melds_needed = melds_needed_for(hand_size)?;
    let counts = tile_counts_from_hand(tiles)?;
    let waits = tenpai_waits(&counts, melds_needed);
    let labels: Vec<&'static str> = waits.iter().map(|k| k.label()).collect();
    debug!(hand_size, waits = ?labels, "computed tenpai waits");
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn melds_needed_for_valid_sizes() {
        assert_eq!(melds_needed_for(1), Ok(0));
        assert_eq!(melds_needed_for(4), Ok(1));
        assert_eq!(melds_needed_for(7), Ok(2));
        assert_eq!(melds_needed_for(10), Ok(3));
        assert_eq!(melds_needed_for(13), Ok(4));
    }

    #[test]
    fn melds_needed_rejects_other_sizes() {
        for size in [0, 2, 3, 5, 6, 12, 14] {
            assert!(
                matches!(melds_needed_for(size), Err(TenpaiError::InvalidHandSize { .. })),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn single_tile_waits_on_itself() {
        assert_eq!(calculate_tenpai_waits(&["h5"], 1).unwrap(), vec!["白"]);
    }

    #[test]
    fn nobetan_wait() {
        // 2345萬 waits on 2萬 and 5萬.
        let waits = calculate_tenpai_waits(&["02", "03", "04", "05"], 4).unwrap();
        assert_eq!(waits, vec!["2萬", "5萬"]);
    }

    #[test]
    fn shanpon_wait() {
        // 東東 中中 + 456索 -> waits 東, 中
        let hand = ["h1", "h1", "h7", "h7", "24", "25", "26"];
        assert_eq!(calculate_tenpai_waits(&hand, 7).unwrap(), vec!["東", "中"]);
    }

    #[test]
    fn kanchan_wait() {
        // 13筒 + 555萬 + 99索 pair -> waits on 2筒
        let hand = ["11", "13", "05", "05", "05", "29", "29"];
        assert_eq!(calculate_tenpai_waits(&hand, 7).unwrap(), vec!["2筒"]);
    }

    #[test]
    fn nine_gates_waits_everywhere() {
        // 1112345678999萬 waits on all nine manzu.
        let hand = [
            "01", "01", "01", "02", "03", "04", "05", "06", "07", "08", "09", "09", "09",
        ];
        let waits = calculate_tenpai_waits(&hand, 13).unwrap();
        assert_eq!(
            waits,
            vec!["1萬", "2萬", "3萬", "4萬", "5萬", "6萬", "7萬", "8萬", "9萬"]
        );
    }

    #[test]
    fn fully_held_kind_is_never_a_wait() {
        // 1111萬 + 23萬 + 東: the only pair-forming draw is 東, and 1萬 can't be drawn.
        let hand = ["01", "01", "01", "01", "02", "03", "h1"];
        let waits = calculate_tenpai_waits(&hand, 7).unwrap();
        assert_eq!(waits, vec!["東"]);
    }

    #[test]
    fn hand_length_must_match_size() {
        let err = calculate_tenpai_waits(&["01", "02", "03"], 4).unwrap_err();
        assert_eq!(
            err,
            TenpaiError::InvalidHandSize {
                hand_size: 4,
                tiles: 3
            }
        );
    }

    #[test]
    fn mismatch_reports_actual_tile_count() {
        // Reported against the real length even when the size itself is invalid.
        let err = calculate_tenpai_waits(&["01", "02", "03"], 2).unwrap_err();
        assert_eq!(
            err,
            TenpaiError::InvalidHandSize {
                hand_size: 2,
                tiles: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid hand size 2 for 3 tiles (expected 3k+1 tiles)"
        );
    }

    #[test]
    fn invalid_tile_surfaces() {
        let err = calculate_tenpai_waits(&["01", "02", "03", "x9"], 4).unwrap_err();
        assert_eq!(err, TenpaiError::InvalidTile { id: "x9".into() });
    }

    #[test]
    fn is_tenpai_matches_waits() {
        let counts = tile_counts_from_hand(&["02", "03", "04", "05"]).unwrap();
        assert!(is_tenpai(&counts, 1));
        let counts = tile_counts_from_hand(&["01", "05", "19", "h1"]).unwrap();
        assert!(!is_tenpai(&counts, 1));
    }
}
