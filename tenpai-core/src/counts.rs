//! Multiset codec: tile id lists to fixed-length count vectors and back.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::errors::{TenpaiError, TenpaiResult};
use crate::tile::{lookup, TileKind, CATALOG, MAX_COPIES, NUM_TILE_KINDS};

/// Per-kind tile counts, indexed by catalog position.
///
/// Hashable by value, so a snapshot doubles as a memoization key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCounts([u8; NUM_TILE_KINDS]);

impl Default for TileCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl TileCounts {
    /// All-zero counts.
    #[inline]
    pub const fn new() -> Self {
        TileCounts([0; NUM_TILE_KINDS])
    }

    /// Wraps a raw count array. The caller is responsible for the 0..=4 bound.
    #[inline]
    pub const fn from_array(counts: [u8; NUM_TILE_KINDS]) -> Self {
        TileCounts(counts)
    }

    #[inline]
    pub const fn as_array(&self) -> &[u8; NUM_TILE_KINDS] {
        &self.0
    }

    /// Total number of tiles.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Lowest catalog index with a non-zero count.
    #[inline]
    pub fn first_nonzero(&self) -> Option<usize> {
        self.0.iter().position(|&c| c > 0)
    }

    /// Kinds present, with their counts, in catalog order.
    pub fn kinds(&self) -> impl Iterator<Item = (TileKind, u8)> + '_ {
        CATALOG
            .iter()
            .zip(self.0.iter())
            .filter(|&(_, &c)| c > 0)
            .map(|(&kind, &c)| (kind, c))
    }

    /// Expands back into a tile id list in catalog order.
    pub fn to_tiles(&self) -> Vec<&'static str> {
        self.kinds()
            .flat_map(|(kind, c)| std::iter::repeat(kind.id()).take(c as usize))
            .collect()
    }
}

impl Index<usize> for TileCounts {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl IndexMut<usize> for TileCounts {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.0[index]
    }
}

impl Index<TileKind> for TileCounts {
    type Output = u8;

    #[inline]
    fn index(&self, kind: TileKind) -> &u8 {
        &self.0[kind.index()]
    }
}

impl IndexMut<TileKind> for TileCounts {
    #[inline]
    fn index_mut(&mut self, kind: TileKind) -> &mut u8 {
        &mut self.0[kind.index()]
    }
}

impl fmt::Debug for TileCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TileCounts[")?;
        for (i, chunk) in self.0.chunks(9).enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            for c in chunk {
                write!(f, "{c}")?;
            }
        }
        f.write_str("]")
    }
}

/// Builds the count vector for a hand.
///
/// Input order does not matter. Fails with [`TenpaiError::InvalidTile`] on an
/// id outside the catalog and [`TenpaiError::TileOverflow`] if a kind appears
/// more than four times.
pub fn tile_counts_from_hand<S: AsRef<str>>(tiles: &[S]) -> TenpaiResult<TileCounts> {
    let mut counts = TileCounts::new();
    for tile in tiles {
        let id = tile.as_ref();
        let kind = lookup(id)?;
        if counts[kind] >= MAX_COPIES {
            let count = tiles.iter().filter(|t| t.as_ref() == id).count();
            return Err(TenpaiError::TileOverflow {
                id: id.to_string(),
                count,
            });
        }
        counts[kind] += 1;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_kind_by_position() {
        let counts = tile_counts_from_hand(&["01", "11", "11", "h7"]).unwrap();
        assert_eq!(counts[0], 1);
        assert_eq!(counts[9], 2);
        assert_eq!(counts[33], 1);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.first_nonzero(), Some(0));
    }

    #[test]
    fn default_is_all_zero() {
        let counts = TileCounts::default();
        assert_eq!(counts, TileCounts::new());
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn empty_hand_is_all_zero() {
        let empty: [&str; 0] = [];
        let counts = tile_counts_from_hand(&empty).unwrap();
        assert!(counts.is_empty());
        assert_eq!(counts.first_nonzero(), None);
    }

    #[test]
    fn order_does_not_matter() {
        let a = tile_counts_from_hand(&["29", "h1", "05", "05"]).unwrap();
        let b = tile_counts_from_hand(&["05", "h1", "05", "29"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_tile_rejected() {
        let err = tile_counts_from_hand(&["01", "99"]).unwrap_err();
        assert_eq!(err, TenpaiError::InvalidTile { id: "99".into() });
    }

    #[test]
    fn fifth_copy_rejected() {
        let err = tile_counts_from_hand(&["h3"; 5]).unwrap_err();
        assert_eq!(
            err,
            TenpaiError::TileOverflow {
                id: "h3".into(),
                count: 5
            }
        );
        assert!(tile_counts_from_hand(&["h3"; 4]).is_ok());
    }

    #[test]
    fn to_tiles_round_trips_in_catalog_order() {
        let counts = tile_counts_from_hand(&["h2", "03", "12", "03"]).unwrap();
        assert_eq!(counts.to_tiles(), vec!["03", "03", "12", "h2"]);
    }

    #[test]
    fn kinds_lists_present_tiles() {
        let counts = tile_counts_from_hand(&["12", "12", "27"]).unwrap();
        let kinds: Vec<(&str, u8)> = counts.kinds().map(|(k, c)| (k.id(), c)).collect();
        assert_eq!(kinds, vec![("12", 2), ("27", 1)]);
    }

    #[test]
    fn debug_groups_by_suit() {
        let counts = tile_counts_from_hand(&["01", "h7"]).unwrap();
        assert_eq!(
            format!("{counts:?}"),
            "TileCounts[100000000|000000000|000000000|0000001]"
        );
    }
}
