//! Tile catalog: the 34 tile kinds, their string ids, display labels and
//! the canonical ordering every count vector is indexed against.
//!
//! The catalog is a compile-time table. It never changes length or order, so
//! "index 5" means the same kind (6萬) everywhere in the crate and it can be
//! read from any thread without synchronisation.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::errors::{TenpaiError, TenpaiResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Total number of distinct tile kinds (0-33).
pub const NUM_TILE_KINDS: usize = 34;

/// Number of ranks per suited category (1-9).
pub const NUM_SUIT_RANKS: usize = 9;

/// Number of honor kinds (winds + dragons).
pub const NUM_HONOR_KINDS: usize = 7;

/// Physical copies of each kind in a set.
pub const MAX_COPIES: u8 = 4;

/// Total physical tiles in a set (34 x 4).
pub const FULL_SET_SIZE: usize = NUM_TILE_KINDS * MAX_COPIES as usize;

// Suit range starts (catalog indices).
pub const MANZU_START: u8 = 0;
pub const PINZU_START: u8 = 9;
pub const SOUZU_START: u8 = 18;
pub const HONOR_START: u8 = 27;

/// String ids in catalog order. Suited ids are suit digit + rank digit,
/// honors are `h1`-`h7`.
const TILE_IDS: [&str; NUM_TILE_KINDS] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", //
    "11", "12", "13", "14", "15", "16", "17", "18", "19", //
    "21", "22", "23", "24", "25", "26", "27", "28", "29", //
    "h1", "h2", "h3", "h4", "h5", "h6", "h7",
];

/// Display labels in catalog order.
const TILE_LABELS: [&str; NUM_TILE_KINDS] = [
    "1萬", "2萬", "3萬", "4萬", "5萬", "6萬", "7萬", "8萬", "9萬", //
    "1筒", "2筒", "3筒", "4筒", "5筒", "6筒", "7筒", "8筒", "9筒", //
    "1索", "2索", "3索", "4索", "5索", "6索", "7索", "8索", "9索", //
    "東", "南", "西", "北", "白", "發", "中",
];

// ---------------------------------------------------------------------------
// Suit
// ---------------------------------------------------------------------------

/// The four tile categories. The discriminant is the suit group (3 = honors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Manzu = 0,
    Pinzu = 1,
    Souzu = 2,
    Honor = 3,
}

impl Suit {
    /// Returns the starting catalog index for this suit.
    #[inline]
    pub const fn start(self) -> u8 {
        match self {
            Suit::Manzu => MANZU_START,
            Suit::Pinzu => PINZU_START,
            Suit::Souzu => SOUZU_START,
            Suit::Honor => HONOR_START,
        }
    }

    /// Suit group number (0-2 suited, 3 honors).
    #[inline]
    pub const fn group(self) -> u8 {
        self as u8
    }

    /// Suffix used in suited labels. Honors have none.
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Suit::Manzu => Some("萬"),
            Suit::Pinzu => Some("筒"),
            Suit::Souzu => Some("索"),
            Suit::Honor => None,
        }
    }
}

// ---------------------------------------------------------------------------
// TileKind newtype
// ---------------------------------------------------------------------------

/// One of the 34 tile kinds. Wraps its catalog index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKind(u8);

impl TileKind {
    /// Creates a `TileKind` if `index` is in range 0..34.
    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_TILE_KINDS {
            Some(TileKind(index))
        } else {
            None
        }
    }

    /// Position in the catalog (0-33).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Stable string id, e.g. `"12"` or `"h5"`.
    #[inline]
    pub const fn id(self) -> &'static str {
        TILE_IDS[self.0 as usize]
    }

    /// Display label, e.g. `"2筒"` or `"白"`.
    #[inline]
    pub const fn label(self) -> &'static str {
        TILE_LABELS[self.0 as usize]
    }

    /// Which suit this kind belongs to.
    #[inline]
    pub const fn suit(self) -> Suit {
        match self.0 {
            0..9 => Suit::Manzu,
            9..18 => Suit::Pinzu,
            18..27 => Suit::Souzu,
            _ => Suit::Honor,
        }
    }

    /// 1-based rank: 1-9 for suited kinds, 1-7 for honors.
    ///
    /// Honor ranks carry no sequence relation to each other.
    #[inline]
    pub const fn rank(self) -> u8 {
        if self.0 < HONOR_START {
            self.0 % NUM_SUIT_RANKS as u8 + 1
        } else {
            self.0 - HONOR_START + 1
        }
    }

    /// True for winds and dragons (indices 27-33).
    #[inline]
    pub const fn is_honor(self) -> bool {
        self.0 >= HONOR_START
    }

    /// True for manzu, pinzu or souzu.
    #[inline]
    pub const fn is_suited(self) -> bool {
        self.0 < HONOR_START
    }

    /// True if a run can start on this kind: suited with rank 1-7.
    #[inline]
    pub const fn starts_run(self) -> bool {
        self.is_suited() && self.rank() <= 7
    }

    /// Resolves a string id (`"01"`-`"29"`, `"h1"`-`"h7"`).
    pub fn from_id(id: &str) -> Option<Self> {
        match id.as_bytes() {
            [s @ b'0'..=b'2', r @ b'1'..=b'9'] => {
                Some(TileKind((s - b'0') * NUM_SUIT_RANKS as u8 + (r - b'1')))
            }
            [b'h', r @ b'1'..=b'7'] => Some(TileKind(HONOR_START + (r - b'1'))),
            _ => None,
        }
    }

    /// Resolves a display label (`"2筒"`, `"中"`).
    pub fn from_label(label: &str) -> Option<Self> {
        TILE_LABELS
            .iter()
            .position(|&l| l == label)
            .map(|i| TileKind(i as u8))
    }
}

impl fmt::Debug for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileKind({}={})", self.id(), self.label())
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TileKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

const fn build_catalog() -> [TileKind; NUM_TILE_KINDS] {
    let mut out = [TileKind(0); NUM_TILE_KINDS];
    let mut i = 0;
    while i < NUM_TILE_KINDS {
        out[i] = TileKind(i as u8);
        i += 1;
    }
    out
}

/// All 34 kinds in canonical order.
pub static CATALOG: [TileKind; NUM_TILE_KINDS] = build_catalog();

/// Returns the fixed catalog sequence.
#[inline]
pub fn tile_catalog() -> &'static [TileKind; NUM_TILE_KINDS] {
    &CATALOG
}

/// Looks up a tile id, failing with [`TenpaiError::InvalidTile`] for ids
/// outside the catalog.
pub fn lookup(id: &str) -> TenpaiResult<TileKind> {
    TileKind::from_id(id).ok_or_else(|| TenpaiError::InvalidTile { id: id.to_string() })
}

/// Every physical tile of a set as ids, 4 copies per kind in catalog order.
pub fn full_set() -> Vec<&'static str> {
    CATALOG
        .iter()
        .flat_map(|kind| std::iter::repeat(kind.id()).take(MAX_COPIES as usize))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_34_unique_kinds() {
        let ids: HashSet<&str> = CATALOG.iter().map(|k| k.id()).collect();
        let labels: HashSet<&str> = CATALOG.iter().map(|k| k.label()).collect();
        assert_eq!(ids.len(), NUM_TILE_KINDS);
        assert_eq!(labels.len(), NUM_TILE_KINDS);
        for (i, kind) in CATALOG.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn tile_kind_new_bounds() {
        for i in 0..34u8 {
            assert!(TileKind::new(i).is_some(), "TileKind::new({i}) should be Some");
        }
        assert!(TileKind::new(34).is_none());
        assert!(TileKind::new(255).is_none());
    }

    #[test]
    fn suit_classification() {
        for kind in &CATALOG[0..9] {
            assert_eq!(kind.suit(), Suit::Manzu);
            assert!(kind.is_suited());
        }
        for kind in &CATALOG[9..18] {
            assert_eq!(kind.suit(), Suit::Pinzu);
        }
        for kind in &CATALOG[18..27] {
            assert_eq!(kind.suit(), Suit::Souzu);
        }
        for kind in &CATALOG[27..34] {
            assert_eq!(kind.suit(), Suit::Honor);
            assert_eq!(kind.suit().group(), 3);
            assert!(kind.is_honor());
            assert!(!kind.starts_run());
        }
    }

    #[test]
    fn ranks() {
        assert_eq!(CATALOG[0].rank(), 1); // 1萬
        assert_eq!(CATALOG[8].rank(), 9); // 9萬
        assert_eq!(CATALOG[9].rank(), 1); // 1筒
        assert_eq!(CATALOG[22].rank(), 5); // 5索
        assert_eq!(CATALOG[27].rank(), 1); // 東
        assert_eq!(CATALOG[33].rank(), 7); // 中
    }

    #[test]
    fn run_starts_stop_at_seven() {
        assert!(CATALOG[6].starts_run()); // 7萬
        assert!(!CATALOG[7].starts_run()); // 8萬
        assert!(!CATALOG[8].starts_run()); // 9萬
        assert!(CATALOG[9].starts_run()); // 1筒
    }

    #[test]
    fn ids_and_labels_resolve() {
        for kind in &CATALOG {
            assert_eq!(TileKind::from_id(kind.id()), Some(*kind));
            assert_eq!(TileKind::from_label(kind.label()), Some(*kind));
        }
        assert_eq!(TileKind::from_id("12").map(|k| k.label()), Some("2筒"));
        assert_eq!(TileKind::from_id("h6").map(|k| k.label()), Some("發"));
    }

    #[test]
    fn unknown_ids_rejected() {
        for bad in ["", "0", "00", "10", "30", "h0", "h8", "1m", "011", "H1"] {
            assert!(TileKind::from_id(bad).is_none(), "{bad:?} should not resolve");
            assert!(matches!(lookup(bad), Err(TenpaiError::InvalidTile { .. })));
        }
    }

    #[test]
    fn full_set_has_four_of_each() {
        let set = full_set();
        assert_eq!(set.len(), FULL_SET_SIZE);
        assert_eq!(&set[0..4], &["01"; 4]);
        assert_eq!(&set[132..136], &["h7"; 4]);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", CATALOG[10]), "2筒");
        assert_eq!(format!("{:?}", CATALOG[31]), "TileKind(h5=白)");
    }
}
