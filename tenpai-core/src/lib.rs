//! Tenpai hand evaluation engine.
//!
//! Decides whether a set of tiles forms a complete hand (one pair plus
//! melds), enumerates the tiles that would complete a hand one tile short,
//! and rates discard safety from opponents' discards. Everything works on
//! caller-supplied data; the only global state is the constant tile catalog.

pub mod agari;
pub mod batch;
pub mod config;
pub mod counts;
pub mod errors;
pub mod parser;
pub mod safety;
pub mod tile;
pub mod waits;

pub use agari::{is_winning_hand, AgariSearch};
pub use batch::tenpai_waits_batch;
pub use config::SafetyRule;
pub use counts::{tile_counts_from_hand, TileCounts};
pub use errors::{TenpaiError, TenpaiResult};
pub use parser::parse_hand;
pub use safety::{
    build_safety_map, classify_hand, summarize_safety, DiscardHistory, SafetyMap, SafetySummary,
    SafetyTier, SafetyVerdict,
};
pub use tile::{tile_catalog, Suit, TileKind};
pub use waits::{calculate_tenpai_waits, tenpai_waits};
