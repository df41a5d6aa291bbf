//! Discard safety classification: genbutsu and visible-copy counting.
//!
//! Each distinct kind in the hand gets one of three tiers from the
//! opponents' discard history:
//! - `safe`: some opponent already discarded it (genbutsu)
//! - `medium`: enough copies are visible elsewhere
//! - `risk`: nothing corroborates it
//!
//! The classification only looks at aggregate counts and membership, never
//! at which opponent discarded what or in which order.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::SafetyRule;
use crate::errors::{TenpaiError, TenpaiResult};
use crate::tile::{lookup, TileKind, NUM_TILE_KINDS};

// ---------------------------------------------------------------------------
// Verdicts
// ---------------------------------------------------------------------------

/// Risk tier for discarding a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyTier {
    Safe,
    Medium,
    Risk,
}

impl SafetyTier {
    pub const fn as_str(self) -> &'static str {
        match self {
            SafetyTier::Safe => "safe",
            SafetyTier::Medium => "medium",
            SafetyTier::Risk => "risk",
        }
    }
}

/// Tier plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyVerdict {
    pub tier: SafetyTier,
    pub rationale: String,
}

impl SafetyVerdict {
    fn genbutsu() -> Self {
        Self {
            tier: SafetyTier::Safe,
            rationale: "genbutsu: already discarded by an opponent".to_string(),
        }
    }

    fn visible(copies: u8) -> Self {
        Self {
            tier: SafetyTier::Medium,
            rationale: format!("{copies} copies already visible"),
        }
    }

    fn no_information() -> Self {
        Self {
            tier: SafetyTier::Risk,
            rationale: "no information, higher risk".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Discard history
// ---------------------------------------------------------------------------

/// Opponents' discards, plus tiles revealed outside the discard pools.
///
/// Owned and updated by whoever tracks the table; the classifier only reads
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardHistory {
    discards: Vec<Vec<TileKind>>,
    revealed: Vec<TileKind>,
}

impl DiscardHistory {
    /// Empty history for `num_opponents` opponents.
    pub fn new(num_opponents: usize) -> Self {
        Self {
            discards: vec![Vec::new(); num_opponents],
            revealed: Vec::new(),
        }
    }

    /// Empty history sized by `rule.num_opponents`.
    pub fn for_rule(rule: &SafetyRule) -> Self {
        Self::new(rule.num_opponents)
    }

    /// Builds a history from one id sequence per opponent.
    pub fn from_discards<S: AsRef<str>>(opponent_discards: &[Vec<S>]) -> TenpaiResult<Self> {
        let discards = opponent_discards
            .iter()
            .map(|seq| seq.iter().map(|id| lookup(id.as_ref())).collect())
            .collect::<TenpaiResult<Vec<Vec<TileKind>>>>()?;
        Ok(Self {
            discards,
            revealed: Vec::new(),
        })
    }

    pub fn num_opponents(&self) -> usize {
        self.discards.len()
    }

    /// Discards of one opponent, oldest first. Empty for unknown indices.
    pub fn discards(&self, opponent_idx: usize) -> &[TileKind] {
        self.discards
            .get(opponent_idx)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tiles revealed by calls or dora indicators.
    pub fn revealed(&self) -> &[TileKind] {
        &self.revealed
    }

    /// Record a discard by `opponent_idx`.
    pub fn on_discard(&mut self, opponent_idx: usize, id: &str) -> TenpaiResult<()> {
        let kind = lookup(id)?;
        let num_opponents = self.num_opponents();
        let pool = self
            .discards
            .get_mut(opponent_idx)
            .ok_or(TenpaiError::InvalidOpponent {
                index: opponent_idx,
                num_opponents,
            })?;
        pool.push(kind);
        Ok(())
    }

    /// Record tiles exposed by a call (chi/pon/kan).
    pub fn on_call<S: AsRef<str>>(&mut self, tiles: &[S]) -> TenpaiResult<()> {
        let kinds = tiles
            .iter()
            .map(|id| lookup(id.as_ref()))
            .collect::<TenpaiResult<Vec<_>>>()?;
        self.revealed.extend(kinds);
        Ok(())
    }

    /// Record a revealed dora indicator.
    pub fn on_dora_revealed(&mut self, id: &str) -> TenpaiResult<()> {
        self.revealed.push(lookup(id)?);
        Ok(())
    }

    /// Clear every discard and revealed tile, keeping the opponent count.
    pub fn reset(&mut self) {
        for pool in &mut self.discards {
            pool.clear();
        }
        self.revealed.clear();
    }

    /// Discards per kind, summed over all opponents.
    pub fn discard_counts(&self) -> [u8; NUM_TILE_KINDS] {
        let mut counts = [0u8; NUM_TILE_KINDS];
        for kind in self.discards.iter().flatten() {
            counts[kind.index()] = counts[kind.index()].saturating_add(1);
        }
        counts
    }

    /// Discards plus revealed tiles per kind.
    pub fn visible_counts(&self) -> [u8; NUM_TILE_KINDS] {
        let mut counts = self.discard_counts();
        for kind in &self.revealed {
            counts[kind.index()] = counts[kind.index()].saturating_add(1);
        }
        counts
    }
}

// ---------------------------------------------------------------------------
// Safety map
// ---------------------------------------------------------------------------

/// One verdict per distinct kind in the hand, iterated in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafetyMap {
    verdicts: BTreeMap<TileKind, SafetyVerdict>,
}

impl SafetyMap {
    /// Verdict for a tile id, if that kind is in the hand.
    pub fn get(&self, id: &str) -> Option<&SafetyVerdict> {
        TileKind::from_id(id).and_then(|kind| self.verdicts.get(&kind))
    }

    pub fn get_kind(&self, kind: TileKind) -> Option<&SafetyVerdict> {
        self.verdicts.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileKind, &SafetyVerdict)> {
        self.verdicts.iter().map(|(&kind, verdict)| (kind, verdict))
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// JSON object keyed by tile id: `{"11": {"tier": "safe", "rationale": ...}}`.
    pub fn to_json(&self) -> TenpaiResult<String> {
        serde_json::to_string(self).map_err(|e| TenpaiError::Serialization {
            message: e.to_string(),
        })
    }
}

/// Classifies every distinct kind in `hand` against `history`.
pub fn classify_hand<S: AsRef<str>>(
    hand: &[S],
    history: &DiscardHistory,
    rule: &SafetyRule,
) -> TenpaiResult<SafetyMap> {
    let discard_counts = history.discard_counts();
    let visible_counts = if rule.count_revealed_tiles {
        history.visible_counts()
    } else {
        discard_counts
    };

    let mut map = SafetyMap::default();
    for id in hand {
        let kind = lookup(id.as_ref())?;
        if map.verdicts.contains_key(&kind) {
            continue;
        }
        let k = kind.index();
        let verdict = if discard_counts[k] > 0 {
            SafetyVerdict::genbutsu()
        } else if visible_counts[k] >= rule.medium_visible_threshold {
            SafetyVerdict::visible(visible_counts[k])
        } else {
            SafetyVerdict::no_information()
        };
        map.verdicts.insert(kind, verdict);
    }

    debug!(
        hand_tiles = hand.len(),
        kinds = map.len(),
        opponents = history.num_opponents(),
        "built safety map"
    );
    Ok(map)
}

/// Safety map for `hand_tiles` given one discard sequence per opponent,
/// using the default rule.
pub fn build_safety_map<H: AsRef<str>, D: AsRef<str>>(
    hand_tiles: &[H],
    opponent_discards: &[Vec<D>],
) -> TenpaiResult<SafetyMap> {
    let history = DiscardHistory::from_discards(opponent_discards)?;
    classify_hand(hand_tiles, &history, &SafetyRule::default())
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Hand labels grouped by tier, one entry per tile occurrence in hand order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SafetySummary {
    pub safe: Vec<&'static str>,
    pub medium: Vec<&'static str>,
    pub risk: Vec<&'static str>,
}

/// Groups the hand's labels by their tier in `map`.
///
/// Fails with [`TenpaiError::InvalidTile`] if a hand tile is unknown or has
/// no verdict in `map`.
pub fn summarize_safety<S: AsRef<str>>(hand: &[S], map: &SafetyMap) -> TenpaiResult<SafetySummary> {
    let mut summary = SafetySummary::default();
    for id in hand {
        let id = id.as_ref();
        let kind = lookup(id)?;
        let verdict = map
            .get_kind(kind)
            .ok_or_else(|| TenpaiError::InvalidTile { id: id.to_string() })?;
        let bucket = match verdict.tier {
            SafetyTier::Safe => &mut summary.safe,
            SafetyTier::Medium => &mut summary.medium,
            SafetyTier::Risk => &mut summary.risk,
        };
        bucket.push(kind.label());
    }
    Ok(summary)
}
