//! Safety classifier configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{TenpaiError, TenpaiResult};

/// Tunables for the discard safety classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyRule {
    /// Opponents tracked by a fresh [`crate::safety::DiscardHistory`].
    pub num_opponents: usize,
    /// Visible copies needed before a non-genbutsu tile is rated `medium`.
    pub medium_visible_threshold: u8,
    /// Whether tiles revealed by calls or dora indicators count as visible.
    ///
    /// Genbutsu is always decided by discards alone.
    pub count_revealed_tiles: bool,
}

impl Default for SafetyRule {
    fn default() -> Self {
        Self::default_practice()
    }
}

impl SafetyRule {
    /// Three opponents, two visible copies for `medium`, revealed tiles count.
    pub fn default_practice() -> Self {
        Self {
            num_opponents: 3,
            medium_visible_threshold: 2,
            count_revealed_tiles: true,
        }
    }

    /// Two opponents (three-player table).
    pub fn default_sanma() -> Self {
        Self {
            num_opponents: 2,
            ..Self::default_practice()
        }
    }

    /// Only opponents' discards count toward `medium`.
    pub fn discards_only() -> Self {
        Self {
            count_revealed_tiles: false,
            ..Self::default_practice()
        }
    }

    pub fn validate(&self) -> TenpaiResult<()> {
        if self.num_opponents == 0 {
            return Err(TenpaiError::Config {
                message: "num_opponents must be at least 1".to_string(),
            });
        }
        if self.medium_visible_threshold == 0 {
            return Err(TenpaiError::Config {
                message: "medium_visible_threshold must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parses and validates a rule from JSON. Missing fields take their
    /// practice defaults.
    pub fn from_json(text: &str) -> TenpaiResult<Self> {
        let rule: Self = serde_json::from_str(text).map_err(|e| TenpaiError::Config {
            message: e.to_string(),
        })?;
        rule.validate()?;
        Ok(rule)
    }

    pub fn to_json(&self) -> TenpaiResult<String> {
        serde_json::to_string(self).map_err(|e| TenpaiError::Serialization {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_practice() {
        let rule = SafetyRule::default();
        assert_eq!(rule.num_opponents, 3);
        assert_eq!(rule.medium_visible_threshold, 2);
        assert!(rule.count_revealed_tiles);
        assert!(rule.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let rule = SafetyRule::from_json(r#"{"num_opponents": 2}"#).unwrap();
        assert_eq!(rule, SafetyRule::default_sanma());
    }

    #[test]
    fn json_round_trip() {
        let rule = SafetyRule::discards_only();
        let text = rule.to_json().unwrap();
        assert_eq!(SafetyRule::from_json(&text).unwrap(), rule);
    }

    #[test]
    fn invalid_json_is_config_error() {
        assert!(matches!(
            SafetyRule::from_json("{not json"),
            Err(TenpaiError::Config { .. })
        ));
        assert!(matches!(
            SafetyRule::from_json(r#"{"medium_visible_threshold": 0}"#),
            Err(TenpaiError::Config { .. })
        ));
        assert!(matches!(
            SafetyRule::from_json(r#"{"num_opponents": 0}"#),
            Err(TenpaiError::Config { .. })
        ));
    }
}
