//! Compact hand notation: digits followed by a suit letter.
//!
//! `m` = 萬, `p` = 筒, `s` = 索, `z` = honors 1-7 (東南西北白發中).
//! Whitespace is ignored, so `"123m 456p 11z"` and `"123m456p11z"` are the
//! same hand.

use crate::errors::{TenpaiError, TenpaiResult};
use crate::tile::{Suit, TileKind, NUM_HONOR_KINDS, NUM_SUIT_RANKS};

fn suit_for(c: char) -> Option<Suit> {
    match c {
        'm' => Some(Suit::Manzu),
        'p' => Some(Suit::Pinzu),
        's' => Some(Suit::Souzu),
        'z' => Some(Suit::Honor),
        _ => None,
    }
}

fn parse_error(text: &str, message: String) -> TenpaiError {
    TenpaiError::Parse {
        input: text.to_string(),
        message,
    }
}

/// Parses compact notation into tile kinds, in written order.
pub fn parse_kinds(text: &str) -> TenpaiResult<Vec<TileKind>> {
    let mut kinds = Vec::new();
    let mut pending: Vec<u8> = Vec::new();

    for c in text.chars() {
        if c.is_whitespace() {
            continue;
        }
        if let Some(d) = c.to_digit(10) {
            pending.push(d as u8);
            continue;
        }
        let suit = suit_for(c)
            .ok_or_else(|| parse_error(text, format!("unexpected character '{c}'")))?;
        if pending.is_empty() {
            return Err(parse_error(text, format!("suit '{c}' without ranks")));
        }
        let max_rank = match suit {
            Suit::Honor => NUM_HONOR_KINDS as u8,
            _ => NUM_SUIT_RANKS as u8,
        };
        for &rank in &pending {
            if rank == 0 || rank > max_rank {
                return Err(parse_error(text, format!("rank {rank} out of range for '{c}'")));
            }
            // In range by the check above.
            if let Some(kind) = TileKind::new(suit.start() + rank - 1) {
                kinds.push(kind);
            }
        }
        pending.clear();
    }

    if !pending.is_empty() {
        return Err(parse_error(text, "pending digits without suit".to_string()));
    }
    Ok(kinds)
}

/// Parses compact notation into tile ids.
pub fn parse_hand(text: &str) -> TenpaiResult<Vec<&'static str>> {
    Ok(parse_kinds(text)?.into_iter().map(TileKind::id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_suit() {
        assert_eq!(
            parse_hand("19m 19p 19s 17z").unwrap(),
            vec!["01", "09", "11", "19", "21", "29", "h1", "h7"]
        );
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(parse_hand("123m456p").unwrap(), parse_hand(" 1 2 3m 456 p").unwrap());
    }

    #[test]
    fn empty_input_is_empty_hand() {
        assert!(parse_hand("").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_input() {
        for bad in ["123", "m", "0m", "8z", "12x", "5m5"] {
            assert!(
                matches!(parse_hand(bad), Err(TenpaiError::Parse { .. })),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn error_carries_input() {
        let err = parse_hand("8z").unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error on '8z': rank 8 out of range for 'z'"
        );
    }
}
