//! Analyze a hand from the command line.
//!
//! ```text
//! cargo run --example analyze_hand -- 123456789m1112p [discards...]
//! ```
//!
//! The first argument is the hand in compact notation. Each further argument
//! is one opponent's discards, also in compact notation. Set `RUST_LOG=debug`
//! to see evaluation events.

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use tenpai_core::{
    calculate_tenpai_waits, classify_hand, parse_hand, summarize_safety, DiscardHistory,
    SafetyRule,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(hand_text) = args.next() else {
        bail!("usage: analyze_hand <hand> [opponent discards...]");
    };
    let hand = parse_hand(&hand_text).context("parsing hand")?;

    let rule = SafetyRule::default();
    let mut history = DiscardHistory::for_rule(&rule);
    for (opponent, text) in args.enumerate() {
        let discards = parse_hand(&text)
            .with_context(|| format!("parsing discards of opponent {opponent}"))?;
        for id in discards {
            history.on_discard(opponent, id)?;
        }
    }

    let labels: Vec<&str> = hand
        .iter()
        .filter_map(|id| tenpai_core::TileKind::from_id(id).map(|k| k.label()))
        .collect();
    println!("Hand:   {}", labels.join(" "));

    if hand.len() % 3 == 1 {
        let waits = calculate_tenpai_waits(&hand, hand.len())?;
        if waits.is_empty() {
            println!("Waits:  not tenpai");
        } else {
            println!("Waits:  {}", waits.join(" "));
        }
    } else {
        println!("Waits:  skipped ({} tiles is not 3k+1)", hand.len());
    }

    let map = classify_hand(&hand, &history, &rule)?;
    let summary = summarize_safety(&hand, &map)?;
    println!("Safe:   {}", summary.safe.join(" "));
    println!("Medium: {}", summary.medium.join(" "));
    println!("Risk:   {}", summary.risk.join(" "));
    Ok(())
}
