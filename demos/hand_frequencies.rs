//! Hand Frequency Sampling
//!
//! Deals random two player boards in a loop and tallies how often each
//! hand category comes up. All aggregation happens out here; the
//! evaluator itself keeps no counters.

use showdown::{Card, Deck, HandCategory, classify};
use std::collections::BTreeMap;

const SAMPLES: usize = 100_000;

fn main() {
    env_logger::init();

    let mut counts: BTreeMap<HandCategory, usize> = BTreeMap::new();
    let mut deck = Deck::default();

    for _ in 0..SAMPLES {
        deck.shuffle();
        let cards: Vec<Card> = (0..7).filter_map(|_| deck.deal_card()).collect();
        let classification = classify(&cards).expect("7 freshly dealt cards");
        *counts.entry(classification.category).or_default() += 1;
    }

    println!("category frequencies over {SAMPLES} seven card deals:");
    for (category, count) in &counts {
        println!(
            "{:?} ({}) -> {:.4}%",
            category,
            category,
            *count as f64 / SAMPLES as f64 * 100.0
        );
    }
}
