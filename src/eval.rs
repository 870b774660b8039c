//! Pure hand classification and showdown ranking.
//!
//! All functions here are pure over immutable inputs: no shared state,
//! no I/O. Classifying different players is independent work; the only
//! sequential step is the final sort and tie grouping in [`rank`].

use log::debug;
use std::{cmp::Ordering, collections::BTreeSet};

use crate::{
    entities::{
        Card, Classification, EvaluationResult, HandCategory, PlayerCards, PlayerId, Suit, Value,
    },
    errors::InputError,
};

/// Classify 5 to 7 unique cards into the best achievable 5-card hand.
///
/// The result is independent of the input's order. Fails with
/// [`InputError`] if the slice holds fewer than 5 or more than 7 cards,
/// or the same card twice.
pub fn classify(cards: &[Card]) -> Result<Classification, InputError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(InputError::CardCount(cards.len()));
    }
    let mut seen = BTreeSet::new();
    for &card in cards {
        if !seen.insert(card) {
            return Err(InputError::DuplicateCard(card));
        }
    }

    let mut cards = cards.to_vec();
    cards.sort_unstable_by(|a, b| b.cmp(a));

    // Distinct values descending with their multiplicities. Duplicate
    // values across suits collapse to one entry.
    let mut value_counts: Vec<(Value, u8)> = Vec::with_capacity(cards.len());
    for card in &cards {
        match value_counts.last_mut() {
            Some((value, count)) if *value == card.0 => *count += 1,
            _ => value_counts.push((card.0, 1)),
        }
    }
    let distinct: Vec<Value> = value_counts.iter().map(|&(value, _)| value).collect();

    // All pair/trip/quad groups, best first. Every group is kept since
    // full house and two pair need the second best one.
    let mut pairs: Vec<Value> = Vec::new();
    let mut trips: Vec<Value> = Vec::new();
    let mut quads: Vec<Value> = Vec::new();
    for &(value, count) in &value_counts {
        match count {
            4 => quads.push(value),
            3 => trips.push(value),
            2 => pairs.push(value),
            _ => {}
        }
    }

    // At most one suit can reach 5 cards out of 7.
    let flush_suit = Suit::ALL
        .into_iter()
        .find(|&suit| cards.iter().filter(|card| card.1 == suit).count() >= 5);

    let suited = |suit: Suit| -> Vec<Value> {
        cards
            .iter()
            .filter(|card| card.1 == suit)
            .map(|card| card.0)
            .collect()
    };

    let straight_flush = flush_suit.and_then(|suit| straight_high(&suited(suit)));

    // A second trip is eligible to serve as the full house pair.
    let full_house = trips.first().and_then(|&trip| {
        let pair = trips.get(1).copied().max(pairs.first().copied());
        pair.map(|pair| (trip, pair))
    });

    let classification = if let Some(high) = straight_flush {
        let category = if high == 14 {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        Classification {
            category,
            tiebreak: vec![high],
        }
    } else if let Some(&quad) = quads.first() {
        let mut tiebreak = vec![quad];
        tiebreak.extend(distinct.iter().copied().filter(|&v| v != quad).take(1));
        Classification {
            category: HandCategory::FourOfAKind,
            tiebreak,
        }
    } else if let Some((trip, pair)) = full_house {
        Classification {
            category: HandCategory::FullHouse,
            tiebreak: vec![trip, pair],
        }
    } else if let Some(suit) = flush_suit {
        Classification {
            category: HandCategory::Flush,
            tiebreak: suited(suit).into_iter().take(5).collect(),
        }
    } else if let Some(high) = straight_high(&distinct) {
        Classification {
            category: HandCategory::Straight,
            tiebreak: vec![high],
        }
    } else if let Some(&trip) = trips.first() {
        let mut tiebreak = vec![trip];
        tiebreak.extend(distinct.iter().copied().filter(|&v| v != trip).take(2));
        Classification {
            category: HandCategory::ThreeOfAKind,
            tiebreak,
        }
    } else if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut tiebreak = vec![high, low];
        tiebreak.extend(
            distinct
                .iter()
                .copied()
                .filter(|&v| v != high && v != low)
                .take(1),
        );
        Classification {
            category: HandCategory::TwoPair,
            tiebreak,
        }
    } else if let Some(&pair) = pairs.first() {
        let mut tiebreak = vec![pair];
        tiebreak.extend(distinct.iter().copied().filter(|&v| v != pair).take(3));
        Classification {
            category: HandCategory::Pair,
            tiebreak,
        }
    } else {
        Classification {
            category: HandCategory::HighCard,
            tiebreak: distinct.into_iter().take(5).collect(),
        }
    };

    Ok(classification)
}

/// Highest card of a 5-long consecutive run within distinct descending
/// values, with the ace also playing low for the wheel (A-2-3-4-5 is a
/// straight with high card 5).
fn straight_high(values: &[Value]) -> Option<Value> {
    let mut run = 1;
    for pair in values.windows(2) {
        if pair[0] - pair[1] == 1 {
            run += 1;
            if run == 5 {
                return Some(pair[1] + 4);
            }
        } else {
            run = 1;
        }
    }
    if values.first() == Some(&14) && values.ends_with(&[5, 4, 3, 2]) {
        return Some(5);
    }
    None
}

/// Total order over classifications: category numerically first, then
/// tiebreak values element-wise, first difference deciding. Equality is
/// a true tie eligible for a split pot.
pub fn compare(a: &Classification, b: &Classification) -> Ordering {
    a.cmp(b)
}

/// Rank all players at a showdown, best first.
///
/// Unions each player's hole cards with the community cards, classifies
/// every player, and groups equal classifications into tie groups, so a
/// group with more than one player is a split pot. Fails with
/// [`InputError`] if any player's combined set violates [`classify`]'s
/// contract, or if one physical card appears in two different sets.
pub fn rank(
    players: &[PlayerCards],
    community: &[Card],
) -> Result<Vec<Vec<PlayerId>>, InputError> {
    let mut seen = BTreeSet::new();
    for &card in community {
        if !seen.insert(card) {
            return Err(InputError::DuplicateCard(card));
        }
    }
    for player in players {
        let mut hole = BTreeSet::new();
        for &card in &player.hole_cards {
            if !hole.insert(card) {
                return Err(InputError::DuplicateCard(card));
            }
            if !seen.insert(card) {
                return Err(InputError::SharedCard(card));
            }
        }
    }

    let mut results = Vec::with_capacity(players.len());
    for player in players {
        let mut cards = player.hole_cards.clone();
        cards.extend_from_slice(community);
        let classification = classify(&cards)?;
        debug!(
            "{} holds {} {:?}",
            player.id, classification.category, classification.tiebreak
        );
        results.push(EvaluationResult {
            player_id: player.id.clone(),
            classification,
        });
    }

    // Stable sort keeps seating order among equal hands.
    results.sort_by(|a, b| b.classification.cmp(&a.classification));

    let mut groups: Vec<Vec<EvaluationResult>> = Vec::new();
    for result in results {
        match groups.last_mut() {
            Some(group)
                if group
                    .first()
                    .is_some_and(|top| top.classification == result.classification) =>
            {
                group.push(result);
            }
            _ => groups.push(vec![result]),
        }
    }
    debug!("tie groups: {}", groups.len());

    Ok(groups
        .into_iter()
        .map(|group| group.into_iter().map(|result| result.player_id).collect())
        .collect())
}
