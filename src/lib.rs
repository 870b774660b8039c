//! # Showdown
//!
//! A Texas Hold'em showdown evaluator: given each player's hole cards and
//! the shared community cards (5 to 7 cards per player in total), find the
//! best achievable 5-card hand, compare hands with a strict total order,
//! and rank every player at the showdown, grouping ties for split pots.
//!
//! ## Architecture
//!
//! Data flows one way, with no mutable state inside the core:
//!
//! - **Card**: immutable value of a card value (2-14, ace high) and suit
//! - **Classifier**: [`classify`] maps 5-7 unique cards to one
//!   [`Classification`], a hand category plus its ordered tiebreak values
//! - **Comparator**: [`compare`], the total order over classifications
//! - **Evaluator**: [`rank`] classifies every player and groups equal
//!   hands into tie groups, best group first
//!
//! Malformed input (wrong card count, duplicate cards within one set, a
//! card shared between two sets) surfaces as [`InputError`] before any
//! classification is produced.
//!
//! ## Core Modules
//!
//! - [`entities`]: cards, decks, hand categories, and classifications
//! - [`eval`]: the pure classification, comparison, and ranking functions
//! - [`errors`]: input validation errors
//!
//! ## Example
//!
//! ```
//! use showdown::{classify, Card, HandCategory, Suit};
//!
//! let cards = [
//!     Card(14, Suit::Spade),
//!     Card(13, Suit::Spade),
//!     Card(12, Suit::Spade),
//!     Card(11, Suit::Spade),
//!     Card(10, Suit::Spade),
//! ];
//! let hand = classify(&cards)?;
//! assert_eq!(hand.category, HandCategory::RoyalFlush);
//! # Ok::<(), showdown::InputError>(())
//! ```

/// Cards, decks, hand categories, and showdown value types.
pub mod entities;
pub use entities::{
    Card, Classification, Deck, EvaluationResult, HandCategory, PlayerCards, PlayerId, Suit, Value,
};

/// Input validation errors.
pub mod errors;
pub use errors::InputError;

/// Pure hand classification, comparison, and showdown ranking.
pub mod eval;
pub use eval::{classify, compare, rank};
