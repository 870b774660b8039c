//! Showdown input error types.

use thiserror::Error;

use crate::entities::Card;

/// Errors raised for malformed showdown input. All of these are detected
/// before any classification is produced and are recoverable by the
/// caller.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum InputError {
    /// A hand must use 5 to 7 cards
    #[error("need 5 to 7 cards to classify a hand, got {0}")]
    CardCount(usize),

    /// The same card twice within one card set
    #[error("duplicate card {0} within one set")]
    DuplicateCard(Card),

    /// The same card in two different sets at one showdown
    #[error("card {0} appears in more than one set")]
    SharedCard(Card),
}
