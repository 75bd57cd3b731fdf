//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when dealing from a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Every card has already been dealt.
    #[error("deck exhausted")]
    DeckExhausted,
}

/// Errors that can occur when building a stacked [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("{0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DealError> for ActionError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::DeckExhausted => Self::NoCards,
        }
    }
}

/// Errors returned when parsing a player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The text is neither `hit` nor `stand`.
    #[error("expected 'hit' or 'stand'")]
    Unrecognized,
}

/// Errors that end an interactive session early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The engine rejected a transition.
    #[error(transparent)]
    Action(#[from] ActionError),
}
