//! The dealing deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DeckError};

/// A single 52-card deck.
///
/// Cards are dealt from the top, which is the end of the backing vector. A
/// dealt card is gone from the deck for good; there is no discard pile and an
/// empty deck is never refilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full deck and shuffles it with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that deals `draws` in order, first element first.
    ///
    /// `draws` may be any subset of the 52 cards, but each card at most once.
    ///
    /// ```
    /// use headsup::{Card, Deck, DeckError, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Hearts);
    /// let king = Card::new(Rank::King, Suit::Clubs);
    /// let mut deck = Deck::stacked(&[ace, king])?;
    /// assert_eq!(deck.deal(), Ok(ace));
    /// assert_eq!(deck.deal(), Ok(king));
    /// assert!(deck.deal().is_err());
    ///
    /// assert_eq!(Deck::stacked(&[ace, ace]), Err(DeckError::DuplicateCard(ace)));
    /// # Ok::<(), DeckError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card is listed twice.
    pub fn stacked(draws: &[Card]) -> Result<Self, DeckError> {
        for (i, card) in draws.iter().enumerate() {
            if draws[..i].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        let mut cards = draws.to_vec();
        cards.reverse();
        Ok(Self { cards })
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::DeckExhausted)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has run out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
