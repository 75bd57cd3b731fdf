//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u16 = 21;

/// Sums the hand with every ace at 11, then demotes aces while over 21.
///
/// A hand of real cards tops out at 340 (the whole deck); the sum only
/// saturates for hands far larger than any deck.
fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut soft_aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        value = value.saturating_add(u16::from(card.rank.base_value()));
    }

    // Each demotion turns one ace from 11 into 1.
    while value > BLACKJACK && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    (value, soft_aces > 0)
}

/// The cards held by one seat.
///
/// A hand only grows during a round; it is emptied with [`Hand::clear`]
/// between rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    ///
    /// ```
    /// use headsup::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
    /// hand.add_card(Card::new(Rank::Five, Suit::Clubs));
    /// hand.add_card(Card::new(Rank::Seven, Suit::Spades));
    /// assert_eq!(hand.value(), 13);
    /// ```
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards worth 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
