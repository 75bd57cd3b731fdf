//! Seats at the table.

extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::hand::Hand;

/// Which side of the table a [`Player`] sits on.
///
/// The role decides how the seat takes its turn (interactive for
/// [`Role::Player`], fixed threshold for [`Role::Dealer`]) and whether its
/// hole card is concealed when the table is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The house.
    Dealer,
}

/// A named seat holding one hand and its round-scoped flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    role: Role,
    hand: Hand,
    standing: bool,
    blackjack: bool,
}

impl Player {
    /// Creates a seat with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            hand: Hand::new(),
            standing: false,
            blackjack: false,
        }
    }

    /// Returns the seat's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seat's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a dealt card to the hand.
    pub fn hit(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Ends the seat's turn without busting.
    pub const fn stand(&mut self) {
        self.standing = true;
    }

    /// Records that the opening hand is a confirmed natural.
    pub const fn confirm_blackjack(&mut self) {
        self.blackjack = true;
    }

    /// Returns whether the seat has stood this round.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    /// Returns whether a natural was confirmed this round.
    #[must_use]
    pub const fn has_blackjack(&self) -> bool {
        self.blackjack
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_bust()
    }

    /// Throws the hand away and clears the round flags.
    pub fn discard_hand(&mut self) {
        self.hand.clear();
        self.standing = false;
        self.blackjack = false;
    }
}
