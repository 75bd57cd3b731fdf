//! Table snapshots for rendering.

use core::fmt;

use crate::card::Card;
use crate::player::Player;

/// Text shown in place of the dealer's concealed card.
pub const HIDDEN_CARD: &str = "*** Hidden Card ***";

/// Index of the dealer's hole card within the hand.
const HOLE_CARD: usize = 1;

/// A borrowed view of both seats with the dealer's hole card concealed
/// until [`Game::dealer_revealed`](crate::Game::dealer_revealed) holds.
///
/// The [`Display`](fmt::Display) impl renders the table the way the terminal
/// game shows it:
///
/// ```text
/// Dealer's Hand:
/// 9 of Clubs
/// *** Hidden Card ***
///
/// Ada's Hand:
/// 5 of Hearts
/// 6 of Spades
///           Value: 11
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    dealer: &'a Player,
    player: &'a Player,
    revealed: bool,
}

impl<'a> Table<'a> {
    pub(crate) const fn new(dealer: &'a Player, player: &'a Player, revealed: bool) -> Self {
        Self {
            dealer,
            player,
            revealed,
        }
    }

    /// Returns whether the dealer's hand is fully shown.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns the dealer's cards as shown; the hole card is `None` while
    /// concealed.
    pub fn dealer_cards(&self) -> impl Iterator<Item = Option<Card>> + use<'a> {
        let revealed = self.revealed;
        let dealer: &'a Player = self.dealer;
        dealer
            .hand()
            .cards()
            .iter()
            .enumerate()
            .map(move |(i, card)| (revealed || i != HOLE_CARD).then_some(*card))
    }

    /// Returns the dealer's value, or `None` while the hole card is concealed.
    #[must_use]
    pub fn dealer_value(&self) -> Option<u16> {
        self.revealed.then(|| self.dealer.hand().value())
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn player(&self) -> &'a Player {
        self.player
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub const fn dealer(&self) -> &'a Player {
        self.dealer
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: u16) -> fmt::Result {
    writeln!(f, "          Value: {value}")
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}'s Hand:", self.dealer.name())?;
        for card in self.dealer_cards() {
            match card {
                Some(card) => writeln!(f, "{card}")?,
                None => writeln!(f, "{HIDDEN_CARD}")?,
            }
        }
        if let Some(value) = self.dealer_value() {
            write_value(f, value)?;
        }
        writeln!(f)?;

        writeln!(f, "{}'s Hand:", self.player.name())?;
        for card in self.player.hand().cards() {
            writeln!(f, "{card}")?;
        }
        write_value(f, self.player.hand().value())?;

        if self.player.is_standing() {
            writeln!(f)?;
            writeln!(f, "**{} is standing**", self.player.name())?;
        }

        Ok(())
    }
}
