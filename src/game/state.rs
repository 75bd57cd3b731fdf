//! Game state types.

use core::str::FromStr;

use crate::card::Card;
use crate::error::CommandError;
use crate::player::Role;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Dealing the four opening cards.
    Dealing,
    /// Opening cards dealt; naturals not yet checked.
    BlackjackCheck,
    /// Waiting for player commands.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both turns finished; totals not yet compared.
    Showdown,
    /// Round has ended and its result is available.
    Done,
}

/// A player decision during [`GameState::PlayerTurn`].
///
/// Parsing ignores ASCII case but not surrounding whitespace, the same rule
/// the replay prompt uses:
///
/// ```
/// use headsup::Command;
///
/// assert_eq!("HIT".parse(), Ok(Command::Hit));
/// assert_eq!("Stand".parse(), Ok(Command::Stand));
/// assert!("double".parse::<Command>().is_err());
/// assert!(" hit".parse::<Command>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(CommandError::Unrecognized)
        }
    }
}

/// One opening card and the seat it went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    /// Seat that received the card.
    pub to: Role,
    /// The card dealt.
    pub card: Card,
}

/// What a player command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    /// Drew a card and can act again.
    Drew(Card),
    /// Drew a card and went over 21; the round is over.
    Busted(Card),
    /// Stood; the dealer plays next.
    Stood,
}

impl TurnStep {
    /// Returns whether the player's turn has ended.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Drew(_))
    }
}

/// What one dealer decision did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// Below the threshold; drew a card.
    Drew(Card),
    /// At or above the threshold; stood.
    Stood,
    /// Over 21; the dealer stops.
    Busted,
}

impl DealerStep {
    /// Returns whether the dealer's turn has ended.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Drew(_))
    }
}
