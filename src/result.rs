//! Round result types.

use crate::player::Role;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Dealer was dealt a natural and the player was not.
    DealerBlackjack,
    /// Both seats were dealt naturals (push).
    BothBlackjack,
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished higher.
    PlayerWins,
    /// Dealer finished higher.
    DealerWins,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Returns the winning seat, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins => Some(Role::Player),
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerWins => Some(Role::Dealer),
            Self::BothBlackjack | Self::Push => None,
        }
    }

    /// Returns whether the round ended on the opening deal.
    #[must_use]
    pub const fn is_natural(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBlackjack | Self::BothBlackjack
        )
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u16,
    /// The dealer's final hand value.
    pub dealer_value: u16,
}
