use tracing::debug;

use crate::error::ActionError;
use crate::player::Role;
use crate::result::{Outcome, RoundResult};

use super::{Command, Deal, Game, GameState, TurnStep};

/// Cards dealt to each seat before anyone acts.
const OPENING_CARDS: usize = 2;

impl Game {
    /// Deals the next opening card.
    ///
    /// Cards alternate player, dealer, player, dealer. After the fourth card
    /// the game moves to [`GameState::BlackjackCheck`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not dealing or the deck is empty.
    pub fn deal_next(&mut self) -> Result<Deal, ActionError> {
        self.ensure_state(GameState::Dealing)?;

        let card = self.draw()?;
        let to = if self.player.hand().len() > self.dealer.hand().len() {
            self.dealer.hit(card);
            Role::Dealer
        } else {
            self.player.hit(card);
            Role::Player
        };

        if self.dealer.hand().len() >= OPENING_CARDS {
            self.state = GameState::BlackjackCheck;
        }

        Ok(Deal { to, card })
    }

    /// Deals all four opening cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not dealing or the deck runs out.
    pub fn deal_opening(&mut self) -> Result<[Deal; 4], ActionError> {
        Ok([
            self.deal_next()?,
            self.deal_next()?,
            self.deal_next()?,
            self.deal_next()?,
        ])
    }

    /// Checks both opening hands for a natural.
    ///
    /// Returns the round result if either seat has blackjack; otherwise the
    /// game moves to [`GameState::PlayerTurn`] and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening cards have not all been dealt.
    pub fn check_blackjack(&mut self) -> Result<Option<RoundResult>, ActionError> {
        self.ensure_state(GameState::BlackjackCheck)?;

        let player_natural = self.player.hand().is_blackjack();
        let dealer_natural = self.dealer.hand().is_blackjack();

        if player_natural {
            self.player.confirm_blackjack();
        }
        if dealer_natural {
            self.dealer.confirm_blackjack();
        }

        let outcome = match (player_natural, dealer_natural) {
            (true, true) => Outcome::BothBlackjack,
            (true, false) => Outcome::PlayerBlackjack,
            (false, true) => Outcome::DealerBlackjack,
            (false, false) => {
                self.state = GameState::PlayerTurn;
                return Ok(None);
            }
        };

        Ok(Some(self.finish(self.result_for(outcome))))
    }

    /// Applies a player command.
    ///
    /// A hit that busts ends the round with the dealer winning; the dealer
    /// does not play. Standing hands the turn to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn play(&mut self, command: Command) -> Result<TurnStep, ActionError> {
        self.ensure_state(GameState::PlayerTurn)?;

        match command {
            Command::Hit => {
                let card = self.draw()?;
                self.player.hit(card);
                debug!(%card, value = self.player.hand().value(), "player hits");

                if self.player.is_busted() {
                    self.finish(self.result_for(Outcome::PlayerBust));
                    Ok(TurnStep::Busted(card))
                } else {
                    Ok(TurnStep::Drew(card))
                }
            }
            Command::Stand => {
                self.player.stand();
                debug!(value = self.player.hand().value(), "player stands");
                self.state = GameState::DealerTurn;
                Ok(TurnStep::Stood)
            }
        }
    }

    pub(super) fn result_for(&self, outcome: Outcome) -> RoundResult {
        RoundResult {
            outcome,
            player_value: self.player.hand().value(),
            dealer_value: self.dealer.hand().value(),
        }
    }
}
