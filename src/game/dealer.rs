extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{DealerStep, Game, GameState};

impl Game {
    /// Makes one dealer decision.
    ///
    /// The dealer stops if already bust, draws while below
    /// [`GameOptions::dealer_stands_on`](crate::GameOptions::dealer_stands_on),
    /// and otherwise stands. Stopping moves the game to
    /// [`GameState::Showdown`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<DealerStep, ActionError> {
        self.ensure_state(GameState::DealerTurn)?;

        let value = self.dealer.hand().value();

        if self.dealer.is_busted() {
            debug!(value, "dealer busts");
            self.state = GameState::Showdown;
            return Ok(DealerStep::Busted);
        }

        if value < u16::from(self.options.dealer_stands_on) {
            let card = self.draw()?;
            self.dealer.hit(card);
            debug!(%card, value = self.dealer.hand().value(), "dealer hits");
            return Ok(DealerStep::Drew(card));
        }

        self.dealer.stand();
        debug!(value, "dealer stands");
        self.state = GameState::Showdown;
        Ok(DealerStep::Stood)
    }

    /// Plays the dealer's hand to the end.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn_cards = Vec::new();

        loop {
            match self.dealer_step()? {
                DealerStep::Drew(card) => drawn_cards.push(card),
                DealerStep::Stood | DealerStep::Busted => break,
            }
        }

        Ok(drawn_cards)
    }

    /// Compares the final hands and ends the round.
    ///
    /// A busted dealer loses; otherwise the higher total wins and equal
    /// totals push.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished playing.
    pub fn showdown(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_state(GameState::Showdown)?;

        let outcome = if self.dealer.is_busted() {
            Outcome::DealerBust
        } else {
            match self
                .dealer
                .hand()
                .value()
                .cmp(&self.player.hand().value())
            {
                Ordering::Greater => Outcome::DealerWins,
                Ordering::Less => Outcome::PlayerWins,
                Ordering::Equal => Outcome::Push,
            }
        };

        Ok(self.finish(self.result_for(outcome)))
    }
}
