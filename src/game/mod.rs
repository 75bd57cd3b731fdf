//! Game engine and state management.

extern crate alloc;

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::options::GameOptions;
use crate::player::{Player, Role};
use crate::result::RoundResult;
use crate::table::Table;

mod actions;
mod dealer;
pub mod state;

pub use state::{Command, Deal, DealerStep, GameState, TurnStep};

/// A heads-up blackjack engine: one player against the dealer.
///
/// The game owns the deck, both seats and the round state. Every transition
/// of the round is its own method, so a round can be driven one event at a
/// time without any interactive input:
///
/// ```
/// use headsup::{Command, Game, GameOptions, GameState};
///
/// let mut game = Game::new("Ada", GameOptions::default(), 7);
/// game.deal_opening()?;
/// if game.check_blackjack()?.is_none() {
///     game.play(Command::Stand)?;
///     game.dealer_play()?;
///     game.showdown()?;
/// }
/// assert_eq!(game.state(), GameState::Done);
/// # Ok::<(), headsup::ActionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    deck: Deck,
    dealer: Player,
    player: Player,
    state: GameState,
    result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game for `player_name` with the given seed.
    #[must_use]
    pub fn new(player_name: impl Into<String>, options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);
        let dealer = Player::new(options.dealer_name.clone(), Role::Dealer);

        Self {
            options,
            deck,
            dealer,
            player: Player::new(player_name, Role::Player),
            state: GameState::Dealing,
            result: None,
            rng,
        }
    }

    /// Prepares for another round.
    ///
    /// A freshly shuffled deck replaces the current one and both hands are
    /// discarded. Allowed in any state.
    pub fn reset(&mut self) {
        self.deck = Deck::new(&mut self.rng);
        self.dealer.discard_hand();
        self.player.discard_hand();
        self.state = GameState::Dealing;
        self.result = None;
        info!(player = self.player.name(), "new round");
    }

    /// Swaps in a prepared deck, for replays with a known card order.
    ///
    /// Only allowed before the first card of a round, so no card can be in
    /// the deck and in a hand at once.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] unless the round is still
    /// [`GameState::Dealing`] with both hands empty.
    pub fn replace_deck(&mut self, deck: Deck) -> Result<(), ActionError> {
        self.ensure_state(GameState::Dealing)?;
        if !self.player.hand().is_empty() || !self.dealer.hand().is_empty() {
            warn!("rejected deck swap after the deal started");
            return Err(ActionError::InvalidState);
        }

        debug!(cards = deck.len(), "deck replaced");
        self.deck = deck;
        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer's seat.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the result of the finished round, if the round is over.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns whether the dealer's hole card and value may be shown.
    ///
    /// The hole card stays hidden until the player stands or busts, or
    /// either seat has a confirmed natural.
    #[must_use]
    pub fn dealer_revealed(&self) -> bool {
        self.player.is_standing()
            || self.player.is_busted()
            || self.dealer.has_blackjack()
            || self.player.has_blackjack()
    }

    /// Returns a snapshot of the table for rendering.
    #[must_use]
    pub fn table(&self) -> Table<'_> {
        Table::new(&self.dealer, &self.player, self.dealer_revealed())
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), ActionError> {
        if self.state != expected {
            warn!(state = ?self.state, ?expected, "rejected out-of-order action");
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Result<Card, ActionError> {
        let card = self.deck.deal()?;
        debug!(%card, remaining = self.deck.len(), "dealt");
        Ok(card)
    }

    fn finish(&mut self, result: RoundResult) -> RoundResult {
        info!(
            outcome = ?result.outcome,
            player_value = result.player_value,
            dealer_value = result.dealer_value,
            "round over"
        );
        self.state = GameState::Done;
        self.result = Some(result);
        result
    }
}
