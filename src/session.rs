//! Interactive play against the input and screen collaborators.
//!
//! [`Session`] asks for the player's name, plays rounds, and offers a replay
//! after each one. It never touches a terminal itself: lines come from an
//! [`Input`] and everything shown goes to a [`Screen`].

extern crate alloc;

use alloc::string::String;
use core::fmt;

use tracing::{debug, info};

use crate::error::SessionError;
use crate::game::{Command, DealerStep, Game, GameState, TurnStep};
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};
use crate::table::Table;

/// Source of player input, one line per request.
pub trait Input {
    /// Blocks until a line is available and returns it without its line
    /// terminator. Returns `None` once input is closed.
    fn read_line(&mut self) -> Option<String>;
}

/// Destination for everything the session shows.
pub trait Screen {
    /// Renders the table after a state change.
    fn show_table(&mut self, table: &Table<'_>);

    /// Shows a prompt or an announcement.
    fn notify(&mut self, notice: &Notice<'_>);
}

/// Prompts and announcements emitted by a [`Session`].
///
/// The [`Display`](fmt::Display) impl gives the text shown in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    /// Asks for the player's name.
    NamePrompt,
    /// A round is about to be dealt.
    RoundStart,
    /// Asks for a hit or stand decision.
    ActionPrompt,
    /// The last decision was neither hit nor stand.
    InvalidAction,
    /// A seat stood.
    Stands {
        /// Name of the seat that stood.
        name: &'a str,
    },
    /// The round is over.
    RoundOver {
        /// Result of the round.
        result: RoundResult,
        /// The player's name.
        player: &'a str,
        /// The dealer's name.
        dealer: &'a str,
    },
    /// Asks whether to play another round.
    PlayAgainPrompt,
    /// The session is ending.
    Goodbye,
}

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NamePrompt => f.write_str("Please enter your name:"),
            Self::RoundStart => f.write_str("Let's Play Blackjack!"),
            Self::ActionPrompt => f.write_str("Would you like to (hit) or (stand)?"),
            Self::InvalidAction => f.write_str("Please enter a valid input of 'hit' or 'stand'"),
            Self::Stands { name } => write!(f, "{name} stands."),
            Self::RoundOver {
                result,
                player,
                dealer,
            } => match result.outcome {
                Outcome::PlayerBlackjack => write!(f, "{player} wins with Blackjack!"),
                Outcome::DealerBlackjack => write!(f, "{dealer} wins with Blackjack."),
                Outcome::BothBlackjack => f.write_str("Both have Blackjack.  Push."),
                Outcome::PlayerBust => write!(f, "{player} busts.  {dealer} wins."),
                Outcome::DealerBust => write!(f, "{dealer} busts.  {player} wins!!"),
                Outcome::PlayerWins => write!(f, "{player} wins!!"),
                Outcome::DealerWins => write!(f, "{dealer} wins."),
                Outcome::Push => f.write_str("Push."),
            },
            Self::PlayAgainPrompt => {
                f.write_str("Would you like to play again?  Enter 'yes' to continue.")
            }
            Self::Goodbye => f.write_str("Goodbye."),
        }
    }
}

/// Drives a whole game: name entry, rounds, and the replay prompt.
#[derive(Debug)]
pub struct Session<I, S> {
    input: I,
    screen: S,
    options: GameOptions,
    seed: u64,
}

impl<I: Input, S: Screen> Session<I, S> {
    /// Creates a session; nothing is prompted until [`Session::run`].
    #[must_use]
    pub const fn new(input: I, screen: S, options: GameOptions, seed: u64) -> Self {
        Self {
            input,
            screen,
            options,
            seed,
        }
    }

    /// Returns the screen, e.g. to inspect what was shown.
    #[must_use]
    pub const fn screen(&self) -> &S {
        &self.screen
    }

    /// Plays until the player declines another round or input closes.
    ///
    /// Returns the number of rounds that finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects a transition, which only
    /// happens when the deck runs out mid-round.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        let Some(name) = self.prompt_name() else {
            self.screen.notify(&Notice::Goodbye);
            return Ok(0);
        };

        let mut game = Game::new(name, self.options.clone(), self.seed);
        self.play(&mut game)
    }

    /// Plays rounds on an existing game until the player declines another
    /// round or input closes.
    ///
    /// Returns the number of rounds that finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects a transition.
    pub fn play(&mut self, game: &mut Game) -> Result<usize, SessionError> {
        let mut rounds = 0;

        loop {
            if self.play_round(game)?.is_none() {
                break;
            }
            rounds += 1;

            if !self.offer_replay(game) {
                break;
            }
        }

        info!(rounds, "session over");
        self.screen.notify(&Notice::Goodbye);
        Ok(rounds)
    }

    fn prompt_name(&mut self) -> Option<String> {
        loop {
            self.screen.notify(&Notice::NamePrompt);
            let name = self.input.read_line()?;
            if !name.is_empty() {
                return Some(name);
            }
        }
    }

    /// Asks whether to play again and resets `game` if the answer is `yes`
    /// in any letter case. Returns whether another round should be played.
    pub fn offer_replay(&mut self, game: &mut Game) -> bool {
        self.screen.notify(&Notice::PlayAgainPrompt);
        match self.input.read_line() {
            Some(answer) if answer.eq_ignore_ascii_case("yes") => {
                game.reset();
                true
            }
            _ => false,
        }
    }

    /// Announces and plays one round on `game`, which must not have been
    /// dealt yet.
    ///
    /// Returns `None` if input closed during the player's turn, leaving the
    /// round unfinished.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects a transition.
    pub fn play_round(&mut self, game: &mut Game) -> Result<Option<RoundResult>, SessionError> {
        self.screen.notify(&Notice::RoundStart);
        self.screen.show_table(&game.table());
        while game.state() == GameState::Dealing {
            game.deal_next()?;
            self.screen.show_table(&game.table());
        }

        if let Some(result) = game.check_blackjack()? {
            self.screen.show_table(&game.table());
            self.announce(game, result);
            return Ok(Some(result));
        }

        loop {
            self.screen.notify(&Notice::ActionPrompt);
            let Some(line) = self.input.read_line() else {
                debug!("input closed during player turn");
                return Ok(None);
            };

            let Ok(command) = line.parse::<Command>() else {
                self.screen.notify(&Notice::InvalidAction);
                continue;
            };

            match game.play(command)? {
                TurnStep::Drew(_) => self.screen.show_table(&game.table()),
                TurnStep::Busted(_) => break,
                TurnStep::Stood => {
                    self.screen.notify(&Notice::Stands {
                        name: game.player().name(),
                    });
                    break;
                }
            }
        }
        self.screen.show_table(&game.table());

        if let Some(result) = game.result() {
            self.announce(game, result);
            return Ok(Some(result));
        }

        loop {
            match game.dealer_step()? {
                DealerStep::Drew(_) => self.screen.show_table(&game.table()),
                DealerStep::Stood => {
                    self.screen.notify(&Notice::Stands {
                        name: game.dealer().name(),
                    });
                    break;
                }
                DealerStep::Busted => break,
            }
        }
        self.screen.show_table(&game.table());

        let result = game.showdown()?;
        self.announce(game, result);
        Ok(Some(result))
    }

    fn announce(&mut self, game: &Game, result: RoundResult) {
        self.screen.notify(&Notice::RoundOver {
            result,
            player: game.player().name(),
            dealer: game.dealer().name(),
        });
    }
}
