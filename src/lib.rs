//! A heads-up blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player against the
//! dealer: the opening deal, natural checks, the player's hit/stand turn, the
//! dealer's fixed draw-to-17 policy, and the showdown. [`Session`] wraps a
//! game in the interactive name/round/replay loop over pluggable [`Input`]
//! and [`Screen`] collaborators.
//!
//! # Example
//!
//! ```
//! use headsup::{Command, Game, GameOptions};
//!
//! let mut game = Game::new("Ada", GameOptions::default(), 42);
//! game.deal_opening()?;
//! if game.check_blackjack()?.is_none() {
//!     game.play(Command::Stand)?;
//!     game.dealer_play()?;
//!     let result = game.showdown()?;
//!     let _ = result.outcome.winner();
//! }
//! # Ok::<(), headsup::ActionError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod session;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, CommandError, DealError, DeckError, SessionError};
pub use game::{Command, Deal, DealerStep, Game, GameState, TurnStep};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use player::{Player, Role};
pub use result::{Outcome, RoundResult};
pub use session::{Input, Notice, Screen, Session};
pub use table::{HIDDEN_CARD, Table};
