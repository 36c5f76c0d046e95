//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals from any [`CardSource`],
//! tracks the player and dealer hands, runs the hit/stand/dealer-draw flow and
//! settles each round. Every change is reported to a [`Presenter`].
//!
//! Scoring is deliberately simple: an ace is always worth 11, and any hand
//! totalling exactly 21 is a blackjack.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Game, GameOptions, ShuffledDeck};
//!
//! # async fn play() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(GameOptions::default(), ShuffledDeck::new(1, 42));
//! game.start_round(&mut ()).await?;
//! if game.outcome().is_none() {
//!     game.stand(&mut ()).await?;
//! }
//! println!("{}", game.outcome().map_or("", |outcome| outcome.message()));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod present;
pub mod source;

// Re-export main types
pub use card::{AssetKey, CARD_BACK, Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, ReshuffleError, SourceError, StartError};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use outcome::{Outcome, Winner};
pub use present::{Presenter, TableView};
pub use source::{CardSource, Shoe, ShuffledDeck, StackedDeck};
