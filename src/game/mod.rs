//! Game engine and state management.

use tracing::{debug, info, warn};

use crate::card::Card;
use crate::error::{ReshuffleError, SourceError};
use crate::hand::Hand;
use crate::options::{GameOptions, MAX_DEALER_STANDS_AT};
use crate::outcome::{self, Outcome};
use crate::present::{Presenter, TableView};
use crate::source::CardSource;

mod actions;
mod deal;
pub mod state;

pub use state::GameState;

/// A single-player blackjack game drawing from a [`CardSource`].
///
/// The game owns the card source and its session, both hands and the round
/// state. Every operation takes `&mut self` for as long as it is awaiting
/// cards, so no two operations can run against the same round.
pub struct Game<S: CardSource> {
    /// Where cards come from.
    source: S,
    /// Session of the opened deck, created on the first draw.
    session: Option<S::Session>,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Outcome of the last finished round.
    outcome: Option<Outcome>,
}

impl<S: CardSource> Game<S> {
    /// Creates a new game drawing from `source`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjtable::{Game, GameOptions, ShuffledDeck};
    ///
    /// let game = Game::new(GameOptions::default(), ShuffledDeck::new(1, 42));
    /// let _ = game;
    /// ```
    #[must_use]
    pub const fn new(options: GameOptions, source: S) -> Self {
        Self {
            source,
            session: None,
            options,
            state: GameState::NotStarted,
            player: Hand::new(),
            dealer: Hand::new(),
            outcome: None,
        }
    }

    /// Draws a card, opening a session first if there is none.
    async fn draw(&mut self) -> Result<Card, SourceError> {
        let session = match self.session.take() {
            Some(session) => session,
            None => {
                let session = self.source.init().await?;
                debug!("opened card source session");
                session
            }
        };
        let session = self.session.insert(session);

        let card = self.source.draw(session).await?;
        debug!(%card, "drew card");
        Ok(card)
    }

    /// Threshold the dealer draws up to.
    fn dealer_stands_at(&self) -> u8 {
        self.options.dealer_stands_at.min(MAX_DEALER_STANDS_AT)
    }

    /// Ends the round if the current scores decide it.
    fn settle<P: Presenter>(&mut self, presenter: &mut P) -> Option<Outcome> {
        let outcome = self.evaluate()?;

        self.state = GameState::Finished;
        self.outcome = Some(outcome);
        info!(
            player_score = self.player_score(),
            dealer_score = self.dealer_score(),
            outcome = outcome.message(),
            "round finished"
        );

        presenter.render(&self.view());
        presenter.show_outcome(outcome);
        presenter.set_input_enabled(false);
        Some(outcome)
    }

    /// Evaluates the outcome of the current scores without changing anything.
    ///
    /// Returns `None` before the first round and while the current scores do
    /// not decide the round.
    #[must_use]
    pub fn evaluate(&self) -> Option<Outcome> {
        if self.state == GameState::NotStarted {
            return None;
        }
        outcome::evaluate(
            self.player_score(),
            self.dealer_score(),
            self.dealer_stands_at(),
        )
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    /// Returns the dealer's score.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    /// Returns the outcome of the round, once it has finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the table as a presenter sees it.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView {
            state: self.state,
            player: self.player.cards(),
            dealer: self.dealer.cards(),
            player_score: self.player_score(),
            dealer_score: self.dealer_score(),
            outcome: self.outcome,
        }
    }

    /// Returns the card source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the card source mutably.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns whether a card source session is open.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Discards the current session so the next round opens a fresh deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.state.is_in_progress() {
            warn!(state = ?self.state, "reshuffle rejected");
            return Err(ReshuffleError::InvalidState);
        }

        self.session = None;
        debug!("card source session discarded");
        Ok(())
    }

    /// Clears both hands and the outcome and returns to
    /// [`GameState::NotStarted`].
    ///
    /// This is how a round is abandoned, e.g. after the card source became
    /// unavailable. The card source session is kept.
    pub fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.state = GameState::NotStarted;
    }
}
