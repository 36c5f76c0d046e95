use alloc::vec::Vec;

use tracing::{info, warn};

use crate::error::StartError;
use crate::hand::Hand;
use crate::present::Presenter;
use crate::source::CardSource;

use super::{Game, GameState};

/// Cards dealt to the player at the start of a round.
const PLAYER_OPENING_CARDS: usize = 2;
/// Cards dealt to the dealer at the start of a round.
const DEALER_OPENING_CARDS: usize = 1;

impl<S: CardSource> Game<S> {
    /// Starts a new round: two cards to the player, then one to the dealer.
    ///
    /// The previous hands are discarded only once all cards were drawn. With
    /// [`GameOptions::evaluate_after_deal`](crate::GameOptions::evaluate_after_deal)
    /// set, a dealt 21 or bust ends the round straight away.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or a card cannot be drawn.
    /// In both cases the game is left as it was.
    pub async fn start_round<P: Presenter>(&mut self, presenter: &mut P) -> Result<(), StartError> {
        if self.state.is_in_progress() {
            warn!(state = ?self.state, "start_round rejected");
            return Err(StartError::InvalidState);
        }

        let mut player = Vec::with_capacity(PLAYER_OPENING_CARDS);
        let mut dealer = Vec::with_capacity(DEALER_OPENING_CARDS);

        for _ in 0..PLAYER_OPENING_CARDS {
            let card = self
                .draw()
                .await
                .inspect_err(|err| warn!(%err, "deal aborted"))?;
            player.push(card);
        }
        for _ in 0..DEALER_OPENING_CARDS {
            let card = self
                .draw()
                .await
                .inspect_err(|err| warn!(%err, "deal aborted"))?;
            dealer.push(card);
        }

        self.player = Hand::from(player);
        self.dealer = Hand::from(dealer);
        self.outcome = None;
        self.state = GameState::PlayerTurn;
        info!(
            player_score = self.player_score(),
            dealer_score = self.dealer_score(),
            "round started"
        );

        presenter.set_input_enabled(true);
        presenter.render(&self.view());

        if self.options.evaluate_after_deal {
            self.settle(presenter);
        }

        Ok(())
    }
}
