use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::ActionError;
use crate::present::{Presenter, TableView};
use crate::source::CardSource;

use super::{Game, GameState};

impl<S: CardSource> Game<S> {
    fn ensure_player_turn(&self, action: &'static str) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            warn!(action, state = ?self.state, "action rejected");
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A score over 21 ends the round as a bust, exactly 21 as a player
    /// blackjack, whatever the number of cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the card
    /// cannot be drawn. The hand is unchanged in both cases.
    pub async fn hit<P: Presenter>(&mut self, presenter: &mut P) -> Result<Card, ActionError> {
        self.ensure_player_turn("hit")?;

        let card = self
            .draw()
            .await
            .inspect_err(|err| warn!(%err, "hit aborted"))?;

        self.player.add_card(card);
        presenter.render(&self.view());
        self.settle(presenter);

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then draws one card at a time until reaching the stand
    /// threshold, and the round is settled. Each dealer card is rendered
    /// before the next one is requested. Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or a dealer
    /// card cannot be drawn. On a failed draw the dealer's cards from this
    /// stand are discarded, the last committed table is rendered again and
    /// the game stays in player turn.
    pub async fn stand<P: Presenter>(&mut self, presenter: &mut P) -> Result<Vec<Card>, ActionError> {
        self.ensure_player_turn("stand")?;

        let threshold = self.dealer_stands_at();
        let mut dealer = self.dealer.clone();
        let mut drawn = Vec::new();

        while dealer.score() < threshold {
            let card = match self.draw().await {
                Ok(card) => card,
                Err(err) => {
                    warn!(%err, drawn = drawn.len(), "dealer draw aborted");
                    presenter.render(&self.view());
                    return Err(err.into());
                }
            };

            dealer.add_card(card);
            drawn.push(card);
            debug!(dealer_score = dealer.score(), "dealer drew");

            presenter.render(&TableView {
                state: GameState::DealerTurn,
                dealer: dealer.cards(),
                dealer_score: dealer.score(),
                ..self.view()
            });
        }

        self.dealer = dealer;
        self.state = GameState::DealerTurn;

        // The dealer now holds at least the threshold (at most 21), which
        // always decides the round.
        let outcome = self.settle(presenter);
        debug_assert!(outcome.is_some());

        Ok(drawn)
    }
}
