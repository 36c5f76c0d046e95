//! Presentation sink the game reports to.

use crate::card::Card;
use crate::game::GameState;
use crate::outcome::Outcome;

/// Snapshot of the table handed to a [`Presenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Current game state.
    pub state: GameState,
    /// Player cards in draw order.
    pub player: &'a [Card],
    /// Dealer cards in draw order.
    pub dealer: &'a [Card],
    /// Player score.
    pub player_score: u8,
    /// Dealer score.
    pub dealer_score: u8,
    /// Outcome, once the round has finished.
    pub outcome: Option<Outcome>,
}

/// Receives table updates from the game.
///
/// After every change the game calls [`render`](Self::render). When a round
/// ends it calls [`show_outcome`](Self::show_outcome) followed by
/// `set_input_enabled(false)`; hit and stand requests are rejected until the
/// next round starts.
pub trait Presenter {
    /// Redraws both hands and the player score.
    fn render(&mut self, view: &TableView<'_>);

    /// Displays the message of a finished round.
    fn show_outcome(&mut self, outcome: Outcome);

    /// Enables or disables the hit and stand controls.
    fn set_input_enabled(&mut self, enabled: bool);
}

/// Headless presenter that ignores every update.
impl Presenter for () {
    fn render(&mut self, _view: &TableView<'_>) {}

    fn show_outcome(&mut self, _outcome: Outcome) {}

    fn set_input_enabled(&mut self, _enabled: bool) {}
}
