//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No round has been dealt yet.
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer draws until reaching the stand threshold.
    DealerTurn,
    /// Round has ended; a new one can be started.
    Finished,
}

impl GameState {
    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }
}
