//! Error types for game operations.

use thiserror::Error;

/// Errors reported by a [`CardSource`](crate::source::CardSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The card supply could not be reached.
    #[error("card supply unreachable")]
    Unreachable,
    /// The card supply has no cards left.
    #[error("card supply exhausted")]
    Exhausted,
    /// The card supply returned something that is not a card.
    #[error("card supply returned a malformed card")]
    Malformed,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is still in progress.
    #[error("invalid game state for starting a round")]
    InvalidState,
    /// A card could not be drawn; no cards were dealt.
    #[error("card source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// A card could not be drawn; the action did not happen.
    #[error("card source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}
