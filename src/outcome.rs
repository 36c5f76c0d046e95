//! Round outcome rules.

use core::fmt;

/// Which side took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Neither side won.
    Nobody,
}

/// Terminal result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player scored over 21.
    PlayerBust,
    /// Dealer scored over 21.
    DealerBust,
    /// Player scored exactly 21.
    PlayerBlackjack,
    /// Dealer scored exactly 21.
    DealerBlackjack,
    /// Dealer stood with the higher score.
    DealerWins,
    /// Player beat the standing dealer.
    PlayerWins,
    /// Equal scores.
    Tie,
}

impl Outcome {
    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "You Bust! Dealer Wins!",
            Self::DealerBust => "Dealer Busts! You Win!",
            Self::PlayerBlackjack => "You got Blackjack! You Win!",
            Self::DealerBlackjack => "Dealer got Blackjack! Dealer Wins!",
            Self::DealerWins => "Dealer Wins!",
            Self::PlayerWins => "You Win!",
            Self::Tie => "It's a Tie!",
        }
    }

    /// Returns who won the round.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerWins => Winner::Dealer,
            Self::DealerBust | Self::PlayerBlackjack | Self::PlayerWins => Winner::Player,
            Self::Tie => Winner::Nobody,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluates the outcome for the given scores.
///
/// Rules are checked in order and the first match wins:
/// 1. player over 21
/// 2. dealer over 21
/// 3. player exactly 21
/// 4. dealer exactly 21
/// 5. dealer between `dealer_stands_at` and 20: compare scores
///
/// Returns `None` while the round should continue.
///
/// ```
/// use bjtable::outcome::{Outcome, evaluate};
///
/// assert_eq!(evaluate(22, 18, 17), Some(Outcome::PlayerBust));
/// assert_eq!(evaluate(15, 10, 17), None);
/// ```
#[must_use]
pub const fn evaluate(player: u8, dealer: u8, dealer_stands_at: u8) -> Option<Outcome> {
    if player > 21 {
        Some(Outcome::PlayerBust)
    } else if dealer > 21 {
        Some(Outcome::DealerBust)
    } else if player == 21 {
        Some(Outcome::PlayerBlackjack)
    } else if dealer == 21 {
        Some(Outcome::DealerBlackjack)
    } else if dealer >= dealer_stands_at {
        Some(if dealer > player {
            Outcome::DealerWins
        } else if dealer < player {
            Outcome::PlayerWins
        } else {
            Outcome::Tie
        })
    } else {
        None
    }
}
