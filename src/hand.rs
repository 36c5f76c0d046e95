//! Hand representation shared by the player and the dealer.

use alloc::vec::Vec;

use crate::card::Card;

/// Sums the point values of `cards`, aces always counting 11.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.points()))
}

/// An ordered, append-only run of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// The score is derived from the cards every time and never cached.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand scores over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns whether the hand scores exactly 21, whatever the card count.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.score() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
