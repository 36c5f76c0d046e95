//! Card sources the game draws from.
//!
//! The engine only ever asks a [`CardSource`] for one card at a time through
//! an opaque session. Shuffling, deck size and the remaining count belong to
//! the source.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::SourceError;

/// Something that deals cards, one at a time.
///
/// Both methods may suspend, e.g. while waiting on a remote deck service.
#[expect(
    async_fn_in_trait,
    reason = "card sources are driven from a single thread"
)]
pub trait CardSource {
    /// Opaque handle of an opened deck.
    type Session;

    /// Opens a new deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the card supply cannot be reached.
    async fn init(&mut self) -> Result<Self::Session, SourceError>;

    /// Draws the next card from an opened deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the card supply cannot be reached, is exhausted or
    /// answers with something that is not a card.
    async fn draw(&mut self, session: &mut Self::Session) -> Result<Card, SourceError>;
}

/// A shuffled stack of cards, drawn from the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

/// Local card source that shuffles whole decks with a seeded RNG.
///
/// Every [`CardSource::init`] builds and shuffles a fresh shoe, so a new
/// session starts with all cards again.
#[derive(Debug, Clone)]
pub struct ShuffledDeck {
    decks: u8,
    rng: ChaCha8Rng,
}

impl ShuffledDeck {
    /// Creates a source dealing from `decks` decks (at least one).
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::source::ShuffledDeck;
    ///
    /// let source = ShuffledDeck::new(1, 42);
    /// assert_eq!(source.decks(), 1);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        Self {
            decks: decks.max(1),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the number of decks per shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Creates and shuffles a shoe with the configured number of decks.
    fn create_shoe(&mut self) -> Shoe {
        let mut cards = Vec::with_capacity(self.decks as usize * DECK_SIZE);

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(&mut self.rng);
        Shoe { cards }
    }
}

impl Default for ShuffledDeck {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl CardSource for ShuffledDeck {
    type Session = Shoe;

    async fn init(&mut self) -> Result<Shoe, SourceError> {
        let shoe = self.create_shoe();
        debug!(cards = shoe.remaining(), "shuffled a new shoe");
        Ok(shoe)
    }

    async fn draw(&mut self, session: &mut Shoe) -> Result<Card, SourceError> {
        session.pop().ok_or(SourceError::Exhausted)
    }
}

/// Card source that deals a fixed sequence of cards in order.
///
/// Useful for replaying a known round. Each [`CardSource::init`] restarts at
/// the first card; drawing past the end fails with
/// [`SourceError::Exhausted`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackedDeck {
    cards: Vec<Card>,
}

impl StackedDeck {
    /// Creates a source that deals `cards` front to back.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Appends cards to the end of the sequence.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns the full sequence.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl CardSource for StackedDeck {
    /// Index of the next card to deal.
    type Session = usize;

    async fn init(&mut self) -> Result<usize, SourceError> {
        Ok(0)
    }

    async fn draw(&mut self, session: &mut usize) -> Result<Card, SourceError> {
        let card = self
            .cards
            .get(*session)
            .copied()
            .ok_or(SourceError::Exhausted)?;
        *session += 1;
        Ok(card)
    }
}
