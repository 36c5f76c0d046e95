//! Card types, point values and image asset keys.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn asset_code(self) -> char {
        match self {
            Self::Hearts => 'S',
            Self::Diamonds => 'K',
            Self::Spades => 'T',
            Self::Clubs => 'P',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank for a number in `1..=13` (1 = Ace, 11 = Jack,
    /// 12 = Queen, 13 = King).
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=13 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// Point value of the rank.
    ///
    /// An ace is always worth 11; there is no soft/hard re-valuation.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    const fn asset_code(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => '0',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Point value of the card.
    #[must_use]
    pub const fn points(self) -> u8 {
        self.rank.points()
    }

    /// Image asset key for the card.
    #[must_use]
    pub const fn asset_key(self) -> AssetKey {
        AssetKey::Face {
            suit: self.suit.asset_code(),
            rank: self.rank.asset_code(),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Image path of the generic card back.
pub const CARD_BACK: &str = "assets/back.jpg";

/// Key of a card image, as resolved by the presentation layer.
///
/// Displays as an image path, e.g. `assets/SA.jpg` for the ace of hearts.
/// Presenters show [`AssetKey::Back`] when a face image cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    /// A card face: suit letter followed by rank letter or digit.
    Face {
        /// Suit code (`S` hearts, `K` diamonds, `T` spades, `P` clubs).
        suit: char,
        /// Rank code (`A`, `2`..`9`, `0` for ten, `J`, `Q`, `K`).
        rank: char,
    },
    /// The generic card back.
    Back,
}

impl AssetKey {
    /// Returns the key to fall back to when this asset is missing.
    #[must_use]
    pub const fn fallback(self) -> Self {
        Self::Back
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Face { suit, rank } => write!(f, "assets/{suit}{rank}.jpg"),
            Self::Back => f.write_str(CARD_BACK),
        }
    }
}

impl fmt::Display for Card {
    /// Short form like `AS` (ace of spades) or `10H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        let suit = match self.suit {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };
        write!(f, "{rank}{suit}")
    }
}
