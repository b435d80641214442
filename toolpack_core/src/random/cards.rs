//! # Card Shuffler
//!
//! Builds an ordered deck, applies a fair Fisher-Yates shuffle (via
//! `SliceRandom::shuffle`), and deals a prefix of the requested size.
//! Supports the standard 52-card deck and the 32-card Piquet deck
//! (ranks 2-6 removed).
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use toolpack_core::random::cards::{sample, DeckKind, ShuffleInput};
//!
//! let input = ShuffleInput { deck: DeckKind::Standard52, draw: 5 };
//! let result = sample(&input, &mut StdRng::seed_from_u64(3));
//! assert_eq!(result.cards.len(), 5);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Card suits, in deck-building order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck-building order
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Unicode symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

/// Card ranks, low to high (Ace high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks, low to high
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Short label for display ("2".."10", "J", "Q", "K", "A")
    pub fn label(&self) -> &'static str {
        match self {
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
            Rank::Ace => "A",
        }
    }
}

/// A single playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Deck sizes offered by the shuffler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    /// Full 52-card deck: 4 suits x 13 ranks
    Standard52,
    /// Piquet 32-card deck: 4 suits x 8 ranks (2-6 removed)
    Piquet32,
}

impl DeckKind {
    /// All deck kinds for UI selection
    pub const ALL: [DeckKind; 2] = [DeckKind::Standard52, DeckKind::Piquet32];

    /// Number of cards in this deck
    pub fn size(&self) -> u32 {
        match self {
            DeckKind::Standard52 => 52,
            DeckKind::Piquet32 => 32,
        }
    }

    /// Whether a rank belongs to this deck
    fn includes(&self, rank: Rank) -> bool {
        match self {
            DeckKind::Standard52 => true,
            DeckKind::Piquet32 => rank >= Rank::Seven,
        }
    }

    /// Build the ordered full deck, suit-major.
    pub fn build(&self) -> Vec<Card> {
        let mut deck = Vec::with_capacity(self.size() as usize);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                if self.includes(rank) {
                    deck.push(Card { rank, suit });
                }
            }
        }
        deck
    }
}

/// Input parameters for a shuffle-and-draw.
///
/// ## JSON Example
///
/// ```json
/// {
///   "deck": "Standard52",
///   "draw": 5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuffleInput {
    /// Which deck to shuffle
    pub deck: DeckKind,

    /// Number of cards to deal from the top; clamped to [1, deck size]
    pub draw: u32,
}

impl ShuffleInput {
    /// Draw count clamped to the selected deck's size
    pub fn clamped_draw(&self) -> u32 {
        self.draw.clamp(1, self.deck.size())
    }
}

/// Results from a shuffle-and-draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuffleResult {
    /// Cards dealt from the top of the shuffled deck
    pub cards: Vec<Card>,

    /// Size of the deck that was shuffled
    pub deck_size: u32,
}

/// Shuffle the deck and deal. Never fails; the draw is clamped first.
pub fn sample<R: Rng + ?Sized>(input: &ShuffleInput, rng: &mut R) -> ShuffleResult {
    let mut deck = input.deck.build();
    deck.shuffle(rng);
    deck.truncate(input.clamped_draw() as usize);
    ShuffleResult {
        cards: deck,
        deck_size: input.deck.size(),
    }
}
