//! Deck construction and shuffling.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{self, Card, DECK_CARDS};

/// An ordered deck of playing cards.
///
/// The deck owns its card sequence. No uniqueness constraint is enforced;
/// [`Deck::from_cards`] wraps whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the deck, in draw order.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck of 24 cards, shuffled with entropy from the OS.
    ///
    /// The catalog itself is copied, never mutated.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        Self::shuffled_with(&mut rand::rng())
    }

    /// Creates a full deck shuffled deterministically from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use euchre::Deck;
    ///
    /// let a = Deck::from_seed(42);
    /// let b = Deck::from_seed(42);
    /// assert_eq!(a.cards(), b.cards());
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled_with(&mut rng)
    }

    /// Creates a full deck shuffled with the supplied random number generator.
    #[must_use]
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = DECK_CARDS.to_vec();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Wraps the given cards as a deck, preserving their order.
    ///
    /// No validation is performed; callers are trusted to pass a valid card
    /// multiset. Useful for deterministic setups.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the deck, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        card::fmt_card_list(&self.cards, f)
    }
}
