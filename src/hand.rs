//! A single player's held cards.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{self, Card};
use crate::error::ParseCardError;

/// A collection of cards held by a single player.
///
/// The card list is deliberately public: the owning game logic removes cards
/// as they are played, and no size or content invariant is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards currently held, in deal order.
    pub cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a hand from two-character card tokens such as `"9C"` or `"JD"`.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseCardError`] of the first token that does not parse
    /// as a card; no partial hand is returned.
    pub fn from_tokens<I>(tokens: I) -> Result<Self, ParseCardError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let cards = tokens
            .into_iter()
            .map(|token| Card::from_pair(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        card::fmt_card_list(&self.cards, f)
    }
}
