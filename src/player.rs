//! Player representation.

use crate::hand::Hand;

/// An individual participating in a game, owning exactly one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player's hand.
    hand: Hand,
}

impl Player {
    /// Creates a player owning the given hand.
    #[must_use]
    pub const fn new(hand: Hand) -> Self {
        Self { hand }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the player's hand for mutation by the owning game logic.
    #[must_use]
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
