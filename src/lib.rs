//! Card, deck, hand, and player types for the game of Euchre, with optional
//! `no_std` support.
//!
//! The crate models the static data of a Euchre game: the 24-card deck
//! (ranks 9 through ace in four suits), shuffled deck construction, and the
//! hand and player types that game logic builds on. Game flow such as tricks,
//! bidding, trump selection, and scoring is out of scope.
//!
//! # Example
//!
//! ```
//! use euchre::{Card, Deck, Hand, Player, Suit};
//!
//! let card = Card::from_pair("JD")?;
//! assert_eq!(card.rank(), 11);
//! assert_eq!(card.suit(), Suit::Diamonds);
//! assert_eq!(card.to_string(), "JD");
//!
//! let deck = Deck::from_seed(42);
//! assert_eq!(deck.cards().len(), euchre::DECK_SIZE);
//!
//! let player = Player::new(Hand::from_tokens(["9C", "TD", "JH", "QS", "KC"])?);
//! assert_eq!(player.hand().to_string(), "9C, TD, JH, QS, KC");
//! # Ok::<(), euchre::ParseCardError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod player;

// Re-export main types
pub use card::{Card, Color, DECK_CARDS, DECK_SIZE, RANK_TOKENS, SUIT_TOKENS, Suit};
pub use deck::Deck;
pub use error::ParseCardError;
pub use hand::Hand;
pub use player::Player;
