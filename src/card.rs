//! Card types, token tables, and the full-deck catalog.

use core::fmt;

use crate::error::ParseCardError;

/// Card suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black suits (clubs and diamonds).
    Black = 1,
    /// Red suits (hearts and spades).
    Red = 2,
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs.
    Clubs = 1,
    /// Diamonds.
    Diamonds = 2,
    /// Hearts.
    Hearts = 3,
    /// Spades.
    Spades = 4,
}

impl Suit {
    /// All suits, in token-table order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit's stable integer code (1 = clubs through 4 = spades).
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the color of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Clubs | Self::Diamonds => Color::Black,
            Self::Hearts | Self::Spades => Color::Red,
        }
    }

    /// Returns the suit's single-character token, e.g. `'D'` for diamonds.
    #[must_use]
    pub const fn token(self) -> char {
        SUIT_TOKENS[(self as u8 - 1) as usize]
    }

    /// Looks up the suit for a single-character token, e.g. `'D'` -> diamonds.
    ///
    /// Returns `None` for tokens outside `CDHS`.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        let mut i = 0;
        while i < SUIT_TOKENS.len() {
            if SUIT_TOKENS[i] == token {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }
}

/// All rank tokens, in ascending rank order (`"9TJQKA"`).
pub const RANK_TOKENS: [char; 6] = ['9', 'T', 'J', 'Q', 'K', 'A'];

/// All suit tokens, in suit-code order (`"CDHS"`).
pub const SUIT_TOKENS: [char; 4] = ['C', 'D', 'H', 'S'];

/// Looks up the numeric rank for a single-character token, e.g. `'J'` -> 11.
///
/// Returns `None` for tokens outside `9TJQKA`.
#[must_use]
pub const fn rank_from_token(token: char) -> Option<u8> {
    let mut i = 0;
    while i < RANK_TOKENS.len() {
        if RANK_TOKENS[i] == token {
            return Some(9 + i as u8);
        }
        i += 1;
    }
    None
}

/// Looks up the single-character token for a numeric rank, e.g. 11 -> `'J'`.
///
/// Returns `None` for ranks outside 9..=14.
#[must_use]
pub const fn rank_token(rank: u8) -> Option<char> {
    if rank >= 9 && rank <= 14 {
        Some(RANK_TOKENS[(rank - 9) as usize])
    } else {
        None
    }
}

/// An individual playing card.
///
/// Cards are immutable: rank and suit are fixed at construction, and the
/// textual form is the two tokens exactly as supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Numeric rank (9 through 14, with 11 = Jack through 14 = Ace).
    rank: u8,
    /// The suit of the card.
    suit: Suit,
    /// Rank and suit tokens as supplied at construction.
    repr: [char; 2],
}

impl Card {
    /// Creates a card from a rank token and a suit token, e.g. `('J', 'D')`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidRank`] or [`ParseCardError::InvalidSuit`]
    /// when a token is outside its table.
    pub fn from_tokens(rank_token: char, suit_token: char) -> Result<Self, ParseCardError> {
        let rank = rank_from_token(rank_token).ok_or(ParseCardError::InvalidRank(rank_token))?;
        let suit = Suit::from_token(suit_token).ok_or(ParseCardError::InvalidSuit(suit_token))?;
        Ok(Self {
            rank,
            suit,
            repr: [rank_token, suit_token],
        })
    }

    /// Creates a card from a two-character token pair, e.g. `"AH"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidLength`] when the input is not exactly
    /// two characters, carrying the observed length; otherwise propagates the
    /// errors of [`Card::from_tokens`].
    pub fn from_pair(pair: &str) -> Result<Self, ParseCardError> {
        let mut tokens = pair.chars();
        match (tokens.next(), tokens.next()) {
            (Some(rank), Some(suit)) if tokens.next().is_none() => Self::from_tokens(rank, suit),
            _ => Err(ParseCardError::InvalidLength(pair.chars().count())),
        }
    }

    /// Returns the numeric rank of the card (9 through 14).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.repr[0], self.repr[1])
    }
}

impl core::str::FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pair(s)
    }
}

/// Writes cards as comma-space-joined tokens, in sequence order.
pub(crate) fn fmt_card_list(cards: &[Card], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

/// Number of cards in a Euchre deck.
pub const DECK_SIZE: usize = RANK_TOKENS.len() * SUIT_TOKENS.len();

const fn build_deck_cards() -> [Card; DECK_SIZE] {
    let mut cards = [Card {
        rank: 9,
        suit: Suit::Clubs,
        repr: ['9', 'C'],
    }; DECK_SIZE];

    let mut r = 0;
    while r < RANK_TOKENS.len() {
        let mut s = 0;
        while s < SUIT_TOKENS.len() {
            cards[r * SUIT_TOKENS.len() + s] = Card {
                rank: 9 + r as u8,
                suit: Suit::ALL[s],
                repr: [RANK_TOKENS[r], SUIT_TOKENS[s]],
            };
            s += 1;
        }
        r += 1;
    }

    cards
}

/// All cards in a Euchre deck, rank-major (`9TJQKA`) then suit-minor (`CDHS`).
///
/// Never mutated; [`Deck::new`](crate::Deck::new) copies it before shuffling.
pub static DECK_CARDS: [Card; DECK_SIZE] = build_deck_cards();
