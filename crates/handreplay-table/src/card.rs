use std::fmt;
use std::str::FromStr;

use crate::TableError;

/// Color family a suit is printed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SuitTone {
    /// Hearts and diamonds.
    Warm,
    /// Clubs and spades.
    Cool,
}

/// Card suit, written as its lowercase letter in card codes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const fn all() -> [Suit; 4] {
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
    }

    /// `h`, `d`, `c` or `s`; anything else is not a suit.
    pub const fn from_char(c: char) -> Option<Suit> {
        match c {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    /// Unicode suit symbol.
    pub const fn glyph(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }

    pub const fn tone(self) -> SuitTone {
        match self {
            Suit::Hearts | Suit::Diamonds => SuitTone::Warm,
            Suit::Clubs | Suit::Spades => SuitTone::Cool,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parsed card name: rank label followed by one suit letter, e.g. `"Ad"`,
/// `"10h"`, `"Ks"`.
///
/// The rank label is kept as written; it is never empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CardCode {
    rank: String,
    suit: Suit,
}

impl CardCode {
    pub fn new(rank: impl Into<String>, suit: Suit) -> Result<Self, TableError> {
        let rank = rank.into();
        if rank.is_empty() {
            return Err(TableError::InvalidCardCode { code: format!("{rank}{suit}"), reason: "rank is empty" });
        }
        Ok(Self { rank, suit })
    }

    /// Splits off the trailing character as the suit; the rest is the rank.
    pub fn parse(code: &str) -> Result<Self, TableError> {
        let invalid = |reason| TableError::InvalidCardCode { code: code.to_string(), reason };

        let mut chars = code.chars();
        let last = chars.next_back().ok_or_else(|| invalid("code is empty"))?;
        let suit = Suit::from_char(last).ok_or_else(|| invalid("suit must be one of h, d, c, s"))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(invalid("rank is empty"));
        }
        Ok(Self { rank: rank.to_string(), suit })
    }

    #[inline]
    pub fn rank(&self) -> &str {
        &self.rank
    }

    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for CardCode {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardCode::parse(s)
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
