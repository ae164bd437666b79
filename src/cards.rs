use std::fmt;

use once_cell::sync::Lazy;

use crate::error::{SolverError, SolverResult};

pub const RANKS_STR: &str = "23456789TJQKA";
pub const SUITS_STR: &str = "shdc";

/// Number of one-card holdings in the river abstraction (one per deck card).
pub const NUM_HANDS: usize = 52;

/// Number of cards on a river board.
pub const BOARD_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn from_char(c: char) -> SolverResult<Rank> {
        match c {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(SolverError::InvalidRank(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Index into RANKS_STR order: Two = 0, Ace = 12.
    pub fn index(self) -> usize {
        self as usize - 2
    }
}

pub const ALL_RANKS: [Rank; 13] = [
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn from_char(c: char) -> SolverResult<Suit> {
        match c.to_ascii_lowercase() {
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(SolverError::InvalidSuit(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }

    /// Index into SUITS_STR order: Spades = 0, Clubs = 3.
    pub fn index(self) -> usize {
        self as usize
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

pub fn parse_card(notation: &str) -> SolverResult<Card> {
    let notation = notation.trim();
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() != 2 {
        return Err(SolverError::InvalidCardNotation(notation.to_string()));
    }
    let rank = Rank::from_char(chars[0].to_ascii_uppercase())?;
    let suit = Suit::from_char(chars[1])?;
    Ok(Card::new(rank, suit))
}

// ---------------------------------------------------------------------------
// Hand universe
// ---------------------------------------------------------------------------

/// The 52 one-card holdings in rank-major order: "2s", "2h", "2d", "2c",
/// "3s", ..., "Ac". Index = rank_index * 4 + suit_index.
pub static HAND_CODES: Lazy<Vec<String>> = Lazy::new(|| {
    ALL_RANKS
        .iter()
        .flat_map(|&r| {
            ALL_SUITS
                .iter()
                .map(move |&s| format!("{}{}", r.to_char(), s.to_char()))
        })
        .collect()
});

/// Universe index of a card.
#[inline]
pub fn hand_index(card: Card) -> usize {
    card.rank.index() * ALL_SUITS.len() + card.suit.index()
}

/// Card at a universe index.
pub fn index_card(idx: usize) -> Card {
    Card::new(ALL_RANKS[idx / 4], ALL_SUITS[idx % 4])
}

/// Code string for a universe index.
pub fn hand_code(idx: usize) -> &'static str {
    &HAND_CODES[idx]
}

/// Universe index of a hand code like "Ah".
pub fn parse_hand(notation: &str) -> SolverResult<usize> {
    let card =
        parse_card(notation).map_err(|_| SolverError::UnknownHand(notation.to_string()))?;
    Ok(hand_index(card))
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A fixed river board: exactly 5 distinct cards, plus the derived blocked
/// flag for each holding in the universe (true iff the holding's card sits
/// on the board).
#[derive(Debug, Clone)]
pub struct Board {
    cards: [Card; BOARD_SIZE],
    blocked: [bool; NUM_HANDS],
}

impl Board {
    pub fn new(cards: [Card; BOARD_SIZE]) -> SolverResult<Board> {
        for i in 0..BOARD_SIZE {
            for j in (i + 1)..BOARD_SIZE {
                if cards[i] == cards[j] {
                    return Err(SolverError::DuplicateBoardCard(cards[i].to_string()));
                }
            }
        }
        let mut blocked = [false; NUM_HANDS];
        for &c in &cards {
            blocked[hand_index(c)] = true;
        }
        Ok(Board { cards, blocked })
    }

    /// Parse a board from whitespace-separated (or run-together) 2-char
    /// card codes, e.g. "Ks Th 7s 4d 2s" or "KsTh7s4d2s".
    pub fn parse(notation: &str) -> SolverResult<Board> {
        let cleaned: String = notation
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();
        if cleaned.len() % 2 != 0 {
            return Err(SolverError::InvalidBoardNotation(notation.trim().to_string()));
        }
        let chars: Vec<char> = cleaned.chars().collect();
        let mut cards = Vec::with_capacity(BOARD_SIZE);
        for pair in chars.chunks(2) {
            let code: String = pair.iter().collect();
            cards.push(parse_card(&code)?);
        }
        if cards.len() != BOARD_SIZE {
            return Err(SolverError::WrongBoardSize(cards.len()));
        }
        let fixed: [Card; BOARD_SIZE] = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        Board::new(fixed)
    }

    pub fn cards(&self) -> &[Card; BOARD_SIZE] {
        &self.cards
    }

    /// True iff the holding at this universe index shares its card with
    /// the board.
    #[inline]
    pub fn is_blocked(&self, hand: usize) -> bool {
        self.blocked[hand]
    }

    /// Board card codes in board order.
    pub fn codes(&self) -> Vec<String> {
        self.cards.iter().map(|c| c.to_string()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codes().join(" "))
    }
}
