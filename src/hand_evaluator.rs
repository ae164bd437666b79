//! Showdown hand evaluation for the one-hole-card river abstraction.
//!
//! A holding is a single hole card; its showdown value is the best 5-card
//! hand drawn from that card plus the 5 board cards. Evaluation produces a
//! packed integer score so that strict integer comparison reproduces hand
//! ordering exactly, ties included.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;

use crate::cards::{Board, Card, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HandResult {
    pub rank: u8,
    pub category: HandCategory,
    pub kickers: Vec<u8>,
}

impl HandResult {
    pub fn new(rank: u8, category: HandCategory, kickers: Vec<u8>) -> Self {
        HandResult {
            rank,
            category,
            kickers,
        }
    }

    /// Pack (rank, kickers) into a single non-negative integer whose
    /// ordering equals `Ord` on the result. Kicker values are 2..=14 and a
    /// hand carries at most 5 of them, so 4 bits each below a 4-bit rank.
    pub fn score(&self) -> i32 {
        let mut score = (self.rank as i32) << 20;
        for (i, &k) in self.kickers.iter().take(5).enumerate() {
            score |= (k as i32) << (16 - 4 * i);
        }
        score
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

impl PartialEq for HandResult {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.kickers == other.kickers
    }
}

impl Eq for HandResult {}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rank.cmp(&other.rank) {
            Ordering::Equal => self.kickers.cmp(&other.kickers),
            ord => ord,
        }
    }
}

fn is_flush(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

fn is_straight(values: &[u8]) -> Option<u8> {
    let mut unique: Vec<u8> = values
        .iter()
        .copied()
        .collect::<std::collections::BTreeSet<u8>>()
        .into_iter()
        .collect();
    unique.sort_unstable();
    unique.reverse();

    if unique.len() < 5 {
        return None;
    }

    if unique.len() == 5 && unique[0] - unique[4] == 4 {
        return Some(unique[0]);
    }

    // Wheel: A-2-3-4-5
    let set: std::collections::HashSet<u8> = values.iter().copied().collect();
    if set.contains(&14)
        && set.contains(&2)
        && set.contains(&3)
        && set.contains(&4)
        && set.contains(&5)
    {
        return Some(5);
    }

    None
}

fn evaluate_five(cards: &[Card; 5]) -> HandResult {
    let mut values: Vec<u8> = cards.iter().map(|c| c.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = is_flush(cards);
    let straight_high = is_straight(&values);

    let mut counts = [0u8; 15];
    for &v in &values {
        counts[v as usize] += 1;
    }

    if flush && straight_high.is_some() {
        let high = straight_high.unwrap();
        if high == 14 {
            return HandResult::new(9, HandCategory::RoyalFlush, vec![14]);
        }
        return HandResult::new(8, HandCategory::StraightFlush, vec![high]);
    }

    // Frequency list: (count, value) sorted by count desc, then value desc
    let mut freq: Vec<(u8, u8)> = Vec::new();
    for v in (2..=14u8).rev() {
        if counts[v as usize] > 0 {
            freq.push((counts[v as usize], v));
        }
    }
    freq.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    // Four of a kind
    if freq[0].0 == 4 {
        let quad_val = freq[0].1;
        let kicker = values.iter().find(|&&v| v != quad_val).copied().unwrap();
        return HandResult::new(7, HandCategory::FourOfAKind, vec![quad_val, kicker]);
    }

    // Full house
    if freq[0].0 == 3 && freq[1].0 == 2 {
        return HandResult::new(6, HandCategory::FullHouse, vec![freq[0].1, freq[1].1]);
    }

    // Flush
    if flush {
        return HandResult::new(5, HandCategory::Flush, values.clone());
    }

    // Straight
    if let Some(high) = straight_high {
        return HandResult::new(4, HandCategory::Straight, vec![high]);
    }

    // Three of a kind
    if freq[0].0 == 3 {
        let trip_val = freq[0].1;
        let mut kicks: Vec<u8> = values.iter().filter(|&&v| v != trip_val).copied().collect();
        kicks.sort_unstable_by(|a, b| b.cmp(a));
        let mut kickers = vec![trip_val];
        kickers.extend(kicks);
        return HandResult::new(3, HandCategory::ThreeOfAKind, kickers);
    }

    // Two pair
    let mut pair_vals: Vec<u8> = (2..=14).filter(|&v| counts[v as usize] == 2).collect();
    pair_vals.sort_unstable_by(|a, b| b.cmp(a));

    if pair_vals.len() == 2 {
        let kicker = values
            .iter()
            .find(|&&v| !pair_vals.contains(&v))
            .copied()
            .unwrap();
        return HandResult::new(
            2,
            HandCategory::TwoPair,
            vec![pair_vals[0], pair_vals[1], kicker],
        );
    }

    // One pair
    if pair_vals.len() == 1 {
        let pair_val = pair_vals[0];
        let mut kicks: Vec<u8> = values.iter().filter(|&&v| v != pair_val).copied().collect();
        kicks.sort_unstable_by(|a, b| b.cmp(a));
        let mut kickers = vec![pair_val];
        kickers.extend(kicks);
        return HandResult::new(1, HandCategory::OnePair, kickers);
    }

    // High card
    HandResult::new(0, HandCategory::HighCard, values)
}

/// Best 5-card hand from one hole card plus the board.
pub fn evaluate_river_hand(hole: Card, board: &Board) -> HandResult {
    let mut all_cards: Vec<Card> = Vec::with_capacity(BOARD_SIZE + 1);
    all_cards.push(hole);
    all_cards.extend_from_slice(board.cards());

    let mut best: Option<HandResult> = None;
    for combo in all_cards.iter().combinations(5) {
        let five: [Card; 5] = [*combo[0], *combo[1], *combo[2], *combo[3], *combo[4]];
        let result = evaluate_five(&five);
        if best.as_ref().map_or(true, |b| result > *b) {
            best = Some(result);
        }
    }
    best.unwrap()
}

/// Packed strength score of a hole card against the board. Higher is
/// better; equal scores are exact showdown ties.
pub fn river_strength(hole: Card, board: &Board) -> i32 {
    evaluate_river_hand(hole, board).score()
}

/// Sign of the showdown comparison between two hole cards on a board.
pub fn compare_river_hands(hole1: Card, hole2: Card, board: &Board) -> i32 {
    match river_strength(hole1, board).cmp(&river_strength(hole2, board)) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_card;

    fn board(s: &str) -> Board {
        Board::parse(s).unwrap()
    }

    #[test]
    fn score_ordering_matches_result_ordering() {
        let b = board("Ks Th 7s 4d 2s");
        let pair = evaluate_river_hand(parse_card("Kh").unwrap(), &b);
        let high = evaluate_river_hand(parse_card("Ah").unwrap(), &b);
        assert!(pair > high);
        assert!(pair.score() > high.score());
    }

    #[test]
    fn pair_beats_ace_high() {
        let b = board("Ks Th 7s 4d 2s");
        assert_eq!(
            compare_river_hands(parse_card("Kh").unwrap(), parse_card("Ah").unwrap(), &b),
            1
        );
    }

    #[test]
    fn exact_tie_between_irrelevant_suits() {
        // Neither heart nor diamond interacts with the spade-heavy board.
        let b = board("Ks Th 7s 4d 2s");
        assert_eq!(
            compare_river_hands(parse_card("Ah").unwrap(), parse_card("Ad").unwrap(), &b),
            0
        );
    }

    #[test]
    fn higher_kicker_breaks_tie() {
        let b = board("Ks Th 7s 4d 2s");
        assert_eq!(
            compare_river_hands(parse_card("Ah").unwrap(), parse_card("Qh").unwrap(), &b),
            1
        );
    }

    #[test]
    fn board_pair_makes_trips() {
        let b = board("Ks Kd 7s 4d 2s");
        let trips = evaluate_river_hand(parse_card("Kh").unwrap(), &b);
        assert_eq!(trips.category, HandCategory::ThreeOfAKind);
    }

    #[test]
    fn one_card_flush_on_four_flush_board() {
        let b = board("Ks 9s 7s 4s 2d");
        let flush = evaluate_river_hand(parse_card("As").unwrap(), &b);
        assert_eq!(flush.category, HandCategory::Flush);
        let no_flush = evaluate_river_hand(parse_card("Ah").unwrap(), &b);
        assert_eq!(no_flush.category, HandCategory::HighCard);
    }

    #[test]
    fn one_card_straight() {
        let b = board("9h 8d 7s 4d 2s");
        // T-9-8-7 still needs a J or 6; four to a straight is nothing.
        let four_to_it = evaluate_river_hand(parse_card("Th").unwrap(), &b);
        assert_ne!(four_to_it.category, HandCategory::Straight);
        let b2 = board("9h 8d 7s 6d 2s");
        let made = evaluate_river_hand(parse_card("Th").unwrap(), &b2);
        assert_eq!(made.category, HandCategory::Straight);
        assert_eq!(made.kickers, vec![10]);
    }

    #[test]
    fn wheel_straight_on_board() {
        let b = board("5h 4d 3s 2c Kd");
        let wheel = evaluate_river_hand(parse_card("Ah").unwrap(), &b);
        assert_eq!(wheel.category, HandCategory::Straight);
        assert_eq!(wheel.kickers, vec![5]);
    }
}
