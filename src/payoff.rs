//! Pairwise showdown precomputation for a fixed board.
//!
//! One evaluator call per non-blocked holding, then a 52x52 signed
//! comparison matrix. This is the expensive part of building a solver and
//! runs exactly once per board; the solver caches the result for its
//! lifetime.

use crate::cards::{index_card, Board, NUM_HANDS};
use crate::hand_evaluator::river_strength;

/// Sentinel strength for holdings blocked by the board. Legal scores are
/// non-negative, so a blocked holding loses every comparison against a
/// legal one.
pub const BLOCKED_STRENGTH: i32 = -1;

/// Signed showdown comparison for every ordered pair of holdings.
///
/// `sign(i, j)` is the sign of `strength(i) - strength(j)`: +1 when row
/// wins, -1 when row loses, 0 on an exact strength tie (split pot).
/// Antisymmetric by construction. Stored flat row-major, one byte per
/// entry.
pub struct PayoffMatrix {
    strengths: [i32; NUM_HANDS],
    signs: Vec<i8>,
}

impl PayoffMatrix {
    /// Build the matrix for a board. Blocked holdings get the sentinel
    /// strength; everything else is scored by the river evaluator.
    pub fn new(board: &Board) -> PayoffMatrix {
        let mut strengths = [BLOCKED_STRENGTH; NUM_HANDS];
        for (h, strength) in strengths.iter_mut().enumerate() {
            if !board.is_blocked(h) {
                *strength = river_strength(index_card(h), board);
            }
        }

        let mut signs = vec![0i8; NUM_HANDS * NUM_HANDS];
        for i in 0..NUM_HANDS {
            for j in 0..NUM_HANDS {
                signs[i * NUM_HANDS + j] = match strengths[i].cmp(&strengths[j]) {
                    std::cmp::Ordering::Greater => 1,
                    std::cmp::Ordering::Less => -1,
                    std::cmp::Ordering::Equal => 0,
                };
            }
        }

        PayoffMatrix { strengths, signs }
    }

    /// Packed strength of a holding (BLOCKED_STRENGTH when blocked).
    #[inline]
    pub fn strength(&self, hand: usize) -> i32 {
        self.strengths[hand]
    }

    /// +1 if holding `i` beats holding `j` at showdown, -1 if it loses,
    /// 0 on a tie.
    #[inline]
    pub fn sign(&self, i: usize, j: usize) -> i8 {
        self.signs[i * NUM_HANDS + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_hand;
    use crate::hand_evaluator::compare_river_hands;

    #[test]
    fn matrix_matches_direct_comparison() {
        let board = Board::parse("Ks Th 7s 4d 2s").unwrap();
        let matrix = PayoffMatrix::new(&board);
        for i in 0..NUM_HANDS {
            for j in 0..NUM_HANDS {
                if board.is_blocked(i) || board.is_blocked(j) {
                    continue;
                }
                let direct = compare_river_hands(index_card(i), index_card(j), &board);
                assert_eq!(matrix.sign(i, j) as i32, direct, "mismatch at ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn blocked_strength_below_every_legal_score() {
        let board = Board::parse("Ks Th 7s 4d 2s").unwrap();
        let matrix = PayoffMatrix::new(&board);
        let ks = parse_hand("Ks").unwrap();
        assert_eq!(matrix.strength(ks), BLOCKED_STRENGTH);
        for h in 0..NUM_HANDS {
            if !board.is_blocked(h) {
                assert!(matrix.strength(h) >= 0);
                assert_eq!(matrix.sign(ks, h), -1);
            }
        }
    }

    #[test]
    fn diagonal_is_zero() {
        let board = Board::parse("Ks Th 7s 4d 2s").unwrap();
        let matrix = PayoffMatrix::new(&board);
        for h in 0..NUM_HANDS {
            assert_eq!(matrix.sign(h, h), 0);
        }
    }
}
