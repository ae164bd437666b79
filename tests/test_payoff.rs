use river_gto::cards::{parse_hand, Board, NUM_HANDS};
use river_gto::payoff::{PayoffMatrix, BLOCKED_STRENGTH};

fn matrix_for(board: &str) -> (Board, PayoffMatrix) {
    let board = Board::parse(board).unwrap();
    let matrix = PayoffMatrix::new(&board);
    (board, matrix)
}

// ---------------------------------------------------------------------------
// Matrix invariants
// ---------------------------------------------------------------------------

#[test]
fn antisymmetric_over_all_pairs() {
    let (_, matrix) = matrix_for("Ks Th 7s 4d 2s");
    for i in 0..NUM_HANDS {
        for j in 0..NUM_HANDS {
            assert_eq!(
                matrix.sign(i, j),
                -matrix.sign(j, i),
                "antisymmetry violated at ({}, {})",
                i,
                j
            );
        }
    }
}

#[test]
fn entries_are_signs() {
    let (_, matrix) = matrix_for("Ks Th 7s 4d 2s");
    for i in 0..NUM_HANDS {
        for j in 0..NUM_HANDS {
            assert!(matrix.sign(i, j).abs() <= 1);
        }
    }
}

#[test]
fn blocked_hands_lose_every_legal_comparison() {
    let (board, matrix) = matrix_for("Ks Th 7s 4d 2s");
    for i in 0..NUM_HANDS {
        if !board.is_blocked(i) {
            continue;
        }
        assert_eq!(matrix.strength(i), BLOCKED_STRENGTH);
        for j in 0..NUM_HANDS {
            if board.is_blocked(j) {
                continue;
            }
            assert_eq!(matrix.sign(i, j), -1, "blocked hand {} should lose to {}", i, j);
            assert_eq!(matrix.sign(j, i), 1);
        }
    }
}

#[test]
fn legal_strengths_are_non_negative() {
    let (board, matrix) = matrix_for("Ks Th 7s 4d 2s");
    for h in 0..NUM_HANDS {
        if !board.is_blocked(h) {
            assert!(matrix.strength(h) >= 0);
        }
    }
}

// ---------------------------------------------------------------------------
// Showdown ordering on a known board
// ---------------------------------------------------------------------------

#[test]
fn pairs_outrank_high_cards() {
    let (_, matrix) = matrix_for("Ks Th 7s 4d 2s");
    let kh = parse_hand("Kh").unwrap();
    let ah = parse_hand("Ah").unwrap();
    let qh = parse_hand("Qh").unwrap();
    // Top pair beats ace high beats queen high.
    assert_eq!(matrix.sign(kh, ah), 1);
    assert_eq!(matrix.sign(ah, qh), 1);
    assert_eq!(matrix.sign(qh, kh), -1);
}

#[test]
fn pair_ranks_follow_board_ranks() {
    let (_, matrix) = matrix_for("Ks Th 7s 4d 2s");
    let pairs = ["Kh", "Td", "7h", "4h", "2h"];
    for w in pairs.windows(2) {
        let hi = parse_hand(w[0]).unwrap();
        let lo = parse_hand(w[1]).unwrap();
        assert_eq!(
            matrix.sign(hi, lo),
            1,
            "{} should outrank {}",
            w[0],
            w[1]
        );
    }
}

#[test]
fn irrelevant_suits_tie_exactly() {
    // No flush is possible with one hole card here, so suits never matter
    // and equal ranks split the pot.
    let (_, matrix) = matrix_for("Ks Th 7s 4d 2s");
    let ah = parse_hand("Ah").unwrap();
    let ad = parse_hand("Ad").unwrap();
    assert_eq!(matrix.sign(ah, ad), 0);
    assert_eq!(matrix.sign(ad, ah), 0);
}

#[test]
fn one_card_flush_dominates_top_pair() {
    let (_, matrix) = matrix_for("Ks 9s 7s 4s 2d");
    let flush = parse_hand("As").unwrap();
    let pair = parse_hand("Kd").unwrap();
    assert_eq!(matrix.sign(flush, pair), 1);
}
