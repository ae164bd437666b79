//! External-sampling CFR over the fixed river betting tree.
//!
//! One `Session` owns all mutable solver state for one board: cumulative
//! regrets, cumulative strategy weights, the cached payoff matrix, and the
//! seeded sampler. Each training round samples one pair of opposing
//! holdings and walks the 4-node tree once, so per-round cost is O(1);
//! the reach-weighted average strategy converges toward a Nash equilibrium
//! as rounds accumulate. Solving a new board means building a new
//! `Session`; tables are never rebound in place.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::cards::{hand_code, Board, NUM_HANDS};
use crate::game_tree::{Node, ALL_NODES, FOLD_UTILITY, NUM_NODES};
use crate::payoff::PayoffMatrix;

pub const DEFAULT_ITERATIONS: usize = 50_000;
pub const DEFAULT_SEED: u64 = 1;

/// Per-(node, holding) table of one value per action.
type ActionTable = [[[f64; 2]; NUM_HANDS]; NUM_NODES];

/// Regret matching: probabilities proportional to positive cumulative
/// regret, uniform when no action has positive regret. Always sums to 1.
pub fn regret_strategy(regrets: &[f64; 2]) -> [f64; 2] {
    let positive = [regrets[0].max(0.0), regrets[1].max(0.0)];
    let sum = positive[0] + positive[1];
    if sum > 0.0 {
        [positive[0] / sum, positive[1] / sum]
    } else {
        [0.5, 0.5]
    }
}

/// Normalize a cumulative strategy row into an average strategy, falling
/// back to uniform when the row was never visited.
pub fn normalize_strategy(weights: &[f64; 2]) -> [f64; 2] {
    let sum = weights[0] + weights[1];
    if sum > 0.0 {
        [weights[0] / sum, weights[1] / sum]
    } else {
        [0.5, 0.5]
    }
}

/// Solver state for one fixed board.
pub struct Session {
    board: Board,
    payoff: PayoffMatrix,
    regrets: ActionTable,
    strategy_sum: ActionTable,
    iterations: usize,
    rng: StdRng,
}

impl Session {
    /// Build a session for a board. The payoff matrix is computed here,
    /// once, and cached for the session's lifetime.
    pub fn new(board: Board, seed: u64) -> Session {
        let payoff = PayoffMatrix::new(&board);
        Session {
            board,
            payoff,
            regrets: [[[0.0; 2]; NUM_HANDS]; NUM_NODES],
            strategy_sum: [[[0.0; 2]; NUM_HANDS]; NUM_NODES],
            iterations: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn payoff(&self) -> &PayoffMatrix {
        &self.payoff
    }

    /// Total training rounds requested so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Run `iterations` Monte-Carlo training rounds. Each round samples
    /// two holdings independently and uniformly from the full universe;
    /// rounds where the draws coincide or either holding is blocked by the
    /// board are skipped without touching any accumulator, so blocked
    /// holdings extract as the uniform fallback. Runs to completion on the
    /// calling thread.
    pub fn train(&mut self, iterations: usize) {
        for _ in 0..iterations {
            let hand0 = self.rng.gen_range(0..NUM_HANDS);
            let hand1 = self.rng.gen_range(0..NUM_HANDS);
            if hand0 == hand1 || self.board.is_blocked(hand0) || self.board.is_blocked(hand1) {
                continue;
            }
            self.evaluate(Node::Root, 1.0, 1.0, hand0, hand1);
        }
        self.iterations += iterations;
    }

    /// Current strategy at (node, holding) from regret matching, with the
    /// average-strategy accumulator fed by the acting player's own reach
    /// probability.
    fn strategy(&mut self, node: Node, hand: usize, own_reach: f64) -> [f64; 2] {
        let strategy = regret_strategy(&self.regrets[node.index()][hand]);
        let row = &mut self.strategy_sum[node.index()][hand];
        row[0] += strategy[0] * own_reach;
        row[1] += strategy[1] * own_reach;
        strategy
    }

    /// Showdown sign from the acting player's perspective: +1 when the
    /// actor's holding wins, -1 when it loses, 0 on a split.
    #[inline]
    fn showdown_sign(&self, player: usize, hand0: usize, hand1: usize) -> f64 {
        if player == 0 {
            self.payoff.sign(hand0, hand1) as f64
        } else {
            self.payoff.sign(hand1, hand0) as f64
        }
    }

    /// Recursive counterfactual evaluation of one sampled matchup.
    ///
    /// `p0`/`p1` are the players' reach probabilities along the sampled
    /// path; the return value is the node's expected utility for the
    /// acting player, negated by the caller (zero-sum). Regrets are
    /// weighted by the opponent's reach probability.
    fn evaluate(&mut self, node: Node, p0: f64, p1: f64, hand0: usize, hand1: usize) -> f64 {
        let player = node.player();
        let my_hand = if player == 0 { hand0 } else { hand1 };
        let own_reach = if player == 0 { p0 } else { p1 };
        let strategy = self.strategy(node, my_hand, own_reach);

        let mut util = [0.0f64; 2];
        match node {
            Node::Root => {
                util[0] = -self.evaluate(Node::CheckedTo, p0 * strategy[0], p1, hand0, hand1);
                util[1] = -self.evaluate(Node::FacingBet, p0 * strategy[1], p1, hand0, hand1);
            }
            Node::FacingBet => {
                util[0] = FOLD_UTILITY;
                util[1] = self.showdown_sign(player, hand0, hand1) * node.showdown_win();
            }
            Node::CheckedTo => {
                util[0] = self.showdown_sign(player, hand0, hand1) * node.showdown_win();
                util[1] = -self.evaluate(Node::CheckRaise, p0, p1 * strategy[1], hand0, hand1);
            }
            Node::CheckRaise => {
                util[0] = FOLD_UTILITY;
                util[1] = self.showdown_sign(player, hand0, hand1) * node.showdown_win();
            }
        }

        let node_util = strategy[0] * util[0] + strategy[1] * util[1];
        let opp_reach = if player == 0 { p1 } else { p0 };
        let row = &mut self.regrets[node.index()][my_hand];
        row[0] += (util[0] - node_util) * opp_reach;
        row[1] += (util[1] - node_util) * opp_reach;
        node_util
    }

    /// Average strategy at (node, holding): the normalized cumulative
    /// strategy row, uniform when never visited. Pure read.
    pub fn average_strategy(&self, node: Node, hand: usize) -> [f64; 2] {
        normalize_strategy(&self.strategy_sum[node.index()][hand])
    }

    /// Extract the full solution artifact: the echoed board and, for every
    /// node in wire order, its action labels and the average strategy of
    /// all 52 holdings.
    pub fn solution(&self) -> Solution {
        let nodes = ALL_NODES
            .iter()
            .map(|&node| {
                let hands = (0..NUM_HANDS)
                    .map(|h| (hand_code(h).to_string(), self.average_strategy(node, h)))
                    .collect();
                NodeStrategy {
                    node: node.name().to_string(),
                    player: node.player(),
                    actions: node.actions().iter().map(|a| a.to_string()).collect(),
                    hands,
                }
            })
            .collect();

        Solution {
            board: self.board.codes(),
            iterations: self.iterations,
            nodes,
        }
    }
}

// ---------------------------------------------------------------------------
// Solution artifact
// ---------------------------------------------------------------------------

/// Average strategy at one node: action frequencies for every holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStrategy {
    /// Wire name: "", "b", "c" or "cb".
    pub node: String,
    pub player: usize,
    pub actions: Vec<String>,
    pub hands: BTreeMap<String, [f64; 2]>,
}

/// Full solution for one board, in node wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub board: Vec<String>,
    pub iterations: usize,
    pub nodes: Vec<NodeStrategy>,
}

impl Solution {
    pub fn node(&self, name: &str) -> Option<&NodeStrategy> {
        self.nodes.iter().find(|n| n.node == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regret_matching_all_zero_is_uniform() {
        assert_eq!(regret_strategy(&[0.0, 0.0]), [0.5, 0.5]);
    }

    #[test]
    fn regret_matching_all_negative_is_uniform() {
        assert_eq!(regret_strategy(&[-3.0, -0.5]), [0.5, 0.5]);
    }

    #[test]
    fn regret_matching_clips_negative() {
        let s = regret_strategy(&[-2.0, 6.0]);
        assert_eq!(s, [0.0, 1.0]);
    }

    #[test]
    fn regret_matching_proportional() {
        let s = regret_strategy(&[1.0, 3.0]);
        assert!((s[0] - 0.25).abs() < 1e-12);
        assert!((s[1] - 0.75).abs() < 1e-12);
        assert!((s[0] + s[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn untrained_session_extracts_uniform() {
        let board = Board::parse("Ks Th 7s 4d 2s").unwrap();
        let session = Session::new(board, 7);
        for node in ALL_NODES {
            for h in 0..NUM_HANDS {
                assert_eq!(session.average_strategy(node, h), [0.5, 0.5]);
            }
        }
    }

    #[test]
    fn solution_lists_nodes_in_wire_order() {
        let board = Board::parse("Ks Th 7s 4d 2s").unwrap();
        let mut session = Session::new(board, 7);
        session.train(100);
        let solution = session.solution();
        let names: Vec<&str> = solution.nodes.iter().map(|n| n.node.as_str()).collect();
        assert_eq!(names, vec!["", "b", "c", "cb"]);
        assert_eq!(solution.board, vec!["Ks", "Th", "7s", "4d", "2s"]);
        assert_eq!(solution.iterations, 100);
        for node in &solution.nodes {
            assert_eq!(node.hands.len(), NUM_HANDS);
        }
    }
}
