//! The fixed single-street betting tree.
//!
//! One check/bet round with a check-raise line, four decision nodes total:
//!
//! ```text
//! Root:       player 0  { check -> CheckedTo,        bet  -> FacingBet }
//! FacingBet:  player 1  { fold  -> p0 wins pot 2,    call -> showdown pot 4 }
//! CheckedTo:  player 1  { check -> showdown pot 2,   bet  -> CheckRaise }
//! CheckRaise: player 0  { fold  -> p1 wins pot 2,    call -> showdown pot 6 }
//! ```
//!
//! Pot sizes are total chips: a 2-unit ante (1 per player) plus one
//! bet-sized unit per raise. Terminal utilities are net winnings for the
//! acting player, so a showdown pays `sign * pot/2` (the opponent's stake)
//! and a fold costs the folder their 1-unit ante.

/// Decision nodes in traversal order. The discriminants are the indices
/// into every per-node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Root = 0,
    FacingBet = 1,
    CheckedTo = 2,
    CheckRaise = 3,
}

pub const NUM_NODES: usize = 4;

pub const ALL_NODES: [Node; NUM_NODES] = [
    Node::Root,
    Node::FacingBet,
    Node::CheckedTo,
    Node::CheckRaise,
];

/// Actions are binary everywhere; these index the per-node action pair.
pub const ACTION_FIRST: usize = 0;
pub const ACTION_SECOND: usize = 1;

/// Net cost of folding: the folder forfeits the ante they staked. In this
/// tree the folder never has chips invested beyond the ante at either fold
/// node.
pub const FOLD_UTILITY: f64 = -1.0;

impl Node {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Node> {
        ALL_NODES.get(idx).copied()
    }

    /// Player to act: 0 at Root and CheckRaise, 1 elsewhere. The mapping is
    /// asymmetric (player 0 both opens the tree and faces the check-raise).
    #[inline]
    pub fn player(self) -> usize {
        match self {
            Node::Root | Node::CheckRaise => 0,
            Node::FacingBet | Node::CheckedTo => 1,
        }
    }

    /// Wire name of the node: the action prefix that reaches it.
    pub fn name(self) -> &'static str {
        match self {
            Node::Root => "",
            Node::FacingBet => "b",
            Node::CheckedTo => "c",
            Node::CheckRaise => "cb",
        }
    }

    /// Display label for the node.
    pub fn label(self) -> &'static str {
        match self {
            Node::Root => "Root",
            Node::FacingBet => "Facing bet",
            Node::CheckedTo => "Checked to",
            Node::CheckRaise => "Check-raise",
        }
    }

    /// Short action labels in action-index order.
    pub fn actions(self) -> [&'static str; 2] {
        match self {
            Node::Root | Node::CheckedTo => ["c", "b"],
            Node::FacingBet | Node::CheckRaise => ["f", "c"],
        }
    }

    /// Human-readable action words, for display only.
    pub fn action_words(self) -> [&'static str; 2] {
        match self {
            Node::Root | Node::CheckedTo => ["check", "bet"],
            Node::FacingBet | Node::CheckRaise => ["fold", "call"],
        }
    }

    /// Total pot (in chips) for the terminal continuation reached by the
    /// given action, or 0.0 when the action leads to another decision node.
    pub fn pot_size(self, action: usize) -> f64 {
        match (self, action) {
            (Node::FacingBet, ACTION_FIRST) => 2.0,  // fold: ante pot
            (Node::FacingBet, ACTION_SECOND) => 4.0, // call: ante + bet + call
            (Node::CheckedTo, ACTION_FIRST) => 2.0,  // check back: ante pot
            (Node::CheckRaise, ACTION_FIRST) => 2.0, // fold: ante pot
            (Node::CheckRaise, ACTION_SECOND) => 6.0, // call: ante + raise line
            _ => 0.0,
        }
    }

    /// Net winnings of the showdown victor at this node's showdown
    /// terminal: half the pot (the loser's total stake).
    #[inline]
    pub fn showdown_win(self) -> f64 {
        match self {
            Node::FacingBet => 2.0,
            Node::CheckedTo => 1.0,
            Node::CheckRaise => 3.0,
            Node::Root => 0.0, // no showdown terminal at the root
        }
    }
}
