use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Invalid board notation: {0}")]
    InvalidBoardNotation(String),

    #[error("River board needs exactly 5 cards, got {0}")]
    WrongBoardSize(usize),

    #[error("Duplicate board card: {0}")]
    DuplicateBoardCard(String),

    #[error("Unknown hand code: {0}")]
    UnknownHand(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type SolverResult<T> = Result<T, SolverError>;
