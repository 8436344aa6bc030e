use thiserror::Error;

use crate::puzzle::Move;

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("layout of length {len} is not a square grid of at least 2x2")]
    InvalidLength { len: usize },

    #[error("width {width} is outside the supported range 2..=16")]
    UnsupportedWidth { width: usize },

    #[error("tiles must be a permutation of 0..n")]
    NotAPermutation,

    #[error("move {step} ({mv}) pushes the blank off the board")]
    IllegalMove { step: usize, mv: Move },

    #[error("unknown move symbol: {symbol:?}")]
    InvalidMoveSymbol { symbol: char },

    #[error("layout cannot reach the goal")]
    Unsolvable,

    #[error("search gave up after expanding {expanded} nodes")]
    SearchLimitExceeded { expanded: usize },

    #[error("no solvable shuffle found in {attempts} attempts")]
    ShuffleExhausted { attempts: usize },

    #[error("difficulty target not met after {attempts} restarts")]
    GenerationExhausted { attempts: usize },
}
