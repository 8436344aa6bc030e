//! Optimal N-puzzle solving and difficulty-targeted puzzle generation.
//!
//! Layouts are flat, row-major tile lists where tile `v` belongs at index `v`
//! and `0` is the blank, so `[0, 1, 2, 3]` is the solved 2x2 board.

pub mod error;
pub mod generate;
pub mod heuristic;
pub mod puzzle;
pub mod search;
pub mod solvability;

use rand::Rng;

pub use error::{PuzzleError, Result};
pub use generate::{AnnealingConfig, ClimbingConfig, Generator, RestartConfig};
pub use puzzle::{Move, Puzzle};
pub use search::{SearchConfig, Solution, Solver};

/// Shortest move sequence taking `tiles` to the goal.
///
/// Unsolvable layouts are rejected with [`PuzzleError::Unsolvable`] before any
/// search runs.
pub fn solve(tiles: &[u8]) -> Result<Vec<Move>> {
    let puzzle = Puzzle::new(tiles)?;
    if !puzzle.is_solvable() {
        return Err(PuzzleError::Unsolvable);
    }
    Ok(Solver::default().solve(&puzzle)?.moves)
}

/// Whether `tiles` can reach the goal, decided by inversion parity.
pub fn is_solvable(tiles: &[u8]) -> Result<bool> {
    Ok(Puzzle::new(tiles)?.is_solvable())
}

/// Manhattan distance plus twice the linear-conflict count.
pub fn heuristic(tiles: &[u8]) -> Result<usize> {
    Ok(Puzzle::new(tiles)?.heuristic())
}

/// A solvable layout whose conflict penalty (twice the linear-conflict count,
/// as added by [`heuristic()`]) is at least `min_conflicts`.
pub fn generate_with_min_conflicts<R: Rng + ?Sized>(
    size: usize,
    min_conflicts: usize,
    rng: &mut R,
) -> Result<Vec<u8>> {
    Generator::default()
        .with_min_conflicts(size, min_conflicts, rng)
        .map(Puzzle::into_tiles)
}

/// A solvable layout whose optimal solution is at least `min_length` moves.
pub fn generate_with_min_solution_length<R: Rng + ?Sized>(
    size: usize,
    min_length: usize,
    rng: &mut R,
) -> Result<Vec<u8>> {
    Generator::default()
        .with_min_solution_length(size, min_length, rng)
        .map(Puzzle::into_tiles)
}

/// Renders a path with one letter per move (`H` right, `J` up, `K` down,
/// `L` left).
pub fn moves_to_string(moves: &[Move]) -> String {
    moves.iter().map(Move::symbol).collect()
}

/// Inverse of [`moves_to_string`].
pub fn parse_moves(symbols: &str) -> Result<Vec<Move>> {
    symbols.chars().map(Move::from_symbol).collect()
}
