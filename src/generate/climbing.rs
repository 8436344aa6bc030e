//! Hill climbing toward a layout with a long optimal solution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::puzzle::{Move, Puzzle};
use crate::search::{SearchConfig, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClimbingConfig {
    pub max_iterations: usize,
    /// Limits for the full search run on every adopted layout.
    pub search: SearchConfig,
}

impl Default for ClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 12,
            search: SearchConfig::default(),
        }
    }
}

/// Climbs from `start`, ranking neighbors by heuristic and confirming each
/// step with a full search.
///
/// Returns the last adopted layout and its optimal solution length, which is
/// short of `target` when a local maximum or the iteration budget stopped the
/// climb. Search failures on a probe are returned as errors.
pub fn climb(start: Puzzle, target: usize, config: &ClimbingConfig) -> Result<(Puzzle, usize)> {
    let solver = Solver::new(config.search);
    let mut current = start;
    let mut length = None;
    let mut prev: Option<Move> = None;
    let mut max_score = 0;

    for iteration in 0..config.max_iterations {
        let Some((next, dir, score)) = best_neighbor(&current, prev) else {
            break;
        };
        if score < max_score {
            tracing::trace!(iteration, score, max_score, "hill climb hit a local maximum");
            break;
        }

        let solved = solver.solve(&next)?.len();
        current = next;
        prev = Some(dir);
        length = Some(solved);
        if solved >= target {
            break;
        }
        max_score = score;
    }

    let length = match length {
        Some(length) => length,
        None => solver.solve(&current)?.len(),
    };
    Ok((current, length))
}

/// Highest-heuristic successor that does not undo `prev`. Later neighbors in
/// [`Move::ALL`] order win ties.
fn best_neighbor(current: &Puzzle, prev: Option<Move>) -> Option<(Puzzle, Move, usize)> {
    let mut best: Option<(Puzzle, Move, usize)> = None;
    for (next, dir) in current.neighbors(prev) {
        let score = next.heuristic();
        if best.as_ref().map_or(true, |&(_, _, top)| score >= top) {
            best = Some((next, dir, score));
        }
    }
    best
}
