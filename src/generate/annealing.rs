//! Simulated annealing toward a layout with many linear conflicts.

use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::heuristic::conflict_penalty;
use crate::puzzle::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnealingConfig {
    pub max_iterations: usize,
    /// Floor for the linearly decaying temperature.
    pub min_temperature: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            min_temperature: 0.001,
        }
    }
}

impl AnnealingConfig {
    fn temperature(&self, iteration: usize) -> f64 {
        let progress = iteration as f64 / self.max_iterations.max(1) as f64;
        (1.0 - progress).clamp(self.min_temperature, 1.0)
    }
}

/// Walks from `start` until a layout's conflict penalty reaches `target`.
///
/// Returns the layout where the walk stopped and its penalty. The penalty is
/// below `target` when the iteration budget ran out or every neighbor had
/// already been visited.
pub fn anneal<R: Rng + ?Sized>(
    start: Puzzle,
    target: usize,
    config: &AnnealingConfig,
    rng: &mut R,
) -> (Puzzle, usize) {
    let mut score = conflict_penalty(&start);
    if score >= target {
        return (start, score);
    }

    let mut visited = HashSet::new();
    visited.insert(start.clone());
    let mut current = start;
    let mut prev = None;

    for iteration in 0..config.max_iterations {
        let temperature = config.temperature(iteration);

        let candidates: Vec<_> = current
            .neighbors(prev)
            .into_iter()
            .filter(|(next, _)| !visited.contains(next))
            .collect();
        let Some((next, dir)) = candidates.choose(rng).cloned() else {
            tracing::trace!(iteration, score, "annealing ran out of unvisited neighbors");
            break;
        };

        visited.insert(next.clone());
        let next_score = conflict_penalty(&next);
        if next_score >= target {
            return (next, next_score);
        }

        if accepts(score, next_score, temperature, rng) {
            current = next;
            score = next_score;
            prev = Some(dir);
        }
    }

    (current, score)
}

/// Metropolis rule for a maximizing walk: never refuse an equal or better
/// score, take a loss of `d` with probability `exp(-d / temperature)`.
fn accepts<R: Rng + ?Sized>(old: usize, new: usize, temperature: f64, rng: &mut R) -> bool {
    if new >= old {
        return true;
    }
    let loss = (old - new) as f64;
    (-loss / temperature).exp() > rng.gen::<f64>()
}
