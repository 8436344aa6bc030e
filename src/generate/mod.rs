//! Random-restart drivers for the difficulty generators.

pub mod annealing;
pub mod climbing;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

pub use annealing::{anneal, AnnealingConfig};
pub use climbing::{climb, ClimbingConfig};

/// Bounds on the outer restart loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RestartConfig {
    pub max_restarts: usize,
    /// Shuffles tried per restart before a solvable one turns up.
    pub max_shuffle_attempts: usize,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            max_restarts: 1000,
            max_shuffle_attempts: 1000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Generator {
    pub restarts: RestartConfig,
    pub annealing: AnnealingConfig,
    pub climbing: ClimbingConfig,
}

impl Generator {
    /// A solvable layout whose conflict penalty is at least `min_conflicts`.
    pub fn with_min_conflicts<R: Rng + ?Sized>(
        &self,
        size: usize,
        min_conflicts: usize,
        rng: &mut R,
    ) -> Result<Puzzle> {
        for attempt in 1..=self.restarts.max_restarts {
            let start = Puzzle::random_solvable(size, rng, self.restarts.max_shuffle_attempts)?;
            let (puzzle, conflicts) = anneal(start, min_conflicts, &self.annealing, rng);
            if conflicts >= min_conflicts {
                tracing::debug!(size, conflicts, attempt, "conflict target met");
                return Ok(puzzle);
            }
            tracing::trace!(attempt, conflicts, "annealing restart");
        }

        Err(PuzzleError::GenerationExhausted {
            attempts: self.restarts.max_restarts,
        })
    }

    /// A solvable layout whose optimal solution takes at least `min_length`
    /// moves.
    pub fn with_min_solution_length<R: Rng + ?Sized>(
        &self,
        size: usize,
        min_length: usize,
        rng: &mut R,
    ) -> Result<Puzzle> {
        for attempt in 1..=self.restarts.max_restarts {
            let start = Puzzle::random_solvable(size, rng, self.restarts.max_shuffle_attempts)?;
            let (puzzle, length) = climb(start, min_length, &self.climbing)?;
            if length >= min_length {
                tracing::debug!(size, length, attempt, "solution length target met");
                return Ok(puzzle);
            }
            tracing::trace!(attempt, length, "hill climbing restart");
        }

        Err(PuzzleError::GenerationExhausted {
            attempts: self.restarts.max_restarts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::conflict_penalty;
    use crate::search::Solver;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn conflict_target_is_met() {
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle = Generator::default()
            .with_min_conflicts(3, 6, &mut rng)
            .unwrap();
        assert!(conflict_penalty(&puzzle) >= 6);
        assert!(puzzle.is_solvable());
    }

    #[test]
    fn length_target_is_met() {
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle = Generator::default()
            .with_min_solution_length(3, 10, &mut rng)
            .unwrap();
        assert!(Solver::default().solve(&puzzle).unwrap().len() >= 10);
    }

    #[test]
    fn same_seed_same_layout() {
        let generator = Generator::default();
        let first = generator
            .with_min_conflicts(3, 4, &mut StdRng::seed_from_u64(9))
            .unwrap();
        let second = generator
            .with_min_conflicts(3, 4, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unreachable_target_exhausts_restarts() {
        let generator = Generator {
            restarts: RestartConfig {
                max_restarts: 3,
                ..RestartConfig::default()
            },
            ..Generator::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generator.with_min_conflicts(2, 100, &mut rng),
            Err(PuzzleError::GenerationExhausted { attempts: 3 })
        );
        // Twelve states, none farther than six moves from the goal.
        assert_eq!(
            generator.with_min_solution_length(2, 7, &mut rng),
            Err(PuzzleError::GenerationExhausted { attempts: 3 })
        );
    }

    #[test]
    fn invalid_width_is_rejected_before_searching() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Generator::default().with_min_conflicts(1, 1, &mut rng),
            Err(PuzzleError::UnsupportedWidth { width: 1 })
        );
    }
}
