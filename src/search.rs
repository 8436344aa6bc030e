//! A* over the move graph.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::puzzle::{Move, Puzzle};

/// Limits for a single search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Give up after expanding this many nodes. `None` searches until the
    /// frontier runs dry, which on wide unsolvable boards is effectively never.
    pub max_expansions: Option<usize>,
}

/// An optimal path and what it cost to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub expanded: usize,
    pub generated: usize,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

struct Node {
    puzzle: Puzzle,
    path: Vec<Move>,
    h: usize,
    f: usize,
    seq: usize,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: lowest f, then lowest h, then oldest.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Finds a minimum-length path from `start` to the goal.
    ///
    /// There is no solvability guard here: check [`Puzzle::is_solvable`] first
    /// or set [`SearchConfig::max_expansions`].
    pub fn solve(&self, start: &Puzzle) -> Result<Solution> {
        let h = start.heuristic();
        if h == 0 {
            return Ok(Solution {
                moves: Vec::new(),
                expanded: 0,
                generated: 0,
            });
        }

        let mut frontier = BinaryHeap::new();
        let mut explored: HashSet<Puzzle> = HashSet::new();
        let mut expanded = 0;
        let mut generated = 1;

        frontier.push(Node {
            puzzle: start.clone(),
            path: Vec::new(),
            h,
            f: h,
            seq: 0,
        });

        while let Some(node) = frontier.pop() {
            if explored.contains(&node.puzzle) {
                continue;
            }

            if node.h == 0 {
                tracing::debug!(
                    size = start.size(),
                    length = node.path.len(),
                    expanded,
                    generated,
                    "search finished"
                );
                return Ok(Solution {
                    moves: node.path,
                    expanded,
                    generated,
                });
            }

            if let Some(limit) = self.config.max_expansions {
                if expanded >= limit {
                    tracing::trace!(limit, frontier = frontier.len(), "expansion cap reached");
                    return Err(PuzzleError::SearchLimitExceeded { expanded });
                }
            }

            let g = node.path.len() + 1;
            for (child, dir) in node.puzzle.neighbors(node.path.last().copied()) {
                if explored.contains(&child) {
                    continue;
                }

                let h = child.heuristic();
                let mut path = Vec::with_capacity(g);
                path.extend_from_slice(&node.path);
                path.push(dir);

                frontier.push(Node {
                    puzzle: child,
                    path,
                    h,
                    f: g + h,
                    seq: generated,
                });
                generated += 1;
            }

            explored.insert(node.puzzle);
            expanded += 1;
        }

        tracing::debug!(expanded, "frontier exhausted without reaching the goal");
        Err(PuzzleError::Unsolvable)
    }
}
