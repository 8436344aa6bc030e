//! Property tests over random walks away from the goal.

use proptest::prelude::*;
use slider_puzzle::{Move, Puzzle, Solver};

fn walk_strategy() -> impl Strategy<Value = (usize, Vec<Move>)> {
    let moves = prop::collection::vec(prop::sample::select(Move::ALL.to_vec()), 0..24);
    (2usize..=3, moves)
}

/// Applies the legal steps of `moves` to the goal, skipping the rest.
fn walk(size: usize, moves: &[Move]) -> (Puzzle, usize) {
    let mut puzzle = Puzzle::goal(size).unwrap();
    let mut taken = 0;
    for &mv in moves {
        if let Some(next) = puzzle.try_move(mv) {
            puzzle = next;
            taken += 1;
        }
    }
    (puzzle, taken)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solution_is_no_longer_than_the_walk((size, moves) in walk_strategy()) {
        let (start, taken) = walk(size, &moves);
        let solution = Solver::default().solve(&start).unwrap();

        prop_assert!(solution.len() <= taken);
        prop_assert_eq!(solution.len() % 2, taken % 2);
        prop_assert!(start.apply_moves(&solution.moves).unwrap().is_solved());
    }

    #[test]
    fn walks_stay_solvable_and_bounded((size, moves) in walk_strategy()) {
        let (start, taken) = walk(size, &moves);

        prop_assert!(start.is_solvable());
        prop_assert!(start.heuristic() <= taken);
    }

    #[test]
    fn one_illegal_swap_breaks_solvability((size, moves) in walk_strategy()) {
        let (start, _) = walk(size, &moves);
        let mut tiles = start.into_tiles();
        // Swap the first two non-blank tiles.
        let mut tile_slots = (0..tiles.len()).filter(|&i| tiles[i] != 0);
        let (a, b) = (tile_slots.next().unwrap(), tile_slots.next().unwrap());
        tiles.swap(a, b);

        prop_assert!(!Puzzle::new(&tiles).unwrap().is_solvable());
    }
}
