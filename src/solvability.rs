//! Inversion-parity test for reachability of the goal layout.

use crate::puzzle::Puzzle;

pub fn is_solvable(puzzle: &Puzzle) -> bool {
    let inversions = count_inversions(puzzle.tiles());

    if puzzle.size() % 2 == 1 {
        inversions % 2 == 0
    } else {
        // Even width: blank row parity must match inversion parity.
        puzzle.blank_row() % 2 == inversions % 2
    }
}

/// Number of out-of-order pairs among the non-blank tiles, counted with a
/// merge sort.
pub fn count_inversions(tiles: &[u8]) -> usize {
    let mut values: Vec<u8> = tiles.iter().copied().filter(|&t| t != 0).collect();
    let mut scratch = vec![0; values.len()];
    merge_count(&mut values, &mut scratch)
}

fn merge_count(values: &mut [u8], scratch: &mut [u8]) -> usize {
    let len = values.len();
    if len <= 1 {
        return 0;
    }

    let mid = len / 2;
    let mut inversions = {
        let (left, right) = values.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_count(left, left_scratch) + merge_count(right, right_scratch)
    };

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        if values[i] <= values[j] {
            scratch[k] = values[i];
            i += 1;
        } else {
            scratch[k] = values[j];
            inversions += mid - i;
            j += 1;
        }
        k += 1;
    }
    scratch[k..k + mid - i].copy_from_slice(&values[i..mid]);
    k += mid - i;
    scratch[k..k + len - j].copy_from_slice(&values[j..len]);

    values.copy_from_slice(&scratch[..len]);
    inversions
}
