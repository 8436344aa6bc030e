//! Manhattan distance plus linear conflicts. Admissible and consistent, so the
//! first goal popped by the search is optimal.

use crate::puzzle::Puzzle;

pub fn heuristic(puzzle: &Puzzle) -> usize {
    manhattan_distance(puzzle) + conflict_penalty(puzzle)
}

pub fn manhattan_distance(puzzle: &Puzzle) -> usize {
    let size = puzzle.size();
    puzzle
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != 0)
        .map(|(i, &value)| {
            let value = value as usize;
            (i / size).abs_diff(value / size) + (i % size).abs_diff(value % size)
        })
        .sum()
}

/// Extra moves the heuristic charges for conflicts: two per tile that has to
/// step out of its goal line and back.
pub fn conflict_penalty(puzzle: &Puzzle) -> usize {
    2 * linear_conflicts(puzzle)
}

/// Sum over every row and column of the fewest tiles that must leave the line
/// so the tiles already in their goal line end up in goal order.
pub fn linear_conflicts(puzzle: &Puzzle) -> usize {
    let size = puzzle.size();
    let tiles = puzzle.tiles();
    let mut conflicts = 0;
    let mut line = Vec::with_capacity(size);

    // Row conflicts
    for row in 0..size {
        line.clear();
        line.extend(
            tiles[row * size..(row + 1) * size]
                .iter()
                .copied()
                .filter(|&value| value != 0 && value as usize / size == row),
        );
        conflicts += removals_to_sort(&line);
    }

    // Column conflicts
    for col in 0..size {
        line.clear();
        line.extend(
            (0..size)
                .map(|row| tiles[row * size + col])
                .filter(|&value| value != 0 && value as usize % size == col),
        );
        conflicts += removals_to_sort(&line);
    }

    conflicts
}

/// Fewest removals leaving `values` strictly ascending: length minus the
/// longest increasing subsequence.
fn removals_to_sort(values: &[u8]) -> usize {
    if values.len() < 2 {
        return 0;
    }

    // tails[k] is the smallest tail of an increasing run of length k + 1.
    let mut tails: Vec<u8> = Vec::with_capacity(values.len());
    for &value in values {
        match tails.binary_search(&value) {
            Ok(_) => {}
            Err(pos) if pos == tails.len() => tails.push(value),
            Err(pos) => tails[pos] = value,
        }
    }

    values.len() - tails.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(tiles: &[u8]) -> Puzzle {
        Puzzle::new(tiles).unwrap()
    }

    /// Exhaustive form: try dropping each element and recurse.
    fn removals_by_search(values: &[u8]) -> usize {
        if values.windows(2).all(|w| w[0] < w[1]) {
            return 0;
        }
        (0..values.len())
            .map(|i| {
                let mut rest = values.to_vec();
                rest.remove(i);
                removals_by_search(&rest)
            })
            .min()
            .map_or(0, |best| best + 1)
    }

    #[test]
    fn worked_examples() {
        assert_eq!(heuristic(&puzzle(&[0, 1, 2, 3])), 0);
        assert_eq!(heuristic(&puzzle(&[3, 2, 1, 0])), 6);
        assert_eq!(manhattan_distance(&puzzle(&[3, 2, 1, 0])), 6);
        assert_eq!(linear_conflicts(&puzzle(&[3, 2, 1, 0])), 0);
    }

    #[test]
    fn reversed_rows_conflict() {
        let p = puzzle(&[2, 1, 0, 5, 4, 3, 8, 7, 6]);
        // Row 0 holds 2,1; rows 1 and 2 are fully reversed; column 1 is in order.
        assert_eq!(linear_conflicts(&p), 1 + 2 + 2);
        assert_eq!(conflict_penalty(&p), 10);
        assert_eq!(manhattan_distance(&p), 2 + 2 + 2 + 2 + 2);
        assert_eq!(heuristic(&p), 20);
    }

    #[test]
    fn column_conflicts_count_once_per_column() {
        // Tiles 3 and 6 swapped inside column 0.
        let p = puzzle(&[0, 1, 2, 6, 4, 5, 3, 7, 8]);
        assert_eq!(linear_conflicts(&p), 1);
        assert_eq!(heuristic(&p), 1 + 1 + 2);
    }

    #[test]
    fn lis_matches_exhaustive_removal() {
        let groups: [&[u8]; 7] = [
            &[],
            &[4],
            &[1, 2, 3],
            &[3, 2, 1],
            &[2, 3, 1],
            &[4, 1, 3, 2],
            &[12, 4, 8, 0, 15],
        ];
        for group in groups {
            assert_eq!(removals_to_sort(group), removals_by_search(group), "{group:?}");
        }
    }
}
