use rand::{seq::SliceRandom, Rng};
use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::heuristic;
use crate::solvability;

/// Largest width whose tiles still fit in a `u8`.
pub const MAX_WIDTH: usize = 16;

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Right,
    Up,
    Down,
    Left,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Right, Move::Up, Move::Down, Move::Left];

    /// Index offset applied to the blank on a board of the given width.
    pub fn as_offset(&self, size: usize) -> isize {
        let size = size as isize;
        match self {
            Move::Right => 1,
            Move::Up => -size,
            Move::Down => size,
            Move::Left => -1,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Move::Right => 'H',
            Move::Up => 'J',
            Move::Down => 'K',
            Move::Left => 'L',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'H' => Ok(Move::Right),
            'J' => Ok(Move::Up),
            'K' => Ok(Move::Down),
            'L' => Ok(Move::Left),
            _ => Err(PuzzleError::InvalidMoveSymbol { symbol }),
        }
    }

    /// Every move except the one that undoes `prev`.
    pub fn non_reversing(prev: Option<Move>) -> impl Iterator<Item = Move> {
        Self::ALL
            .into_iter()
            .filter(move |dir| prev.map_or(true, |last| *dir != last.opposite()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A validated w×w layout. Tile `v` belongs at index `v`; `0` is the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    size: usize,
    tiles: Box<[u8]>,
    blank: usize,
}

impl Puzzle {
    pub fn new(tiles: &[u8]) -> Result<Self> {
        let size = width_of(tiles.len())?;

        let mut seen = vec![false; tiles.len()];
        for &tile in tiles {
            match seen.get_mut(tile as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::NotAPermutation),
            }
        }

        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or(PuzzleError::NotAPermutation)?;

        Ok(Self {
            size,
            tiles: tiles.into(),
            blank,
        })
    }

    pub fn goal(size: usize) -> Result<Self> {
        check_width(size)?;
        let tiles: Vec<u8> = (0..size * size).map(|v| v as u8).collect();
        Ok(Self {
            size,
            tiles: tiles.into(),
            blank: 0,
        })
    }

    /// Shuffles until the layout passes the parity check, giving up after
    /// `max_attempts` shuffles.
    pub fn random_solvable<R: Rng + ?Sized>(
        size: usize,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Self> {
        let mut puzzle = Self::goal(size)?;

        for _ in 0..max_attempts {
            puzzle.tiles.shuffle(rng);
            puzzle.blank = puzzle.tiles.iter().position(|&t| t == 0).unwrap_or(0);

            if puzzle.is_solvable() {
                return Ok(puzzle);
            }
        }

        Err(PuzzleError::ShuffleExhausted {
            attempts: max_attempts,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn blank(&self) -> usize {
        self.blank
    }

    pub fn blank_row(&self) -> usize {
        self.blank / self.size
    }

    pub fn into_tiles(self) -> Vec<u8> {
        self.tiles.into_vec()
    }

    pub fn is_legal_move(&self, movement: Move) -> bool {
        let row = self.blank / self.size;
        let col = self.blank % self.size;
        let edge = self.size - 1;

        match movement {
            Move::Up => row != 0,
            Move::Down => row != edge,
            Move::Left => col != 0,
            Move::Right => col != edge,
        }
    }

    /// Slides the blank one step.
    ///
    /// # Panics
    ///
    /// Panics if the move would push the blank off the board; use
    /// [`Puzzle::try_move`] when legality is not already known.
    pub fn apply_move(&self, movement: Move) -> Self {
        assert!(
            self.is_legal_move(movement),
            "illegal move {movement} with blank at {}",
            self.blank
        );

        let target = (self.blank as isize + movement.as_offset(self.size)) as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        Self {
            size: self.size,
            tiles,
            blank: target,
        }
    }

    pub fn try_move(&self, movement: Move) -> Option<Self> {
        if self.is_legal_move(movement) {
            Some(self.apply_move(movement))
        } else {
            None
        }
    }

    /// Replays a path, failing on the first step that leaves the board.
    pub fn apply_moves(&self, moves: &[Move]) -> Result<Self> {
        let mut current = self.clone();
        for (step, &mv) in moves.iter().enumerate() {
            current = current
                .try_move(mv)
                .ok_or(PuzzleError::IllegalMove { step, mv })?;
        }
        Ok(current)
    }

    /// Legal successors that do not undo `prev`, in [`Move::ALL`] order.
    pub fn neighbors(&self, prev: Option<Move>) -> Vec<(Self, Move)> {
        Move::non_reversing(prev)
            .filter_map(|dir| self.try_move(dir).map(|next| (next, dir)))
            .collect()
    }

    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(i, &tile)| tile as usize == i)
    }

    pub fn is_solvable(&self) -> bool {
        solvability::is_solvable(self)
    }

    pub fn heuristic(&self) -> usize {
        heuristic::heuristic(self)
    }
}

fn check_width(size: usize) -> Result<()> {
    if (2..=MAX_WIDTH).contains(&size) {
        Ok(())
    } else {
        Err(PuzzleError::UnsupportedWidth { width: size })
    }
}

fn width_of(len: usize) -> Result<usize> {
    let size = len.isqrt();
    if size * size != len || size < 2 {
        return Err(PuzzleError::InvalidLength { len });
    }
    check_width(size)?;
    Ok(size)
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                if val == 0 {
                    write!(f, "{:>3} ", ".")?;
                } else {
                    write!(f, "{:3} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
