use crate::error::InvalidBoardError;
use rand::{seq::SliceRandom, Rng};
use std::fmt;

/// A single slide, named by the direction the tile travels into the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Row/column offset of the blank when a tile slides this way.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
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

// Tile above, tile below, tile to the left, tile to the right.
const SUCCESSOR_ORDER: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

/// An immutable N×N arrangement of tiles, `0` being the blank.
///
/// Every transform returns a fresh board. Equality is structural: two
/// boards are equal when they have the same size and the same tiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// Builds a board from `size * size` tiles in row-major order.
    ///
    /// The tiles must be a permutation of `0..size * size`.
    pub fn new(size: usize, tiles: Vec<u32>) -> Result<Self, InvalidBoardError> {
        if size == 0 {
            return Err(InvalidBoardError::ZeroSize);
        }
        let too_large = InvalidBoardError::TooLarge { size };
        let expected = size.checked_mul(size).ok_or_else(|| too_large.clone())?;
        let max = u32::try_from(expected - 1).map_err(|_| too_large)?;
        if tiles.len() != expected {
            return Err(InvalidBoardError::TileCount {
                expected,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; expected];
        let mut blank = 0;
        for (index, &value) in tiles.iter().enumerate() {
            if value > max {
                return Err(InvalidBoardError::OutOfRange { value, max });
            }
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(InvalidBoardError::Duplicate { value });
            }
            if value == 0 {
                blank = index;
            }
        }

        Ok(Self { size, tiles, blank })
    }

    /// Builds a board from its rows; the number of rows fixes the size.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, InvalidBoardError> {
        let size = rows.len();
        let mut tiles = Vec::new();
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(InvalidBoardError::RaggedRow {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
            tiles.extend(cells);
        }
        Self::new(size, tiles)
    }

    /// The solved board: `1..size²` in order with the blank in the
    /// bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn goal(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        let cells = size * size;
        let mut tiles: Vec<u32> = (1..cells as u32).collect();
        tiles.push(0);

        Self {
            size,
            tiles,
            blank: cells - 1,
        }
    }

    /// A uniformly shuffled board. Half of these have no solution.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);
        board.tiles.shuffle(rng);
        board.blank = board.tiles.iter().position(|&t| t == 0).unwrap_or(0);
        board
    }

    /// A shuffled board that is guaranteed to be solvable.
    pub fn random_solvable<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        loop {
            let board = Self::random(size, rng);
            if board.is_solvable() {
                return board;
            }
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    /// Row and column of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    fn goal_value(&self, index: usize) -> u32 {
        index as u32 + 1
    }

    /// Number of tiles out of place, not counting the blank.
    pub fn hamming(&self) -> usize {
        let wrong = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(index, &value)| value != self.goal_value(index))
            .count();

        // The blank never matches its goal value.
        wrong - 1
    }

    /// Sum of the grid distances from every tile to its goal cell.
    pub fn manhattan(&self) -> usize {
        let size = self.size as u32;
        let mut distance = 0;
        for (index, &value) in self.tiles.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let (row, col) = (index / self.size, index % self.size);
            let target_row = ((value - 1) / size) as usize;
            let target_col = ((value - 1) % size) as usize;
            distance += row.abs_diff(target_row) + col.abs_diff(target_col);
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[..last]
            .iter()
            .enumerate()
            .all(|(index, &value)| value == self.goal_value(index))
    }

    /// Slides one tile into the blank, if that tile exists.
    pub fn apply(&self, movement: Move) -> Option<Board> {
        let (dr, dc) = movement.as_offset();
        let (row, col) = self.blank_position();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let size = self.size as isize;

        if new_row >= 0 && new_row < size && new_col >= 0 && new_col < size {
            let target = new_row as usize * self.size + new_col as usize;
            let mut tiles = self.tiles.clone();
            tiles.swap(self.blank, target);
            Some(Self {
                size: self.size,
                tiles,
                blank: target,
            })
        } else {
            None
        }
    }

    /// Every board one slide away, paired with the slide that produces it.
    ///
    /// Emission order is fixed: the tile above slides down, the tile below
    /// slides up, the tile on the left slides right, the tile on the right
    /// slides left.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        SUCCESSOR_ORDER
            .iter()
            .filter_map(|&movement| self.apply(movement).map(|board| (movement, board)))
            .collect()
    }

    pub fn neighbours(&self) -> Vec<Board> {
        self.successors().into_iter().map(|(_, board)| board).collect()
    }

    /// Swaps the first horizontally adjacent pair of non-blank tiles,
    /// scanning rows top to bottom.
    ///
    /// Exactly one of a board and its twin can reach the goal, for any
    /// size of at least two. A 1×1 board is its own twin.
    pub fn twin(&self) -> Board {
        if self.size <= 1 {
            return self.clone();
        }

        for (row, cells) in self.tiles.chunks(self.size).enumerate() {
            if let Some(col) = cells.windows(2).position(|pair| pair[0] != 0 && pair[1] != 0) {
                let left = row * self.size + col;
                let mut tiles = self.tiles.clone();
                tiles.swap(left, left + 1);
                return Self {
                    size: self.size,
                    tiles,
                    blank: self.blank,
                };
            }
        }

        self.clone()
    }

    /// Decides solvability from permutation parity alone, without searching.
    pub fn is_solvable(&self) -> bool {
        let inversions = Self::count_inversions(&self.tiles);
        let (blank_row, _) = self.blank_position();

        if self.size % 2 == 1 {
            // Odd-sized puzzle: solvable if inversions count is even
            inversions % 2 == 0
        } else {
            // Even-sized puzzle: solvable if (inversions + blank row index) is odd
            (inversions + blank_row) % 2 == 1
        }
    }

    fn count_inversions(tiles: &[u32]) -> usize {
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                tiles[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    /// Width each tile is right-justified to when printed.
    pub(crate) fn field_width(&self) -> usize {
        let max = self.tiles.len() - 1;
        max.to_string().len().max(2)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.field_width();
        writeln!(f, "{}", self.size)?;
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                write!(f, "{:width$} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
