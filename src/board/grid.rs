use std::fmt;

use rand::Rng;
use thiserror::Error;

/// The two disc owners. Integer codes at the driver boundary: P1 = 1, P2 = 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Player::P1 => 1,
            Player::P2 => 2,
        }
    }
}

/// One square of the grid. Obstacles are permanent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Obstacle,
    Disc(Player),
}

impl Cell {
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Disc(p) => p.code(),
            Cell::Obstacle => 3,
        }
    }

    pub fn from_code(code: u8) -> Result<Cell, BoardError> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Disc(Player::P1)),
            2 => Ok(Cell::Disc(Player::P2)),
            3 => Ok(Cell::Obstacle),
            other => Err(BoardError::UnknownCode(other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board side must be at least 4, got {0}")]
    SizeTooSmall(usize),
    #[error("expected {expected} cell codes for a {size}x{size} board, got {got}")]
    BadCellCount {
        size: usize,
        expected: usize,
        got: usize,
    },
    #[error("unknown cell code {0}")]
    UnknownCode(u8),
    #[error("unknown sketch character {0:?}")]
    UnknownSketchChar(char),
    #[error("sketch must be a square grid")]
    NotSquare,
}

/// An owned n x n grid of cells.
///
/// Boards are plain values: search branches clone them, and the board a
/// caller hands to the engine is never mutated by a decision call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a board from the flat integer codes used at the driver
    /// boundary (row-major; 0 empty, 1 P1, 2 P2, 3 obstacle).
    pub fn from_codes(size: usize, codes: &[u8]) -> Result<Self, BoardError> {
        if codes.len() != size * size {
            return Err(BoardError::BadCellCount {
                size,
                expected: size * size,
                got: codes.len(),
            });
        }
        let cells = codes
            .iter()
            .map(|&c| Cell::from_code(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { size, cells })
    }

    /// Build a board from a text sketch, one string per row:
    /// '.' empty, '#' obstacle, '1' P1 disc, '2' P2 disc.
    pub fn from_sketch(rows: &[&str]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.chars().count() != size {
                return Err(BoardError::NotSquare);
            }
            for ch in row.chars() {
                cells.push(match ch {
                    '.' => Cell::Empty,
                    '#' => Cell::Obstacle,
                    '1' => Cell::Disc(Player::P1),
                    '2' => Cell::Disc(Player::P2),
                    other => return Err(BoardError::UnknownSketchChar(other)),
                });
            }
        }
        Ok(Self { size, cells })
    }

    /// A fresh game position: each player holds two opposite corners, and
    /// `obstacle_pairs` obstacles are placed centre-mirrored so neither side
    /// is favoured.
    pub fn random_start<R: Rng>(
        size: usize,
        obstacle_pairs: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if size < 4 {
            return Err(BoardError::SizeTooSmall(size));
        }
        let mut board = Self::empty(size);
        let last = size - 1;
        board.set(0, 0, Cell::Disc(Player::P1));
        board.set(last, last, Cell::Disc(Player::P1));
        board.set(0, last, Cell::Disc(Player::P2));
        board.set(last, 0, Cell::Disc(Player::P2));

        let mut placed = 0;
        let mut attempts = 0;
        while placed < obstacle_pairs && attempts < 200 {
            attempts += 1;
            let r = rng.gen_range(0..size);
            let c = rng.gen_range(0..size);
            let (mr, mc) = (last - r, last - c);
            if (r, c) == (mr, mc) {
                continue;
            }
            if board.get(r, c) != Cell::Empty || board.get(mr, mc) != Cell::Empty {
                continue;
            }
            board.set(r, c, Cell::Obstacle);
            board.set(mr, mc, Cell::Obstacle);
            placed += 1;
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.size && (c as usize) < self.size
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Cell {
        self.cells[r * self.size + c]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, cell: Cell) {
        self.cells[r * self.size + c] = cell;
    }

    pub fn disc_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Disc(player))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Number of cells a disc could ever occupy (everything but obstacles).
    pub fn playable_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Obstacle).count()
    }

    /// Fraction of playable cells currently holding a disc, in [0, 1].
    pub fn progress(&self) -> f64 {
        let playable = self.playable_cells();
        if playable == 0 {
            return 1.0;
        }
        let filled = playable - self.empty_count();
        filled as f64 / playable as f64
    }

    /// Flat row-major integer codes, the inverse of `from_codes`.
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.code()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = match self.get(r, c) {
                    Cell::Empty => '.',
                    Cell::Obstacle => '#',
                    Cell::Disc(Player::P1) => '1',
                    Cell::Disc(Player::P2) => '2',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
