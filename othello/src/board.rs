//! The 8x8 cell grid and the raw piece dynamics.
//!
//! [`Board`] knows which pieces sit where and how captures resolve, but has
//! no notion of turn order. [`game.rs`] layers the turn cycle on top.
//! Cells are addressed by (row, col) in row-major order from the top left.

use crate::game::Player;
use crate::location::{Location, MoveList};
use crate::utils;
use crate::EDGE_LENGTH;
use arrayvec::ArrayVec;
use std::fmt::{self, Write};

/// The contents of a single space on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// The 8 direction vectors scanned for captures: 4 orthogonal + 4 diagonal.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed 8x8 grid of cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Cell {
    /// The single-character notation for this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.glyph())
    }
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: White at (3,3) and (4,4), Black at (3,4)
    /// and (4,3), every other cell empty.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::White;
        cells[4][4] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        Self { cells }
    }

    /// Build a board from an explicit cell grid. Useful for setting up
    /// test positions.
    pub fn from_cells(cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH]) -> Self {
        Self { cells }
    }

    /// Get the cell at a location.
    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    #[inline]
    fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Returns whether `player` may legally place a piece at `loc`:
    /// the cell must be empty and at least one direction must capture.
    pub fn is_legal(&self, loc: Location, player: Player) -> bool {
        if self.get(loc) != Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(d_row, d_col)| self.captures_along(loc, d_row, d_col, player))
    }

    /// Get every legal placement for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..EDGE_LENGTH as u8 {
            for col in 0..EDGE_LENGTH as u8 {
                if let Some(loc) = Location::from_coords(row, col) {
                    if self.is_legal(loc, player) {
                        moves.push(loc);
                    }
                }
            }
        }
        moves
    }

    /// Place a piece for `player` at `loc` and flip every captured run.
    /// Returns false, with the board untouched, if the placement is illegal.
    pub fn place(&mut self, loc: Location, player: Player) -> bool {
        if !self.is_legal(loc, player) {
            return false;
        }

        self.set(loc, player.cell());
        for &(d_row, d_col) in DIRECTIONS.iter() {
            self.flip_along(loc, d_row, d_col, player);
        }
        true
    }

    /// Count the pieces on the board as (black, white).
    pub fn count_pieces(&self) -> (u8, u8) {
        let mut black = 0;
        let mut white = 0;
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        (black, white)
    }

    /// Count the empty cells on the board.
    pub fn count_empty(&self) -> u8 {
        let (black, white) = self.count_pieces();
        EDGE_LENGTH as u8 * EDGE_LENGTH as u8 - black - white
    }

    /// Walk from `loc` along one direction. True iff the walk crosses at
    /// least one opponent cell and then lands on an in-bounds cell owned
    /// by `player`.
    fn captures_along(&self, loc: Location, d_row: i8, d_col: i8, player: Player) -> bool {
        let opponent = (!player).cell();
        let mut crossed = false;
        let mut cursor = loc.offset(d_row, d_col);

        while let Some(next) = cursor {
            let cell = self.get(next);
            if cell == opponent {
                crossed = true;
                cursor = next.offset(d_row, d_col);
            } else {
                return crossed && cell == player.cell();
            }
        }

        // Ran off the board: the run is unbounded and captures nothing.
        false
    }

    /// Flip the contiguous opponent run beyond `loc` in one direction, but
    /// only when the run terminates on an in-bounds cell owned by `player`.
    fn flip_along(&mut self, loc: Location, d_row: i8, d_col: i8, player: Player) {
        let opponent = (!player).cell();
        let mut run: ArrayVec<[Location; EDGE_LENGTH]> = ArrayVec::new();
        let mut cursor = loc.offset(d_row, d_col);

        while let Some(next) = cursor {
            let cell = self.get(next);
            if cell == opponent {
                run.push(next);
                cursor = next.offset(d_row, d_col);
                continue;
            }

            if cell == player.cell() {
                for captured in run {
                    self.set(captured, player.cell());
                }
            }
            return;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells.iter().flatten().map(|cell| cell.glyph()), f)
    }
}
