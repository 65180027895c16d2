use crate::core::{
    cell::{Cell, Mark},
    error::GameError,
};
use itertools::Itertools;
use num::Integer;
use serde::Serialize;
use std::{fmt, str::FromStr};

pub const BOARD_SIDE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Row-major board position, always in `0..NUM_CELLS`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CellIndex(usize);

impl CellIndex {
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index < NUM_CELLS {
            Ok(CellIndex(index))
        } else {
            Err(GameError::CellOutOfRange { cell: index })
        }
    }

    pub(crate) const fn from_const(index: usize) -> Self {
        CellIndex(index)
    }

    pub fn from_location(row: usize, column: usize) -> Result<Self, GameError> {
        if !(1..=BOARD_SIDE).contains(&row) || !(1..=BOARD_SIDE).contains(&column) {
            return Err(GameError::LocationOutOfRange { row, column });
        }

        Self::new((row - 1) * BOARD_SIDE + (column - 1))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn location(self) -> Location {
        let (row, column) = self.0.div_rem(&BOARD_SIDE);
        Location {
            row: row + 1,
            column: column + 1,
        }
    }

    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..NUM_CELLS).map(CellIndex)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row: {}, col: {}", self.row, self.column)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; NUM_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.0]
    }

    pub fn is_occupied(&self, index: CellIndex) -> bool {
        !self.get(index).is_empty()
    }

    /// Copy of this board with one more mark; the receiver is untouched.
    pub fn with_mark(&self, index: CellIndex, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[index.0] = mark.into();
        Self { cells }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIDE)
    }

    pub fn newly_marked_since(&self, previous: &Board) -> Option<CellIndex> {
        CellIndex::all().find(|&index| !self.get(index).is_empty() && previous.get(index).is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows()
            .map(|row| row.iter().map(|cell| cell.symbol()).join(""))
            .join("\n");
        f.write_str(&text)
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let symbols = input
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '/')
            .collect::<Vec<_>>();

        if symbols.len() != NUM_CELLS {
            return Err(GameError::BoardParse {
                input: input.to_string(),
                reason: format!("expected {NUM_CELLS} cells, got {}", symbols.len()),
            });
        }

        let mut cells = [Cell::Empty; NUM_CELLS];
        for (idx, symbol) in symbols.into_iter().enumerate() {
            cells[idx] = Cell::from_symbol(symbol).ok_or_else(|| GameError::BoardParse {
                input: input.to_string(),
                reason: format!("unexpected symbol '{symbol}' at cell {idx}"),
            })?;
        }

        Ok(Board::from_cells(cells))
    }
}
