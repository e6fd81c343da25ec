use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A `(row, col)` position on the grid. Coordinates are signed so that
/// neighbour offsets can step off the grid before being rejected by a bounds
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell displaced by `(d_row, d_col)`, or `None` if a coordinate
    /// leaves the `i32` range.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(&self, other: &Cell) -> i64 {
        (self.row as i64 - other.row as i64).abs() + (self.col as i64 - other.col as i64).abs()
    }

    /// Whether the two cells share an edge.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
