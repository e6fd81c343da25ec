use crate::grid::{Cell, GameObject};

/// Neighbour offsets in expansion order: down, up, right, left. Every engine
/// iterates neighbours in this order, which fixes tie-breaking in FIFO and
/// best-first expansion.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Read-only view of a grid used by the search engines.
pub trait StateSpace {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// The content of the cell. Cells outside the grid read as walls.
    fn cell_content(&self, cell: Cell) -> GameObject;

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows()
            && (cell.col as usize) < self.cols()
    }

    fn is_walkable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cell_content(cell) != GameObject::Wall
    }

    /// Walkable orthogonal neighbours of `cell`, in [`NEIGHBOUR_OFFSETS`]
    /// order. Offsets that overflow the coordinate range are skipped.
    fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(|neighbour| self.is_walkable(*neighbour))
            .collect()
    }

    /// Row-major index of an in-bounds cell.
    fn linear_index(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell), "cell {cell} is out of bounds");
        cell.row as usize * self.cols() + cell.col as usize
    }
}
