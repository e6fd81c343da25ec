use crate::grid::{Cell, GameObject, StateSpace};
use itertools::Itertools;
use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    path::Path,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridParseError {
    #[error("failed to read grid file: {0}")]
    Io(#[from] std::io::Error),
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell code {code:?} at row {row}, column {col}")]
    UnknownCode { code: char, row: usize, col: usize },
    #[error("grid contains more than one {0:?}")]
    Duplicate(GameObject),
}

/// A fixed-size grid of game objects. The agent and the goal are unique
/// markers: placing one clears its previous cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<GameObject>,
    agent: Option<Cell>,
    goal: Option<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![GameObject::Empty; rows * cols],
            agent: None,
            goal: None,
        }
    }

    /// Parse the text format: one row per line, one code per cell (see
    /// [`GameObject::code`]). Whitespace between codes and blank lines are
    /// ignored.
    pub fn from_text(text: &str) -> Result<Self, GridParseError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(GridParseError::Empty);
        }

        let cols = rows[0].len();
        let mut grid = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridParseError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &code) in row.iter().enumerate() {
                let object = GameObject::from_code(code).ok_or(GridParseError::UnknownCode {
                    code,
                    row: r,
                    col: c,
                })?;
                let cell = Cell::new(r as i32, c as i32);
                match object {
                    GameObject::Agent if grid.agent.is_some() => {
                        return Err(GridParseError::Duplicate(GameObject::Agent))
                    }
                    GameObject::Goal if grid.goal.is_some() => {
                        return Err(GridParseError::Duplicate(GameObject::Goal))
                    }
                    GameObject::Agent => grid.set_agent(cell),
                    GameObject::Goal => grid.set_goal(cell),
                    _ => grid.set_cell(cell, object),
                }
            }
        }
        Ok(grid)
    }

    pub fn from_path(path: &Path) -> Result<Self, GridParseError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn agent(&self) -> Option<Cell> {
        self.agent
    }

    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    pub fn set_agent(&mut self, cell: Cell) {
        if let Some(previous) = self.agent.take() {
            self.set_cell(previous, GameObject::Empty);
        }
        self.set_cell(cell, GameObject::Agent);
        self.agent = Some(cell);
    }

    pub fn set_goal(&mut self, cell: Cell) {
        if let Some(previous) = self.goal.take() {
            self.set_cell(previous, GameObject::Empty);
        }
        self.set_cell(cell, GameObject::Goal);
        self.goal = Some(cell);
    }

    /// Overwrite a cell. Writes outside the grid are ignored.
    pub fn set_cell(&mut self, cell: Cell, object: GameObject) {
        if !self.in_bounds(cell) {
            return;
        }
        let index = self.linear_index(cell);
        self.cells[index] = object;
        if self.agent == Some(cell) && object != GameObject::Agent {
            self.agent = None;
        }
        if self.goal == Some(cell) && object != GameObject::Goal {
            self.goal = None;
        }
    }

    /// Remove every object, including the agent and goal markers.
    pub fn clear(&mut self) {
        self.cells.fill(GameObject::Empty);
        self.agent = None;
        self.goal = None;
    }

    pub fn count_game_objects(&self) -> HashMap<GameObject, usize> {
        self.cells.iter().copied().counts()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .map(|(r, c)| Cell::new(r as i32, c as i32))
    }
}

impl StateSpace for Grid {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn cell_content(&self, cell: Cell) -> GameObject {
        if self.in_bounds(cell) {
            self.cells[self.linear_index(cell)]
        } else {
            GameObject::Wall
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn parse_then_print() {
        let grid = Grid::from_text(WALLED_CORRIDOR_TEXT).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.agent(), Some(Cell::new(0, 0)));
        assert_eq!(grid.goal(), Some(Cell::new(2, 4)));
        let reparsed = Grid::from_text(&grid.to_string()).unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(Grid::from_text("\n  \n"), Err(GridParseError::Empty)));
        assert!(matches!(
            Grid::from_text("___\n__"),
            Err(GridParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            Grid::from_text("_X_"),
            Err(GridParseError::UnknownCode {
                code: 'X',
                row: 0,
                col: 1
            })
        ));
        assert!(matches!(
            Grid::from_text("A_A"),
            Err(GridParseError::Duplicate(GameObject::Agent))
        ));
        assert!(matches!(
            Grid::from_text("G\nG"),
            Err(GridParseError::Duplicate(GameObject::Goal))
        ));
    }

    #[test]
    fn neighbours_follow_down_up_right_left() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            grid.neighbors(Cell::new(1, 1)),
            vec![
                Cell::new(2, 1),
                Cell::new(0, 1),
                Cell::new(1, 2),
                Cell::new(1, 0)
            ]
        );
        assert_eq!(
            grid.neighbors(Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
    }

    #[test]
    fn walls_and_bounds_are_not_walkable() {
        let mut grid = Grid::new(2, 2);
        grid.set_cell(Cell::new(0, 1), GameObject::Wall);
        assert!(!grid.is_walkable(Cell::new(0, 1)));
        assert!(!grid.is_walkable(Cell::new(-1, 0)));
        assert!(!grid.is_walkable(Cell::new(0, 2)));
        assert!(grid.is_walkable(Cell::new(1, 1)));
        assert_eq!(grid.cell_content(Cell::new(5, 5)), GameObject::Wall);
        assert_eq!(grid.neighbors(Cell::new(0, 0)), vec![Cell::new(1, 0)]);
    }

    #[test]
    fn markers_are_unique() {
        let mut grid = Grid::new(2, 2);
        grid.set_agent(Cell::new(0, 0));
        grid.set_agent(Cell::new(1, 1));
        assert_eq!(grid.cell_content(Cell::new(0, 0)), GameObject::Empty);
        assert_eq!(grid.agent(), Some(Cell::new(1, 1)));

        grid.set_goal(Cell::new(0, 1));
        grid.set_cell(Cell::new(0, 1), GameObject::Coin);
        assert_eq!(grid.goal(), None);
    }

    #[test]
    fn count_and_clear() {
        let mut grid = Grid::from_text(COIN_FIELD_TEXT).unwrap();
        let counts = grid.count_game_objects();
        assert_eq!(counts[&GameObject::Coin], 3);
        assert_eq!(counts[&GameObject::Trash], 1);
        assert_eq!(counts[&GameObject::Agent], 1);

        grid.clear();
        assert_eq!(grid.count_game_objects()[&GameObject::Empty], 16);
        assert_eq!(grid.agent(), None);
        assert_eq!(grid.goal(), None);
    }
}
