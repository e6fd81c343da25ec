use crate::{
    grid::{Cell, StateSpace},
    search::Path,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("path is empty")]
    Empty,
    #[error("path starts at {found}, expected {expected}")]
    WrongStart { expected: Cell, found: Cell },
    #[error("cell {index} of the path is not adjacent to the one before it")]
    NotAdjacent { index: usize },
    #[error("cell {index} of the path is not walkable")]
    NotWalkable { index: usize },
    #[error("path takes {steps} steps, limit is {limit}")]
    StepLimitExceeded { steps: usize, limit: usize },
    #[error("path ends at {found}, expected {expected}")]
    WrongGoal { expected: Cell, found: Cell },
}

/// Check that `path` is a legal walk from `start` to `goal` on the state
/// space within `step_limit` moves.
pub fn validate(
    path: &Path,
    state_space: &dyn StateSpace,
    start: Cell,
    goal: Cell,
    step_limit: usize,
) -> Result<(), ValidationError> {
    let first = path.first().ok_or(ValidationError::Empty)?;
    if first != start {
        return Err(ValidationError::WrongStart {
            expected: start,
            found: first,
        });
    }

    for (index, window) in path.cells().windows(2).enumerate() {
        let index = index + 1;
        if !window[0].is_adjacent(&window[1]) {
            return Err(ValidationError::NotAdjacent { index });
        }
        if !state_space.is_walkable(window[1]) {
            return Err(ValidationError::NotWalkable { index });
        }
    }

    if path.steps() > step_limit {
        return Err(ValidationError::StepLimitExceeded {
            steps: path.steps(),
            limit: step_limit,
        });
    }

    let last = path.last().ok_or(ValidationError::Empty)?;
    if last != goal {
        return Err(ValidationError::WrongGoal {
            expected: goal,
            found: last,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Grid, test_utils::*};

    fn validate_corridor(cells: &[(i32, i32)], step_limit: usize) -> Result<(), ValidationError> {
        let grid = Grid::from_text(WALLED_CORRIDOR_TEXT).unwrap();
        let path: Path = cells.iter().map(|&c| Cell::from(c)).collect();
        validate(
            &path,
            &grid,
            grid.agent().unwrap(),
            grid.goal().unwrap(),
            step_limit,
        )
    }

    const GOOD: [(i32, i32); 7] = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4)];

    #[test]
    fn validate_good_path_ok() {
        assert_eq!(validate_corridor(&GOOD, 6), Ok(()));
    }

    #[test]
    fn validate_bad_paths() {
        assert_eq!(validate_corridor(&[], 6), Err(ValidationError::Empty));
        assert!(matches!(
            validate_corridor(&GOOD[1..], 6),
            Err(ValidationError::WrongStart { .. })
        ));
        assert_eq!(
            validate_corridor(&[(0, 0), (0, 2)], 6),
            Err(ValidationError::NotAdjacent { index: 1 })
        );
        assert_eq!(
            validate_corridor(&[(0, 0), (1, 0)], 6),
            Err(ValidationError::NotWalkable { index: 1 })
        );
        assert_eq!(
            validate_corridor(&GOOD, 5),
            Err(ValidationError::StepLimitExceeded { steps: 6, limit: 5 })
        );
        assert!(matches!(
            validate_corridor(&GOOD[..5], 6),
            Err(ValidationError::WrongGoal { .. })
        ));
    }
}
