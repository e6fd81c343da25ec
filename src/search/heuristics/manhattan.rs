use crate::{
    grid::Cell,
    search::heuristics::{Heuristic, HeuristicValue},
};

/// Manhattan distance. Admissible for unit-cost 4-connected movement.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: Cell, to: Cell) -> HeuristicValue {
        from.manhattan(&to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan() {
        let heuristic = Manhattan;
        assert_eq!(heuristic.estimate(Cell::new(0, 0), Cell::new(2, 2)), 4);
        assert_eq!(heuristic.estimate(Cell::new(5, 1), Cell::new(5, 1)), 0);
    }
}
