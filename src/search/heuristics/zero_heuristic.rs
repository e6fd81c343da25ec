use crate::{
    grid::Cell,
    search::heuristics::{Heuristic, HeuristicValue},
};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: Cell, _to: Cell) -> HeuristicValue {
        0
    }
}
