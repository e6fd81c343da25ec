use crate::{
    grid::Cell,
    search::heuristics::{Manhattan, ZeroHeuristic},
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = i64;

pub trait Heuristic: Debug {
    /// Estimate the number of moves from `from` to `to`.
    fn estimate(&self, from: Cell, to: Cell) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Manhattan distance, admissible on a 4-connected grid.")]
    Manhattan,
    #[clap(name = "zero", help = "The zero heuristic.")]
    #[serde(rename = "zero")]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(Manhattan),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
