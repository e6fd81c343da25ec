mod bfs;
mod hill_climbing;
mod local_search;
mod reward_best_first;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod simulated_annealing;
mod ucs;

pub use bfs::Bfs;
pub use hill_climbing::RewardHillClimbing;
pub use reward_best_first::{Ranking, RewardBestFirst};
pub use search_engine::{SearchConfig, SearchEngine, SearchEngineName, DEFAULT_STEP_LIMIT};
pub use search_node::SearchNode;
pub use search_space::{NodeId, SearchSpace, NO_NODE};
pub use search_statistics::SearchStatistics;
pub use simulated_annealing::{
    acceptance_probability, RewardSimulatedAnnealing, COOLING_RATE, INITIAL_TEMPERATURE,
    MIN_TEMPERATURE,
};
pub use ucs::{Cost, Ucs};
