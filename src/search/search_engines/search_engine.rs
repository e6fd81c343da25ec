use crate::{
    grid::{Cell, StateSpace},
    search::{
        heuristics::HeuristicName,
        search_engines::{
            Bfs, RewardBestFirst, RewardHillClimbing, RewardSimulatedAnnealing,
            SearchStatistics, Ucs,
        },
        Path, Rewards, Score,
    },
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

pub const DEFAULT_STEP_LIMIT: usize = 20;

/// Construction-time parameters shared by every engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum number of moves a path may contain
    pub step_limit: usize,
    pub coin_reward: Score,
    pub trash_reward: Score,
    /// Seed of the stochastic engines. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Heuristic of the reward-aware engines
    pub heuristic: HeuristicName,
}

impl SearchConfig {
    pub fn new(step_limit: usize, coin_reward: Score, trash_reward: Score) -> Self {
        Self {
            step_limit,
            coin_reward,
            trash_reward,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicName) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn rewards(&self) -> Rewards {
        Rewards::new(self.coin_reward, self.trash_reward)
    }

    /// Random source for the stochastic engines.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            coin_reward: 0,
            trash_reward: 0,
            seed: None,
            heuristic: HeuristicName::default(),
        }
    }
}

pub trait SearchEngine: Debug {
    /// Compute a path from `start` to `goal`. The empty path means no path was
    /// found. Resets the engine's statistics before searching.
    fn search(&mut self, state_space: &dyn StateSpace, start: Cell, goal: Cell) -> Path;

    fn name(&self) -> SearchEngineName;

    fn config(&self) -> &SearchConfig;

    fn statistics(&self) -> &SearchStatistics;

    /// The path returned by the most recent call to [`SearchEngine::search`].
    fn final_path(&self) -> &Path;

    fn states_explored(&self) -> usize {
        self.statistics().states_explored()
    }
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[default]
    #[clap(name = "astar", help = "Reward-aware A* search.")]
    #[serde(rename = "astar")]
    #[strum(to_string = "A* Search")]
    AStar,
    #[clap(help = "Uniform cost search, ignores rewards.")]
    #[strum(to_string = "Uniform Cost Search")]
    Ucs,
    #[clap(help = "Reward-aware greedy best-first search.")]
    #[strum(to_string = "Greedy Best-First Search")]
    Gbfs,
    #[clap(help = "Breadth-first search, ignores rewards.")]
    #[strum(to_string = "Breadth-First Search")]
    Bfs,
    #[clap(help = "Reward-aware randomized hill climbing.")]
    #[strum(to_string = "Randomized Hill Climbing")]
    HillClimbing,
    #[clap(help = "Reward-aware simulated annealing.")]
    #[strum(to_string = "Simulated Annealing")]
    SimulatedAnnealing,
}

impl SearchEngineName {
    pub fn create(&self, config: &SearchConfig) -> Box<dyn SearchEngine> {
        let config = config.clone();
        match self {
            SearchEngineName::AStar => Box::new(RewardBestFirst::astar(config)),
            SearchEngineName::Ucs => Box::new(Ucs::new(config)),
            SearchEngineName::Gbfs => Box::new(RewardBestFirst::greedy(config)),
            SearchEngineName::Bfs => Box::new(Bfs::new(config)),
            SearchEngineName::HillClimbing => Box::new(RewardHillClimbing::new(config)),
            SearchEngineName::SimulatedAnnealing => {
                Box::new(RewardSimulatedAnnealing::new(config))
            }
        }
    }

    /// Every engine, in registry order.
    pub fn all() -> impl Iterator<Item = SearchEngineName> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Whether the engine draws from a random source.
    pub fn is_stochastic(&self) -> bool {
        matches!(
            self,
            SearchEngineName::HillClimbing | SearchEngineName::SimulatedAnnealing
        )
    }

    /// Whether the engine takes rewards into account.
    pub fn is_reward_aware(&self) -> bool {
        !matches!(self, SearchEngineName::Bfs | SearchEngineName::Ucs)
    }
}
