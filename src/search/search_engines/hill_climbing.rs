//! Reward-aware randomized hill climbing.

use crate::{
    grid::{Cell, StateSpace},
    search::{
        heuristics::Heuristic,
        search_engines::{
            local_search::{RewardEvaluator, Walk},
            SearchConfig, SearchEngine, SearchEngineName, SearchStatistics,
        },
        Path, Score,
    },
};
use rand::{seq::SliceRandom, Rng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Debug;
use tracing::trace;

/// Steepest-ascent hill climbing on the reward-minus-distance evaluation.
/// Neighbours are shuffled before evaluation so ties between equally good
/// moves are broken at random rather than by direction.
///
/// The climb stops at the goal, at the step limit, or when no neighbour
/// strictly improves on the current cell. Only a climb that ends on the goal
/// produces a path.
#[derive(Debug)]
pub struct RewardHillClimbing<R = ChaCha8Rng> {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    rng: R,
    statistics: SearchStatistics,
    final_path: Path,
}

impl RewardHillClimbing<ChaCha8Rng> {
    /// Seeded from `config.seed`, or from OS entropy if it is unset.
    pub fn new(config: SearchConfig) -> Self {
        let rng = config.rng();
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RewardHillClimbing<R> {
    pub fn with_rng(config: SearchConfig, rng: R) -> Self {
        let heuristic = config.heuristic.create();
        Self {
            config,
            heuristic,
            rng,
            statistics: SearchStatistics::new(),
            final_path: Path::empty(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }
}

impl<R: Rng + Debug> SearchEngine for RewardHillClimbing<R> {
    fn search(&mut self, state_space: &dyn StateSpace, start: Cell, goal: Cell) -> Path {
        self.statistics.reset();
        let evaluator = RewardEvaluator::new(
            state_space,
            self.heuristic.as_ref(),
            self.config.rewards(),
            goal,
        );
        let mut walk = Walk::new(start);

        while walk.current != goal && walk.steps < self.config.step_limit {
            self.statistics.increment_states_explored();
            let mut neighbours = state_space.neighbors(walk.current);
            neighbours.shuffle(&mut self.rng);
            self.statistics.increment_generated_nodes(neighbours.len());

            let mut best: Option<(Cell, Score)> = None;
            for neighbour in neighbours {
                let score = evaluator.evaluate(neighbour, &walk.collected);
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((neighbour, score));
                }
            }

            let current_score = evaluator.evaluate(walk.current, &walk.collected);
            match best {
                Some((next, score)) if score > current_score => {
                    walk.move_to(next, &evaluator);
                    walk.steps += 1;
                }
                _ => {
                    trace!(cell = %walk.current, current_score, "local optimum");
                    break;
                }
            }
        }

        let path = walk.into_path(goal);
        self.statistics.finalise_search(&path);
        self.final_path = path.clone();
        path
    }

    fn name(&self) -> SearchEngineName {
        SearchEngineName::HillClimbing
    }

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    fn final_path(&self) -> &Path {
        &self.final_path
    }
}
