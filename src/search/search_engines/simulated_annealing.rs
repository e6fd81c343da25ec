//! Reward-aware simulated annealing.

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

pub const INITIAL_TEMPERATURE: f64 = 1.0;
pub const COOLING_RATE: f64 = 0.97;
pub const MIN_TEMPERATURE: f64 = 1e-6;

/// Probability of moving from a cell scored `old_score` to one scored
/// `new_score` at the given temperature.
pub fn acceptance_probability(old_score: Score, new_score: Score, temperature: f64) -> f64 {
    if new_score > old_score {
        return 1.0;
    }
    ((new_score as f64 - old_score as f64) / temperature).exp()
}

fn accept<R: Rng>(rng: &mut R, old_score: Score, new_score: Score, temperature: f64) -> bool {
    new_score > old_score
        || rng.gen::<f64>() < acceptance_probability(old_score, new_score, temperature)
}

/// Simulated annealing on the reward-minus-distance evaluation. Each
/// iteration proposes one random neighbour; improvements are always taken and
/// worsening moves are taken with a probability that shrinks as the
/// temperature cools.
///
/// Every iteration counts against the step limit, including rejected
/// proposals. Only a walk that ends on the goal produces a path.
#[derive(Debug)]
pub struct RewardSimulatedAnnealing<R = ChaCha8Rng> {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    rng: R,
    statistics: SearchStatistics,
    final_path: Path,
}

impl RewardSimulatedAnnealing<ChaCha8Rng> {
    /// Seeded from `config.seed`, or from OS entropy if it is unset.
    pub fn new(config: SearchConfig) -> Self {
        let rng = config.rng();
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RewardSimulatedAnnealing<R> {
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

impl<R: Rng + Debug> SearchEngine for RewardSimulatedAnnealing<R> {
    fn search(&mut self, state_space: &dyn StateSpace, start: Cell, goal: Cell) -> Path {
        self.statistics.reset();
        let evaluator =
            RewardEvaluator::new(state_space, self.heuristic.as_ref(), self.config.rewards(), goal);
        let mut walk = Walk::new(start);
        let mut temperature = INITIAL_TEMPERATURE;

        while walk.current != goal && walk.steps < self.config.step_limit {
            self.statistics.increment_states_explored();
            let neighbours = state_space.neighbors(walk.current);
            let Some(&candidate) = neighbours.choose(&mut self.rng) else {
                trace!(cell = %walk.current, "no moves");
                break;
            };
            self.statistics.increment_generated_nodes(1);

            let old_score = evaluator.evaluate(walk.current, &walk.collected);
            let new_score = evaluator.evaluate(candidate, &walk.collected);
            walk.steps += 1;
            if accept(&mut self.rng, old_score, new_score, temperature) {
                walk.move_to(candidate, &evaluator);
            }
            temperature = (temperature * COOLING_RATE).max(MIN_TEMPERATURE);
        }

        let path = walk.into_path(goal);
        self.statistics.finalise_search(&path);
        self.final_path = path.clone();
        path
    }

    fn name(&self) -> SearchEngineName {
        SearchEngineName::SimulatedAnnealing
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
