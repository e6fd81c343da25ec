//! Reward-aware best-first search. The greedy and A* variants share one
//! engine and differ only in how a node is ranked in the frontier.

use crate::{
    grid::{Cell, StateSpace},
    search::{
        heuristics::{Heuristic, HeuristicValue},
        search_engines::{
            NodeId, SearchConfig, SearchEngine, SearchEngineName, SearchNode, SearchSpace,
            SearchStatistics,
        },
        CollectedMask, Path, RewardIndex, Score,
    },
};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::HashMap};
use tracing::trace;

/// How a node is ranked in the frontier; lower is expanded first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// `h - score`
    Greedy,
    /// `steps + h - score`
    AStar,
}

impl Ranking {
    pub fn priority(&self, h_value: HeuristicValue, node: &SearchNode) -> i64 {
        let cost = match self {
            Ranking::Greedy => h_value,
            Ranking::AStar => (node.get_steps() as i64).saturating_add(h_value),
        };
        cost.saturating_sub(node.get_score())
    }
}

/// Best-first search for the highest-scoring goal-reaching path within the
/// step limit. Collected reward directly offsets distance, so the heuristic
/// is no longer admissible and the result is a heuristic best, not a
/// guaranteed optimum.
///
/// States are keyed by `(cell, collected)`, so a cell is expanded again when
/// it is reached with a different set of rewards. A popped state is pruned if
/// the last recorded state under its key had at least its score in at most
/// its steps. Goal nodes are recorded as completions and never expanded; the
/// search keeps going until the frontier is empty and returns the best
/// completion.
#[derive(Debug)]
pub struct RewardBestFirst {
    ranking: Ranking,
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    statistics: SearchStatistics,
    final_path: Path,
}

impl RewardBestFirst {
    pub fn new(ranking: Ranking, config: SearchConfig) -> Self {
        let heuristic = config.heuristic.create();
        Self {
            ranking,
            config,
            heuristic,
            statistics: SearchStatistics::new(),
            final_path: Path::empty(),
        }
    }

    /// Greedy best-first search, ranked by `h - score`.
    pub fn greedy(config: SearchConfig) -> Self {
        Self::new(Ranking::Greedy, config)
    }

    /// A*-style search, ranked by `steps + h - score`.
    pub fn astar(config: SearchConfig) -> Self {
        Self::new(Ranking::AStar, config)
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    fn best_first_search(&mut self, state_space: &dyn StateSpace, start: Cell, goal: Cell) -> Path {
        let rewards = self.config.rewards();
        let reward_index = RewardIndex::new(state_space);
        let mut search_space = SearchSpace::new(SearchNode::new_root(start));
        let mut priority_queue = PriorityQueue::new();
        let mut insertion_counter: u64 = 0;
        let mut visited: HashMap<(Cell, CollectedMask), (Score, usize)> = HashMap::new();
        let mut best_completion: Option<(Score, NodeId)> = None;

        let root_id = search_space.root_id();
        let root_priority = self.ranking.priority(
            self.heuristic.estimate(start, goal),
            search_space.get_node(root_id),
        );
        priority_queue.push(root_id, Reverse((root_priority, insertion_counter)));

        while let Some((node_id, _)) = priority_queue.pop() {
            self.statistics.increment_states_explored();
            let node = search_space.get_node(node_id);
            let cell = node.get_cell();
            let score = node.get_score();
            let steps = node.get_steps();

            if cell == goal && steps <= self.config.step_limit {
                if best_completion.map_or(true, |(best_score, _)| score > best_score) {
                    trace!(score, steps, "new best completion");
                    best_completion = Some((score, node_id));
                }
                continue;
            }
            if steps > self.config.step_limit {
                self.statistics.increment_pruned_nodes();
                continue;
            }

            let key = (cell, node.get_collected().clone());
            if let Some(&(previous_score, previous_steps)) = visited.get(&key) {
                if score <= previous_score && steps >= previous_steps {
                    self.statistics.increment_pruned_nodes();
                    continue;
                }
            }
            visited.insert(key, (score, steps));

            let children: Vec<SearchNode> = state_space
                .neighbors(cell)
                .into_iter()
                .map(|neighbour| {
                    let gained = reward_index
                        .bit(neighbour)
                        .filter(|&bit| !node.get_collected().contains(bit))
                        .map(|bit| (bit, rewards.reward_for(state_space.cell_content(neighbour))));
                    node.child(node_id, neighbour, gained)
                })
                .collect();
            self.statistics.increment_generated_nodes(children.len());
            for child in children {
                let priority = self
                    .ranking
                    .priority(self.heuristic.estimate(child.get_cell(), goal), &child);
                insertion_counter += 1;
                let child_id = search_space.insert(child);
                priority_queue.push(child_id, Reverse((priority, insertion_counter)));
            }
        }

        match best_completion {
            Some((_, node_id)) => search_space.extract_path(node_id),
            None => Path::empty(),
        }
    }
}

impl SearchEngine for RewardBestFirst {
    fn search(&mut self, state_space: &dyn StateSpace, start: Cell, goal: Cell) -> Path {
        self.statistics.reset();
        let path = self.best_first_search(state_space, start, goal);
        self.statistics.finalise_search(&path);
        self.final_path = path.clone();
        path
    }

    fn name(&self) -> SearchEngineName {
        match self.ranking {
            Ranking::Greedy => SearchEngineName::Gbfs,
            Ranking::AStar => SearchEngineName::AStar,
        }
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
