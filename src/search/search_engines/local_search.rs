//! State shared by the reward-aware local search engines, which walk a single
//! current cell instead of keeping a frontier.

use crate::{
    grid::{Cell, StateSpace},
    search::{heuristics::Heuristic, CollectedMask, Path, RewardIndex, Rewards, Score},
};

/// Scores cells as `reward_if_uncollected(cell) - heuristic(cell, goal)`.
pub(super) struct RewardEvaluator<'a> {
    state_space: &'a dyn StateSpace,
    heuristic: &'a dyn Heuristic,
    reward_index: RewardIndex,
    rewards: Rewards,
    goal: Cell,
}

impl<'a> RewardEvaluator<'a> {
    pub(super) fn new(
        state_space: &'a dyn StateSpace,
        heuristic: &'a dyn Heuristic,
        rewards: Rewards,
        goal: Cell,
    ) -> Self {
        Self {
            state_space,
            heuristic,
            reward_index: RewardIndex::new(state_space),
            rewards,
            goal,
        }
    }

    pub(super) fn evaluate(&self, cell: Cell, collected: &CollectedMask) -> Score {
        let reward = match self.reward_index.bit(cell) {
            Some(bit) if !collected.contains(bit) => {
                self.rewards.reward_for(self.state_space.cell_content(cell))
            }
            _ => 0,
        };
        reward.saturating_sub(self.heuristic.estimate(cell, self.goal))
    }

    pub(super) fn collect(&self, cell: Cell, collected: &mut CollectedMask) {
        if let Some(bit) = self.reward_index.bit(cell) {
            collected.insert(bit);
        }
    }
}

/// The walk of a local search: the current cell, every cell visited so far,
/// and the rewards claimed on the way.
#[derive(Debug, Clone)]
pub(super) struct Walk {
    pub(super) current: Cell,
    pub(super) cells: Vec<Cell>,
    pub(super) collected: CollectedMask,
    pub(super) steps: usize,
}

impl Walk {
    pub(super) fn new(start: Cell) -> Self {
        Self {
            current: start,
            cells: vec![start],
            collected: CollectedMask::new(),
            steps: 0,
        }
    }

    pub(super) fn move_to(&mut self, cell: Cell, evaluator: &RewardEvaluator) {
        self.current = cell;
        self.cells.push(cell);
        evaluator.collect(cell, &mut self.collected);
    }

    /// The walked path if it ended on the goal, otherwise the empty path.
    /// Partial progress is discarded.
    pub(super) fn into_path(self, goal: Cell) -> Path {
        if self.current == goal {
            Path::new(self.cells)
        } else {
            Path::empty()
        }
    }
}
