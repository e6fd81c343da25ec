use crate::{
    grid::{Cell, GameObject, StateSpace},
    search::{Path, Rewards, Score},
};
use std::{
    collections::HashSet,
    fmt::{Display, Formatter},
};

/// Outcome of walking a path over a grid: how far the agent got and what it
/// picked up on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub success: bool,
    pub steps_taken: usize,
    pub step_limit: usize,
    pub score: Score,
    pub coins: usize,
    pub trash: usize,
}

impl RunSummary {
    /// Replay `path` on the state space. Each reward cell pays out on the
    /// first entry only, the start cell never pays out, and the walk halts
    /// once `step_limit` moves have been made.
    pub fn replay(
        path: &Path,
        state_space: &dyn StateSpace,
        goal: Cell,
        step_limit: usize,
        rewards: Rewards,
    ) -> Self {
        let mut summary = Self {
            step_limit,
            ..Self::default()
        };
        let Some(mut position) = path.first() else {
            return summary;
        };

        let mut consumed = HashSet::from([position]);
        for &cell in path.iter().skip(1) {
            if summary.steps_taken >= step_limit {
                break;
            }
            if cell != position {
                position = cell;
                summary.steps_taken += 1;
            }
            if !consumed.insert(cell) {
                continue;
            }
            let object = state_space.cell_content(cell);
            match object {
                GameObject::Coin => summary.coins += 1,
                GameObject::Trash => summary.trash += 1,
                _ => continue,
            }
            summary.score = summary.score.saturating_add(rewards.reward_for(object));
        }
        summary.success = position == goal;
        summary
    }

    pub fn collected(&self) -> usize {
        self.coins + self.trash
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "success: {}, steps: {}/{}, score: {}, coins: {}, trash: {}",
            self.success, self.steps_taken, self.step_limit, self.score, self.coins, self.trash
        )
    }
}
