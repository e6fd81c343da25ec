//! An agent that follows the paths produced by its planner, one cell at a
//! time.

use crate::{
    grid::{Cell, StateSpace},
    search::SearchPlanner,
};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("agent position has not been set")]
    PositionNotSet,
}

#[derive(Debug)]
pub struct Agent {
    planner: SearchPlanner,
    position: Option<Cell>,
    path: VecDeque<Cell>,
}

impl Agent {
    pub fn new(planner: SearchPlanner) -> Self {
        Self {
            planner,
            position: None,
            path: VecDeque::new(),
        }
    }

    pub fn set_position(&mut self, position: Cell) {
        self.position = Some(position);
    }

    pub fn position(&self) -> Option<Cell> {
        self.position
    }

    /// Replace the queued path with a fresh plan from the current position.
    /// An unreachable goal leaves the agent with an empty queue.
    pub fn plan_path(&mut self, state_space: &dyn StateSpace, goal: Cell) -> Result<(), AgentError> {
        let position = self.position.ok_or(AgentError::PositionNotSet)?;
        self.path = self.planner.plan(state_space, position, goal).into_iter().collect();
        Ok(())
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Move onto the next queued cell and return it.
    pub fn step(&mut self) -> Option<Cell> {
        let next = self.path.pop_front()?;
        self.position = Some(next);
        Some(next)
    }

    pub fn planner(&self) -> &SearchPlanner {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> &mut SearchPlanner {
        &mut self.planner
    }
}
