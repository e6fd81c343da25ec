use crate::{
    grid::{Cell, StateSpace},
    search::{search_engines::SearchEngine, Path},
};
use std::time::{Duration, Instant};
use tracing::info;

/// Runs one active search engine at a time and times each call.
#[derive(Debug)]
pub struct SearchPlanner {
    engine: Box<dyn SearchEngine>,
    last_compute_time: Option<Duration>,
}

impl SearchPlanner {
    pub fn new(engine: Box<dyn SearchEngine>) -> Self {
        Self {
            engine,
            last_compute_time: None,
        }
    }

    /// Plan a path from `start` to `goal` with the active engine. The empty
    /// path means no path was found.
    pub fn plan(&mut self, state_space: &dyn StateSpace, start: Cell, goal: Cell) -> Path {
        let start_time = Instant::now();
        let path = self.engine.search(state_space, start, goal);
        let compute_time = start_time.elapsed();
        self.last_compute_time = Some(compute_time);

        info!(
            engine = %self.engine.name(),
            %start,
            %goal,
            path_length = path.len(),
            states_explored = self.engine.states_explored(),
            compute_time = compute_time.as_secs_f64(),
            "planned"
        );
        path
    }

    /// Swap the active engine. The previous compute time is kept until the
    /// next call to [`SearchPlanner::plan`].
    pub fn set_engine(&mut self, engine: Box<dyn SearchEngine>) {
        self.engine = engine;
    }

    pub fn engine(&self) -> &dyn SearchEngine {
        self.engine.as_ref()
    }

    pub fn last_compute_time(&self) -> Option<Duration> {
        self.last_compute_time
    }
}
