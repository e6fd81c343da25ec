use crate::search::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Counters of a single search call. Engines reset them at the start of
/// every call, so they always describe the most recent search.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of frontier pops, or iterations for local search
    states_explored: usize,
    /// Number of successor nodes generated
    generated_nodes: usize,
    /// Number of popped nodes discarded by the step limit or by deduplication
    pruned_nodes: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Duration of the last finished search
    search_duration: Option<Duration>,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            states_explored: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            search_duration: None,
        }
    }

    /// Zero every counter and restart the clocks.
    pub fn reset(&mut self) {
        debug!("starting search");
        *self = Self::new();
    }

    pub fn increment_states_explored(&mut self) {
        self.states_explored += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn states_explored(&self) -> usize {
        self.states_explored
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn search_duration(&self) -> Option<Duration> {
        self.search_duration
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            states_explored = self.states_explored,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
        );
    }

    pub fn finalise_search(&mut self, path: &Path) {
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        debug!(
            states_explored = self.states_explored,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            path_length = path.len(),
            search_duration = duration.as_secs_f64(),
            "finalising search"
        );
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
