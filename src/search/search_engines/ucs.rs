//! Uniform cost search

use crate::{
    grid::{Cell, StateSpace},
    search::{
        search_engines::{
            SearchConfig, SearchEngine, SearchEngineName, SearchNode, SearchSpace,
            SearchStatistics,
        },
        Path,
    },
};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::HashMap};
use tracing::trace;

pub type Cost = usize;

/// Uniform cost search over cells. Equal-cost frontier entries are popped in
/// insertion order.
#[derive(Debug)]
pub struct Ucs {
    config: SearchConfig,
    statistics: SearchStatistics,
    final_path: Path,
}

impl Ucs {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            statistics: SearchStatistics::new(),
            final_path: Path::empty(),
        }
    }

    /// Cost of moving between two adjacent cells.
    fn edge_cost(&self, _from: Cell, _to: Cell) -> Cost {
        1
    }

    fn finish(&mut self, path: Path) -> Path {
        self.statistics.finalise_search(&path);
        self.final_path = path.clone();
        path
    }
}

impl SearchEngine for Ucs {
    fn search(&mut self, state_space: &dyn StateSpace, start: Cell, goal: Cell) -> Path {
        self.statistics.reset();
        let mut search_space = SearchSpace::new(SearchNode::new_root(start));
        let mut priority_queue = PriorityQueue::new();
        let mut insertion_counter: u64 = 0;
        let mut visited: HashMap<Cell, Cost> = HashMap::new();

        priority_queue.push(search_space.root_id(), Reverse((0, insertion_counter)));

        while let Some((node_id, Reverse((cost, _)))) = priority_queue.pop() {
            self.statistics.increment_states_explored();
            let node = search_space.get_node(node_id);
            let cell = node.get_cell();

            if node.get_steps() > self.config.step_limit {
                self.statistics.increment_pruned_nodes();
                continue;
            }
            if visited.get(&cell).is_some_and(|&best| cost >= best) {
                self.statistics.increment_pruned_nodes();
                continue;
            }
            visited.insert(cell, cost);

            if cell == goal {
                trace!(cost, "goal popped");
                let path = search_space.extract_path(node_id);
                return self.finish(path);
            }

            let successors: Vec<(SearchNode, Cost)> = state_space
                .neighbors(cell)
                .into_iter()
                .map(|neighbour| {
                    (
                        node.child(node_id, neighbour, None),
                        cost + self.edge_cost(cell, neighbour),
                    )
                })
                .collect();
            self.statistics.increment_generated_nodes(successors.len());
            for (child, child_cost) in successors {
                insertion_counter += 1;
                let child_id = search_space.insert(child);
                priority_queue.push(child_id, Reverse((child_cost, insertion_counter)));
            }
        }

        self.finish(Path::empty())
    }

    fn name(&self) -> SearchEngineName {
        SearchEngineName::Ucs
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::Grid, test_utils::*};

    #[test]
    fn ucs_open_grid() {
        let grid = Grid::new(3, 3);
        let mut ucs = Ucs::new(SearchConfig::new(10, 0, 0));
        let path = ucs.search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(Cell::new(0, 0)));
        assert_eq!(path.last(), Some(Cell::new(2, 2)));
    }

    #[test]
    fn ucs_ties_break_by_insertion_order() {
        // With FIFO tie-breaking UCS expands like BFS and so returns the same
        // path on a unit-cost grid.
        let grid = Grid::new(3, 3);
        let mut ucs = Ucs::new(SearchConfig::new(10, 0, 0));
        let path = ucs.search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(path, path_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn ucs_is_idempotent() {
        let grid = Grid::from_text(COIN_FIELD_TEXT).unwrap();
        let mut ucs = Ucs::new(SearchConfig::new(10, 0, 0));
        let first = ucs.search(&grid, grid.agent().unwrap(), grid.goal().unwrap());
        let explored = ucs.states_explored();
        let second = ucs.search(&grid, grid.agent().unwrap(), grid.goal().unwrap());
        assert_eq!(first, second);
        assert_eq!(explored, ucs.states_explored());
        assert_eq!(first.steps(), 6);
    }

    #[test]
    fn ucs_respects_step_limit() {
        let grid = Grid::from_text(WALLED_CORRIDOR_TEXT).unwrap();
        let mut ucs = Ucs::new(SearchConfig::new(5, 0, 0));
        assert!(ucs
            .search(&grid, grid.agent().unwrap(), grid.goal().unwrap())
            .is_empty());
    }
}
