//! Breadth first search

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
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// Breadth-first search over cells. Rewards are ignored; the first goal node
/// popped from the FIFO frontier has the fewest possible steps.
#[derive(Debug)]
pub struct Bfs {
    config: SearchConfig,
    statistics: SearchStatistics,
    final_path: Path,
}

impl Bfs {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            statistics: SearchStatistics::new(),
            final_path: Path::empty(),
        }
    }

    fn finish(&mut self, path: Path) -> Path {
        self.statistics.finalise_search(&path);
        self.final_path = path.clone();
        path
    }
}

impl SearchEngine for Bfs {
    fn search(&mut self, state_space: &dyn StateSpace, start: Cell, goal: Cell) -> Path {
        self.statistics.reset();
        let mut search_space = SearchSpace::new(SearchNode::new_root(start));
        let mut queue = VecDeque::from([search_space.root_id()]);
        let mut visited = HashSet::new();

        while let Some(node_id) = queue.pop_front() {
            self.statistics.increment_states_explored();
            let node = search_space.get_node(node_id);
            let cell = node.get_cell();

            if node.get_steps() > self.config.step_limit || visited.contains(&cell) {
                self.statistics.increment_pruned_nodes();
                continue;
            }
            visited.insert(cell);

            if cell == goal {
                trace!(steps = node.get_steps(), "goal popped");
                let path = search_space.extract_path(node_id);
                return self.finish(path);
            }

            let children: Vec<SearchNode> = state_space
                .neighbors(cell)
                .into_iter()
                .filter(|neighbour| !visited.contains(neighbour))
                .map(|neighbour| node.child(node_id, neighbour, None))
                .collect();
            self.statistics.increment_generated_nodes(children.len());
            for child in children {
                queue.push_back(search_space.insert(child));
            }
        }

        self.finish(Path::empty())
    }

    fn name(&self) -> SearchEngineName {
        SearchEngineName::Bfs
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
    fn bfs_open_grid() {
        let grid = Grid::new(3, 3);
        let mut bfs = Bfs::new(SearchConfig::new(10, 0, 0));
        let path = bfs.search(&grid, Cell::new(0, 0), Cell::new(2, 2));
        assert_eq!(path, path_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
        assert_eq!(bfs.final_path(), &path);
        assert!(bfs.states_explored() > 0);
    }

    #[test]
    fn bfs_respects_step_limit() {
        let grid = Grid::new(3, 3);
        let mut bfs = Bfs::new(SearchConfig::new(3, 0, 0));
        assert!(bfs.search(&grid, Cell::new(0, 0), Cell::new(2, 2)).is_empty());
        assert!(bfs.final_path().is_empty());

        let mut bfs = Bfs::new(SearchConfig::new(4, 0, 0));
        assert_eq!(bfs.search(&grid, Cell::new(0, 0), Cell::new(2, 2)).steps(), 4);
    }

    #[test]
    fn bfs_start_is_goal() {
        let grid = Grid::new(2, 2);
        let mut bfs = Bfs::new(SearchConfig::new(0, 0, 0));
        let path = bfs.search(&grid, Cell::new(1, 1), Cell::new(1, 1));
        assert_eq!(path, path_of(&[(1, 1)]));
        assert_eq!(bfs.states_explored(), 1);
    }

    #[test]
    fn bfs_goes_around_walls() {
        let grid = Grid::from_text(WALLED_CORRIDOR_TEXT).unwrap();
        let mut bfs = Bfs::new(SearchConfig::new(20, 0, 0));
        let path = bfs.search(&grid, grid.agent().unwrap(), grid.goal().unwrap());
        assert_eq!(path.steps(), 6);
        assert!(path.contains(Cell::new(1, 4)));
    }

    #[test]
    fn bfs_statistics_reset_between_calls() {
        let grid = Grid::new(4, 4);
        let mut bfs = Bfs::new(SearchConfig::new(10, 0, 0));
        bfs.search(&grid, Cell::new(0, 0), Cell::new(3, 3));
        let long_search = bfs.states_explored();
        bfs.search(&grid, Cell::new(0, 0), Cell::new(0, 1));
        assert!(bfs.states_explored() < long_search);
        assert!(bfs.states_explored() >= 1);
    }
}
