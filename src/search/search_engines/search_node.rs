use crate::{
    grid::Cell,
    search::{
        search_engines::{NodeId, NO_NODE},
        CollectedMask, Score,
    },
};

/// A node of the search tree. Along any root-to-leaf branch `steps` grows by
/// one per edge and `collected` only gains bits.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Grid cell of the node
    cell: Cell,
    /// Sum of the rewards collected on the way here, saturating at the `i64`
    /// bounds. Engines that ignore rewards leave it at zero.
    score: Score,
    /// Number of moves from the root
    steps: usize,
    /// Reward cells already claimed on the branch
    collected: CollectedMask,
    /// Parent node, [`NO_NODE`] for the root
    parent_id: NodeId,
}

impl SearchNode {
    pub fn new_root(cell: Cell) -> Self {
        Self {
            cell,
            score: 0,
            steps: 0,
            collected: CollectedMask::new(),
            parent_id: NO_NODE,
        }
    }

    /// The successor of this node (stored at `self_id`) moving onto `cell`.
    /// `gained` carries the reward bit claimed by the move and its value.
    pub fn child(&self, self_id: NodeId, cell: Cell, gained: Option<(usize, Score)>) -> Self {
        let (collected, score) = match gained {
            Some((bit, reward)) => (
                self.collected.with(bit),
                self.score.saturating_add(reward),
            ),
            None => (self.collected.clone(), self.score),
        };
        Self {
            cell,
            score,
            steps: self.steps + 1,
            collected,
            parent_id: self_id,
        }
    }

    pub fn get_cell(&self) -> Cell {
        self.cell
    }

    pub fn get_score(&self) -> Score {
        self.score
    }

    pub fn get_steps(&self) -> usize {
        self.steps
    }

    pub fn get_collected(&self) -> &CollectedMask {
        &self.collected
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_accumulates_reward() {
        let root = SearchNode::new_root(Cell::new(0, 0));
        let space_root = crate::search::search_engines::SearchSpace::new(root.clone());
        let root_id = space_root.root_id();

        let plain = root.child(root_id, Cell::new(0, 1), None);
        assert_eq!(plain.get_steps(), 1);
        assert_eq!(plain.get_score(), 0);
        assert!(plain.get_collected().is_empty());
        assert_eq!(plain.get_parent_id(), root_id);

        let rewarded = plain.child(root_id, Cell::new(0, 2), Some((3, 7)));
        assert_eq!(rewarded.get_steps(), 2);
        assert_eq!(rewarded.get_score(), 7);
        assert!(rewarded.get_collected().contains(3));
        assert!(plain.get_collected().is_subset(rewarded.get_collected()));
    }
}
