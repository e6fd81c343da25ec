use crate::search::{search_engines::SearchNode, Path};
use segvec::{Linear, SegVec};

/// Index of a node in a [`SearchSpace`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// Flat arena holding every node generated by one search call. Nodes refer to
/// their parent by [`NodeId`], so the tree can be walked back from any node
/// without shared references. Nodes are never removed; the arena is dropped
/// as a whole when the search returns.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
}

impl SearchSpace {
    pub fn new(root_node: SearchNode) -> Self {
        debug_assert_eq!(root_node.get_parent_id(), NO_NODE);
        let mut nodes = SegVec::new();
        nodes.push(root_node);
        Self { nodes }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(node);
        node_id
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.0).expect("Invalid node id")
    }

    /// Follow parent ids from `node_id` back to the root and return the cells
    /// in root-to-node order.
    pub fn extract_path(&self, node_id: NodeId) -> Path {
        let mut cells = vec![];
        let mut current_id = node_id;
        while current_id != NO_NODE {
            let node = self.get_node(current_id);
            cells.push(node.get_cell());
            current_id = node.get_parent_id();
        }
        cells.reverse();
        Path::new(cells)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    #[test]
    fn extract_path_walks_parents() {
        let mut space = SearchSpace::new(SearchNode::new_root(Cell::new(0, 0)));
        let root_id = space.root_id();
        let a = space.get_node(root_id).child(root_id, Cell::new(1, 0), None);
        let a_id = space.insert(a);
        let b = space.get_node(root_id).child(root_id, Cell::new(0, 1), None);
        space.insert(b);
        let c = space.get_node(a_id).child(a_id, Cell::new(2, 0), None);
        let c_id = space.insert(c);

        assert_eq!(space.len(), 4);
        assert_eq!(
            space.extract_path(c_id).cells(),
            &[Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
        );
        assert_eq!(space.extract_path(root_id).cells(), &[Cell::new(0, 0)]);
    }
}
