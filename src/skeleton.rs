//! The bare binary tree over distinct endpoints, before intervals are attached.

use log::trace;

use crate::node::{self, Node, NodeId};

/// A binary tree whose leaves are the distinct endpoints in ascending order.
///
/// Nodes live in an arena and refer to their children by index. Nothing points
/// back to a parent: every walk starts again from the root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Skeleton {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: Option<NodeId>,
}

/// Builds the skeleton over `endpoints`, which must be strictly ascending.
///
/// Nodes are merged pairwise through a FIFO queue. Each pass merges the nodes
/// present when the pass starts, two at a time from the front. When a pass
/// holds an odd number of nodes, the last one is deferred: it moves behind the
/// nodes merged in that pass and gets its partner in the next pass. Leaves
/// therefore stay in ascending order from left to right.
///
/// ```
/// use static_interval_tree::skeleton::build_skeleton;
///
/// let skeleton = build_skeleton(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(skeleton.leaves(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(skeleton.root_split(), Some(4.5));
/// ```
pub fn build_skeleton(endpoints: &[f64]) -> Skeleton {
    let mut nodes: Vec<Node> = endpoints.iter().map(|&value| Node::leaf(value)).collect();
    let mut queue: Vec<NodeId> = (0..nodes.len()).collect();

    while queue.len() > 1 {
        trace!("skeleton pass over {} nodes", queue.len());
        let mut pairs = queue.chunks_exact(2);
        let mut next = Vec::with_capacity(queue.len() / 2 + 1);
        for pair in &mut pairs {
            next.push(merge(&mut nodes, pair[0], pair[1]));
        }
        next.extend_from_slice(pairs.remainder());
        queue = next;
    }

    Skeleton {
        root: queue.first().copied(),
        nodes,
    }
}

fn merge(nodes: &mut Vec<Node>, left: NodeId, right: NodeId) -> NodeId {
    let (below, above) = (nodes[left].max, nodes[right].min);
    let parent = Node {
        split: midpoint(below, above),
        min: nodes[left].min,
        max: nodes[right].max,
        left: Some(left),
        right: Some(right),
        by_left: Vec::new(),
        by_right: Vec::new(),
    };
    nodes.push(parent);
    nodes.len() - 1
}

// Halving first keeps the sum finite near f64::MAX. Opposite infinities
// would sum to NaN; any finite value lies between them.
fn midpoint(a: f64, b: f64) -> f64 {
    let mid = a / 2.0 + b / 2.0;
    if mid.is_nan() {
        0.0
    } else {
        mid
    }
}

impl Skeleton {
    /// Number of nodes, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        node::height(&self.nodes, self.root)
    }

    pub fn root_split(&self) -> Option<f64> {
        self.root.map(|id| self.nodes[id].split)
    }

    /// Split values of the leaves, from left to right.
    pub fn leaves(&self) -> Vec<f64> {
        node::in_order(&self.nodes, self.root)
            .into_iter()
            .filter(|&id| self.nodes[id].is_leaf())
            .map(|id| self.nodes[id].split)
            .collect()
    }

    /// Installs the centered lists computed for each node, indexed by node id.
    pub(crate) fn attach(&mut self, by_left: Vec<Vec<usize>>, by_right: Vec<Vec<usize>>) {
        for ((node, left), right) in self.nodes.iter_mut().zip(by_left).zip(by_right) {
            node.by_left = left;
            node.by_right = right;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_endpoints_no_tree() {
        let skeleton = build_skeleton(&[]);
        assert!(skeleton.is_empty());
        assert_eq!(skeleton.len(), 0);
        assert_eq!(skeleton.height(), 0);
        assert_eq!(skeleton.root_split(), None);
        assert!(skeleton.leaves().is_empty());
    }

    #[test]
    fn single_endpoint_is_a_lone_leaf() {
        let skeleton = build_skeleton(&[7.0]);
        assert_eq!(skeleton.len(), 1);
        assert_eq!(skeleton.height(), 1);
        assert_eq!(skeleton.root_split(), Some(7.0));
        assert_eq!(skeleton.leaves(), vec![7.0]);
    }

    #[test]
    fn two_endpoints_split_halfway() {
        let skeleton = build_skeleton(&[1.0, 4.0]);
        assert_eq!(skeleton.len(), 3);
        assert_eq!(skeleton.root_split(), Some(2.5));
        let root = &skeleton.nodes[skeleton.root.unwrap()];
        assert_eq!((root.min, root.max), (1.0, 4.0));
    }

    #[test]
    fn odd_node_is_deferred_to_the_next_pass() {
        // pass 1: (1,2) (3,4), 5 deferred
        // pass 2: ((1,2),(3,4)), 5 deferred
        // pass 3: (((1,2),(3,4)), 5)
        let skeleton = build_skeleton(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(skeleton.len(), 9);
        assert_eq!(skeleton.height(), 4);
        assert_eq!(skeleton.root_split(), Some(4.5));

        let root = &skeleton.nodes[skeleton.root.unwrap()];
        let left = &skeleton.nodes[root.left.unwrap()];
        let right = &skeleton.nodes[root.right.unwrap()];
        assert_eq!(left.split, 2.5);
        assert!(right.is_leaf());
        assert_eq!(right.split, 5.0);
    }

    #[test]
    fn leaves_stay_ascending_for_every_size() {
        for n in 1..64 {
            let endpoints: Vec<f64> = (0..n).map(|i| (i * 3) as f64 - 10.0).collect();
            let skeleton = build_skeleton(&endpoints);
            assert_eq!(skeleton.leaves(), endpoints, "size {}", n);
            assert_eq!(skeleton.len(), 2 * n - 1, "size {}", n);

            // every internal split separates its subtrees
            for node in skeleton.nodes.iter().filter(|node| !node.is_leaf()) {
                let below = &skeleton.nodes[node.left.unwrap()];
                let above = &skeleton.nodes[node.right.unwrap()];
                assert!(below.max < node.split && node.split < above.min);
                assert_eq!((node.min, node.max), (below.min, above.max));
            }
        }
    }

    #[test]
    fn midpoint_does_not_overflow() {
        assert_eq!(midpoint(f64::MAX, f64::MAX), f64::MAX);
        assert_eq!(midpoint(-3.0, 4.0), 0.5);
    }

    #[test]
    fn opposite_infinities_split_finitely() {
        assert_eq!(midpoint(f64::NEG_INFINITY, f64::INFINITY), 0.0);
        assert_eq!(midpoint(1.0, f64::INFINITY), f64::INFINITY);

        let skeleton = build_skeleton(&[f64::NEG_INFINITY, f64::INFINITY]);
        assert_eq!(skeleton.root_split(), Some(0.0));
        assert_eq!(skeleton.leaves(), vec![f64::NEG_INFINITY, f64::INFINITY]);
    }
}
