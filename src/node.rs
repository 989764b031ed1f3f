use std::fmt;

use crate::interval::Interval;
use crate::interval_tree::IntervalTree;

/// Index of a node in the arena owned by a skeleton.
pub(crate) type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node {
    pub split: f64,
    pub min: f64,
    pub max: f64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    // Positions in the tree's interval storage of the intervals centered here.
    pub by_left: Vec<usize>,
    pub by_right: Vec<usize>,
}

impl Node {
    pub fn leaf(value: f64) -> Node {
        Node {
            split: value,
            min: value,
            max: value,
            left: None,
            right: None,
            by_left: Vec::new(),
            by_right: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Node ids of the subtree under `root`, left subtree first.
pub(crate) fn in_order(nodes: &[Node], root: Option<NodeId>) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack = Vec::new();
    let mut cursor = root;
    while cursor.is_some() || !stack.is_empty() {
        while let Some(id) = cursor {
            stack.push(id);
            cursor = nodes[id].left;
        }
        if let Some(id) = stack.pop() {
            order.push(id);
            cursor = nodes[id].right;
        }
    }
    order
}

/// Number of nodes on the longest root-to-leaf path.
pub(crate) fn height(nodes: &[Node], root: Option<NodeId>) -> usize {
    match root {
        None => 0,
        Some(id) => 1 + height(nodes, nodes[id].left).max(height(nodes, nodes[id].right)),
    }
}

/// Read-only view of one node of a built [`IntervalTree`].
pub struct NodeRef<'a, K, V> {
    tree: &'a IntervalTree<K, V>,
    id: NodeId,
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(tree: &'a IntervalTree<K, V>, id: NodeId) -> NodeRef<'a, K, V> {
        NodeRef { tree, id }
    }

    fn node(&self) -> &'a Node {
        &self.tree.skeleton.nodes[self.id]
    }

    /// For a leaf, an input endpoint. For an internal node, the midpoint between
    /// the largest endpoint on its left and the smallest endpoint on its right.
    pub fn split_value(&self) -> f64 {
        self.node().split
    }

    /// Smallest endpoint covered by this subtree.
    pub fn min_split(&self) -> f64 {
        self.node().min
    }

    /// Largest endpoint covered by this subtree.
    pub fn max_split(&self) -> f64 {
        self.node().max
    }

    pub fn left_child(&self) -> Option<NodeRef<'a, K, V>> {
        self.node().left.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn right_child(&self) -> Option<NodeRef<'a, K, V>> {
        self.node().right.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Intervals spanning this node's split value, ascending by left endpoint.
    pub fn by_left_end(&self) -> impl Iterator<Item = &'a Interval<K, V>> {
        let tree = self.tree;
        self.node().by_left.iter().map(move |&i| &tree.intervals[i])
    }

    /// The same intervals as [`NodeRef::by_left_end`], ascending by right endpoint.
    pub fn by_right_end(&self) -> impl Iterator<Item = &'a Interval<K, V>> {
        let tree = self.tree;
        self.node().by_right.iter().map(move |&i| &tree.intervals[i])
    }
}

impl<K, V> fmt::Display for NodeRef<'_, K, V>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let centered = self
            .by_left_end()
            .map(|interval| interval.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let split = self.split_value();

        match (self.left_child(), self.right_child()) {
            (None, None) => write!(f, " {{ {} ({}) }} ", split, centered),
            (None, Some(right)) => {
                write!(f, " {{ {} ({}) right:{}}} ", split, centered, right)
            }
            (Some(left), None) => {
                write!(f, " {{ {} ({}) left:{}}} ", split, centered, left)
            }
            (Some(left), Some(right)) => write!(
                f,
                " {{ {} ({}) left:{}right:{}}} ",
                split, centered, left, right
            ),
        }
    }
}
