use std::fmt;

use log::{debug, trace};
#[cfg(feature="serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::endpoints;
use crate::error::Result;
use crate::interval::{Endpoint, Interval};
use crate::mapper;
use crate::node::{self, NodeId, NodeRef};
use crate::skeleton::{self, Skeleton};

/// A static interval tree, built once from a batch of closed intervals.
///
/// The tree splits on the distinct endpoints of its intervals. Each interval
/// is stored at the highest node whose split value it spans, once in
/// ascending order of left endpoints and once in ascending order of right
/// endpoints. Nothing can be inserted or removed after construction; queries
/// take `&self` and may run from several threads at once.
///
/// ```
/// use static_interval_tree::{Interval, IntervalTree};
///
/// let tree = IntervalTree::new(vec![
///     Interval::new(1, 5, "a"),
///     Interval::new(4, 10, "b"),
///     Interval::new(15, 20, "c"),
/// ]);
///
/// let found = tree.find_intersecting(&Interval::bare(6, 6)).unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(*found[0].payload(), "b");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalTree<K, V = ()> {
    pub(crate) intervals: Vec<Interval<K, V>>,
    pub(crate) skeleton: Skeleton,
}

impl<K, V> Default for IntervalTree<K, V> {
    fn default() -> IntervalTree<K, V> {
        IntervalTree {
            intervals: Vec::new(),
            skeleton: Skeleton::default(),
        }
    }
}

impl<K: Endpoint, V> IntervalTree<K, V> {
    /// Builds the tree. An empty batch gives a tree without a root, on which
    /// every query finds nothing.
    ///
    /// Each interval must satisfy `left <= right`; this is not checked.
    pub fn new(intervals: Vec<Interval<K, V>>) -> IntervalTree<K, V> {
        let endpoints = endpoints::sorted_endpoints(&intervals);
        let mut skeleton = skeleton::build_skeleton(&endpoints);

        let by_left = mapper::map_centered(
            &skeleton,
            &intervals,
            &endpoints::sort_by_left(&intervals),
        );
        let by_right = mapper::map_centered(
            &skeleton,
            &intervals,
            &endpoints::sort_by_right(&intervals),
        );
        skeleton.attach(by_left, by_right);

        debug!(
            "built interval tree: {} intervals, {} endpoints, {} nodes, height {}",
            intervals.len(),
            endpoints.len(),
            skeleton.len(),
            skeleton.height()
        );

        IntervalTree {
            intervals,
            skeleton,
        }
    }

    /// Every stored interval `e` such that one of the query's own endpoints
    /// lies within `[e.left, e.right]`.
    ///
    /// This is not the usual overlap test: a stored interval lying strictly
    /// inside the query is not reported. Use [`IntervalTree::find_overlapping`]
    /// for that. Every node is visited, left subtree first.
    ///
    /// Fails only if the query has a NaN endpoint or `left > right`.
    ///
    /// ```
    /// use static_interval_tree::{Interval, IntervalTree};
    ///
    /// let tree = IntervalTree::new(vec![Interval::bare(1, 5), Interval::bare(10, 15)]);
    /// let query = Interval::bare(3, 12);
    /// assert!(tree.find_intersecting(&query).unwrap().is_empty());
    /// assert_eq!(tree.find_overlapping(&query).unwrap().len(), 2);
    /// ```
    pub fn find_intersecting<W>(&self, query: &Interval<K, W>) -> Result<Vec<&Interval<K, V>>> {
        query.validate()?;
        trace!("find_intersecting [{:?}, {:?}]", query.bounds().0, query.bounds().1);

        let found = self
            .iter()
            .filter(|stored| {
                stored.contains_point(query.left()) || stored.contains_point(query.right())
            })
            .collect();
        Ok(found)
    }

    /// Every stored interval sharing at least one point with the query,
    /// i.e. `query.left <= e.right && e.left <= query.right`.
    ///
    /// Only subtrees whose endpoints can reach the query are visited, and
    /// the scan of a node stops at the first interval lying past the query.
    ///
    /// Fails only if the query has a NaN endpoint or `left > right`.
    pub fn find_overlapping<W>(&self, query: &Interval<K, W>) -> Result<Vec<&Interval<K, V>>> {
        query.validate()?;
        trace!("find_overlapping [{:?}, {:?}]", query.bounds().0, query.bounds().1);

        let mut found = Vec::new();
        if let Some(root) = self.skeleton.root {
            self.overlapping_from(root, query.bounds(), &mut found);
        }
        Ok(found)
    }

    /// Every stored interval containing `point`. A NaN point is contained nowhere.
    pub fn stab<P: Into<f64>>(&self, point: P) -> Vec<&Interval<K, V>> {
        let point = point.into();
        let mut found = Vec::new();
        if let (Some(root), false) = (self.skeleton.root, point.is_nan()) {
            self.overlapping_from(root, (point, point), &mut found);
        }
        found
    }

    fn overlapping_from<'a>(
        &'a self,
        id: NodeId,
        (low, high): (f64, f64),
        found: &mut Vec<&'a Interval<K, V>>,
    ) {
        let node = &self.skeleton.nodes[id];

        if high < node.split {
            // centered intervals reach past `high`; they overlap iff they start by it
            let reached = node
                .by_left
                .iter()
                .map(|&i| &self.intervals[i])
                .take_while(|stored| stored.bounds().0 <= high);
            found.extend(reached);
            if let Some(left) = node.left {
                self.overlapping_from(left, (low, high), found);
            }
        } else if low > node.split {
            let reached = node
                .by_right
                .iter()
                .rev()
                .map(|&i| &self.intervals[i])
                .take_while(|stored| stored.bounds().1 >= low);
            found.extend(reached);
            if let Some(right) = node.right {
                self.overlapping_from(right, (low, high), found);
            }
        } else {
            found.extend(node.by_left.iter().map(|&i| &self.intervals[i]));
            if let Some(left) = node.left {
                self.overlapping_from(left, (low, high), found);
            }
            if let Some(right) = node.right {
                self.overlapping_from(right, (low, high), found);
            }
        }
    }
}

impl<K, V> IntervalTree<K, V> {
    /// The root node, absent for a tree built from no intervals.
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.skeleton.root.map(|id| NodeRef::new(self, id))
    }

    /// Number of intervals the tree was built from.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.skeleton.height()
    }

    /// The skeleton the intervals are attached to.
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// All stored intervals, node by node from left to right, each node's
    /// intervals ascending by left endpoint.
    pub fn iter(&self) -> impl Iterator<Item = &Interval<K, V>> + '_ {
        let nodes = &self.skeleton.nodes;
        node::in_order(nodes, self.skeleton.root)
            .into_iter()
            .flat_map(move |id| nodes[id].by_left.iter().map(move |&i| &self.intervals[i]))
    }
}

impl<K: Endpoint, V> FromIterator<Interval<K, V>> for IntervalTree<K, V> {
    fn from_iter<I: IntoIterator<Item = Interval<K, V>>>(iter: I) -> IntervalTree<K, V> {
        IntervalTree::new(iter.into_iter().collect())
    }
}

// Only the intervals are written out; loading rebuilds the tree from them.
#[cfg(feature="serde")]
impl<K, V> Serialize for IntervalTree<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.intervals.serialize(serializer)
    }
}

#[cfg(feature="serde")]
impl<'de, K, V> Deserialize<'de> for IntervalTree<K, V>
where
    K: Endpoint + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<Interval<K, V>>::deserialize(deserializer).map(IntervalTree::new)
    }
}

impl<K, V> fmt::Display for IntervalTree<K, V>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", root),
            None => write!(f, " {{ }} "),
        }
    }
}
