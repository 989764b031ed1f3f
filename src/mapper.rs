//! Attaches every interval to the node whose split value it spans.

use log::warn;

use crate::interval::{Endpoint, Interval};
use crate::node::{Node, NodeId};
use crate::skeleton::Skeleton;

/// Walks each interval of `order` down from the root and returns, per node id,
/// the positions of the intervals centered on that node. Within a node the
/// positions keep the sequence of `order`.
///
/// Run once with the left-sorted order and once with the right-sorted order to
/// obtain both centered lists. The skeleton itself is not touched.
pub(crate) fn map_centered<K: Endpoint, V>(
    skeleton: &Skeleton,
    intervals: &[Interval<K, V>],
    order: &[usize],
) -> Vec<Vec<usize>> {
    let mut centered = vec![Vec::new(); skeleton.nodes.len()];
    let Some(root) = skeleton.root else {
        return centered;
    };

    for &position in order {
        let interval = &intervals[position];
        match center_of(&skeleton.nodes, root, interval) {
            Some(id) => centered[id].push(position),
            None => warn!(
                "interval #{} spans no split value and is not stored",
                position
            ),
        }
    }
    centered
}

/// The node an interval is stored at: the first node on its way down whose
/// split value lies within the interval.
///
/// Only fails when an endpoint is NaN or was not among the skeleton's endpoints.
pub(crate) fn center_of<K: Endpoint, V>(
    nodes: &[Node],
    root: NodeId,
    interval: &Interval<K, V>,
) -> Option<NodeId> {
    let (left, right) = interval.bounds();
    let mut at = root;
    loop {
        let node = &nodes[at];
        at = if interval.spans(node.split) {
            return Some(at);
        } else if left < node.split && right < node.split {
            node.left?
        } else if left > node.split && right > node.split {
            node.right?
        } else {
            return None;
        };
    }
}
