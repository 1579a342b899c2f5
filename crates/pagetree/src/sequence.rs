//! Sibling sequencing
//!
//! At every level, non-group siblings come first, sorted by `path` with the
//! discovery ordinal as tie-break. Group siblings follow: those named in the
//! [`GroupOrder`] in that order, then the rest by discovery ordinal.
//!
//! Byte-wise `str` ordering puts `""` (index and layout nodes) before any
//! other label.

use std::cmp::Ordering;

use crate::node::{NodeKind, RouteNode};
use crate::GroupOrder;

fn is_group<H>(node: &RouteNode<H>) -> bool {
    node.meta().kind() == NodeKind::Group
}

fn group_rank<H>(node: &RouteNode<H>, order: &GroupOrder) -> usize {
    node.meta()
        .segment()
        .and_then(|name| order.rank(name))
        .unwrap_or(usize::MAX)
}

fn compare<H>(a: &RouteNode<H>, b: &RouteNode<H>, order: &GroupOrder) -> Ordering {
    let discovery = a.meta().order.cmp(&b.meta().order);
    match (is_group(a), is_group(b)) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (false, false) => a.path.cmp(&b.path).then(discovery),
        (true, true) => group_rank(a, order)
            .cmp(&group_rank(b, order))
            .then(discovery),
    }
}

/// Orders siblings at every level of the forest
pub(crate) fn sequence<H>(nodes: &mut [RouteNode<H>], order: &GroupOrder) {
    nodes.sort_by(|a, b| compare(a, b, order));
    for node in nodes.iter_mut() {
        if let Some(children) = node.children.as_mut() {
            sequence(children, order);
        }
    }
}
