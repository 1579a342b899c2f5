//! Sync propagation: a node loads synchronously if anything below it does
//!
//! Runs as a post-order pass after synthesis, so every descendant's flag is
//! final before its ancestor's is computed.

use crate::node::RouteNode;

/// Settles the effective `is_sync` flag of every node in the forest
pub(crate) fn propagate<H>(nodes: &mut [RouteNode<H>]) {
    for node in nodes {
        settle(node);
    }
}

/// Post-order step; returns the node's effective flag
///
/// A node without a flag of its own only acquires one when some child
/// carries a definite flag.
fn settle<H>(node: &mut RouteNode<H>) -> Option<bool> {
    let mut below: Option<bool> = None;
    if let Some(children) = node.children.as_mut() {
        for child in children.iter_mut() {
            if let Some(flag) = settle(child) {
                below = Some(below.unwrap_or(false) || flag);
            }
        }
    }

    let meta = node.meta_mut();
    let effective = match (meta.is_sync, below) {
        (Some(own), Some(below)) => Some(own || below),
        (own, None) => own,
        (None, below) => below,
    };
    meta.is_sync = effective;
    effective
}
