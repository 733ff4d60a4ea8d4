use std::collections::HashSet;
use log::debug;

use crate::algorithm::PredecessorMap;
use crate::graph::NodeId;
use crate::{Error, Result};

/// Restricts a predecessor relation to the nodes that lie on at least one
/// minimum-weight `source -> target` path.
///
/// A single reverse sweep from `target` keeps exactly the predecessor edges
/// reachable backwards from it. Each retained list is sorted ascending and
/// deduplicated, which fixes the branch order used during enumeration.
///
/// Fails with [`Error::NoPath`] if `target` (or `source`) has no entry, i.e. the
/// relation was not built from `source` or `target` was never reached.
pub fn restrict<N: NodeId>(
    predecessors: &PredecessorMap<N>,
    source: N,
    target: N,
) -> Result<PredecessorMap<N>> {
    if !predecessors.contains_key(&source) || !predecessors.contains_key(&target) {
        return Err(Error::NoPath {
            origin: format!("{:?}", source),
            destination: format!("{:?}", target),
        });
    }

    let mut restricted = PredecessorMap::new();
    let mut seen: HashSet<N> = HashSet::from([target]);
    let mut stack = vec![target];

    while let Some(node) = stack.pop() {
        let mut preds = predecessors.get(&node).cloned().unwrap_or_default();
        preds.sort_unstable();
        preds.dedup();

        for &pred in &preds {
            if seen.insert(pred) {
                stack.push(pred);
            }
        }
        restricted.insert(node, preds);
    }

    debug!(
        "restricted predecessor relation from {} to {} nodes",
        predecessors.len(),
        restricted.len()
    );

    Ok(restricted)
}
