use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::NodeId;
use crate::{Error, Result};

/// One minimum-weight path and its position in the emission order
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath<N, W> {
    /// 0-based discovery order
    pub rank: usize,
    /// Nodes from source to target
    pub nodes: Vec<N>,
    /// Sum of the path's edge weights, tied with the minimum distance
    pub weight: W,
}

/// Up to `k` tied minimum-weight paths between two nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet<N, W> {
    pub source: N,
    pub target: N,
    /// Minimum distance from source to target
    pub distance: W,
    pub paths: Vec<RankedPath<N, W>>,
}

impl<N, W> ResultSet<N, W>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
{
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false for a set returned by the engine
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedPath<N, W>> {
        self.paths.iter()
    }

    /// The rank-0 path
    pub fn first(&self) -> Option<&RankedPath<N, W>> {
        self.paths.first()
    }
}

impl<'a, N, W> IntoIterator for &'a ResultSet<N, W> {
    type Item = &'a RankedPath<N, W>;
    type IntoIter = std::slice::Iter<'a, RankedPath<N, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Packages enumerated paths and their weights with ranks.
///
/// A reachable target always has at least one minimum path, so an empty input
/// is reported as [`Error::EmptyResult`] rather than returned.
pub fn assemble<N, W, I>(source: N, target: N, distance: W, paths: I) -> Result<ResultSet<N, W>>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    I: IntoIterator<Item = (Vec<N>, W)>,
{
    let paths: Vec<RankedPath<N, W>> = paths
        .into_iter()
        .enumerate()
        .map(|(rank, (nodes, weight))| RankedPath {
            rank,
            nodes,
            weight,
        })
        .collect();

    if paths.is_empty() {
        return Err(Error::EmptyResult(format!("{:?}", target)));
    }

    Ok(ResultSet {
        source,
        target,
        distance,
        paths,
    })
}
