use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{PredecessorMap, Tolerance};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Counters describing how much of the predecessor DAG a traversal touched
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Nodes placed on the traversal stack, including the target and every source hit
    pub frames_pushed: usize,
    /// Complete paths handed out so far
    pub paths_emitted: usize,
}

/// Decides whether a partial path, grown backwards from the target, may be
/// extended by one more predecessor.
pub trait SuffixBound<N> {
    /// Accumulated value carried by each partial path
    type Weight: Copy + Debug;

    /// Value of the empty suffix at the target
    fn empty(&self) -> Self::Weight;

    /// Value of the suffix after prepending the hop `pred -> node`, or `None`
    /// to prune the branch. When `pred` is the source the result decides
    /// whether the complete path is emitted.
    fn extend(&self, pred: N, node: N, suffix: Self::Weight) -> Option<Self::Weight>;
}

/// Accepts every branch of the predecessor relation
#[derive(Debug, Default, Clone, Copy)]
pub struct Unbounded;

impl<N> SuffixBound<N> for Unbounded {
    type Weight = ();

    fn empty(&self) -> Self::Weight {}

    fn extend(&self, _pred: N, _node: N, _suffix: Self::Weight) -> Option<Self::Weight> {
        Some(())
    }
}

/// Keeps only paths whose actual edge sum ties the minimum distance.
///
/// Each solver tie is judged against a single node's distance, so a path made
/// of several tied hops can drift further than the tolerance. A branch is cut
/// as soon as `distance[pred] + suffix` exceeds `distance[target]` beyond the
/// tolerance.
#[derive(Debug)]
pub struct TiedWeight<'a, N, W, G> {
    graph: &'a G,
    distances: &'a HashMap<N, W>,
    source: N,
    distance: W,
    tolerance: Tolerance,
}

impl<'a, N, W, G> TiedWeight<'a, N, W, G>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    pub fn new(
        graph: &'a G,
        distances: &'a HashMap<N, W>,
        source: N,
        distance: W,
        tolerance: Tolerance,
    ) -> Self {
        TiedWeight {
            graph,
            distances,
            source,
            distance,
            tolerance,
        }
    }
}

impl<'a, N, W, G> SuffixBound<N> for TiedWeight<'a, N, W, G>
where
    N: NodeId,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    type Weight = W;

    fn empty(&self) -> W {
        W::zero()
    }

    fn extend(&self, pred: N, node: N, suffix: W) -> Option<W> {
        let suffix = suffix + self.graph.edge_weight(pred, node)?;
        if pred == self.source {
            return self.tolerance.ties(suffix, self.distance).then_some(suffix);
        }

        let through = *self.distances.get(&pred)? + suffix;
        if self.tolerance.is_strictly_less(self.distance, through) {
            None
        } else {
            Some(suffix)
        }
    }
}

#[derive(Debug)]
struct Frame<N, S> {
    node: N,
    next: usize,
    suffix: S,
}

/// Lazy depth-first enumeration of minimum-weight paths over a restricted
/// predecessor DAG.
///
/// The walk starts at the target and follows predecessors in the order stored
/// in the DAG (ascending after [`crate::algorithm::dag::restrict`]). A path is
/// emitted the moment the source is reached, and nothing more is explored once
/// `k` paths have been produced.
#[derive(Debug)]
pub struct PathEnumerator<'a, N: NodeId, B: SuffixBound<N> = Unbounded> {
    dag: &'a PredecessorMap<N>,
    bound: B,
    source: N,
    target: N,
    limit: usize,
    started: bool,
    stack: Vec<Frame<N, B::Weight>>,
    on_path: HashSet<N>,
    stats: EnumerationStats,
}

/// Starts an enumeration of up to `k` paths from `source` to `target`.
///
/// Fails with [`Error::InvalidArgument`] if `k` is zero.
pub fn enumerate<N: NodeId>(
    dag: &PredecessorMap<N>,
    source: N,
    target: N,
    k: usize,
) -> Result<PathEnumerator<'_, N>> {
    enumerate_bounded(dag, Unbounded, source, target, k)
}

/// Like [`enumerate`], but every hop is checked against `bound`.
pub fn enumerate_bounded<N: NodeId, B: SuffixBound<N>>(
    dag: &PredecessorMap<N>,
    bound: B,
    source: N,
    target: N,
    k: usize,
) -> Result<PathEnumerator<'_, N, B>> {
    if k == 0 {
        return Err(Error::InvalidArgument(
            "k must be a positive integer".to_string(),
        ));
    }

    Ok(PathEnumerator {
        dag,
        bound,
        source,
        target,
        limit: k,
        started: false,
        stack: Vec::new(),
        on_path: HashSet::new(),
        stats: EnumerationStats::default(),
    })
}

impl<'a, N: NodeId, B: SuffixBound<N>> PathEnumerator<'a, N, B> {
    pub fn stats(&self) -> EnumerationStats {
        self.stats
    }

    fn emit(&mut self, path: Vec<N>, weight: B::Weight) -> Option<(Vec<N>, B::Weight)> {
        self.stats.paths_emitted += 1;
        Some((path, weight))
    }

    /// Next path together with the value the bound accumulated along it
    pub fn next_weighted(&mut self) -> Option<(Vec<N>, B::Weight)> {
        if self.stats.paths_emitted >= self.limit {
            return None;
        }

        if !self.started {
            self.started = true;
            self.stats.frames_pushed += 1;
            let empty = self.bound.empty();
            if self.source == self.target {
                return self.emit(vec![self.source], empty);
            }
            self.on_path.insert(self.target);
            self.stack.push(Frame {
                node: self.target,
                next: 0,
                suffix: empty,
            });
        }

        let dag = self.dag;
        while let Some(frame) = self.stack.last_mut() {
            let preds = dag.get(&frame.node).map(Vec::as_slice).unwrap_or(&[]);

            if frame.next >= preds.len() {
                let node = frame.node;
                self.stack.pop();
                self.on_path.remove(&node);
                continue;
            }

            let pred = preds[frame.next];
            frame.next += 1;
            let (node, suffix) = (frame.node, frame.suffix);

            // Only reachable through zero-weight cycles
            if self.on_path.contains(&pred) {
                continue;
            }
            let Some(suffix) = self.bound.extend(pred, node, suffix) else {
                continue;
            };

            self.stats.frames_pushed += 1;
            if pred == self.source {
                let mut path = Vec::with_capacity(self.stack.len() + 1);
                path.push(pred);
                path.extend(self.stack.iter().rev().map(|f| f.node));
                return self.emit(path, suffix);
            }

            self.on_path.insert(pred);
            self.stack.push(Frame {
                node: pred,
                next: 0,
                suffix,
            });
        }

        None
    }
}

impl<'a, N: NodeId, B: SuffixBound<N>> Iterator for PathEnumerator<'a, N, B> {
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Vec<N>> {
        self.next_weighted().map(|(path, _)| path)
    }
}
