//! Bounded-depth frontier enumeration.
//!
//! # Overview
//!
//! [`Frontier`] lazily walks a [`PageGraph`] breadth-first from a start page
//! and yields every `(from, to)` link through which a page is discovered for
//! the first time, up to a maximum number of clicks.
//!
//! The iterator is an explicit state machine:
//!
//! - a visited set seeded with the start page,
//! - a FIFO queue of `(node, remaining depth, neighbor cursor)` entries.
//!
//! Each call to `next` advances the cursor of the entry at the head of the
//! queue. An unvisited neighbor `w` of `u` produces the pair `(u, w)` and is
//! marked visited at once; `w` is queued for expansion with
//! `remaining - 1` only while `u`'s remaining depth is greater than one.
//! When a cursor runs dry its entry is popped.
//!
//! Dropping the iterator early is fine: all state is local to one
//! enumeration and nothing is shared with later calls.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::iter::FusedIterator;

use fixedbitset::FixedBitSet;
use petgraph::graph::{Neighbors, NodeIndex};
use tracing::trace;

use crate::error::{ClickError, Result};
use crate::graph::PageGraph;

/// One frontier queue entry.
struct Entry<'g> {
    node: NodeIndex,
    remaining: usize,
    cursor: Neighbors<'g, ()>,
}

/// Lazy breadth-first enumeration of first-discovery links within `depth`
/// clicks of a start page.
pub struct Frontier<'g> {
    graph: &'g PageGraph,
    visited: FixedBitSet,
    visited_count: usize,
    queue: VecDeque<Entry<'g>>,
}

impl<'g> Frontier<'g> {
    /// Start an enumeration from `start` allowing at most `depth` clicks.
    ///
    /// # Errors
    ///
    /// Returns [`ClickError::InvalidInput`] when `depth` is zero and
    /// [`ClickError::UnknownNode`] when `start` is not in the graph.
    pub fn new(graph: &'g PageGraph, start: &str, depth: usize) -> Result<Self> {
        if depth == 0 {
            return Err(ClickError::InvalidInput(
                "frontier depth must be at least 1".to_string(),
            ));
        }
        let start_idx = graph
            .node_index(start)
            .ok_or_else(|| ClickError::UnknownNode(start.to_string()))?;
        Ok(Self::from_index(graph, start_idx, depth))
    }

    pub(crate) fn from_index(graph: &'g PageGraph, start: NodeIndex, depth: usize) -> Self {
        let mut visited = FixedBitSet::with_capacity(graph.node_count());
        visited.insert(start.index());

        let mut queue = VecDeque::new();
        queue.push_back(Entry {
            node: start,
            remaining: depth,
            cursor: graph.neighbors(start),
        });

        Self {
            graph,
            visited,
            visited_count: 1,
            queue,
        }
    }

    /// Advance to the next first-discovery link, as node indices.
    pub fn next_indices(&mut self) -> Option<(NodeIndex, NodeIndex)> {
        loop {
            let entry = self.queue.front_mut()?;
            let Some(neighbor) = entry.cursor.next() else {
                self.queue.pop_front();
                continue;
            };

            if self.visited.put(neighbor.index()) {
                continue;
            }
            self.visited_count += 1;

            let from = entry.node;
            let remaining = entry.remaining;
            if remaining > 1 {
                self.queue.push_back(Entry {
                    node: neighbor,
                    remaining: remaining - 1,
                    cursor: self.graph.neighbors(neighbor),
                });
            }
            return Some((from, neighbor));
        }
    }

    /// Number of pages discovered so far, the start page included.
    #[must_use]
    pub const fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Returns `true` once `idx` has been discovered.
    #[must_use]
    pub fn is_visited(&self, idx: NodeIndex) -> bool {
        self.visited.contains(idx.index())
    }
}

impl<'g> Iterator for Frontier<'g> {
    type Item = (&'g str, &'g str);

    fn next(&mut self) -> Option<Self::Item> {
        let (from, to) = self.next_indices()?;
        let edge = (self.graph.label(from), self.graph.label(to));
        trace!(from = edge.0, to = edge.1, "frontier edge");
        Some(edge)
    }
}

impl FusedIterator for Frontier<'_> {}

impl fmt::Debug for Frontier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frontier")
            .field("visited", &self.visited_count)
            .field("queued", &self.queue.len())
            .finish_non_exhaustive()
    }
}

/// All pages reachable from `start` within `depth` clicks, `start` included.
///
/// # Errors
///
/// Same as [`Frontier::new`].
pub fn reachable_pages<'g>(
    graph: &'g PageGraph,
    start: &str,
    depth: usize,
) -> Result<HashSet<&'g str>> {
    let frontier = Frontier::new(graph, start, depth)?;
    let mut reached: HashSet<&'g str> = HashSet::new();
    if let Some(idx) = graph.node_index(start) {
        reached.insert(graph.label(idx));
    }
    reached.extend(frontier.map(|(_, to)| to));
    Ok(reached)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> PageGraph {
        let ids: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
        let edges: Vec<(String, String)> = ids
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect();
        PageGraph::from_edges(ids, edges)
    }

    #[test]
    fn path_depth_limits_emission() {
        let g = path(5);
        let edges: Vec<_> = Frontier::new(&g, "1", 2).expect("frontier").collect();
        assert_eq!(edges, [("1", "2"), ("2", "3")]);

        let edges: Vec<_> = Frontier::new(&g, "1", 10).expect("frontier").collect();
        assert_eq!(edges, [("1", "2"), ("2", "3"), ("3", "4"), ("4", "5")]);
    }

    #[test]
    fn depth_one_emits_only_direct_links() {
        let g = PageGraph::from_edges(
            Vec::<&str>::new(),
            [("c", "a"), ("c", "b"), ("c", "d"), ("a", "x")],
        );
        let mut to: Vec<_> = Frontier::new(&g, "c", 1)
            .expect("frontier")
            .map(|(from, to)| {
                assert_eq!(from, "c");
                to
            })
            .collect();
        to.sort_unstable();
        assert_eq!(to, ["a", "b", "d"]);
    }

    #[test]
    fn triangle_never_rediscovers() {
        let g = PageGraph::from_edges(Vec::<&str>::new(), [("a", "b"), ("b", "c"), ("c", "a")]);
        let edges: Vec<_> = Frontier::new(&g, "a", 5).expect("frontier").collect();
        assert_eq!(edges.len(), 2);
        assert!(edges.iter().all(|(from, _)| *from == "a"));
    }

    #[test]
    fn partial_consumption_leaves_later_runs_untouched() {
        let g = path(4);
        let mut first = Frontier::new(&g, "1", 3).expect("frontier");
        assert_eq!(first.next(), Some(("1", "2")));
        assert_eq!(first.visited_count(), 2);
        drop(first);

        let full: Vec<_> = Frontier::new(&g, "1", 3).expect("frontier").collect();
        assert_eq!(full.len(), 3);
    }

    #[test]
    fn exhausted_frontier_stays_exhausted() {
        let g = path(2);
        let mut f = Frontier::new(&g, "1", 1).expect("frontier");
        assert!(f.next().is_some());
        assert!(f.next().is_none());
        assert!(f.next().is_none());
    }

    #[test]
    fn isolated_start_emits_nothing() {
        let g = PageGraph::from_edges(["solo"], Vec::<(&str, &str)>::new());
        assert_eq!(Frontier::new(&g, "solo", 3).expect("frontier").count(), 0);
        let reached = reachable_pages(&g, "solo", 3).expect("reach");
        assert_eq!(reached.len(), 1);
        assert!(reached.contains("solo"));
    }

    #[test]
    fn rejects_zero_depth_and_unknown_start() {
        let g = path(3);
        assert!(matches!(
            Frontier::new(&g, "1", 0),
            Err(ClickError::InvalidInput(_))
        ));
        assert!(matches!(
            Frontier::new(&g, "9", 1),
            Err(ClickError::UnknownNode(ref id)) if id == "9"
        ));
    }

    #[test]
    fn reachable_pages_include_start() {
        let g = path(5);
        let reached = reachable_pages(&g, "3", 1).expect("reach");
        let mut pages: Vec<_> = reached.into_iter().collect();
        pages.sort_unstable();
        assert_eq!(pages, ["2", "3", "4"]);
    }
}
