//! The page graph: an undirected, unweighted link graph between pages.
//!
//! # Overview
//!
//! [`PageGraph`] wraps a petgraph [`UnGraph`] whose node weights are page
//! ids. It is the graph provider for every query in this crate and exposes
//! exactly what the traversal code needs:
//!
//! - neighbors of a node in a stable, repeatable order,
//! - the total node count,
//! - the connected-component decomposition (computed once at build time).
//!
//! ## Normalization
//!
//! Self-loops are dropped and repeated edges (in either direction) collapse
//! into one adjacency, so the graph is always simple.
//!
//! ## Ordering
//!
//! Nodes iterate in insertion order. Neighbor order is petgraph's adjacency
//! order, which is deterministic for a given sequence of insertions. All
//! tie-breaks downstream (centrality, ranking) inherit these orders.
//!
//! ## Fingerprint
//!
//! [`PageGraph::content_hash`] is a BLAKE3 hash of the sorted, normalized
//! edge set. Two graphs with the same edges hash equal regardless of the
//! order the edges were read in.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use tracing::{debug, instrument, trace};

use crate::error::{ClickError, InputKind, Result};

// ---------------------------------------------------------------------------
// PageGraph
// ---------------------------------------------------------------------------

/// An undirected link graph between pages.
#[derive(Debug, Clone)]
pub struct PageGraph {
    graph: UnGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    /// Component label per node index (the union-find representative).
    component: Vec<usize>,
    content_hash: String,
}

impl PageGraph {
    /// Build a graph from an explicit node list and a set of edges.
    ///
    /// `nodes` may list isolated pages; edge endpoints that are not in
    /// `nodes` are added on first sight. Node insertion order is the order of
    /// `nodes` followed by the order new endpoints appear in `edges`.
    pub fn from_edges<N, E, S>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = S>,
        E: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut graph = UnGraph::<String, ()>::default();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        for id in nodes {
            intern(&mut graph, &mut node_map, id.into());
        }

        for (a, b) in edges {
            let a = intern(&mut graph, &mut node_map, a.into());
            let b = intern(&mut graph, &mut node_map, b.into());
            if a == b {
                trace!(page = %graph[a], "dropping self-loop");
                continue;
            }
            if graph.find_edge(a, b).is_none() {
                graph.add_edge(a, b, ());
            }
        }

        let component = label_components(&graph);
        let content_hash = compute_edge_hash(&graph);

        Self {
            graph,
            node_map,
            component,
            content_hash,
        }
    }

    /// Parse a whitespace-separated edge list.
    ///
    /// Each non-empty line holds either `<from> <to>` (an edge) or a single
    /// `<page>` (an isolated node). Lines starting with `#` are comments.
    ///
    /// # Errors
    ///
    /// Returns [`ClickError::Parse`] for lines with more than two tokens and
    /// [`ClickError::Io`] if reading fails.
    #[instrument(skip(reader))]
    pub fn from_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        // Every token in file order, so node order follows the file.
        let mut ordered: Vec<String> = Vec::new();
        let mut edges: Vec<(String, String)> = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(page), None, _) => ordered.push(page.to_string()),
                (Some(a), Some(b), None) => {
                    ordered.push(a.to_string());
                    ordered.push(b.to_string());
                    edges.push((a.to_string(), b.to_string()));
                }
                _ => {
                    return Err(ClickError::Parse {
                        source_kind: InputKind::EdgeList,
                        line: i + 1,
                        message: format!("expected `<from> <to>`, got `{trimmed}`"),
                    });
                }
            }
        }

        let graph = Self::from_edges(ordered, edges);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            components = graph.component_count(),
            "loaded edge list"
        );
        Ok(graph)
    }

    /// Return the number of pages in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of (deduplicated) links in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if `page` is a node of the graph.
    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.node_map.contains_key(page)
    }

    /// Look up the `NodeIndex` for a page id.
    #[must_use]
    pub fn node_index(&self, page: &str) -> Option<NodeIndex> {
        self.node_map.get(page).copied()
    }

    /// Return the page id of a node.
    #[must_use]
    pub fn page_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Page id of a node that is known to belong to this graph.
    pub(crate) fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Page ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| self.graph[idx].as_str())
    }

    /// Neighbors of `idx` in the graph's stable adjacency order.
    #[must_use]
    pub fn neighbors(&self, idx: NodeIndex) -> petgraph::graph::Neighbors<'_, ()> {
        self.graph.neighbors(idx)
    }

    /// Degree of `idx` (number of distinct neighbors).
    #[must_use]
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.neighbors(idx).count()
    }

    /// BLAKE3 fingerprint of the normalized edge set (`blake3:<hex>`).
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    // -----------------------------------------------------------------------
    // Connected components
    // -----------------------------------------------------------------------

    /// Component label of `page`, or `None` if the page is not in the graph.
    ///
    /// Labels are only meaningful for equality comparisons.
    #[must_use]
    pub fn component_of(&self, page: &str) -> Option<usize> {
        self.node_index(page).map(|idx| self.component[idx.index()])
    }

    /// Returns `true` if every page exists and all lie in one component.
    ///
    /// An empty input is trivially connected.
    pub fn same_component<'a, I>(&self, pages: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut label = None;
        for page in pages {
            let Some(current) = self.component_of(page) else {
                return false;
            };
            match label {
                None => label = Some(current),
                Some(existing) if existing != current => return false,
                Some(_) => {}
            }
        }
        true
    }

    /// Number of connected components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component.iter().collect::<HashSet<_>>().len()
    }

    /// Connected components as page-id groups.
    ///
    /// Components are ordered by their first node in insertion order, and the
    /// pages inside each component keep insertion order too.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<String>> {
        let mut slot: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<String>> = Vec::new();
        for idx in self.graph.node_indices() {
            let label = self.component[idx.index()];
            let pos = *slot.entry(label).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[pos].push(self.graph[idx].clone());
        }
        groups
    }

    // -----------------------------------------------------------------------
    // Subgraphs
    // -----------------------------------------------------------------------

    /// The subgraph induced by `pages`.
    ///
    /// Pages not in this graph are ignored. Node and edge order follow this
    /// graph, so tie-breaks in the subgraph agree with the parent.
    #[must_use]
    pub fn subgraph<'a, I>(&self, pages: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keep: HashSet<NodeIndex> = pages
            .into_iter()
            .filter_map(|page| self.node_index(page))
            .collect();

        let nodes: Vec<&str> = self
            .graph
            .node_indices()
            .filter(|idx| keep.contains(idx))
            .map(|idx| self.graph[idx].as_str())
            .collect();

        let edges: Vec<(&str, &str)> = self
            .graph
            .edge_references()
            .filter(|e| keep.contains(&e.source()) && keep.contains(&e.target()))
            .map(|e| (self.graph[e.source()].as_str(), self.graph[e.target()].as_str()))
            .collect();

        Self::from_edges(nodes, edges)
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn intern(
    graph: &mut UnGraph<String, ()>,
    node_map: &mut HashMap<String, NodeIndex>,
    id: String,
) -> NodeIndex {
    if let Some(&idx) = node_map.get(&id) {
        return idx;
    }
    let idx = graph.add_node(id.clone());
    node_map.insert(id, idx);
    idx
}

/// Union-find labeling: one representative per connected component.
fn label_components(graph: &UnGraph<String, ()>) -> Vec<usize> {
    let mut uf = UnionFind::<usize>::new(graph.node_count());
    for edge in graph.edge_references() {
        uf.union(edge.source().index(), edge.target().index());
    }
    uf.into_labeling()
}

/// Compute a BLAKE3 hash of the sorted, orientation-normalized edge list.
fn compute_edge_hash(graph: &UnGraph<String, ()>) -> String {
    let mut edges: Vec<(&str, &str)> = graph
        .edge_references()
        .map(|e| {
            let a = graph[e.source()].as_str();
            let b = graph[e.target()].as_str();
            if a <= b { (a, b) } else { (b, a) }
        })
        .collect();
    edges.sort_unstable();

    let mut hasher = blake3::Hasher::new();
    for (a, b) in edges {
        hasher.update(a.as_bytes());
        hasher.update(b"\x00");
        hasher.update(b.as_bytes());
        hasher.update(b"\n");
    }
    format!("blake3:{}", hasher.finalize().to_hex())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
