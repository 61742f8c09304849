//! Click-distance solver: iterative deepening over the frontier enumerator.
//!
//! # Overview
//!
//! The click distance from a start page to a target set `p` is the smallest
//! depth `d` such that the start page plus every page the [`Frontier`]
//! discovers within `d` clicks covers `p`.
//!
//! The solver tries `d = 1, 2, …`, building a fresh frontier for every depth
//! (the previous one is never resumed), and returns as soon as `p` is
//! covered. Because `d` starts at 1, a target set equal to `{start}` has
//! distance 1, not 0; downstream medians rely on that convention.
//!
//! ## Reachability
//!
//! Before any enumeration the start page and every target must lie in one
//! connected component. Otherwise the query answers
//! [`Distance::Disconnected`] immediately. Pages missing from the graph are
//! treated the same way.
//!
//! ## Start points
//!
//! - [`Start::Page`]: an explicit start page (page-to-page queries).
//! - [`Start::MostCentral`]: the most degree-central page of the graph being
//!   searched, used for category-scoped queries over a category subgraph.

use std::fmt;

use petgraph::graph::NodeIndex;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::centrality::most_central;
use crate::config::SolverConfig;
use crate::dataset::Dataset;
use crate::error::{ClickError, Result};
use crate::frontier::Frontier;
use crate::graph::PageGraph;

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Outcome of a click-distance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// Minimum number of clicks needed to cover the target set (always `>= 1`).
    Clicks(usize),
    /// The start page and the targets do not share a connected component.
    Disconnected,
}

impl Distance {
    /// The number of clicks, or `None` when disconnected.
    #[must_use]
    pub const fn clicks(self) -> Option<usize> {
        match self {
            Self::Clicks(d) => Some(d),
            Self::Disconnected => None,
        }
    }

    /// Returns `true` for [`Distance::Disconnected`].
    #[must_use]
    pub const fn is_disconnected(self) -> bool {
        matches!(self, Self::Disconnected)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clicks(1) => f.write_str("1 click"),
            Self::Clicks(d) => write!(f, "{d} clicks"),
            Self::Disconnected => f.write_str("not connected"),
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Where a click-distance query starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start<'a> {
    /// Start from this page.
    Page(&'a str),
    /// Start from the most degree-central page of the searched graph.
    MostCentral,
}

/// A click-distance query: a start point, a target set and solver knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickQuery<'a> {
    pub start: Start<'a>,
    pub targets: Vec<&'a str>,
    pub config: SolverConfig,
}

impl<'a> ClickQuery<'a> {
    /// Query from an explicit start page.
    pub fn from_page<I>(start: &'a str, targets: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            start: Start::Page(start),
            targets: targets.into_iter().collect(),
            config: SolverConfig::default(),
        }
    }

    /// Query from the most central page of the searched graph.
    pub fn from_center<I>(targets: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            start: Start::MostCentral,
            targets: targets.into_iter().collect(),
            config: SolverConfig::default(),
        }
    }

    /// Replace the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the query against `graph`.
    ///
    /// # Errors
    ///
    /// - [`ClickError::InvalidInput`] if the target set is empty.
    /// - Centrality errors when the start is [`Start::MostCentral`] and the
    ///   graph has fewer than two pages.
    /// - [`ClickError::DepthLimitExceeded`] if `config.max_depth` is reached
    ///   before the targets are covered.
    #[instrument(skip(self, graph), fields(targets = self.targets.len()))]
    pub fn run(&self, graph: &PageGraph) -> Result<Distance> {
        if self.targets.is_empty() {
            return Err(ClickError::InvalidInput(
                "click query needs at least one target page".to_string(),
            ));
        }

        let center;
        let start = match self.start {
            Start::Page(page) => page,
            Start::MostCentral => {
                center = most_central(graph)?;
                debug!(center = %center.page, score = center.score, "selected start page");
                center.page.as_str()
            }
        };

        let pages = std::iter::once(start).chain(self.targets.iter().copied());
        if !graph.same_component(pages) {
            debug!(start, "targets not in the start page's component");
            return Ok(Distance::Disconnected);
        }

        // Both lookups succeed: same_component only passes for known pages.
        let Some(start_idx) = graph.node_index(start) else {
            return Ok(Distance::Disconnected);
        };
        let targets: Vec<NodeIndex> = self
            .targets
            .iter()
            .filter_map(|page| graph.node_index(page))
            .collect();

        deepen(graph, start_idx, &targets, self.config)
    }
}

/// Iterative deepening from `start` until every target is discovered.
fn deepen(
    graph: &PageGraph,
    start: NodeIndex,
    targets: &[NodeIndex],
    config: SolverConfig,
) -> Result<Distance> {
    // A connected target set is covered within |V| - 1 clicks, so this bound
    // is never the reason the loop ends unless the graph is inconsistent.
    let ceiling = graph.node_count().max(1);

    for depth in 1..=ceiling {
        if let Some(limit) = config.max_depth.filter(|&limit| depth > limit) {
            return Err(ClickError::DepthLimitExceeded { limit });
        }

        let mut frontier = Frontier::from_index(graph, start, depth);
        let covered = |f: &Frontier<'_>| targets.iter().all(|&t| f.is_visited(t));

        // Pull lazily; stop as soon as the target set is covered.
        let mut done = covered(&frontier);
        while !done && frontier.next_indices().is_some() {
            done = covered(&frontier);
        }

        debug!(depth, visited = frontier.visited_count(), covered = done, "deepening step");
        if done {
            return Ok(Distance::Clicks(depth));
        }
    }

    Ok(Distance::Disconnected)
}

// ---------------------------------------------------------------------------
// Convenience entry points
// ---------------------------------------------------------------------------

/// Minimum clicks from `start` to cover every page in `targets`.
///
/// # Errors
///
/// See [`ClickQuery::run`].
pub fn min_clicks<'a, I>(graph: &PageGraph, start: &'a str, targets: I) -> Result<Distance>
where
    I: IntoIterator<Item = &'a str>,
{
    ClickQuery::from_page(start, targets).run(graph)
}

/// Minimum clicks from the most central page of `graph` to cover `targets`.
///
/// # Errors
///
/// See [`ClickQuery::run`]; in particular a single-page graph fails with
/// [`ClickError::DegenerateCentrality`].
pub fn min_clicks_from_center<'a, I>(graph: &PageGraph, targets: I) -> Result<Distance>
where
    I: IntoIterator<Item = &'a str>,
{
    ClickQuery::from_center(targets).run(graph)
}

/// Minimum clicks needed, inside `category`, to reach `pages` from the
/// category's most central page.
///
/// The search runs on the subgraph induced by the category's pages that are
/// present in `graph`; links leaving the category are not followed.
///
/// # Errors
///
/// - [`ClickError::UnknownCategory`] if the dataset has no such category.
/// - [`ClickError::DegenerateCentrality`] if fewer than two of the
///   category's pages are in the graph.
/// - Anything [`ClickQuery::run`] reports.
#[instrument(skip(dataset, graph, pages, config))]
pub fn category_clicks<'a, I>(
    dataset: &Dataset,
    graph: &PageGraph,
    category: &str,
    pages: I,
    config: SolverConfig,
) -> Result<Distance>
where
    I: IntoIterator<Item = &'a str>,
{
    let members = dataset
        .pages_in(category)
        .ok_or_else(|| ClickError::UnknownCategory(category.to_string()))?;
    let subgraph = graph.subgraph(members.iter().map(String::as_str));

    // Centrality is undefined below two pages; refuse before selecting.
    if subgraph.node_count() < 2 {
        return Err(ClickError::DegenerateCentrality {
            node: subgraph.nodes().next().unwrap_or_default().to_string(),
        });
    }

    ClickQuery::from_center(pages).with_config(config).run(&subgraph)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

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
    fn path_distance_to_far_end() {
        let g = path(5);
        assert_eq!(min_clicks(&g, "1", ["5"]), Ok(Distance::Clicks(4)));
        assert_eq!(min_clicks(&g, "1", ["3", "5"]), Ok(Distance::Clicks(4)));
        assert_eq!(min_clicks(&g, "1", ["2"]), Ok(Distance::Clicks(1)));
    }

    #[test]
    fn unknown_target_is_disconnected() {
        let g = path(5);
        assert_eq!(min_clicks(&g, "1", ["6"]), Ok(Distance::Disconnected));
        assert_eq!(min_clicks(&g, "0", ["1"]), Ok(Distance::Disconnected));
    }

    #[test]
    fn separate_components_are_disconnected() {
        let g = PageGraph::from_edges(Vec::<&str>::new(), [("a", "b"), ("c", "d")]);
        assert_eq!(min_clicks(&g, "a", ["d"]), Ok(Distance::Disconnected));
        assert_eq!(min_clicks(&g, "a", ["b", "d"]), Ok(Distance::Disconnected));
    }

    #[test]
    fn start_as_only_target_counts_one_click() {
        let g = path(3);
        assert_eq!(min_clicks(&g, "2", ["2"]), Ok(Distance::Clicks(1)));

        let solo = PageGraph::from_edges(["x"], Vec::<(&str, &str)>::new());
        assert_eq!(min_clicks(&solo, "x", ["x"]), Ok(Distance::Clicks(1)));
    }

    #[test]
    fn empty_target_set_is_invalid() {
        let g = path(3);
        assert!(matches!(
            min_clicks(&g, "1", std::iter::empty()),
            Err(ClickError::InvalidInput(_))
        ));
    }

    #[test]
    fn depth_cap_is_enforced() {
        let g = path(5);
        let capped = SolverConfig { max_depth: Some(3) };
        assert_eq!(
            ClickQuery::from_page("1", ["5"]).with_config(capped).run(&g),
            Err(ClickError::DepthLimitExceeded { limit: 3 })
        );
        assert_eq!(
            ClickQuery::from_page("1", ["4"]).with_config(capped).run(&g),
            Ok(Distance::Clicks(3))
        );
    }

    #[test]
    fn center_start_uses_most_central_page() {
        // Hub h with spokes; the far leaf hangs off spoke a.
        let g = PageGraph::from_edges(
            Vec::<&str>::new(),
            [("a", "h"), ("h", "b"), ("h", "c"), ("a", "far")],
        );
        assert_eq!(min_clicks_from_center(&g, ["far"]), Ok(Distance::Clicks(2)));
        assert_eq!(
            min_clicks_from_center(&g, ["b", "c"]),
            Ok(Distance::Clicks(1))
        );
    }

    #[test]
    fn center_start_on_single_page_is_degenerate() {
        let g = PageGraph::from_edges(["x"], Vec::<(&str, &str)>::new());
        assert!(matches!(
            min_clicks_from_center(&g, ["x"]),
            Err(ClickError::DegenerateCentrality { .. })
        ));
    }

    #[test]
    fn category_clicks_stay_inside_category() {
        // Category A is the path a1-a2-a3-a4; b1 shortcuts a1 to a4 but is
        // not part of A, so it must not shorten the distance.
        let g = PageGraph::from_edges(
            Vec::<&str>::new(),
            [("a1", "a2"), ("a2", "a3"), ("a3", "a4"), ("a1", "b1"), ("b1", "a4")],
        );
        let ds = Dataset::from_pairs([
            ("a1", "A"),
            ("a2", "A"),
            ("a3", "A"),
            ("a4", "A"),
            ("b1", "B"),
        ]);
        // Center of A's subgraph: a2 (first node of degree 2).
        let d = category_clicks(&ds, &g, "A", ["a4"], SolverConfig::default());
        assert_eq!(d, Ok(Distance::Clicks(2)));

        let d = category_clicks(&ds, &g, "A", ["b1"], SolverConfig::default());
        assert_eq!(d, Ok(Distance::Disconnected));
    }

    #[test]
    fn category_clicks_guards_small_categories() {
        let g = PageGraph::from_edges(Vec::<&str>::new(), [("a1", "b1")]);
        let ds = Dataset::from_pairs([("a1", "A"), ("b1", "B")]);
        assert!(matches!(
            category_clicks(&ds, &g, "A", ["a1"], SolverConfig::default()),
            Err(ClickError::DegenerateCentrality { ref node }) if node == "a1"
        ));
        assert_eq!(
            category_clicks(&ds, &g, "Z", ["a1"], SolverConfig::default()),
            Err(ClickError::UnknownCategory("Z".to_string()))
        );
    }

    #[test]
    fn distance_display() {
        assert_eq!(Distance::Clicks(1).to_string(), "1 click");
        assert_eq!(Distance::Clicks(3).to_string(), "3 clicks");
        assert_eq!(Distance::Disconnected.to_string(), "not connected");
        assert_eq!(Distance::Clicks(3).clicks(), Some(3));
        assert!(Distance::Disconnected.is_disconnected());
    }
}
