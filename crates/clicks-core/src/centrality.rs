//! Degree centrality and center selection.
//!
//! Degree centrality of a node is its degree divided by `|V| - 1`, rounded to
//! four decimal digits. The most central node of a (sub)graph serves as the
//! canonical start page for category-scoped click queries.
//!
//! Tie-break: [`most_central`] returns the *first* node (in the graph's
//! insertion order) that reaches the maximum score.

use serde::Serialize;

use crate::error::{ClickError, Result};
use crate::graph::PageGraph;

/// Degree centrality of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityScore {
    /// Page id.
    pub page: String,
    /// Number of distinct neighbors.
    pub degree: usize,
    /// `degree / (|V| - 1)`, rounded to four decimals.
    pub score: f64,
}

/// Compute degree centrality for every node, in node iteration order.
///
/// # Errors
///
/// - [`ClickError::InvalidInput`] if the graph has no nodes.
/// - [`ClickError::DegenerateCentrality`] if the graph has exactly one node,
///   since the normalization denominator would be zero. Callers that may
///   see single-page subgraphs must check [`PageGraph::node_count`] first.
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(graph: &PageGraph) -> Result<Vec<CentralityScore>> {
    let n = graph.node_count();
    match n {
        0 => {
            return Err(ClickError::InvalidInput(
                "degree centrality of an empty graph".to_string(),
            ));
        }
        1 => {
            let node = graph.nodes().next().unwrap_or_default().to_string();
            return Err(ClickError::DegenerateCentrality { node });
        }
        _ => {}
    }

    let denominator = (n - 1) as f64;
    let scores = graph
        .nodes()
        .filter_map(|page| graph.node_index(page).map(|idx| (page, graph.degree(idx))))
        .map(|(page, degree)| CentralityScore {
            page: page.to_string(),
            degree,
            score: round4(degree as f64 / denominator),
        })
        .collect();

    Ok(scores)
}

/// The most central page of `graph` and its score.
///
/// # Errors
///
/// Same as [`degree_centrality`].
pub fn most_central(graph: &PageGraph) -> Result<CentralityScore> {
    let scores = degree_centrality(graph)?;
    let mut best: Option<CentralityScore> = None;
    for candidate in scores {
        // Strictly greater keeps the first maximum.
        if best.as_ref().is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best.ok_or_else(|| ClickError::InvalidInput("degree centrality of an empty graph".to_string()))
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
