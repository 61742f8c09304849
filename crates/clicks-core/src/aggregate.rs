//! Category ranking by median click distance.
//!
//! # Overview
//!
//! Given a reference category `C0`, every other category `Ci` is scored by
//! the median click distance over all page pairs `(n0, ni)` with `n0` in `C0`,
//! `ni` in `Ci`, both present in the graph and sharing a connected component.
//! Categories are then ordered from closest to farthest.
//!
//! Categories with no such pair (no pages in the graph, or every pair split
//! across components) are left out of the ranking entirely.
//!
//! ## Ordering
//!
//! The sort is stable: categories with equal medians keep the dataset's
//! first-appearance order. Pages within a category are visited in dataset
//! order as well, so results are reproducible for a given input.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::SolverConfig;
use crate::dataset::Dataset;
use crate::error::{ClickError, Result};
use crate::graph::PageGraph;
use crate::solver::ClickQuery;

/// Separator used in composite category-pair keys.
pub const PAIR_SEPARATOR: &str = "---";

/// Aggregate click distance between the reference category and another one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDistance {
    /// The reference category `C0`.
    pub reference: String,
    /// The compared category `Ci`.
    pub category: String,
    /// Median click distance over all connected page pairs.
    pub median: f64,
    /// Number of page pairs the median was taken over.
    pub pairs: usize,
}

impl CategoryDistance {
    /// Composite key for the pair, e.g. `"Physics---Chemistry"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}{PAIR_SEPARATOR}{}", self.reference, self.category)
    }
}

/// Median of `values`; the mean of the two middle values for even counts.
///
/// Returns `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn median(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let m = if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    };
    Some(m)
}

/// Rank every category by its median click distance from `reference`.
///
/// # Errors
///
/// See [`rank_categories_with`].
pub fn rank_categories(
    dataset: &Dataset,
    graph: &PageGraph,
    reference: &str,
) -> Result<Vec<CategoryDistance>> {
    rank_categories_with(dataset, graph, reference, SolverConfig::default())
}

/// Rank every category by its median click distance from `reference`, using
/// `config` for each page-pair query.
///
/// # Errors
///
/// - [`ClickError::UnknownCategory`] if `reference` is not in the dataset.
/// - [`ClickError::DepthLimitExceeded`] if a page pair needs more clicks
///   than `config.max_depth` allows.
#[instrument(skip(dataset, graph, config))]
pub fn rank_categories_with(
    dataset: &Dataset,
    graph: &PageGraph,
    reference: &str,
    config: SolverConfig,
) -> Result<Vec<CategoryDistance>> {
    let reference_pages = dataset
        .pages_in(reference)
        .ok_or_else(|| ClickError::UnknownCategory(reference.to_string()))?;
    let origin: Vec<&str> = in_graph(graph, reference_pages);

    let mut ranked = Vec::new();
    if origin.is_empty() {
        info!(reference, "reference category has no pages in the graph");
        return Ok(ranked);
    }

    for category in dataset.categories() {
        if category == reference {
            continue;
        }
        let Some(pages) = dataset.pages_in(category) else {
            continue;
        };
        let other = in_graph(graph, pages);
        if other.is_empty() {
            debug!(category, "no pages in the graph; skipping");
            continue;
        }

        let distances = pair_distances(graph, &origin, &other, config)?;
        let Some(m) = median(&distances) else {
            debug!(category, "no connected page pairs; skipping");
            continue;
        };

        ranked.push(CategoryDistance {
            reference: reference.to_string(),
            category: category.to_string(),
            median: m,
            pairs: distances.len(),
        });
    }

    ranked.sort_by(|a, b| a.median.total_cmp(&b.median));

    info!(
        reference,
        ranked = ranked.len(),
        categories = dataset.category_count(),
        "ranked categories"
    );
    Ok(ranked)
}

/// Pages of one category that are nodes of `graph`, in dataset order.
fn in_graph<'a>(graph: &PageGraph, pages: &'a [String]) -> Vec<&'a str> {
    pages
        .iter()
        .map(String::as_str)
        .filter(|page| graph.contains(page))
        .collect()
}

/// Click distance for every connected `(from, to)` page pair.
fn pair_distances(
    graph: &PageGraph,
    from: &[&str],
    to: &[&str],
    config: SolverConfig,
) -> Result<Vec<usize>> {
    let mut distances = Vec::new();
    for &n0 in from {
        let c0 = graph.component_of(n0);
        for &ni in to {
            if graph.component_of(ni) != c0 {
                continue;
            }
            let distance = ClickQuery::from_page(n0, [ni]).with_config(config).run(graph)?;
            if let Some(d) = distance.clicks() {
                distances.push(d);
            }
        }
    }
    Ok(distances)
}
