//! Command handlers for the `clk` binary.
//!
//! Each subcommand lives in its own module with a clap `Args` struct and a
//! `run_*` function taking the parsed args and the shared [`Ctx`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clicks_core::{ClicksConfig, Dataset, PageGraph};
use tracing::info;

use crate::output::OutputMode;

pub mod category;
pub mod centrality;
pub mod distance;
pub mod rank;
pub mod reach;
pub mod stats;

/// Settings shared by every command.
#[derive(Debug)]
pub struct Ctx {
    pub output: OutputMode,
    pub config: ClicksConfig,
}

/// Load an edge-list file into a [`PageGraph`].
pub fn load_graph(path: &Path) -> Result<PageGraph> {
    let file =
        File::open(path).with_context(|| format!("Failed to open graph {}", path.display()))?;
    let graph = PageGraph::from_edge_list(BufReader::new(file))
        .with_context(|| format!("Failed to parse graph {}", path.display()))?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Load a page/category file into a [`Dataset`].
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let file =
        File::open(path).with_context(|| format!("Failed to open dataset {}", path.display()))?;
    let dataset = Dataset::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
    info!(
        path = %path.display(),
        pages = dataset.page_count(),
        categories = dataset.category_count(),
        "dataset loaded"
    );
    Ok(dataset)
}
