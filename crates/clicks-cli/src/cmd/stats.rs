//! `clk stats`: size, connectivity and fingerprint of a link graph.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cmd::{Ctx, load_graph};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `clk stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Edge-list file.
    pub graph: PathBuf,
}

/// Report payload for `clk stats`.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    pub largest_component: usize,
    pub content_hash: String,
}

/// Execute `clk stats`.
pub fn run_stats(args: &StatsArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let graph = load_graph(&args.graph)?;
    let components = graph.components();

    let summary = GraphSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        components: components.len(),
        largest_component: components.iter().map(Vec::len).max().unwrap_or(0),
        content_hash: graph.content_hash().to_string(),
    };

    render_mode(
        ctx.output,
        &summary,
        |s, w| {
            writeln!(
                w,
                "nodes={} edges={} components={} largest={} hash={}",
                s.nodes, s.edges, s.components, s.largest_component, s.content_hash
            )
        },
        |s, w| {
            pretty_section(w, "Graph")?;
            pretty_kv(w, "Pages", s.nodes.to_string())?;
            pretty_kv(w, "Links", s.edges.to_string())?;
            pretty_kv(w, "Components", s.components.to_string())?;
            pretty_kv(w, "Largest", s.largest_component.to_string())?;
            pretty_kv(w, "Hash", &s.content_hash)
        },
    )
}
