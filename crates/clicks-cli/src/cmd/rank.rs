//! `clk rank`: categories ordered by median click distance.

use std::path::PathBuf;

use clap::Args;
use clicks_core::{CategoryDistance, rank_categories_with};
use serde::Serialize;

use crate::cmd::{Ctx, load_dataset, load_graph};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `clk rank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    /// Edge-list file.
    pub graph: PathBuf,

    /// Page/category file.
    pub dataset: PathBuf,

    /// Reference category.
    pub reference: String,
}

#[derive(Debug, Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    key: String,
    #[serde(flatten)]
    distance: &'a CategoryDistance,
}

#[derive(Debug, Serialize)]
struct RankReport<'a> {
    reference: &'a str,
    graph_hash: &'a str,
    ranking: Vec<RankedEntry<'a>>,
}

/// Execute `clk rank`.
pub fn run_rank(args: &RankArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let graph = load_graph(&args.graph)?;
    let dataset = load_dataset(&args.dataset)?;

    let ranked = rank_categories_with(&dataset, &graph, &args.reference, ctx.config.solver)?;

    let report = RankReport {
        reference: &args.reference,
        graph_hash: graph.content_hash(),
        ranking: ranked
            .iter()
            .enumerate()
            .map(|(i, d)| RankedEntry {
                rank: i + 1,
                key: d.key(),
                distance: d,
            })
            .collect(),
    };

    render_mode(
        ctx.output,
        &report,
        |r, w| {
            for e in &r.ranking {
                writeln!(w, "{}\t{}\t{}", e.key, e.distance.median, e.distance.pairs)?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("Categories closest to {}", r.reference))?;
            if r.ranking.is_empty() {
                writeln!(w, "  (no category shares a connected page pair)")?;
            }
            for e in &r.ranking {
                writeln!(
                    w,
                    "  {:>3}. {:<32} median {:>5.1}  ({} pairs)",
                    e.rank, e.distance.category, e.distance.median, e.distance.pairs
                )?;
            }
            pretty_kv(w, "Graph", r.graph_hash)
        },
    )
}
