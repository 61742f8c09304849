//! `clk centrality`: degree centrality of every page.

use std::path::PathBuf;

use clap::Args;
use clicks_core::{CentralityScore, degree_centrality};
use serde::Serialize;

use crate::cmd::{Ctx, load_graph};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `clk centrality`.
#[derive(Args, Debug)]
pub struct CentralityArgs {
    /// Edge-list file.
    pub graph: PathBuf,

    /// Show only the K most central pages.
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
struct CentralityReport {
    center: String,
    scores: Vec<CentralityScore>,
}

/// Execute `clk centrality`.
pub fn run_centrality(args: &CentralityArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let graph = load_graph(&args.graph)?;
    let mut scores = degree_centrality(&graph)?;

    // Stable: equal scores keep graph order, so the first entry is the
    // same page `most_central` would pick.
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    let center = scores
        .first()
        .map(|s| s.page.clone())
        .unwrap_or_default();
    if let Some(top) = args.top {
        scores.truncate(top);
    }

    let report = CentralityReport { center, scores };

    render_mode(
        ctx.output,
        &report,
        |r, w| {
            for s in &r.scores {
                writeln!(w, "{}\t{}\t{:.4}", s.page, s.degree, s.score)?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, "Degree centrality")?;
            writeln!(w, "  {:<20} {:>8} {:>8}", "PAGE", "DEGREE", "SCORE")?;
            for s in &r.scores {
                writeln!(w, "  {:<20} {:>8} {:>8.4}", s.page, s.degree, s.score)?;
            }
            pretty_kv(w, "Center", &r.center)
        },
    )
}
