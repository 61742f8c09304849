//! `clk reach`: links discovered within N clicks of a page.

use std::path::PathBuf;

use clap::Args;
use clicks_core::Frontier;
use serde::Serialize;

use crate::cmd::{Ctx, load_graph};
use crate::output::{pretty_kv, pretty_section, render_mode};

/// Arguments for `clk reach`.
#[derive(Args, Debug)]
pub struct ReachArgs {
    /// Edge-list file.
    pub graph: PathBuf,

    /// Start page.
    pub start: String,

    /// Maximum number of clicks.
    #[arg(short, long, default_value_t = 1)]
    pub depth: usize,
}

#[derive(Debug, Serialize)]
struct Link {
    from: String,
    to: String,
}

#[derive(Debug, Serialize)]
struct ReachReport {
    start: String,
    depth: usize,
    reached: usize,
    links: Vec<Link>,
}

/// Execute `clk reach`.
pub fn run_reach(args: &ReachArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let graph = load_graph(&args.graph)?;
    let links: Vec<Link> = Frontier::new(&graph, &args.start, args.depth)?
        .map(|(from, to)| Link {
            from: from.to_string(),
            to: to.to_string(),
        })
        .collect();

    let report = ReachReport {
        start: args.start.clone(),
        depth: args.depth,
        reached: links.len() + 1,
        links,
    };

    render_mode(
        ctx.output,
        &report,
        |r, w| {
            for link in &r.links {
                writeln!(w, "{}\t{}", link.from, link.to)?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("Reach from {} ({} clicks)", r.start, r.depth))?;
            for link in &r.links {
                writeln!(w, "  {} -> {}", link.from, link.to)?;
            }
            pretty_kv(w, "Reached", format!("{} pages", r.reached))
        },
    )
}
