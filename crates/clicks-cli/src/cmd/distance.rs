//! `clk distance`: minimum clicks from one page to a set of pages.

use std::path::PathBuf;

use clap::Args;
use clicks_core::{ClickQuery, Distance};
use serde::Serialize;

use crate::cmd::{Ctx, load_graph};
use crate::output::{pretty_kv, render_mode};

/// Arguments for `clk distance`.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// Edge-list file.
    pub graph: PathBuf,

    /// Start page.
    pub start: String,

    /// Pages that must all be reached.
    #[arg(required = true)]
    pub targets: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DistanceReport<'a> {
    start: &'a str,
    targets: &'a [String],
    distance: Distance,
}

/// Execute `clk distance`.
pub fn run_distance(args: &DistanceArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let graph = load_graph(&args.graph)?;
    let distance = ClickQuery::from_page(&args.start, args.targets.iter().map(String::as_str))
        .with_config(ctx.config.solver)
        .run(&graph)?;

    let report = DistanceReport {
        start: &args.start,
        targets: &args.targets,
        distance,
    };

    render_mode(
        ctx.output,
        &report,
        |r, w| match r.distance.clicks() {
            Some(d) => writeln!(w, "{d}"),
            None => writeln!(w, "not connected"),
        },
        |r, w| {
            pretty_kv(w, "From", r.start)?;
            pretty_kv(w, "To", r.targets.join(", "))?;
            pretty_kv(w, "Distance", r.distance.to_string())
        },
    )
}
