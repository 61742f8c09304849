//! `clk category-clicks`: clicks needed inside one category.

use std::path::PathBuf;

use clap::Args;
use clicks_core::{Distance, category_clicks};
use serde::Serialize;

use crate::cmd::{Ctx, load_dataset, load_graph};
use crate::output::{pretty_kv, render_mode};

/// Arguments for `clk category-clicks`.
#[derive(Args, Debug)]
pub struct CategoryClicksArgs {
    /// Edge-list file.
    pub graph: PathBuf,

    /// Page/category file.
    pub dataset: PathBuf,

    /// Category to search in.
    pub category: String,

    /// Pages of the category that must all be reached.
    #[arg(required = true)]
    pub pages: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CategoryReport<'a> {
    category: &'a str,
    pages: &'a [String],
    distance: Distance,
}

/// Execute `clk category-clicks`.
pub fn run_category_clicks(args: &CategoryClicksArgs, ctx: &Ctx) -> anyhow::Result<()> {
    let graph = load_graph(&args.graph)?;
    let dataset = load_dataset(&args.dataset)?;

    let distance = category_clicks(
        &dataset,
        &graph,
        &args.category,
        args.pages.iter().map(String::as_str),
        ctx.config.solver,
    )?;

    let report = CategoryReport {
        category: &args.category,
        pages: &args.pages,
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
            pretty_kv(w, "Category", r.category)?;
            pretty_kv(w, "Pages", r.pages.join(", "))?;
            pretty_kv(w, "Distance", r.distance.to_string())
        },
    )
}
