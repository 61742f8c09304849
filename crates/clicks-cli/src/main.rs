#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clicks_core::ClickError;
use clicks_core::config::load_config;
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "clk: click-distance analysis over linked pages",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (default: pretty on a terminal, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (same as `--format json`).
    #[arg(long, global = true)]
    json: bool,

    /// Read configuration from this file instead of `./clicks.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "List links discovered within N clicks",
        long_about = "Enumerate, breadth-first, every link through which a page is first discovered within N clicks of the start page.",
        after_help = "EXAMPLES:\n    # Links within two clicks of page 42\n    clk reach links.txt 42 --depth 2"
    )]
    Reach(cmd::reach::ReachArgs),

    #[command(
        about = "Minimum clicks from a page to a set of pages",
        after_help = "EXAMPLES:\n    # Clicks from page 1 to page 5\n    clk distance links.txt 1 5\n\n    # Clicks needed to cover several pages\n    clk distance links.txt 1 3 5 --json"
    )]
    Distance(cmd::distance::DistanceArgs),

    #[command(
        about = "Degree centrality of every page",
        after_help = "EXAMPLES:\n    # Ten most central pages\n    clk centrality links.txt --top 10"
    )]
    Centrality(cmd::centrality::CentralityArgs),

    #[command(
        name = "category-clicks",
        about = "Clicks from a category's most central page to some of its pages",
        long_about = "Search only inside the category: start at its most degree-central page and report how many clicks are needed to reach every given page.",
        after_help = "EXAMPLES:\n    clk category-clicks links.txt categories.csv \"English cricketers\" 12 98 310"
    )]
    CategoryClicks(cmd::category::CategoryClicksArgs),

    #[command(
        about = "Rank categories by median click distance from a reference",
        after_help = "EXAMPLES:\n    clk rank links.txt categories.csv \"American films\"\n\n    clk rank links.txt categories.csv \"American films\" --json"
    )]
    Rank(cmd::rank::RankArgs),

    #[command(about = "Summarize a link graph")]
    Stats(cmd::stats::StatsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CLICKS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "clk=debug,clicks_core=debug,info"
        } else {
            "clk=info,clicks_core=info,warn"
        })
    });

    let format = env::var("CLICKS_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Map a failure to the structured error printed on stderr.
fn describe_error(err: &anyhow::Error) -> CliError {
    let message = format!("{err:#}");
    match err.downcast_ref::<ClickError>() {
        Some(ClickError::UnknownNode(_)) => CliError::with_details(
            message,
            "check the page id against the edge list",
            "unknown_page",
        ),
        Some(ClickError::UnknownCategory(_)) => CliError::with_details(
            message,
            "category labels are case-sensitive; check the dataset file",
            "unknown_category",
        ),
        Some(ClickError::DegenerateCentrality { .. }) => CliError::with_details(
            message,
            "the category needs at least two pages in the graph",
            "degenerate_centrality",
        ),
        Some(ClickError::DepthLimitExceeded { .. }) => CliError::with_details(
            message,
            "raise or remove solver.max_depth in clicks.toml",
            "depth_limit",
        ),
        Some(ClickError::Parse { .. }) => {
            CliError::with_details(message, "fix the reported line and retry", "parse_error")
        }
        Some(ClickError::Io(_)) | None => {
            CliError::with_details(message, "check the file paths and retry", "io_error")
        }
        Some(ClickError::InvalidInput(_)) => {
            CliError::with_details(message, "check the command arguments", "invalid_input")
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let cwd = env::current_dir().context("resolve working directory")?;
    let loaded = load_config(cli.config.as_deref(), &cwd);
    let early_mode = resolve_output_mode(cli.format, cli.json, None);
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            render_error(early_mode, &describe_error(&anyhow::Error::new(err)))?;
            std::process::exit(2);
        }
    };

    let output = resolve_output_mode(cli.format, cli.json, config.output.format.as_deref());
    debug!(?output, solver = ?config.solver, "resolved settings");

    let ctx = cmd::Ctx { output, config };

    let result = match cli.command {
        Commands::Reach(args) => cmd::reach::run_reach(&args, &ctx),
        Commands::Distance(args) => cmd::distance::run_distance(&args, &ctx),
        Commands::Centrality(args) => cmd::centrality::run_centrality(&args, &ctx),
        Commands::CategoryClicks(args) => cmd::category::run_category_clicks(&args, &ctx),
        Commands::Rank(args) => cmd::rank::run_rank(&args, &ctx),
        Commands::Stats(args) => cmd::stats::run_stats(&args, &ctx),
    };

    if let Err(err) = result {
        render_error(output, &describe_error(&err))?;
        std::process::exit(1);
    }

    Ok(())
}
