#![forbid(unsafe_code)]
//! clicks-core library.
//!
//! Click-distance metrics over an undirected graph of linked pages that are
//! grouped into categories.
//!
//! ## Pipeline
//!
//! ```text
//! edge list ──► graph::PageGraph        dataset ──► dataset::Dataset
//!                    │                                   │
//!                    ▼                                   │
//!          frontier::Frontier (bounded BFS, lazy)        │
//!                    ▼                                   │
//!          solver::min_clicks (iterative deepening)      │
//!                    ▼                                   ▼
//!          aggregate::rank_categories (median per category pair)
//! ```
//!
//! # Conventions
//!
//! - **Errors**: Library functions return [`error::Result`] with a typed
//!   [`error::ClickError`]. An unreachable target set is *not* an error; it is
//!   reported as [`solver::Distance::Disconnected`].
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod aggregate;
pub mod centrality;
pub mod config;
pub mod dataset;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod solver;

pub use aggregate::{CategoryDistance, median, rank_categories, rank_categories_with};
pub use centrality::{CentralityScore, degree_centrality, most_central};
pub use config::{ClicksConfig, OutputConfig, SolverConfig};
pub use dataset::Dataset;
pub use error::{ClickError, Result};
pub use frontier::{Frontier, reachable_pages};
pub use graph::PageGraph;
pub use solver::{ClickQuery, Distance, Start, category_clicks, min_clicks, min_clicks_from_center};
