//! Command-line parsing for the battery density charts.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the extraction/clustering code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::InputFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bchart", version, about = "Battery capacity density charts")]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plain density scatter.
    Plot(ChartArgs),
    /// Density scatter with per-category minimum spanning trees.
    Cluster(ClusterArgs),
    /// Print the summary, point table and skipped rows only.
    Report(InputArgs),
}

/// Input selection shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Input file: JSON array of rows, or headerless CSV.
    #[arg(short, long, env = "BCHART_INPUT", default_value = "extracted_manual_scaled.json")]
    pub input: PathBuf,

    /// Input layout.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,

    /// JSON file overriding the category patterns and display names.
    #[arg(long, value_name = "JSON")]
    pub categories: Option<PathBuf>,
}

/// Options for the chart subcommands.
#[derive(Debug, Args, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub ascii: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_ascii: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 30)]
    pub height: usize,

    /// Write the chart as SVG.
    #[arg(long, value_name = "SVG")]
    pub svg: Option<PathBuf>,

    /// Export points (densities, labels, styling) to CSV.
    #[arg(long = "export-points", value_name = "CSV")]
    pub export_points: Option<PathBuf>,
}

/// Options for `bchart cluster`.
#[derive(Debug, Args, Clone)]
pub struct ClusterArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Export MST edges to JSON.
    #[arg(long = "export-edges", value_name = "JSON")]
    pub export_edges: Option<PathBuf>,
}
