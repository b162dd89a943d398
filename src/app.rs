//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads raw rows
//! - runs extraction, metrics and (for `cluster`) the MST step
//! - prints reports/plots
//! - writes optional SVG and data exports

use clap::Parser;
use tracing::info;

use crate::cli::{ChartArgs, ClusterArgs, Command, InputArgs};
use crate::cluster::ClusterOutput;
use crate::domain::{AnalysisConfig, CategoryTable, ChartKind};
use crate::error::AppError;
use crate::io::{load_records, read_category_table, write_edges_json, write_points_csv};
use crate::plot::{SvgChart, render_clustered_scatter, render_scatter, write_svg};

pub mod pipeline;

use pipeline::{DatasetStatus, PipelineOutput};

/// SVG canvas size in pixels.
const SVG_SIZE: (u32, u32) = (1600, 1400);

/// Entry point for the `bchart` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = crate::cli::Cli::parse();
    crate::logging::init(cli.verbose);

    match cli.command {
        Command::Plot(args) => handle_chart(&chart_config_from_args(&args, None)?, ChartKind::Plain),
        Command::Cluster(args) => handle_chart(&cluster_config_from_args(&args)?, ChartKind::Clustered),
        Command::Report(args) => handle_report(&input_config_from_args(&args)?),
    }
}

fn handle_chart(config: &AnalysisConfig, kind: ChartKind) -> Result<(), AppError> {
    let records = load_records(&config.input_path, config.input_format)?;

    let (output, clusters) = match kind {
        ChartKind::Plain => (pipeline::run_pipeline(&records, &config.categories), None),
        ChartKind::Clustered => {
            let run = pipeline::run_clustered(&records, &config.categories);
            (run.pipeline, Some(run.clusters))
        }
    };

    println!(
        "{}",
        crate::report::format_run_summary(&output, config, Some(kind), clusters.as_ref())
    );
    println!("{}", crate::report::format_skips(&output.skipped));
    ensure_populated(&output)?;

    if config.ascii {
        let plot = match &clusters {
            Some(c) => render_clustered_scatter(&output.points, c, config.plot_width, config.plot_height),
            None => render_scatter(&output.points, config.plot_width, config.plot_height),
        };
        println!("{plot}");
    }

    if let Some(c) = &clusters {
        println!("{}", crate::report::format_edges(&output.points, c, &config.categories));
    }
    println!("{}", crate::report::format_legend(&config.categories));

    write_outputs(config, &output, clusters.as_ref())
}

fn handle_report(config: &AnalysisConfig) -> Result<(), AppError> {
    let records = load_records(&config.input_path, config.input_format)?;
    let output = pipeline::run_pipeline(&records, &config.categories);

    println!(
        "{}",
        crate::report::format_run_summary(&output, config, None, None)
    );
    println!("{}", crate::report::format_skips(&output.skipped));
    ensure_populated(&output)?;
    println!("{}", crate::report::format_points(&output.points));

    write_outputs(config, &output, None)
}

/// Optional SVG + data exports.
fn write_outputs(
    config: &AnalysisConfig,
    output: &PipelineOutput,
    clusters: Option<&ClusterOutput>,
) -> Result<(), AppError> {
    if let Some(path) = &config.svg_path {
        let chart = SvgChart {
            points: &output.points,
            clusters,
            table: &config.categories,
            size: SVG_SIZE,
        };
        write_svg(path, &chart)?;
        info!(path = %path.display(), "wrote SVG chart");
    }
    if let Some(path) = &config.export_points {
        write_points_csv(path, &output.points, clusters.map(|c| c.normalized.as_slice()))?;
        info!(path = %path.display(), "wrote points CSV");
    }
    if let (Some(path), Some(c)) = (&config.export_edges, clusters) {
        write_edges_json(path, &output.points, c, &config.categories)?;
        info!(path = %path.display(), "wrote edges JSON");
    }
    Ok(())
}

/// Surface the empty-dataset state to the process boundary.
fn ensure_populated(output: &PipelineOutput) -> Result<(), AppError> {
    match output.status() {
        DatasetStatus::Populated => Ok(()),
        DatasetStatus::Empty => Err(AppError::empty_dataset()),
    }
}

fn load_categories(args: &InputArgs) -> Result<CategoryTable, AppError> {
    match &args.categories {
        Some(path) => read_category_table(path),
        None => Ok(CategoryTable::default()),
    }
}

pub fn input_config_from_args(args: &InputArgs) -> Result<AnalysisConfig, AppError> {
    Ok(AnalysisConfig {
        input_path: args.input.clone(),
        input_format: args.format,
        categories: load_categories(args)?,
        ascii: false,
        plot_width: 0,
        plot_height: 0,
        svg_path: None,
        export_points: None,
        export_edges: None,
    })
}

pub fn chart_config_from_args(
    args: &ChartArgs,
    export_edges: Option<&std::path::Path>,
) -> Result<AnalysisConfig, AppError> {
    Ok(AnalysisConfig {
        ascii: args.ascii && !args.no_ascii,
        plot_width: args.width,
        plot_height: args.height,
        svg_path: args.svg.clone(),
        export_points: args.export_points.clone(),
        export_edges: export_edges.map(|p| p.to_path_buf()),
        ..input_config_from_args(&args.input)?
    })
}

pub fn cluster_config_from_args(args: &ClusterArgs) -> Result<AnalysisConfig, AppError> {
    chart_config_from_args(&args.chart, args.export_edges.as_deref())
}
