//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the extraction/clustering code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::{PipelineOutput, SkippedRow};
use crate::cluster::ClusterOutput;
use crate::domain::{AnalysisConfig, Category, CategoryTable, ChartKind, NormalizedPoint, WireGauge};
use crate::metrics::{CAPACITY_GLYPH, POWER_FACTOR_GLYPH};
use crate::report::{compute_stats, skip_counts};

/// Chart title shared by every renderer.
pub const CHART_TITLE: &str = "SMC Battery Comparison";
pub const X_AXIS_LABEL: &str = "Volumetric Density (mAh / mm³)";
pub const Y_AXIS_LABEL: &str = "Gravimetric Density (mAh / g)";

/// Rows listed individually in the skip section before summarizing.
const MAX_SKIP_ROWS: usize = 20;

/// Format the run summary (input, row counts, density ranges, edge count).
///
/// `kind` is `None` for the report-only command.
pub fn format_run_summary(
    output: &PipelineOutput,
    config: &AnalysisConfig,
    kind: Option<ChartKind>,
    clusters: Option<&ClusterOutput>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== bchart - {CHART_TITLE} ===\n"));
    out.push_str(&format!("Input: {}\n", config.input_path.display()));
    out.push_str(&format!(
        "Mode: {}\n",
        match kind {
            Some(ChartKind::Plain) => "plain chart",
            Some(ChartKind::Clustered) => "clustered chart",
            None => "report",
        }
    ));
    out.push_str(&format!(
        "Rows: read={} | used={} | skipped={}\n",
        output.rows_read,
        output.rows_used(),
        output.skipped.len()
    ));

    if let Some(stats) = compute_stats(&output.points) {
        out.push_str(&format!(
            "Points: n={} | mAh/mm³=[{:.5}, {:.5}] | mAh/g=[{:.2}, {:.2}]\n",
            stats.n_points, stats.x_min, stats.x_max, stats.y_min, stats.y_max
        ));
    }

    if let Some(clusters) = clusters {
        out.push_str(&format!(
            "Clusters: categories={} | edges={}\n",
            clusters.categories.len(),
            clusters.edge_count()
        ));
    }

    out
}

/// Format skip counts per reason, then the first skipped rows.
pub fn format_skips(skipped: &[SkippedRow]) -> String {
    let mut out = String::new();
    if skipped.is_empty() {
        out.push_str("Skipped rows: none\n");
        return out;
    }

    out.push_str("Skipped rows by reason:\n");
    for (kind, count) in skip_counts(skipped) {
        out.push_str(&format!("  {kind:<20} {count:>6}\n"));
    }

    out.push_str("Skipped rows:\n");
    for s in skipped.iter().take(MAX_SKIP_ROWS) {
        out.push_str(&format!("  row {:>5}: {}\n", s.index, s.reason));
    }
    if skipped.len() > MAX_SKIP_ROWS {
        out.push_str(&format!("  ... and {} more\n", skipped.len() - MAX_SKIP_ROWS));
    }

    out
}

/// Format the point table.
pub fn format_points(points: &[NormalizedPoint]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>5} {:<24} {:>12} {:>10} {:<5} {:>4}\n",
            "#", "label", "mAh/mm3", "mAh/g", "stock", "awg"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!("{:-<5} {:-<24} {:-<12} {:-<10} {:-<5} {:-<4}\n", "", "", "", "", "", "").trim_end(),
    );
    out.push('\n');

    for (idx, p) in points.iter().enumerate() {
        out.push_str(
            format!(
                "{:>5} {:<24} {:>12.6} {:>10.3} {:<5} {:>4}\n",
                idx,
                truncate(&p.label, 24),
                p.volumetric_density,
                p.gravimetric_density,
                if p.in_stock { "yes" } else { "no" },
                p.wire_awg,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format MST edges grouped by category.
pub fn format_edges(points: &[NormalizedPoint], clusters: &ClusterOutput, table: &CategoryTable) -> String {
    let mut out = String::new();
    for group in &clusters.categories {
        let name = table.display_name(group.category).unwrap_or("Uncategorized");
        out.push_str(&format!("{} ({name}): {} edge(s)\n", group.category, group.edges.len()));
        for e in &group.edges {
            let a = points.get(e.from).map(|p| p.label.as_str()).unwrap_or("");
            let b = points.get(e.to).map(|p| p.label.as_str()).unwrap_or("");
            out.push_str(&format!("  {a} <-> {b}  d={:.4}\n", e.distance));
        }
    }
    out
}

/// Format the chart legend (wire sizes, availability, definitions, categories).
pub fn format_legend(table: &CategoryTable) -> String {
    legend_lines(table).join("\n") + "\n"
}

/// Legend as individual lines, shared by the text and SVG renderers.
pub fn legend_lines(table: &CategoryTable) -> Vec<String> {
    let mut lines = vec!["Wire Size".to_string()];
    for (gauge, awg) in [(WireGauge::Awg8, 8), (WireGauge::Awg10, 10), (WireGauge::Awg12, 12)] {
        lines.push(format!("  {} {awg} AWG", gauge.marker()));
    }
    lines.push("Availability".to_string());
    lines.push("  In Stock (green)".to_string());
    lines.push("  Out of Stock (red)".to_string());
    lines.push("Definitions".to_string());
    lines.push(format!("  {CAPACITY_GLYPH}: Capacity / 100"));
    lines.push(format!("  {POWER_FACTOR_GLYPH}: Power Factor"));
    lines.push("Categories".to_string());
    for category in Category::ALL {
        if let Some(name) = table.display_name(category) {
            lines.push(format!("  {category}: {name}"));
        }
    }
    lines
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
