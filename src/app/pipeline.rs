//! Shared pipeline logic used by both chart entry points.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! raw rows -> extraction -> metrics -> (optionally) clustering
//!
//! The plain and clustered front-ends then only differ in presentation.

use tracing::{debug, info, warn};

use crate::cluster::{ClusterOutput, cluster_edges};
use crate::domain::{CategoryTable, NormalizedPoint, RawRecord};
use crate::error::SkipReason;
use crate::extract::extract_record;
use crate::metrics::derive_point;

/// A row that was excluded, with its 0-based position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedRow {
    pub index: usize,
    pub reason: SkipReason,
}

/// Whether any point survived extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetStatus {
    Populated,
    /// No valid points: nothing to normalize, cluster or plot.
    Empty,
}

/// Result of folding extraction + metrics over the input rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Valid points in input order.
    pub points: Vec<NormalizedPoint>,
    pub skipped: Vec<SkippedRow>,
    pub rows_read: usize,
}

impl PipelineOutput {
    pub fn status(&self) -> DatasetStatus {
        if self.points.is_empty() {
            DatasetStatus::Empty
        } else {
            DatasetStatus::Populated
        }
    }

    pub fn rows_used(&self) -> usize {
        self.points.len()
    }
}

/// Full output of the clustered entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteredOutput {
    pub pipeline: PipelineOutput,
    pub clusters: ClusterOutput,
}

/// Extract and derive one row.
pub fn process_row(raw: &RawRecord, table: &CategoryTable) -> Result<NormalizedPoint, SkipReason> {
    let record = extract_record(raw, table)?;
    derive_point(&record)
}

/// Fold every row into points and skip reasons. Never fails: bad rows are recorded.
pub fn run_pipeline(records: &[RawRecord], table: &CategoryTable) -> PipelineOutput {
    let mut points = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, raw) in records.iter().enumerate() {
        match process_row(raw, table) {
            Ok(point) => points.push(point),
            Err(reason) => {
                debug!(row = index, %reason, "skipping row");
                skipped.push(SkippedRow { index, reason });
            }
        }
    }

    let output = PipelineOutput {
        points,
        skipped,
        rows_read: records.len(),
    };

    match output.status() {
        DatasetStatus::Populated => info!(
            rows_read = output.rows_read,
            rows_used = output.rows_used(),
            rows_skipped = output.skipped.len(),
            "processed rows"
        ),
        DatasetStatus::Empty => warn!(rows_read = output.rows_read, "no valid data points"),
    }

    output
}

/// Run the pipeline and cluster the resulting points.
pub fn run_clustered(records: &[RawRecord], table: &CategoryTable) -> ClusteredOutput {
    let pipeline = run_pipeline(records, table);
    let clusters = cluster_edges(&pipeline.points);
    debug!(
        categories = clusters.categories.len(),
        edges = clusters.edge_count(),
        "built category spanning trees"
    );
    ClusteredOutput { pipeline, clusters }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good(name: &str, size: &str) -> RawRecord {
        RawRecord::from_texts([
            name, "$50", "In Stock", "", "5000mAh", "", "100C", "90", size, "200g", "8 AWG",
        ])
    }

    #[test]
    fn bad_rows_do_not_affect_neighbours() {
        let table = CategoryTable::default();
        let rows = vec![
            good("HCL-EC A", "10 x 10 x 10"),
            RawRecord::from_texts(["too", "short"]),
            good("HCL-EC B", "10 x 10"),
            good("HCL-EC C", "0 x 10 x 10"),
            good("HCL-EC D", "20 x 10 x 10"),
        ];

        let out = run_pipeline(&rows, &table);
        assert_eq!(out.rows_read, 5);
        assert_eq!(out.rows_used(), 2);
        assert_eq!(out.status(), DatasetStatus::Populated);

        let skipped: Vec<_> = out.skipped.iter().map(|s| (s.index, s.reason)).collect();
        assert_eq!(
            skipped,
            vec![
                (1, SkipReason::TooFewFields { found: 2 }),
                (2, SkipReason::MissingDimensions { found: 2 }),
                (3, SkipReason::DegenerateMetric { metric: "volume" }),
            ]
        );
    }

    #[test]
    fn all_bad_rows_is_empty_state() {
        let table = CategoryTable::default();
        let out = run_pipeline(&[RawRecord::default()], &table);
        assert_eq!(out.status(), DatasetStatus::Empty);
        assert_eq!(out.skipped.len(), 1);
    }

    #[test]
    fn clustered_run_links_same_category() {
        let table = CategoryTable::default();
        let rows = vec![
            good("HCL-EC A", "10 x 10 x 10"),
            good("HCL-RS B", "12 x 10 x 10"),
            good("HCL-EC C", "20 x 10 x 10"),
        ];
        let out = run_clustered(&rows, &table);
        assert_eq!(out.clusters.edge_count(), 1);
        let edge = out.clusters.edges().next().unwrap();
        assert_eq!(edge.key(), (0, 2));
    }
}
