//! Reporting utilities: dataset stats, skip breakdowns and formatted terminal output.

pub mod format;

pub use format::*;

use std::collections::BTreeMap;

use crate::app::pipeline::SkippedRow;
use crate::domain::NormalizedPoint;

/// Summary stats about the points that survived extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStats {
    pub n_points: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Density ranges over all points (`None` when there are no finite points).
pub fn compute_stats(points: &[NormalizedPoint]) -> Option<DatasetStats> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for p in points {
        x_min = x_min.min(p.volumetric_density);
        x_max = x_max.max(p.volumetric_density);
        y_min = y_min.min(p.gravimetric_density);
        y_max = y_max.max(p.gravimetric_density);
    }

    if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
        return None;
    }

    Some(DatasetStats {
        n_points: points.len(),
        x_min,
        x_max,
        y_min,
        y_max,
    })
}

/// Count skipped rows per reason kind (sorted by kind for stable output).
pub fn skip_counts(skipped: &[SkippedRow]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for s in skipped {
        *counts.entry(s.reason.kind()).or_insert(0) += 1;
    }
    counts
}
