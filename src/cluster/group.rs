//! Category grouping.

use std::collections::BTreeMap;

use crate::domain::{Category, NormalizedPoint};

/// Partition point indices by category.
///
/// Each group keeps the original relative order. Groups iterate in `Category`
/// order; categories with no points are absent.
pub fn group_by_category(points: &[NormalizedPoint]) -> BTreeMap<Category, Vec<usize>> {
    let mut groups: BTreeMap<Category, Vec<usize>> = BTreeMap::new();
    for (idx, p) in points.iter().enumerate() {
        groups.entry(p.category).or_default().push(idx);
    }
    groups
}
