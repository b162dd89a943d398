//! Per-category similarity structure.
//!
//! Steps:
//! 1. rescale both densities to `[0, 1]` with bounds taken from *all* points
//! 2. group point indices by category
//! 3. for every group with at least two points, build the MST over the
//!    normalized coordinates
//!
//! Edges reference the full point sequence, so renderers draw them with the
//! original (un-normalized) coordinates.

pub mod group;
pub mod mst;
pub mod normalize;

pub use group::group_by_category;
pub use mst::{distance_matrix, minimum_spanning_tree};
pub use normalize::{DensityScaler, normalize_points};

use crate::domain::{CategoryEdges, ClusterEdge, NormalizedPoint};

/// Clustering output for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOutput {
    /// Index-aligned with the input points.
    pub normalized: Vec<[f64; 2]>,
    /// One entry per category present in the data; singletons have no edges.
    pub categories: Vec<CategoryEdges>,
}

impl ClusterOutput {
    pub fn edge_count(&self) -> usize {
        self.categories.iter().map(|c| c.edges.len()).sum()
    }

    /// All edges, category by category.
    pub fn edges(&self) -> impl Iterator<Item = &ClusterEdge> {
        self.categories.iter().flat_map(|c| c.edges.iter())
    }
}

/// Build per-category MST edges over globally normalized densities.
pub fn cluster_edges(points: &[NormalizedPoint]) -> ClusterOutput {
    let normalized = normalize_points(points);
    let groups = group_by_category(points);

    let categories = groups
        .into_iter()
        .map(|(category, indices)| {
            let edges = if indices.len() < 2 {
                Vec::new()
            } else {
                let coords: Vec<[f64; 2]> = indices.iter().map(|&i| normalized[i]).collect();
                minimum_spanning_tree(&distance_matrix(&coords))
                    .into_iter()
                    .map(|(a, b, distance)| ClusterEdge {
                        from: indices[a],
                        to: indices[b],
                        distance,
                    })
                    .collect()
            };
            CategoryEdges { category, edges }
        })
        .collect();

    ClusterOutput {
        normalized,
        categories,
    }
}
