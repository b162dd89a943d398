//! Dense distance matrix + Prim's minimum spanning tree.
//!
//! Groups are small, so the O(n²) dense variant is the simplest correct choice.
//!
//! Tie-breaking (deterministic):
//! - the tree grows from local index 0
//! - the next vertex is the one with the strictly smallest key; equal keys go to
//!   the lowest index
//! - a vertex's parent only changes on a strictly smaller distance, so the
//!   earliest-attached candidate wins ties
//!
//! Zero distances (coincident points) are ordinary edges.

use nalgebra::DMatrix;

/// Pairwise Euclidean distances between 2-D coordinates.
pub fn distance_matrix(coords: &[[f64; 2]]) -> DMatrix<f64> {
    let n = coords.len();
    DMatrix::from_fn(n, n, |i, j| {
        let dx = coords[i][0] - coords[j][0];
        let dy = coords[i][1] - coords[j][1];
        (dx * dx + dy * dy).sqrt()
    })
}

/// MST over the complete graph described by a symmetric distance matrix.
///
/// Returns `(parent, child, weight)` in the order vertices join the tree.
/// Always `n - 1` edges for `n >= 1`; none for `n < 2`.
pub fn minimum_spanning_tree(dist: &DMatrix<f64>) -> Vec<(usize, usize, f64)> {
    let n = dist.nrows();
    if n < 2 {
        return Vec::new();
    }

    let mut in_tree = vec![false; n];
    let mut key = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut edges = Vec::with_capacity(n - 1);
    key[0] = 0.0;

    for _ in 0..n {
        let mut next: Option<usize> = None;
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            match next {
                Some(u) if key[v] >= key[u] => {}
                _ => next = Some(v),
            }
        }
        let Some(u) = next else { break };

        in_tree[u] = true;
        if let Some(p) = parent[u] {
            edges.push((p, u, key[u]));
        }

        for v in 0..n {
            if !in_tree[v] && dist[(u, v)] < key[v] {
                key[v] = dist[(u, v)];
                parent[v] = Some(u);
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_matrix_is_symmetric_with_zero_diagonal() {
        let d = distance_matrix(&[[0.0, 0.0], [3.0, 4.0], [0.0, 1.0]]);
        assert_eq!(d[(0, 1)], 5.0);
        assert_eq!(d[(1, 0)], 5.0);
        assert_eq!(d[(2, 2)], 0.0);
    }

    #[test]
    fn line_of_points_chains() {
        let d = distance_matrix(&[[0.0, 0.0], [2.0, 0.0], [1.0, 0.0]]);
        let edges = minimum_spanning_tree(&d);
        assert_eq!(edges, vec![(0, 2, 1.0), (2, 1, 1.0)]);
    }

    #[test]
    fn coincident_points_still_span() {
        let d = distance_matrix(&[[0.5, 0.5]; 4]);
        let edges = minimum_spanning_tree(&d);
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|&(_, _, w)| w == 0.0));
        // Equal keys resolve to the lowest index, all attached to the root.
        assert_eq!(edges, vec![(0, 1, 0.0), (0, 2, 0.0), (0, 3, 0.0)]);
    }

    #[test]
    fn trivial_sizes_have_no_edges() {
        assert!(minimum_spanning_tree(&distance_matrix(&[])).is_empty());
        assert!(minimum_spanning_tree(&distance_matrix(&[[1.0, 1.0]])).is_empty());
    }
}
