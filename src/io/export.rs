//! Export points (CSV) and cluster edges (JSON).
//!
//! Both are meant to be easy to consume in spreadsheets, notebooks or an
//! external chart renderer.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cluster::ClusterOutput;
use crate::domain::{Category, CategoryTable, NormalizedPoint};
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct PointRow<'a> {
    index: usize,
    category: Category,
    label: &'a str,
    volumetric_density: f64,
    gravimetric_density: f64,
    x_norm: Option<f64>,
    y_norm: Option<f64>,
    in_stock: bool,
    wire_awg: u32,
}

/// Write one CSV row per point. `normalized` (if given) must be index-aligned.
pub fn write_points_csv(
    path: &Path,
    points: &[NormalizedPoint],
    normalized: Option<&[[f64; 2]]>,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create points CSV '{}': {e}", path.display())))?;
    let mut writer = csv::Writer::from_writer(file);

    for (index, p) in points.iter().enumerate() {
        let norm = normalized.and_then(|n| n.get(index));
        writer
            .serialize(PointRow {
                index,
                category: p.category,
                label: &p.label,
                volumetric_density: p.volumetric_density,
                gravimetric_density: p.gravimetric_density,
                x_norm: norm.map(|n| n[0]),
                y_norm: norm.map(|n| n[1]),
                in_stock: p.in_stock,
                wire_awg: p.wire_awg,
            })
            .map_err(|e| AppError::io(format!("Failed to write points CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to flush points CSV: {e}")))?;
    Ok(())
}

/// Edge file schema.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub point_count: usize,
    pub categories: Vec<EdgeGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeGroup {
    pub category: Category,
    pub display_name: Option<String>,
    pub edges: Vec<EdgeRecord>,
}

/// One edge with both endpoints resolved to original coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeRecord {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    pub from_label: String,
    pub to_label: String,
    pub from_xy: [f64; 2],
    pub to_xy: [f64; 2],
}

/// Assemble the edge file content.
pub fn build_edge_file(
    points: &[NormalizedPoint],
    clusters: &ClusterOutput,
    table: &CategoryTable,
    generated_at: DateTime<Utc>,
) -> EdgeFile {
    let categories = clusters
        .categories
        .iter()
        .map(|group| EdgeGroup {
            category: group.category,
            display_name: table.display_name(group.category).map(str::to_string),
            edges: group
                .edges
                .iter()
                .filter_map(|e| {
                    let a = points.get(e.from)?;
                    let b = points.get(e.to)?;
                    Some(EdgeRecord {
                        from: e.from,
                        to: e.to,
                        distance: e.distance,
                        from_label: a.label.clone(),
                        to_label: b.label.clone(),
                        from_xy: [a.volumetric_density, a.gravimetric_density],
                        to_xy: [b.volumetric_density, b.gravimetric_density],
                    })
                })
                .collect(),
        })
        .collect();

    EdgeFile {
        tool: "bchart".to_string(),
        generated_at,
        point_count: points.len(),
        categories,
    }
}

/// Write the edge file as pretty JSON.
pub fn write_edges_json(
    path: &Path,
    points: &[NormalizedPoint],
    clusters: &ClusterOutput,
    table: &CategoryTable,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create edges JSON '{}': {e}", path.display())))?;

    let content = build_edge_file(points, clusters, table, Utc::now());
    serde_json::to_writer_pretty(file, &content)
        .map_err(|e| AppError::io(format!("Failed to write edges JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster_edges;

    fn point(category: Category, x: f64, label: &str) -> NormalizedPoint {
        NormalizedPoint {
            volumetric_density: x,
            gravimetric_density: x * 10.0,
            label: label.to_string(),
            category,
            in_stock: true,
            wire_awg: 10,
        }
    }

    #[test]
    fn edge_file_resolves_original_coordinates() {
        let points = vec![point(Category::Racing, 1.0, "a"), point(Category::Racing, 3.0, "b")];
        let clusters = cluster_edges(&points);
        let file = build_edge_file(&points, &clusters, &CategoryTable::default(), Utc::now());

        assert_eq!(file.point_count, 2);
        let group = &file.categories[0];
        assert_eq!(group.display_name.as_deref(), Some("Racing series"));
        let edge = &group.edges[0];
        assert_eq!((edge.from_label.as_str(), edge.to_label.as_str()), ("a", "b"));
        assert_eq!(edge.to_xy, [3.0, 30.0]);
        assert!((edge.distance - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn points_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.csv");
        let points = vec![point(Category::Economy, 1.0, "E 52γ 120C $89 85φ")];

        write_points_csv(&path, &points, Some(&[[0.0, 0.0]])).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("index,category,label,volumetric_density,gravimetric_density,x_norm,y_norm,in_stock,wire_awg")
        );
        assert_eq!(lines.next(), Some("0,E,E 52γ 120C $89 85φ,1.0,10.0,0.0,0.0,true,10"));
    }
}
