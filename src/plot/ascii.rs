//! ASCII/Unicode scatter plot for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - points: wire-gauge marker (`o` 8 AWG / unrecognized, `s` 10 AWG, `^` 12 AWG)
//! - cluster edges (clustered chart only): `.` lines between original coordinates

use crate::cluster::ClusterOutput;
use crate::domain::NormalizedPoint;

/// Render the plain scatter.
pub fn render_scatter(points: &[NormalizedPoint], width: usize, height: usize) -> String {
    render_plot(points, None, width, height)
}

/// Render the scatter with MST edges drawn underneath the points.
pub fn render_clustered_scatter(
    points: &[NormalizedPoint],
    clusters: &ClusterOutput,
    width: usize,
    height: usize,
) -> String {
    render_plot(points, Some(clusters), width, height)
}

fn render_plot(points: &[NormalizedPoint], clusters: Option<&ClusterOutput>, width: usize, height: usize) -> String {
    let Some(frame) = Frame::fit(points, width.max(10), height.max(5)) else {
        return "Plot: (no points)\n".to_string();
    };
    let mut grid = vec![vec![' '; frame.width]; frame.height];

    // Edges first so markers overwrite them.
    if let Some(clusters) = clusters {
        for e in clusters.edges() {
            if let (Some(a), Some(b)) = (points.get(e.from), points.get(e.to)) {
                draw_edge(&mut grid, frame.cell(a), frame.cell(b));
            }
        }
    }

    for p in points {
        let (col, row) = frame.cell(p);
        grid[row][col] = p.wire_gauge().marker();
    }

    let (x_min, x_max) = frame.x;
    let (y_min, y_max) = frame.y;
    let mut out = format!("Plot: x=[{x_min:.5}, {x_max:.5}] mAh/mm³ | y=[{y_min:.2}, {y_max:.2}] mAh/g\n");
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Density ranges mapped onto a `width` x `height` character grid.
struct Frame {
    x: (f64, f64),
    y: (f64, f64),
    width: usize,
    height: usize,
}

impl Frame {
    fn fit(points: &[NormalizedPoint], width: usize, height: usize) -> Option<Self> {
        Some(Self {
            x: density_range(points.iter().map(|p| p.volumetric_density))?,
            y: density_range(points.iter().map(|p| p.gravimetric_density))?,
            width,
            height,
        })
    }

    /// `(column, row)` of a point; row 0 is the highest gravimetric density.
    fn cell(&self, p: &NormalizedPoint) -> (usize, usize) {
        let last_col = self.width as f64 - 1.0;
        let last_row = self.height as f64 - 1.0;
        let u = unit(p.volumetric_density, self.x);
        let v = unit(p.gravimetric_density, self.y);
        ((u * last_col).round() as usize, (last_row - v * last_row).round() as usize)
    }
}

fn unit(value: f64, (lo, hi): (f64, f64)) -> f64 {
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// `[min, max]` of the finite densities with 5% padding. A single distinct
/// value is widened by 10% of its magnitude instead.
fn density_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !(min.is_finite() && max.is_finite()) {
        return None;
    }
    if max <= min {
        let half = (min.abs() * 0.1).max(1e-9);
        return Some((min - half, max + half));
    }
    let pad = ((max - min) * 0.05).max(1e-12);
    Some((min - pad, max + pad))
}

/// Trace an MST edge between two cells with `.`, leaving occupied cells alone.
fn draw_edge(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (mut col, mut row) = (from.0 as isize, from.1 as isize);
    let (end_col, end_row) = (to.0 as isize, to.1 as isize);

    let dx = (end_col - col).abs();
    let dy = -(end_row - row).abs();
    let step_col = if col < end_col { 1 } else { -1 };
    let step_row = if row < end_row { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) {
            if let Some(cell) = grid.get_mut(r).and_then(|line| line.get_mut(c)) {
                if *cell == ' ' {
                    *cell = '.';
                }
            }
        }

        if col == end_col && row == end_row {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            col += step_col;
        }
        if e2 <= dx {
            err += dx;
            row += step_row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster_edges;
    use crate::domain::Category;

    fn point(x: f64, y: f64, wire_awg: u32) -> NormalizedPoint {
        NormalizedPoint {
            volumetric_density: x,
            gravimetric_density: y,
            label: String::new(),
            category: Category::Racing,
            in_stock: true,
            wire_awg,
        }
    }

    #[test]
    fn plain_golden_snapshot_small() {
        let points = vec![point(1.0, 10.0, 10), point(2.0, 20.0, 12)];
        let txt = render_scatter(&points, 10, 5);
        let expected = concat!(
            "Plot: x=[0.95000, 2.05000] mAh/mm³ | y=[9.50, 20.50] mAh/g\n",
            "         ^\n",
            "          \n",
            "          \n",
            "          \n",
            "s         \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn clustered_golden_snapshot_small() {
        let points = vec![point(1.0, 10.0, 10), point(2.0, 20.0, 12)];
        let clusters = cluster_edges(&points);
        let txt = render_clustered_scatter(&points, &clusters, 10, 5);
        let expected = concat!(
            "Plot: x=[0.95000, 2.05000] mAh/mm³ | y=[9.50, 20.50] mAh/g\n",
            "        .^\n",
            "      ..  \n",
            "    ..    \n",
            "  ..      \n",
            "s.        \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn empty_plot_has_placeholder() {
        assert_eq!(render_scatter(&[], 20, 5), "Plot: (no points)\n");
    }

    #[test]
    fn single_point_is_centered() {
        let txt = render_scatter(&[point(5.0, 5.0, 0)], 11, 5);
        let rows: Vec<_> = txt.lines().skip(1).collect();
        assert_eq!(rows[2], "     o     ");
    }
}
